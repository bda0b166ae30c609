// Tue Jan 13 2026 - Alex

pub mod decoder;
pub mod instruction;
pub mod listing;
pub mod source;

pub use decoder::{X64ImageSource, ENTRY_FUNCTION_NAME};
pub use instruction::{Instruction, InstructionKind, Operand, Register};
pub use listing::ListingSource;
pub use source::{FunctionRange, InstructionSource};
