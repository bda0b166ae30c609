// Tue Jan 15 2026 - Alex

pub mod analysis;
pub mod config;
pub mod finders;
pub mod guid;
pub mod memory;
pub mod orchestrator;
pub mod output;
pub mod services;
pub mod utils;

pub use analysis::{InstructionSource, ListingSource, X64ImageSource};
pub use config::Config;
pub use finders::FinderError;
pub use guid::Guid;
pub use memory::{Address, PeImage};
pub use orchestrator::{AnalysisSession, Coordinator};
pub use output::OutputManager;
