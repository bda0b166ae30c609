// Tue Jan 13 2026 - Alex

pub mod address;
pub mod error;
pub mod image;
pub mod range;

pub use address::Address;
pub use error::MemoryError;
pub use image::{ImageSection, PeImage};
pub use range::MemoryRange;
