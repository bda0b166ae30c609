// Tue Jan 13 2026 - Alex

use crate::memory::MemoryError;
use crate::services::ServiceTableKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("Entry point function not found (looked for {0})")]
    EntryPointNotFound(String),
    #[error("Segment not found: {0}")]
    SegmentNotFound(String),
    #[error("Unsupported image: {0}")]
    UnsupportedImage(String),
    #[error("{0} table not found")]
    TableNotFound(ServiceTableKind),
    #[error("Memory error: {0}")]
    Memory(#[from] MemoryError),
}

impl FinderError {
    /// Every variant ends the run; this only separates "the binary is not
    /// what we expect" from "the binary has no table we can use".
    pub fn is_structural(&self) -> bool {
        !matches!(self, FinderError::TableNotFound(_))
    }
}
