// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Binary parse error: {0}")]
    BinaryParseError(String),
    #[error("Out of bounds: address 0x{0:x} not mapped")]
    OutOfBounds(u64),
    #[error("Segment not found: {0}")]
    SegmentNotFound(String),
    #[error("Not supported: {0}")]
    NotSupported(String),
}
