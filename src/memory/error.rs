// Fri Jan 16 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("invalid scan range: offset {offset}, length {length:?}")]
    InvalidRange { offset: usize, length: Option<usize> },
    #[error("memory query failed at {address:#x}: {reason}")]
    QueryFailed { address: usize, reason: String },
    #[error("module resolution failed: {0}")]
    ModuleResolution(String),
    #[error("couldn't read memory mappings: {0}")]
    MapsUnavailable(#[from] std::io::Error),
}
