// Fri Jan 16 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("empty pattern")]
    Empty,
    #[error("signature length {signature} does not match mask length {mask}")]
    LengthMismatch { signature: usize, mask: usize },
    #[error("invalid hex token in pattern: {0}")]
    InvalidHex(String),
}
