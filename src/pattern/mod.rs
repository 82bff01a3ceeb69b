// Fri Jan 16 2026 - Alex

pub mod error;
pub mod pattern;

pub use error::PatternError;
pub use pattern::Pattern;
