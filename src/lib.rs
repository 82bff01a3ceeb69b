// Fri Jan 16 2026 - Alex

pub mod memory;
pub mod pattern;

pub use memory::{
    Address, MemoryError, MemoryRegion, ModuleHandle, Protection, RegionDescriber, ScanRange,
    SignatureScanner, SystemDescriber,
};
pub use pattern::{Pattern, PatternError};
