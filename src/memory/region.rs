// Fri Jan 16 2026 - Alex

use crate::memory::{Address, Protection, ScanRange};
use std::fmt;

/// Snapshot of one OS-reported mapping. Carries no OS resources and is only
/// valid as a description of the address space at query time.
#[derive(Debug, Clone, Copy)]
pub struct MemoryRegion {
    range: ScanRange,
    protection: Protection,
}

impl MemoryRegion {
    pub fn new(range: ScanRange, protection: Protection) -> Self {
        Self { range, protection }
    }

    pub fn range(&self) -> &ScanRange {
        &self.range
    }

    pub fn protection(&self) -> Protection {
        self.protection
    }

    pub fn start(&self) -> Address {
        self.range.start()
    }

    pub fn end(&self) -> Address {
        self.range.end()
    }

    pub fn size(&self) -> usize {
        self.range.size()
    }

    pub fn contains(&self, addr: Address) -> bool {
        self.range.contains(addr)
    }

    pub fn is_readable(&self) -> bool {
        self.protection.is_readable()
    }
}

impl fmt::Display for MemoryRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.range, self.protection)
    }
}
