// Fri Jan 16 2026 - Alex

use crate::memory::Address;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScanRange {
    start: Address,
    end: Address,
}

impl ScanRange {
    pub fn new(start: Address, end: Address) -> Self {
        assert!(end.as_usize() >= start.as_usize(), "end must be >= start");
        Self { start, end }
    }

    pub fn from_start_size(start: Address, size: usize) -> Self {
        Self::new(start, start + size)
    }

    pub fn start(&self) -> Address {
        self.start
    }

    pub fn end(&self) -> Address {
        self.end
    }

    pub fn size(&self) -> usize {
        self.end.as_usize() - self.start.as_usize()
    }

    pub fn contains(&self, addr: Address) -> bool {
        addr.as_usize() >= self.start.as_usize() && addr.as_usize() < self.end.as_usize()
    }

    pub fn is_empty(&self) -> bool {
        self.start.as_usize() >= self.end.as_usize()
    }
}

impl fmt::Display for ScanRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let range = ScanRange::from_start_size(Address::new(0x1000), 0x100);
        assert!(range.contains(Address::new(0x1000)));
        assert!(range.contains(Address::new(0x10FF)));
        assert!(!range.contains(Address::new(0x1100)));
        assert!(!range.contains(Address::new(0xFFF)));
    }

    #[test]
    fn test_size() {
        let range = ScanRange::new(Address::new(0x1000), Address::new(0x1800));
        assert_eq!(range.size(), 0x800);
        assert!(!range.is_empty());
    }
}
