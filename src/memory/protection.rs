// Fri Jan 16 2026 - Alex

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Protection and state bits of a memory region, unified across hosts.
    /// COMMITTED means the OS reported the region as present/mapped, GUARD
    /// marks a page whose access is intentionally trapped.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Protection: u32 {
        const READ          = 1 << 0;
        const WRITE         = 1 << 1;
        const EXECUTE       = 1 << 2;
        const PRIVATE       = 1 << 3;
        const SHARED        = 1 << 4;
        const COMMITTED     = 1 << 5;
        const GUARD         = 1 << 6;
        const COPY_ON_WRITE = 1 << 7;
    }
}

impl Protection {
    /// Parse a `/proc/self/maps` permission field such as `r-xp`.
    /// A mapping listed there is present, so COMMITTED is implied.
    pub fn from_perms(perms: &str) -> Self {
        let mut protection = Protection::COMMITTED;
        for c in perms.chars() {
            match c {
                'r' => protection |= Protection::READ,
                'w' => protection |= Protection::WRITE,
                'x' => protection |= Protection::EXECUTE,
                'p' => protection |= Protection::PRIVATE,
                's' => protection |= Protection::SHARED,
                _ => {}
            }
        }
        protection
    }

    /// Whether memory under this protection can be dereferenced without
    /// faulting: present, carries the read bit, and is not guard-trapped.
    pub fn is_readable(self) -> bool {
        self.contains(Protection::READ | Protection::COMMITTED)
            && !self.contains(Protection::GUARD)
    }

    pub fn is_writable(self) -> bool {
        self.contains(Protection::WRITE | Protection::COMMITTED)
    }

    pub fn is_executable(self) -> bool {
        self.contains(Protection::EXECUTE | Protection::COMMITTED)
    }
}

impl fmt::Display for Protection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            if self.contains(Protection::READ) { 'r' } else { '-' },
            if self.contains(Protection::WRITE) { 'w' } else { '-' },
            if self.contains(Protection::EXECUTE) { 'x' } else { '-' },
            if self.contains(Protection::SHARED) {
                's'
            } else if self.contains(Protection::PRIVATE) {
                'p'
            } else {
                '-'
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_perms() {
        let prot = Protection::from_perms("r-xp");
        assert!(prot.contains(Protection::READ));
        assert!(!prot.contains(Protection::WRITE));
        assert!(prot.contains(Protection::EXECUTE));
        assert!(prot.contains(Protection::PRIVATE));
        assert!(prot.contains(Protection::COMMITTED));
    }

    #[test]
    fn test_readable_verdicts() {
        assert!(Protection::from_perms("r--p").is_readable());
        assert!(Protection::from_perms("rw-s").is_readable());
        assert!(!Protection::from_perms("--xp").is_readable());
        assert!(!Protection::from_perms("---p").is_readable());
    }

    #[test]
    fn test_guard_is_not_readable() {
        let prot = Protection::READ | Protection::COMMITTED | Protection::GUARD;
        assert!(!prot.is_readable());
    }

    #[test]
    fn test_uncommitted_is_not_readable() {
        let prot = Protection::READ;
        assert!(!prot.is_readable());
    }

    #[test]
    fn test_display() {
        assert_eq!(Protection::from_perms("rw-p").to_string(), "rw-p");
        assert_eq!(Protection::from_perms("r-xs").to_string(), "r-xs");
    }
}
