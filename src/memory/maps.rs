// Fri Jan 16 2026 - Alex

use crate::memory::{Address, MemoryRegion, Protection, ScanRange};

/// One record of a `/proc/self/maps` style table:
/// `start-end perms offset dev inode path`.
#[derive(Debug, Clone)]
pub struct MapsEntry {
    pub start: usize,
    pub end: usize,
    pub protection: Protection,
    pub offset: u64,
    pub inode: u64,
    pub path: Option<String>,
}

impl MapsEntry {
    /// Parse a single maps line. Malformed lines yield `None` so callers can
    /// skip them the way the kernel table is normally consumed.
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line.split_whitespace();

        let range = fields.next()?;
        let (start, end) = range.split_once('-')?;
        let start = usize::from_str_radix(start, 16).ok()?;
        let end = usize::from_str_radix(end, 16).ok()?;
        if end <= start {
            return None;
        }

        let perms = fields.next()?;
        let protection = Protection::from_perms(perms);

        let offset = u64::from_str_radix(fields.next()?, 16).ok()?;
        let _dev = fields.next()?;
        let inode = fields.next()?.parse::<u64>().ok()?;
        let path = fields.next().map(|p| p.to_string());

        Some(Self {
            start,
            end,
            protection,
            offset,
            inode,
            path,
        })
    }

    pub fn contains(&self, addr: Address) -> bool {
        let addr = addr.as_usize();
        addr >= self.start && addr < self.end
    }

    pub fn region(&self) -> MemoryRegion {
        MemoryRegion::new(
            ScanRange::new(Address::new(self.start), Address::new(self.end)),
            self.protection,
        )
    }
}

/// Find the record whose `[start, end)` interval contains `addr`.
pub fn find_containing(contents: &str, addr: Address) -> Option<MapsEntry> {
    contents
        .lines()
        .filter_map(MapsEntry::parse)
        .find(|entry| entry.contains(addr))
}

/// Total mapped size of the module whose first mapping starts at `base`:
/// the contiguous run of records sharing that mapping's inode.
pub fn module_extent(contents: &str, base: Address) -> Option<usize> {
    let mut module_inode = None;
    let mut module_end = 0usize;

    for entry in contents.lines().filter_map(MapsEntry::parse) {
        match module_inode {
            None => {
                if entry.start == base.as_usize() {
                    module_inode = Some(entry.inode);
                    module_end = entry.end;
                }
            }
            Some(inode) => {
                if entry.inode != inode {
                    break;
                }
                module_end = entry.end;
            }
        }
    }

    module_inode.map(|_| module_end - base.as_usize())
}

/// Read the live mapping table for the current process.
#[cfg(unix)]
pub fn read_self_maps() -> std::io::Result<String> {
    std::fs::read_to_string("/proc/self/maps")
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAPS: &str = "\
5593a0000000-5593a0004000 r--p 00000000 08:01 9181032 /usr/bin/demo
5593a0004000-5593a0012000 r-xp 00004000 08:01 9181032 /usr/bin/demo
5593a0012000-5593a0015000 ---p 00012000 08:01 9181032 /usr/bin/demo
5593a0015000-5593a0017000 rw-p 00014000 08:01 9181032 /usr/bin/demo
7f1200000000-7f1200021000 rw-p 00000000 00:00 0
7f1200021000-7f1200040000 ---p 00000000 00:00 0
7ffdc0000000-7ffdc0022000 rw-p 00000000 00:00 0 [stack]
";

    #[test]
    fn test_parse_line() {
        let entry =
            MapsEntry::parse("5593a0004000-5593a0012000 r-xp 00004000 08:01 9181032 /usr/bin/demo")
                .unwrap();
        assert_eq!(entry.start, 0x5593a0004000);
        assert_eq!(entry.end, 0x5593a0012000);
        assert!(entry.protection.is_readable());
        assert!(entry.protection.is_executable());
        assert_eq!(entry.offset, 0x4000);
        assert_eq!(entry.inode, 9181032);
        assert_eq!(entry.path.as_deref(), Some("/usr/bin/demo"));
    }

    #[test]
    fn test_parse_anonymous_mapping() {
        let entry = MapsEntry::parse("7f1200000000-7f1200021000 rw-p 00000000 00:00 0").unwrap();
        assert_eq!(entry.inode, 0);
        assert!(entry.path.is_none());
    }

    #[test]
    fn test_parse_malformed_line() {
        assert!(MapsEntry::parse("not a maps line").is_none());
        assert!(MapsEntry::parse("").is_none());
        assert!(MapsEntry::parse("5593a0004000-5593a0001000 r-xp 0 08:01 1 /x").is_none());
    }

    #[test]
    fn test_find_containing() {
        let entry = find_containing(MAPS, Address::new(0x5593a0004100)).unwrap();
        assert_eq!(entry.start, 0x5593a0004000);
        assert!(entry.protection.is_executable());

        let entry = find_containing(MAPS, Address::new(0x5593a0012000)).unwrap();
        assert!(!entry.protection.is_readable());

        assert!(find_containing(MAPS, Address::new(0x1000)).is_none());
    }

    #[test]
    fn test_module_extent_follows_inode_run() {
        let size = module_extent(MAPS, Address::new(0x5593a0000000)).unwrap();
        assert_eq!(size, 0x5593a0017000 - 0x5593a0000000);
    }

    #[test]
    fn test_module_extent_from_inner_mapping() {
        // A base that matches a later record measures from that record on.
        let size = module_extent(MAPS, Address::new(0x5593a0004000)).unwrap();
        assert_eq!(size, 0x5593a0017000 - 0x5593a0004000);
    }

    #[test]
    fn test_module_extent_unknown_base() {
        assert!(module_extent(MAPS, Address::new(0x1000)).is_none());
    }
}
