// Sat Jan 17 2026 - Alex

use crate::memory::{Address, MemoryError, MemoryRegion};

/// Describes the live memory region containing an address.
///
/// The scanner dereferences memory inside regions reported readable, so an
/// implementation must only report a region readable when every byte of
/// `[start, end)` can be read without faulting at query time.
pub trait RegionDescriber {
    fn describe(&self, addr: Address) -> Result<MemoryRegion, MemoryError>;
}

/// The host OS mapping source: `VirtualQuery` on windows, the
/// `/proc/self/maps` table elsewhere. Both produce the same
/// [`MemoryRegion`] contract.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemDescriber;

#[cfg(unix)]
impl RegionDescriber for SystemDescriber {
    fn describe(&self, addr: Address) -> Result<MemoryRegion, MemoryError> {
        use crate::memory::maps;

        let contents = maps::read_self_maps()?;
        match maps::find_containing(&contents, addr) {
            Some(entry) => Ok(entry.region()),
            None => Err(MemoryError::QueryFailed {
                address: addr.as_usize(),
                reason: "no mapping contains the address".to_string(),
            }),
        }
    }
}

#[cfg(windows)]
impl RegionDescriber for SystemDescriber {
    fn describe(&self, addr: Address) -> Result<MemoryRegion, MemoryError> {
        use crate::memory::{Protection, ScanRange};
        use std::ffi::c_void;
        use windows_sys::Win32::Foundation::GetLastError;
        use windows_sys::Win32::System::Memory::{
            VirtualQuery, MEMORY_BASIC_INFORMATION, MEM_COMMIT, PAGE_EXECUTE, PAGE_EXECUTE_READ,
            PAGE_EXECUTE_READWRITE, PAGE_EXECUTE_WRITECOPY, PAGE_GUARD, PAGE_NOCACHE,
            PAGE_READONLY, PAGE_READWRITE, PAGE_WRITECOMBINE, PAGE_WRITECOPY,
        };

        let mut info: MEMORY_BASIC_INFORMATION = unsafe { std::mem::zeroed() };
        let written = unsafe {
            VirtualQuery(
                addr.as_ptr() as *const c_void,
                &mut info,
                std::mem::size_of::<MEMORY_BASIC_INFORMATION>(),
            )
        };
        if written == 0 {
            return Err(MemoryError::QueryFailed {
                address: addr.as_usize(),
                reason: format!("VirtualQuery failed, error {:#x}", unsafe { GetLastError() }),
            });
        }

        let mut protection = Protection::empty();
        // Strip the modifier bits so the base protection can be matched.
        let base = info.Protect & !(PAGE_GUARD | PAGE_NOCACHE | PAGE_WRITECOMBINE);
        match base {
            PAGE_READONLY => protection |= Protection::READ,
            PAGE_READWRITE => protection |= Protection::READ | Protection::WRITE,
            PAGE_EXECUTE => protection |= Protection::EXECUTE,
            PAGE_EXECUTE_READ => protection |= Protection::READ | Protection::EXECUTE,
            PAGE_EXECUTE_READWRITE => {
                protection |= Protection::READ | Protection::WRITE | Protection::EXECUTE
            }
            PAGE_WRITECOPY => {
                protection |= Protection::READ | Protection::WRITE | Protection::COPY_ON_WRITE
            }
            PAGE_EXECUTE_WRITECOPY => {
                protection |= Protection::READ
                    | Protection::WRITE
                    | Protection::EXECUTE
                    | Protection::COPY_ON_WRITE
            }
            _ => {}
        }
        if info.Protect & PAGE_GUARD != 0 {
            protection |= Protection::GUARD;
        }
        if info.State & MEM_COMMIT != 0 {
            protection |= Protection::COMMITTED;
        }

        Ok(MemoryRegion::new(
            ScanRange::from_start_size(Address::from_ptr(info.BaseAddress), info.RegionSize),
            protection,
        ))
    }
}
