// Sat Jan 17 2026 - Alex

use crate::memory::{Address, MemoryError};
use log::debug;
use std::ffi::{c_void, CString};

/// A resolved module of the current process, acquired from an address that
/// lies inside it. Holds the native module handle for its lifetime so the
/// module cannot be unloaded mid-scan; the handle is released on drop.
pub struct ModuleHandle {
    #[cfg(windows)]
    handle: windows_sys::Win32::Foundation::HMODULE,
    #[cfg(unix)]
    handle: *mut c_void,
    base: Address,
    size: usize,
}

impl ModuleHandle {
    #[cfg(windows)]
    pub fn from_address(contained: *const c_void) -> Result<Self, MemoryError> {
        use windows_sys::Win32::Foundation::{FreeLibrary, GetLastError, HMODULE};
        use windows_sys::Win32::System::LibraryLoader::{
            GetModuleHandleExA, GET_MODULE_HANDLE_EX_FLAG_FROM_ADDRESS,
        };
        use windows_sys::Win32::System::ProcessStatus::{K32GetModuleInformation, MODULEINFO};
        use windows_sys::Win32::System::Threading::GetCurrentProcess;

        let mut handle: HMODULE = 0;
        let ok = unsafe {
            GetModuleHandleExA(
                GET_MODULE_HANDLE_EX_FLAG_FROM_ADDRESS,
                contained as *const u8,
                &mut handle,
            )
        };
        if ok == 0 {
            return Err(MemoryError::ModuleResolution(format!(
                "couldn't retrieve module handle, error {:#x}",
                unsafe { GetLastError() }
            )));
        }

        let mut info: MODULEINFO = unsafe { std::mem::zeroed() };
        let ok = unsafe {
            K32GetModuleInformation(
                GetCurrentProcess(),
                handle,
                &mut info,
                std::mem::size_of::<MODULEINFO>() as u32,
            )
        };
        if ok == 0 {
            let error = unsafe { GetLastError() };
            unsafe { FreeLibrary(handle) };
            return Err(MemoryError::ModuleResolution(format!(
                "couldn't retrieve module information, error {:#x}",
                error
            )));
        }

        let module = Self {
            handle,
            base: Address::from_ptr(info.lpBaseOfDll),
            size: info.SizeOfImage as usize,
        };
        debug!("resolved module @ {} size {:#x}", module.base, module.size);
        Ok(module)
    }

    #[cfg(unix)]
    pub fn from_address(contained: *const c_void) -> Result<Self, MemoryError> {
        use crate::memory::maps;

        let mut info: libc::Dl_info = unsafe { std::mem::zeroed() };
        if unsafe { libc::dladdr(contained, &mut info) } == 0 {
            return Err(MemoryError::ModuleResolution(
                "couldn't resolve a module from the address".to_string(),
            ));
        }

        let handle = unsafe { libc::dlopen(info.dli_fname, libc::RTLD_NOW) };
        if handle.is_null() {
            return Err(MemoryError::ModuleResolution(
                "couldn't open the module handle".to_string(),
            ));
        }

        let base = Address::from_ptr(info.dli_fbase);
        let contents = match maps::read_self_maps() {
            Ok(contents) => contents,
            Err(err) => {
                unsafe { libc::dlclose(handle) };
                return Err(MemoryError::MapsUnavailable(err));
            }
        };
        let size = match maps::module_extent(&contents, base) {
            Some(size) => size,
            None => {
                unsafe { libc::dlclose(handle) };
                return Err(MemoryError::ModuleResolution(format!(
                    "no mapping starts at module base {}",
                    base
                )));
            }
        };

        let module = Self { handle, base, size };
        debug!("resolved module @ {} size {:#x}", module.base, module.size);
        Ok(module)
    }

    pub fn base(&self) -> Address {
        self.base
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Look up an exported symbol by name. Absence is `None`, not an error.
    #[cfg(windows)]
    pub fn find_symbol(&self, name: &str) -> Option<Address> {
        use windows_sys::Win32::System::LibraryLoader::GetProcAddress;

        let name = CString::new(name).ok()?;
        let proc = unsafe { GetProcAddress(self.handle, name.as_ptr() as *const u8) };
        proc.map(|f| Address::new(f as usize))
    }

    /// Look up an exported symbol by name. Absence is `None`, not an error.
    #[cfg(unix)]
    pub fn find_symbol(&self, name: &str) -> Option<Address> {
        let name = CString::new(name).ok()?;
        let sym = unsafe { libc::dlsym(self.handle, name.as_ptr()) };
        if sym.is_null() {
            None
        } else {
            Some(Address::from_ptr(sym as *const u8))
        }
    }
}

impl Drop for ModuleHandle {
    fn drop(&mut self) {
        #[cfg(windows)]
        unsafe {
            windows_sys::Win32::Foundation::FreeLibrary(self.handle);
        }
        #[cfg(unix)]
        unsafe {
            libc::dlclose(self.handle);
        }
    }
}
