// Sat Jan 17 2026 - Alex

use crate::memory::{Address, MemoryError, ModuleHandle, RegionDescriber, SystemDescriber};
use crate::pattern::Pattern;
use log::{debug, trace};

/// Masked signature scan over `[base, base + module_size)` of the current
/// process, driven by live region state from a [`RegionDescriber`].
///
/// Regions that are not readable are skipped whole. A match must lie
/// entirely inside one OS-reported region: a partial match reaching the
/// region edge is abandoned, never continued into the next region, even
/// when the neighbouring region is contiguous and readable.
pub struct SignatureScanner<D: RegionDescriber> {
    base: Address,
    module_size: usize,
    describer: D,
}

impl SignatureScanner<SystemDescriber> {
    /// Scanner over a resolved module, using the host OS mapping source.
    pub fn for_module(module: &ModuleHandle) -> Self {
        Self::new(module.base(), module.size(), SystemDescriber)
    }
}

impl<D: RegionDescriber> SignatureScanner<D> {
    pub fn new(base: Address, module_size: usize, describer: D) -> Self {
        Self {
            base,
            module_size,
            describer,
        }
    }

    pub fn base(&self) -> Address {
        self.base
    }

    pub fn module_size(&self) -> usize {
        self.module_size
    }

    /// Find the first occurrence of `pattern` in the whole scan range.
    pub fn find(&self, pattern: &Pattern) -> Result<Option<Address>, MemoryError> {
        self.find_in(pattern, 0, None)
    }

    /// Find the first occurrence of `pattern`, starting `offset` bytes past
    /// the base and searching at most `length` bytes (`None` searches to the
    /// end of the module; an explicit length is clamped to it).
    ///
    /// Not finding the pattern is `Ok(None)`. Only a failed region query
    /// aborts the scan with an error.
    pub fn find_in(
        &self,
        pattern: &Pattern,
        offset: usize,
        length: Option<usize>,
    ) -> Result<Option<Address>, MemoryError> {
        if offset >= self.module_size {
            return Err(MemoryError::InvalidRange { offset, length });
        }
        let searched = length.unwrap_or(usize::MAX).min(self.module_size - offset);
        if searched == 0 {
            return Err(MemoryError::InvalidRange { offset, length });
        }

        let mut cursor = self.base + offset;
        let end = cursor + searched;
        // Matches may run past `end` but never past the module envelope.
        let envelope_end = self.base + self.module_size;

        'regions: while cursor < end {
            let region = self.describer.describe(cursor)?;
            let region_end = region.end();

            if !region.is_readable() {
                trace!("skipping unreadable region {}", region);
                cursor = region_end;
                continue;
            }

            // Never dereference past the region or the module envelope.
            let probe_limit = region_end.min(envelope_end);

            while cursor < region_end && cursor < end {
                let mut matched = 0;
                while matched < pattern.len() {
                    let probe = cursor + matched;
                    if probe >= probe_limit {
                        // The pattern no longer fits in front of the region
                        // edge; no later start in this region can either.
                        cursor = region_end;
                        continue 'regions;
                    }

                    let byte = unsafe { *probe.as_ptr() };
                    if !pattern.accepts(matched, byte) {
                        break;
                    }
                    matched += 1;
                }

                if matched == pattern.len() {
                    debug!("found signature [{}] @ {}", pattern, cursor);
                    return Ok(Some(cursor));
                }
                cursor = cursor + 1;
            }
        }

        Ok(None)
    }
}
