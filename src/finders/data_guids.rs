// Tue Jan 13 2026 - Alex

use crate::analysis::InstructionSource;
use crate::finders::result::DataGuidMatch;
use crate::guid::{Guid, KnownGuid, KNOWN_GUIDS};
use crate::memory::{Address, MemoryRange};

pub const DATA_SCAN_STRIDE: u64 = 8;

/// Strides a data segment looking for well-known GUID constants. Windows
/// overlap by half, so GUIDs aligned to 8 but not 16 are still seen.
pub struct DataGuidScanner<'a, S: InstructionSource + ?Sized> {
    source: &'a mut S,
    known: &'a [KnownGuid],
}

impl<'a, S: InstructionSource + ?Sized> DataGuidScanner<'a, S> {
    pub fn new(source: &'a mut S) -> Self {
        Self {
            source,
            known: KNOWN_GUIDS.as_slice(),
        }
    }

    pub fn with_known_guids(mut self, known: &'a [KnownGuid]) -> Self {
        self.known = known;
        self
    }

    pub fn scan(&mut self, segment: MemoryRange) -> Vec<DataGuidMatch> {
        let mut matches = Vec::new();
        let mut addr = segment.start();

        while let Some(window_end) = addr.checked_add(Guid::SIZE as u64) {
            if window_end > segment.end() {
                break;
            }

            if let Some(found) = self.check(addr) {
                log::debug!("Found GUID at {} - {}", addr, found.name);
                self.source.set_comment(addr, &found.guid.to_string());
                self.source.set_name(addr, found.name);
                matches.push(found);
            }

            addr = addr + DATA_SCAN_STRIDE;
        }

        matches
    }

    fn check(&self, addr: Address) -> Option<DataGuidMatch> {
        let bytes = self.source.read_bytes(addr, Guid::SIZE).ok()?;
        let guid = Guid::from_bytes(&bytes).filter(|g| g.is_valid())?;
        self.known
            .iter()
            .find(|k| k.guid == guid)
            .map(|k| DataGuidMatch {
                address: addr,
                guid,
                name: k.name,
            })
    }
}
