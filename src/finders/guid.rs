// Tue Jan 13 2026 - Alex

use crate::analysis::InstructionSource;
use crate::finders::result::{GuidLookup, ServiceCallSite};
use crate::guid::Guid;
use crate::services::ServiceCategory;

pub const DEFAULT_BACKWARD_LIMIT: usize = 32;

/// Recovers the `EFI_GUID *` argument of a service call by walking back to
/// the `lea` that loaded the argument register.
pub struct GuidResolver<'a, S: InstructionSource + ?Sized> {
    source: &'a mut S,
    backward_limit: usize,
    comment_guid: bool,
}

impl<'a, S: InstructionSource + ?Sized> GuidResolver<'a, S> {
    pub fn new(source: &'a mut S) -> Self {
        Self {
            source,
            backward_limit: DEFAULT_BACKWARD_LIMIT,
            comment_guid: false,
        }
    }

    pub fn with_backward_limit(mut self, limit: usize) -> Self {
        self.backward_limit = limit;
        self
    }

    pub fn with_guid_comments(mut self, enabled: bool) -> Self {
        self.comment_guid = enabled;
        self
    }

    pub fn resolve_guid(&mut self, site: &ServiceCallSite, category: ServiceCategory) -> GuidLookup {
        let Some(register) = category.guid_register() else {
            return GuidLookup::NotFound;
        };

        let mut addr = site.address;
        for _ in 0..self.backward_limit {
            let Some(prev) = self.source.previous_code_address(addr) else {
                break;
            };
            addr = prev;

            let Some(insn) = self.source.decode(addr) else {
                continue;
            };
            if !insn.is_lea() || !insn.writes_register(register) {
                continue;
            }

            let Some(guid_addr) = insn.source().and_then(|op| op.direct_address()) else {
                log::debug!("{} at {} is not loaded from a static address", register, addr);
                return GuidLookup::NotFound;
            };

            let guid = match self.source.read_bytes(guid_addr, Guid::SIZE) {
                Ok(bytes) => match Guid::from_bytes(&bytes) {
                    Some(guid) => guid,
                    None => return GuidLookup::NotFound,
                },
                Err(e) => {
                    log::debug!("Failed to read GUID at {}: {}", guid_addr, e);
                    return GuidLookup::NotFound;
                }
            };

            if !guid.is_valid() {
                log::debug!("Invalid data retrieved, failed to identify GUID? Address: {}", addr);
                return GuidLookup::Invalid { guid, loaded_at: addr };
            }

            if self.comment_guid {
                self.source.set_comment(addr, &guid.to_string());
            }
            return GuidLookup::Found { guid, loaded_at: addr };
        }

        log::debug!("No GUID load found for {} call at {}", category, site.address);
        GuidLookup::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Instruction, ListingSource, Operand, Register};
    use crate::memory::Address;

    const GUID_ADDR: Address = Address::new(0x3000);
    const GUID_BYTES: [u8; 16] = [
        0xA1, 0x31, 0x1B, 0x5B, 0x62, 0x95, 0xD2, 0x11, 0x8E, 0x3F, 0x00, 0xA0, 0xC9, 0x69, 0x72, 0x3B,
    ];

    fn nops(from: u64, count: u64) -> Vec<Instruction> {
        (0..count).map(|i| Instruction::other(Address::new(from + i), vec![])).collect()
    }

    /// `lea reg, [GUID_ADDR]`, then `filler` instructions, then the call.
    fn listing(reg: Register, filler: u64, data: [u8; 16]) -> (ListingSource, ServiceCallSite) {
        let call_at = 0x1001 + filler;
        let src = ListingSource::new()
            .with_instruction(Instruction::lea(Address::new(0x1000), reg, Operand::DirectMemory(GUID_ADDR)))
            .with_instructions(nops(0x1001, filler))
            .with_instruction(Instruction::indirect_call(
                Address::new(call_at),
                Operand::Memory { base: Register::Rax, displacement: 0x140 },
            ))
            .with_segment(".data", GUID_ADDR, data.to_vec());
        (src, ServiceCallSite::new(0x140, Address::new(call_at)))
    }

    #[test]
    fn test_recovers_guid() {
        let (mut src, site) = listing(Register::Rcx, 4, GUID_BYTES);
        let lookup = GuidResolver::new(&mut src).resolve_guid(&site, ServiceCategory::LocateProtocol);
        let expected = Guid::from_bytes(&GUID_BYTES).unwrap();
        assert_eq!(lookup, GuidLookup::Found { guid: expected, loaded_at: Address::new(0x1000) });
    }

    #[test]
    fn test_limit_is_32_preceding_instructions() {
        // lea is the 32nd instruction before the call
        let (mut src, site) = listing(Register::Rcx, 31, GUID_BYTES);
        let lookup = GuidResolver::new(&mut src).resolve_guid(&site, ServiceCategory::LocateProtocol);
        assert!(lookup.is_found());

        // lea is the 33rd
        let (mut src, site) = listing(Register::Rcx, 32, GUID_BYTES);
        let lookup = GuidResolver::new(&mut src).resolve_guid(&site, ServiceCategory::LocateProtocol);
        assert_eq!(lookup, GuidLookup::NotFound);
    }

    #[test]
    fn test_wrong_register_slot() {
        let (mut src, site) = listing(Register::Rcx, 2, GUID_BYTES);
        let lookup = GuidResolver::new(&mut src).resolve_guid(&site, ServiceCategory::HandleProtocol);
        assert_eq!(lookup, GuidLookup::NotFound);
    }

    #[test]
    fn test_invalid_guid_stops_scan() {
        let mut zeroed = GUID_BYTES;
        zeroed[..4].copy_from_slice(&[0, 0, 0, 0]);
        let (src, site) = listing(Register::Rdx, 2, zeroed);
        // an older load of rdx must not be reached
        let mut src = src
            .with_instruction(Instruction::lea(
                Address::new(0x0F00),
                Register::Rdx,
                Operand::DirectMemory(Address::new(0x4000)),
            ))
            .with_segment(".rdata", Address::new(0x4000), GUID_BYTES.to_vec());
        let lookup = GuidResolver::new(&mut src).resolve_guid(&site, ServiceCategory::OpenProtocol);
        assert!(matches!(lookup, GuidLookup::Invalid { .. }));

        let mut ones = GUID_BYTES;
        ones[..4].copy_from_slice(&[0xFF; 4]);
        let (mut src, site) = listing(Register::Rdx, 2, ones);
        let lookup = GuidResolver::new(&mut src).resolve_guid(&site, ServiceCategory::OpenProtocol);
        assert_eq!(lookup.guid(), None);
    }

    #[test]
    fn test_set_variable_is_never_resolved() {
        let (mut src, site) = listing(Register::Rdx, 1, GUID_BYTES);
        let lookup = GuidResolver::new(&mut src).resolve_guid(&site, ServiceCategory::SetVariable);
        assert_eq!(lookup, GuidLookup::NotFound);
    }

    #[test]
    fn test_lea_from_stack_ends_resolution() {
        let mut src = ListingSource::new()
            .with_instruction(Instruction::lea(Address::new(0x0FF0), Register::Rcx, Operand::DirectMemory(GUID_ADDR)))
            .with_instruction(Instruction::lea(
                Address::new(0x1000),
                Register::Rcx,
                Operand::Memory { base: Register::Rsp, displacement: 0x20 },
            ))
            .with_instruction(Instruction::indirect_call(
                Address::new(0x1004),
                Operand::Memory { base: Register::Rax, displacement: 0x140 },
            ))
            .with_segment(".data", GUID_ADDR, GUID_BYTES.to_vec());
        let site = ServiceCallSite::new(0x140, Address::new(0x1004));
        let lookup = GuidResolver::new(&mut src).resolve_guid(&site, ServiceCategory::LocateProtocol);
        assert_eq!(lookup, GuidLookup::NotFound);
    }

    #[test]
    fn test_guid_comment_on_lea() {
        let (mut src, site) = listing(Register::Rcx, 1, GUID_BYTES);
        GuidResolver::new(&mut src)
            .with_guid_comments(true)
            .resolve_guid(&site, ServiceCategory::LocateProtocol);
        assert_eq!(src.comment(Address::new(0x1000)), Some("5B1B31A1-9562-11D2-8E3F-00A0C969723B"));

        let (mut src, site) = listing(Register::Rcx, 1, GUID_BYTES);
        GuidResolver::new(&mut src).resolve_guid(&site, ServiceCategory::LocateProtocol);
        assert_eq!(src.comment(Address::new(0x1000)), None);
    }
}
