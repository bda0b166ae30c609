// Tue Jan 13 2026 - Alex

use crate::analysis::{InstructionSource, Operand, Register};
use crate::finders::result::{ServiceCallSite, TableAccess};
use crate::memory::Address;
use crate::services::ServiceTableKind;

pub const DEFAULT_FORWARD_WINDOW: u64 = 64;

/// Walks every xref to a services-table global and pairs it with the first
/// `call [reg+off]` / `jmp [reg+off]` made through the register that carried
/// the table pointer. Displacements outside the catalog of `kind` are not
/// service calls and end the xref without a site.
pub struct ReferenceCollector<'a, S: InstructionSource + ?Sized> {
    source: &'a S,
    kind: ServiceTableKind,
    forward_window: u64,
}

impl<'a, S: InstructionSource + ?Sized> ReferenceCollector<'a, S> {
    pub fn new(source: &'a S, kind: ServiceTableKind) -> Self {
        Self {
            source,
            kind,
            forward_window: DEFAULT_FORWARD_WINDOW,
        }
    }

    /// Bytes scanned past an xref that sits outside any known function.
    pub fn with_forward_window(mut self, window: u64) -> Self {
        self.forward_window = window;
        self
    }

    pub fn collect_references(&self, table: Address) -> Vec<ServiceCallSite> {
        let xrefs = self.source.xrefs_to(table);
        log::debug!("{} xrefs to {} table {}", xrefs.len(), self.kind, table);

        xrefs
            .into_iter()
            .filter_map(|origin| {
                let site = self.follow_xref(table, origin);
                if site.is_none() {
                    log::debug!("No service call reached from xref {}", origin);
                }
                site
            })
            .collect()
    }

    fn follow_xref(&self, table: Address, origin: Address) -> Option<ServiceCallSite> {
        let (access, tracked) = self.classify(table, origin)?;

        let end = self
            .source
            .function_containing(origin)
            .map(|f| f.end())
            .unwrap_or_else(|| origin.saturating_add(self.forward_window));

        let mut addr = self.source.next_code_address(origin)?;
        while addr <= end {
            if let Some(insn) = self.source.decode(addr) {
                if insn.is_indirect_branch() {
                    if let Some(Operand::Memory { base, displacement }) = insn.destination() {
                        if *base == tracked {
                            if !self.kind.is_known_offset(*displacement) {
                                log::debug!("Offset {:#x} at {} is not a {} entry", displacement, addr, self.kind);
                                return None;
                            }
                            return Some(ServiceCallSite::new(*displacement, addr));
                        }
                    }
                }

                if access == TableAccess::Store && insn.writes_register(tracked) {
                    log::debug!("{} overwritten at {} before any call", tracked, addr);
                    return None;
                }
            }

            addr = self.source.next_code_address(addr)?;
        }

        None
    }

    fn classify(&self, table: Address, origin: Address) -> Option<(TableAccess, Register)> {
        let insn = self.source.decode(origin).filter(|i| i.is_move())?;
        match (insn.destination()?, insn.source()?) {
            (Operand::Register(reg), Operand::DirectMemory(src)) if *src == table => {
                Some((TableAccess::Load, *reg))
            }
            (Operand::DirectMemory(dst), Operand::Register(reg)) if *dst == table => {
                Some((TableAccess::Store, *reg))
            }
            _ => None,
        }
    }
}
