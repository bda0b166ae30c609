// Tue Jan 13 2026 - Alex

use crate::analysis::{FunctionRange, InstructionSource, Operand, Register};
use crate::memory::Address;
use crate::services::ServiceTableKind;

/// Finds the global a driver stashes `SystemTable->BootServices` (or
/// `->RuntimeServices`) into:
///
/// ```text
/// mov rax, [rdx+60h]        ; carrier register <- SystemTable->BootServices
/// mov cs:gBS, rax           ; table global <- carrier
/// ```
pub struct TableLocator<'a, S: InstructionSource + ?Sized> {
    source: &'a mut S,
}

impl<'a, S: InstructionSource + ?Sized> TableLocator<'a, S> {
    pub fn new(source: &'a mut S) -> Self {
        Self { source }
    }

    /// Scans the entry function first, then each function it calls directly.
    pub fn locate(&mut self, kind: ServiceTableKind, entry: &FunctionRange) -> Option<Address> {
        if let Some(addr) = self.locate_table(kind, entry.start(), entry.end()) {
            return Some(addr);
        }

        log::debug!(
            "{} not stored in entry function {}, trying callees",
            kind.label(),
            entry.start()
        );

        for callee in self.direct_callees(entry) {
            let Some(func) = self.source.function_containing(callee) else {
                continue;
            };
            if let Some(addr) = self.locate_table(kind, func.start(), func.end()) {
                log::debug!("{} found via callee {}", kind.label(), func.start());
                return Some(addr);
            }
        }

        None
    }

    /// Single forward pass over `[start, end]`; names the table global on success.
    pub fn locate_table(&mut self, kind: ServiceTableKind, start: Address, end: Address) -> Option<Address> {
        let table = self.find_table_store(kind.system_table_field(), start, end)?;
        log::debug!("{} at {}", kind.label(), table);
        self.source.set_name(table, kind.label());
        Some(table)
    }

    fn find_table_store(&self, field_offset: i64, start: Address, end: Address) -> Option<Address> {
        let mut carrier: Option<Register> = None;
        let mut addr = start;

        while addr <= end {
            if let Some(insn) = self.source.decode(addr).filter(|i| i.is_move()) {
                match (insn.destination(), insn.source()) {
                    (Some(Operand::Register(dst)), Some(Operand::Memory { displacement, .. }))
                        if *displacement == field_offset =>
                    {
                        carrier = Some(*dst);
                    }
                    (Some(Operand::DirectMemory(target)), Some(Operand::Register(src)))
                        if carrier == Some(*src) =>
                    {
                        return Some(*target);
                    }
                    _ => {}
                }
            }

            addr = self.source.next_code_address(addr)?;
        }

        None
    }

    /// Direct call targets after the function's first instruction.
    fn direct_callees(&self, func: &FunctionRange) -> Vec<Address> {
        let mut callees = Vec::new();
        let Some(mut addr) = self.source.next_code_address(func.start()) else {
            return callees;
        };

        while addr <= func.end() {
            if let Some(target) = self.source.decode(addr).and_then(|i| i.call_target()) {
                callees.push(target);
            }
            match self.source.next_code_address(addr) {
                Some(next) => addr = next,
                None => break,
            }
        }

        callees
    }
}
