// Tue Jan 13 2026 - Alex

use crate::analysis::{FunctionRange, Instruction, InstructionSource, Operand};
use crate::memory::{Address, MemoryError, MemoryRange};
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};

struct Segment {
    name: String,
    range: MemoryRange,
    data: Vec<u8>,
}

/// In-memory instruction source built from a hand-written listing.
///
/// Instructions are ordered by address; next/previous walk that order. Unless
/// explicit xrefs are registered for an address, `xrefs_to` derives them from
/// every `DirectMemory` operand in the listing.
#[derive(Default)]
pub struct ListingSource {
    instructions: BTreeMap<Address, Instruction>,
    functions: Vec<FunctionRange>,
    xrefs: HashMap<Address, Vec<Address>>,
    segments: Vec<Segment>,
    comments: IndexMap<Address, String>,
    names: IndexMap<Address, String>,
}

impl ListingSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_instruction(mut self, insn: Instruction) -> Self {
        self.instructions.insert(insn.address(), insn);
        self
    }

    pub fn with_instructions<I: IntoIterator<Item = Instruction>>(mut self, insns: I) -> Self {
        for insn in insns {
            self.instructions.insert(insn.address(), insn);
        }
        self
    }

    pub fn with_function(mut self, func: FunctionRange) -> Self {
        self.functions.push(func);
        self
    }

    pub fn with_xref(mut self, target: Address, from: Address) -> Self {
        self.xrefs.entry(target).or_default().push(from);
        self
    }

    pub fn with_segment(mut self, name: &str, start: Address, data: Vec<u8>) -> Self {
        let range = MemoryRange::from_start_size(start, data.len() as u64);
        self.segments.push(Segment {
            name: name.to_string(),
            range,
            data,
        });
        self
    }

    pub fn comment(&self, addr: Address) -> Option<&str> {
        self.comments.get(&addr).map(|s| s.as_str())
    }

    pub fn name(&self, addr: Address) -> Option<&str> {
        self.names.get(&addr).map(|s| s.as_str())
    }

    pub fn comments(&self) -> &IndexMap<Address, String> {
        &self.comments
    }

    pub fn names(&self) -> &IndexMap<Address, String> {
        &self.names
    }
}

impl InstructionSource for ListingSource {
    fn decode(&self, addr: Address) -> Option<Instruction> {
        self.instructions.get(&addr).cloned()
    }

    fn next_code_address(&self, addr: Address) -> Option<Address> {
        self.instructions
            .range((std::ops::Bound::Excluded(addr), std::ops::Bound::Unbounded))
            .next()
            .map(|(a, _)| *a)
    }

    fn previous_code_address(&self, addr: Address) -> Option<Address> {
        self.instructions.range(..addr).next_back().map(|(a, _)| *a)
    }

    fn function_containing(&self, addr: Address) -> Option<FunctionRange> {
        self.functions.iter().find(|f| f.contains(addr)).cloned()
    }

    fn all_functions(&self) -> Vec<FunctionRange> {
        self.functions.clone()
    }

    fn xrefs_to(&self, addr: Address) -> Vec<Address> {
        if let Some(explicit) = self.xrefs.get(&addr) {
            return explicit.clone();
        }
        self.instructions
            .values()
            .filter(|insn| insn.operands().iter().any(|op| *op == Operand::DirectMemory(addr)))
            .map(|insn| insn.address())
            .collect()
    }

    fn read_bytes(&self, addr: Address, len: usize) -> Result<Vec<u8>, MemoryError> {
        let segment = self
            .segments
            .iter()
            .find(|s| s.range.contains(addr))
            .ok_or(MemoryError::OutOfBounds(addr.as_u64()))?;
        let offset = (addr.as_u64() - segment.range.start().as_u64()) as usize;
        let end = offset.checked_add(len).ok_or(MemoryError::OutOfBounds(addr.as_u64()))?;
        segment
            .data
            .get(offset..end)
            .map(|bytes| bytes.to_vec())
            .ok_or(MemoryError::OutOfBounds(addr.as_u64()))
    }

    fn segment_by_name(&self, name: &str) -> Option<MemoryRange> {
        self.segments.iter().find(|s| s.name == name).map(|s| s.range)
    }

    fn set_comment(&mut self, addr: Address, text: &str) {
        self.comments.insert(addr, text.to_string());
    }

    fn set_name(&mut self, addr: Address, text: &str) {
        self.names.insert(addr, text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Register;

    fn listing() -> ListingSource {
        ListingSource::new().with_instructions(vec![
            Instruction::mov(
                Address::new(0x1000),
                Operand::Register(Register::Rax),
                Operand::DirectMemory(Address::new(0x5000)),
            ),
            Instruction::other(Address::new(0x1007), vec![]),
            Instruction::other(Address::new(0x1008), vec![]),
        ])
    }

    #[test]
    fn test_walks_in_address_order() {
        let src = listing();
        assert_eq!(src.next_code_address(Address::new(0x1000)), Some(Address::new(0x1007)));
        assert_eq!(src.previous_code_address(Address::new(0x1008)), Some(Address::new(0x1007)));
        assert_eq!(src.previous_code_address(Address::new(0x1000)), None);
        assert_eq!(src.next_code_address(Address::new(0x1008)), None);
    }

    #[test]
    fn test_implicit_xrefs_from_direct_memory() {
        let src = listing();
        assert_eq!(src.xrefs_to(Address::new(0x5000)), vec![Address::new(0x1000)]);
        assert!(src.xrefs_to(Address::new(0x6000)).is_empty());
    }

    #[test]
    fn test_read_bytes_within_segment() {
        let src = ListingSource::new().with_segment(".data", Address::new(0x2000), vec![1, 2, 3, 4]);
        assert_eq!(src.read_bytes(Address::new(0x2001), 2).unwrap(), vec![2, 3]);
        assert!(src.read_bytes(Address::new(0x2002), 4).is_err());
        assert_eq!(
            src.segment_by_name(".data"),
            Some(MemoryRange::new(Address::new(0x2000), Address::new(0x2004)))
        );
    }
}
