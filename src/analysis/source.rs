// Tue Jan 13 2026 - Alex

use crate::analysis::Instruction;
use crate::memory::{Address, MemoryError, MemoryRange};
use serde::Serialize;

/// `[start, end)` bounds of a function, optionally named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionRange {
    range: MemoryRange,
    name: Option<String>,
}

impl FunctionRange {
    pub fn new(start: Address, end: Address) -> Self {
        Self {
            range: MemoryRange::new(start, end),
            name: None,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn start(&self) -> Address {
        self.range.start()
    }

    pub fn end(&self) -> Address {
        self.range.end()
    }

    pub fn range(&self) -> MemoryRange {
        self.range
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn contains(&self, addr: Address) -> bool {
        self.range.contains(addr)
    }
}

/// Everything the analyses need from a disassembly backend.
///
/// Queries never fail loudly: an address that cannot be decoded or has no
/// successor simply yields `None`. Only raw byte reads surface an error.
pub trait InstructionSource {
    fn decode(&self, addr: Address) -> Option<Instruction>;

    fn next_code_address(&self, addr: Address) -> Option<Address>;

    fn previous_code_address(&self, addr: Address) -> Option<Address>;

    fn function_containing(&self, addr: Address) -> Option<FunctionRange>;

    fn all_functions(&self) -> Vec<FunctionRange>;

    /// Addresses of every instruction referencing `addr`, in ascending order.
    fn xrefs_to(&self, addr: Address) -> Vec<Address>;

    fn read_bytes(&self, addr: Address, len: usize) -> Result<Vec<u8>, MemoryError>;

    fn segment_by_name(&self, name: &str) -> Option<MemoryRange>;

    fn set_comment(&mut self, addr: Address, text: &str);

    fn set_name(&mut self, addr: Address, text: &str);

    fn function_by_name(&self, names: &[String]) -> Option<FunctionRange> {
        self.all_functions()
            .into_iter()
            .find(|f| f.name().map(|n| names.iter().any(|want| want == n)).unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_range_bounds() {
        let func = FunctionRange::new(Address::new(0x1000), Address::new(0x1040)).with_name("start");
        assert!(func.contains(Address::new(0x1000)));
        assert!(!func.contains(Address::new(0x1040)));
        assert_eq!(func.name(), Some("start"));
    }
}
