// Tue Jan 13 2026 - Alex

use crate::memory::Address;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-open `[start, end)` span of the analyzed address space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemoryRange {
    start: Address,
    end: Address,
}

impl MemoryRange {
    pub fn new(start: Address, end: Address) -> Self {
        if end < start {
            return Self { start, end: start };
        }
        Self { start, end }
    }

    pub fn from_start_size(start: Address, size: u64) -> Self {
        Self::new(start, start.saturating_add(size))
    }

    pub fn start(&self) -> Address {
        self.start
    }

    pub fn end(&self) -> Address {
        self.end
    }

    pub fn size(&self) -> u64 {
        self.end.as_u64() - self.start.as_u64()
    }

    pub fn contains(&self, addr: Address) -> bool {
        addr.is_within_range(self.start, self.end)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl fmt::Display for MemoryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let range = MemoryRange::from_start_size(Address::new(0x1000), 0x100);
        assert!(range.contains(Address::new(0x1000)));
        assert!(range.contains(Address::new(0x10ff)));
        assert!(!range.contains(Address::new(0x1100)));
        assert_eq!(range.size(), 0x100);
    }

    #[test]
    fn test_inverted_bounds_collapse() {
        let range = MemoryRange::new(Address::new(0x2000), Address::new(0x1000));
        assert!(range.is_empty());
    }
}
