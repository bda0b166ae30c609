// Mon Feb 02 2026 - Alex

use crate::services::tables::{BOOT_SERVICES, RUNTIME_SERVICES};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ServiceTableKind {
    Boot,
    Runtime,
}

impl ServiceTableKind {
    pub const ALL: [ServiceTableKind; 2] = [ServiceTableKind::Boot, ServiceTableKind::Runtime];

    /// Offset of this table's pointer inside `EFI_SYSTEM_TABLE`.
    pub fn system_table_field(&self) -> i64 {
        match self {
            ServiceTableKind::Boot => 0x60,
            ServiceTableKind::Runtime => 0x58,
        }
    }

    /// Symbol given to the global that stores the table pointer.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceTableKind::Boot => "BootServices_table",
            ServiceTableKind::Runtime => "RunTimeServices_table",
        }
    }

    pub fn comment_prefix(&self) -> &'static str {
        match self {
            ServiceTableKind::Boot => "BootServices",
            ServiceTableKind::Runtime => "RunTimeServices",
        }
    }

    /// Full table including the leading "failed" and trailing "empty" sentinel rows.
    pub fn descriptors(&self) -> &'static [ServiceDescriptor] {
        match self {
            ServiceTableKind::Boot => BOOT_SERVICES,
            ServiceTableKind::Runtime => RUNTIME_SERVICES,
        }
    }

    /// Real services only.
    pub fn services(&self) -> &'static [ServiceDescriptor] {
        let table = self.descriptors();
        table.get(1..table.len().saturating_sub(1)).unwrap_or(&[])
    }

    pub fn lookup(&self, offset: i64) -> &'static ServiceDescriptor {
        self.find(offset).unwrap_or(&self.descriptors()[0])
    }

    pub fn find(&self, offset: i64) -> Option<&'static ServiceDescriptor> {
        self.services().iter().find(|s| s.offset as i64 == offset)
    }

    pub fn is_known_offset(&self, offset: i64) -> bool {
        self.find(offset).is_some()
    }
}

impl fmt::Display for ServiceTableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceTableKind::Boot => write!(f, "Boot Services"),
            ServiceTableKind::Runtime => write!(f, "Runtime Services"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ServiceDescriptor {
    pub name: &'static str,
    pub offset: u32,
    pub arg_count: u32,
    pub prototype: &'static str,
    pub description: &'static str,
    pub parameters: &'static str,
}

impl ServiceDescriptor {
    pub fn is_sentinel(&self) -> bool {
        self.offset == 0
    }

    /// Lower-case column name used by the relational sink.
    pub fn column_name(&self) -> String {
        self.name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shapes() {
        assert_eq!(ServiceTableKind::Boot.services().len(), 44);
        assert_eq!(ServiceTableKind::Runtime.services().len(), 14);
        assert_eq!(ServiceTableKind::Boot.descriptors()[0].name, "FAILED BOOT SERVICE");
        assert_eq!(ServiceTableKind::Runtime.descriptors()[0].name, "FAILED RUNTIME SERVICE");
    }

    #[test]
    fn test_offsets_are_eight_byte_strides() {
        for kind in ServiceTableKind::ALL {
            for (i, service) in kind.services().iter().enumerate() {
                assert_eq!(service.offset as usize, 0x18 + i * 8, "{}", service.name);
            }
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(ServiceTableKind::Boot.lookup(0x140).name, "LocateProtocol");
        assert_eq!(ServiceTableKind::Boot.lookup(0x170).name, "CreateEventEx");
        assert_eq!(ServiceTableKind::Runtime.lookup(0x48).name, "GetVariable");
        assert_eq!(ServiceTableKind::Runtime.lookup(0x80).name, "QueryVariableInfo");
    }

    #[test]
    fn test_unknown_offset_yields_sentinel() {
        let desc = ServiceTableKind::Boot.lookup(0x999);
        assert!(desc.is_sentinel());
        assert_eq!(desc.name, "FAILED BOOT SERVICE");
        assert!(!ServiceTableKind::Runtime.is_known_offset(0));
    }
}
