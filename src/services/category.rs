// Mon Feb 02 2026 - Alex

use crate::analysis::Register;
use crate::services::ServiceTableKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Services whose GUID argument is worth recovering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceCategory {
    InstallProtocol,
    ReinstallProtocol,
    HandleProtocol,
    RegisterProtocolNotify,
    OpenProtocol,
    LocateProtocol,
    InstallMultipleProtocolInterfaces,
    GetVariable,
    SetVariable,
}

pub struct CategoryEntry {
    pub kind: ServiceTableKind,
    pub offset: i64,
    pub category: ServiceCategory,
    /// Register holding the `EFI_GUID *` at the call; `None` when recovery is not attempted.
    pub guid_register: Option<Register>,
}

pub static CATEGORY_TABLE: &[CategoryEntry] = &[
    CategoryEntry {
        kind: ServiceTableKind::Boot,
        offset: 0x80,
        category: ServiceCategory::InstallProtocol,
        guid_register: Some(Register::Rdx),
    },
    CategoryEntry {
        kind: ServiceTableKind::Boot,
        offset: 0x88,
        category: ServiceCategory::ReinstallProtocol,
        guid_register: Some(Register::Rdx),
    },
    CategoryEntry {
        kind: ServiceTableKind::Boot,
        offset: 0x98,
        category: ServiceCategory::HandleProtocol,
        guid_register: Some(Register::Rdx),
    },
    CategoryEntry {
        kind: ServiceTableKind::Boot,
        offset: 0xA8,
        category: ServiceCategory::RegisterProtocolNotify,
        guid_register: Some(Register::Rcx),
    },
    CategoryEntry {
        kind: ServiceTableKind::Boot,
        offset: 0x118,
        category: ServiceCategory::OpenProtocol,
        guid_register: Some(Register::Rdx),
    },
    CategoryEntry {
        kind: ServiceTableKind::Boot,
        offset: 0x140,
        category: ServiceCategory::LocateProtocol,
        guid_register: Some(Register::Rcx),
    },
    CategoryEntry {
        kind: ServiceTableKind::Boot,
        offset: 0x148,
        category: ServiceCategory::InstallMultipleProtocolInterfaces,
        guid_register: Some(Register::Rdx),
    },
    CategoryEntry {
        kind: ServiceTableKind::Runtime,
        offset: 0x48,
        category: ServiceCategory::GetVariable,
        guid_register: Some(Register::Rdx),
    },
    CategoryEntry {
        kind: ServiceTableKind::Runtime,
        offset: 0x58,
        category: ServiceCategory::SetVariable,
        guid_register: None,
    },
];

impl ServiceCategory {
    pub fn categorize(kind: ServiceTableKind, offset: i64) -> Option<ServiceCategory> {
        CATEGORY_TABLE
            .iter()
            .find(|e| e.kind == kind && e.offset == offset)
            .map(|e| e.category)
    }

    fn entry(&self) -> Option<&'static CategoryEntry> {
        CATEGORY_TABLE.iter().find(|e| e.category == *self)
    }

    pub fn guid_register(&self) -> Option<Register> {
        self.entry().and_then(|e| e.guid_register)
    }

    pub fn table_kind(&self) -> ServiceTableKind {
        match self {
            ServiceCategory::GetVariable | ServiceCategory::SetVariable => ServiceTableKind::Runtime,
            _ => ServiceTableKind::Boot,
        }
    }

    /// Numeric code stored in the `type` column of the relational sink.
    /// Code 7 is reserved for an invalid boot service and never produced.
    pub fn code(&self) -> u32 {
        match self {
            ServiceCategory::InstallProtocol => 0,
            ServiceCategory::ReinstallProtocol => 1,
            ServiceCategory::HandleProtocol => 2,
            ServiceCategory::RegisterProtocolNotify => 3,
            ServiceCategory::OpenProtocol => 4,
            ServiceCategory::LocateProtocol => 5,
            ServiceCategory::InstallMultipleProtocolInterfaces => 6,
            ServiceCategory::GetVariable => 8,
            ServiceCategory::SetVariable => 9,
        }
    }

    pub fn is_install(&self) -> bool {
        matches!(
            self,
            ServiceCategory::InstallProtocol | ServiceCategory::InstallMultipleProtocolInterfaces
        )
    }

    /// Protocol services feed the GUID statistics; variable services only get comments.
    pub fn is_protocol(&self) -> bool {
        self.table_kind() == ServiceTableKind::Boot
    }

    pub fn name(&self) -> &'static str {
        match self {
            ServiceCategory::InstallProtocol => "InstallProtocolInterface",
            ServiceCategory::ReinstallProtocol => "ReinstallProtocolInterface",
            ServiceCategory::HandleProtocol => "HandleProtocol",
            ServiceCategory::RegisterProtocolNotify => "RegisterProtocolNotify",
            ServiceCategory::OpenProtocol => "OpenProtocol",
            ServiceCategory::LocateProtocol => "LocateProtocol",
            ServiceCategory::InstallMultipleProtocolInterfaces => "InstallMultipleProtocolInterfaces",
            ServiceCategory::GetVariable => "GetVariable",
            ServiceCategory::SetVariable => "SetVariable",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize() {
        assert_eq!(
            ServiceCategory::categorize(ServiceTableKind::Boot, 0x140),
            Some(ServiceCategory::LocateProtocol)
        );
        assert_eq!(
            ServiceCategory::categorize(ServiceTableKind::Runtime, 0x58),
            Some(ServiceCategory::SetVariable)
        );
        assert_eq!(ServiceCategory::categorize(ServiceTableKind::Boot, 0x58), None);
        assert_eq!(ServiceCategory::categorize(ServiceTableKind::Boot, 0x18), None);
    }

    #[test]
    fn test_category_offsets_name_the_same_service() {
        for entry in CATEGORY_TABLE {
            assert_eq!(entry.kind.lookup(entry.offset).name, entry.category.name());
            assert_eq!(entry.category.table_kind(), entry.kind);
        }
    }

    #[test]
    fn test_guid_registers() {
        assert_eq!(ServiceCategory::LocateProtocol.guid_register(), Some(Register::Rcx));
        assert_eq!(ServiceCategory::RegisterProtocolNotify.guid_register(), Some(Register::Rcx));
        assert_eq!(ServiceCategory::HandleProtocol.guid_register(), Some(Register::Rdx));
        assert_eq!(ServiceCategory::GetVariable.guid_register(), Some(Register::Rdx));
        assert_eq!(ServiceCategory::SetVariable.guid_register(), None);
    }

    #[test]
    fn test_install_categories() {
        assert!(ServiceCategory::InstallProtocol.is_install());
        assert!(ServiceCategory::InstallMultipleProtocolInterfaces.is_install());
        assert!(!ServiceCategory::ReinstallProtocol.is_install());
        assert_eq!(ServiceCategory::InstallMultipleProtocolInterfaces.code(), 6);
        assert_eq!(ServiceCategory::GetVariable.code(), 8);
    }

    #[test]
    fn test_protocol_categories() {
        assert!(ServiceCategory::LocateProtocol.is_protocol());
        assert!(ServiceCategory::InstallMultipleProtocolInterfaces.is_protocol());
        assert!(!ServiceCategory::GetVariable.is_protocol());
        assert!(!ServiceCategory::SetVariable.is_protocol());
    }
}
