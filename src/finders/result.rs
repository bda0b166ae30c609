// Tue Jan 13 2026 - Alex

use crate::guid::Guid;
use crate::memory::Address;
use crate::services::ServiceTableKind;
use serde::{Deserialize, Serialize};

/// One call through a services table: `call [reg + table_offset]` at `address`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCallSite {
    pub table_offset: i64,
    pub address: Address,
}

impl ServiceCallSite {
    pub fn new(table_offset: i64, address: Address) -> Self {
        Self { table_offset, address }
    }

    pub fn service_name(&self, kind: ServiceTableKind) -> &'static str {
        kind.lookup(self.table_offset).name
    }
}

/// How the instruction at an xref touches the table global.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAccess {
    /// `mov reg, [table]`
    Load,
    /// `mov [table], reg`
    Store,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidLookup {
    Found { guid: Guid, loaded_at: Address },
    /// The GUID pointer was found but the data behind it is a sentinel.
    Invalid { guid: Guid, loaded_at: Address },
    NotFound,
}

impl GuidLookup {
    pub fn guid(&self) -> Option<Guid> {
        match self {
            GuidLookup::Found { guid, .. } => Some(*guid),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, GuidLookup::Found { .. })
    }
}

/// A known GUID constant located in the data segment.
#[derive(Debug, Clone, Serialize)]
pub struct DataGuidMatch {
    pub address: Address,
    pub guid: Guid,
    pub name: &'static str,
}
