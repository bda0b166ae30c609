// Tue Jan 13 2026 - Alex

use crate::finders::{DataGuidMatch, ServiceCallSite};
use crate::memory::Address;
use crate::orchestrator::aggregator::{GuidStatsStore, UsageAggregator};
use crate::orchestrator::target::{target_id, ImageKind};
use crate::services::ServiceTableKind;
use std::path::{Path, PathBuf};

/// Everything learned about one binary during a run. Built by the
/// coordinator, read by the sinks, then dropped.
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    pub target_id: String,
    pub path: PathBuf,
    pub image_kind: ImageKind,
    pub boot_table: Address,
    pub runtime_table: Address,
    pub boot_sites: Vec<ServiceCallSite>,
    pub runtime_sites: Vec<ServiceCallSite>,
    pub usage: UsageAggregator,
    pub guid_stats: GuidStatsStore,
    pub data_guids: Vec<DataGuidMatch>,
    /// Set when a pass had to be skipped but the run carried on.
    pub error: bool,
    pub stats_generated: bool,
}

impl AnalysisSession {
    pub fn new(path: &Path) -> Self {
        Self {
            target_id: target_id(path),
            path: path.to_path_buf(),
            image_kind: ImageKind::Unknown,
            boot_table: Address::INVALID,
            runtime_table: Address::INVALID,
            boot_sites: Vec::new(),
            runtime_sites: Vec::new(),
            usage: UsageAggregator::new(),
            guid_stats: GuidStatsStore::new(),
            data_guids: Vec::new(),
            error: false,
            stats_generated: false,
        }
    }

    pub fn table(&self, kind: ServiceTableKind) -> Address {
        match kind {
            ServiceTableKind::Boot => self.boot_table,
            ServiceTableKind::Runtime => self.runtime_table,
        }
    }

    pub fn set_table(&mut self, kind: ServiceTableKind, addr: Address) {
        match kind {
            ServiceTableKind::Boot => self.boot_table = addr,
            ServiceTableKind::Runtime => self.runtime_table = addr,
        }
    }

    pub fn sites(&self, kind: ServiceTableKind) -> &[ServiceCallSite] {
        match kind {
            ServiceTableKind::Boot => &self.boot_sites,
            ServiceTableKind::Runtime => &self.runtime_sites,
        }
    }

    pub fn set_sites(&mut self, kind: ServiceTableKind, sites: Vec<ServiceCallSite>) {
        match kind {
            ServiceTableKind::Boot => self.boot_sites = sites,
            ServiceTableKind::Runtime => self.runtime_sites = sites,
        }
    }

    pub fn tables_resolved(&self) -> bool {
        self.boot_table.is_valid() && self.runtime_table.is_valid()
    }

    pub fn total_call_sites(&self) -> usize {
        self.boot_sites.len() + self.runtime_sites.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session() {
        let session = AnalysisSession::new(Path::new("/fw/ABCD/body.bin"));
        assert_eq!(session.target_id, "ABCD");
        assert!(!session.tables_resolved());
        assert_eq!(session.table(ServiceTableKind::Boot), Address::INVALID);
        assert_eq!(session.total_call_sites(), 0);
        assert!(session.guid_stats.is_empty());
    }

    #[test]
    fn test_table_accessors() {
        let mut session = AnalysisSession::new(Path::new("Driver.efi"));
        session.set_table(ServiceTableKind::Runtime, Address::new(0x2000));
        session.set_sites(
            ServiceTableKind::Runtime,
            vec![ServiceCallSite::new(0x48, Address::new(0x1000))],
        );
        assert_eq!(session.runtime_table, Address::new(0x2000));
        assert_eq!(session.sites(ServiceTableKind::Runtime).len(), 1);
        assert!(session.sites(ServiceTableKind::Boot).is_empty());
    }
}
