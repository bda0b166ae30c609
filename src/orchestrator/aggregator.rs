// Tue Jan 13 2026 - Alex

use crate::finders::ServiceCallSite;
use crate::guid::Guid;
use crate::services::{ServiceCategory, ServiceDescriptor, ServiceTableKind};
use serde::Serialize;

/// Per-descriptor call counters for one services table, indexed like
/// `kind.descriptors()`. Unknown offsets land on the leading sentinel row.
#[derive(Debug, Clone)]
pub struct ServiceUsage {
    kind: ServiceTableKind,
    counts: Vec<u32>,
}

impl ServiceUsage {
    pub fn new(kind: ServiceTableKind) -> Self {
        Self {
            kind,
            counts: vec![0; kind.descriptors().len()],
        }
    }

    pub fn kind(&self) -> ServiceTableKind {
        self.kind
    }

    fn index_of(&self, offset: i64) -> usize {
        self.kind
            .services()
            .iter()
            .position(|s| s.offset as i64 == offset)
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    pub fn increment(&mut self, offset: i64) -> &'static ServiceDescriptor {
        let index = self.index_of(offset);
        self.counts[index] += 1;
        &self.kind.descriptors()[index]
    }

    pub fn count(&self, offset: i64) -> u32 {
        self.counts[self.index_of(offset)]
    }

    /// Calls that did not match any catalog offset.
    pub fn unknown_count(&self) -> u32 {
        self.counts[0]
    }

    /// Every row of the table with its counter, sentinels included.
    pub fn iter(&self) -> impl Iterator<Item = (&'static ServiceDescriptor, u32)> + '_ {
        self.kind.descriptors().iter().zip(self.counts.iter().copied())
    }

    /// Real services that were called at least once.
    pub fn used(&self) -> impl Iterator<Item = (&'static ServiceDescriptor, u32)> + '_ {
        self.iter().filter(|(d, count)| *count > 0 && !d.is_sentinel())
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

/// Counts call sites per service and picks out the ones worth a GUID lookup.
#[derive(Debug, Clone)]
pub struct UsageAggregator {
    boot: ServiceUsage,
    runtime: ServiceUsage,
}

impl Default for UsageAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl UsageAggregator {
    pub fn new() -> Self {
        Self {
            boot: ServiceUsage::new(ServiceTableKind::Boot),
            runtime: ServiceUsage::new(ServiceTableKind::Runtime),
        }
    }

    pub fn usage(&self, kind: ServiceTableKind) -> &ServiceUsage {
        match kind {
            ServiceTableKind::Boot => &self.boot,
            ServiceTableKind::Runtime => &self.runtime,
        }
    }

    fn usage_mut(&mut self, kind: ServiceTableKind) -> &mut ServiceUsage {
        match kind {
            ServiceTableKind::Boot => &mut self.boot,
            ServiceTableKind::Runtime => &mut self.runtime,
        }
    }

    /// Counts every site and returns the categorized subset, in input order.
    pub fn add_sites(
        &mut self,
        kind: ServiceTableKind,
        sites: &[ServiceCallSite],
    ) -> Vec<(ServiceCallSite, ServiceCategory)> {
        let usage = self.usage_mut(kind);
        let mut interesting = Vec::new();

        for site in sites {
            let descriptor = usage.increment(site.table_offset);
            if descriptor.is_sentinel() {
                log::debug!("Unknown {} offset {:#x} at {}", kind, site.table_offset, site.address);
            }

            if let Some(category) = ServiceCategory::categorize(kind, site.table_offset) {
                interesting.push((*site, category));
            }
        }

        interesting
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtocolUsageRecord {
    pub guid: Guid,
    pub category: ServiceCategory,
    pub count: u32,
}

impl ProtocolUsageRecord {
    pub fn name(&self) -> Option<&'static str> {
        self.guid.known_name()
    }
}

/// De-duplicated `(guid, category)` counters, kept in first-seen order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GuidStatsStore {
    records: Vec<ProtocolUsageRecord>,
    installed: u32,
}

impl GuidStatsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the GUID is a sentinel and nothing was recorded.
    pub fn record(&mut self, guid: Guid, category: ServiceCategory) -> bool {
        if !guid.is_valid() {
            log::debug!("Refusing to record sentinel GUID {} ({})", guid, category);
            return false;
        }

        match self
            .records
            .iter_mut()
            .find(|r| r.guid == guid && r.category == category)
        {
            Some(existing) => existing.count += 1,
            None => self.records.push(ProtocolUsageRecord {
                guid,
                category,
                count: 1,
            }),
        }

        if category.is_install() {
            self.installed += 1;
        }

        true
    }

    pub fn records(&self) -> &[ProtocolUsageRecord] {
        &self.records
    }

    pub fn installed_records(&self) -> impl Iterator<Item = &ProtocolUsageRecord> {
        self.records.iter().filter(|r| r.category.is_install())
    }

    pub fn installed_count(&self) -> u32 {
        self.installed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::Address;

    fn guid(data1: u32) -> Guid {
        Guid::new(data1, 0x9562, 0x11D2, [0x8E, 0x3F, 0x00, 0xA0, 0xC9, 0x69, 0x72, 0x3B])
    }

    #[test]
    fn test_same_pair_counts_twice() {
        let mut store = GuidStatsStore::new();
        assert!(store.record(guid(0x5B1B31A1), ServiceCategory::LocateProtocol));
        assert!(store.record(guid(0x5B1B31A1), ServiceCategory::LocateProtocol));
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].count, 2);
    }

    #[test]
    fn test_same_guid_different_category() {
        let mut store = GuidStatsStore::new();
        store.record(guid(0x5B1B31A1), ServiceCategory::LocateProtocol);
        store.record(guid(0x5B1B31A1), ServiceCategory::HandleProtocol);
        assert_eq!(store.len(), 2);
        assert!(store.records().iter().all(|r| r.count == 1));
    }

    #[test]
    fn test_sentinel_guids_never_recorded() {
        let mut store = GuidStatsStore::new();
        for category in [
            ServiceCategory::InstallProtocol,
            ServiceCategory::LocateProtocol,
            ServiceCategory::GetVariable,
        ] {
            assert!(!store.record(guid(0), category));
            assert!(!store.record(guid(0xFFFF_FFFF), category));
        }
        assert!(store.is_empty());
        assert_eq!(store.installed_count(), 0);
    }

    #[test]
    fn test_installed_counts_occurrences() {
        let mut store = GuidStatsStore::new();
        store.record(guid(1), ServiceCategory::InstallProtocol);
        store.record(guid(1), ServiceCategory::InstallProtocol);
        store.record(guid(2), ServiceCategory::InstallMultipleProtocolInterfaces);
        store.record(guid(3), ServiceCategory::OpenProtocol);
        assert_eq!(store.installed_count(), 3);
        assert_eq!(store.installed_records().count(), 2);
    }

    #[test]
    fn test_usage_counts_and_categorizes() {
        let mut aggregator = UsageAggregator::new();
        let sites = [
            ServiceCallSite::new(0x140, Address::new(0x1000)),
            ServiceCallSite::new(0x140, Address::new(0x1100)),
            ServiceCallSite::new(0x28, Address::new(0x1200)),
            ServiceCallSite::new(0x7777, Address::new(0x1300)),
        ];
        let interesting = aggregator.add_sites(ServiceTableKind::Boot, &sites);

        let boot = aggregator.usage(ServiceTableKind::Boot);
        assert_eq!(boot.count(0x140), 2);
        assert_eq!(boot.count(0x28), 1);
        assert_eq!(boot.unknown_count(), 1);
        assert_eq!(boot.total(), 4);
        assert_eq!(boot.used().count(), 2);

        assert_eq!(interesting.len(), 2);
        assert!(interesting.iter().all(|(_, c)| *c == ServiceCategory::LocateProtocol));
        assert_eq!(aggregator.usage(ServiceTableKind::Runtime).total(), 0);
    }

    #[test]
    fn test_runtime_categories() {
        let mut aggregator = UsageAggregator::new();
        let sites = [
            ServiceCallSite::new(0x48, Address::new(0x2000)),
            ServiceCallSite::new(0x58, Address::new(0x2010)),
            ServiceCallSite::new(0x18, Address::new(0x2020)),
        ];
        let interesting = aggregator.add_sites(ServiceTableKind::Runtime, &sites);
        let categories: Vec<ServiceCategory> = interesting.iter().map(|(_, c)| *c).collect();
        assert_eq!(categories, vec![ServiceCategory::GetVariable, ServiceCategory::SetVariable]);
    }
}
