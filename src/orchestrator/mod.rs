// Tue Jan 13 2026 - Alex

pub mod aggregator;
pub mod coordinator;
pub mod session;
pub mod target;

pub use aggregator::{GuidStatsStore, ProtocolUsageRecord, ServiceUsage, UsageAggregator};
pub use coordinator::{Coordinator, CoordinatorState};
pub use session::AnalysisSession;
pub use target::{target_id, ImageKind};
