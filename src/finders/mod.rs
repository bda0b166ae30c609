// Tue Jan 13 2026 - Alex

pub mod data_guids;
pub mod error;
pub mod guid;
pub mod references;
pub mod result;
pub mod table;

pub use data_guids::{DataGuidScanner, DATA_SCAN_STRIDE};
pub use error::FinderError;
pub use guid::{GuidResolver, DEFAULT_BACKWARD_LIMIT};
pub use references::{ReferenceCollector, DEFAULT_FORWARD_WINDOW};
pub use result::{DataGuidMatch, GuidLookup, ServiceCallSite, TableAccess};
pub use table::TableLocator;
