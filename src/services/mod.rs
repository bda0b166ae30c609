// Mon Feb 02 2026 - Alex

pub mod catalog;
pub mod category;
pub mod tables;

pub use catalog::{ServiceDescriptor, ServiceTableKind};
pub use category::{ServiceCategory, CATEGORY_TABLE};
