// Tue Jan 13 2026 - Alex

pub mod annotate;
pub mod json;
pub mod manager;
pub mod report;
pub mod sql;

pub use annotate::ServiceCommenter;
pub use json::{Annotations, JsonSerializer};
pub use manager::{OutputManager, Sink, SinkSummary};
pub use report::ReportGenerator;
pub use sql::SqlScriptWriter;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
