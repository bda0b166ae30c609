// Tue Jan 13 2026 - Alex

use crate::config::Config;
use crate::orchestrator::AnalysisSession;
use crate::output::json::{Annotations, JsonSerializer};
use crate::output::report::ReportGenerator;
use crate::output::sql::SqlScriptWriter;
use crate::output::OutputError;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    Report,
    Sql,
    Json,
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Report => write!(f, "report file"),
            Sink::Sql => write!(f, "SQL script"),
            Sink::Json => write!(f, "JSON export"),
        }
    }
}

#[derive(Debug, Default)]
pub struct SinkSummary {
    pub written: Vec<(Sink, PathBuf)>,
    pub failed: Vec<(Sink, OutputError)>,
}

impl SinkSummary {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Runs every file sink the configuration enables. A failing sink is logged
/// and skipped; the others still run.
pub struct OutputManager<'a> {
    config: &'a Config,
}

impl<'a> OutputManager<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn report_path(&self, session: &AnalysisSession) -> PathBuf {
        let dir = session
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        dir.join(&self.config.report_file_name)
    }

    pub fn emit(&self, session: &AnalysisSession, annotations: Option<Annotations>) -> SinkSummary {
        let mut summary = SinkSummary::default();

        if self.config.output_log && session.stats_generated {
            let path = self.report_path(session);
            let result = ReportGenerator::new().generate_to_file(session, &path);
            Self::record(&mut summary, Sink::Report, path, result);
        }

        if self.config.output_sql {
            let path = self.config.database_file.clone();
            let result = SqlScriptWriter::new().append_to_file(session, &path);
            Self::record(&mut summary, Sink::Sql, path, result);
        }

        if let Some(path) = &self.config.json_output {
            let result = JsonSerializer::new().serialize_to_file(session, annotations, path);
            Self::record(&mut summary, Sink::Json, path.clone(), result);
        }

        summary
    }

    fn record(summary: &mut SinkSummary, sink: Sink, path: PathBuf, result: Result<(), OutputError>) {
        match result {
            Ok(()) => {
                log::debug!("Wrote {} to {}", sink, path.display());
                summary.written.push((sink, path));
            }
            Err(e) => {
                log::error!("Can't write {} {}: {}", sink, path.display(), e);
                summary.failed.push((sink, e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("uefi-service-mapper-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_report_path_next_to_binary() {
        let config = Config::default();
        let session = AnalysisSession::new(Path::new("/fw/ABCD/body.bin"));
        assert_eq!(OutputManager::new(&config).report_path(&session), PathBuf::from("/fw/ABCD/log"));

        let session = AnalysisSession::new(Path::new("Driver.efi"));
        assert_eq!(OutputManager::new(&config).report_path(&session), PathBuf::from("./log"));
    }

    #[test]
    fn test_failing_sink_does_not_stop_others() {
        let json = scratch("out.json");
        let mut config = Config::default()
            .with_database_file(PathBuf::from("/nonexistent-dir/uefi/efi_stats.sql"))
            .with_json_output(json.clone());
        config.output_sql = true;

        let session = AnalysisSession::new(Path::new("Driver.efi"));
        let summary = OutputManager::new(&config).emit(&session, None);

        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].0, Sink::Sql);
        assert_eq!(summary.written, vec![(Sink::Json, json.clone())]);
        assert!(fs::read_to_string(&json).unwrap().contains("\"target\""));
        let _ = fs::remove_file(&json);
    }

    #[test]
    fn test_report_needs_stats() {
        let mut config = Config::default();
        config.output_log = true;
        config.report_file_name = scratch("log").to_string_lossy().into_owned();

        let session = AnalysisSession::new(Path::new("Driver.efi"));
        let summary = OutputManager::new(&config).emit(&session, None);
        assert!(summary.written.is_empty() && summary.is_clean());
    }
}
