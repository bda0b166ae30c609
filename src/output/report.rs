// Tue Jan 13 2026 - Alex

use crate::orchestrator::aggregator::{GuidStatsStore, ProtocolUsageRecord, ServiceUsage};
use crate::orchestrator::AnalysisSession;
use crate::output::OutputError;
use crate::services::ServiceTableKind;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const BOOT_TITLE: &str = "|         Boot services global usage          |";
const RUNTIME_TITLE: &str = "|   RunTime services global usage  |";
const PROTOCOLS_TITLE: &str =
    "|                                  Global Protocols Usage                                         |";
const PROTOCOLS_COLUMNS: &str =
    "| Count |                GUID                  |                    Description                   |";
const INSTALLED_TITLE: &str =
    "|                               Installed Protocols                                       |";
const INSTALLED_COLUMNS: &str =
    "|                GUID                  |                    Description                   |";

const COUNT_WIDTH: usize = 5;
const GUID_WIDTH: usize = 36;
const NAME_WIDTH: usize = 48;
const UNKNOWN_NAME: &str = "N/A";

/// Plain-text usage tables, the same ones printed after an interactive run.
pub struct ReportGenerator {
    include_services: bool,
    include_protocols: bool,
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            include_services: true,
            include_protocols: true,
        }
    }

    pub fn with_services(mut self, include: bool) -> Self {
        self.include_services = include;
        self
    }

    pub fn with_protocols(mut self, include: bool) -> Self {
        self.include_protocols = include;
        self
    }

    pub fn generate(&self, session: &AnalysisSession) -> String {
        let mut report = String::new();

        if self.include_services {
            report.push_str(&self.text_services(session.usage.usage(ServiceTableKind::Boot)));
            report.push_str(&self.text_services(session.usage.usage(ServiceTableKind::Runtime)));
        }

        if self.include_protocols {
            report.push_str(&self.text_protocols(&session.guid_stats));
        }

        report
    }

    pub fn generate_to_file<P: AsRef<Path>>(&self, session: &AnalysisSession, path: P) -> Result<(), OutputError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(self.generate(session).as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn text_services(&self, usage: &ServiceUsage) -> String {
        let (title, name_width) = match usage.kind() {
            ServiceTableKind::Boot => (BOOT_TITLE, 36),
            ServiceTableKind::Runtime => (RUNTIME_TITLE, 25),
        };
        let inner = title.chars().count() - 2;

        let mut text = String::new();
        text.push_str(&rule('.', &[inner], '.', '.'));
        text.push_str(title);
        text.push('\n');
        text.push_str(&rule('.', &[inner], '.', '.'));

        for (descriptor, count) in usage.used() {
            text.push_str(&format!(
                "| {:<width$} | {:>4} |\n",
                descriptor.name,
                count,
                width = name_width
            ));
        }

        text.push_str(&rule('`', &[inner], '-', '´'));
        text
    }

    fn text_protocols(&self, stats: &GuidStatsStore) -> String {
        let count_col = COUNT_WIDTH + 2;
        let guid_col = GUID_WIDTH + 2;
        let name_col = NAME_WIDTH + 2;

        let mut text = String::new();
        text.push_str(&rule('.', &[count_col + guid_col + name_col + 2], '.', '.'));
        text.push_str(PROTOCOLS_TITLE);
        text.push('\n');
        text.push_str(&rule('.', &[count_col, guid_col, name_col], '.', '.'));
        text.push_str(PROTOCOLS_COLUMNS);
        text.push('\n');
        text.push_str(&rule('.', &[count_col, guid_col, name_col], '\'', '.'));

        for record in stats.records() {
            text.push_str(&format!(
                "| {:>cw$} | {:<gw$} | {:<nw$} |\n",
                record.count,
                record.guid.to_string(),
                display_name(record),
                cw = COUNT_WIDTH,
                gw = GUID_WIDTH,
                nw = NAME_WIDTH
            ));
        }
        text.push_str(&rule('`', &[count_col + guid_col + name_col + 2], '-', '´'));

        if stats.installed_count() > 0 {
            text.push_str(&rule('.', &[guid_col + name_col + 1], '.', '.'));
            text.push_str(INSTALLED_TITLE);
            text.push('\n');
            text.push_str(&rule('.', &[guid_col, name_col], '.', '.'));
            text.push_str(INSTALLED_COLUMNS);
            text.push('\n');
            text.push_str(&rule('.', &[guid_col, name_col], '\'', '.'));

            for record in stats.installed_records() {
                text.push_str(&format!(
                    "| {:<gw$} | {:<nw$} |\n",
                    record.guid.to_string(),
                    display_name(record),
                    gw = GUID_WIDTH,
                    nw = NAME_WIDTH
                ));
            }
            text.push_str(&rule('`', &[guid_col + name_col + 1], '-', '´'));
        }

        text
    }
}

fn display_name(record: &ProtocolUsageRecord) -> &'static str {
    record.name().unwrap_or(UNKNOWN_NAME)
}

/// Horizontal frame line: `open`, dash runs of the given widths joined by
/// `joint`, then `close`.
fn rule(open: char, columns: &[usize], joint: char, close: char) -> String {
    let mut line = String::new();
    line.push(open);
    for (i, width) in columns.iter().enumerate() {
        if i > 0 {
            line.push(joint);
        }
        line.push_str(&"-".repeat(*width));
    }
    line.push(close);
    line.push('\n');
    line
}
