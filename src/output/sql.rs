// Tue Jan 13 2026 - Alex

use crate::orchestrator::aggregator::ServiceUsage;
use crate::orchestrator::AnalysisSession;
use crate::output::OutputError;
use crate::services::ServiceTableKind;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Emits the per-binary statistics as SQL statements that can be replayed
/// into any SQLite database. Runs over many binaries append to one script.
pub struct SqlScriptWriter {
    create_tables: bool,
}

impl Default for SqlScriptWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlScriptWriter {
    pub fn new() -> Self {
        Self { create_tables: true }
    }

    pub fn with_create_tables(mut self, create: bool) -> Self {
        self.create_tables = create;
        self
    }

    pub fn append_to_file<P: AsRef<Path>>(&self, session: &AnalysisSession, path: P) -> Result<(), OutputError> {
        let file = OpenOptions::new().create(true).append(true).open(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        writer.write_all(self.generate(session).as_bytes())?;
        writer.flush()?;
        log::debug!("Appended SQL for {} to {}", session.target_id, path.as_ref().display());
        Ok(())
    }

    pub fn generate(&self, session: &AnalysisSession) -> String {
        let mut script = String::new();

        if self.create_tables {
            script.push_str(&schema());
        }

        let id = quote(&session.target_id);
        script.push_str(&format!(
            "INSERT INTO main VALUES ({},{},{},{});\n",
            id,
            quote(&session.path.to_string_lossy()),
            session.image_kind.code(),
            session.error as u8
        ));

        for record in session.guid_stats.records() {
            script.push_str(&format!(
                "INSERT INTO protocols_usage VALUES ({},{},{},{});\n",
                id,
                quote(&record.guid.to_string()),
                quote(record.name().unwrap_or("N/A")),
                record.category.code()
            ));
        }

        for record in session.guid_stats.installed_records() {
            script.push_str(&format!(
                "INSERT INTO installed_protocols VALUES ({},{},{});\n",
                id,
                quote(&record.guid.to_string()),
                record.category.code()
            ));
        }

        for kind in ServiceTableKind::ALL {
            script.push_str(&stats_row(&id, session.usage.usage(kind)));
        }

        script
    }
}

fn stats_table(kind: ServiceTableKind) -> &'static str {
    match kind {
        ServiceTableKind::Boot => "boot_service_stats",
        ServiceTableKind::Runtime => "runtime_service_stats",
    }
}

fn stats_row(id: &str, usage: &ServiceUsage) -> String {
    let counts: Vec<String> = usage
        .kind()
        .services()
        .iter()
        .map(|s| usage.count(s.offset as i64).to_string())
        .collect();

    format!(
        "INSERT INTO {} VALUES ({},{});\n",
        stats_table(usage.kind()),
        id,
        counts.join(",")
    )
}

pub fn schema() -> String {
    let mut sql = String::new();
    sql.push_str(
        "CREATE TABLE IF NOT EXISTS main (file_guid TEXT NOT NULL, path TEXT NOT NULL, \
         type INTEGER NOT NULL, error INTEGER NOT NULL);\n",
    );

    for kind in ServiceTableKind::ALL {
        let columns: Vec<String> = kind
            .services()
            .iter()
            .map(|s| format!("{} INTEGER NOT NULL", s.column_name()))
            .collect();
        sql.push_str(&format!(
            "CREATE TABLE IF NOT EXISTS {} (file_guid TEXT NOT NULL, {});\n",
            stats_table(kind),
            columns.join(", ")
        ));
    }

    sql.push_str(
        "CREATE TABLE IF NOT EXISTS protocols_usage (file_guid TEXT NOT NULL, protocol TEXT NOT NULL, \
         description TEXT NOT NULL, type INTEGER NOT NULL);\n",
    );
    sql.push_str(
        "CREATE TABLE IF NOT EXISTS installed_protocols (file_guid TEXT NOT NULL, installed TEXT NOT NULL, \
         type INTEGER NOT NULL);\n",
    );
    sql
}

fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finders::ServiceCallSite;
    use crate::guid::Guid;
    use crate::memory::Address;
    use crate::services::ServiceCategory;

    fn session() -> AnalysisSession {
        let mut session = AnalysisSession::new(Path::new("/fw/O'Brien/body.bin"));
        session.usage.add_sites(
            ServiceTableKind::Boot,
            &[ServiceCallSite::new(0x18, Address::new(0x1000))],
        );
        let guid: Guid = "5B1B31A1-9562-11D2-8E3F-00A0C969723B".parse().unwrap();
        session.guid_stats.record(guid, ServiceCategory::InstallProtocol);
        session.guid_stats.record(guid, ServiceCategory::LocateProtocol);
        session
    }

    #[test]
    fn test_schema_columns() {
        let sql = schema();
        assert!(sql.contains("raisetpl INTEGER NOT NULL"));
        assert!(sql.contains("createeventex INTEGER NOT NULL);"));
        assert!(sql.contains("queryvariableinfo INTEGER NOT NULL);"));
        assert!(!sql.to_lowercase().contains("empty service"));
    }

    #[test]
    fn test_rows() {
        let sql = SqlScriptWriter::new().with_create_tables(false).generate(&session());
        let lines: Vec<&str> = sql.lines().collect();

        assert_eq!(lines[0], "INSERT INTO main VALUES ('O''Brien','/fw/O''Brien/body.bin',2,0);");
        assert_eq!(
            lines[1],
            "INSERT INTO protocols_usage VALUES ('O''Brien','5B1B31A1-9562-11D2-8E3F-00A0C969723B','EFI_LOADED_IMAGE_PROTOCOL_GUID',0);"
        );
        assert!(lines[2].ends_with(",5);"));
        assert_eq!(
            lines[3],
            "INSERT INTO installed_protocols VALUES ('O''Brien','5B1B31A1-9562-11D2-8E3F-00A0C969723B',0);"
        );
        assert!(lines[4].starts_with("INSERT INTO boot_service_stats VALUES ('O''Brien',1,0,"));
        assert_eq!(lines[4].matches(',').count(), 44);
        assert_eq!(lines[5].matches(',').count(), 14);
    }
}
