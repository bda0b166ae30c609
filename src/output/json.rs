// Tue Jan 13 2026 - Alex

use crate::memory::Address;
use crate::orchestrator::aggregator::ServiceUsage;
use crate::orchestrator::AnalysisSession;
use crate::output::OutputError;
use crate::services::ServiceTableKind;
use indexmap::IndexMap;
use serde_json::{json, Map, Value};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Comments and names left on the disassembly by a run.
#[derive(Debug, Clone, Copy)]
pub struct Annotations<'a> {
    pub comments: &'a IndexMap<Address, String>,
    pub names: &'a IndexMap<Address, String>,
}

pub struct JsonSerializer {
    pretty_print: bool,
    include_annotations: bool,
}

impl Default for JsonSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonSerializer {
    pub fn new() -> Self {
        Self {
            pretty_print: true,
            include_annotations: true,
        }
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn with_annotations(mut self, include: bool) -> Self {
        self.include_annotations = include;
        self
    }

    pub fn serialize(&self, session: &AnalysisSession, annotations: Option<Annotations>) -> Result<String, OutputError> {
        let value = self.build_json_value(session, annotations);
        let text = if self.pretty_print {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(text)
    }

    pub fn serialize_to_file<P: AsRef<Path>>(
        &self,
        session: &AnalysisSession,
        annotations: Option<Annotations>,
        path: P,
    ) -> Result<(), OutputError> {
        let text = self.serialize(session, annotations)?;
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn build_json_value(&self, session: &AnalysisSession, annotations: Option<Annotations>) -> Value {
        let mut root = json!({
            "target": session.target_id,
            "path": session.path.to_string_lossy(),
            "image_type": session.image_kind.code(),
            "error": session.error,
            "tables": {
                "boot_services": hex(session.boot_table),
                "runtime_services": hex(session.runtime_table),
            },
            "call_sites": self.serialize_call_sites(session),
            "usage": {
                "boot_services": self.serialize_usage(session.usage.usage(ServiceTableKind::Boot)),
                "runtime_services": self.serialize_usage(session.usage.usage(ServiceTableKind::Runtime)),
            },
            "protocols": session.guid_stats.records().iter().map(|r| json!({
                "guid": r.guid,
                "name": r.name(),
                "category": r.category,
                "type": r.category.code(),
                "count": r.count,
            })).collect::<Vec<_>>(),
            "installed_protocols": session.guid_stats.installed_count(),
            "data_guids": session.data_guids.iter().map(|m| json!({
                "address": hex(m.address),
                "guid": m.guid,
                "name": m.name,
            })).collect::<Vec<_>>(),
        });

        if let (true, Some(annotations), Value::Object(map)) = (self.include_annotations, annotations, &mut root) {
            map.insert(
                "annotations".to_string(),
                json!({
                    "comments": address_map(annotations.comments),
                    "names": address_map(annotations.names),
                }),
            );
        }

        root
    }

    fn serialize_call_sites(&self, session: &AnalysisSession) -> Value {
        let mut sites = Vec::new();
        for kind in ServiceTableKind::ALL {
            for site in session.sites(kind) {
                sites.push(json!({
                    "table": kind,
                    "offset": site.table_offset,
                    "address": hex(site.address),
                    "service": site.service_name(kind),
                }));
            }
        }
        Value::Array(sites)
    }

    fn serialize_usage(&self, usage: &ServiceUsage) -> Value {
        let mut map = Map::new();
        for (descriptor, count) in usage.used() {
            map.insert(descriptor.name.to_string(), json!(count));
        }
        if usage.unknown_count() > 0 {
            map.insert("unknown".to_string(), json!(usage.unknown_count()));
        }
        Value::Object(map)
    }
}

fn hex(addr: Address) -> Value {
    if addr.is_valid() {
        Value::String(addr.to_string())
    } else {
        Value::Null
    }
}

fn address_map(entries: &IndexMap<Address, String>) -> Value {
    let map: Map<String, Value> = entries
        .iter()
        .map(|(addr, text)| (addr.to_string(), Value::String(text.clone())))
        .collect();
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finders::ServiceCallSite;
    use crate::services::ServiceCategory;

    #[test]
    fn test_session_json() {
        let mut session = AnalysisSession::new(Path::new("/fw/ABCD/body.bin"));
        session.boot_table = Address::new(0x401000);
        let sites = vec![ServiceCallSite::new(0x140, Address::new(0x1031))];
        session.usage.add_sites(ServiceTableKind::Boot, &sites);
        session.set_sites(ServiceTableKind::Boot, sites);
        session
            .guid_stats
            .record("5B1B31A1-9562-11D2-8E3F-00A0C969723B".parse().unwrap(), ServiceCategory::LocateProtocol);

        let text = JsonSerializer::new().serialize(&session, None).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["target"], "ABCD");
        assert_eq!(value["tables"]["boot_services"], "0x401000");
        assert_eq!(value["tables"]["runtime_services"], Value::Null);
        assert_eq!(value["call_sites"][0]["service"], "LocateProtocol");
        assert_eq!(value["usage"]["boot_services"]["LocateProtocol"], 1);
        assert_eq!(value["protocols"][0]["guid"], "5B1B31A1-9562-11D2-8E3F-00A0C969723B");
        assert_eq!(value["protocols"][0]["type"], 5);
        assert!(value.get("annotations").is_none());
    }

    #[test]
    fn test_annotations_included() {
        let session = AnalysisSession::new(Path::new("x.efi"));
        let mut comments = IndexMap::new();
        comments.insert(Address::new(0x1000), "BootServices->LocateProtocol()".to_string());
        let names = IndexMap::new();

        let text = JsonSerializer::new()
            .with_pretty_print(false)
            .serialize(&session, Some(Annotations { comments: &comments, names: &names }))
            .unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["annotations"]["comments"]["0x1000"], "BootServices->LocateProtocol()");
    }
}
