// Tue Jan 13 2026 - Alex

use crate::analysis::{FunctionRange, InstructionSource};
use crate::config::Config;
use crate::finders::{
    DataGuidScanner, FinderError, GuidLookup, GuidResolver, ReferenceCollector, ServiceCallSite, TableLocator,
};
use crate::orchestrator::session::AnalysisSession;
use crate::orchestrator::target::ImageKind;
use crate::output::annotate::ServiceCommenter;
use crate::services::{ServiceCategory, ServiceTableKind};
use crate::utils::logging::scoped_timer;
use indicatif::ProgressBar;
use std::path::Path;

/// Drives one binary through every pass, in order, against a single
/// instruction source.
pub struct Coordinator<'a, S: InstructionSource + ?Sized> {
    config: &'a Config,
    source: &'a mut S,
    progress: Option<ProgressBar>,
    state: CoordinatorState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinatorState {
    Idle,
    CheckingImage,
    ScanningData,
    LocatingTables,
    CollectingReferences,
    Annotating,
    Aggregating,
    ResolvingGuids,
    Completed,
    Failed,
}

impl<'a, S: InstructionSource + ?Sized> Coordinator<'a, S> {
    pub fn new(config: &'a Config, source: &'a mut S) -> Self {
        Self {
            config,
            source,
            progress: None,
            state: CoordinatorState::Idle,
        }
    }

    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn state(&self) -> CoordinatorState {
        self.state
    }

    pub fn run(&mut self, path: &Path) -> Result<AnalysisSession, FinderError> {
        let _timer = scoped_timer("analysis");
        let mut session = AnalysisSession::new(path);

        match self.run_passes(&mut session) {
            Ok(()) => {
                self.transition(CoordinatorState::Completed, "Completed!");
                Ok(session)
            }
            Err(e) => {
                self.state = CoordinatorState::Failed;
                log::error!("{}", e);
                Err(e)
            }
        }
    }

    fn run_passes(&mut self, session: &mut AnalysisSession) -> Result<(), FinderError> {
        self.transition(CoordinatorState::CheckingImage, "Checking image type...");
        session.image_kind = self.check_image()?;

        self.transition(CoordinatorState::ScanningData, "Scanning data segment for GUIDs...");
        self.scan_data_segment(session);

        self.transition(CoordinatorState::LocatingTables, "Locating service tables...");
        let entry = self.entry_function()?;
        self.locate_tables(session, &entry)?;

        self.transition(CoordinatorState::CollectingReferences, "Collecting service calls...");
        self.collect_references(session);

        self.transition(CoordinatorState::Annotating, "Commenting service calls...");
        self.annotate(session);

        if !self.config.generate_stats {
            return Ok(());
        }

        self.transition(CoordinatorState::Aggregating, "Counting service usage...");
        let interesting = self.aggregate(session);

        self.transition(CoordinatorState::ResolvingGuids, "Resolving GUIDs...");
        self.resolve_guids(session, &interesting);
        session.stats_generated = true;

        Ok(())
    }

    fn check_image(&self) -> Result<ImageKind, FinderError> {
        let header = self
            .source
            .segment_by_name(&self.config.header_segment)
            .ok_or_else(|| FinderError::SegmentNotFound(self.config.header_segment.clone()))?;

        let magic = self.source.read_bytes(header.start(), 2)?;
        let kind = ImageKind::from_header(&magic);

        if !kind.is_supported() {
            return Err(FinderError::UnsupportedImage("TE binaries not supported at the moment".to_string()));
        }
        if kind == ImageKind::Unknown {
            log::warn!("Unrecognised image signature {:02X?}, continuing anyway", magic);
        }

        log::debug!("Image type: {}", kind);
        Ok(kind)
    }

    fn scan_data_segment(&mut self, session: &mut AnalysisSession) {
        let Some(segment) = self.source.segment_by_name(&self.config.data_segment) else {
            log::error!("Can't find a valid data segment!");
            session.error = true;
            return;
        };

        session.data_guids = DataGuidScanner::new(&mut *self.source).scan(segment);
        log::info!("Found {} known GUIDs in {}", session.data_guids.len(), self.config.data_segment);
    }

    fn entry_function(&self) -> Result<FunctionRange, FinderError> {
        if self.source.segment_by_name(&self.config.code_segment).is_none() {
            log::error!("Can't find a valid code segment!");
            return Err(FinderError::SegmentNotFound(self.config.code_segment.clone()));
        }

        self.source
            .function_by_name(&self.config.entry_point_names)
            .ok_or_else(|| FinderError::EntryPointNotFound(self.config.entry_point_names.join(", ")))
    }

    fn locate_tables(&mut self, session: &mut AnalysisSession, entry: &FunctionRange) -> Result<(), FinderError> {
        let mut missing = None;

        for kind in ServiceTableKind::ALL {
            match TableLocator::new(&mut *self.source).locate(kind, entry) {
                Some(addr) => {
                    log::info!("{} table at {}", kind, addr);
                    session.set_table(kind, addr);
                }
                None => {
                    log::error!("Failed to locate {} table", kind);
                    missing.get_or_insert(kind);
                }
            }
        }

        match missing {
            Some(kind) => Err(FinderError::TableNotFound(kind)),
            None => Ok(()),
        }
    }

    fn collect_references(&mut self, session: &mut AnalysisSession) {
        for kind in ServiceTableKind::ALL {
            let sites = ReferenceCollector::new(&*self.source, kind)
                .with_forward_window(self.config.forward_scan_window)
                .collect_references(session.table(kind));
            log::info!("Found {} {} calls", sites.len(), kind);
            session.set_sites(kind, sites);
        }
    }

    fn annotate(&mut self, session: &AnalysisSession) {
        let commenter = ServiceCommenter::from_config(self.config);
        for kind in ServiceTableKind::ALL {
            commenter.annotate(&mut *self.source, kind, session.sites(kind));
        }
    }

    fn aggregate(&self, session: &mut AnalysisSession) -> Vec<(ServiceCallSite, ServiceCategory)> {
        let mut interesting = Vec::new();
        for kind in ServiceTableKind::ALL {
            let sites = session.sites(kind).to_vec();
            interesting.extend(session.usage.add_sites(kind, &sites));
        }
        log::debug!("{} call sites eligible for GUID recovery", interesting.len());
        interesting
    }

    fn resolve_guids(&mut self, session: &mut AnalysisSession, interesting: &[(ServiceCallSite, ServiceCategory)]) {
        let mut resolver = GuidResolver::new(&mut *self.source)
            .with_backward_limit(self.config.backward_scan_limit)
            .with_guid_comments(self.config.comment_guid);

        for (site, category) in interesting {
            match resolver.resolve_guid(site, *category) {
                GuidLookup::Found { guid, .. } if category.is_protocol() => {
                    session.guid_stats.record(guid, *category);
                }
                GuidLookup::Found { guid, .. } => {
                    log::debug!("{} uses variable GUID {} at {}", category, guid, site.address);
                }
                GuidLookup::Invalid { guid, loaded_at } => {
                    log::debug!("Discarding {} for {} at {} (loaded at {})", guid, category, site.address, loaded_at);
                }
                GuidLookup::NotFound => {}
            }
        }

        log::info!(
            "{} distinct protocol GUIDs, {} installed",
            session.guid_stats.len(),
            session.guid_stats.installed_count()
        );
    }

    fn transition(&mut self, state: CoordinatorState, message: &str) {
        self.state = state;
        if let Some(ref pb) = self.progress {
            pb.set_message(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Instruction, ListingSource, Operand, Register};
    use crate::guid::Guid;
    use crate::memory::Address;
    use crate::output::ReportGenerator;

    const BOOT_TABLE: Address = Address::new(0x401000);
    const RUNTIME_TABLE: Address = Address::new(0x401008);
    const GUID_ADDR: Address = Address::new(0x402000);
    const GUID_BYTES: [u8; 16] = [
        0xA1, 0x31, 0x1B, 0x5B, 0x62, 0x95, 0xD2, 0x11, 0x8E, 0x3F, 0x00, 0xA0, 0xC9, 0x69, 0x72, 0x3B,
    ];

    fn at(addr: u64) -> Address {
        Address::new(addr)
    }

    fn mov(addr: u64, dst: Operand, src: Operand) -> Instruction {
        Instruction::mov(at(addr), dst, src)
    }

    fn reg(r: Register) -> Operand {
        Operand::Register(r)
    }

    fn system_table_field(r: Register, offset: i64) -> Operand {
        Operand::Memory { base: r, displacement: offset }
    }

    /// Entry function storing both table pointers, with `body` appended.
    fn driver(body: Vec<Instruction>, end: u64) -> ListingSource {
        ListingSource::new()
            .with_segment("HEADER", at(0x400000), b"MZ\x90\x00".to_vec())
            .with_segment(".text", at(0x1000), vec![0xCC; 0x100])
            .with_segment(".data", GUID_ADDR, GUID_BYTES.to_vec())
            .with_instructions(vec![
                mov(0x1000, reg(Register::Rax), system_table_field(Register::Rbx, 0x60)),
                mov(0x1004, Operand::DirectMemory(BOOT_TABLE), reg(Register::Rax)),
                mov(0x100B, reg(Register::Rcx), system_table_field(Register::Rbx, 0x58)),
                mov(0x100F, Operand::DirectMemory(RUNTIME_TABLE), reg(Register::Rcx)),
            ])
            .with_instructions(body)
            .with_function(FunctionRange::new(at(0x1000), at(end)).with_name("_ModuleEntryPoint"))
    }

    fn locate_protocol_call() -> Vec<Instruction> {
        vec![
            mov(0x1020, reg(Register::Rax), Operand::DirectMemory(BOOT_TABLE)),
            Instruction::lea(at(0x1027), Register::Rcx, Operand::DirectMemory(GUID_ADDR)),
            Instruction::other(at(0x102E), vec![]),
            Instruction::indirect_call(at(0x1031), system_table_field(Register::Rax, 0x140)),
        ]
    }

    #[test]
    fn test_boot_table_resolved_in_entry() {
        let config = Config::default();
        let mut src = driver(vec![], 0x1020);
        let session = Coordinator::new(&config, &mut src).run(Path::new("Driver.efi")).unwrap();

        assert_eq!(session.boot_table, BOOT_TABLE);
        assert_eq!(session.runtime_table, RUNTIME_TABLE);
        assert_eq!(session.image_kind, ImageKind::Pe);
        assert_eq!(src.name(BOOT_TABLE), Some("BootServices_table"));
    }

    #[test]
    fn test_locate_protocol_recorded_once() {
        let config = Config::default();
        let mut src = driver(locate_protocol_call(), 0x1040);
        let mut coordinator = Coordinator::new(&config, &mut src);
        let session = coordinator.run(Path::new("Driver.efi")).unwrap();
        assert_eq!(coordinator.state(), CoordinatorState::Completed);

        assert_eq!(session.boot_sites, vec![ServiceCallSite::new(0x140, at(0x1031))]);
        let records = session.guid_stats.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].guid, Guid::from_bytes(&GUID_BYTES).unwrap());
        assert_eq!(records[0].category, ServiceCategory::LocateProtocol);
        assert_eq!(records[0].count, 1);
        assert_eq!(session.usage.usage(ServiceTableKind::Boot).count(0x140), 1);

        assert!(src.comment(at(0x1031)).unwrap().starts_with("BootServices->LocateProtocol()"));
        assert_eq!(src.comment(at(0x1027)), Some("5B1B31A1-9562-11D2-8E3F-00A0C969723B"));
        assert_eq!(src.name(GUID_ADDR), Some("EFI_LOADED_IMAGE_PROTOCOL_GUID"));
    }

    #[test]
    fn test_call_outside_catalog_not_counted() {
        let config = Config::default();
        let mut src = driver(
            vec![
                mov(0x1020, reg(Register::Rax), Operand::DirectMemory(BOOT_TABLE)),
                Instruction::indirect_call(at(0x1027), system_table_field(Register::Rax, 0x7777)),
            ],
            0x1040,
        );
        let session = Coordinator::new(&config, &mut src).run(Path::new("Driver.efi")).unwrap();

        assert!(session.boot_sites.is_empty());
        assert_eq!(session.usage.usage(ServiceTableKind::Boot).total(), 0);
        assert!(src.comment(at(0x1027)).is_none());
        assert!(!ReportGenerator::new().generate(&session).contains("FAILED BOOT SERVICE"));
    }

    #[test]
    fn test_get_variable_guid_commented_not_recorded() {
        let config = Config::default();
        let mut src = driver(
            vec![
                mov(0x1020, reg(Register::Rax), Operand::DirectMemory(RUNTIME_TABLE)),
                Instruction::lea(at(0x1027), Register::Rdx, Operand::DirectMemory(GUID_ADDR)),
                Instruction::indirect_call(at(0x102E), system_table_field(Register::Rax, 0x48)),
            ],
            0x1040,
        );
        let session = Coordinator::new(&config, &mut src).run(Path::new("Driver.efi")).unwrap();

        assert_eq!(session.runtime_sites, vec![ServiceCallSite::new(0x48, at(0x102E))]);
        assert_eq!(session.usage.usage(ServiceTableKind::Runtime).count(0x48), 1);
        assert_eq!(src.comment(at(0x1027)), Some("5B1B31A1-9562-11D2-8E3F-00A0C969723B"));
        assert!(session.guid_stats.is_empty());
        assert_eq!(session.guid_stats.installed_count(), 0);
    }

    #[test]
    fn test_stats_disabled_still_annotates() {
        let mut config = Config::default();
        config.generate_stats = false;
        let mut src = driver(locate_protocol_call(), 0x1040);
        let session = Coordinator::new(&config, &mut src).run(Path::new("Driver.efi")).unwrap();

        assert!(!session.stats_generated);
        assert!(session.guid_stats.is_empty());
        assert_eq!(session.usage.usage(ServiceTableKind::Boot).total(), 0);
        assert!(src.comment(at(0x1031)).is_some());
    }

    #[test]
    fn test_missing_runtime_table_is_fatal() {
        let config = Config::default();
        let mut src = ListingSource::new()
            .with_segment("HEADER", at(0x400000), b"MZ".to_vec())
            .with_segment(".text", at(0x1000), vec![0xCC; 0x10])
            .with_instructions(vec![
                mov(0x1000, reg(Register::Rax), system_table_field(Register::Rdx, 0x60)),
                mov(0x1004, Operand::DirectMemory(BOOT_TABLE), reg(Register::Rax)),
            ])
            .with_function(FunctionRange::new(at(0x1000), at(0x1010)).with_name("start"));

        let mut coordinator = Coordinator::new(&config, &mut src);
        let err = coordinator.run(Path::new("Driver.efi")).unwrap_err();
        assert!(matches!(err, FinderError::TableNotFound(ServiceTableKind::Runtime)));
        assert!(!err.is_structural());
        assert_eq!(coordinator.state(), CoordinatorState::Failed);
    }

    #[test]
    fn test_missing_entry_point_is_structural() {
        let config = Config::default();
        let mut src = ListingSource::new()
            .with_segment("HEADER", at(0x400000), b"MZ".to_vec())
            .with_segment(".text", at(0x1000), vec![0xCC; 0x10])
            .with_function(FunctionRange::new(at(0x1000), at(0x1010)).with_name("sub_1000"));
        let err = Coordinator::new(&config, &mut src).run(Path::new("x.efi")).unwrap_err();
        assert!(matches!(err, FinderError::EntryPointNotFound(_)));
        assert!(err.is_structural());
    }

    #[test]
    fn test_te_image_rejected() {
        let config = Config::default();
        let mut src = ListingSource::new().with_segment("HEADER", at(0x400000), b"VZ".to_vec());
        let err = Coordinator::new(&config, &mut src).run(Path::new("x.te")).unwrap_err();
        assert!(matches!(err, FinderError::UnsupportedImage(_)));
    }

    #[test]
    fn test_missing_data_segment_is_not_fatal() {
        let config = Config::default();
        let mut src = ListingSource::new()
            .with_segment("HEADER", at(0x400000), b"MZ".to_vec())
            .with_segment(".text", at(0x1000), vec![0xCC; 0x20])
            .with_instructions(vec![
                mov(0x1000, reg(Register::Rax), system_table_field(Register::Rbx, 0x60)),
                mov(0x1004, Operand::DirectMemory(BOOT_TABLE), reg(Register::Rax)),
                mov(0x100B, reg(Register::Rcx), system_table_field(Register::Rbx, 0x58)),
                mov(0x100F, Operand::DirectMemory(RUNTIME_TABLE), reg(Register::Rcx)),
            ])
            .with_function(FunctionRange::new(at(0x1000), at(0x1020)).with_name("_ModuleEntryPoint"));

        let session = Coordinator::new(&config, &mut src).run(Path::new("x.efi")).unwrap();
        assert!(session.error);
        assert!(session.data_guids.is_empty());
        assert!(session.tables_resolved());
    }
}
