// Mon Feb 02 2026 - Alex

use crate::memory::{Address, MemoryError, MemoryRange};
use goblin::pe::section_table::{IMAGE_SCN_CNT_CODE, IMAGE_SCN_MEM_EXECUTE};
use goblin::pe::PE;
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

pub const HEADER_SEGMENT: &str = "HEADER";

const TE_SIGNATURE: &[u8; 2] = b"VZ";

#[derive(Debug, Clone)]
pub struct ImageSection {
    name: String,
    range: MemoryRange,
    data: Vec<u8>,
    executable: bool,
}

impl ImageSection {
    pub fn new(name: &str, start: Address, data: Vec<u8>) -> Self {
        let range = MemoryRange::from_start_size(start, data.len() as u64);
        Self {
            name: name.to_string(),
            range,
            data,
            executable: false,
        }
    }

    pub fn with_virtual_size(mut self, size: u64) -> Self {
        self.range = MemoryRange::from_start_size(self.range.start(), size);
        self
    }

    pub fn with_executable(mut self, executable: bool) -> Self {
        self.executable = executable;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn range(&self) -> MemoryRange {
        self.range
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn is_executable(&self) -> bool {
        self.executable
    }
}

/// A loaded PE32+ image, addressed by virtual address.
#[derive(Debug, Clone)]
pub struct PeImage {
    image_base: Address,
    entry_point: Address,
    sections: Vec<ImageSection>,
    runtime_functions: Vec<MemoryRange>,
}

impl PeImage {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, MemoryError> {
        let file = File::open(path.as_ref())?;
        // The mapping is only read while the sections are copied out below.
        let mmap = unsafe { Mmap::map(&file) }?;
        Self::parse(&mmap)
    }

    pub fn parse(data: &[u8]) -> Result<Self, MemoryError> {
        if data.len() >= 2 && &data[..2] == TE_SIGNATURE {
            return Err(MemoryError::NotSupported("TE images".to_string()));
        }

        let pe = PE::parse(data)
            .map_err(|e| MemoryError::BinaryParseError(format!("Failed to parse PE: {}", e)))?;

        if !pe.is_64 {
            return Err(MemoryError::NotSupported("32-bit images".to_string()));
        }

        let image_base = Address::new(pe.image_base as u64);
        let headers_size = pe
            .header
            .optional_header
            .as_ref()
            .map(|h| h.windows_fields.size_of_headers as usize)
            .unwrap_or(0x400)
            .min(data.len());

        let mut sections = vec![ImageSection::new(HEADER_SEGMENT, image_base, data[..headers_size].to_vec())];

        for section in &pe.sections {
            let name = section.name().unwrap_or("").trim_end_matches('\0').to_string();
            let raw_start = section.pointer_to_raw_data as usize;
            let raw_end = raw_start
                .saturating_add(section.size_of_raw_data as usize)
                .min(data.len());
            let raw = if raw_start < raw_end {
                data[raw_start..raw_end].to_vec()
            } else {
                Vec::new()
            };

            let virtual_size = if section.virtual_size == 0 {
                section.size_of_raw_data as u64
            } else {
                section.virtual_size as u64
            };
            let executable = section.characteristics & (IMAGE_SCN_MEM_EXECUTE | IMAGE_SCN_CNT_CODE) != 0;

            sections.push(
                ImageSection::new(&name, image_base + section.virtual_address as u64, raw)
                    .with_virtual_size(virtual_size)
                    .with_executable(executable),
            );
        }

        let mut runtime_functions = Vec::new();
        if let Some(exception_data) = &pe.exception_data {
            for function in exception_data.functions() {
                match function {
                    Ok(f) if f.end_address > f.begin_address => {
                        runtime_functions.push(MemoryRange::new(
                            image_base + f.begin_address as u64,
                            image_base + f.end_address as u64,
                        ));
                    }
                    Ok(_) => {}
                    Err(e) => {
                        log::debug!("Skipping malformed runtime function entry: {}", e);
                    }
                }
            }
        }

        Ok(Self {
            image_base,
            entry_point: image_base + pe.entry as u64,
            sections,
            runtime_functions,
        })
    }

    /// Builds an image straight from sections, bypassing PE parsing.
    pub fn from_sections(image_base: Address, entry_point: Address, sections: Vec<ImageSection>) -> Self {
        Self {
            image_base,
            entry_point,
            sections,
            runtime_functions: Vec::new(),
        }
    }

    pub fn with_runtime_functions(mut self, functions: Vec<MemoryRange>) -> Self {
        self.runtime_functions = functions;
        self
    }

    pub fn image_base(&self) -> Address {
        self.image_base
    }

    pub fn entry_point(&self) -> Address {
        self.entry_point
    }

    pub fn sections(&self) -> &[ImageSection] {
        &self.sections
    }

    pub fn runtime_functions(&self) -> &[MemoryRange] {
        &self.runtime_functions
    }

    pub fn section_by_name(&self, name: &str) -> Option<&ImageSection> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn section_containing(&self, addr: Address) -> Option<&ImageSection> {
        self.sections.iter().find(|s| s.range.contains(addr))
    }

    /// Reads `len` bytes at `addr`; bytes past the raw data of a section read as zero.
    pub fn read_bytes(&self, addr: Address, len: usize) -> Result<Vec<u8>, MemoryError> {
        let section = self
            .section_containing(addr)
            .ok_or(MemoryError::OutOfBounds(addr.as_u64()))?;

        let offset = (addr.as_u64() - section.range.start().as_u64()) as usize;
        let mut out = vec![0u8; len];
        if offset < section.data.len() {
            let available = (section.data.len() - offset).min(len);
            out[..available].copy_from_slice(&section.data[offset..offset + available]);
        }
        Ok(out)
    }
}
