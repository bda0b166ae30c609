// Mon Feb 02 2026 - Alex

use crate::analysis::{FunctionRange, Instruction, InstructionKind, InstructionSource, Operand, Register};
use crate::memory::{Address, MemoryError, MemoryRange, PeImage};
use iced_x86::{
    Decoder, DecoderOptions, Instruction as X86Instruction, Mnemonic, OpKind, Register as X86Register,
};
use indexmap::IndexMap;
use itertools::Itertools;
use std::collections::{BTreeMap, HashMap};

pub const ENTRY_FUNCTION_NAME: &str = "_ModuleEntryPoint";

/// Instruction source over a PE32+ image, backed by a full linear sweep of
/// every executable section.
pub struct X64ImageSource {
    image: PeImage,
    instructions: BTreeMap<Address, Instruction>,
    functions: Vec<FunctionRange>,
    xrefs: HashMap<Address, Vec<Address>>,
    comments: IndexMap<Address, String>,
    names: IndexMap<Address, String>,
}

impl X64ImageSource {
    pub fn new(image: PeImage) -> Self {
        let mut instructions = BTreeMap::new();
        let mut xrefs: HashMap<Address, Vec<Address>> = HashMap::new();

        for section in image.sections().iter().filter(|s| s.is_executable()) {
            let mut decoder = Decoder::with_ip(
                64,
                section.data(),
                section.range().start().as_u64(),
                DecoderOptions::NONE,
            );
            let mut raw = X86Instruction::default();

            while decoder.can_decode() {
                decoder.decode_out(&mut raw);
                if raw.is_invalid() {
                    continue;
                }

                let insn = convert(&raw);
                for op in insn.operands() {
                    if let Operand::DirectMemory(target) = op {
                        xrefs.entry(*target).or_default().push(insn.address());
                    }
                }
                if let Some(target) = branch_target(&raw) {
                    xrefs.entry(target).or_default().push(insn.address());
                }
                instructions.insert(insn.address(), insn);
            }
        }

        for refs in xrefs.values_mut() {
            refs.sort();
            refs.dedup();
        }

        let functions = discover_functions(&image, &instructions);
        log::debug!(
            "Decoded {} instructions, {} functions, {} referenced addresses",
            instructions.len(),
            functions.len(),
            xrefs.len()
        );

        Self {
            image,
            instructions,
            functions,
            xrefs,
            comments: IndexMap::new(),
            names: IndexMap::new(),
        }
    }

    pub fn image(&self) -> &PeImage {
        &self.image
    }

    pub fn instruction_count(&self) -> usize {
        self.instructions.len()
    }

    pub fn comments(&self) -> &IndexMap<Address, String> {
        &self.comments
    }

    pub fn names(&self) -> &IndexMap<Address, String> {
        &self.names
    }
}

impl InstructionSource for X64ImageSource {
    fn decode(&self, addr: Address) -> Option<Instruction> {
        self.instructions.get(&addr).cloned()
    }

    fn next_code_address(&self, addr: Address) -> Option<Address> {
        self.instructions
            .range((std::ops::Bound::Excluded(addr), std::ops::Bound::Unbounded))
            .next()
            .map(|(a, _)| *a)
    }

    fn previous_code_address(&self, addr: Address) -> Option<Address> {
        self.instructions.range(..addr).next_back().map(|(a, _)| *a)
    }

    fn function_containing(&self, addr: Address) -> Option<FunctionRange> {
        let idx = self.functions.partition_point(|f| f.start() <= addr);
        if idx == 0 {
            return None;
        }
        let candidate = &self.functions[idx - 1];
        if candidate.contains(addr) {
            Some(candidate.clone())
        } else {
            None
        }
    }

    fn all_functions(&self) -> Vec<FunctionRange> {
        self.functions.clone()
    }

    fn xrefs_to(&self, addr: Address) -> Vec<Address> {
        self.xrefs.get(&addr).cloned().unwrap_or_default()
    }

    fn read_bytes(&self, addr: Address, len: usize) -> Result<Vec<u8>, MemoryError> {
        self.image.read_bytes(addr, len)
    }

    fn segment_by_name(&self, name: &str) -> Option<MemoryRange> {
        self.image.section_by_name(name).map(|s| s.range())
    }

    fn set_comment(&mut self, addr: Address, text: &str) {
        self.comments.insert(addr, text.to_string());
    }

    fn set_name(&mut self, addr: Address, text: &str) {
        self.names.insert(addr, text.to_string());
    }
}

fn convert(raw: &X86Instruction) -> Instruction {
    let address = Address::new(raw.ip());
    let operands: Vec<Operand> = (0..raw.op_count()).map(|i| convert_operand(raw, i)).collect();
    let direct = matches!(
        raw.op0_kind(),
        OpKind::NearBranch16 | OpKind::NearBranch32 | OpKind::NearBranch64
    );

    let kind = match raw.mnemonic() {
        Mnemonic::Mov => InstructionKind::Move,
        Mnemonic::Lea => InstructionKind::LoadEffectiveAddress,
        Mnemonic::Call if direct => InstructionKind::Call,
        Mnemonic::Call => InstructionKind::IndirectCall,
        Mnemonic::Jmp if !direct => InstructionKind::IndirectJump,
        _ => InstructionKind::Other,
    };

    Instruction::new(address, kind, operands).with_size(raw.len() as u8)
}

fn convert_operand(raw: &X86Instruction, index: u32) -> Operand {
    match raw.op_kind(index) {
        OpKind::Register => Operand::Register(convert_register(raw.op_register(index))),
        OpKind::NearBranch16 | OpKind::NearBranch32 | OpKind::NearBranch64 => {
            Operand::Immediate(raw.near_branch_target())
        }
        OpKind::Immediate8
        | OpKind::Immediate8_2nd
        | OpKind::Immediate16
        | OpKind::Immediate32
        | OpKind::Immediate64
        | OpKind::Immediate8to16
        | OpKind::Immediate8to32
        | OpKind::Immediate8to64
        | OpKind::Immediate32to64 => Operand::Immediate(raw.immediate(index)),
        OpKind::Memory => {
            if raw.memory_index() != X86Register::None
                || matches!(raw.segment_prefix(), X86Register::FS | X86Register::GS)
            {
                Operand::Other
            } else if raw.is_ip_rel_memory_operand() {
                Operand::DirectMemory(Address::new(raw.ip_rel_memory_address()))
            } else if raw.memory_base() == X86Register::None {
                Operand::DirectMemory(Address::new(raw.memory_displacement64()))
            } else {
                Operand::Memory {
                    base: convert_register(raw.memory_base()),
                    displacement: raw.memory_displacement64() as i64,
                }
            }
        }
        _ => Operand::Other,
    }
}

fn convert_register(reg: X86Register) -> Register {
    match reg.full_register() {
        X86Register::RAX => Register::Rax,
        X86Register::RCX => Register::Rcx,
        X86Register::RDX => Register::Rdx,
        X86Register::RBX => Register::Rbx,
        X86Register::RSP => Register::Rsp,
        X86Register::RBP => Register::Rbp,
        X86Register::RSI => Register::Rsi,
        X86Register::RDI => Register::Rdi,
        X86Register::R8 => Register::R8,
        X86Register::R9 => Register::R9,
        X86Register::R10 => Register::R10,
        X86Register::R11 => Register::R11,
        X86Register::R12 => Register::R12,
        X86Register::R13 => Register::R13,
        X86Register::R14 => Register::R14,
        X86Register::R15 => Register::R15,
        X86Register::RIP => Register::Rip,
        other => Register::Other(other as u16),
    }
}

fn branch_target(raw: &X86Instruction) -> Option<Address> {
    match raw.op0_kind() {
        OpKind::NearBranch16 | OpKind::NearBranch32 | OpKind::NearBranch64 => {
            Some(Address::new(raw.near_branch_target()))
        }
        _ => None,
    }
}

/// Function bounds come from `.pdata` when the image carries it. Otherwise
/// every direct-call target plus the entry point starts a function that runs
/// to the next start or the end of its section.
fn discover_functions(image: &PeImage, instructions: &BTreeMap<Address, Instruction>) -> Vec<FunctionRange> {
    let entry = image.entry_point();
    let section_end = |addr: Address| {
        image
            .section_containing(addr)
            .map(|s| s.range().end())
            .unwrap_or(addr)
    };

    let mut functions: Vec<FunctionRange> = image
        .runtime_functions()
        .iter()
        .sorted_by_key(|r| r.start())
        .dedup_by(|a, b| a.start() == b.start())
        .map(|r| FunctionRange::new(r.start(), r.end()))
        .collect();

    if functions.is_empty() {
        let starts: Vec<Address> = instructions
            .values()
            .filter_map(|insn| insn.call_target())
            .filter(|target| instructions.contains_key(target))
            .chain(std::iter::once(entry))
            .sorted()
            .dedup()
            .collect();

        for (i, start) in starts.iter().enumerate() {
            let mut end = section_end(*start);
            if let Some(next) = starts.get(i + 1) {
                end = end.min(*next);
            }
            functions.push(FunctionRange::new(*start, end));
        }
    } else if !functions.iter().any(|f| f.contains(entry)) {
        let next = functions.iter().map(|f| f.start()).filter(|s| *s > entry).min();
        let end = next.map(|n| n.min(section_end(entry))).unwrap_or_else(|| section_end(entry));
        functions.push(FunctionRange::new(entry, end));
        functions.sort_by_key(|f| f.start());
    }

    functions
        .into_iter()
        .map(|f| {
            if f.contains(entry) {
                f.with_name(ENTRY_FUNCTION_NAME)
            } else {
                let name = format!("sub_{:X}", f.start().as_u64());
                f.with_name(&name)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::ImageSection;

    fn image(text: Vec<u8>) -> PeImage {
        let text = ImageSection::new(".text", Address::new(0x1000), text).with_executable(true);
        let data = ImageSection::new(".data", Address::new(0x3000), vec![0u8; 0x20]);
        PeImage::from_sections(Address::new(0), Address::new(0x1000), vec![text, data])
    }

    fn table_and_locate_protocol() -> Vec<u8> {
        vec![
            0x48, 0x8B, 0x42, 0x60, // mov rax, [rdx+0x60]
            0x48, 0x89, 0x05, 0xF5, 0x1F, 0x00, 0x00, // mov [rip+0x1ff5], rax  -> 0x3000
            0x48, 0x8D, 0x0D, 0xFE, 0x1F, 0x00, 0x00, // lea rcx, [rip+0x1ffe] -> 0x3010
            0xFF, 0x90, 0x40, 0x01, 0x00, 0x00, // call [rax+0x140]
            0xC3, // ret
        ]
    }

    #[test]
    fn test_operand_classification() {
        let src = X64ImageSource::new(image(table_and_locate_protocol()));

        let load = src.decode(Address::new(0x1000)).unwrap();
        assert_eq!(load.kind(), InstructionKind::Move);
        assert_eq!(load.destination(), Some(&Operand::Register(Register::Rax)));
        assert_eq!(
            load.source(),
            Some(&Operand::Memory { base: Register::Rdx, displacement: 0x60 })
        );

        let store = src.decode(Address::new(0x1004)).unwrap();
        assert_eq!(store.destination(), Some(&Operand::DirectMemory(Address::new(0x3000))));
        assert_eq!(store.source(), Some(&Operand::Register(Register::Rax)));

        let lea = src.decode(Address::new(0x100B)).unwrap();
        assert_eq!(lea.kind(), InstructionKind::LoadEffectiveAddress);
        assert_eq!(lea.source(), Some(&Operand::DirectMemory(Address::new(0x3010))));

        let call = src.decode(Address::new(0x1012)).unwrap();
        assert_eq!(call.kind(), InstructionKind::IndirectCall);
        assert_eq!(
            call.destination(),
            Some(&Operand::Memory { base: Register::Rax, displacement: 0x140 })
        );
    }

    #[test]
    fn test_xrefs_and_walk() {
        let src = X64ImageSource::new(image(table_and_locate_protocol()));
        assert_eq!(src.xrefs_to(Address::new(0x3000)), vec![Address::new(0x1004)]);
        assert_eq!(src.next_code_address(Address::new(0x1000)), Some(Address::new(0x1004)));
        assert_eq!(src.previous_code_address(Address::new(0x100B)), Some(Address::new(0x1004)));
        assert_eq!(src.segment_by_name(".data").map(|r| r.start()), Some(Address::new(0x3000)));
    }

    #[test]
    fn test_entry_function_without_pdata() {
        let src = X64ImageSource::new(image(table_and_locate_protocol()));
        let func = src.function_containing(Address::new(0x1012)).unwrap();
        assert_eq!(func.name(), Some(ENTRY_FUNCTION_NAME));
        assert_eq!(func.start(), Address::new(0x1000));
    }

    #[test]
    fn test_pdata_bounds_take_precedence() {
        let image = image(table_and_locate_protocol()).with_runtime_functions(vec![
            MemoryRange::new(Address::new(0x100B), Address::new(0x1019)),
            MemoryRange::new(Address::new(0x1000), Address::new(0x100B)),
        ]);
        let src = X64ImageSource::new(image);

        let functions = src.all_functions();
        assert_eq!(functions.len(), 2);
        assert_eq!(functions[0].name(), Some(ENTRY_FUNCTION_NAME));
        assert_eq!(functions[0].end(), Address::new(0x100B));
        let callee = src.function_containing(Address::new(0x1012)).unwrap();
        assert_eq!(callee.name(), Some("sub_100B"));
    }

    #[test]
    fn test_direct_call_targets_split_functions() {
        let mut text = vec![
            0xE8, 0x0B, 0x00, 0x00, 0x00, // call 0x1010
            0xC3, // ret
        ];
        text.resize(0x10, 0xCC);
        text.push(0xC3);

        let src = X64ImageSource::new(image(text));
        let functions = src.all_functions();
        assert_eq!(functions.len(), 2);
        assert_eq!(functions[0].end(), Address::new(0x1010));
        assert_eq!(functions[1].name(), Some("sub_1010"));
        assert_eq!(src.xrefs_to(Address::new(0x1010)), vec![Address::new(0x1000)]);
        assert_eq!(
            src.decode(Address::new(0x1000)).and_then(|i| i.call_target()),
            Some(Address::new(0x1010))
        );
    }
}
