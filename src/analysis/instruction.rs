// Tue Jan 13 2026 - Alex

use crate::memory::Address;
use serde::Serialize;
use std::fmt;

/// General purpose registers of the x64 calling convention. Sub-registers
/// (`eax`, `cx`, `r8d`, ...) are folded into their 64-bit parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Register {
    Rax,
    Rcx,
    Rdx,
    Rbx,
    Rsp,
    Rbp,
    Rsi,
    Rdi,
    R8,
    R9,
    R10,
    R11,
    R12,
    R13,
    R14,
    R15,
    Rip,
    Other(u16),
}

impl Register {
    pub fn name(&self) -> String {
        match self {
            Register::Rax => "rax".to_string(),
            Register::Rcx => "rcx".to_string(),
            Register::Rdx => "rdx".to_string(),
            Register::Rbx => "rbx".to_string(),
            Register::Rsp => "rsp".to_string(),
            Register::Rbp => "rbp".to_string(),
            Register::Rsi => "rsi".to_string(),
            Register::Rdi => "rdi".to_string(),
            Register::R8 => "r8".to_string(),
            Register::R9 => "r9".to_string(),
            Register::R10 => "r10".to_string(),
            Register::R11 => "r11".to_string(),
            Register::R12 => "r12".to_string(),
            Register::R13 => "r13".to_string(),
            Register::R14 => "r14".to_string(),
            Register::R15 => "r15".to_string(),
            Register::Rip => "rip".to_string(),
            Register::Other(id) => format!("reg{}", id),
        }
    }

    /// Integer argument registers in Microsoft x64 order.
    pub fn argument(index: usize) -> Option<Register> {
        match index {
            0 => Some(Register::Rcx),
            1 => Some(Register::Rdx),
            2 => Some(Register::R8),
            3 => Some(Register::R9),
            _ => None,
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operand {
    Register(Register),
    /// `[base + displacement]`
    Memory { base: Register, displacement: i64 },
    /// Absolute or rip-relative global, already resolved to its target.
    DirectMemory(Address),
    /// Immediate values and direct branch targets.
    Immediate(u64),
    /// Any addressing form the analyses never match on (scaled index, segment based, ...).
    Other,
}

impl Operand {
    pub fn register(&self) -> Option<Register> {
        match self {
            Operand::Register(reg) => Some(*reg),
            _ => None,
        }
    }

    pub fn direct_address(&self) -> Option<Address> {
        match self {
            Operand::DirectMemory(addr) => Some(*addr),
            _ => None,
        }
    }

    pub fn is_register(&self, reg: Register) -> bool {
        matches!(self, Operand::Register(r) if *r == reg)
    }

    pub fn is_direct_memory(&self, addr: Address) -> bool {
        matches!(self, Operand::DirectMemory(a) if *a == addr)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Register(reg) => write!(f, "{}", reg),
            Operand::Memory { base, displacement } if *displacement < 0 => {
                write!(f, "[{}-0x{:x}]", base, displacement.unsigned_abs())
            }
            Operand::Memory { base, displacement } => write!(f, "[{}+0x{:x}]", base, displacement),
            Operand::DirectMemory(addr) => write!(f, "[0x{:x}]", addr),
            Operand::Immediate(value) => write!(f, "0x{:x}", value),
            Operand::Other => write!(f, "?"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InstructionKind {
    Move,
    LoadEffectiveAddress,
    /// Direct near call; the target is the first operand as an immediate.
    Call,
    IndirectCall,
    IndirectJump,
    Other,
}

impl InstructionKind {
    pub fn mnemonic(&self) -> &'static str {
        match self {
            InstructionKind::Move => "mov",
            InstructionKind::LoadEffectiveAddress => "lea",
            InstructionKind::Call | InstructionKind::IndirectCall => "call",
            InstructionKind::IndirectJump => "jmp",
            InstructionKind::Other => "insn",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instruction {
    address: Address,
    size: u8,
    kind: InstructionKind,
    operands: Vec<Operand>,
}

impl Instruction {
    pub fn new(address: Address, kind: InstructionKind, operands: Vec<Operand>) -> Self {
        Self {
            address,
            size: 0,
            kind,
            operands,
        }
    }

    pub fn mov(address: Address, dst: Operand, src: Operand) -> Self {
        Self::new(address, InstructionKind::Move, vec![dst, src])
    }

    pub fn lea(address: Address, dst: Register, src: Operand) -> Self {
        Self::new(address, InstructionKind::LoadEffectiveAddress, vec![Operand::Register(dst), src])
    }

    pub fn call(address: Address, target: Address) -> Self {
        Self::new(address, InstructionKind::Call, vec![Operand::Immediate(target.as_u64())])
    }

    pub fn indirect_call(address: Address, target: Operand) -> Self {
        Self::new(address, InstructionKind::IndirectCall, vec![target])
    }

    pub fn indirect_jump(address: Address, target: Operand) -> Self {
        Self::new(address, InstructionKind::IndirectJump, vec![target])
    }

    pub fn other(address: Address, operands: Vec<Operand>) -> Self {
        Self::new(address, InstructionKind::Other, operands)
    }

    pub fn with_size(mut self, size: u8) -> Self {
        self.size = size;
        self
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn kind(&self) -> InstructionKind {
        self.kind
    }

    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }

    pub fn operand(&self, index: usize) -> Option<&Operand> {
        self.operands.get(index)
    }

    pub fn destination(&self) -> Option<&Operand> {
        self.operand(0)
    }

    pub fn source(&self) -> Option<&Operand> {
        self.operand(1)
    }

    pub fn is_move(&self) -> bool {
        self.kind == InstructionKind::Move
    }

    pub fn is_lea(&self) -> bool {
        self.kind == InstructionKind::LoadEffectiveAddress
    }

    pub fn is_indirect_branch(&self) -> bool {
        matches!(self.kind, InstructionKind::IndirectCall | InstructionKind::IndirectJump)
    }

    pub fn call_target(&self) -> Option<Address> {
        if self.kind != InstructionKind::Call {
            return None;
        }
        match self.operand(0) {
            Some(Operand::Immediate(target)) => Some(Address::new(*target)),
            _ => None,
        }
    }

    /// True when the first operand is exactly `reg`, i.e. the instruction writes it.
    pub fn writes_register(&self, reg: Register) -> bool {
        self.destination().map(|op| op.is_register(reg)).unwrap_or(false)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operands: Vec<String> = self.operands.iter().map(|op| op.to_string()).collect();
        write!(f, "{}: {} {}", self.address, self.kind.mnemonic(), operands.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_display() {
        let op = Operand::Memory { base: Register::Rdx, displacement: 0x60 };
        assert_eq!(op.to_string(), "[rdx+0x60]");
        let op = Operand::Memory { base: Register::Rbp, displacement: -0x10 };
        assert_eq!(op.to_string(), "[rbp-0x10]");
        assert_eq!(Operand::DirectMemory(Address::new(0x401000)).to_string(), "[0x401000]");
    }

    #[test]
    fn test_call_target_only_for_direct_calls() {
        let direct = Instruction::call(Address::new(0x1000), Address::new(0x2000));
        assert_eq!(direct.call_target(), Some(Address::new(0x2000)));

        let indirect = Instruction::indirect_call(
            Address::new(0x1005),
            Operand::Memory { base: Register::Rax, displacement: 0x140 },
        );
        assert_eq!(indirect.call_target(), None);
        assert!(indirect.is_indirect_branch());
    }

    #[test]
    fn test_writes_register() {
        let insn = Instruction::mov(
            Address::new(0x1000),
            Operand::Register(Register::Rax),
            Operand::Immediate(0),
        );
        assert!(insn.writes_register(Register::Rax));
        assert!(!insn.writes_register(Register::Rcx));
    }

    #[test]
    fn test_argument_registers() {
        assert_eq!(Register::argument(0), Some(Register::Rcx));
        assert_eq!(Register::argument(1), Some(Register::Rdx));
        assert_eq!(Register::argument(4), None);
    }
}
