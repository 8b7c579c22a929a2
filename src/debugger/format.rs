//! State pretty-printing and the per-instruction execution log line.

use crate::cpu::Cpu;
use crate::mmu::Mmu;

/// `PPPP II` + 32 spaces + `A:AA X:XX Y:YY P:PP`, all hex, zero-padded.
/// `PPPP` is the PC of the instruction about to execute; `II` is the
/// opcode byte fetched there. Registers are sampled *before* that
/// instruction runs, so each log line is a pre-state trace entry — call
/// this ahead of `exec_instruction`, not after.
pub fn log_line(cpu: &Cpu, mmu: &Mmu) -> String {
    let opcode = mmu.read_byte(cpu.pc);
    format!(
        "{:04X} {:02X}{}A:{:02X} X:{:02X} Y:{:02X} P:{:02X}",
        cpu.pc,
        opcode,
        " ".repeat(32),
        cpu.a,
        cpu.x,
        cpu.y,
        cpu.sf
    )
}

/// Full register/flag dump for the `i` command without an address argument.
pub fn dump_cpu(cpu: &Cpu) -> String {
    format!(
        "PC:{:04X} A:{:02X} X:{:02X} Y:{:02X} SP:{:02X} P:{:02X} cycles:{}",
        cpu.pc, cpu.a, cpu.x, cpu.y, cpu.sp, cpu.sf, cpu.cycles
    )
}

/// Single-byte memory dump for `i <addr>`.
pub fn dump_byte(mmu: &Mmu, addr: u16) -> String {
    format!("{:04X}: {:02X}", addr, mmu.read_byte(addr))
}
