//! Tier B, `cc = 01`: ORA, AND, EOR, ADC, STA, LDA, CMP, SBC.

use crate::cpu::addressing::{read_operand, write_operand};
use crate::cpu::arithmetic::{adc, compare, sbc};
use crate::cpu::decode::Mode;
use crate::cpu::state::Cpu;
use crate::mmu::Mmu;

/// Returns `None` for an invalid addressing-mode slot (propagated by the
/// caller as `CpuStatus::Invalid`); `Some(())` otherwise, including the
/// silent-skip cases (e.g. `STA` with an `IMM` slot, which can't occur
/// from real opcodes but is handled the same way as any other
/// unsupported combination).
pub fn dispatch(cpu: &mut Cpu, mmu: &mut Mmu, aaa: u8, mode: Mode, n: u8) -> Option<()> {
    if mode == Mode::Invalid {
        return None;
    }
    let pc_before = cpu.pc;

    match aaa {
        0 => {
            // ORA
            if let Some(v) = read_operand(cpu, mmu, mode, n) {
                cpu.a |= v;
                cpu.update_zn(cpu.a);
            }
        }
        1 => {
            // AND
            if let Some(v) = read_operand(cpu, mmu, mode, n) {
                cpu.a &= v;
                cpu.update_zn(cpu.a);
            }
        }
        2 => {
            // EOR
            if let Some(v) = read_operand(cpu, mmu, mode, n) {
                cpu.a ^= v;
                cpu.update_zn(cpu.a);
            }
        }
        3 => {
            // ADC
            if let Some(v) = read_operand(cpu, mmu, mode, n) {
                adc(cpu, v);
            }
        }
        4 => {
            // STA
            let a = cpu.a;
            write_operand(cpu, mmu, mode, n, a);
        }
        5 => {
            // LDA
            if let Some(v) = read_operand(cpu, mmu, mode, n) {
                cpu.a = v;
                cpu.update_zn(v);
            }
        }
        6 => {
            // CMP
            if let Some(v) = read_operand(cpu, mmu, mode, n) {
                compare(cpu, cpu.a, v);
            }
        }
        7 => {
            // SBC
            if let Some(v) = read_operand(cpu, mmu, mode, n) {
                sbc(cpu, v);
            }
        }
        _ => unreachable!("aaa is a 3-bit field"),
    }

    cpu.pc = pc_before.wrapping_add(mode.size());
    Some(())
}
