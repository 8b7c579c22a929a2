/*!
group3.rs - Tier B, `cc = 00`, `bbb != 0b100`: BIT, JMP (abs/ind), STY,
LDY, CPY, CPX. `aaa == 0` has no assigned operation and is invalid.

JMP doesn't dereference its operand the way the other members of this
group do — its "operand" *is* the constructed address — so it bypasses
`read_operand`/`write_operand` entirely and does its own PC bookkeeping,
same as branches.
*/

use crate::cpu::addressing::{read_operand, read_word_indirect_bug, write_operand};
use crate::cpu::arithmetic::compare;
use crate::cpu::decode::Mode;
use crate::cpu::flags::{NEGATIVE, OVERFLOW, ZERO};
use crate::cpu::state::Cpu;
use crate::mmu::Mmu;

pub fn dispatch(cpu: &mut Cpu, mmu: &mut Mmu, aaa: u8, mode: Mode, n: u8) -> Option<()> {
    if aaa == 0 {
        return None;
    }

    match aaa {
        2 => return Some(jmp_abs(cpu, mmu, n)),
        3 => return Some(jmp_ind(cpu, mmu, n)),
        _ => {}
    }

    if mode == Mode::Invalid {
        return None;
    }
    let pc_before = cpu.pc;

    match aaa {
        1 => bit(cpu, mmu, mode, n),
        4 => {
            let y = cpu.y;
            write_operand(cpu, mmu, mode, n, y);
        }
        5 => {
            if let Some(v) = read_operand(cpu, mmu, mode, n) {
                cpu.y = v;
                cpu.update_zn(v);
            }
        }
        6 => {
            if let Some(v) = read_operand(cpu, mmu, mode, n) {
                compare(cpu, cpu.y, v);
            }
        }
        7 => {
            if let Some(v) = read_operand(cpu, mmu, mode, n) {
                compare(cpu, cpu.x, v);
            }
        }
        _ => unreachable!("aaa is a 3-bit field"),
    }

    cpu.pc = pc_before.wrapping_add(mode.size());
    Some(())
}

/// `BIT` is only meaningful against memory (`ZPG`/`ABS`); any other slot
/// is a silent no-op per the generic unsupported-addressing-mode rule.
fn bit(cpu: &mut Cpu, mmu: &mut Mmu, mode: Mode, n: u8) {
    if !matches!(mode, Mode::Zpg | Mode::Abs) {
        return;
    }
    if let Some(v) = read_operand(cpu, mmu, mode, n) {
        cpu.assign_flag(ZERO, cpu.a & v == 0);
        cpu.assign_flag(NEGATIVE, v & 0x80 != 0);
        cpu.assign_flag(OVERFLOW, v & 0x40 != 0);
    }
}

fn jmp_abs(cpu: &mut Cpu, mmu: &mut Mmu, n: u8) {
    let origin = cpu.pc;
    let hi = cpu.fetch(mmu, origin.wrapping_add(2));
    let target = u16::from_le_bytes([n, hi]);
    cpu.last_jump_origin = Some(origin);
    cpu.last_jump_target = Some(target);
    cpu.pc = target;
}

fn jmp_ind(cpu: &mut Cpu, mmu: &mut Mmu, n: u8) {
    let origin = cpu.pc;
    let hi = cpu.fetch(mmu, origin.wrapping_add(2));
    let ptr = u16::from_le_bytes([n, hi]);
    let target = read_word_indirect_bug(cpu, mmu, ptr);
    cpu.last_jump_origin = Some(origin);
    cpu.last_jump_target = Some(target);
    cpu.pc = target;
}
