/*!
group2.rs - Tier B, `cc = 10`: ASL, ROL, LSR, ROR, STX, LDX, DEC, INC.

STX/LDX operate on X rather than A and swap ZPX<->ZPY, ABX<->ABY relative
to the generic decode table (`decode::swap_index_register`). Their
accumulator-mode slot (`bbb == ACC`) coincides with opcodes Tier A already
claims (TXA/TAX/DEX/NOP), so it's never reached here.
*/

use crate::cpu::addressing::{operand_address, read_operand, write_operand};
use crate::cpu::arithmetic::{asl, dec, inc, lsr, rol, ror};
use crate::cpu::decode::{Mode, swap_index_register};
use crate::cpu::state::Cpu;
use crate::mmu::Mmu;

pub fn dispatch(cpu: &mut Cpu, mmu: &mut Mmu, aaa: u8, mode: Mode, n: u8) -> Option<()> {
    if mode == Mode::Invalid {
        return None;
    }
    let pc_before = cpu.pc;

    match aaa {
        0..=3 => shift_or_rotate(cpu, mmu, aaa, mode, n),
        4 => {
            // STX (register-swapped addressing)
            let store_mode = swap_index_register(mode);
            let x = cpu.x;
            write_operand(cpu, mmu, store_mode, n, x);
        }
        5 => {
            // LDX (register-swapped addressing)
            let load_mode = swap_index_register(mode);
            if let Some(v) = read_operand(cpu, mmu, load_mode, n) {
                cpu.x = v;
                cpu.update_zn(v);
            }
        }
        6 => rmw(cpu, mmu, mode, n, dec),
        7 => rmw(cpu, mmu, mode, n, inc),
        _ => unreachable!("aaa is a 3-bit field"),
    }

    cpu.pc = pc_before.wrapping_add(mode.size());
    Some(())
}

fn shift_or_rotate(cpu: &mut Cpu, mmu: &mut Mmu, aaa: u8, mode: Mode, n: u8) {
    let op: fn(&mut Cpu, u8) -> u8 = match aaa {
        0 => asl,
        1 => rol,
        2 => lsr,
        3 => ror,
        _ => unreachable!(),
    };
    if mode == Mode::Acc {
        let result = op(cpu, cpu.a);
        cpu.a = result;
    } else {
        rmw(cpu, mmu, mode, n, op);
    }
}

/// Read-modify-write: fetch the old value, transform it, write back the
/// result. No intermediate dummy write-back of the unmodified value — the
/// ground-truth reference's cycle model is fetch + write, not
/// fetch + write-unchanged + write, so a zero-page RMW costs 4 cycles
/// here, matching it.
fn rmw(cpu: &mut Cpu, mmu: &mut Mmu, mode: Mode, n: u8, transform: fn(&mut Cpu, u8) -> u8) {
    let Some(addr) = operand_address(cpu, mmu, mode, n) else {
        return; // IMM or otherwise unaddressable: silent skip
    };
    let old = cpu.fetch(mmu, addr);
    let new = transform(cpu, old);
    cpu.write(mmu, addr, new);
}
