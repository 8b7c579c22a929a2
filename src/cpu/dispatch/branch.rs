//! Tier B, `cc = 00`, `bbb == 0b100`: the eight conditional branches.
//!
//! `aaa` decomposes further into `ff` (flag index: 0=N, 1=V, 2=C, 3=Z) and
//! `c` (the polarity branched on). Taken branches cost one idle cycle;
//! the page-crossing second idle cycle is a documented, unimplemented gap.

use crate::cpu::flags::BRANCH_FLAG_MASKS;
use crate::cpu::state::Cpu;
use crate::mmu::Mmu;

pub fn dispatch(cpu: &mut Cpu, mmu: &mut Mmu, aaa: u8, n: u8) -> Option<()> {
    let ff = (aaa >> 1) & 0b11;
    let c = aaa & 0b1;
    let mask = BRANCH_FLAG_MASKS[ff as usize];
    let flag_set = cpu.get_flag(mask);
    let taken = (flag_set as u8) == c;

    let origin = cpu.pc;
    cpu.pc = origin.wrapping_add(2);

    if taken {
        cpu.idle(mmu);
        let offset = n as i8 as i16;
        let target = (cpu.pc as i16).wrapping_add(offset) as u16;
        cpu.last_jump_origin = Some(origin);
        cpu.last_jump_target = Some(target);
        cpu.pc = target;
    }

    Some(())
}
