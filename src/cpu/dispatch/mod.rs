/*!
dispatch/mod.rs - `exec_instruction` orchestration

Opcode fetch, the speculative `PC+1` fetch every instruction pays for
regardless of length, Tier A's explicit-opcode match, and Tier B's
`(cc, bbb, aaa)` grouped dispatch all come together here. Nothing below
this module ever touches `cycles` directly — everything funnels through
`Cpu::fetch`/`Cpu::write`/`Cpu::idle`.
*/

mod branch;
mod group1;
mod group2;
mod group3;
mod tier_a;

use crate::cpu::decode::{addressing_mode, decompose};
use crate::cpu::flags::CpuStatus;
use crate::cpu::state::Cpu;
use crate::mmu::Mmu;

pub fn exec_instruction(cpu: &mut Cpu, mmu: &mut Mmu, bypass_breakpoints: bool) -> CpuStatus {
    if !bypass_breakpoints && cpu.breakpoints.contains(&cpu.pc) {
        return CpuStatus::Breakpoint;
    }

    let pc_before = cpu.pc;
    let opcode = cpu.fetch(mmu, cpu.pc);
    let n = cpu.fetch(mmu, cpu.pc.wrapping_add(1));

    if tier_a::dispatch(cpu, mmu, opcode, n) {
        cpu.pc = cpu.pc.wrapping_add(1);
        return finish(cpu, pc_before);
    }

    let (cc, bbb, aaa) = decompose(opcode);
    let mode = addressing_mode(cc, bbb);

    let handled = match cc {
        0b01 => group1::dispatch(cpu, mmu, aaa, mode, n),
        0b10 => group2::dispatch(cpu, mmu, aaa, mode, n),
        0b00 => {
            if bbb == 0b100 {
                branch::dispatch(cpu, mmu, aaa, n)
            } else {
                group3::dispatch(cpu, mmu, aaa, mode, n)
            }
        }
        _ => None,
    };

    match handled {
        None => {
            cpu.pc = pc_before.wrapping_add(1);
            CpuStatus::Invalid
        }
        Some(()) => {
            // `last_good_pc` only advances on a completed Tier-B
            // instruction — not Tier-A (flag ops, transfers, stack ops,
            // JSR/BRK/RTI/RTS), and not on an invalid opcode.
            cpu.last_good_pc = pc_before;
            finish(cpu, pc_before)
        }
    }
}

fn finish(cpu: &Cpu, pc_before: u16) -> CpuStatus {
    if cpu.pc == pc_before { CpuStatus::Halt } else { CpuStatus::Continue }
}
