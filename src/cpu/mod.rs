//! CPU façade: registers, flags, cycle accounting, addressing-mode
//! decode, and the two-tier instruction dispatcher, assembled into the
//! single public `Cpu` type the rest of the crate drives.

mod addressing;
mod arithmetic;
mod decode;
mod dispatch;
mod flags;
mod state;

pub use flags::{CpuStatus, Variant};
pub use state::Cpu;

impl Cpu {
    /// Decode and execute exactly one instruction. See
    /// `dispatch::exec_instruction` for the breakpoint/invalid/halt
    /// contract.
    pub fn exec_instruction(&mut self, mmu: &mut crate::mmu::Mmu, bypass_breakpoints: bool) -> CpuStatus {
        dispatch::exec_instruction(self, mmu, bypass_breakpoints)
    }
}
