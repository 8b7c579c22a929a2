//! Binary entry point: load a flat ROM image into a fresh MMU, reset a
//! CPU against it, and hand control to the debugger REPL on stdin.

use m6502::cpu::{Cpu, Variant};
use m6502::mmu::Mmu;
use m6502::{debugger, rom};
use std::process::ExitCode;

fn main() -> ExitCode {
    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: m6502 <rom-path>");
            return ExitCode::from(1);
        }
    };

    let bytes = match rom::load(&path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(1);
        }
    };

    let mut mmu = Mmu::new();
    rom::install(&mut mmu, &bytes);
    let mut cpu = Cpu::new(&mmu, Variant::Mos);

    let code = debugger::run_stdin(&mut cpu, &mut mmu);
    ExitCode::from(code as u8)
}
