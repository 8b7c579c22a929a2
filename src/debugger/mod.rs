/*!
debugger/mod.rs - the interactive command shell

A thin, newline-delimited REPL that drives a `Cpu`/`Mmu` pair through their
public interface only: nothing in here reaches into cycle accounting,
addressing-mode decode, or flag bits directly. Dispatch is on the first
character of each line, per the grammar this crate's debugger implements;
an empty line is the single most common case (step once, ignoring
breakpoints) so it's checked first.
*/

pub mod format;
pub mod numeric;

use crate::cpu::{Cpu, CpuStatus};
use crate::mmu::Mmu;
use std::fs::File;
use std::io::{self, BufRead, Write};

pub struct Debugger<R> {
    input: R,
    log_file: Option<File>,
}

impl<R: BufRead> Debugger<R> {
    pub fn new(input: R) -> Self {
        Self { input, log_file: None }
    }

    /// Reads commands until `q` or end of input. Returns the process exit
    /// code: always 0 from this loop (1 is reserved for ROM-open failure,
    /// handled by the caller before the debugger ever starts).
    pub fn run(&mut self, cpu: &mut Cpu, mmu: &mut Mmu) -> i32 {
        loop {
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return 0, // EOF
                Ok(_) => {}
                Err(e) => {
                    eprintln!("error reading command: {e}");
                    return 0;
                }
            }
            let line = line.trim_end_matches(['\r', '\n']);

            if line.is_empty() {
                self.step(cpu, mmu, true);
                continue;
            }

            let mut chars = line.chars();
            let Some(first) = chars.next() else { continue };
            let rest = chars.as_str().trim();

            match first {
                'q' => return 0,
                'r' => self.run_until_stop(cpu, mmu),
                't' => self.set_variant(cpu, rest),
                'l' => self.begin_log(rest),
                'j' => self.jump(cpu, rest),
                'b' => self.add_breakpoint(cpu, rest),
                'i' => self.inspect(cpu, mmu, rest),
                _ => self.step(cpu, mmu, false),
            }
        }
    }

    /// Logs the pre-instruction trace line (if logging is on) before
    /// stepping, matching the original debugger's behavior of recording
    /// the state about to execute rather than the state just produced.
    /// A breakpoint hit short-circuits before any cycles and before the
    /// log line is written.
    fn step(&mut self, cpu: &mut Cpu, mmu: &mut Mmu, bypass_breakpoints: bool) -> CpuStatus {
        if bypass_breakpoints || !cpu.breakpoints.contains(&cpu.pc) {
            self.log(cpu, mmu);
        }
        let status = cpu.exec_instruction(mmu, bypass_breakpoints);
        self.report(status);
        status
    }

    fn run_until_stop(&mut self, cpu: &mut Cpu, mmu: &mut Mmu) {
        loop {
            let status = self.step(cpu, mmu, false);
            if status != CpuStatus::Continue {
                break;
            }
        }
    }

    fn log(&mut self, cpu: &Cpu, mmu: &Mmu) {
        if let Some(file) = self.log_file.as_mut() {
            let line = format::log_line(cpu, mmu);
            if let Err(e) = writeln!(file, "{line}") {
                eprintln!("error writing execution log: {e}");
            }
        }
    }

    fn report(&self, status: CpuStatus) {
        match status {
            CpuStatus::Continue => {}
            CpuStatus::Halt => println!("HALT"),
            CpuStatus::Invalid => println!("INVALID INSTRUCTION"),
            CpuStatus::Breakpoint => println!("BREAKPOINT"),
        }
    }

    fn set_variant(&mut self, cpu: &mut Cpu, arg: &str) {
        match arg.parse() {
            Ok(variant) => cpu.variant = variant,
            Err(e) => eprintln!("{e}"),
        }
    }

    fn begin_log(&mut self, path: &str) {
        match File::create(path) {
            Ok(file) => self.log_file = Some(file),
            Err(e) => eprintln!("failed to open log file {path}: {e}"),
        }
    }

    fn jump(&mut self, cpu: &mut Cpu, arg: &str) {
        match numeric::parse(arg) {
            Some(addr) => cpu.pc = addr as u16,
            None => eprintln!("bad address: {arg}"),
        }
    }

    fn add_breakpoint(&mut self, cpu: &mut Cpu, arg: &str) {
        match numeric::parse(arg) {
            Some(addr) => {
                cpu.breakpoints.insert(addr as u16);
            }
            None => eprintln!("bad address: {arg}"),
        }
    }

    fn inspect(&mut self, cpu: &Cpu, mmu: &Mmu, arg: &str) {
        if arg.is_empty() {
            println!("{}", format::dump_cpu(cpu));
        } else {
            match numeric::parse(arg) {
                Some(addr) => println!("{}", format::dump_byte(mmu, addr as u16)),
                None => eprintln!("bad address: {arg}"),
            }
        }
    }
}

/// Convenience entry point for `main.rs`: wraps stdin.
pub fn run_stdin(cpu: &mut Cpu, mmu: &mut Mmu) -> i32 {
    let stdin = io::stdin();
    let mut debugger = Debugger::new(stdin.lock());
    debugger.run(cpu, mmu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::Variant;
    use std::io::Cursor;

    fn setup(program: &[u8]) -> (Cpu, Mmu) {
        let mut mmu = Mmu::new();
        mmu.write_byte(0xFFFC, 0x00);
        mmu.write_byte(0xFFFD, 0x80);
        for (i, byte) in program.iter().enumerate() {
            mmu.write_byte(0x8000 + i as u16, *byte);
        }
        let cpu = Cpu::new(&mmu, Variant::Mos);
        (cpu, mmu)
    }

    #[test]
    fn empty_line_steps_once_bypassing_breakpoints() {
        let (mut cpu, mut mmu) = setup(&[0xEA, 0xEA]);
        cpu.breakpoints.insert(0x8000);
        let input = Cursor::new("\nq\n");
        let mut debugger = Debugger::new(input);
        debugger.run(&mut cpu, &mut mmu);
        assert_eq!(cpu.pc, 0x8001);
    }

    #[test]
    fn j_command_sets_pc() {
        let (mut cpu, mut mmu) = setup(&[0xEA]);
        let input = Cursor::new("j 0x9000\nq\n");
        let mut debugger = Debugger::new(input);
        debugger.run(&mut cpu, &mut mmu);
        assert_eq!(cpu.pc, 0x9000);
    }

    #[test]
    fn b_command_adds_a_breakpoint_that_a_plain_step_honors() {
        let (mut cpu, mut mmu) = setup(&[0xEA, 0xEA]);
        let input = Cursor::new("b $8000\nx\nq\n");
        let mut debugger = Debugger::new(input);
        debugger.run(&mut cpu, &mut mmu);
        assert_eq!(cpu.pc, 0x8000); // breakpoint hit, no step taken
    }

    #[test]
    fn t_command_switches_variant() {
        let (mut cpu, mut mmu) = setup(&[0xEA]);
        let input = Cursor::new("t NES\nq\n");
        let mut debugger = Debugger::new(input);
        debugger.run(&mut cpu, &mut mmu);
        assert_eq!(cpu.variant, Variant::Nes);
    }

    #[test]
    fn r_command_runs_until_halt() {
        // JMP $8000 at 0x8000 halts immediately (PC unchanged after step)
        let (mut cpu, mut mmu) = setup(&[0x4C, 0x00, 0x80]);
        let input = Cursor::new("r\nq\n");
        let mut debugger = Debugger::new(input);
        debugger.run(&mut cpu, &mut mmu);
        assert_eq!(cpu.pc, 0x8000);
    }

    #[test]
    fn quit_returns_immediately() {
        let (mut cpu, mut mmu) = setup(&[0xEA]);
        let input = Cursor::new("q\n");
        let mut debugger = Debugger::new(input);
        let code = debugger.run(&mut cpu, &mut mmu);
        assert_eq!(code, 0);
        assert_eq!(cpu.pc, 0x8000);
    }
}
