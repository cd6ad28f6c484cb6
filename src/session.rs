//! Trap-time debugger session: register snapshot, command loop, memory
//! examine and live disassembly.
//!
//! A session is created at trap entry with the register snapshot the trap
//! glue saved, runs its command loop until `c`, writes the adjusted program
//! counter back, and is gone. Nothing persists across traps.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::console::Console;
use crate::decoder::decode_at;
use crate::editor::LineEditor;
use crate::exception::{classify, TrapKind};
use crate::memory::Bus;

pub const REG_COUNT: usize = 37;

// Snapshot slot layout, as saved by the trap-entry glue: x0..x30 first,
// then the system registers. Slot 29 holds the interrupted stack pointer.
pub const REG_SP: usize = 29;
pub const REG_LR: usize = 30;
pub const REG_ELR: usize = 31;
pub const REG_SPSR: usize = 32;
pub const REG_ESR: usize = 33;
pub const REG_FAR: usize = 34;
pub const REG_SCTLR: usize = 35;
pub const REG_TCR: usize = 36;

#[derive(Error, Debug)]
pub enum DebugError {
    /// A trap arrived while the debugger was already running. Fatal by
    /// design: the stack may be corrupt, so the embedder must halt rather
    /// than re-enter.
    #[error("exception taken while the debugger was active")]
    ReentrantTrap,
    #[error(transparent)]
    Bus(#[from] anyhow::Error),
}

// serde has no built-in Serialize/Deserialize impl for arrays longer than 32
// elements, so the `[u64; REG_COUNT]` (37) field needs an explicit helper.
// This serializes the array as a plain sequence, producing byte-identical JSON
// to a natively-supported array (a JSON array of 37 numbers).
mod reg_array_serde {
    use super::REG_COUNT;
    use serde::de::{Error, SeqAccess, Visitor};
    use serde::ser::SerializeTuple;
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S: Serializer>(
        regs: &[u64; REG_COUNT],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(REG_COUNT)?;
        for r in regs.iter() {
            tup.serialize_element(r)?;
        }
        tup.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<[u64; REG_COUNT], D::Error> {
        struct ArrayVisitor;
        impl<'de> Visitor<'de> for ArrayVisitor {
            type Value = [u64; REG_COUNT];
            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "an array of {} u64 values", REG_COUNT)
            }
            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut out = [0u64; REG_COUNT];
                for (i, slot) in out.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| Error::invalid_length(i, &self))?;
                }
                Ok(out)
            }
        }
        deserializer.deserialize_tuple(REG_COUNT, ArrayVisitor)
    }
}

/// The 37-slot register snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegFile {
    #[serde(with = "reg_array_serde")]
    pub regs: [u64; REG_COUNT],
}

impl Default for RegFile {
    fn default() -> Self {
        Self { regs: [0; REG_COUNT] }
    }
}

impl RegFile {
    pub fn elr(&self) -> u64 {
        self.regs[REG_ELR]
    }

    pub fn sp(&self) -> u64 {
        self.regs[REG_SP]
    }
}

pub struct DebuggerSession<'a, C: Console, B: Bus> {
    pub regs: RegFile,
    console: &'a mut C,
    bus: &'a mut B,
    editor: LineEditor,
    /// Re-entrancy counter: nonzero while the command loop is active. A
    /// trap reported while nonzero is fatal.
    pub depth: u32,
}

impl<'a, C: Console, B: Bus> DebuggerSession<'a, C, B> {
    pub fn new(regs: RegFile, console: &'a mut C, bus: &'a mut B) -> Self {
        Self { regs, console, bus, editor: LineEditor::new(), depth: 0 }
    }

    fn print(&mut self, s: &str) {
        self.console.put_str(s);
    }

    /// Report a trap to the user. Called by the trap glue before `run`.
    /// If the debugger is already active the state is printed and the
    /// fatal [`DebugError::ReentrantTrap`] returned; the embedder must not
    /// resume after it.
    pub fn report_trap(&mut self, kind: TrapKind) -> Result<(), DebugError> {
        let line = classify(kind, self.regs.regs[REG_ESR]);
        self.print(&line);
        self.print("\n");
        if self.depth > 0 {
            self.print("Exception in debugger!\n");
            self.dump_system_registers();
            return Err(DebugError::ReentrantTrap);
        }
        Ok(())
    }

    /// The command loop. Returns when `c` is issued, with the saved
    /// program counter advanced past the trapping instruction.
    pub fn run(&mut self) {
        self.depth += 1;
        loop {
            let line = self.editor.read_line(self.console);
            let mut tokens = line.split_whitespace();
            let cmd = tokens.next().unwrap_or("");
            debug!(command = cmd, "dispatch");
            match cmd.as_bytes().first().copied() {
                None | Some(b'?') | Some(b'h') => self.help(),
                Some(b'c') => {
                    // skip over the trapping instruction
                    self.regs.regs[REG_ELR] = self.regs.regs[REG_ELR].wrapping_add(4);
                    break;
                }
                Some(b'r') => self.dump_registers(),
                Some(first @ (b'x' | b'i')) => {
                    let (start, end) = self.parse_range(first, tokens.next(), tokens.next());
                    let result = if first == b'i' {
                        self.disassemble(start, end)
                    } else {
                        self.examine(start, end)
                    };
                    if let Err(e) = result {
                        self.print(&format!("ERROR: {}\n", e));
                    }
                }
                Some(_) => self.print("ERROR: unknown command.\n"),
            }
        }
        self.depth -= 1;
    }

    fn help(&mut self) {
        self.print(
            "Mini debugger commands:\n  ?/h\t\tthis help\n  r\t\tdump registers\n  x [os [oe]]\texamine memory from offset start (os) to offset end (oe)\n  i [os [oe]]\tdisassemble instruction from offset start to offset end\n  c\t\tcontinue execution\n",
        );
    }

    fn dump_registers(&mut self) {
        for i in 0..31 {
            if i > 0 && i % 3 == 0 {
                self.print("\n");
            }
            let pad = if i < 10 { " " } else { "" };
            let line = format!("{}x{}: {:16x}  ", pad, i, self.regs.regs[i]);
            self.print(&line);
        }
        self.dump_system_registers();
    }

    fn dump_system_registers(&mut self) {
        let r = &self.regs.regs;
        let text = format!(
            "elr_el1: {:x}  spsr_el1: {:x}\n  esr_el1: {:x}  far_el1: {:x}\nsctlr_el1: {:x}  tcr_el1: {:x}\n",
            r[REG_ELR], r[REG_SPSR], r[REG_ESR], r[REG_FAR], r[REG_SCTLR], r[REG_TCR]
        );
        self.print(&text);
    }

    /// Resolve the zero/one/two argument forms of `x` and `i` into a
    /// half-open `[start, end)` range. The window clamps are applied by
    /// the consumers.
    fn parse_range(&self, cmd: u8, first: Option<&str>, second: Option<&str>) -> (u64, u64) {
        match first {
            Some(a) => {
                let start = self.parse_addr(a);
                let end = second.map(|b| self.parse_addr(b)).unwrap_or(start);
                (start, end)
            }
            None => {
                let at = if cmd == b'i' {
                    // elr, or lr when elr is empty
                    if self.regs.elr() != 0 {
                        self.regs.elr()
                    } else {
                        self.regs.regs[REG_LR]
                    }
                } else {
                    self.regs.sp()
                };
                (at, at)
            }
        }
    }

    /// Address expression: a bare literal (decimal or `0x` hex), or
    /// `x<N>`/`r<N>` with optional `+`/`-` literal offset. Out-of-range
    /// register indices contribute base 0.
    fn parse_addr(&self, tok: &str) -> u64 {
        let bytes = tok.as_bytes();
        let mut i = 0;
        let mut base = 0u64;
        let mut neg = false;
        if bytes.len() > 1
            && (bytes[0] == b'x' || bytes[0] == b'r')
            && bytes[1].is_ascii_digit()
        {
            i = 1;
            let mut idx = 0usize;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                idx = idx * 10 + (bytes[i] - b'0') as usize;
                i += 1;
            }
            if idx < REG_COUNT {
                base = self.regs.regs[idx];
            }
            if i < bytes.len() && bytes[i] == b'-' {
                neg = true;
                i += 1;
            } else if i < bytes.len() && bytes[i] == b'+' {
                i += 1;
            }
        }
        let off = parse_literal(&tok[i..]);
        if neg {
            base.wrapping_sub(off)
        } else {
            base.wrapping_add(off)
        }
    }

    /// Rows of 16 bytes: address, hex pairs grouped in fours, ASCII gutter.
    fn examine(&mut self, start: u64, mut end: u64) -> Result<(), DebugError> {
        if end <= start {
            end = start.wrapping_add(16);
        }
        let mut addr = start;
        while addr < end {
            let mut row = format!("{:8x}: ", addr);
            let mut gutter = String::new();
            for i in 0..16 {
                let b = self.bus.read_u8(addr.wrapping_add(i))?;
                row.push_str(&format!("{:2x}{} ", b, if i % 4 == 3 { " " } else { "" }));
                gutter.push(if !(32..127).contains(&b) { '.' } else { b as char });
            }
            row.push_str(&gutter);
            row.push('\n');
            self.print(&row);
            addr = addr.wrapping_add(16);
        }
        Ok(())
    }

    /// Disassemble `[start, end)`, both rounded to word boundaries, at
    /// least one instruction.
    fn disassemble(&mut self, start: u64, end: u64) -> Result<(), DebugError> {
        let mut addr = start & !3;
        let mut end = (end.wrapping_add(3)) & !3;
        if end <= addr {
            end = addr.wrapping_add(4);
        }
        while addr < end {
            let word = self.bus.read_u32(addr)?;
            let d = decode_at(self.bus, addr)?;
            self.print(&format!("{:8x}: {:8x}\t{}\n", addr, word, d.text()));
            addr = d.next;
        }
        Ok(())
    }
}

fn parse_literal(s: &str) -> u64 {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        let digits: String = hex.chars().take_while(|c| c.is_ascii_hexdigit()).collect();
        u64::from_str_radix(&digits, 16).unwrap_or(0)
    } else {
        let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::BufferConsole;
    use crate::memory::LinearMemory;

    #[test]
    fn address_expressions() {
        let mut console = BufferConsole::new("");
        let mut mem = LinearMemory::new(64);
        let mut regs = RegFile::default();
        regs.regs[3] = 0x1000;
        let session = DebuggerSession::new(regs, &mut console, &mut mem);
        assert_eq!(session.parse_addr("0x80"), 0x80);
        assert_eq!(session.parse_addr("256"), 256);
        assert_eq!(session.parse_addr("x3"), 0x1000);
        assert_eq!(session.parse_addr("x3+0x20"), 0x1020);
        assert_eq!(session.parse_addr("r3-16"), 0xff0);
        // out-of-range register index contributes base zero
        assert_eq!(session.parse_addr("x99+4"), 4);
    }
}
