use minidbg_rs::console::BufferConsole;
use minidbg_rs::exception::TrapKind;
use minidbg_rs::memory::{Bus, LinearMemory};
use minidbg_rs::session::{DebugError, DebuggerSession, RegFile, REG_ELR, REG_SP};

fn snapshot(sp: u64, elr: u64) -> RegFile {
    let mut regs = RegFile::default();
    regs.regs[REG_SP] = sp;
    regs.regs[REG_ELR] = elr;
    regs
}

#[test]
fn examine_defaults_to_one_row_at_the_stack_pointer() {
    let mut console = BufferConsole::new("x\nc\n");
    let mut mem = LinearMemory::with_base(0x80000, 256);
    for i in 0..16 {
        mem.write_u8(0x80000 + i, b'A' + i as u8).unwrap();
    }
    let mut session = DebuggerSession::new(snapshot(0x80000, 0x80000), &mut console, &mut mem);
    session.run();
    let out = console.output;
    assert_eq!(out.matches("80000: ").count(), 1, "expected one row, got:\n{}", out);
    assert!(out.contains("ABCDEFGHIJKLMNOP"), "missing ascii gutter:\n{}", out);
}

#[test]
fn register_dump_prints_all_31_plus_6() {
    let mut console = BufferConsole::new("r\nc\n");
    let mut mem = LinearMemory::new(64);
    let mut session = DebuggerSession::new(snapshot(0, 0), &mut console, &mut mem);
    session.run();
    let out = console.output;
    for i in 0..31 {
        assert!(out.contains(&format!("x{}: ", i)), "missing x{}:\n{}", i, out);
    }
    for name in ["elr_el1:", "spsr_el1:", "esr_el1:", "far_el1:", "sctlr_el1:", "tcr_el1:"] {
        assert!(out.contains(name), "missing {}:\n{}", name, out);
    }
    assert!(!out.contains("x31: "));
}

#[test]
fn disassemble_clamps_to_one_instruction() {
    let mut console = BufferConsole::new("i 0x80000 0x80000\nc\n");
    let mut mem = LinearMemory::with_base(0x80000, 64);
    mem.write_u32(0x80000, 0xD282_4680).unwrap(); // movz x0, #0x1234
    let mut session = DebuggerSession::new(snapshot(0x80000, 0x80000), &mut console, &mut mem);
    session.run();
    let out = console.output;
    assert_eq!(out.matches("movz").count(), 1, "expected one line:\n{}", out);
    assert!(out.contains("x0, #0x1234"), "operands missing:\n{}", out);
}

#[test]
fn disassemble_uses_register_relative_expressions() {
    let mut console = BufferConsole::new("i x29+4 x29+8\nc\n");
    let mut mem = LinearMemory::with_base(0x80000, 64);
    mem.write_u32(0x80004, 0xD503_201F).unwrap(); // nop
    let mut session = DebuggerSession::new(snapshot(0x80000, 0x80000), &mut console, &mut mem);
    session.run();
    assert!(console.output.contains("nop"), "got:\n{}", console.output);
}

#[test]
fn unknown_command_reports_and_preserves_state() {
    let mut console = BufferConsole::new("qux\nc\n");
    let mut mem = LinearMemory::new(64);
    let mut regs = snapshot(0x123, 0x4000);
    regs.regs[7] = 0x7777;
    let before = regs.clone();
    let mut session = DebuggerSession::new(regs, &mut console, &mut mem);
    session.run();
    // everything except the advanced program counter is untouched
    for i in 0..37 {
        if i == REG_ELR {
            assert_eq!(session.regs.regs[i], before.regs[i] + 4);
        } else {
            assert_eq!(session.regs.regs[i], before.regs[i]);
        }
    }
    drop(session);
    assert!(console.output.contains("ERROR: unknown command."));
}

#[test]
fn continue_skips_the_trapping_instruction() {
    let mut console = BufferConsole::new("c\n");
    let mut mem = LinearMemory::new(64);
    let mut session = DebuggerSession::new(snapshot(0, 0x80000), &mut console, &mut mem);
    session.run();
    assert_eq!(session.regs.regs[REG_ELR], 0x80004);
    assert_eq!(session.depth, 0);
}

#[test]
fn help_lists_the_command_set() {
    let mut console = BufferConsole::new("?\nc\n");
    let mut mem = LinearMemory::new(64);
    let mut session = DebuggerSession::new(snapshot(0, 0), &mut console, &mut mem);
    session.run();
    let out = console.output;
    assert!(out.contains("Mini debugger commands:"));
    for frag in ["dump registers", "examine memory", "disassemble instruction", "continue execution"] {
        assert!(out.contains(frag), "help missing {:?}:\n{}", frag, out);
    }
}

#[test]
fn trap_while_active_is_fatal() {
    let mut console = BufferConsole::new("");
    let mut mem = LinearMemory::new(64);
    let mut session = DebuggerSession::new(snapshot(0, 0), &mut console, &mut mem);
    assert!(session.report_trap(TrapKind::Synchronous).is_ok());
    session.depth = 1; // as if a trap arrived mid-loop
    let err = session.report_trap(TrapKind::Synchronous).unwrap_err();
    assert!(matches!(err, DebugError::ReentrantTrap));
    assert!(console.output.contains("Exception in debugger!"));
}

#[test]
fn examine_rows_cover_an_explicit_range() {
    let mut console = BufferConsole::new("x 0x80000 0x80020\nc\n");
    let mut mem = LinearMemory::with_base(0x80000, 256);
    let mut session = DebuggerSession::new(snapshot(0x80000, 0x80000), &mut console, &mut mem);
    session.run();
    let out = console.output;
    assert!(out.contains("80000: "));
    assert!(out.contains("80010: "));
    assert!(!out.contains("80020: "));
}
