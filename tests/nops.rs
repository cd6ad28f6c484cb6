use minidbg_rs::decoder::{decode_at, NOP_WORD};
use minidbg_rs::memory::{Bus, LinearMemory};
use pretty_assertions::assert_eq;

#[test]
fn nop_runs_collapse_to_one_line() {
    let mut mem = LinearMemory::with_base(0x1000, 64);
    for i in 0..5 {
        mem.write_u32(0x1000 + i * 4, NOP_WORD).unwrap();
    }
    mem.write_u32(0x1014, 0xD65F_03C0).unwrap(); // ret terminates the run
    let d = decode_at(&mut mem, 0x1000).unwrap();
    assert_eq!(d.mnemonic, "5 x nop");
    assert_eq!(d.operands, "");
    assert_eq!(d.next, 0x1000 + 5 * 4);
}

#[test]
fn single_nop_stays_plain() {
    let mut mem = LinearMemory::with_base(0x1000, 16);
    mem.write_u32(0x1000, NOP_WORD).unwrap();
    mem.write_u32(0x1004, 0xD65F_03C0).unwrap();
    let d = decode_at(&mut mem, 0x1000).unwrap();
    assert_eq!(d.text(), "nop");
    assert_eq!(d.next, 0x1004);
}

#[test]
fn run_stops_at_end_of_mapped_memory() {
    // the whole mapping is NOPs; the scan must stop at the boundary
    // instead of erroring out
    let mut mem = LinearMemory::with_base(0, 16);
    for i in 0..4 {
        mem.write_u32(i * 4, NOP_WORD).unwrap();
    }
    let d = decode_at(&mut mem, 0).unwrap();
    assert_eq!(d.mnemonic, "4 x nop");
    assert_eq!(d.next, 16);
}
