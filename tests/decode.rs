use minidbg_rs::decoder::decode_word;
use pretty_assertions::assert_eq;

fn text(word: u32, addr: u64) -> (String, String) {
    let d = decode_word(word, addr);
    (d.mnemonic, d.operands)
}

#[test]
fn movz_canonical_form() {
    // movz x0, #0x1234
    let (m, o) = text(0xD282_4680, 0x80000);
    assert_eq!(m, "movz");
    assert_eq!(o, "x0, #0x1234");
}

#[test]
fn movz_with_shift() {
    // movz x2, #0x1, lsl #16  (hw = 1)
    let (m, o) = text(0xD2A0_0022, 0);
    assert_eq!(m, "movz");
    assert_eq!(o, "x2, #0x1, lsl #16");
}

#[test]
fn single_nop_via_hint_table() {
    let (m, o) = text(0xD503_201F, 0x1000);
    assert_eq!(m, "nop");
    assert_eq!(o, "");
    assert_eq!(decode_word(0xD503_201F, 0x1000).text(), "nop");
}

#[test]
fn conditional_branch_renders_condition_and_label() {
    // b.eq  +8  (imm19 = 2, cond = 0)
    let (m, o) = text(0x5400_0040, 0x1000);
    assert_eq!(m, "b.eq");
    assert_eq!(o, "0x1008");
}

#[test]
fn unconditional_branches() {
    // b +16 (imm26 = 4)
    let (m, o) = text(0x1400_0004, 0x2000);
    assert_eq!(m, "b");
    assert_eq!(o, "0x2010");
    // bl +16
    let (m, o) = text(0x9400_0004, 0x2000);
    assert_eq!(m, "bl");
    assert_eq!(o, "0x2010");
    // ret (x30)
    let (m, o) = text(0xD65F_03C0, 0);
    assert_eq!(m, "ret");
    assert_eq!(o, "x30");
}

#[test]
fn compare_and_test_branches() {
    // cbz x1, +16 (imm19 = 4)
    let (m, o) = text(0xB400_0081, 0x4000);
    assert_eq!(m, "cbz");
    assert_eq!(o, "x1, 0x4010");
    // tbz x5, #3, +8 (b40 = 0, b31..b19 bit = 3, imm14 = 2)
    let (m, o) = text(0x3618_0045, 0x4000);
    assert_eq!(m, "tbz");
    assert_eq!(o, "x5, #0x3, 0x4008");
}

#[test]
fn register_31_is_sp_or_zero_depending_on_operand_kind() {
    // add x1, sp, #0x10: index 31 through a stack-pointer operand
    let (m, o) = text(0x9100_43E1, 0);
    assert_eq!(m, "add");
    assert_eq!(o, "x1, sp, #0x10");
    // orr x1, xzr, x2: the same index through a zero-register operand
    let (m, o) = text(0xAA02_03E1, 0);
    assert_eq!(m, "orr");
    assert_eq!(o, "x1, xzr, x2");
}

#[test]
fn loads_and_stores() {
    // ldr x1, [sp, #16] (unsigned offset, raw imm12 = 2)
    let (m, o) = text(0xF940_0BE1, 0);
    assert_eq!(m, "ldr");
    assert_eq!(o, "x1, [sp, #0x2]");
    // str w0, [x3] (unsigned offset 0)
    let (m, o) = text(0xB900_0060, 0);
    assert_eq!(m, "str");
    assert_eq!(o, "w0, [x3]");
    // ldr x0, [x1], #8 (post-index)
    let (m, o) = text(0xF840_8420, 0);
    assert_eq!(m, "ldr");
    assert_eq!(o, "x0, [x1], #0x8");
    // str x0, [x1, #8]! (pre-index)
    let (m, o) = text(0xF800_8C20, 0);
    assert_eq!(m, "str");
    assert_eq!(o, "x0, [x1, #0x8]!");
}

#[test]
fn stp_preindex_writeback() {
    // stp x29, x30, [sp, #-16]!
    let (m, o) = text(0xA9BF_7BFD, 0);
    assert_eq!(m, "stp");
    assert_eq!(o, "x29, x30, [sp, #0xfffffff0]!");
}

#[test]
fn system_register_moves() {
    // msr sctlr_el1, x0
    let (m, o) = text(0xD518_1000, 0);
    assert_eq!(m, "msr");
    assert_eq!(o, "SCTLR_EL1, x0");
    // mrs x0, mpidr_el1
    let (m, o) = text(0xD538_00A0, 0);
    assert_eq!(m, "mrs");
    assert_eq!(o, "x0, MPIDR_EL1");
    // mrs x1, some unallocated tuple falls back to the numeric spelling
    let d = decode_word(0xD538_FFE1, 0);
    assert_eq!(d.mnemonic, "mrs");
    assert!(d.operands.starts_with("x1, S3_"), "got {}", d.operands);
}

#[test]
fn barriers_and_exceptions() {
    // dsb sy
    let (m, o) = text(0xD503_3F9F, 0);
    assert_eq!(m, "dsb");
    assert_eq!(o, "sy");
    // svc #0
    let (m, o) = text(0xD400_0001, 0);
    assert_eq!(m, "svc");
    assert_eq!(o, "#0x0");
    // brk #1
    let (m, o) = text(0xD420_0020, 0);
    assert_eq!(m, "brk");
    assert_eq!(o, "#0x1");
}

#[test]
fn pc_relative_addresses() {
    // adr x0, +16 (immhi = 4, immlo = 0)
    let (m, o) = text(0x1000_0080, 0x10000);
    assert_eq!(m, "adr");
    assert_eq!(o, "x0, 0x10010");
    // adrp x0, +1 page (immlo = 1, immhi = 0); base rounds down to the page
    let (m, o) = text(0xB000_0000, 0x10123);
    assert_eq!(m, "adrp");
    assert_eq!(o, "x0, 0x11000");
}

#[test]
fn data_processing_three_source() {
    // madd x0, x1, x2, x3
    let (m, o) = text(0x9B02_0C20, 0);
    assert_eq!(m, "madd");
    assert_eq!(o, "x0, x1, x2, x3");
    // udiv x0, x1, x2
    let (m, o) = text(0x9AC2_0820, 0);
    assert_eq!(m, "udiv");
    assert_eq!(o, "x0, x1, x2");
}

#[test]
fn conditional_select() {
    // csel x0, x1, x2, ne
    let (m, o) = text(0x9A82_1020, 0);
    assert_eq!(m, "csel");
    assert_eq!(o, "x0, x1, x2, ne");
}

#[test]
fn bitfield_moves() {
    // ubfm x0, x1, #4, #63  (lsr x0, x1, #4)
    let (m, o) = text(0xD344_FC20, 0);
    assert_eq!(m, "ubfm");
    assert_eq!(o, "x0, x1, #0x4, #0x3f");
}
