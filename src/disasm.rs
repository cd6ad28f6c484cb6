//! Operand rendering.
//!
//! Each [`Arg`] variant owns a pure `fields -> text` function. Operands that
//! render empty (omitted optional immediates, elided shifts) vanish without
//! leaving separators behind. A comma-space separator goes between operands
//! except right after a bracket-open or right before a bracket-close; the
//! bracket-close also carries the write-back marker.

use crate::decoder::Fields;
use crate::isa::a64::{
    ARRANGE, AT_OP0, AT_OP1, AT_OP2, BARRIER, COND, DC_OP0, DC_OP1, DC_OP2, EXTEND32, EXTEND64,
    IC_OP, PRF_POL, PRF_TYPE, PSTATE, SHIFT, TLBI_OP0, TLBI_OP1, TLBI_OP2,
};
use crate::sysreg;

/// Walk `n` entries into an ordered name list. Out of range and empty
/// entries yield the reserved sentinel, which is valid output, not an error.
pub fn pick(names: &[&'static str], n: usize) -> &'static str {
    names.get(n).copied().filter(|s| !s.is_empty()).unwrap_or("?")
}

/// Operand kinds. Grouped by the slot(s) they read; the width-class naming
/// for FP scalars follows the encoding tables:
/// class2 `h/s`, class3 `b/h/s/d`, class4 `h/s/d`, class5 `s/d/h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg {
    // general registers
    Xt,
    Xn,
    Xm,
    Xd,
    XtOpt,
    Wt,
    Wn,
    Wm,
    Wd,
    Rt,
    Rn,
    Rm,
    Rd,
    RdNext,
    RtNext,
    RtInv,
    RnJ,
    RmExt,
    RmSf,
    RtSp,
    RnSp,
    XnSp,
    // immediates
    Imm,
    ImmOpt,
    Aux,
    AuxOpt,
    Aux8,
    BitNum,
    Imm64Mask,
    FImm16,
    FImm32,
    FImm64,
    FImmSized,
    FpZero,
    Zero,
    FracBits,
    // shift / extend decorations
    Lsl12Opt,
    Lsl16Opt,
    ScaledSfOpt,
    ScaledSzOpt,
    Scaled4Opt,
    LslAmountK,
    MslAmountK,
    ShiftJOpt,
    ExtendSf,
    ExtAmountJ,
    ExtAmountZ,
    ExtAmountSz,
    ExtAmount2,
    ExtAmount3,
    ShrShift,
    ShlShift,
    Shift8,
    // pc-relative labels
    PcRelWord,
    PcRelByte,
    PcRelPage,
    // names from fixed tables
    Cond,
    Pstate,
    Barrier,
    Prefetch,
    SysReg,
    CrN,
    CrM,
    IcOp,
    DcOp0,
    DcOp1,
    DcOp2,
    DcZva,
    AtOp0,
    AtOp1,
    AtOp2,
    TlbiOp0,
    TlbiOp1,
    TlbiOp2,
    // memory operand brackets
    MemOpen,
    MemClose,
    // post-index amounts
    PostQ1,
    PostQ2,
    PostQ3,
    PostQ4,
    Post1,
    Post2,
    Post3,
    Post4,
    Post6,
    Post8,
    Post12,
    Post16,
    Post24,
    Post32,
    SizeImm1,
    SizeImm2,
    SizeImm3,
    SizeImm4,
    // vector registers with arrangement
    VtT,
    Vt2T,
    Vt3T,
    Vt4T,
    VnT,
    VmT,
    VnT2,
    VnT3,
    VtT3,
    VmT3,
    VtT4,
    Vtz,
    Vtz3,
    Vnz3,
    Vtzq,
    Vnzq,
    Vmzq,
    Vtzq2,
    Vnzq2,
    Vtj2,
    Vnj2,
    VnTa,
    VtH1,
    VnH1,
    VmH1,
    Vnz,
    Vt2d,
    Vn2d,
    Vm2d,
    Vn2h,
    Vt16b,
    Vn16b,
    Vm16b,
    Vd16b,
    Vt4s,
    Vn4s,
    Vm4s,
    Vd4s,
    VListN1,
    VListN2,
    VListN3,
    VListN4,
    // vector lane forms
    VtLaneB,
    VtLaneH,
    VtLaneS,
    VtLaneD,
    Vt2LaneB,
    Vt2LaneH,
    Vt2LaneS,
    Vt2LaneD,
    Vt3LaneB,
    Vt3LaneH,
    Vt3LaneS,
    Vt3LaneD,
    Vt4LaneB,
    Vt4LaneH,
    Vt4LaneS,
    Vt4LaneD,
    Vtj,
    Vnj,
    Vtjq,
    VmTs,
    VmHs,
    VmTs2,
    VmTs4b,
    Vt1d,
    Vn1d,
    LaneIdx,
    LaneIdxK,
    // FP scalar registers
    FPt,
    FPn,
    FPm,
    FPst,
    FP2t,
    FP2n,
    FP2m,
    FP3t,
    FP3n,
    FP3m,
    FP4t,
    FP4n,
    FP5t,
    FP5n,
    FP5m,
    FP5d,
    FPk5t,
    FPjt,
    FPjt2,
    FPjn2,
    FPnj,
    Ht,
    Hn,
    Hm,
    St,
    Sn,
    Dt,
    Dn,
    Qt,
    Qn,
}

fn wx(sf: u32) -> char {
    if sf != 0 {
        'x'
    } else {
        'w'
    }
}

fn xreg(n: u32) -> String {
    if n == 31 {
        "xzr".to_string()
    } else {
        format!("x{}", n)
    }
}

fn wreg(n: u32) -> String {
    if n == 31 {
        "wzr".to_string()
    } else {
        format!("w{}", n)
    }
}

/// Zero-register alias for index 31; width by `sf`.
fn reg(sf: u32, n: u32) -> String {
    if n == 31 {
        format!("{}zr", wx(sf))
    } else {
        format!("{}{}", wx(sf), n)
    }
}

/// Stack-pointer alias for index 31; width by `sf`.
fn reg_sp(sf: u32, n: u32) -> String {
    if n == 31 {
        if sf != 0 {
            "sp".to_string()
        } else {
            "wsp".to_string()
        }
    } else {
        format!("{}{}", wx(sf), n)
    }
}

fn arrange(idx: u32) -> &'static str {
    pick(ARRANGE, idx as usize)
}

fn vreg(n: u32, idx: u32) -> String {
    format!("V{}.{}", n & 31, arrange(idx))
}

/// Element-size letter selected by a one-hot low bit of `j` (dup/ins/smov
/// element specifier).
fn esize_low(j: u32) -> char {
    if j & 1 != 0 {
        'b'
    } else if j & 3 == 2 {
        'h'
    } else if j & 7 == 4 {
        's'
    } else {
        'd'
    }
}

/// Lane index hidden above the one-hot size marker of `j`.
fn lane_index(j: u32) -> u32 {
    let shift = if j & 1 != 0 {
        1
    } else if j & 3 == 2 {
        2
    } else if j & 7 == 4 {
        3
    } else {
        4
    };
    j >> shift
}

/// Arrangement index class for immediate-shift forms, from the `immh` bits.
fn immh_class(j: u32) -> u32 {
    if j >> 3 == 1 {
        0
    } else if j >> 4 == 1 {
        2
    } else if j >> 5 == 1 {
        4
    } else {
        6
    }
}

fn shr_amount(j: u32) -> u32 {
    let base = if j >> 3 == 1 {
        16
    } else if j >> 4 == 1 {
        32
    } else if j >> 5 == 1 {
        64
    } else {
        128
    };
    base - j
}

// signed: reserved encodings can put the class base above the raw field
fn shl_amount(j: u32) -> i64 {
    let base: i64 = if j >> 3 == 1 {
        8
    } else if j >> 4 == 1 {
        16
    } else if j >> 5 == 1 {
        32
    } else {
        64
    };
    j as i64 - base
}

/// FP8 immediate expansion (a:NOT(b):Replicate(b,E-3):cdefgh:zeros), shown
/// as the raw bit pattern of the target width.
fn fimm16(j: u32) -> u16 {
    let a = (j >> 7) & 1;
    let b = (j >> 6) & 1;
    let rest = j & 0x3f;
    ((a << 15) | ((b ^ 1) << 14) | (b << 13) | (b << 12) | (rest << 6)) as u16
}

fn fimm32(j: u32) -> u32 {
    let a = (j >> 7) & 1;
    let b = (j >> 6) & 1;
    let rest = j & 0x3f;
    (a << 31) | ((b ^ 1) << 30) | (b * 0b11111 << 25) | (rest << 19)
}

fn fimm64(j: u32) -> u64 {
    let a = (j as u64 >> 7) & 1;
    let b = (j as u64 >> 6) & 1;
    let rest = j as u64 & 0x3f;
    (a << 63) | ((b ^ 1) << 62) | (b * 0xff << 54) | (rest << 48)
}

impl Arg {
    pub fn render(self, f: &Fields, addr: u64) -> String {
        match self {
            Arg::Xt => xreg(f.rt),
            Arg::Xn => xreg(f.rn),
            Arg::Xm => xreg(f.rm),
            Arg::Xd => xreg(f.ra),
            Arg::XtOpt => {
                if f.rt == 31 {
                    String::new()
                } else {
                    format!("x{}", f.rt)
                }
            }
            Arg::Wt => wreg(f.rt),
            Arg::Wn => wreg(f.rn),
            Arg::Wm => wreg(f.rm),
            Arg::Wd => wreg(f.ra),
            Arg::Rt => reg(f.sf, f.rt),
            Arg::Rn => reg(f.sf, f.rn),
            Arg::Rm => reg(f.sf, f.rm),
            Arg::Rd => reg(f.sf, f.ra),
            Arg::RdNext => {
                if f.ra + 1 == 31 {
                    format!("{}zr", wx(f.sf))
                } else {
                    format!("{}{}", wx(f.sf), (f.ra + 1) & 31)
                }
            }
            Arg::RtNext => {
                if f.rt + 1 == 31 {
                    format!("{}zr", wx(f.sf))
                } else {
                    format!("{}{}", wx(f.sf), (f.rt + 1) & 31)
                }
            }
            Arg::RtInv => reg(1 - (f.sf & 1), f.rt),
            Arg::RnJ => reg(if f.aux & 15 == 8 { 1 } else { 0 }, f.rn),
            Arg::RmExt => reg(f.opt & 1, f.rm),
            Arg::RmSf => reg(if f.sf != 0 && f.opt & 3 == 3 { 1 } else { 0 }, f.rm),
            Arg::RtSp => reg_sp(f.sf, f.rt),
            Arg::RnSp => reg_sp(f.sf, f.rn),
            Arg::XnSp => {
                if f.rn == 31 {
                    "sp".to_string()
                } else {
                    format!("x{}", f.rn)
                }
            }

            Arg::Imm => format!("#0x{:x}", f.imm as u32),
            Arg::ImmOpt => {
                if f.imm == 0 {
                    String::new()
                } else {
                    format!("#0x{:x}", f.imm as u32)
                }
            }
            Arg::Aux => format!("#0x{:x}", f.aux),
            Arg::AuxOpt => {
                if f.aux == 0 {
                    String::new()
                } else {
                    format!("#0x{:x}", f.aux)
                }
            }
            Arg::Aux8 => format!("#{:x}", f.aux),
            Arg::BitNum => format!("#0x{:x}", f.bit),
            Arg::Imm64Mask => {
                let mut s = String::from("#0x");
                for bit in (0..8).rev() {
                    s.push_str(if f.aux >> bit & 1 != 0 { "ff" } else { "00" });
                }
                s
            }
            Arg::FImm16 => format!("#0x{:04x}", fimm16(f.aux)),
            Arg::FImm32 => format!("#0x{:08x}", fimm32(f.aux)),
            Arg::FImm64 => format!("#0x{:016x}", fimm64(f.aux)),
            Arg::FImmSized => match f.sz {
                3 => format!("#0x{:04x}", fimm16(f.aux)),
                0 => format!("#0x{:08x}", fimm32(f.aux)),
                _ => format!("#0x{:016x}", fimm64(f.aux)),
            },
            Arg::FpZero => "#0.0".to_string(),
            Arg::Zero => "#0".to_string(),
            Arg::FracBits => format!("#{}", 64 - f.aux),

            Arg::Lsl12Opt => {
                if f.aux == 0 {
                    String::new()
                } else {
                    format!("lsl #{}", f.aux * 12)
                }
            }
            Arg::Lsl16Opt => {
                if f.aux == 0 {
                    String::new()
                } else {
                    format!("lsl #{}", f.aux * 16)
                }
            }
            Arg::ScaledSfOpt => {
                if f.imm == 0 {
                    String::new()
                } else {
                    format!("#0x{:x}", (f.imm << (2 + f.sf)) as u32)
                }
            }
            Arg::ScaledSzOpt => {
                if f.imm == 0 {
                    String::new()
                } else {
                    format!("#0x{:x}", (f.imm << (2 + f.sz)) as u32)
                }
            }
            Arg::Scaled4Opt => {
                if f.imm == 0 {
                    String::new()
                } else {
                    format!("#0x{:x}", (f.imm << 2) as u32)
                }
            }
            Arg::LslAmountK => {
                if f.k == 0 {
                    String::new()
                } else {
                    format!("lsl #{}", f.k * 8)
                }
            }
            Arg::MslAmountK => format!("msl #{}", 8 << f.k),
            Arg::ShiftJOpt => {
                if f.aux == 0 {
                    String::new()
                } else {
                    format!("{} #{}", pick(SHIFT, f.sz as usize), f.aux)
                }
            }
            Arg::ExtendSf => {
                let tbl = if f.sf != 0 { EXTEND64 } else { EXTEND32 };
                format!("{} #{}", pick(tbl, f.opt as usize), f.aux)
            }
            Arg::ExtAmountJ => format!("{} #{}", pick(EXTEND64, f.opt as usize), f.aux),
            Arg::ExtAmountZ => {
                let amount = if f.aux != 0 {
                    if f.sf != 0 {
                        4
                    } else {
                        f.sz
                    }
                } else {
                    0
                };
                format!("{} #{}", pick(EXTEND64, f.opt as usize), amount)
            }
            Arg::ExtAmountSz => {
                let amount = if f.aux != 0 {
                    if f.sf != 0 {
                        3
                    } else {
                        2
                    }
                } else {
                    0
                };
                format!("{} #{}", pick(EXTEND64, f.opt as usize), amount)
            }
            Arg::ExtAmount2 => {
                format!("{} #{}", pick(EXTEND64, f.opt as usize), if f.aux != 0 { 2 } else { 0 })
            }
            Arg::ExtAmount3 => {
                format!("{} #{}", pick(EXTEND64, f.opt as usize), if f.aux != 0 { 3 } else { 0 })
            }
            Arg::ShrShift => format!("#{}", shr_amount(f.aux)),
            Arg::ShlShift => format!("#{}", shl_amount(f.aux)),
            Arg::Shift8 => format!("#{}", 1u32 << (f.sz + 3)),

            Arg::PcRelWord => format!("0x{:x}", addr.wrapping_add(((f.imm << 2) as i64) as u64)),
            Arg::PcRelByte => {
                format!("0x{:x}", addr.wrapping_add(((f.imm << 2) + f.aux as i64) as u64))
            }
            Arg::PcRelPage => {
                let off = ((f.imm << 2) + f.aux as i64) << 12;
                format!("0x{:x}", (addr & !0xfff).wrapping_add(off as u64))
            }

            Arg::Cond => pick(COND, f.cond as usize).to_string(),
            Arg::Pstate => pick(PSTATE, f.wb as usize).to_string(),
            Arg::Barrier => pick(BARRIER, f.aux as usize).to_string(),
            Arg::Prefetch => format!(
                "{} L{} {}",
                pick(PRF_TYPE, (f.rt as usize >> 3) & 3),
                ((f.rt >> 1) & 3) + 1,
                pick(PRF_POL, f.rt as usize & 1)
            ),
            Arg::SysReg => sysreg::sysreg_name(f.wb, f.k, f.rn, f.rm, f.aux),
            Arg::CrN => format!("C{}", f.rn),
            Arg::CrM => format!("C{}", f.rm),
            Arg::IcOp => pick(IC_OP, f.cond as usize).to_string(),
            Arg::DcOp0 => pick(DC_OP0, f.ra as usize).to_string(),
            Arg::DcOp1 => pick(DC_OP1, f.ra as usize).to_string(),
            Arg::DcOp2 => pick(DC_OP2, f.ra as usize).to_string(),
            Arg::DcZva => "ZVA".to_string(),
            Arg::AtOp0 => pick(AT_OP0, f.aop as usize).to_string(),
            Arg::AtOp1 => pick(AT_OP1, f.aop as usize).to_string(),
            Arg::AtOp2 => pick(AT_OP2, f.aop as usize).to_string(),
            Arg::TlbiOp0 => pick(TLBI_OP0, f.rn as usize).to_string(),
            Arg::TlbiOp1 => pick(TLBI_OP1, f.rn as usize).to_string(),
            Arg::TlbiOp2 => pick(TLBI_OP2, f.rn as usize).to_string(),

            Arg::MemOpen => "[".to_string(),
            Arg::MemClose => {
                if f.wb != 0 {
                    "]!".to_string()
                } else {
                    "]".to_string()
                }
            }

            Arg::PostQ1 => format!("#{}", if f.q != 0 { 16 } else { 8 }),
            Arg::PostQ2 => format!("#{}", if f.q != 0 { 32 } else { 16 }),
            Arg::PostQ3 => format!("#{}", if f.q != 0 { 48 } else { 24 }),
            Arg::PostQ4 => format!("#{}", if f.q != 0 { 64 } else { 32 }),
            Arg::Post1 => "1".to_string(),
            Arg::Post2 => "2".to_string(),
            Arg::Post3 => "3".to_string(),
            Arg::Post4 => "4".to_string(),
            Arg::Post6 => "6".to_string(),
            Arg::Post8 => "8".to_string(),
            Arg::Post12 => "12".to_string(),
            Arg::Post16 => "16".to_string(),
            Arg::Post24 => "24".to_string(),
            Arg::Post32 => "32".to_string(),
            Arg::SizeImm1 => format!("#{}", 1u32 << f.sz),
            Arg::SizeImm2 => format!("#{}", 2u32 << f.sz),
            Arg::SizeImm3 => format!("#{}", 3u32 << f.sz),
            Arg::SizeImm4 => format!("#{}", 4u32 << f.sz),

            Arg::VtT => vreg(f.rt, (f.sz << 1) | f.q),
            Arg::Vt2T => vreg(f.rt + 1, (f.sz << 1) | f.q),
            Arg::Vt3T => vreg(f.rt + 2, (f.sz << 1) | f.q),
            Arg::Vt4T => vreg(f.rt + 3, (f.sz << 1) | f.q),
            Arg::VnT => vreg(f.rn, (f.sz << 1) | f.q),
            Arg::VmT => vreg(f.rm, (f.sz << 1) | f.q),
            Arg::VnT2 => vreg(f.rn, f.sz + 3),
            Arg::VnT3 => vreg(f.rn, (f.sz << 1) + 3),
            Arg::VtT3 => vreg(f.rt, (f.sz << 1) + 3),
            Arg::VmT3 => vreg(f.rm, (f.sz << 1) + 3),
            Arg::VtT4 => vreg(f.rt, if f.sz != 0 { 8 } else { 3 }),
            Arg::Vtz => vreg(f.rt, 4 + f.sz * 2),
            Arg::Vtz3 => vreg(f.rt, (f.sz << 1) + 6),
            Arg::Vnz3 => vreg(f.rn, (f.sz << 1) + 6),
            Arg::Vtzq => vreg(f.rt, 4 + f.sz * 2 + f.q),
            Arg::Vnzq => vreg(f.rn, 4 + f.sz * 2 + f.q),
            Arg::Vmzq => vreg(f.rm, 4 + f.sz * 2 + f.q),
            Arg::Vtzq2 => vreg(f.rt, 2 + f.sz * 2 + f.q),
            Arg::Vnzq2 => vreg(f.rn, 2 + f.sz * 2 + f.q),
            Arg::Vtj2 => vreg(f.rt, immh_class(f.aux) | f.q),
            Arg::Vnj2 => vreg(f.rn, immh_class(f.aux) | f.q),
            Arg::VnTa => vreg(
                f.rn,
                if f.aux >> 3 == 1 {
                    3
                } else if f.aux >> 4 == 1 {
                    4
                } else {
                    7
                },
            ),
            Arg::VtH1 => format!("V{}.{}h", f.rt, if f.q != 0 { 8 } else { 4 }),
            Arg::VnH1 => format!("V{}.{}h", f.rn, if f.q != 0 { 8 } else { 4 }),
            Arg::VmH1 => format!("V{}.{}h", f.rm, if f.q != 0 { 8 } else { 4 }),
            Arg::Vnz => format!("V{}.2{}", f.rn, if f.sz != 0 { 'd' } else { 's' }),
            Arg::Vt2d => format!("V{}.2d", f.rt),
            Arg::Vn2d => format!("V{}.2d", f.rn),
            Arg::Vm2d => format!("V{}.2d", f.rm),
            Arg::Vn2h => format!("V{}.2h", f.rn),
            Arg::Vt16b => format!("V{}.16b", f.rt),
            Arg::Vn16b => format!("V{}.16b", f.rn),
            Arg::Vm16b => format!("V{}.16b", f.rm),
            Arg::Vd16b => format!("V{}.16b", f.ra),
            Arg::Vt4s => format!("V{}.4s", f.rt),
            Arg::Vn4s => format!("V{}.4s", f.rn),
            Arg::Vm4s => format!("V{}.4s", f.rm),
            Arg::Vd4s => format!("V{}.4s", f.ra),
            Arg::VListN1 => format!("{{ V{}.16b }}", f.rn),
            Arg::VListN2 => format!("{{ V{}.16b, V{}.16b }}", f.rn, (f.rn + 1) & 31),
            Arg::VListN3 => format!(
                "{{ V{}.16b, V{}.16b, V{}.16b }}",
                f.rn,
                (f.rn + 1) & 31,
                (f.rn + 2) & 31
            ),
            Arg::VListN4 => format!(
                "{{ V{}.16b, V{}.16b, V{}.16b, V{}.16b }}",
                f.rn,
                (f.rn + 1) & 31,
                (f.rn + 2) & 31,
                (f.rn + 3) & 31
            ),

            Arg::VtLaneB => format!("V{}.b[{}]", f.rt, (f.q << 3) | (f.sf << 2) | f.sz),
            Arg::VtLaneH => format!("V{}.h[{}]", f.rt, (f.q << 3) | (f.sf << 2) | f.sz),
            Arg::VtLaneS => format!("V{}.s[{}]", f.rt, (f.q << 1) | f.sf),
            Arg::VtLaneD => format!("V{}.d[{}]", f.rt, f.q),
            Arg::Vt2LaneB => format!(
                "V{}.b V{}.b[{}]",
                f.rt,
                (f.rt + 1) & 31,
                (f.q << 3) | (f.sf << 2) | f.sz
            ),
            Arg::Vt2LaneH => format!(
                "V{}.h V{}.h[{}]",
                f.rt,
                (f.rt + 1) & 31,
                (f.q << 3) | (f.sf << 2) | f.sz
            ),
            Arg::Vt2LaneS => {
                format!("V{}.s V{}.s[{}]", f.rt, (f.rt + 1) & 31, (f.q << 1) | f.sf)
            }
            Arg::Vt2LaneD => format!("V{}.d V{}.d[{}]", f.rt, (f.rt + 1) & 31, f.q),
            Arg::Vt3LaneB => format!(
                "V{}.b V{}.b V{}.b[{}]",
                f.rt,
                (f.rt + 1) & 31,
                (f.rt + 2) & 31,
                (f.q << 3) | (f.sf << 2) | f.sz
            ),
            Arg::Vt3LaneH => format!(
                "V{}.h V{}.h V{}.h[{}]",
                f.rt,
                (f.rt + 1) & 31,
                (f.rt + 2) & 31,
                (f.q << 3) | (f.sf << 2) | f.sz
            ),
            Arg::Vt3LaneS => format!(
                "V{}.s V{}.s V{}.s[{}]",
                f.rt,
                (f.rt + 1) & 31,
                (f.rt + 2) & 31,
                (f.q << 1) | f.sf
            ),
            Arg::Vt3LaneD => format!(
                "V{}.d V{}.d V{}.d[{}]",
                f.rt,
                (f.rt + 1) & 31,
                (f.rt + 2) & 31,
                f.q
            ),
            Arg::Vt4LaneB => format!(
                "V{}.b V{}.b V{}.b V{}.b[{}]",
                f.rt,
                (f.rt + 1) & 31,
                (f.rt + 2) & 31,
                (f.rt + 3) & 31,
                (f.q << 3) | (f.sf << 2) | f.sz
            ),
            Arg::Vt4LaneH => format!(
                "V{}.h V{}.h V{}.h V{}.h[{}]",
                f.rt,
                (f.rt + 1) & 31,
                (f.rt + 2) & 31,
                (f.rt + 3) & 31,
                (f.q << 3) | (f.sf << 2) | f.sz
            ),
            Arg::Vt4LaneS => format!(
                "V{}.s V{}.s V{}.s V{}.s[{}]",
                f.rt,
                (f.rt + 1) & 31,
                (f.rt + 2) & 31,
                (f.rt + 3) & 31,
                (f.q << 1) | f.sf
            ),
            Arg::Vt4LaneD => format!(
                "V{}.d V{}.d V{}.d V{}.d[{}]",
                f.rt,
                (f.rt + 1) & 31,
                (f.rt + 2) & 31,
                (f.rt + 3) & 31,
                f.q
            ),
            Arg::Vtj => format!("V{}.{}", f.rt, esize_low(f.aux)),
            Arg::Vnj => format!("V{}.{}", f.rn, esize_low(f.aux)),
            Arg::Vtjq => {
                let base = if f.aux & 1 != 0 {
                    0
                } else if f.aux & 3 == 2 {
                    2
                } else if f.aux & 7 == 4 {
                    4
                } else {
                    6
                };
                vreg(f.rt, base + f.q)
            }
            Arg::VmTs => {
                format!("V{}.{}[{}]", f.rm, if f.sz == 1 { 'h' } else { 's' }, f.aux)
            }
            Arg::VmHs => format!("V{}.h[{}]", f.rm, f.aux),
            Arg::VmTs2 => {
                format!("V{}.{}[{}]", f.rm, if f.sz == 1 { 'd' } else { 's' }, f.aux)
            }
            Arg::VmTs4b => format!("V{}.4b[{}]", f.rm, f.aux),
            Arg::Vt1d => format!("V{}.d[1]", f.rt),
            Arg::Vn1d => format!("V{}.d[1]", f.rn),
            Arg::LaneIdx => format!("{}", lane_index(f.aux)),
            Arg::LaneIdxK => format!("{}", lane_index(f.k)),

            Arg::FPt => format!("{}{}", fp_sdq(f.sz), f.rt),
            Arg::FPn => format!("{}{}", fp_sdq(f.sz), f.rn),
            Arg::FPm => format!("{}{}", fp_sdq(f.sz), f.rm),
            Arg::FPst => {
                let c = if f.sf == 1 {
                    'q'
                } else {
                    match f.sz {
                        3 => 'd',
                        2 => 's',
                        1 => 'h',
                        _ => 'b',
                    }
                };
                format!("{}{}", c, f.rt)
            }
            Arg::FP2t => format!("{}{}", fp_hs(f.sz), f.rt),
            Arg::FP2n => format!("{}{}", fp_hs(f.sz), f.rn),
            Arg::FP2m => format!("{}{}", fp_hs(f.sz), f.rm),
            Arg::FP3t => format!("{}{}", fp_bhsd(f.sz), f.rt),
            Arg::FP3n => format!("{}{}", fp_bhsd(f.sz), f.rn),
            Arg::FP3m => format!("{}{}", fp_bhsd(f.sz), f.rm),
            Arg::FP4t => format!("{}{}", fp_hsd(f.sz), f.rt),
            Arg::FP4n => format!("{}{}", fp_hsd(f.sz), f.rn),
            Arg::FP5t => format!("{}{}", fp_sdh(f.sz), f.rt),
            Arg::FP5n => format!("{}{}", fp_sdh(f.sz), f.rn),
            Arg::FP5m => format!("{}{}", fp_sdh(f.sz), f.rm),
            Arg::FP5d => format!("{}{}", fp_sdh(f.sz), f.ra),
            Arg::FPk5t => format!("{}{}", fp_sdh(f.k), f.rt),
            Arg::FPjt => format!("{}{}", esize_low(f.aux), f.rt),
            Arg::FPjt2 => format!("{}{}", fp_immh(f.aux), f.rt),
            Arg::FPjn2 => format!("{}{}", fp_immh(f.aux), f.rn),
            Arg::FPnj => {
                let c = if f.aux >> 3 == 1 {
                    'h'
                } else if f.aux >> 4 == 1 {
                    's'
                } else {
                    'd'
                };
                format!("{}{}", c, f.rn)
            }
            Arg::Ht => format!("h{}", f.rt),
            Arg::Hn => format!("h{}", f.rn),
            Arg::Hm => format!("h{}", f.rm),
            Arg::St => format!("s{}", f.rt),
            Arg::Sn => format!("s{}", f.rn),
            Arg::Dt => format!("d{}", f.rt),
            Arg::Dn => format!("d{}", f.rn),
            Arg::Qt => format!("q{}", f.rt),
            Arg::Qn => format!("q{}", f.rn),
        }
    }
}

fn fp_sdq(z: u32) -> char {
    match z {
        2 => 'q',
        1 => 'd',
        _ => 's',
    }
}

fn fp_hs(z: u32) -> char {
    if z == 1 {
        'h'
    } else {
        's'
    }
}

fn fp_bhsd(z: u32) -> char {
    match z {
        3 => 'd',
        2 => 's',
        1 => 'h',
        _ => 'b',
    }
}

fn fp_hsd(z: u32) -> char {
    match z {
        2 => 'd',
        1 => 's',
        _ => 'h',
    }
}

fn fp_sdh(z: u32) -> char {
    match z {
        1 => 'd',
        0 => 's',
        _ => 'h',
    }
}

/// Immediate-shift scalar width letter from `immh`.
fn fp_immh(j: u32) -> char {
    if j >> 3 == 1 {
        'b'
    } else if j >> 4 == 1 {
        'h'
    } else if j >> 5 == 1 {
        's'
    } else {
        'd'
    }
}

/// Render an operand sequence with the separator policy described in the
/// module docs.
pub fn render_args(args: &[Arg], f: &Fields, addr: u64) -> String {
    let mut out = String::new();
    let mut after_open = false;
    for &a in args {
        let piece = a.render(f, addr);
        if piece.is_empty() {
            continue;
        }
        if !out.is_empty() && !after_open && a != Arg::MemClose {
            out.push_str(", ");
        }
        out.push_str(&piece);
        after_open = a == Arg::MemOpen;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fimm_expansion_matches_reference_points() {
        // VFPExpandImm(0x70) == 1.0
        assert_eq!(fimm64(0x70), 0x3ff0_0000_0000_0000);
        assert_eq!(fimm32(0x70), 0x3f80_0000);
        // VFPExpandImm(0xf0) == -1.0
        assert_eq!(fimm64(0xf0), 0xbff0_0000_0000_0000);
    }

    #[test]
    fn separators_skip_brackets_and_empty_pieces() {
        let f = Fields { rt: 1, rn: 3, imm: 8, ..Default::default() };
        let s = render_args(
            &[Arg::Xt, Arg::MemOpen, Arg::XnSp, Arg::ImmOpt, Arg::MemClose],
            &f,
            0,
        );
        assert_eq!(s, "x1, [x3, #0x8]");
        let f0 = Fields { rt: 1, rn: 31, ..Default::default() };
        let s0 = render_args(
            &[Arg::Xt, Arg::MemOpen, Arg::XnSp, Arg::ImmOpt, Arg::MemClose],
            &f0,
            0,
        );
        assert_eq!(s0, "x1, [sp]");
    }
}
