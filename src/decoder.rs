use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::bits::{field, sign_extend};
use crate::disasm::{self, Arg};
use crate::isa::a64;
use crate::memory::Bus;

/// Scratch slots a template's field extractors can write into. The slots are
/// deliberately generic: one encoding family's `aux` is a shift amount, the
/// next one's is a lane index. The operand kinds know which slots they read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    /// Mnemonic selector; walks the template's name list.
    Sel,
    /// Primary (possibly signed) immediate.
    Imm,
    /// Secondary immediate: shift amounts, lane indices, sysreg op2.
    Aux,
    Rt,
    Rn,
    Rm,
    /// Third register: status register, accumulator, second destination.
    Ra,
    Cond,
    /// Width flag (`sf`) or its per-family equivalent.
    Sf,
    /// Element size / FP type field.
    Sz,
    /// Vector 128-bit half selector.
    Q,
    /// Extend/shift option field of register-offset addressing.
    Opt,
    /// Write-back flag; doubles as pstate-op and sysreg op0.
    Wb,
    /// Secondary selector: sysreg op1, movi shift class, fcvt target type.
    K,
    /// Address-translate / cache-op selector.
    AOp,
    /// Bit number (tbz) or alternate small immediate register field.
    BitNum,
}

/// Extracted field values for one instruction word.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fields {
    pub sel: u32,
    pub imm: i64,
    pub aux: u32,
    pub rt: u32,
    pub rn: u32,
    pub rm: u32,
    pub ra: u32,
    pub cond: u32,
    pub sf: u32,
    pub sz: u32,
    pub q: u32,
    pub opt: u32,
    pub wb: u32,
    pub k: u32,
    pub aop: u32,
    pub bit: u32,
}

impl Fields {
    fn set(&mut self, id: FieldId, v: i64) {
        match id {
            FieldId::Sel => self.sel = v as u32,
            FieldId::Imm => self.imm = v,
            FieldId::Aux => self.aux = v as u32,
            FieldId::Rt => self.rt = v as u32,
            FieldId::Rn => self.rn = v as u32,
            FieldId::Rm => self.rm = v as u32,
            FieldId::Ra => self.ra = v as u32,
            FieldId::Cond => self.cond = v as u32,
            FieldId::Sf => self.sf = v as u32,
            FieldId::Sz => self.sz = v as u32,
            FieldId::Q => self.q = v as u32,
            FieldId::Opt => self.opt = v as u32,
            FieldId::Wb => self.wb = v as u32,
            FieldId::K => self.k = v as u32,
            FieldId::AOp => self.aop = v as u32,
            FieldId::BitNum => self.bit = v as u32,
        }
    }
}

/// One field extractor: up to four `(shift, mask)` spans OR-combined, then
/// optionally sign-extended from `sext` bits. Spans with a zero mask
/// contribute nothing.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub dst: FieldId,
    pub spans: [(u8, u32); 4],
    pub sext: u8,
}

pub const fn f(dst: FieldId, shr: u8, mask: u32) -> FieldSpec {
    FieldSpec { dst, spans: [(shr, mask), (0, 0), (0, 0), (0, 0)], sext: 0 }
}

pub const fn fs(dst: FieldId, shr: u8, mask: u32, sext: u8) -> FieldSpec {
    FieldSpec { dst, spans: [(shr, mask), (0, 0), (0, 0), (0, 0)], sext }
}

pub const fn f2(dst: FieldId, a: (u8, u32), b: (u8, u32)) -> FieldSpec {
    FieldSpec { dst, spans: [a, b, (0, 0), (0, 0)], sext: 0 }
}

pub const fn f3(dst: FieldId, a: (u8, u32), b: (u8, u32), c: (u8, u32)) -> FieldSpec {
    FieldSpec { dst, spans: [a, b, c, (0, 0)], sext: 0 }
}

pub const fn f3s(dst: FieldId, a: (u8, u32), b: (u8, u32), c: (u8, u32), sext: u8) -> FieldSpec {
    FieldSpec { dst, spans: [a, b, c, (0, 0)], sext }
}

pub const fn f4(
    dst: FieldId,
    a: (u8, u32),
    b: (u8, u32),
    c: (u8, u32),
    d: (u8, u32),
) -> FieldSpec {
    FieldSpec { dst, spans: [a, b, c, d], sext: 0 }
}

/// One encoding family: match `word & mask == bits`, run `fields`, pin
/// `presets`, select a mnemonic by the `Sel` slot, render `args` in order.
///
/// Templates are evaluated in a fixed priority order; the table's order is
/// itself part of the contract because encoding spaces overlap and a narrow
/// family must be tested before a broader one that also matches its bits.
pub struct Template {
    pub mask: u32,
    pub bits: u32,
    pub names: &'static [&'static str],
    pub fields: &'static [FieldSpec],
    pub presets: &'static [(FieldId, u32)],
    pub args: &'static [Arg],
}

/// A disassembled instruction. `next` is `addr + 4` except for collapsed
/// NOP runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decoded {
    pub mnemonic: String,
    pub operands: String,
    pub next: u64,
}

impl Decoded {
    /// One-line listing form with the mnemonic column padded.
    pub fn text(&self) -> String {
        if self.operands.is_empty() {
            self.mnemonic.clone()
        } else {
            format!("{:<9} {}", self.mnemonic, self.operands)
        }
    }
}

pub const NOP_WORD: u32 = 0xD503_201F;

/// Decode a single instruction word. Total: every 32-bit value yields a
/// mnemonic (the reserved sentinel `?` at worst) and advances by 4.
pub fn decode_word(word: u32, addr: u64) -> Decoded {
    for t in a64::TEMPLATES {
        if word & t.mask != t.bits {
            continue;
        }
        let mut fl = Fields::default();
        for spec in t.fields {
            let mut v: u32 = 0;
            for &(shr, mask) in &spec.spans {
                v |= field(word, shr, mask);
            }
            let val = if spec.sext > 0 { sign_extend(v, spec.sext) } else { v as i64 };
            fl.set(spec.dst, val);
        }
        for &(id, v) in t.presets {
            fl.set(id, v as i64);
        }
        let name = disasm::pick(t.names, fl.sel as usize);
        // a trailing '.' marks a condition-suffixed mnemonic (b.cond)
        let mnemonic = if name.ends_with('.') {
            format!("{}{}", name, disasm::pick(a64::COND, fl.cond as usize))
        } else {
            name.to_string()
        };
        let operands = disasm::render_args(t.args, &fl, addr);
        return Decoded { mnemonic, operands, next: addr.wrapping_add(4) };
    }
    Decoded { mnemonic: "?".to_string(), operands: String::new(), next: addr.wrapping_add(4) }
}

/// Decode the instruction at `addr`, collapsing a run of two or more
/// identical NOP words into a single `"N x nop"` line with
/// `next = addr + 4N`, a deliberate fast-forward over padding.
pub fn decode_at<B: Bus>(bus: &mut B, addr: u64) -> Result<Decoded> {
    let word = bus.read_u32(addr)?;
    if word == NOP_WORD {
        let mut run: u64 = 1;
        while bus
            .read_u32(addr.wrapping_add(run * 4))
            .map(|w| w == NOP_WORD)
            .unwrap_or(false)
        {
            run += 1;
        }
        if run > 1 {
            return Ok(Decoded {
                mnemonic: format!("{} x nop", run),
                operands: String::new(),
                next: addr.wrapping_add(run * 4),
            });
        }
    }
    Ok(decode_word(word, addr))
}
