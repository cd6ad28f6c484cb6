//! AArch64 encoding tables (ARMv8.2 A64 subset).
//!
//! `TEMPLATES` is scanned in order, first match wins. The order is load
//! bearing: narrow families (fixed high bits, fixed register fields) sit
//! above the broader families whose mask would also accept their bits.
//! Name lists walk by selector value; `?` marks reserved slots.

use crate::decoder::{f, f2, f3, f3s, f4, fs, FieldId as F, FieldSpec, Template};
use crate::disasm::Arg::{self, *};

pub const COND: &[&str] = &[
    "eq", "ne", "cs", "cc", "mi", "pl", "vs", "vc", "hi", "ls", "ge", "lt", "gt", "le", "al", "nv",
];
pub const PSTATE: &[&str] = &["?", "?", "?", "uao", "pan", "spsel", "daifs", "daifc"];
pub const BARRIER: &[&str] = &[
    "?", "oshld", "oshst", "osh", "?", "nshld", "nshst", "nsh", "?", "ishld", "ishst", "ish", "?",
    "ld", "st", "sy",
];
pub const AT_OP0: &[&str] = &["s1e1r", "s1e1w", "s1e0r", "s1e0w"];
pub const AT_OP1: &[&str] = &["s1e1rp", "s1e1wp"];
pub const AT_OP2: &[&str] = &[
    "s1e2r", "s1e2w", "?", "?", "s12e1r", "s12e1w", "s12e0r", "s12e0w", "s1e3r", "s1e3w",
];
pub const DC_OP0: &[&str] = &["?", "ivac", "isw"];
pub const DC_OP1: &[&str] = &["csw", "cisw"];
pub const DC_OP2: &[&str] = &["cvac", "cvau", "civac"];
pub const IC_OP: &[&str] = &["ialluis", "iallu", "?", "ivau"];
pub const TLBI_OP0: &[&str] = &[
    "vmalle1is", "vae1is", "aside1is", "vaae1is", "?", "vale1is", "?", "vaale1is", "vmalle1",
    "vae1", "aside1", "vaae1", "?", "vale1", "?", "vaale1", "alle2is", "vae2is", "?", "?",
    "alle1is", "vale2is", "vmalls12e1is", "alle2", "vae2", "?", "?", "alle1", "vale2",
    "vmalls12e1",
];
pub const TLBI_OP1: &[&str] = &["ipas2e1is", "ipas2le1is", "ipas2e1", "ipas2el1"];
pub const TLBI_OP2: &[&str] = &[
    "alle3is", "vae3is", "?", "vale3is", "alle3", "vae3", "?", "vale3",
];
pub const ARRANGE: &[&str] = &["8b", "16b", "4h", "8h", "2s", "4s", "1d", "2d", "1q", "2q"];
pub const PRF_TYPE: &[&str] = &["pld", "pli", "pst"];
pub const PRF_POL: &[&str] = &["keep", "strm"];
pub const EXTEND32: &[&str] = &[
    "uxtb", "uxth", "lsl", "uxtx", "sxtb", "sxth", "sxtw", "sxtx",
];
pub const EXTEND64: &[&str] = &[
    "uxtb", "uxth", "uxtw", "lsl", "sxtb", "sxth", "sxtw", "sxtx",
];
pub const SHIFT: &[&str] = &["lsl", "lsr", "asr", "ror"];

const fn t(
    mask: u32,
    bits: u32,
    names: &'static [&'static str],
    fields: &'static [FieldSpec],
    presets: &'static [(F, u32)],
    args: &'static [Arg],
) -> Template {
    Template { mask, bits, names, fields, presets, args }
}

// common field pulls
const RT: FieldSpec = f(F::Rt, 0, 0x1f);
const RN: FieldSpec = f(F::Rn, 5, 0x1f);
const RM: FieldSpec = f(F::Rm, 16, 0x1f);
const RM4: FieldSpec = f(F::Rm, 16, 0xf);
const RM10: FieldSpec = f(F::Rm, 10, 0x1f);
const RA16: FieldSpec = f(F::Ra, 16, 0x1f);
const RA10: FieldSpec = f(F::Ra, 10, 0x1f);
const SF31: FieldSpec = f(F::Sf, 31, 1);
const SF30: FieldSpec = f(F::Sf, 30, 1);
const Q30: FieldSpec = f(F::Q, 30, 1);
const S12: FieldSpec = f(F::Sf, 12, 1);
const SZ22: FieldSpec = f(F::Sz, 22, 3);
const SZ22_1: FieldSpec = f(F::Sz, 22, 1);
const SZ10: FieldSpec = f(F::Sz, 10, 3);
const SZ30: FieldSpec = f(F::Sz, 30, 3);
const COND12: FieldSpec = f(F::Cond, 12, 0xf);
const IMM9: FieldSpec = fs(F::Imm, 12, 0x1ff, 9);
const IMM7: FieldSpec = fs(F::Imm, 15, 0x7f, 7);
const IMM19: FieldSpec = fs(F::Imm, 5, 0x7ffff, 19);
const IMM16: FieldSpec = fs(F::Imm, 5, 0xffff, 16);
const AUX12: FieldSpec = f(F::Aux, 10, 0xfff);
const IMMH: FieldSpec = f(F::Aux, 16, 0x7f);
const OPT13: FieldSpec = f(F::Opt, 13, 7);
const J12: FieldSpec = f(F::Aux, 12, 1);
const WB11: FieldSpec = f(F::Wb, 11, 1);
const WB23: FieldSpec = f(F::Wb, 23, 1);
const ELEM: FieldSpec = f(F::Aux, 16, 0x1f);
const IMM8V: FieldSpec = f2(F::Aux, (11, 0xe0), (5, 0x1f));
const LANE_HL: FieldSpec = f2(F::Aux, (9, 4), (20, 3));
const LANE_HL2: FieldSpec = f2(F::Aux, (10, 2), (21, 1));

const NAMES_NARROW: &[&str] = &["?", "xtn", "sqxtn", "?", "?", "sqxtun", "uqxtn", "fcvtxn"];
const NAMES_NARROW2: &[&str] = &["?", "xtn2", "sqxtn2", "?", "?", "sqxtun2", "uqxtn2", "fcvtxn2"];
const NAMES_LONG3: &[&str] = &[
    "saddl", "saddw", "ssubl", "ssubw", "addhn", "sabal", "subhn", "sabdl", "smlal", "sqdmlal",
    "smlsl", "sqdmlsl", "?", "sqdmull", "pmull", "?", "uaddl", "uaddw", "usubl", "usubw", "raddhn",
    "uabal", "rsubhn", "uabdl", "umlal", "?", "umlsl", "?", "?", "?", "umull",
];
const NAMES_LONG3_2: &[&str] = &[
    "saddl2", "saddw2", "ssubl2", "ssubw2", "addhn2", "sabal2", "subhn2", "sabdl2", "smlal2",
    "sqdmlal2", "smlsl2", "sqdmlsl2", "?", "sqdmull2", "pmull2", "?", "uaddl2", "uaddw2", "usubl2",
    "usubw2", "raddhn2", "uabal2", "rsubhn2", "uabdl2", "umlal2", "?", "umlsl2", "?", "?", "?",
    "umull2",
];
const NAMES_LONG_ELEM: &[&str] = &[
    "smlal", "sqdmlal", "smlsl", "sqdmlsl", "smull", "sqdmull", "?", "?", "umlal", "?", "umlsl",
    "?", "umull",
];
const NAMES_LONG_ELEM2: &[&str] = &[
    "smlal2", "sqdmlal2", "smlsl2", "sqdmlsl2", "smull2", "sqdmull2", "?", "?", "umlal2", "?",
    "umlsl2", "?", "umull2",
];
const NAMES_SHRN: &[&str] = &[
    "?", "rshrn", "sqshrn", "sqrshrn", "sqshrun", "sqrshrun", "uqshrn", "uqrshrn",
];
const NAMES_SHRN2: &[&str] = &[
    "?", "rshrn2", "sqshrn2", "sqrshrn2", "sqshrun2", "sqrshrun2", "uqshrn2", "uqrshrn2",
];
const NAMES_FCVT_MISC: &[&str] = &[
    "?", "?", "fcvtns", "fcvtms", "fcvtas", "scvtf", "?", "?", "?", "?", "fcvtps", "fcvtzs", "?",
    "frecpe", "?", "frecpx", "?", "?", "fcvtnu", "fcvtmu", "fcvtau", "ucvtf", "?", "?", "?", "?",
    "fcvtpu", "fcvtzu", "?", "frsqrte",
];
const NAMES_FCMP0: &[&str] = &["fcmgt", "fcmeq", "fcmlt", "?", "fcmge", "fcmle"];
const NAMES_FCMP0N: &[&str] = &["fcmgt", "fcmeq", "fcmlt", "?", "fcmge", "fcmle", "?", "fneg"];
const NAMES_CMP0: &[&str] = &["cmgt", "cmeq", "cmlt", "abs", "cmge", "cmle", "?", "neg"];
const NAMES_FMINMAXP: &[&str] = &[
    "fmaxnmp", "faddp", "?", "fmaxp", "fminnmp", "?", "?", "fminp",
];
const NAMES_FMINMAXV: &[&str] = &[
    "fmaxnmv", "?", "?", "fmaxv", "fminnmv", "?", "?", "fminv",
];
const NAMES_FMLA_ELEM: &[&str] = &["fmla", "fmls", "fmul", "?", "?", "?", "fmulx"];
const NAMES_FMLA_ELEM_Q: &[&str] = &[
    "fmla", "fmls", "fmul", "sqrdmulh", "?", "?", "fmulx", "sqrdmlah",
];
const NAMES_FP3SAME: &[&str] = &[
    "fmaxnm", "fmla", "fadd", "fmulx", "fcmeq", "?", "fmax", "frecps", "fminnm", "fmls", "fsub",
    "?", "?", "?", "fmin", "frsqrts", "fmaxnmp", "?", "faddp", "fmul", "fcmge", "facge", "fmaxp",
    "fdiv", "fminnmp", "?", "fabd", "?", "fcmgt", "facgt", "fminp",
];
const NAMES_FP3SAME_SD: &[&str] = &[
    "fmaxnm", "fmla", "fadd", "?", "fcmeq", "?", "fmax", "frecps", "fminnm", "fmls", "fsub", "?",
    "?", "?", "fmin", "frsqrts", "fmaxnmp", "?", "faddp", "fmul", "fcmge", "facge", "fmaxp",
    "fdiv", "fminnmp", "?", "fabd", "?", "fcmgt", "facgt", "fminp",
];
const NAMES_FP2MISC_H: &[&str] = &[
    "frintn", "frintm", "fcvtns", "fcvtms", "fcvtas", "scvtf", "?", "fabs", "frintp", "frintz",
    "fcvtps", "fcvtzs", "?", "frecpe", "?", "frecpx", "?", "frintx", "fcvtnu", "fcvtmu", "fcvtau",
    "ucvtf", "?", "?", "frinta", "frinti", "fcvtpu", "fcvtzu", "?", "frsqrte", "?", "fsqrt",
];
const NAMES_FP2MISC_V: &[&str] = &[
    "?", "?", "?", "?", "?", "?", "?", "?", "frintn", "frintm", "fcvtns", "fcvtms", "fcvtas",
    "scvtf", "?", "fabs", "?", "?", "?", "?", "fcmgt", "fcmeq", "fcmlt", "?", "frintp", "frintz",
    "fcvtps", "fcvtzs", "urecpe", "frecpe", "?", "frecpx", "?", "?", "?", "?", "?", "?", "?", "?",
    "?", "frintx", "fcvtnu", "fcvtmu", "fcvtau", "ucvtf", "?", "?", "?", "?", "?", "?", "fcmge",
    "fcmle", "?", "fneg", "frinta", "frinti", "fcvtpu", "fcvtzu", "?", "frsqrte", "?", "fsqrt",
];
const NAMES_INT2MISC: &[&str] = &[
    "rev64", "rev16", "saddlp", "suqadd", "cls", "cnt", "sadalp", "sqabs", "cmgt", "cmeq", "cmlt",
    "abs", "?", "?", "?", "?", "rev32", "?", "uaddlp", "usqadd", "clz", "?", "uadalp", "sqneg",
    "cmge", "cmle", "?", "neg",
];
const NAMES_INT3SAME_S: &[&str] = &[
    "?", "sqadd", "?", "?", "?", "sqsub", "cmgt", "cmge", "sshl", "sqshl", "srshl", "sqrshl", "?",
    "?", "?", "?", "add", "cmtst", "?", "?", "?", "?", "sqdmulh", "?", "?", "?", "?", "?", "?",
    "?", "?", "?", "?", "uqadd", "?", "?", "?", "uqsub", "cmhi", "cmhs", "ushl", "uqshl", "urshl",
    "uqrshl", "?", "?", "?", "?", "sub", "cmeq", "?", "?", "?", "?", "sqrdmulh",
];
const NAMES_PERM: &[&str] = &[
    "?", "?", "?", "?", "?", "?", "uzp1", "?", "?", "?", "trn1", "?", "?", "?", "zip1", "?", "?",
    "?", "?", "?", "?", "?", "uzp2", "?", "?", "?", "trn2", "?", "?", "?", "zip2", "?", "?",
    "shadd", "?", "sqadd", "?", "srhadd", "?", "?", "?", "?", "?", "sqsub", "?", "cmgt", "?",
    "cmge", "?", "sshl", "?", "sqshl", "?", "srshl", "?", "sqrshl", "?", "smax", "?", "smin", "?",
    "sabd", "?", "saba",
];
const NAMES_INT3SAME_U: &[&str] = &[
    "uhadd", "uqadd", "urhadd", "?", "uhsub", "uqsub", "cmhi", "cmhs", "ushl", "uqshl", "urshl",
    "uqrshl", "umax", "umin", "uabd", "uaba", "sub", "cmeq", "mls", "pmul", "umaxp", "uminp",
    "sqrdmulh",
];
const NAMES_INT3SAME_2: &[&str] = &[
    "?", "?", "sdot", "?", "?", "?", "?", "?", "add", "cmtst", "mla", "mul", "smaxp", "sminp",
    "sqdmulh", "addp", "sqrdmlah", "sqrdmlsh", "udot", "?", "?", "?", "?", "?", "sub", "cmeq",
    "mls", "pmul", "umaxp", "uminp", "sqrdmulh",
];
const NAMES_SHIFT_SCALAR: &[&str] = &[
    "sshr", "ssra", "srshr", "srsra", "?", "shl", "?", "sqshl", "ushr", "usra", "urshr", "ursra",
    "sri", "sli", "sqshlu", "uqshl",
];
const NAMES_USHIFT: &[&str] = &[
    "ushr", "usra", "urshr", "ursra", "sri", "sli", "sqshlu", "uqshl", "?", "?", "?", "?", "?",
    "?", "ucvtf",
];
const NAMES_SHIFTL: &[&str] = &["?", "shl", "?", "sqshl", "sri", "sli", "sqshlu", "uqshl"];
const NAMES_SQDM3: &[&str] = &["sqdmlal", "sqdmlsl", "sqdmull"];
const NAMES_SQDM3_2: &[&str] = &["sqdmlal2", "sqdmlsl2", "sqdmull2"];
const NAMES_SQRDMLAH: &[&str] = &["sqrdmlah", "sqrdmlsh"];
const NAMES_SQDMULH: &[&str] = &["sqdmulh", "sqrdmulh"];
const NAMES_LDADD_B: &[&str] = &[
    "ldaddb", "ldclrb", "ldeorb", "ldsetb", "ldsmaxb", "ldsminb", "ldumaxb", "lduminb", "swpb",
    "?", "?", "?", "?", "?", "?", "?", "ldaddlb", "ldclrlb", "ldeorlb", "ldsetlb", "ldsmaxlb",
    "ldsminlb", "ldumaxlb", "lduminlb", "swplb", "?", "?", "?", "?", "?", "?", "?", "ldaddab",
    "ldclrab", "ldeorab", "ldsetab", "ldsmaxab", "ldsminab", "ldumaxab", "lduminab", "swpab", "?",
    "?", "?", "?", "?", "?", "?", "ldaddalb", "ldclralb", "ldeoralb", "ldsetalb", "ldsmaxalb",
    "ldsminalb", "ldumaxalb", "lduminalb", "swpalb",
];
const NAMES_LDADD_H: &[&str] = &[
    "ldaddh", "ldclrh", "ldeorh", "ldseth", "ldsmaxh", "ldsminh", "ldumaxh", "lduminh", "swph",
    "?", "?", "?", "?", "?", "?", "?", "ldaddlh", "ldclrlh", "ldeorlh", "ldsetlh", "ldsmaxlh",
    "ldsminlh", "ldumaxlh", "lduminlh", "swplh", "?", "?", "?", "?", "?", "?", "?", "ldaddah",
    "ldclrah", "ldeorah", "ldsetah", "ldsmaxah", "ldsminah", "ldumaxah", "lduminah", "swpah", "?",
    "?", "?", "?", "?", "?", "?", "ldaddalh", "ldclralh", "ldeoralh", "ldsetalh", "ldsmaxalh",
    "ldsminalh", "ldumaxalh", "lduminalh", "swpalh",
];
const NAMES_LDADD: &[&str] = &[
    "ldadd", "ldclr", "ldeor", "ldset", "ldsmax", "ldsmin", "ldumax", "ldumin", "swp", "?", "?",
    "?", "?", "?", "?", "?", "ldaddl", "ldclrl", "ldeorl", "ldsetl", "ldsmaxl", "ldsminl",
    "ldumaxl", "lduminl", "swpl", "?", "?", "?", "?", "?", "?", "?", "ldadda", "ldclra", "ldeora",
    "ldseta", "ldsmaxa", "ldsmina", "ldumaxa", "ldumina", "swpa", "?", "?", "?", "?", "?", "?",
    "?", "ldaddal", "ldclral", "ldeoral", "ldsetal", "ldsmaxal", "ldsminal", "ldumaxal",
    "lduminal", "swpal",
];

const ST4_1: &[&str] = &["st4", "st1", "ld4", "ld1"];
const ST3_1: &[&str] = &["st3", "st1", "ld3", "ld1"];
const ST2_1: &[&str] = &["st2", "st1", "ld2", "ld1"];
const ST1: &[&str] = &["st1", "ld1"];
const ST2: &[&str] = &["st2", "ld2"];
const ST3: &[&str] = &["st3", "ld3"];
const ST4: &[&str] = &["st4", "ld4"];
const STR_LDR: &[&str] = &["str", "ldr"];
const STRB_LDRB: &[&str] = &["strb", "ldrb", "strh", "ldrh"];
const LDRSB_SH: &[&str] = &["ldrsb", "ldrsh"];
const STP_LDP: &[&str] = &["stp", "ldp"];
const STNP_STP: &[&str] = &["stnp", "ldnp", "stp", "ldp"];

pub static TEMPLATES: &[Template] = &[
    // exclusive / compare-and-swap, byte
    t(
        0b111111110000000001111100 << 8,
        0b000010000000000001111100 << 8,
        &["stxrb", "stlxrb", "?", "?", "?", "?", "?", "?", "?", "?", "casb", "caslb", "?", "?", "casab", "casalb"],
        &[f2(F::Sel, (20, 0xe), (15, 1)), RA16, RN, RT],
        &[],
        &[Wd, Wt, MemOpen, XnSp, MemClose],
    ),
    // SIMD narrowing / widening conversions, low half
    t(
        0b111111111011111111111100 << 8,
        0b000011100010000101101000 << 8,
        &["fcvtn"],
        &[SZ22_1, RN, RT],
        &[],
        &[Vtzq2, Vnz3],
    ),
    t(
        0b111111111011111111111100 << 8,
        0b000011100010000111101000 << 8,
        &["fcvtl"],
        &[SZ22_1, RN, RT],
        &[],
        &[Vtz3, Vnzq2],
    ),
    t(
        0b111111110011111111111100 << 8,
        0b000011100010000100101000 << 8,
        &["xtn"],
        &[SZ22, RN, RT],
        &[],
        &[VtT, VnT2],
    ),
    t(
        0b111111110011111111111100 << 8,
        0b000011100010000100111000 << 8,
        &["shll"],
        &[SZ22, RN, RT],
        &[],
        &[Vtz, VnT, Shift8],
    ),
    t(
        0b111111110010000010011100 << 8,
        0b000011100010000010010000 << 8,
        NAMES_SQDM3,
        &[f(F::Sel, 13, 3), SZ22, RM, RN, RT],
        &[],
        &[Vtz, VnT, VmT],
    ),
    t(
        0b111111111100000010110100 << 8,
        0b000011110100000000100000 << 8,
        &["smlal", "smlsl"],
        &[f(F::Sel, 14, 1), LANE_HL, RM4, RN, RT],
        &[(F::Sz, 1)],
        &[Vtz3, VnT, VmTs],
    ),
    t(
        0b111111111100000011110100 << 8,
        0b000011110100000010100000 << 8,
        &["smull"],
        &[LANE_HL, RM4, RN, RT],
        &[(F::Sz, 1)],
        &[VtT, VnT, VmTs],
    ),
    t(
        0b111111111100000010110100 << 8,
        0b000011111000000000100000 << 8,
        &["smlal", "smlsl"],
        &[f(F::Sel, 14, 1), LANE_HL2, RM, RN, RT],
        &[(F::Sz, 2)],
        &[Vtz3, VnT, VmTs],
    ),
    t(
        0b111111111100000011110100 << 8,
        0b000011111000000010100000 << 8,
        &["smull"],
        &[LANE_HL2, RM, RN, RT],
        &[(F::Sz, 2)],
        &[VtT, VnT, VmTs],
    ),
    // scalar FP conversions and arithmetic
    t(
        0b111111111111111111111100 << 8,
        0b000111100110001001000000 << 8,
        &["fcvt"],
        &[RN, RT],
        &[],
        &[St, Dn],
    ),
    t(
        0b111111110011111001111100 << 8,
        0b000111100010001001000000 << 8,
        &["fcvt"],
        &[SZ22, f(F::K, 15, 3), RN, RT],
        &[],
        &[FPk5t, FP5n],
    ),
    t(
        0b111111110011100001111100 << 8,
        0b000111100010000001000000 << 8,
        &["fmov", "fabs", "fneg", "fsqrt", "?", "?", "?", "?", "frintn", "frintp", "frintm", "frintz", "frinta", "?", "frintx", "frinti"],
        &[f(F::Sel, 15, 0xf), SZ22, RN, RT],
        &[],
        &[FP5t, FP5n],
    ),
    t(
        0b11111111001000001111110000001111,
        0b00011110001000000010000000000000,
        &["fcmp", "fcmpe"],
        &[f(F::Sel, 4, 1), SZ22, RM, RN],
        &[],
        &[FP5n, FP5m],
    ),
    t(
        0b11111111001000001111110000001111,
        0b00011110001000000010000000001000,
        &["fcmp", "fcmpe"],
        &[f(F::Sel, 4, 1), SZ22, RN],
        &[],
        &[FP5n, FpZero],
    ),
    t(
        0b11111111001000000001111111100000,
        0b00011110001000000001000000000000,
        &["fmov"],
        &[SZ22, f(F::Aux, 13, 0xff), RT],
        &[],
        &[FP5t, FImmSized],
    ),
    t(
        0b111111110010000000001100 << 8,
        0b000111100010000000000100 << 8,
        &["fccmp", "fccmpe"],
        &[f(F::Sel, 4, 1), SZ22, RM, COND12, RN, f(F::Aux, 0, 0xf)],
        &[],
        &[FP5n, FP5m, Aux, Cond],
    ),
    t(
        0b111111110010000000001100 << 8,
        0b000111100010000000001000 << 8,
        &["fmul", "fdiv", "fadd", "fsub", "fmax", "fmin", "fmaxnm", "fminnm", "fnmul"],
        &[f(F::Sel, 12, 0xf), SZ22, RM, RN, RT],
        &[],
        &[FP5t, FP5n, FP5m],
    ),
    t(
        0b111111110010000000001100 << 8,
        0b000111100010000000001100 << 8,
        &["fcsel"],
        &[SZ22, RM, COND12, RN, RT],
        &[],
        &[FP5t, FP5n, FP5m, Cond],
    ),
    t(
        0b11111111 << 24,
        0b00011111 << 24,
        &["fmadd", "fmsub", "fnmadd", "fnmsub"],
        &[f2(F::Sel, (20, 2), (15, 1)), SZ22, RM, RA10, RN, RT],
        &[],
        &[FP5t, FP5n, FP5m, FP5d],
    ),
    t(
        0b111111111111100011111100 << 8,
        0b001011110000000011100100 << 8,
        &["movi"],
        &[IMM8V, RT],
        &[],
        &[Dt, Imm64Mask],
    ),
    // atomic memory ops, byte
    t(
        0b111111110010000000001100 << 8,
        0b001110000010000000000000 << 8,
        NAMES_LDADD_B,
        &[f2(F::Sel, (18, 0x30), (12, 0xf)), RA16, RN, RT],
        &[],
        &[Wd, Wt, MemOpen, XnSp, MemClose],
    ),
    t(
        0b110111110011111110011100 << 8,
        0b000011100010000100001000 << 8,
        NAMES_NARROW,
        &[f2(F::Sel, (27, 4), (13, 3)), SZ22, RN, RT],
        &[],
        &[VtT, VnT3],
    ),
    t(
        0b110111110010000011011100 << 8,
        0b000011100010000000010000 << 8,
        &["saddw", "ssubw", "uaddw", "usubw"],
        &[f2(F::Sel, (28, 2), (13, 1)), SZ22, RM, RN, RT],
        &[],
        &[VtT3, VnT3, VmT],
    ),
    t(
        0b110111110010000011011100 << 8,
        0b000011100010000001000000 << 8,
        &["addhn", "subhn", "raddhn", "rsubhn"],
        &[f2(F::Sel, (28, 2), (13, 1)), SZ22, RM, RN, RT],
        &[],
        &[VtT, VnT3, VmT3],
    ),
    t(
        0b110111110010000011111100 << 8,
        0b000011100010000011100000 << 8,
        &["pmull", "umull"],
        &[f(F::Sel, 29, 1), SZ22, RM, RN, RT],
        &[],
        &[VtT4, VnT, VmT],
    ),
    t(
        0b110111110010000000001100 << 8,
        0b000011100010000000000000 << 8,
        NAMES_LONG3,
        &[f2(F::Sel, (25, 0x10), (12, 0xf)), SZ22, RM, RN, RT],
        &[],
        &[VtT3, VnT, VmT],
    ),
    t(
        0b110111111100000000100100 << 8,
        0b000011110100000000100000 << 8,
        NAMES_LONG_ELEM,
        &[f3(F::Sel, (26, 8), (13, 6), (12, 1)), LANE_HL, RM4, RN, RT],
        &[(F::Sz, 1)],
        &[Vtz, VnT, VmTs],
    ),
    t(
        0b110111111000000011100100 << 8,
        0b000011110000000010000100 << 8,
        NAMES_SHRN,
        &[f2(F::Sel, (27, 4), (11, 3)), IMMH, RN, RT],
        &[],
        &[Vtj2, VnTa, ShrShift],
    ),
    t(
        0b110111111000000011111100 << 8,
        0b000011110000000010100100 << 8,
        &["sshll", "ushll"],
        &[f(F::Sel, 29, 1), IMMH, RN, RT],
        &[],
        &[Vtj2, VnTa, ShlShift],
    ),
    t(
        0b110111111100000000100100 << 8,
        0b000011111000000000100000 << 8,
        NAMES_LONG_ELEM,
        &[f3(F::Sel, (26, 8), (13, 6), (12, 1)), LANE_HL2, RM, RN, RT],
        &[(F::Sz, 2)],
        &[Vtz, VnT, VmTs],
    ),
    // exclusive / compare-and-swap, halfword
    t(
        0b111111110000000001111100 << 8,
        0b010010000000000001111100 << 8,
        &["stxrh", "stlxrh", "?", "?", "?", "?", "?", "?", "?", "?", "cash", "caslh", "?", "?", "casah", "casalh"],
        &[f2(F::Sel, (20, 0xe), (15, 1)), RA16, RN, RT],
        &[],
        &[Wd, Wt, MemOpen, XnSp, MemClose],
    ),
    t(
        0b111111111110000011111100 << 8,
        0b010011100000000000011100 << 8,
        &["ins"],
        &[ELEM, RN, RT],
        &[],
        &[Vtj, MemOpen, LaneIdx, MemClose, RnJ],
    ),
    t(
        0b111111111111111111001100 << 8,
        0b010011100010100001001000 << 8,
        &["aese", "aesd", "aesmc", "aesimc"],
        &[f(F::Sel, 12, 3), RN, RT],
        &[],
        &[Vt16b, Vn16b],
    ),
    // SIMD narrowing / widening conversions, high half
    t(
        0b111111111011111111111100 << 8,
        0b010011100010000101101000 << 8,
        &["fcvtn2"],
        &[SZ22_1, RN, RT],
        &[(F::Q, 1)],
        &[Vtzq2, Vnz3],
    ),
    t(
        0b111111111011111111111100 << 8,
        0b010011100010000111101000 << 8,
        &["fcvtl2"],
        &[SZ22_1, RN, RT],
        &[(F::Q, 1)],
        &[Vtz3, Vnzq2],
    ),
    t(
        0b111111110011111111111100 << 8,
        0b010011100010000100101000 << 8,
        &["xtn2"],
        &[SZ22, RN, RT],
        &[(F::Q, 1)],
        &[VtT, VnT2],
    ),
    t(
        0b111111110011111111111100 << 8,
        0b010011100010000100111000 << 8,
        &["shll2"],
        &[SZ22, RN, RT],
        &[(F::Q, 1)],
        &[Vtz, VnT, Shift8],
    ),
    t(
        0b111111110010000010011100 << 8,
        0b010011100010000010010000 << 8,
        NAMES_SQDM3_2,
        &[f(F::Sel, 13, 3), SZ22, RM, RN, RT],
        &[(F::Q, 1)],
        &[Vtz, VnT, VmT],
    ),
    t(
        0b111111111100000010110100 << 8,
        0b010011110100000000100000 << 8,
        &["smlal2", "smlsl2"],
        &[f(F::Sel, 14, 1), LANE_HL, RM4, RN, RT],
        &[(F::Sz, 1), (F::Q, 1)],
        &[Vtz3, VnT, VmTs],
    ),
    t(
        0b111111111100000011110100 << 8,
        0b010011110100000010100000 << 8,
        &["smull2"],
        &[LANE_HL, RM4, RN, RT],
        &[(F::Sz, 1), (F::Q, 1)],
        &[VtT, VnT, VmTs],
    ),
    t(
        0b111111111100000010110100 << 8,
        0b010011111000000000100000 << 8,
        &["smlal2", "smlsl2"],
        &[f(F::Sel, 14, 1), LANE_HL2, RM, RN, RT],
        &[(F::Sz, 2), (F::Q, 1)],
        &[Vtz3, VnT, VmTs],
    ),
    t(
        0b111111111100000011110100 << 8,
        0b010011111000000010100000 << 8,
        &["smull2"],
        &[LANE_HL2, RM, RN, RT],
        &[(F::Sz, 2), (F::Q, 1)],
        &[VtT, VnT, VmTs],
    ),
    // conditional branch
    t(
        0b11111111000000000000000000010000,
        0b01010100000000000000000000000000,
        &["b."],
        &[IMM19, f(F::Cond, 0, 0xf)],
        &[],
        &[PcRelWord],
    ),
    t(
        0b111111111110000011111100 << 8,
        0b010111100000000000000100 << 8,
        &["dup"],
        &[ELEM, RN, RT],
        &[],
        &[FPjt, Vnj, MemOpen, LaneIdx, MemClose],
    ),
    // SHA crypto
    t(
        0b111111111110000011111100 << 8,
        0b010111100000000000110000 << 8,
        &["sha1su0"],
        &[RM, RN, RT],
        &[],
        &[Vt4s, Vn4s, Vm4s],
    ),
    t(
        0b111111111110000011001100 << 8,
        0b010111100000000000000000 << 8,
        &["sha1c", "sha1p", "sha1m", "sha1su0"],
        &[f(F::Sel, 12, 3), RM, RN, RT],
        &[],
        &[Qt, Sn, Vm4s],
    ),
    t(
        0b111111111110000011101100 << 8,
        0b010111100000000001000000 << 8,
        &["sha256h", "sha256h2"],
        &[f(F::Sel, 12, 1), RM, RN, RT],
        &[],
        &[Qt, Qn, Vm4s],
    ),
    t(
        0b111111111110000011111100 << 8,
        0b010111100000000001100000 << 8,
        &["sha256su1"],
        &[RM, RN, RT],
        &[],
        &[Vt4s, Vn4s, Vm4s],
    ),
    t(
        0b111111111111111111111100 << 8,
        0b010111100010100000001000 << 8,
        &["sha1h"],
        &[RN, RT],
        &[],
        &[St, Sn],
    ),
    t(
        0b111111111111111111111100 << 8,
        0b010111100010100000011000 << 8,
        &["sha1su1"],
        &[RN, RT],
        &[],
        &[Vt4s, Vn4s],
    ),
    t(
        0b111111111111111111111100 << 8,
        0b010111100010100000101000 << 8,
        &["sha256su0"],
        &[RN, RT],
        &[],
        &[Vt4s, Vn4s],
    ),
    // scalar half-precision three-reg
    t(
        0b111111111110000011111100 << 8,
        0b010111100100000000011100 << 8,
        &["fmulx"],
        &[RM, RN, RT],
        &[],
        &[Ht, Hn, Hm],
    ),
    t(
        0b111111111110000011111100 << 8,
        0b010111100100000000100100 << 8,
        &["fcmeq"],
        &[RM, RN, RT],
        &[],
        &[Ht, Hn, Hm],
    ),
    t(
        0b111111111010000011111100 << 8,
        0b010111100010000011011100 << 8,
        &["fmulx"],
        &[SZ22_1, RM, RN, RT],
        &[],
        &[FPt, FPn, FPm],
    ),
    t(
        0b111111111010000011111100 << 8,
        0b010111100010000011100100 << 8,
        &["fcmeq"],
        &[SZ22_1, RM, RN, RT],
        &[],
        &[FPt, FPn, FPm],
    ),
    t(
        0b111111110111111111001100 << 8,
        0b010111100011000011001000 << 8,
        NAMES_FMINMAXP,
        &[f2(F::Sel, (21, 4), (12, 3)), RN, RT],
        &[],
        &[Ht, Vn2h],
    ),
    t(
        0b111111110110000011111100 << 8,
        0b010111100100000000111100 << 8,
        &["frecps", "frsqrts"],
        &[f(F::Sel, 23, 1), RM, RN, RT],
        &[],
        &[Ht, Hn, Hm],
    ),
    t(
        0b111111110011111111111100 << 8,
        0b010111100011000110111000 << 8,
        &["addp"],
        &[SZ22, RN, RT],
        &[],
        &[FP3t, Vn2d],
    ),
    t(
        0b111111110010000011111100 << 8,
        0b010111100010000011111100 << 8,
        &["frecps", "frsqrts"],
        &[f(F::Sel, 23, 1), SZ22_1, RM, RN, RT],
        &[],
        &[FPt, FPn, FPm],
    ),
    t(
        0b111111110010000010011100 << 8,
        0b010111100010000010010000 << 8,
        NAMES_SQDM3,
        &[f(F::Sel, 13, 3), SZ22, RM, RN, RT],
        &[],
        &[FP4t, FP2n, FP2m],
    ),
    t(
        0b111111111100000011100100 << 8,
        0b010111110100000011000000 << 8,
        NAMES_SQDMULH,
        &[f(F::Sel, 12, 1), LANE_HL, RM4, RN, RT],
        &[(F::Sz, 1)],
        &[FP4t, FP4n, VmTs],
    ),
    t(
        0b111111111100000000110100 << 8,
        0b010111110100000000110000 << 8,
        NAMES_SQDM3,
        &[f(F::Sel, 14, 3), LANE_HL, RM4, RN, RT],
        &[(F::Sz, 1)],
        &[FP4t, FP3n, VmTs],
    ),
    t(
        0b111111111000000011011100 << 8,
        0b010111110000000001010100 << 8,
        &["shl", "sqshl"],
        &[f(F::Sel, 13, 1), IMMH, RN, RT],
        &[],
        &[Dt, Dn, ShlShift],
    ),
    t(
        0b111111111100000011100100 << 8,
        0b010111111000000011000000 << 8,
        NAMES_SQDMULH,
        &[f(F::Sel, 12, 1), LANE_HL2, RM, RN, RT],
        &[(F::Sz, 2)],
        &[FP4t, FP4n, VmTs],
    ),
    t(
        0b111111111100000000110100 << 8,
        0b010111111000000000110000 << 8,
        NAMES_SQDM3,
        &[f(F::Sel, 14, 3), LANE_HL2, RM, RN, RT],
        &[(F::Sz, 2)],
        &[FP4t, FP3n, VmTs],
    ),
    // load pair of signed words
    t(
        0b1111111111000000 << 16,
        0b0110100011000000 << 16,
        &["ldpsw"],
        &[IMM7, RM10, RN, RT],
        &[],
        &[Xt, Xm, MemOpen, XnSp, MemClose, Scaled4Opt],
    ),
    t(
        0b1111111101000000 << 16,
        0b0110100101000000 << 16,
        &["ldpsw"],
        &[WB23, IMM7, RM10, RN, RT],
        &[],
        &[Xt, Xm, MemOpen, XnSp, Scaled4Opt, MemClose],
    ),
    t(
        0b111111111110000010000100 << 8,
        0b011011100000000000000100 << 8,
        &["ins"],
        &[ELEM, f(F::K, 11, 0xf), RN, RT],
        &[],
        &[Vtj, MemOpen, LaneIdx, MemClose, Vnj, MemOpen, LaneIdxK, MemClose],
    ),
    t(
        0b111111110011111111001100 << 8,
        0b011011100011000011001000 << 8,
        NAMES_FMINMAXV,
        &[f2(F::Sel, (21, 4), (12, 3)), SZ22_1, RN, RT],
        &[],
        &[FPt, Vn4s],
    ),
    t(
        0b111111111111100011111100 << 8,
        0b011011110000000011100100 << 8,
        &["movi"],
        &[IMM8V, RT],
        &[],
        &[Vt2d, Imm64Mask],
    ),
    t(
        0b111111111111100011111100 << 8,
        0b011011110000000011110100 << 8,
        &["fmov"],
        &[IMM8V, RT],
        &[],
        &[Vt2d, FImm64],
    ),
    // atomic memory ops, halfword
    t(
        0b111111110010000000001100 << 8,
        0b011110000010000000000000 << 8,
        NAMES_LDADD_H,
        &[f2(F::Sel, (18, 0x30), (12, 0xf)), RA16, RN, RT],
        &[],
        &[Wd, Wt, MemOpen, XnSp, MemClose],
    ),
    t(
        0b111111111101111111111100 << 8,
        0b011111100001000011001000 << 8,
        &["fmaxnmp"],
        &[f(F::Sz, 21, 1), RN, RT],
        &[],
        &[FPt, Vnz],
    ),
    t(
        0b111111111110000011110100 << 8,
        0b011111100100000000100100 << 8,
        &["fcmge", "facge"],
        &[f(F::Sel, 11, 1), RM, RN, RT],
        &[],
        &[Ht, Hn, Hm],
    ),
    t(
        0b111111111010000011110100 << 8,
        0b011111100010000011100100 << 8,
        &["fcmge", "facge"],
        &[f(F::Sel, 11, 1), SZ22_1, RM, RN, RT],
        &[],
        &[FPt, FPn, FPm],
    ),
    t(
        0b111111111110000011111100 << 8,
        0b011111101100000000010100 << 8,
        &["fabd"],
        &[RM, RN, RT],
        &[],
        &[Ht, Hn, Hm],
    ),
    t(
        0b111111111110000011110100 << 8,
        0b011111101100000000100100 << 8,
        &["fcmgt", "facgt"],
        &[f(F::Sel, 11, 1), RM, RN, RT],
        &[],
        &[Ht, Hn, Hm],
    ),
    t(
        0b111111111010000011111100 << 8,
        0b011111101010000011010100 << 8,
        &["fabd"],
        &[SZ22_1, RM, RN, RT],
        &[],
        &[FPt, FPn, FPm],
    ),
    t(
        0b111111111010000011110100 << 8,
        0b011111101010000011100100 << 8,
        &["fcmgt", "facgt"],
        &[f(F::Sel, 11, 1), SZ22_1, RM, RN, RT],
        &[],
        &[FPt, FPn, FPm],
    ),
    t(
        0b111111110010000011110100 << 8,
        0b011111100000000010000100 << 8,
        NAMES_SQRDMLAH,
        &[f(F::Sel, 11, 1), SZ22, RM, RN, RT],
        &[],
        &[FP2t, FP2n, FP2m],
    ),
    t(
        0b111111110011111111001100 << 8,
        0b011111100011000011001000 << 8,
        &["?", "faddp", "?", "fmaxp", "fminnmp", "?", "?", "fminp"],
        &[f2(F::Sel, (21, 4), (12, 3)), SZ22_1, RN, RT],
        &[],
        &[FPt, Vnz],
    ),
    t(
        0b111111111100000011010100 << 8,
        0b011111110100000011010000 << 8,
        NAMES_SQRDMLAH,
        &[f(F::Sel, 13, 1), LANE_HL, RM4, RN, RT],
        &[(F::Sz, 1)],
        &[FP4t, FP3n, VmTs],
    ),
    t(
        0b111111111000000011111100 << 8,
        0b011111110000000001100100 << 8,
        &["sqshlu"],
        &[IMMH, RN, RT],
        &[],
        &[Dt, Dn, ShlShift],
    ),
    t(
        0b111111111000000011111100 << 8,
        0b011111110000000001110100 << 8,
        &["uqshl"],
        &[IMMH, RN, RT],
        &[],
        &[FPjt2, FPjn2, ShlShift],
    ),
    t(
        0b111111111100000011010100 << 8,
        0b011111111000000011010000 << 8,
        NAMES_SQRDMLAH,
        &[f(F::Sel, 13, 1), LANE_HL2, RM, RN, RT],
        &[(F::Sz, 2)],
        &[FP4t, FP3n, VmTs],
    ),
    t(
        0b110111110011111110011100 << 8,
        0b010011100010000100001000 << 8,
        NAMES_NARROW2,
        &[f2(F::Sel, (27, 4), (13, 3)), SZ22, RN, RT],
        &[(F::Q, 1)],
        &[VtT, VnT3],
    ),
    t(
        0b110111110010000011011100 << 8,
        0b010011100010000000010000 << 8,
        &["saddw2", "ssubw2", "uaddw2", "usubw2"],
        &[f2(F::Sel, (28, 2), (13, 1)), SZ22, RM, RN, RT],
        &[(F::Q, 1)],
        &[VtT3, VnT3, VmT],
    ),
    t(
        0b110111110010000011011100 << 8,
        0b010011100010000001000000 << 8,
        &["addhn2", "subhn2", "raddhn2", "rsubhn2"],
        &[f2(F::Sel, (28, 2), (13, 1)), SZ22, RM, RN, RT],
        &[(F::Q, 1)],
        &[VtT, VnT3, VmT3],
    ),
    t(
        0b110111110010000011111100 << 8,
        0b010011100010000011100000 << 8,
        &["pmull2", "umull2"],
        &[f(F::Sel, 29, 1), SZ22, RM, RN, RT],
        &[(F::Q, 1)],
        &[VtT4, VnT, VmT],
    ),
    t(
        0b110111110010000000001100 << 8,
        0b010011100010000000000000 << 8,
        NAMES_LONG3_2,
        &[f2(F::Sel, (25, 0x10), (12, 0xf)), SZ22, RM, RN, RT],
        &[(F::Q, 1)],
        &[VtT3, VnT, VmT],
    ),
    t(
        0b110111111100000000100100 << 8,
        0b010011110100000000100000 << 8,
        NAMES_LONG_ELEM2,
        &[f3(F::Sel, (26, 8), (13, 6), (12, 1)), LANE_HL, RM4, RN, RT],
        &[(F::Sz, 1), (F::Q, 1)],
        &[Vtz, VnT, VmTs],
    ),
    t(
        0b110111111000000011100100 << 8,
        0b010011110000000010000100 << 8,
        NAMES_SHRN2,
        &[f2(F::Sel, (27, 4), (11, 3)), IMMH, RN, RT],
        &[(F::Q, 1)],
        &[Vtj2, VnTa, ShrShift],
    ),
    t(
        0b110111111000000011111100 << 8,
        0b010011110000000010100100 << 8,
        &["sshll2", "ushll2"],
        &[f(F::Sel, 29, 1), IMMH, RN, RT],
        &[(F::Q, 1)],
        &[Vtj2, VnTa, ShlShift],
    ),
    t(
        0b110111111100000000100100 << 8,
        0b010011111000000000100000 << 8,
        NAMES_LONG_ELEM2,
        &[f3(F::Sel, (26, 8), (13, 6), (12, 1)), LANE_HL2, RM, RN, RT],
        &[(F::Sz, 2), (F::Q, 1)],
        &[Vtz, VnT, VmTs],
    ),
    // scalar compares against zero
    t(
        0b110111111111111111001100 << 8,
        0b010111101111100011001000 << 8,
        NAMES_FCMP0,
        &[f2(F::Sel, (27, 4), (12, 3)), RN, RT],
        &[],
        &[Ht, Hn, FpZero],
    ),
    t(
        0b110111111011111111001100 << 8,
        0b010111101010000011001000 << 8,
        NAMES_FCMP0,
        &[f2(F::Sel, (27, 4), (12, 3)), SZ22_1, RN, RT],
        &[],
        &[FPt, FPn, FpZero],
    ),
    t(
        0b110111110111111110001100 << 8,
        0b010111100111100110001000 << 8,
        NAMES_FCVT_MISC,
        &[f3(F::Sel, (25, 0x10), (20, 8), (12, 7)), RN, RT],
        &[],
        &[Ht, Hn],
    ),
    t(
        0b110111110011111111001100 << 8,
        0b010111100010000010001000 << 8,
        NAMES_CMP0,
        &[f2(F::Sel, (27, 4), (12, 3)), SZ22, RN, RT],
        &[],
        &[FP3t, FP3n, Zero],
    ),
    t(
        0b110111110011111100111100 << 8,
        0b010111100010000000111000 << 8,
        &["suqadd", "sqabs", "abs", "?", "usqadd", "sqneg", "neg"],
        &[f2(F::Sel, (27, 4), (14, 3)), SZ22, RN, RT],
        &[],
        &[FP3t, FP3n],
    ),
    t(
        0b110111110011111110011100 << 8,
        0b010111100010000100001000 << 8,
        &["?", "?", "sqxtn", "?", "?", "sqxtun", "uqxtn", "fcvtxn"],
        &[f2(F::Sel, (27, 4), (13, 3)), SZ22, RN, RT],
        &[],
        &[FP3t, FP4n],
    ),
    t(
        0b110111110011111110001100 << 8,
        0b010111100010000110001000 << 8,
        NAMES_FCVT_MISC,
        &[f3(F::Sel, (25, 0x10), (20, 8), (12, 7)), SZ22_1, RN, RT],
        &[],
        &[FPt, FPn],
    ),
    t(
        0b110111110010000000000100 << 8,
        0b010111100010000000000100 << 8,
        NAMES_INT3SAME_S,
        &[f2(F::Sel, (24, 0x20), (11, 0x1f)), SZ22, RM, RN, RT],
        &[],
        &[FP3t, FP3n, FP3m],
    ),
    t(
        0b110111111100000000110100 << 8,
        0b010111110000000000010000 << 8,
        NAMES_FMLA_ELEM,
        &[f2(F::Sel, (27, 4), (14, 3)), LANE_HL, RM4, RN, RT],
        &[],
        &[Ht, Hn, VmHs],
    ),
    t(
        0b110111111000000010001100 << 8,
        0b010111110000000000000100 << 8,
        NAMES_SHIFT_SCALAR,
        &[f2(F::Sel, (26, 8), (12, 7)), IMMH, RN, RT],
        &[],
        &[Dt, Dn, ShrShift],
    ),
    t(
        0b110111111000000011100100 << 8,
        0b010111110000000010000100 << 8,
        &["?", "?", "sqshrn", "sqrshrn", "sqshrun", "sqrshrun", "uqshrn", "uqrshrn"],
        &[f2(F::Sel, (27, 4), (11, 3)), IMMH, RN, RT],
        &[],
        &[FPjt, FPnj, ShrShift],
    ),
    t(
        0b110111111000000011111100 << 8,
        0b010111110000000011100100 << 8,
        &["scvtf", "ucvtf"],
        &[f(F::Sel, 29, 1), IMMH, RN, RT],
        &[],
        &[FPjt2, FPjn2, ShrShift],
    ),
    t(
        0b110111111000000011111100 << 8,
        0b010111110000000011111100 << 8,
        &["fcvtzs", "fcvtzu"],
        &[f(F::Sel, 29, 1), IMMH, RN, RT],
        &[],
        &[FPjt, FPjn2, ShrShift],
    ),
    t(
        0b110111111100000000110100 << 8,
        0b010111111000000000010000 << 8,
        NAMES_FMLA_ELEM_Q,
        &[f2(F::Sel, (27, 4), (14, 3)), LANE_HL2, RM, RN, RT],
        &[],
        &[FPt, FPn, VmTs2],
    ),
    t(
        0b110111111110000000110100 << 8,
        0b010111111100000000010000 << 8,
        NAMES_FMLA_ELEM,
        &[f2(F::Sel, (27, 4), (14, 3)), f(F::Aux, 11, 1), RM, RN, RT],
        &[(F::Sz, 1)],
        &[FPt, FPn, VmTs2],
    ),
    // compare-and-swap pair
    t(
        0b101111111010000001111100 << 8,
        0b000010000010000001111100 << 8,
        &["casp", "caspl", "caspa", "caspal"],
        &[f2(F::Sel, (21, 2), (15, 1)), SF30, RA16, RN, RT],
        &[],
        &[Rd, RdNext, Rt, RtNext, MemOpen, XnSp, MemClose],
    ),
    t(
        0b101111110011111101111100 << 8,
        0b000010000001111101111100 << 8,
        &["?", "?", "ldxrb", "ldaxrb", "stllrb", "stlrb", "ldlarb", "ldarb", "?", "?", "ldxrh", "ldaxrh", "stllrh", "stlrh", "ldlarh", "ldarh"],
        &[f3(F::Sel, (27, 8), (21, 6), (15, 1)), RN, RT],
        &[],
        &[Wt, MemOpen, XnSp, MemClose],
    ),
    // SIMD multi-structure loads and stores
    t(
        0b101111111011111111010000 << 8,
        0b000011000000000000000000 << 8,
        ST4_1,
        &[f2(F::Sel, (21, 2), (13, 1)), Q30, SZ10, RN, RT],
        &[],
        &[VtT, Vt2T, Vt3T, Vt4T, MemOpen, XnSp, MemClose],
    ),
    t(
        0b101111111011111111110000 << 8,
        0b000011000000000001110000 << 8,
        ST1,
        &[f(F::Sel, 22, 1), Q30, SZ10, RN, RT],
        &[],
        &[VtT, MemOpen, XnSp, MemClose],
    ),
    t(
        0b101111111011111111010000 << 8,
        0b000011000000000001000000 << 8,
        ST3_1,
        &[f2(F::Sel, (21, 2), (13, 1)), Q30, SZ10, RN, RT],
        &[],
        &[VtT, Vt2T, Vt3T, MemOpen, XnSp, MemClose],
    ),
    t(
        0b101111111011111111010000 << 8,
        0b000011000000000010000000 << 8,
        ST2_1,
        &[f2(F::Sel, (21, 2), (13, 1)), Q30, SZ10, RN, RT],
        &[],
        &[VtT, Vt2T, MemOpen, XnSp, MemClose],
    ),
    t(
        0b101111111011111111010000 << 8,
        0b000011001001111100000000 << 8,
        ST4_1,
        &[f2(F::Sel, (21, 2), (13, 1)), Q30, SZ10, RN, RT],
        &[],
        &[VtT, Vt2T, Vt3T, Vt4T, MemOpen, XnSp, MemClose, PostQ4],
    ),
    t(
        0b101111111011111111110000 << 8,
        0b000011001001111101110000 << 8,
        ST1,
        &[f(F::Sel, 22, 1), Q30, SZ10, RN, RT],
        &[],
        &[VtT, MemOpen, XnSp, MemClose, PostQ1],
    ),
    t(
        0b101111111011111111010000 << 8,
        0b000011001001111101000000 << 8,
        ST3_1,
        &[f2(F::Sel, (21, 2), (13, 1)), Q30, SZ10, RN, RT],
        &[],
        &[VtT, Vt2T, Vt3T, MemOpen, XnSp, MemClose, PostQ3],
    ),
    t(
        0b101111111011111111010000 << 8,
        0b000011001001111110000000 << 8,
        ST2_1,
        &[f2(F::Sel, (21, 2), (13, 1)), Q30, SZ10, RN, RT],
        &[],
        &[VtT, Vt2T, MemOpen, XnSp, MemClose, PostQ2],
    ),
    t(
        0b101111111010000011010000 << 8,
        0b000011001000000000000000 << 8,
        ST4_1,
        &[f2(F::Sel, (21, 2), (13, 1)), Q30, RM, SZ10, RN, RT],
        &[],
        &[VtT, Vt2T, Vt3T, Vt4T, MemOpen, XnSp, MemClose, Xm],
    ),
    t(
        0b101111111010000011110000 << 8,
        0b000011001000000001110000 << 8,
        ST1,
        &[f(F::Sel, 22, 1), Q30, RM, SZ10, RN, RT],
        &[],
        &[VtT, MemOpen, XnSp, MemClose, Xm],
    ),
    t(
        0b101111111010000011010000 << 8,
        0b000011001000000001000000 << 8,
        ST3_1,
        &[f2(F::Sel, (21, 2), (13, 1)), Q30, RM, SZ10, RN, RT],
        &[],
        &[VtT, Vt2T, Vt3T, MemOpen, XnSp, MemClose, Xm],
    ),
    t(
        0b101111111010000011010000 << 8,
        0b000011001000000010000000 << 8,
        ST2_1,
        &[f2(F::Sel, (21, 2), (13, 1)), Q30, RM, SZ10, RN, RT],
        &[],
        &[VtT, Vt2T, MemOpen, XnSp, MemClose, Xm],
    ),
    // replicating single-structure loads
    t(
        0b101111111111111111110000 << 8,
        0b000011010100000011000000 << 8,
        &["ld1r"],
        &[Q30, SZ10, RN, RT],
        &[],
        &[VtT, MemOpen, XnSp, MemClose],
    ),
    t(
        0b101111111111111111110000 << 8,
        0b000011010100000011100000 << 8,
        &["ld3r"],
        &[Q30, SZ10, RN, RT],
        &[],
        &[VtT, Vt2T, Vt3T, MemOpen, XnSp, MemClose],
    ),
    t(
        0b101111111111111111110000 << 8,
        0b000011010110000011000000 << 8,
        &["ld2r"],
        &[Q30, SZ10, RN, RT],
        &[],
        &[VtT, Vt2T, MemOpen, XnSp, MemClose],
    ),
    t(
        0b101111111111111111110000 << 8,
        0b000011010110000011100000 << 8,
        &["ld4r"],
        &[Q30, SZ10, RN, RT],
        &[],
        &[VtT, Vt2T, Vt3T, Vt4T, MemOpen, XnSp, MemClose],
    ),
    // single-structure lane loads and stores
    t(
        0b101111111011111111100000 << 8,
        0b000011010000000000000000 << 8,
        ST1,
        &[f(F::Sel, 22, 1), Q30, S12, SZ10, RN, RT],
        &[],
        &[VtLaneB, MemOpen, XnSp, MemClose],
    ),
    t(
        0b101111111011111111100000 << 8,
        0b000011010000000000100000 << 8,
        ST3,
        &[f(F::Sel, 22, 1), Q30, S12, SZ10, RN, RT],
        &[],
        &[Vt3LaneB, MemOpen, XnSp, MemClose],
    ),
    t(
        0b101111111011111111100000 << 8,
        0b000011010000000001000000 << 8,
        ST1,
        &[f(F::Sel, 22, 1), Q30, S12, SZ10, RN, RT],
        &[],
        &[VtLaneH, MemOpen, XnSp, MemClose],
    ),
    t(
        0b101111111011111111100000 << 8,
        0b000011010000000001100000 << 8,
        ST3,
        &[f(F::Sel, 22, 1), Q30, S12, SZ10, RN, RT],
        &[],
        &[Vt3LaneH, MemOpen, XnSp, MemClose],
    ),
    t(
        0b101111111011111111111100 << 8,
        0b000011010000000010000100 << 8,
        ST1,
        &[f(F::Sel, 22, 1), Q30, RN, RT],
        &[],
        &[VtLaneD, MemOpen, XnSp, MemClose],
    ),
    t(
        0b101111111011111111101100 << 8,
        0b000011010000000010000000 << 8,
        ST1,
        &[f(F::Sel, 22, 1), Q30, S12, RN, RT],
        &[],
        &[VtLaneS, MemOpen, XnSp, MemClose],
    ),
    t(
        0b101111111011111111111100 << 8,
        0b000011010000000010100100 << 8,
        ST3,
        &[f(F::Sel, 22, 1), Q30, RN, RT],
        &[],
        &[Vt3LaneD, MemOpen, XnSp, MemClose],
    ),
    t(
        0b101111111011111111101100 << 8,
        0b000011010000000010100000 << 8,
        ST3,
        &[f(F::Sel, 22, 1), Q30, S12, RN, RT],
        &[],
        &[Vt3LaneS, MemOpen, XnSp, MemClose],
    ),
    t(
        0b101111111011111111100000 << 8,
        0b000011010010000000000000 << 8,
        ST2,
        &[f(F::Sel, 22, 1), Q30, S12, SZ10, RN, RT],
        &[],
        &[Vt2LaneB, MemOpen, XnSp, MemClose],
    ),
    t(
        0b101111111011111111100000 << 8,
        0b000011010010000000100000 << 8,
        ST4,
        &[f(F::Sel, 22, 1), Q30, S12, SZ10, RN, RT],
        &[],
        &[Vt4LaneB, MemOpen, XnSp, MemClose],
    ),
    t(
        0b101111111011111111100000 << 8,
        0b000011010010000001000000 << 8,
        ST2,
        &[f(F::Sel, 22, 1), Q30, S12, SZ10, RN, RT],
        &[],
        &[Vt2LaneH, MemOpen, XnSp, MemClose],
    ),
    t(
        0b101111111011111111100000 << 8,
        0b000011010010000001100000 << 8,
        ST4,
        &[f(F::Sel, 22, 1), Q30, S12, SZ10, RN, RT],
        &[],
        &[Vt4LaneH, MemOpen, XnSp, MemClose],
    ),
    t(
        0b101111111011111111111100 << 8,
        0b000011010010000010000100 << 8,
        ST2,
        &[f(F::Sel, 22, 1), Q30, RN, RT],
        &[],
        &[Vt2LaneD, MemOpen, XnSp, MemClose],
    ),
    t(
        0b101111111011111111101100 << 8,
        0b000011010010000010000000 << 8,
        ST2,
        &[f(F::Sel, 22, 1), Q30, S12, RN, RT],
        &[],
        &[Vt2LaneS, MemOpen, XnSp, MemClose],
    ),
    t(
        0b101111111011111111111100 << 8,
        0b000011010010000010100100 << 8,
        ST4,
        &[f(F::Sel, 22, 1), Q30, RN, RT],
        &[],
        &[Vt4LaneD, MemOpen, XnSp, MemClose],
    ),
    t(
        0b101111111011111111101100 << 8,
        0b000011010010000010100000 << 8,
        ST4,
        &[f(F::Sel, 22, 1), Q30, S12, RN, RT],
        &[],
        &[Vt4LaneS, MemOpen, XnSp, MemClose],
    ),
    // replicating loads, post-indexed
    t(
        0b101111111111111111110000 << 8,
        0b000011011101111111000000 << 8,
        &["ld1r"],
        &[Q30, SZ10, RN, RT],
        &[],
        &[VtT, MemOpen, XnSp, MemClose, SizeImm1],
    ),
    t(
        0b101111111111111111110000 << 8,
        0b000011011101111111100000 << 8,
        &["ld3r"],
        &[Q30, SZ10, RN, RT],
        &[],
        &[VtT, Vt2T, Vt3T, MemOpen, XnSp, MemClose, SizeImm3],
    ),
    t(
        0b101111111110000011110000 << 8,
        0b000011011100000011000000 << 8,
        &["ld1r"],
        &[Q30, RM, SZ10, RN, RT],
        &[],
        &[VtT, MemOpen, XnSp, MemClose, Xm],
    ),
    t(
        0b101111111110000011110000 << 8,
        0b000011011100000011100000 << 8,
        &["ld3r"],
        &[Q30, RM, SZ10, RN, RT],
        &[],
        &[VtT, Vt2T, Vt3T, MemOpen, XnSp, MemClose, Xm],
    ),
    t(
        0b101111111111111111110000 << 8,
        0b000011011111111111000000 << 8,
        &["ld2r"],
        &[Q30, SZ10, RN, RT],
        &[],
        &[VtT, Vt2T, MemOpen, XnSp, MemClose, SizeImm2],
    ),
    t(
        0b101111111111111111110000 << 8,
        0b000011011111111111100000 << 8,
        &["ld4r"],
        &[Q30, SZ10, RN, RT],
        &[],
        &[VtT, Vt2T, Vt3T, Vt4T, MemOpen, XnSp, MemClose, SizeImm4],
    ),
    t(
        0b101111111110000011110000 << 8,
        0b000011011110000011000000 << 8,
        &["ld2r"],
        &[Q30, RM, SZ10, RN, RT],
        &[],
        &[VtT, Vt2T, MemOpen, XnSp, MemClose, Xm],
    ),
    t(
        0b101111111110000011110000 << 8,
        0b000011011110000011100000 << 8,
        &["ld4r"],
        &[Q30, RM, SZ10, RN, RT],
        &[],
        &[VtT, Vt2T, Vt3T, Vt4T, MemOpen, XnSp, MemClose, Xm],
    ),
    // lane loads/stores, post-indexed by immediate
    t(
        0b101111111011111111100000 << 8,
        0b000011011001111100000000 << 8,
        ST1,
        &[f(F::Sel, 22, 1), Q30, S12, SZ10, RN, RT],
        &[],
        &[VtLaneB, MemOpen, XnSp, MemClose, Post1],
    ),
    t(
        0b101111111011111111100000 << 8,
        0b000011011001111100100000 << 8,
        ST3,
        &[f(F::Sel, 22, 1), Q30, S12, SZ10, RN, RT],
        &[],
        &[Vt3LaneB, MemOpen, XnSp, MemClose, Post3],
    ),
    t(
        0b101111111011111111100000 << 8,
        0b000011011001111101000000 << 8,
        ST1,
        &[f(F::Sel, 22, 1), Q30, S12, SZ10, RN, RT],
        &[],
        &[VtLaneH, MemOpen, XnSp, MemClose, Post2],
    ),
    t(
        0b101111111011111111100000 << 8,
        0b000011011001111101100000 << 8,
        ST3,
        &[f(F::Sel, 22, 1), Q30, S12, SZ10, RN, RT],
        &[],
        &[Vt3LaneH, MemOpen, XnSp, MemClose, Post6],
    ),
    t(
        0b101111111011111111111100 << 8,
        0b000011011001111110000100 << 8,
        ST1,
        &[f(F::Sel, 22, 1), Q30, RN, RT],
        &[],
        &[VtLaneD, MemOpen, XnSp, MemClose, Post8],
    ),
    t(
        0b101111111011111111101100 << 8,
        0b000011011001111110000000 << 8,
        ST1,
        &[f(F::Sel, 22, 1), Q30, S12, RN, RT],
        &[],
        &[VtLaneS, MemOpen, XnSp, MemClose, Post4],
    ),
    t(
        0b101111111011111111111100 << 8,
        0b000011011001111110100100 << 8,
        ST3,
        &[f(F::Sel, 22, 1), Q30, RN, RT],
        &[],
        &[Vt3LaneD, MemOpen, XnSp, MemClose, Post24],
    ),
    t(
        0b101111111011111111101100 << 8,
        0b000011011001111110100000 << 8,
        ST3,
        &[f(F::Sel, 22, 1), Q30, S12, RN, RT],
        &[],
        &[Vt3LaneS, MemOpen, XnSp, MemClose, Post12],
    ),
    // lane loads/stores, post-indexed by register
    t(
        0b101111111010000011100000 << 8,
        0b000011011000000000000000 << 8,
        ST1,
        &[f(F::Sel, 22, 1), Q30, RM, S12, SZ10, RN, RT],
        &[],
        &[VtLaneB, MemOpen, XnSp, MemClose, Xm],
    ),
    t(
        0b101111111010000011100000 << 8,
        0b000011011000000000100000 << 8,
        ST3,
        &[f(F::Sel, 22, 1), Q30, RM, S12, SZ10, RN, RT],
        &[],
        &[Vt3LaneB, MemOpen, XnSp, MemClose, Xm],
    ),
    t(
        0b101111111010000011100000 << 8,
        0b000011011000000001000000 << 8,
        ST1,
        &[f(F::Sel, 22, 1), Q30, RM, S12, SZ10, RN, RT],
        &[],
        &[VtLaneH, MemOpen, XnSp, MemClose, Xm],
    ),
    t(
        0b101111111010000011100000 << 8,
        0b000011011000000001100000 << 8,
        ST3,
        &[f(F::Sel, 22, 1), Q30, RM, S12, SZ10, RN, RT],
        &[],
        &[Vt3LaneH, MemOpen, XnSp, MemClose, Xm],
    ),
    t(
        0b101111111010000011111100 << 8,
        0b000011011000000010000100 << 8,
        ST1,
        &[f(F::Sel, 22, 1), Q30, RM, RN, RT],
        &[],
        &[VtLaneD, MemOpen, XnSp, MemClose, Xm],
    ),
    t(
        0b101111111010000011101100 << 8,
        0b000011011000000010000000 << 8,
        ST1,
        &[f(F::Sel, 22, 1), Q30, RM, S12, RN, RT],
        &[],
        &[VtLaneS, MemOpen, XnSp, MemClose, Xm],
    ),
    t(
        0b101111111010000011111100 << 8,
        0b000011011000000010100100 << 8,
        ST3,
        &[f(F::Sel, 22, 1), Q30, RM, RN, RT],
        &[],
        &[Vt3LaneD, MemOpen, XnSp, MemClose, Xm],
    ),
    t(
        0b101111111010000011101100 << 8,
        0b000011011000000010100000 << 8,
        ST3,
        &[f(F::Sel, 22, 1), Q30, RM, S12, RN, RT],
        &[],
        &[Vt3LaneS, MemOpen, XnSp, MemClose, Xm],
    ),
    t(
        0b101111111011111111100000 << 8,
        0b000011011011111100000000 << 8,
        ST2,
        &[f(F::Sel, 22, 1), Q30, S12, SZ10, RN, RT],
        &[],
        &[Vt2LaneB, MemOpen, XnSp, MemClose, Post2],
    ),
    t(
        0b101111111011111111100000 << 8,
        0b000011011011111100100000 << 8,
        ST4,
        &[f(F::Sel, 22, 1), Q30, S12, SZ10, RN, RT],
        &[],
        &[Vt4LaneB, MemOpen, XnSp, MemClose, Post4],
    ),
    t(
        0b101111111011111111100000 << 8,
        0b000011011011111101000000 << 8,
        ST2,
        &[f(F::Sel, 22, 1), Q30, S12, SZ10, RN, RT],
        &[],
        &[Vt2LaneH, MemOpen, XnSp, MemClose, Post4],
    ),
    t(
        0b101111111011111111100000 << 8,
        0b000011011011111101100000 << 8,
        ST4,
        &[f(F::Sel, 22, 1), Q30, S12, SZ10, RN, RT],
        &[],
        &[Vt4LaneH, MemOpen, XnSp, MemClose, Post8],
    ),
    t(
        0b101111111011111111111100 << 8,
        0b000011011011111110000100 << 8,
        ST2,
        &[f(F::Sel, 22, 1), Q30, RN, RT],
        &[],
        &[Vt2LaneD, MemOpen, XnSp, MemClose, Post16],
    ),
    t(
        0b101111111011111111101100 << 8,
        0b000011011011111110000000 << 8,
        ST2,
        &[f(F::Sel, 22, 1), Q30, S12, RN, RT],
        &[],
        &[Vt2LaneS, MemOpen, XnSp, MemClose, Post8],
    ),
    t(
        0b101111111011111111111100 << 8,
        0b000011011011111110100100 << 8,
        ST4,
        &[f(F::Sel, 22, 1), Q30, RN, RT],
        &[],
        &[Vt4LaneD, MemOpen, XnSp, MemClose, Post32],
    ),
    t(
        0b101111111011111111101100 << 8,
        0b000011011011111110100000 << 8,
        ST4,
        &[f(F::Sel, 22, 1), Q30, S12, RN, RT],
        &[],
        &[Vt4LaneS, MemOpen, XnSp, MemClose, Post16],
    ),
    t(
        0b101111111010000011100000 << 8,
        0b000011011010000000000000 << 8,
        ST2,
        &[f(F::Sel, 22, 1), Q30, RM, S12, SZ10, RN, RT],
        &[],
        &[Vt2LaneB, MemOpen, XnSp, MemClose, Xm],
    ),
    t(
        0b101111111010000011100000 << 8,
        0b000011011010000000100000 << 8,
        ST4,
        &[f(F::Sel, 22, 1), Q30, RM, S12, SZ10, RN, RT],
        &[],
        &[Vt4LaneB, MemOpen, XnSp, MemClose, Xm],
    ),
    t(
        0b101111111010000011100000 << 8,
        0b000011011010000001000000 << 8,
        ST2,
        &[f(F::Sel, 22, 1), Q30, RM, S12, SZ10, RN, RT],
        &[],
        &[Vt2LaneH, MemOpen, XnSp, MemClose, Xm],
    ),
    t(
        0b101111111010000011100000 << 8,
        0b000011011010000001100000 << 8,
        ST4,
        &[f(F::Sel, 22, 1), Q30, RM, S12, SZ10, RN, RT],
        &[],
        &[Vt4LaneH, MemOpen, XnSp, MemClose, Xm],
    ),
    t(
        0b101111111010000011111100 << 8,
        0b000011011010000010000100 << 8,
        ST2,
        &[f(F::Sel, 22, 1), Q30, RM, RN, RT],
        &[],
        &[Vt2LaneD, MemOpen, XnSp, MemClose, Xm],
    ),
    t(
        0b101111111010000011101100 << 8,
        0b000011011010000010000000 << 8,
        ST2,
        &[f(F::Sel, 22, 1), Q30, RM, S12, RN, RT],
        &[],
        &[Vt2LaneS, MemOpen, XnSp, MemClose, Xm],
    ),
    t(
        0b101111111010000011111100 << 8,
        0b000011011010000010100100 << 8,
        ST4,
        &[f(F::Sel, 22, 1), Q30, RM, RN, RT],
        &[],
        &[Vt4LaneD, MemOpen, XnSp, MemClose, Xm],
    ),
    t(
        0b101111111010000011101100 << 8,
        0b000011011010000010100000 << 8,
        ST4,
        &[f(F::Sel, 22, 1), Q30, RM, S12, RN, RT],
        &[],
        &[Vt4LaneS, MemOpen, XnSp, MemClose, Xm],
    ),
    // element manipulation and table lookup
    t(
        0b101111111110000011111100 << 8,
        0b000011100000000000000100 << 8,
        &["dup"],
        &[Q30, ELEM, RN, RT],
        &[],
        &[Vtjq, Vnj, MemOpen, LaneIdx, MemClose],
    ),
    t(
        0b101111111110000011101100 << 8,
        0b000011100000000000000000 << 8,
        &["tbl", "tbx"],
        &[f(F::Sel, 12, 1), Q30, RM, RN, RT],
        &[],
        &[VtT, VListN1, VmT],
    ),
    t(
        0b101111111110000011101100 << 8,
        0b000011100000000000100000 << 8,
        &["tbl", "tbx"],
        &[f(F::Sel, 12, 1), Q30, RM, RN, RT],
        &[],
        &[VtT, VListN2, VmT],
    ),
    t(
        0b101111111110000011101100 << 8,
        0b000011100000000000101100 << 8,
        &["smov", "umov"],
        &[f(F::Sel, 12, 1), SF30, ELEM, RN, RT],
        &[],
        &[Rt, Vnj, MemOpen, LaneIdx, MemClose],
    ),
    t(
        0b101111111110000011101100 << 8,
        0b000011100000000001000000 << 8,
        &["tbl", "tbx"],
        &[f(F::Sel, 12, 1), Q30, RM, RN, RT],
        &[],
        &[VtT, VListN3, VmT],
    ),
    t(
        0b101111111110000011101100 << 8,
        0b000011100000000001100000 << 8,
        &["tbl", "tbx"],
        &[f(F::Sel, 12, 1), Q30, RM, RN, RT],
        &[],
        &[VtT, VListN4, VmT],
    ),
    // half-precision vector ops
    t(
        0b101111111110000011111100 << 8,
        0b000011100100000000011100 << 8,
        &["fmulx"],
        &[Q30, RM, RN, RT],
        &[],
        &[VtH1, VnH1, VmH1],
    ),
    t(
        0b101111111110000011111100 << 8,
        0b000011100100000000100100 << 8,
        &["fcmeq"],
        &[Q30, RM, RN, RT],
        &[],
        &[VtH1, VnH1, VmH1],
    ),
    t(
        0b101111111111111111101100 << 8,
        0b000011100111100110001000 << 8,
        &["frintn", "frintm"],
        &[f(F::Sel, 12, 1), Q30, RN, RT],
        &[(F::Sz, 1)],
        &[VtT, VnT],
    ),
    t(
        0b101111111111111111111100 << 8,
        0b000011100111100111111000 << 8,
        &["fabs"],
        &[Q30, RN, RT],
        &[(F::Sz, 1)],
        &[VtT, VnT],
    ),
    t(
        0b101111111010000011111100 << 8,
        0b000011100010000000011100 << 8,
        &["fmulx"],
        &[Q30, SZ22_1, RM, RN, RT],
        &[],
        &[Vtzq, Vnzq, Vmzq],
    ),
    t(
        0b101111111111111111101100 << 8,
        0b000011101111100110001000 << 8,
        &["frintp", "frintz"],
        &[f(F::Sel, 12, 1), Q30, RN, RT],
        &[(F::Sz, 1)],
        &[VtT, VnT],
    ),
    t(
        0b101111110111111111001100 << 8,
        0b000011100011000011001000 << 8,
        NAMES_FMINMAXV,
        &[f2(F::Sel, (21, 4), (12, 3)), Q30, RN, RT],
        &[],
        &[Ht, Vnzq2],
    ),
    t(
        0b101111110110000011111100 << 8,
        0b000011100100000000111100 << 8,
        &["frecps", "frsqrts"],
        &[f(F::Sel, 23, 1), Q30, RM, RN, RT],
        &[],
        &[VtH1, VnH1, VmH1],
    ),
    t(
        0b101111110000000010000000 << 8,
        0b000011100000000000000000 << 8,
        NAMES_PERM,
        &[f2(F::Sel, (16, 0x20), (10, 0x1f)), Q30, SZ22, RM, RN, RT],
        &[],
        &[VtT, VnT, VmT],
    ),
    // vector immediates
    t(
        0b101111111111100011111100 << 8,
        0b000011110000000011100100 << 8,
        &["movi"],
        &[Q30, IMM8V, RT],
        &[],
        &[VtT, Aux8],
    ),
    t(
        0b101111111111100011111100 << 8,
        0b000011110000000011110100 << 8,
        &["fmov"],
        &[Q30, IMM8V, RT],
        &[(F::Sz, 2)],
        &[VtT, FImm32],
    ),
    t(
        0b101111111111100011111100 << 8,
        0b000011110000000011111100 << 8,
        &["fmov"],
        &[Q30, IMM8V, RT],
        &[(F::Sz, 1)],
        &[VtT, FImm16],
    ),
    t(
        0b101111111100000010100100 << 8,
        0b000011110100000010000000 << 8,
        &["mul", "?", "sqdmulh", "sqrdmulh"],
        &[f2(F::Sel, (13, 2), (12, 1)), LANE_HL, Q30, RM4, RN, RT],
        &[(F::Sz, 1)],
        &[VtT, VnT, VmTs],
    ),
    t(
        0b101111111000000011001100 << 8,
        0b000011110000000000000100 << 8,
        &["sshr", "ssra", "srshr", "srsra"],
        &[f(F::Sel, 12, 3), Q30, IMMH, RN, RT],
        &[],
        &[Vtj2, Vnj2, ShrShift],
    ),
    t(
        0b101111111000000011111100 << 8,
        0b000011110000000011100100 << 8,
        &["scvtf"],
        &[Q30, IMMH, RN, RT],
        &[],
        &[Vtj2, Vnj2, ShrShift],
    ),
    t(
        0b101111111000000011111100 << 8,
        0b000011110000000011111100 << 8,
        &["fcvtzs"],
        &[Q30, IMMH, RN, RT],
        &[],
        &[Vtj2, Vnj2, ShrShift],
    ),
    t(
        0b101111111100000010100100 << 8,
        0b000011111000000010000000 << 8,
        &["mul", "fmul", "sqdmulh", "sqrdmulh"],
        &[f2(F::Sel, (13, 2), (12, 1)), LANE_HL2, Q30, RM, RN, RT],
        &[(F::Sz, 2)],
        &[VtT, VnT, VmTs],
    ),
    // load literal
    t(
        0b10111111 << 24,
        0b00011000 << 24,
        &["ldr"],
        &[SF30, IMM19, RT],
        &[],
        &[Rt, PcRelWord],
    ),
    t(
        0b101111111110000011111100 << 8,
        0b000111100000000000001100 << 8,
        &["dup"],
        &[Q30, SF30, ELEM, RN, RT],
        &[],
        &[Vtjq, Rn],
    ),
    t(
        0b101111111110000010000100 << 8,
        0b001011100000000000000000 << 8,
        &["ext"],
        &[Q30, RM, fs(F::Imm, 11, 0xf, 4), RN, RT],
        &[],
        &[VtT, VnT, VmT, Imm],
    ),
    t(
        0b101111111110000011110100 << 8,
        0b001011100100000000100100 << 8,
        &["fcmge", "facge"],
        &[f(F::Sel, 11, 1), Q30, RM, RN, RT],
        &[],
        &[VtH1, VnH1, VmH1],
    ),
    t(
        0b101111111111111111111100 << 8,
        0b001011100111100110011000 << 8,
        &["frintx"],
        &[Q30, RN, RT],
        &[(F::Sz, 1)],
        &[VtT, VnT],
    ),
    t(
        0b101111111011111111111100 << 8,
        0b001011100010000001011000 << 8,
        &["not", "rbit"],
        &[f(F::Sel, 22, 1), Q30, RN, RT],
        &[],
        &[VtT, VnT],
    ),
    t(
        0b101111111110000011111100 << 8,
        0b001011101100000000010100 << 8,
        &["fabd"],
        &[Q30, RM, RN, RT],
        &[],
        &[VtH1, VnH1, VmH1],
    ),
    t(
        0b101111111110000011110100 << 8,
        0b001011101100000000100100 << 8,
        &["fcmgt", "facgt"],
        &[f(F::Sel, 11, 1), Q30, RM, RN, RT],
        &[],
        &[VtH1, VnH1, VmH1],
    ),
    t(
        0b101111111111111111111100 << 8,
        0b001011101111100011111000 << 8,
        &["fneg"],
        &[Q30, RN, RT],
        &[(F::Sz, 1)],
        &[VtT, VnT],
    ),
    t(
        0b101111111111111111101100 << 8,
        0b001011101111100110001000 << 8,
        &["frinta", "frinti"],
        &[f(F::Sel, 12, 1), Q30, RN, RT],
        &[(F::Sz, 1)],
        &[VtT, VnT],
    ),
    t(
        0b101111111111111111111100 << 8,
        0b001011101111100111111000 << 8,
        &["fsqrt"],
        &[Q30, RN, RT],
        &[(F::Sz, 1)],
        &[VtT, VnT],
    ),
    t(
        0b101111110010000000000100 << 8,
        0b001011100010000000000100 << 8,
        NAMES_INT3SAME_U,
        &[f(F::Sel, 11, 0x1f), Q30, SZ22, RM, RN, RT],
        &[],
        &[VtT, VnT, VmT],
    ),
    t(
        0b101111111100000011010100 << 8,
        0b001011110100000011010000 << 8,
        NAMES_SQRDMLAH,
        &[f(F::Sel, 13, 1), LANE_HL, Q30, RM4, RN, RT],
        &[(F::Sz, 1)],
        &[Vtz, VnT, VmTs],
    ),
    t(
        0b101111111000000011111100 << 8,
        0b001011110000000011111100 << 8,
        &["fcvtzu"],
        &[Q30, IMMH, RN, RT],
        &[],
        &[Vtj2, Vnj2, ShrShift],
    ),
    t(
        0b101111111000000000001100 << 8,
        0b001011110000000000000100 << 8,
        NAMES_USHIFT,
        &[f(F::Sel, 12, 0xf), Q30, IMMH, RN, RT],
        &[],
        &[Vtj2, Vnj2, ShrShift],
    ),
    t(
        0b101111111100000011010100 << 8,
        0b001011111000000011010000 << 8,
        NAMES_SQRDMLAH,
        &[f(F::Sel, 13, 1), LANE_HL2, Q30, RM, RN, RT],
        &[(F::Sz, 2)],
        &[Vtz, VnT, VmTs],
    ),
    t(
        0b101111110000000010110100 << 8,
        0b001011110000000000000000 << 8,
        &["mla", "mls"],
        &[f(F::Sel, 14, 1), LANE_HL2, Q30, SZ22, RM, RN, RT],
        &[],
        &[VtT, VnT, VmTs],
    ),
    // byte / halfword loads and stores
    t(
        0b101111111010000000001100 << 8,
        0b001110000000000000000100 << 8,
        STRB_LDRB,
        &[f2(F::Sel, (29, 2), (22, 1)), IMM9, RN, RT],
        &[],
        &[Wt, MemOpen, XnSp, MemClose, ImmOpt],
    ),
    t(
        0b101111111010000000000100 << 8,
        0b001110000000000000000100 << 8,
        STRB_LDRB,
        &[f2(F::Sel, (29, 2), (22, 1)), IMM9, WB11, RN, RT],
        &[],
        &[Wt, MemOpen, XnSp, ImmOpt, MemClose],
    ),
    t(
        0b101111111010000000001100 << 8,
        0b001110000010000000001000 << 8,
        STRB_LDRB,
        &[f2(F::Sel, (29, 2), (22, 1)), RM, OPT13, J12, RN, RT],
        &[],
        &[Wt, MemOpen, XnSp, RmExt, ExtAmountJ, MemClose],
    ),
    t(
        0b101111111010000000001100 << 8,
        0b001110001000000000000100 << 8,
        LDRSB_SH,
        &[f(F::Sel, 30, 1), f(F::Sf, 22, 1), IMM9, RN, RT],
        &[],
        &[RtInv, MemOpen, XnSp, MemClose, ImmOpt],
    ),
    t(
        0b101111111010000000000100 << 8,
        0b001110001000000000000000 << 8,
        &["ldursb", "?", "ldursh", "ldtrsh"],
        &[f2(F::Sel, (29, 2), (11, 1)), f(F::Sf, 22, 1), IMM9, RN, RT],
        &[],
        &[RtInv, MemOpen, XnSp, ImmOpt, MemClose],
    ),
    t(
        0b101111111010000000000100 << 8,
        0b001110001000000000000100 << 8,
        LDRSB_SH,
        &[f(F::Sel, 30, 1), f(F::Sf, 22, 1), IMM9, WB11, RN, RT],
        &[],
        &[RtInv, MemOpen, XnSp, ImmOpt, MemClose],
    ),
    t(
        0b101111111010000000001100 << 8,
        0b001110001010000000001000 << 8,
        LDRSB_SH,
        &[f(F::Sel, 30, 1), f(F::Sf, 22, 1), RM, OPT13, J12, RN, RT],
        &[],
        &[RtInv, MemOpen, XnSp, RmExt, ExtAmountJ, MemClose],
    ),
    t(
        0b101111110010000000000100 << 8,
        0b001110000000000000000000 << 8,
        &["sturb", "sttrb", "ldurb", "ldtrb", "?", "ldtrsb", "?", "ldtrsb", "sturh", "sttrh", "ldurh", "ldtrh"],
        &[f3(F::Sel, (27, 8), (21, 6), (11, 1)), IMM9, RN, RT],
        &[],
        &[Wt, MemOpen, XnSp, ImmOpt, MemClose],
    ),
    t(
        0b1011111110000000 << 16,
        0b0011100100000000 << 16,
        STRB_LDRB,
        &[f2(F::Sel, (29, 2), (22, 1)), AUX12, RN, RT],
        &[],
        &[Wt, MemOpen, XnSp, AuxOpt, MemClose],
    ),
    t(
        0b1011111110000000 << 16,
        0b0011100110000000 << 16,
        LDRSB_SH,
        &[f(F::Sel, 30, 1), f(F::Sf, 22, 1), AUX12, RN, RT],
        &[],
        &[RtInv, MemOpen, XnSp, AuxOpt, MemClose],
    ),
    // vector compares against zero and two-register misc
    t(
        0b100111111111111111001100 << 8,
        0b000011101111100011001000 << 8,
        NAMES_FCMP0N,
        &[f2(F::Sel, (27, 4), (12, 3)), Q30, RN, RT],
        &[],
        &[VtH1, VnH1, FpZero],
    ),
    t(
        0b100111111011111111001100 << 8,
        0b000011101010000011001000 << 8,
        NAMES_FCMP0N,
        &[f2(F::Sel, (27, 4), (12, 3)), Q30, SZ22_1, RN, RT],
        &[],
        &[Vtzq, Vnzq, FpZero],
    ),
    t(
        0b100111110110000011000100 << 8,
        0b000011100100000000000100 << 8,
        NAMES_FP3SAME,
        &[f3(F::Sel, (25, 0x10), (20, 8), (11, 7)), Q30, RM, RN, RT],
        &[(F::Sz, 1)],
        &[VtT, VnT, VmT],
    ),
    t(
        0b100111110111111110001100 << 8,
        0b000011100111100110001000 << 8,
        NAMES_FP2MISC_H,
        &[f3(F::Sel, (25, 0x10), (20, 8), (12, 7)), Q30, RN, RT],
        &[],
        &[VtH1, VnH1],
    ),
    t(
        0b100111110010000011111100 << 8,
        0b000011100000000010010100 << 8,
        &["sdot", "udot"],
        &[f(F::Sel, 29, 1), Q30, SZ22, RM, RN, RT],
        &[],
        &[VtT, Vnzq, Vmzq],
    ),
    t(
        0b100111110011111110111100 << 8,
        0b000011100010000000101000 << 8,
        &["saddlp", "sadalp", "uaddlp", "uadalp"],
        &[f2(F::Sel, (28, 2), (14, 1)), Q30, SZ22, RN, RT],
        &[],
        &[Vtzq2, VnT],
    ),
    t(
        0b100111110011111111001100 << 8,
        0b000011100010000010001000 << 8,
        NAMES_CMP0,
        &[f2(F::Sel, (27, 4), (12, 3)), Q30, SZ22, RN, RT],
        &[],
        &[VtT, VnT, Zero],
    ),
    t(
        0b100111110011111100001100 << 8,
        0b000011100010000000001000 << 8,
        NAMES_INT2MISC,
        &[f2(F::Sel, (25, 0x10), (12, 0xf)), Q30, SZ22, RN, RT],
        &[],
        &[VtT, VnT],
    ),
    t(
        0b100111110011111010001100 << 8,
        0b000011100010000010001000 << 8,
        NAMES_FP2MISC_V,
        &[f4(F::Sel, (24, 0x20), (19, 0x10), (13, 8), (12, 7)), Q30, SZ22_1, RN, RT],
        &[],
        &[Vtzq, Vnzq],
    ),
    t(
        0b100111110011111111111100 << 8,
        0b000011100011000000111000 << 8,
        &["saddlv", "uaddlv"],
        &[f(F::Sel, 29, 1), Q30, SZ22, RN, RT],
        &[],
        &[FP4t, VnT],
    ),
    t(
        0b100111110011111011101100 << 8,
        0b000011100011000010101000 << 8,
        &["smaxv", "?", "sminv", "addv", "umaxv", "?", "uminv"],
        &[f3(F::Sel, (27, 4), (15, 2), (12, 1)), Q30, SZ22, RN, RT],
        &[],
        &[FP3t, VnT],
    ),
    t(
        0b100111110010000011111100 << 8,
        0b000011100010000000011100 << 8,
        &["and", "bic", "orr", "orn", "eor", "bsl", "bit", "bif"],
        &[f2(F::Sel, (27, 4), (22, 3)), Q30, RM, RN, RT],
        &[],
        &[VtT, VnT, VmT],
    ),
    t(
        0b100111110010000011000100 << 8,
        0b000011100010000011000100 << 8,
        NAMES_FP3SAME_SD,
        &[f3(F::Sel, (25, 0x10), (20, 8), (11, 7)), Q30, SZ22_1, RM, RN, RT],
        &[],
        &[Vtzq, Vnzq, Vmzq],
    ),
    t(
        0b100111110000000011000100 << 8,
        0b000011100000000010000100 << 8,
        NAMES_INT3SAME_2,
        &[f3(F::Sel, (25, 0x10), (18, 8), (11, 7)), Q30, SZ22, RM, RN, RT],
        &[],
        &[VtT, VnT, VmT],
    ),
    t(
        0b100111111111100010001100 << 8,
        0b000011110000000000000100 << 8,
        &["movi", "orr", "mvni", "bic"],
        &[f2(F::Sel, (28, 2), (12, 1)), Q30, IMM8V, f(F::K, 13, 3), RT],
        &[(F::Sz, 2)],
        &[VtT, Aux8, LslAmountK],
    ),
    t(
        0b100111111111100011001100 << 8,
        0b000011110000000010000100 << 8,
        &["movi", "orr", "mvni", "bic"],
        &[f2(F::Sel, (28, 2), (12, 1)), Q30, IMM8V, f(F::K, 13, 1), RT],
        &[(F::Sz, 1)],
        &[VtT, Aux8, LslAmountK],
    ),
    t(
        0b100111111111100011101100 << 8,
        0b000011110000000011000100 << 8,
        &["movi", "mvni"],
        &[f(F::Sel, 29, 1), Q30, IMM8V, f(F::K, 12, 1), RT],
        &[(F::Sz, 2)],
        &[VtT, Aux8, MslAmountK],
    ),
    t(
        0b100111111100000000110100 << 8,
        0b000011110000000000010000 << 8,
        NAMES_FMLA_ELEM,
        &[f2(F::Sel, (27, 4), (14, 3)), LANE_HL, Q30, RM4, RN, RT],
        &[],
        &[VtH1, VnH1, VmHs],
    ),
    t(
        0b100111111000000011001100 << 8,
        0b000011110000000001000100 << 8,
        NAMES_SHIFTL,
        &[f2(F::Sel, (27, 4), (12, 3)), Q30, IMMH, RN, RT],
        &[],
        &[Vtj2, Vnj2, ShlShift],
    ),
    t(
        0b100111111100000011110100 << 8,
        0b000011111000000011100000 << 8,
        &["sdot", "udot"],
        &[f(F::Sel, 29, 1), LANE_HL2, Q30, RM, RN, RT],
        &[],
        &[Vtzq, VnT, VmTs4b],
    ),
    t(
        0b100111111100000000110100 << 8,
        0b000011111000000000010000 << 8,
        NAMES_FMLA_ELEM_Q,
        &[f2(F::Sel, (27, 4), (14, 3)), LANE_HL2, Q30, RM, RN, RT],
        &[],
        &[Vtzq, Vnzq, VmTs2],
    ),
    t(
        0b100111111110000000110100 << 8,
        0b000011111100000000010000 << 8,
        NAMES_FMLA_ELEM,
        &[f2(F::Sel, (27, 4), (14, 3)), f(F::Aux, 11, 1), Q30, RM, RN, RT],
        &[(F::Sz, 1)],
        &[Vtzq, Vnzq, VmTs2],
    ),
    // word / doubleword exclusives
    t(
        0b111111111110000001111100 << 8,
        0b100010000000000001111100 << 8,
        &["stxr", "stlxr"],
        &[f(F::Sel, 15, 1), RA16, RN, RT],
        &[],
        &[Wd, Wt, MemOpen, XnSp, MemClose],
    ),
    t(
        0b11111111 << 24,
        0b10011000 << 24,
        &["ldrsw"],
        &[IMM19, RT],
        &[],
        &[Xt, PcRelWord],
    ),
    t(
        0b111111110110000001111100 << 8,
        0b100110110010000001111100 << 8,
        &["smull", "smnegl", "umull", "umnegl"],
        &[f2(F::Sel, (22, 2), (15, 1)), RM, RN, RT],
        &[],
        &[Xt, Wn, Wm],
    ),
    t(
        0b1111111101100000 << 16,
        0b1001101100100000 << 16,
        &["smaddl", "smsubl", "umaddl", "umsubl"],
        &[f2(F::Sel, (22, 2), (15, 1)), RM, RA10, RN, RT],
        &[],
        &[Xt, Wn, Wm, Xd],
    ),
    t(
        0b111111110110000011111100 << 8,
        0b100110110100000001111100 << 8,
        &["smulh", "umulh"],
        &[f(F::Sel, 23, 1), RM, RN, RT],
        &[],
        &[Xt, Xn, Xm],
    ),
    // ldrsw
    t(
        0b111111111110000000001100 << 8,
        0b101110001000000000000100 << 8,
        &["ldrsw"],
        &[IMM9, RN, RT],
        &[],
        &[Xt, MemOpen, XnSp, MemClose, ImmOpt],
    ),
    t(
        0b111111111110000000000100 << 8,
        0b101110001000000000000100 << 8,
        &["ldrsw"],
        &[IMM9, WB11, RN, RT],
        &[],
        &[Xt, MemOpen, XnSp, ImmOpt, MemClose],
    ),
    t(
        0b111111111110000000001100 << 8,
        0b101110001010000000001000 << 8,
        &["ldrsw"],
        &[RM, OPT13, J12, RN, RT],
        &[],
        &[Xt, MemOpen, XnSp, RmExt, ExtAmount2, MemClose],
    ),
    t(
        0b1111111111000000 << 16,
        0b1011100110000000 << 16,
        &["ldrsw"],
        &[AUX12, RN, RT],
        &[],
        &[Xt, MemOpen, XnSp, AuxOpt, MemClose],
    ),
    // SHA-3 / SM crypto
    t(
        0b111111111100000010000000 << 8,
        0b110011100000000000000000 << 8,
        &["eor3", "bcax"],
        &[f(F::Sel, 21, 1), RM, RA10, RN, RT],
        &[],
        &[Vt16b, Vn16b, Vm16b, Vd16b],
    ),
    t(
        0b111111111110000010000000 << 8,
        0b110011100100000000000000 << 8,
        &["sm3ss1"],
        &[RM, RA10, RN, RT],
        &[],
        &[Vt4s, Vn4s, Vm4s, Vd4s],
    ),
    t(
        0b111111111110000011000000 << 8,
        0b110011100100000010000000 << 8,
        &["sm3tt1a", "sm3tt1b", "sm3tt2a", "sm3tt2b"],
        &[f(F::Sel, 10, 3), RM, f(F::Aux, 12, 3), RN, RT],
        &[],
        &[Vt4s, Vn4s, VmTs],
    ),
    t(
        0b111111111110000011111000 << 8,
        0b110011100110000010000000 << 8,
        &["sha512h", "sha512h2"],
        &[f(F::Sel, 10, 1), RM, RN, RT],
        &[],
        &[Qt, Qn, Vm2d],
    ),
    t(
        0b111111111110000011111000 << 8,
        0b110011100110000010001000 << 8,
        &["sha512su1", "rax1"],
        &[f(F::Sel, 10, 1), RM, RN, RT],
        &[],
        &[Vt2d, Vn2d, Vm2d],
    ),
    t(
        0b111111111110000011110000 << 8,
        0b110011100110000011000000 << 8,
        &["sm3partw1", "sm3partw2", "sm4ekey"],
        &[f(F::Sel, 10, 3), RM, RN, RT],
        &[],
        &[Vt4s, Vn4s, Vm4s],
    ),
    t(
        0b111111111111111111111100 << 8,
        0b110011101100000010000000 << 8,
        &["sha512su0"],
        &[RN, RT],
        &[],
        &[Vt2d, Vn2d],
    ),
    t(
        0b111111111111111111111100 << 8,
        0b110011101100000010000100 << 8,
        &["sm4e"],
        &[RN, RT],
        &[],
        &[Vt4s, Vn4s],
    ),
    // exception generation and system instructions
    t(
        0b1111111111000000 << 16,
        0b1101010000000000 << 16,
        &["?", "svc", "hvc", "smc", "brk"],
        &[f2(F::Sel, (19, 4), (0, 3)), IMM16],
        &[],
        &[Imm],
    ),
    t(
        0b11111111111000000000000000000011,
        0b11010100010000000000000000000000,
        &["hlt"],
        &[],
        &[],
        &[],
    ),
    t(
        0b1111111111100000 << 16,
        0b1101010010100000 << 16,
        &["?", "dcps1", "dcps2", "dcps3"],
        &[f(F::Sel, 0, 3), IMM16],
        &[],
        &[ImmOpt],
    ),
    t(
        0b11111111111111111111110100011111,
        0b11010101000000110010000000011111,
        &["nop", "yield", "wfe", "wfi", "sev", "sevl", "?", "?", "esb", "psb"],
        &[f2(F::Sel, (6, 8), (5, 7))],
        &[],
        &[],
    ),
    t(
        0b11111111111111111111000011111111,
        0b11010101000000110011000001011111,
        &["clrex"],
        &[f(F::Imm, 8, 0xf)],
        &[],
        &[ImmOpt],
    ),
    t(
        0b11111111111111111111000010011111,
        0b11010101000000110011000010011111,
        &["dsb", "dmb", "isb"],
        &[f(F::Sel, 5, 3), f(F::Aux, 8, 0xf)],
        &[],
        &[Barrier],
    ),
    t(
        0b11111111111110001111000000011111,
        0b11010101000000000100000000011111,
        &["msr"],
        &[f(F::Imm, 8, 0xf), f(F::Wb, 5, 7)],
        &[],
        &[Pstate, Imm],
    ),
    t(
        0b11111111111111111111111110000000,
        0b11010101000010000111011000000000,
        &["dc"],
        &[f(F::Ra, 5, 3), RT],
        &[],
        &[DcOp0, Xt],
    ),
    t(
        0b11111111111111111111111110000000,
        0b11010101000010000111100000000000,
        &["at"],
        &[f(F::AOp, 5, 3), RT],
        &[],
        &[AtOp0, Xt],
    ),
    t(
        0b111111111111111111111111 << 8,
        0b110101010000100001111001 << 8,
        &["at"],
        &[f(F::AOp, 5, 7), RT],
        &[],
        &[AtOp1, Xt],
    ),
    t(
        0b11111111111111111111101111100000,
        0b11010101000010000111101001000000,
        &["dc"],
        &[f(F::Ra, 10, 1), RT],
        &[],
        &[DcOp1, Xt],
    ),
    t(
        0b11111111111111111111111111100000,
        0b11010101000010110111010000100000,
        &["dc"],
        &[RT],
        &[],
        &[DcZva, Xt],
    ),
    t(
        0b11111111111111111111101011100000,
        0b11010101000010110111101000100000,
        &["dc"],
        &[f2(F::Ra, (9, 2), (8, 1)), RT],
        &[],
        &[DcOp2, Xt],
    ),
    t(
        0b11111111111111001111101111000000,
        0b11010101000010000111000100000000,
        &["ic"],
        &[f2(F::Cond, (15, 2), (10, 1)), RT],
        &[],
        &[IcOp, XtOpt],
    ),
    t(
        0b11111111111111111111101101100000,
        0b11010101000011001000000000100000,
        &["tlbi"],
        &[f2(F::Rn, (9, 2), (7, 1)), RT],
        &[],
        &[TlbiOp1, XtOpt],
    ),
    t(
        0b11111111111111111111101101000000,
        0b11010101000011101000001100000000,
        &["tlbi"],
        &[f3(F::Rn, (8, 4), (6, 2), (5, 1)), RT],
        &[],
        &[TlbiOp2, XtOpt],
    ),
    t(
        0b111111111111110111111111 << 8,
        0b110101010000110001111000 << 8,
        &["at"],
        &[f2(F::AOp, (14, 8), (5, 7)), RT],
        &[],
        &[AtOp2, Xt],
    ),
    t(
        0b111111111111101111111011 << 8,
        0b110101010000100010000011 << 8,
        &["tlbi"],
        &[f3(F::Rn, (14, 0x10), (7, 8), (5, 7)), RT],
        &[],
        &[TlbiOp0, XtOpt],
    ),
    t(
        0b1111111111100000 << 16,
        0b1101010100000000 << 16,
        &["msr"],
        &[f(F::Wb, 19, 3), f(F::K, 16, 7), f(F::Rn, 12, 0xf), f(F::Rm, 8, 0xf), f(F::Aux, 5, 7), RT],
        &[],
        &[SysReg, Xt],
    ),
    t(
        0b1111111111111000 << 16,
        0b1101010100101000 << 16,
        &["sysl"],
        &[fs(F::Imm, 16, 7, 3), f(F::Rn, 12, 0xf), f(F::Rm, 8, 0xf), f(F::Aux, 5, 7), RT],
        &[],
        &[Xt, Imm, CrN, CrM, Aux],
    ),
    t(
        0b1111111111100000 << 16,
        0b1101010100100000 << 16,
        &["mrs"],
        &[f(F::Wb, 19, 3), f(F::K, 16, 7), f(F::Rn, 12, 0xf), f(F::Rm, 8, 0xf), f(F::Aux, 5, 7), RT],
        &[],
        &[Xt, SysReg],
    ),
    // unconditional branch (register)
    t(
        0b11111111100111111111110000011111,
        0b11010110000111110000000000000000,
        &["br", "blr", "ret"],
        &[f(F::Sel, 21, 3), RN],
        &[],
        &[Xn],
    ),
    t(
        0b11111111110111111111111111111111,
        0b11010110100111110000001111100000,
        &["eret", "drps"],
        &[f(F::Sel, 21, 1)],
        &[],
        &[],
    ),
    // prefetch
    t(
        0b11111111 << 24,
        0b11011000 << 24,
        &["prfm"],
        &[IMM19, RT],
        &[],
        &[Prefetch, PcRelWord],
    ),
    t(
        0b111111111110000000001100 << 8,
        0b111110001000000000000000 << 8,
        &["prfum"],
        &[IMM9, RN, RT],
        &[],
        &[Prefetch, MemOpen, XnSp, ImmOpt, MemClose],
    ),
    t(
        0b111111111110000000001100 << 8,
        0b111110001010000000001000 << 8,
        &["prfm"],
        &[RM, OPT13, J12, RN, RT],
        &[],
        &[Prefetch, MemOpen, XnSp, RmExt, ExtAmount3, MemClose],
    ),
    t(
        0b1111111111000000 << 16,
        0b1111100110000000 << 16,
        &["prfm"],
        &[AUX12, RN, RT],
        &[],
        &[Prefetch, MemOpen, XnSp, AuxOpt, MemClose],
    ),
    // exclusive pairs, word/doubleword CAS and plain exclusives
    t(
        0b1011111111100000 << 16,
        0b1000100000100000 << 16,
        &["stxp", "stlxp"],
        &[f(F::Sel, 15, 1), SF30, RA16, RM10, RN, RT],
        &[],
        &[Wd, Rt, Rm, MemOpen, XnSp, MemClose],
    ),
    t(
        0b1011111111111111 << 16,
        0b1000100001111111 << 16,
        &["ldxp", "ldaxp"],
        &[f(F::Sel, 15, 1), SF30, RM10, RN, RT],
        &[],
        &[Rt, Rm, MemOpen, XnSp, MemClose],
    ),
    t(
        0b101111111010000001111100 << 8,
        0b100010000010000001111100 << 8,
        &["cas", "casl", "casa", "casal"],
        &[f2(F::Sel, (21, 2), (15, 1)), SF30, RA16, RN, RT],
        &[],
        &[Rd, Rt, MemOpen, XnSp, MemClose],
    ),
    t(
        0b101111110011111101111100 << 8,
        0b100010000001111101111100 << 8,
        &["?", "?", "ldxr", "ldaxr", "stllr", "stlr", "ldlar", "ldar"],
        &[f2(F::Sel, (21, 6), (15, 1)), SF30, RN, RT],
        &[],
        &[Rt, MemOpen, XnSp, MemClose],
    ),
    // word / doubleword loads and stores
    t(
        0b101111111010000000001100 << 8,
        0b101110000000000000000100 << 8,
        STR_LDR,
        &[f(F::Sel, 22, 1), SF30, IMM9, RN, RT],
        &[],
        &[Rt, MemOpen, XnSp, MemClose, ImmOpt],
    ),
    t(
        0b101111111010000000000100 << 8,
        0b101110000000000000000000 << 8,
        &["stur", "sttr", "ldur", "ldtr"],
        &[f2(F::Sel, (21, 2), (11, 1)), SF30, IMM9, RN, RT],
        &[],
        &[Rt, MemOpen, XnSp, ImmOpt, MemClose],
    ),
    t(
        0b101111111010000000000100 << 8,
        0b101110000000000000000100 << 8,
        STR_LDR,
        &[f(F::Sel, 22, 1), SF30, IMM9, WB11, RN, RT],
        &[],
        &[Rt, MemOpen, XnSp, ImmOpt, MemClose],
    ),
    t(
        0b101111111010000000001100 << 8,
        0b101110000010000000001000 << 8,
        STR_LDR,
        &[f(F::Sel, 22, 1), SF30, RM, OPT13, J12, RN, RT],
        &[],
        &[Rt, MemOpen, XnSp, RmExt, ExtAmountSz, MemClose],
    ),
    t(
        0b101111110010000000001100 << 8,
        0b101110000010000000000000 << 8,
        NAMES_LDADD,
        &[f2(F::Sel, (18, 0x30), (12, 0xf)), SF30, RA16, RN, RT],
        &[],
        &[Rd, Rt, MemOpen, XnSp, MemClose],
    ),
    t(
        0b1011111110000000 << 16,
        0b1011100100000000 << 16,
        STR_LDR,
        &[f(F::Sel, 22, 1), SF30, AUX12, RN, RT],
        &[],
        &[Rt, MemOpen, XnSp, AuxOpt, MemClose],
    ),
    // bitfield extract
    t(
        0b0111111110100000 << 16,
        0b0001001110000000 << 16,
        &["extr"],
        &[SF31, RM, f(F::Imm, 10, 0x3f), RN, RT],
        &[],
        &[Rt, Rn, Rm, Imm],
    ),
    // unconditional branch (immediate)
    t(
        0b01111100 << 24,
        0b00010100 << 24,
        &["b", "bl"],
        &[f(F::Sel, 31, 1), fs(F::Imm, 0, 0x3ffffff, 26)],
        &[],
        &[PcRelWord],
    ),
    t(
        0b011111111110000011111100 << 8,
        0b000110100000000000000000 << 8,
        &["adc"],
        &[SF31, RM, RN, RT],
        &[],
        &[Rt, Rn, Rm],
    ),
    t(
        0b011111111110000010000000 << 8,
        0b000110101100000000000000 << 8,
        &["?", "?", "udiv", "sdiv", "?", "?", "?", "?", "lslv", "lsrv", "asrv", "rorv", "?", "?", "?", "?", "crc32b", "crc32h", "crc32w", "crc32x", "crc32cb", "crc32ch", "crc32cw", "crc32cx"],
        &[f(F::Sel, 10, 0x1f), SF31, RM, RN, RT],
        &[],
        &[Rt, Rn, Rm],
    ),
    t(
        0b011111111110000001111100 << 8,
        0b000110110000000001111100 << 8,
        &["mul", "mneg"],
        &[f(F::Sel, 15, 1), SF31, RM, RN, RT],
        &[],
        &[Rt, Rn, Rm],
    ),
    t(
        0b0111111111100000 << 16,
        0b0001101100000000 << 16,
        &["madd", "msub"],
        &[f(F::Sel, 15, 1), SF31, RM, RA10, RN, RT],
        &[],
        &[Rt, Rn, Rm, Rd],
    ),
    t(
        0b011111111111111111111100 << 8,
        0b000111101010111000000000 << 8,
        &["fmov"],
        &[SF31, RN, RT],
        &[],
        &[Rt, Vn1d],
    ),
    t(
        0b011111111111111111111100 << 8,
        0b000111101010111100000000 << 8,
        &["fmov"],
        &[SF31, RN, RT],
        &[],
        &[Vt1d, Rn],
    ),
    t(
        0b0111111100111110 << 16,
        0b0001111000000010 << 16,
        &["scvtf", "ucvtf"],
        &[f(F::Sel, 16, 1), SF31, SZ22, f(F::Aux, 10, 0x3f), RN, RT],
        &[],
        &[FP5t, Rn, FracBits],
    ),
    t(
        0b0111111100111110 << 16,
        0b0001111000011000 << 16,
        &["fcvtzs", "fcvtzu"],
        &[f(F::Sel, 16, 1), SF31, SZ22, f(F::Aux, 10, 0x3f), RN, RT],
        &[],
        &[Rt, FP5n, FracBits],
    ),
    t(
        0b011111110011101011111100 << 8,
        0b000111100010001000000000 << 8,
        &["scvtf", "ucvtf", "fmov", "fmov"],
        &[f2(F::Sel, (17, 2), (16, 1)), SF31, SZ22, RN, RT],
        &[],
        &[FP5t, Rn],
    ),
    t(
        0b011111110011000011111100 << 8,
        0b000111100010000000000000 << 8,
        &["fcvtns", "fcvtnu", "scvtf", "ucvtf", "fcvtas", "fcvtau", "fmov", "fmov", "fcvtns", "fcvtnu"],
        &[f(F::Sel, 16, 0xf), SF31, SZ22, RN, RT],
        &[],
        &[Rt, FP5n],
    ),
    t(
        0b011111110011111011111100 << 8,
        0b000111100011000000000000 << 8,
        &["fcvtms", "fcvtmu"],
        &[f(F::Sel, 16, 1), SF31, SZ22, RN, RT],
        &[],
        &[Rt, FP5n],
    ),
    // register pairs
    t(
        0b0111111110000000 << 16,
        0b0010100010000000 << 16,
        STP_LDP,
        &[f(F::Sel, 22, 1), SF31, IMM7, RM10, RN, RT],
        &[],
        &[Rt, Rm, MemOpen, XnSp, MemClose, ScaledSfOpt],
    ),
    t(
        0b01111110 << 24,
        0b00101000 << 24,
        STNP_STP,
        &[f2(F::Sel, (23, 2), (22, 1)), SF31, WB23, IMM7, RM10, RN, RT],
        &[],
        &[Rt, Rm, MemOpen, XnSp, ScaledSfOpt, MemClose],
    ),
    // compare-and-branch, test-and-branch
    t(
        0b01111110 << 24,
        0b00110100 << 24,
        &["cbz", "cbnz"],
        &[f(F::Sel, 24, 1), SF31, IMM19, RT],
        &[],
        &[Rt, PcRelWord],
    ),
    t(
        0b01111110 << 24,
        0b00110110 << 24,
        &["tbz", "tbnz"],
        &[f(F::Sel, 24, 1), f2(F::BitNum, (26, 0x20), (19, 0x1f)), fs(F::Imm, 5, 0x3fff, 14), RT],
        &[],
        &[Xt, BitNum, PcRelWord],
    ),
    t(
        0b011111111110000000000100 << 8,
        0b001110001000000000000000 << 8,
        &["?", "ldtrsb", "ldursw", "ldtrsw"],
        &[f2(F::Sel, (30, 2), (11, 1)), IMM9, RN, RT],
        &[],
        &[Xt, MemOpen, XnSp, ImmOpt, MemClose],
    ),
    t(
        0b01111111111000001111111111100000,
        0b01011010000000000000001111100000,
        &["ngc"],
        &[SF31, RM, RT],
        &[],
        &[Rt, Rm],
    ),
    t(
        0b011111111111111111111000 << 8,
        0b010110101100000000001000 << 8,
        &["rev"],
        &[SF31, RN, RT],
        &[],
        &[Rt, Rn],
    ),
    t(
        0b011111111111111111101000 << 8,
        0b010110101100000000000000 << 8,
        &["rbit", "rev16", "clz", "cls"],
        &[f2(F::Sel, (11, 2), (10, 1)), SF31, RN, RT],
        &[],
        &[Rt, Rn],
    ),
    // conditional select
    t(
        0b001111111110000000001000 << 8,
        0b000110101000000000000000 << 8,
        &["csel", "csinc", "csinv", "csneg"],
        &[f2(F::Sel, (29, 2), (10, 1)), SF31, RM, COND12, RN, RT],
        &[],
        &[Rt, Rn, Rm, Cond],
    ),
    // FP load literal
    t(
        0b00111111 << 24,
        0b00011100 << 24,
        &["ldr"],
        &[SZ30, IMM19, RT],
        &[],
        &[FPt, PcRelWord],
    ),
    t(
        0b00111111111000000000000000011111,
        0b00101011001000000000000000011111,
        &["cmn", "cmp"],
        &[f(F::Sel, 30, 1), SF31, RM, OPT13, f(F::Aux, 10, 7), RN],
        &[],
        &[RnSp, RmSf, ExtendSf],
    ),
    // FP register pairs
    t(
        0b0011111110000000 << 16,
        0b0010110010000000 << 16,
        STP_LDP,
        &[f(F::Sel, 22, 1), SZ30, IMM7, RM10, RN, RT],
        &[],
        &[FPt, FPm, MemOpen, XnSp, MemClose, ScaledSzOpt],
    ),
    t(
        0b00111110 << 24,
        0b00101100 << 24,
        STNP_STP,
        &[f2(F::Sel, (23, 2), (22, 1)), SZ30, WB23, IMM7, RM10, RN, RT],
        &[],
        &[FPt, FPm, MemOpen, XnSp, ScaledSzOpt, MemClose],
    ),
    // conditional compare
    t(
        0b00111111111000000000110000010000,
        0b00111010010000000000000000000000,
        &["ccmn", "ccmp"],
        &[f(F::Sel, 30, 1), SF31, RM, COND12, RN, f(F::Aux, 0, 0xf)],
        &[],
        &[Rn, Rm, Aux, Cond],
    ),
    t(
        0b00111111111000000000110000010000,
        0b00111010010000000000100000000000,
        &["ccmn", "ccmp"],
        &[f(F::Sel, 30, 1), SF31, f(F::BitNum, 16, 0x1f), COND12, RN, f(F::Aux, 0, 0xf)],
        &[],
        &[Rn, BitNum, Aux, Cond],
    ),
    // FP loads and stores
    t(
        0b001111110010000000001100 << 8,
        0b001111000000000000000000 << 8,
        &["stur", "ldur"],
        &[f(F::Sel, 22, 1), SZ30, f(F::Sf, 23, 1), IMM9, RN, RT],
        &[],
        &[FPst, MemOpen, XnSp, ImmOpt, MemClose],
    ),
    t(
        0b001111110010000000001100 << 8,
        0b001111000000000000000100 << 8,
        STR_LDR,
        &[f(F::Sel, 22, 1), SZ30, f(F::Sf, 23, 1), IMM9, RN, RT],
        &[],
        &[FPst, MemOpen, XnSp, MemClose, ImmOpt],
    ),
    t(
        0b001111110010000000000100 << 8,
        0b001111000000000000000100 << 8,
        STR_LDR,
        &[f(F::Sel, 22, 1), SZ30, f(F::Sf, 23, 1), IMM9, WB11, RN, RT],
        &[],
        &[FPst, MemOpen, XnSp, ImmOpt, MemClose],
    ),
    t(
        0b001111110010000000001100 << 8,
        0b001111000010000000001000 << 8,
        STR_LDR,
        &[f(F::Sel, 22, 1), SZ30, f(F::Sf, 23, 1), RM, OPT13, J12, RN, RT],
        &[],
        &[FPst, MemOpen, XnSp, RmExt, ExtAmountZ, MemClose],
    ),
    t(
        0b00111111 << 24,
        0b00111101 << 24,
        STR_LDR,
        &[f(F::Sel, 22, 1), SZ30, f(F::Sf, 23, 1), AUX12, RN, RT],
        &[],
        &[FPst, MemOpen, XnSp, AuxOpt, MemClose],
    ),
    // add/subtract (extended register)
    t(
        0b0001111111100000 << 16,
        0b0000101100100000 << 16,
        &["add", "adds", "sub", "subs"],
        &[f(F::Sel, 29, 3), SF31, RM, OPT13, f(F::Aux, 10, 7), RN, RT],
        &[],
        &[RtSp, RnSp, RmSf, ExtendSf],
    ),
    // logical / add-sub (shifted register)
    t(
        0b00011110 << 24,
        0b00001010 << 24,
        &["and", "bic", "add", "?", "orr", "orn", "adds", "?", "eor", "eon", "sub", "?", "ands", "bics", "subs"],
        &[f3(F::Sel, (27, 0xc), (23, 2), (21, 1)), SF31, SZ22, RM, f(F::Aux, 10, 0x3f), RN, RT],
        &[],
        &[Rt, Rn, Rm, ShiftJOpt],
    ),
    // pc-relative address
    t(
        0b10011111 << 24,
        0b00010000 << 24,
        &["adr"],
        &[f(F::Aux, 29, 3), IMM19, RT],
        &[],
        &[Xt, PcRelByte],
    ),
    t(
        0b10011111 << 24,
        0b10010000 << 24,
        &["adrp"],
        &[f(F::Aux, 29, 3), IMM19, RT],
        &[],
        &[Xt, PcRelPage],
    ),
    // add/subtract (immediate)
    t(
        0b00011111 << 24,
        0b00010001 << 24,
        &["add", "adds", "sub", "subs"],
        &[f(F::Sel, 29, 3), SF31, f(F::Aux, 22, 3), f(F::Imm, 10, 0xfff), RN, RT],
        &[],
        &[RtSp, RnSp, Imm, Lsl12Opt],
    ),
    // logical (immediate)
    t(
        0b0001111110000000 << 16,
        0b0001001000000000 << 16,
        &["and", "orr", "eor", "ands"],
        &[f(F::Sel, 29, 3), f3s(F::Imm, (10, 0x1000), (4, 0xfc0), (16, 0x3f), 13), SF31, RN, RT],
        &[],
        &[RtSp, Rn, Imm],
    ),
    // move wide (immediate)
    t(
        0b0001111110000000 << 16,
        0b0001001010000000 << 16,
        &["movn", "?", "movz", "movk"],
        &[f(F::Sel, 29, 3), SF31, f(F::Aux, 21, 3), f(F::Imm, 5, 0xffff), RT],
        &[],
        &[Rt, Imm, Lsl16Opt],
    ),
    // bitfield
    t(
        0b0001111110000000 << 16,
        0b0001001100000000 << 16,
        &["sbfm", "bfm", "ubfm"],
        &[f(F::Sel, 29, 3), SF31, f(F::Imm, 16, 0x3f), f(F::Aux, 10, 0x3f), RN, RT],
        &[],
        &[Rt, Rn, Imm, Aux],
    ),
    // add/subtract with carry
    t(
        0b000111111110000011111100 << 8,
        0b000110100000000000000000 << 8,
        &["adc", "adcs", "sbc", "sbcs"],
        &[f(F::Sel, 29, 3), SF31, RM, RN, RT],
        &[],
        &[Rt, Rn, Rm],
    ),
];
