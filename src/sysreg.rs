//! System-register name resolution.
//!
//! `msr`/`mrs` encode a register as the 5-tuple `(op0, op1, CRn, CRm, op2)`.
//! The tuple space is far larger than the set of architecturally defined
//! registers, so every unrecognized coordinate falls back to the synthesized
//! `S<op0>_<op1>_<CRn>_<CRm>_<op2>` spelling. The fallback is unconditional;
//! this function cannot fail.

/// Resolve a system-register coordinate to its canonical name, or the
/// numeric `S..._..._...` form when the tuple is not in the table.
pub fn sysreg_name(op0: u32, op1: u32, crn: u32, crm: u32, op2: u32) -> String {
    resolve(op0, op1, crn, crm, op2)
        .unwrap_or_else(|| format!("S{}_{}_{}_{}_{}", op0, op1, crn, crm, op2))
}

fn pick_name(names: &[&'static str], idx: u32) -> Option<String> {
    names
        .get(idx as usize)
        .copied()
        .filter(|s| *s != "?")
        .map(str::to_string)
}

fn resolve(op0: u32, op1: u32, crn: u32, crm: u32, op2: u32) -> Option<String> {
    // debug registers select by op2 and index by CRm
    if op0 == 2 && op1 == 0 && crn == 0 && !matches!(crm, 0 | 2 | 3 | 6) {
        return match op2 {
            4 if crm < 8 => Some(format!("DBGBVR{}_EL1", crm)),
            5 if crm < 8 => Some(format!("DBGBCR{}_EL1", crm)),
            6 if crm < 8 => Some(format!("DBGWVR{}_EL1", crm)),
            7 if crm < 8 => Some(format!("DBGWCR{}_EL1", crm)),
            _ => None,
        };
    }
    if op0 == 2 && op1 == 0 && crn == 1 && crm != 0 && op2 == 4 {
        return pick_name(&["OSLSR_EL1", "?", "OSDLR_EL1", "DBGPRCR_EL1"], crm);
    }
    if op0 == 2 && op1 == 0 && crn == 7 && op2 == 6 {
        return pick_name(
            &["?", "?", "?", "?", "?", "?", "?", "?", "DBGCLAIMSET_EL1", "DBGCLAIMCLR_EL1", "?", "?", "?", "?", "DBGAUTHSTATUS_EL1"],
            crm,
        );
    }
    if op0 == 2 && op1 == 3 && crn == 0 && op2 == 0 {
        return pick_name(&["?", "MDCCSR_EL0", "?", "?", "DBGDTR_EL0", "DBGDTRRX_EL0"], crm);
    }
    if op0 == 3 && op1 == 0 && crn == 10 && crm != 4 && op2 == 0 {
        return pick_name(&["?", "?", "MAIR_EL1", "AMAIR_EL1"], crm);
    }

    let names: &[&str] = match (op0, op1, crn, crm) {
        (2, 0, 0, 0) => &["?", "?", "OSDTRRX_EL1"],
        (2, 0, 0, 2) => &["MDCCINT_EL1", "?", "MDSCR_EL1"],
        (2, 0, 0, 3) => &["?", "?", "OSDTRTX_EL1"],
        (2, 0, 0, 6) => &["?", "?", "OSECCR_EL1"],
        (2, 0, 1, 0) => &["MDRAR_EL1", "?", "?", "?", "OSLAR_EL1"],
        (2, 4, 0, 7) => &["DBGVCR32_EL2"],

        (3, 0, 0, 0) => &["MIDR_EL1", "?", "?", "?", "?", "MPIDR_EL1", "REVIDR_EL1"],
        (3, 0, 0, 1) => &[
            "ID_PFR0_EL1", "ID_PFR1_EL1", "ID_DFR0_EL1", "ID_AFR0_EL1", "ID_MMFR0_EL1",
            "ID_MMFR1_EL1", "ID_MMFR2_EL1", "ID_MMFR3_EL1",
        ],
        (3, 0, 0, 2) => &[
            "ID_ISAR0_EL1", "ID_ISAR1_EL1", "ID_ISAR2_EL1", "ID_ISAR3_EL1", "ID_ISAR4_EL1",
            "ID_ISAR5_EL1", "ID_MMFR4_EL1",
        ],
        (3, 0, 0, 3) => &["MVFR0_EL1", "MVFR1_EL1", "MVFR2_EL1"],
        (3, 0, 0, 4) => &["ID_AA64PFR0_EL1", "ID_AA64PFR1_EL1", "?", "?", "ID_AA64ZFR0_EL1"],
        (3, 0, 0, 5) => &[
            "ID_AA64DFR0_EL1", "ID_AA64DFR1_EL1", "?", "?", "ID_AA64AFR0_EL1", "ID_AA64AFR1_EL1",
        ],
        (3, 0, 0, 6) => &["ID_AA64ISAR0_EL1", "ID_AA64ISAR1_EL1"],
        (3, 0, 0, 7) => &["ID_AA64MMFR0_EL1", "ID_AA64MMFR1_EL1", "ID_AA64MMFR2_EL1"],
        (3, 0, 1, 0) => &["SCTLR_EL1", "ACTLR_EL1", "CPACR_EL1"],
        (3, 0, 1, 2) => &["ZCR_EL1"],
        (3, 0, 2, 0) => &["TTBR0_EL1", "TTBR1_EL1", "TCR_EL1"],
        (3, 0, 4, 0) => &["SPSR_EL1", "ELR_EL1"],
        (3, 0, 4, 1) => &["SP_EL0"],
        (3, 0, 4, 2) => &["SPSel", "?", "CurrentEL", "PAN", "UAO"],
        (3, 0, 4, 6) => &["ICC_PMR_EL1"],
        (3, 0, 5, 1) => &["AFSR0_EL1", "AFSR1_EL1"],
        (3, 0, 5, 2) => &["ESR_EL1"],
        (3, 0, 5, 3) => &["ERRIDR_EL1", "ERRSELR_EL1"],
        (3, 0, 5, 4) => &["ERXFR_EL1", "ERXCTLR_EL1", "ERXSTATUS_EL1", "ERXADDR_EL1"],
        (3, 0, 5, 5) => &["ERXMISC0_EL1", "ERXMISC1_EL1"],
        (3, 0, 6, 0) => &["FAR_EL1"],
        (3, 0, 7, 4) => &["PAR_EL1"],
        (3, 0, 9, 9) => &[
            "PMSCR_EL1", "?", "PMSICR_EL1", "PMSIRR_EL1", "PMSFCR_EL1", "PMSEVFR_EL1",
            "PMSLATFR_EL1", "PMSIDR_EL1",
        ],
        (3, 0, 9, 10) => &[
            "PMBLIMITR_EL1", "PMBPTR_EL1", "?", "PMBSR_EL1", "?", "?", "?", "PMBIDR_EL1",
        ],
        (3, 0, 9, 14) => &["?", "PMINTENSET_EL1", "PMINTENCLR_EL1"],
        (3, 0, 10, 4) => &[
            "LORSA_EL1", "LOREA_EL1", "LORN_EL1", "LORC_EL1", "?", "?", "?", "LORID_EL1",
        ],
        (3, 0, 12, 0) => &["VBAR_EL1", "RVBAR_EL1", "RMR_EL1"],
        (3, 0, 12, 1) => &["ISR_EL1", "DISR_EL1"],
        (3, 0, 12, 8) => &[
            "ICC_IAR0_EL1", "ICC_EOIR0_EL1", "ICC_HPPIR0_EL1", "ICC_BPR0_EL1", "ICC_AP0R0_EL1",
            "ICC_AP0R1_EL1", "ICC_AP0R2_EL1", "ICC_AP0R3_EL1",
        ],
        (3, 0, 12, 9) => &["ICC_AP1R0_EL1", "ICC_AP1R1_EL1", "ICC_AP1R2_EL1", "ICC_AP1R3_EL1"],
        (3, 0, 12, 11) => &[
            "?", "ICC_DIR_EL1", "?", "ICC_RPR_EL1", "?", "ICC_SGI1R_EL1", "ICC_ASGI1R_EL1",
            "ICC_SGI0R_EL1",
        ],
        (3, 0, 12, 12) => &[
            "ICC_IAR1_EL1", "ICC_EOIR1_EL1", "ICC_HPPIR1_EL1", "ICC_BPR1_EL1", "ICC_CTLR_EL1",
            "ICC_SRE_EL1", "ICC_IGRPEN0_EL1", "ICC_IGRPEN1_EL1",
        ],
        (3, 0, 13, 0) => &["?", "CONTEXTIDR_EL1", "?", "?", "TPIDR_EL1"],
        (3, 0, 14, 1) => &["CNTKCTL_EL1"],
        (3, 1, 0, 0) => &["CCSIDR_EL1", "CLIDR_EL1", "?", "?", "?", "?", "?", "AIDR_EL1"],
        (3, 2, 0, 0) => &["CSSELR_EL1"],
        (3, 3, 0, 0) => &["?", "CTR_EL0", "?", "?", "?", "?", "?", "DCZID_EL0"],
        (3, 3, 4, 2) => &["NZCV", "DAIF"],
        (3, 3, 4, 4) => &["FPCR", "FPSR"],
        (3, 3, 4, 5) => &["DSPSR_EL0", "DLR_EL0"],
        (3, 3, 9, 12) => &[
            "PMCR_EL0", "PMCNTENSET_EL0", "PMCNTENCLR_EL0", "PMOVSCLR_EL0", "PMSWINC_EL0",
            "PMSELR_EL0", "PMCEID0_EL0", "PMCEID1_EL0",
        ],
        (3, 3, 9, 13) => &["PMCCNTR_EL0", "PMXEVTYPER_EL0", "PMXEVCNTR_EL0"],
        (3, 3, 9, 14) => &["PMUSERENR_EL0", "?", "?", "PMOVSSET_EL0"],
        (3, 3, 13, 0) => &["?", "?", "TPIDR_EL0", "TPIDRRO_EL0"],
        (3, 3, 14, 0) => &["CNTFRQ_EL0", "CNTPCT_EL0", "CNTVCT_EL0"],
        (3, 3, 14, 2) => &["CNTP_TVAL_EL0", "CNTP_CTL_EL0", "CNTP_CVAL_EL0"],
        (3, 3, 14, 3) => &["CNTV_TVAL_EL0", "CNTV_CTL_EL0", "CNTV_CVAL_EL0"],
        (3, 4, 0, 0) => &["VPIDR_EL2", "?", "?", "?", "?", "VMPIDR_EL2"],
        (3, 4, 1, 0) => &["SCTLR_EL2", "ACTLR_EL2"],
        (3, 4, 1, 1) => &["HCR_EL2", "MDCR_EL2", "CPTR_EL2", "HSTR_EL2", "?", "?", "?", "HACR_EL2"],
        (3, 4, 1, 2) => &["ZCR_EL2"],
        (3, 4, 2, 0) => &["TTBR0_EL2", "?", "TCR_EL2"],
        (3, 4, 2, 1) => &["VTTBR0_EL2", "?", "VTCR_EL2"],
        (3, 4, 3, 0) => &["DACR32_EL2"],
        (3, 4, 4, 0) => &["SPSR_EL2", "ELR_EL2"],
        (3, 4, 4, 1) => &["SP_EL1"],
        (3, 4, 4, 3) => &["SPSR_irq", "SPSR_abt", "SPSR_und", "SPSR_fiq"],
        (3, 4, 5, 0) => &["?", "IFSR32_EL2"],
        (3, 4, 5, 1) => &["AFSR0_EL2", "AFSR1_EL2"],
        (3, 4, 5, 2) => &["ESR_EL2", "?", "?", "VSESR_EL2"],
        (3, 4, 5, 3) => &["FPEXC32_EL2"],
        (3, 4, 6, 0) => &["FAR_EL2", "?", "?", "?", "HPFAR_EL2"],
        (3, 4, 9, 9) => &["PMSCR_EL2"],
        (3, 4, 10, 2) => &["MAIR_EL2"],
        (3, 4, 10, 3) => &["AMAIR_EL2"],
        (3, 4, 12, 0) => &["VBAR_EL2", "RVBAR_EL2", "RMR_EL2"],
        (3, 4, 12, 1) => &["?", "VDISR_EL2"],
        (3, 4, 12, 8) => &["ICH_AP0R0_EL2", "ICH_AP0R1_EL2", "ICH_AP0R2_EL2", "ICH_AP0R3_EL2"],
        (3, 4, 12, 9) => &[
            "ICH_AP1R0_EL2", "ICH_AP1R1_EL2", "ICH_AP1R2_EL2", "ICH_AP1R3_EL2", "ICC_SRE_EL2",
        ],
        (3, 4, 12, 11) => &[
            "ICH_HCR_EL2", "ICH_VTR_EL2", "ICH_MISR_EL2", "ICH_EISR_EL2", "?", "ICH_ELRSR_EL2",
            "?", "ICH_VMCR_EL2",
        ],
        (3, 4, 12, 12) => &[
            "ICH_LR0_EL2", "ICH_LR1_EL2", "ICH_LR2_EL2", "ICH_LR3_EL2", "ICH_LR4_EL2",
            "ICH_LR5_EL2", "ICH_LR6_EL2", "ICH_LR7_EL2",
        ],
        (3, 4, 12, 13) => &[
            "ICH_LR8_EL2", "ICH_LR9_EL2", "ICH_LR10_EL2", "ICH_LR11_EL2", "ICH_LR12_EL2",
            "ICH_LR13_EL2", "ICH_LR14_EL2", "ICH_LR15_EL2",
        ],
        (3, 4, 13, 0) => &["?", "CONTEXTIDR_EL2", "TPIDR_EL2"],
        (3, 4, 14, 0) => &["?", "?", "?", "CNTVOFF_EL2"],
        (3, 4, 14, 1) => &["CNTHCTL_EL2"],
        (3, 4, 14, 2) => &["CNTHP_TVAL_EL2", "CNTHP_CTL_EL2", "CNTHP_CVAL_EL2"],
        (3, 4, 14, 3) => &["CNTHV_TVAL_EL2", "CNTHV_CTL_EL2", "CNTHV_CVAL_EL2"],
        (3, 5, 4, 0) => &["SPSR_EL12", "ELR_EL12"],
        (3, 6, 4, 1) => &["SP_EL2"],
        (3, 7, 14, 2) => &["CNTPS_TVAL_EL1", "CNTPS_CTL_EL1", "CNTPS_CVAL_EL1"],
        _ => return None,
    };
    pick_name(names, op2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_resolve() {
        assert_eq!(sysreg_name(3, 0, 1, 0, 0), "SCTLR_EL1");
        assert_eq!(sysreg_name(3, 0, 2, 0, 2), "TCR_EL1");
        assert_eq!(sysreg_name(3, 0, 4, 0, 1), "ELR_EL1");
        assert_eq!(sysreg_name(3, 0, 5, 2, 0), "ESR_EL1");
        assert_eq!(sysreg_name(3, 3, 4, 2, 0), "NZCV");
        assert_eq!(sysreg_name(2, 0, 0, 5, 4), "DBGBVR5_EL1");
    }

    #[test]
    fn unknown_tuples_synthesize() {
        assert_eq!(sysreg_name(1, 2, 3, 4, 5), "S1_2_3_4_5");
        // a reserved slot in a known block also synthesizes
        assert_eq!(sysreg_name(3, 0, 0, 0, 1), "S3_0_0_0_1");
    }
}
