//! Exception cause decoding.
//!
//! Turns the trap kind and the syndrome register (ESR) into human text.
//! Cause coverage follows ARM DDI0487 D10.2.28 for the classes a bare-metal
//! kernel actually meets; everything else renders as `Unknown <hex>`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrapKind {
    Synchronous,
    Irq,
    Fiq,
    SError,
}

impl TrapKind {
    fn label(self) -> &'static str {
        match self {
            TrapKind::Synchronous => "Synchronous",
            TrapKind::Irq => "IRQ",
            TrapKind::Fiq => "FIQ",
            TrapKind::SError => "SError",
        }
    }
}

/// Decode `kind` plus the top six syndrome bits into one line of text.
/// For instruction and data aborts the 2-bit fault type and translation
/// level are appended. Total: unknown codes degrade to `Unknown <hex>`.
pub fn classify(kind: TrapKind, esr: u64) -> String {
    let cause = (esr >> 26) & 0x3f;
    let mut text = format!("{}: ", kind.label());
    text.push_str(&match cause {
        0b000000 => "Unknown".to_string(),
        0b000001 => "Trapped WFI/WFE".to_string(),
        0b001110 => "Illegal execution".to_string(),
        0b010101 => "System call".to_string(),
        0b100000 => "Instruction abort, lower EL".to_string(),
        0b100001 => "Instruction abort, same EL".to_string(),
        0b100010 => "Instruction alignment fault".to_string(),
        0b100100 => "Data abort, lower EL".to_string(),
        0b100101 => "Data abort, same EL".to_string(),
        0b100110 => "Stack alignment fault".to_string(),
        0b101100 => "Floating point".to_string(),
        0b110000 => "Breakpoint, lower EL".to_string(),
        0b110001 => "Breakpoint, same EL".to_string(),
        0b111100 => "Breakpoint instruction".to_string(),
        other => format!("Unknown {:x}", other),
    });
    if matches!(cause, 0b100000 | 0b100001 | 0b100100 | 0b100101) {
        let fault = match (esr >> 2) & 3 {
            0 => "Address size fault",
            1 => "Translation fault",
            2 => "Access flag fault",
            _ => "Permission fault",
        };
        text.push_str(&format!(", {} at level {}", fault, esr & 3));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_common_causes() {
        assert_eq!(classify(TrapKind::Synchronous, 0x15 << 26), "Synchronous: System call");
        assert_eq!(classify(TrapKind::Irq, 0), "IRQ: Unknown");
        assert_eq!(
            classify(TrapKind::Synchronous, (0b100101 << 26) | 0b0101),
            "Synchronous: Data abort, same EL, Translation fault at level 1"
        );
    }

    #[test]
    fn unknown_codes_render_hex() {
        assert_eq!(classify(TrapKind::SError, 0x3f << 26), "SError: Unknown 3f");
    }
}
