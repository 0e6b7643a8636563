//! Per-class character counts for the shuffled part of a password.

use super::LengthSpec;

/// Characters placed before the shuffled remainder: digit, symbol, letter.
pub const LEAD_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    pub lower: usize,
    pub upper: usize,
    pub digits: usize,
    pub symbols: usize,
}

impl Budget {
    /// 60% letters (rounded), 40% digits and symbols, each half split
    /// floor/remainder.
    pub fn split(length: LengthSpec) -> Self {
        let remaining = length.get() - LEAD_LEN;

        // round(remaining * 0.6); 6r + 5 is odd so there is never a tie.
        let letters = (remaining * 6 + 5) / 10;
        let others = remaining - letters;

        let lower = letters / 2;
        let digits = others / 2;

        Self {
            lower,
            upper: letters - lower,
            digits,
            symbols: others - digits,
        }
    }

    pub fn total(&self) -> usize {
        self.lower + self.upper + self.digits + self.symbols
    }
}
