//! Gate sequences Alice applies to her half of the Bell pair

use densecode_core::BitPair;
use densecode_state::TwoQubitState;
use std::fmt;

/// Local operation encoding two classical bits on the first qubit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// 00: nothing is applied
    Identity,
    /// 01: NOT (X)
    Not,
    /// 10: Z
    Z,
    /// 11: NOT then Z
    NotThenZ,
}

impl Encoding {
    pub fn for_bits(bits: BitPair) -> Self {
        match (bits.first.is_one(), bits.second.is_one()) {
            (false, false) => Encoding::Identity,
            (false, true) => Encoding::Not,
            (true, false) => Encoding::Z,
            (true, true) => Encoding::NotThenZ,
        }
    }

    /// The bit pair this encoding carries
    pub fn bits(self) -> BitPair {
        BitPair::ALL[match self {
            Encoding::Identity => 0,
            Encoding::Not => 1,
            Encoding::Z => 2,
            Encoding::NotThenZ => 3,
        }]
    }

    /// Apply the gates to the first qubit of `state`
    pub fn apply(self, state: &mut TwoQubitState) {
        state.apply_encoding(self.bits());
    }

    /// Gate names in application order
    pub fn gates(self) -> &'static [&'static str] {
        match self {
            Encoding::Identity => &["I"],
            Encoding::Not => &["X"],
            Encoding::Z => &["Z"],
            Encoding::NotThenZ => &["X", "Z"],
        }
    }

    pub fn description(self) -> String {
        match self {
            Encoding::Identity => format!("For encoding {}, nothing is done (I gate is applied)", self.bits()),
            Encoding::Not => format!("For encoding {}, the X (NOT) gate is applied", self.bits()),
            Encoding::Z => format!("For encoding {}, the Z gate is applied", self.bits()),
            Encoding::NotThenZ => format!("For encoding {}, the X and Z gates are applied", self.bits()),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.gates().join("·"))
    }
}
