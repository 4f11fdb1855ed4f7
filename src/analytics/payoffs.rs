//! Option contract kinds and position direction
//!
//! # Mathematical Definitions
//!
//! - **Call**: max(S - K, 0), right to buy at strike K
//! - **Put**: max(K - S, 0), right to sell at strike K
//!
//! A position is long (bought, sign +1) or short (sold, sign -1); PnL of a
//! position is its sign times the change in option value.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    /// Exercise value against `strike`; never negative.
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => (spot - strike).max(0.0),
            OptionKind::Put => (strike - spot).max(0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Long,
    Short,
}

impl Side {
    pub fn sign(&self) -> f64 {
        match self {
            Side::Long => 1.0,
            Side::Short => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub kind: OptionKind,
    pub side: Side,
}

impl Position {
    pub fn new(kind: OptionKind, side: Side) -> Self {
        Position { kind, side }
    }

    pub fn long(kind: OptionKind) -> Self {
        Self::new(kind, Side::Long)
    }

    pub fn short(kind: OptionKind) -> Self {
        Self::new(kind, Side::Short)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intrinsic() {
        assert_eq!(OptionKind::Call.intrinsic(110.0, 100.0), 10.0);
        assert_eq!(OptionKind::Call.intrinsic(90.0, 100.0), 0.0);
        assert_eq!(OptionKind::Put.intrinsic(90.0, 100.0), 10.0);
        assert_eq!(OptionKind::Put.intrinsic(110.0, 100.0), 0.0);
    }

    #[test]
    fn test_side_sign() {
        assert_eq!(Side::Long.sign(), 1.0);
        assert_eq!(Side::Short.sign(), -1.0);
        assert_eq!(Position::short(OptionKind::Put).side, Side::Short);
    }
}
