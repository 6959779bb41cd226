use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Precision context for square roots that are materialised as exact decimals.
///
/// `scale` is the number of fractional decimal digits kept in the result.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathContext {
    pub scale: u32,

    #[serde(default)]
    pub rounding: Rounding,
}

/// How the digit after the last kept one is treated.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Truncate toward zero.
    Down,
    #[default]
    HalfUp,
}

impl MathContext {
    // Digit counts borrowed from the IEEE 754 decimal formats. Here they are
    // fractional digits after the point, not significant digits.
    pub const DECIMAL32: MathContext = MathContext::new(7, Rounding::HalfUp);
    pub const DECIMAL64: MathContext = MathContext::new(16, Rounding::HalfUp);
    pub const DECIMAL128: MathContext = MathContext::new(34, Rounding::HalfUp);

    pub const fn new(scale: u32, rounding: Rounding) -> Self {
        Self { scale, rounding }
    }
}

impl Default for MathContext {
    fn default() -> Self {
        MathContext::DECIMAL128
    }
}

impl FromStr for Rounding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "down" => Ok(Rounding::Down),
            "half_up" | "half-up" => Ok(Rounding::HalfUp),
            _ => Err(format!(
                "Unknown rounding mode: {}. Expected one of `down`, `half_up`",
                s
            )),
        }
    }
}
