//! Symbol configuration: tick size and the display precision derived from it.

use crate::DisplayPrice;

/// Largest display precision the derivation loop will produce. Bounds the
/// loop against a zero, negative, or denormal tick size.
const MAX_PRECISION: u32 = 9;

/// Per-symbol display configuration.
///
/// The display precision is the smallest number of decimal places `p`
/// (at least one) such that `tick_size * 10^p >= 1`. A 0.01 tick gives
/// two decimals, a 0.5 tick gives one, a 0.0001 tick gives four. Row
/// prices, quote prices, and working-order prices are all quantized to
/// this precision before any equality check.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymbolConfig {
    tick_size: f64,
    display_precision: u32,
}

impl SymbolConfig {
    /// Create a config for the given tick size, deriving display precision.
    pub fn new(tick_size: f64) -> Self {
        let mut precision = 1u32;
        let mut count = 10.0f64;
        while tick_size * count < 1.0 && precision < MAX_PRECISION {
            count *= 10.0;
            precision += 1;
        }
        Self {
            tick_size,
            display_precision: precision,
        }
    }

    /// Minimum price increment for the symbol.
    #[inline]
    pub fn tick_size(&self) -> f64 {
        self.tick_size
    }

    /// Decimal places used for displayed prices and price identity.
    #[inline]
    pub fn display_precision(&self) -> u32 {
        self.display_precision
    }

    /// Scale factor between a raw price and its quantized key: `10^precision`.
    #[inline]
    fn scale(&self) -> f64 {
        10f64.powi(self.display_precision as i32)
    }

    /// Quantize a raw price to its display identity.
    #[inline]
    pub fn quantize(&self, price: f64) -> DisplayPrice {
        DisplayPrice((price * self.scale()).round() as i64)
    }

    /// The raw price a quantized key stands for.
    #[inline]
    pub fn price_of(&self, key: DisplayPrice) -> f64 {
        key.0 as f64 / self.scale()
    }

    /// Format a quantized price at display precision.
    pub fn format_price(&self, key: DisplayPrice) -> String {
        format!("{:.*}", self.display_precision as usize, self.price_of(key))
    }

    /// Format a raw price at display precision.
    pub fn format_raw(&self, price: f64) -> String {
        format!("{:.*}", self.display_precision as usize, price)
    }
}

impl Default for SymbolConfig {
    fn default() -> Self {
        Self::new(0.01)
    }
}
