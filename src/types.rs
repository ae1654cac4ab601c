//! Core types: display-quantized prices and volumes.

/// A price quantized to the symbol's display precision.
///
/// `DisplayPrice(10_048)` represents 100.48 at two display decimals.
/// Row identity and every reconciliation lookup compare `DisplayPrice`
/// values; raw `f64` prices are never compared directly. This keeps the
/// grid immune to binary rounding mismatches between the feed's prices
/// and the ladder's computed row prices.
///
/// Quantization and formatting live on [`crate::SymbolConfig`], which
/// knows the display precision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayPrice(pub i64);

/// Quantity of contracts at a price. Fractional sizes are routine for
/// crypto feeds, so this is a plain `f64` rather than an integer count.
pub type Volume = f64;
