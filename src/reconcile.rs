//! Reconciliation: mapping feed updates into grid rows by price identity.
//!
//! Every mapper quantizes the update's price and looks for an exact row
//! match. A miss means the price is outside the visible window — a silent
//! no-op by contract, since the engine cannot request a different window
//! from the feed. Rows are never created here.

use crate::{PriceGrid, Quote, Side, SymbolConfig, Trade, WorkingOrder};

impl PriceGrid {
    /// Write a quote's volume into the matching row's bid or ask cell.
    ///
    /// Replace semantics: the cell shows the level's current resting
    /// volume, so reapplying the same quote is idempotent.
    pub fn apply_quote(&mut self, quote: &Quote, side: Side, config: &SymbolConfig) {
        if let Some(row) = self.row_mut(config.quantize(quote.price)) {
            match side {
                Side::Buy => row.bid = Some(quote.volume),
                Side::Sell => row.ask = Some(quote.volume),
            }
        }
    }

    /// Accumulate a trade's volume into the matching row's trade cell.
    ///
    /// Add semantics: the cell is session volume at that price; an empty
    /// cell counts as zero.
    pub fn apply_trade(&mut self, trade: &Trade, config: &SymbolConfig) {
        if let Some(row) = self.row_mut(config.quantize(trade.price)) {
            row.trade = Some(row.trade.unwrap_or(0.0) + trade.volume);
        }
    }

    /// Accumulate a working order's quantity into the matching row.
    ///
    /// Add semantics: several orders can rest at one price and the cell
    /// shows their combined size.
    pub fn apply_working(&mut self, order: &WorkingOrder, config: &SymbolConfig) {
        if let Some(row) = self.row_mut(config.quantize(order.price)) {
            row.working = Some(row.working.unwrap_or(0.0) + order.qty);
        }
    }

    /// Clear the working column ahead of reapplying a replacement list.
    pub fn clear_working(&mut self) {
        for row in self.rows_mut() {
            row.working = None;
        }
    }
}
