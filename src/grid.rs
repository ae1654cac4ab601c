//! PriceGrid: the fixed-height ladder of price rows.
//!
//! The grid is a dumb data structure: 40 rows ordered by descending
//! displayed price, plus a hash index for O(1) lookup by quantized price.
//! Row allocation lives in [`crate::ladder`], cell population in
//! [`crate::reconcile`].

use rustc_hash::FxHashMap;

use crate::{DisplayPrice, Volume};

/// Total rows in the ladder window.
pub const LADDER_ROWS: usize = 40;

/// Rows in each half-window (ask-anchored top, bid-anchored bottom).
pub const HALF_ROWS: usize = LADDER_ROWS / 2;

/// One ladder row. `None` cells render as empty.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    /// Tick-quantized displayed price; the row's identity.
    pub price: DisplayPrice,
    pub bid: Option<Volume>,
    pub ask: Option<Volume>,
    pub working: Option<Volume>,
    pub trade: Option<Volume>,
}

impl Row {
    /// A row with all quantity cells empty.
    pub fn empty(price: DisplayPrice) -> Self {
        Self {
            price,
            bid: None,
            ask: None,
            working: None,
            trade: None,
        }
    }

    /// True when every quantity cell is empty.
    pub fn is_blank(&self) -> bool {
        self.bid.is_none() && self.ask.is_none() && self.working.is_none() && self.trade.is_none()
    }
}

/// The ladder grid: a fixed-count window of price rows.
///
/// Empty until the first rebuild (no anchor exists yet); exactly
/// [`LADDER_ROWS`] rows afterwards. When a crossed book makes the two
/// half-windows overlap, duplicate prices resolve to the topmost row.
#[derive(Clone, Debug, Default)]
pub struct PriceGrid {
    rows: Vec<Row>,
    index: FxHashMap<DisplayPrice, usize>,
}

impl PriceGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// All rows, top (highest price) first.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// True until the first rebuild allocates rows.
    pub fn is_built(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Row with the given displayed price, if inside the window.
    pub fn row(&self, price: DisplayPrice) -> Option<&Row> {
        self.index.get(&price).map(|&i| &self.rows[i])
    }

    /// Mutable row lookup; misses mean the price is out of the visible range.
    pub fn row_mut(&mut self, price: DisplayPrice) -> Option<&mut Row> {
        self.index.get(&price).map(|&i| &mut self.rows[i])
    }

    /// Drop all rows and start a fresh allocation pass.
    pub(crate) fn clear(&mut self) {
        self.rows.clear();
        self.index.clear();
    }

    /// Append a blank row. The first row at a given price wins lookups.
    pub(crate) fn push_row(&mut self, price: DisplayPrice) {
        self.index.entry(price).or_insert(self.rows.len());
        self.rows.push(Row::empty(price));
    }

    /// Mutable view of all rows, for column-wide passes.
    pub(crate) fn rows_mut(&mut self) -> impl Iterator<Item = &mut Row> {
        self.rows.iter_mut()
    }
}
