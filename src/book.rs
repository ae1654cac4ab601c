//! Book snapshots and quotes as delivered by the feed.

use crate::{Side, Volume};

/// A single price level as quoted by the feed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quote {
    pub price: f64,
    pub volume: Volume,
}

impl Quote {
    pub fn new(price: f64, volume: Volume) -> Self {
        Self { price, volume }
    }
}

/// A full order-book snapshot.
///
/// Bids are ordered best (highest) first, asks best (lowest) first.
/// Every book message replaces the previous snapshot wholesale; there is
/// no incremental diffing at this layer.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookSnapshot {
    pub bids: Vec<Quote>,
    pub asks: Vec<Quote>,
}

impl BookSnapshot {
    pub fn new(bids: Vec<Quote>, asks: Vec<Quote>) -> Self {
        Self { bids, asks }
    }

    /// Highest bid price, scanning the whole side rather than trusting order.
    pub fn best_bid(&self) -> Option<f64> {
        self.bids.iter().map(|q| q.price).reduce(f64::max)
    }

    /// Lowest ask price, scanning the whole side rather than trusting order.
    pub fn best_ask(&self) -> Option<f64> {
        self.asks.iter().map(|q| q.price).reduce(f64::min)
    }

    /// Quotes for one side, best first.
    pub fn side(&self, side: Side) -> &[Quote] {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    /// Bid level at depth `i` (0 = touch).
    pub fn bid_level(&self, i: usize) -> Option<&Quote> {
        self.bids.get(i)
    }

    /// Ask level at depth `i` (0 = touch).
    pub fn ask_level(&self, i: usize) -> Option<&Quote> {
        self.asks.get(i)
    }

    /// The quote with the most resting volume on a side, if any.
    pub fn max_volume_quote(&self, side: Side) -> Option<&Quote> {
        self.side(side)
            .iter()
            .max_by(|a, b| a.volume.total_cmp(&b.volume))
    }

    /// Total resting volume across all levels of a side.
    pub fn total_volume(&self, side: Side) -> Volume {
        self.side(side).iter().map(|q| q.volume).sum()
    }
}

/// Externally supplied VWAP quotes, one per side.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VwapPair {
    pub ask: Quote,
    pub bid: Quote,
}
