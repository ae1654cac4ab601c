//! Trades and the bounded replay log.

use std::collections::VecDeque;

use crate::Volume;

/// A single trade print from the feed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trade {
    pub price: f64,
    pub volume: Volume,
}

impl Trade {
    pub fn new(price: f64, volume: Volume) -> Self {
        Self { price, volume }
    }
}

/// Default number of trades retained for replay.
pub const DEFAULT_TRADE_RETENTION: usize = 4096;

/// Append-only trade history, replayed against the grid on every rebuild.
///
/// Replay cost grows with history, so the log keeps a bounded retention
/// window: once full, the oldest trade is evicted per push. Evicted
/// trades stop contributing to rebuilt trade cells.
#[derive(Clone, Debug)]
pub struct TradeLog {
    trades: VecDeque<Trade>,
    retention: usize,
}

impl TradeLog {
    pub fn new() -> Self {
        Self::with_retention(DEFAULT_TRADE_RETENTION)
    }

    /// A log that keeps at most `retention` trades (minimum one).
    pub fn with_retention(retention: usize) -> Self {
        Self {
            trades: VecDeque::new(),
            retention: retention.max(1),
        }
    }

    /// Append a trade, evicting the oldest once the window is full.
    pub fn push(&mut self, trade: Trade) {
        if self.trades.len() == self.retention {
            self.trades.pop_front();
        }
        self.trades.push_back(trade);
    }

    /// Trades in arrival order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Trade> {
        self.trades.iter()
    }

    /// Most recent trade, if any.
    pub fn last(&self) -> Option<&Trade> {
        self.trades.back()
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }
}

impl Default for TradeLog {
    fn default() -> Self {
        Self::new()
    }
}
