//! Inbound message taxonomy: everything the feed can deliver to the engine.
//!
//! Messages arrive already parsed (the wire codec lives in the feed
//! crate); the engine dispatches on the variant and runs each handler to
//! completion before the next message.

use std::fmt;

use crate::{BookSnapshot, Position, SymbolConfig, Trade, VwapPair, WorkingOrder};

/// One inbound update, dispatched by the engine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Message {
    /// Full book replacement: re-anchor if needed, rebuild, replay.
    Book(BookSnapshot),
    /// One trade print: log it and reconcile it into the grid.
    Trade(Trade),
    /// Position replacement.
    Position(Position),
    /// Tick size replacement; display precision is re-derived.
    SymbolConfig(SymbolConfig),
    /// Wholesale working-order list replacement.
    WorkingOrders(Vec<WorkingOrder>),
    /// Externally computed VWAP per side.
    Vwap(VwapPair),
    /// Informational: channel subscription state.
    Subscription(SubscriptionStatus),
    /// Informational: venue connection state.
    System(SystemStatus),
    /// Informational: acknowledgement for a sent order command.
    OrderStatus(OrderStatus),
}

/// Subscription confirmation for one channel, display-only.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubscriptionStatus {
    pub channel_name: String,
    pub pair: String,
    pub status: String,
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.channel_name, self.pair, self.status)
    }
}

/// Venue connection state, display-only.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemStatus {
    pub event: String,
    pub status: String,
}

impl fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.event, self.status)
    }
}

/// Order acknowledgement from the venue, display-only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderStatus {
    pub status: String,
    pub descr: Option<String>,
    pub error_message: Option<String>,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} / {}",
            self.status,
            self.descr.as_deref().unwrap_or(""),
            self.error_message.as_deref().unwrap_or("")
        )
    }
}
