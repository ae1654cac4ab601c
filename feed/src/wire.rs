//! Wire-format payload shapes, one per topic tag.

use serde::Deserialize;

/// First pass over any frame: just the topic tag.
#[derive(Debug, Deserialize)]
pub(crate) struct TopicProbe {
    pub topic: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireQuote {
    pub price: f64,
    pub volume: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireBook {
    pub bids: Vec<WireQuote>,
    pub asks: Vec<WireQuote>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireTrade {
    pub price: f64,
    pub volume: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WirePosition {
    pub qty: f64,
    pub avg_price: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireSymbolConfig {
    pub tick_size: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireWorkingOrder {
    pub order_id: String,
    pub side: String,
    pub price: f64,
    pub qty: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireWorkingOrders {
    pub orders: Vec<WireWorkingOrder>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireVwap {
    pub ask: WireQuote,
    pub bid: WireQuote,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireSubscription {
    pub channel_name: String,
    pub pair: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireSystem {
    pub event: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireOrderStatus {
    pub status: String,
    #[serde(default)]
    pub descr: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}
