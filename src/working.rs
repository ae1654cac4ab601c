//! Working orders: the trader's resting, unfilled orders.

use crate::{Side, SymbolConfig, Volume};

/// One resting order belonging to the local trader.
///
/// The full list is replaced wholesale on every working-orders message;
/// there is no per-order merging.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkingOrder {
    pub order_id: String,
    pub side: Side,
    pub price: f64,
    pub qty: Volume,
}

impl WorkingOrder {
    pub fn new(order_id: impl Into<String>, side: Side, price: f64, qty: Volume) -> Self {
        Self {
            order_id: order_id.into(),
            side,
            price,
            qty,
        }
    }
}

/// One `Working: qty @ price` description per order, in input order.
pub fn working_lines(orders: &[WorkingOrder], config: &SymbolConfig) -> Vec<String> {
    orders
        .iter()
        .map(|o| format!("Working: {:.5} @ {}", o.qty, config.format_raw(o.price)))
        .collect()
}
