//! Outbound commands to the order-management collaborator.
//!
//! The engine never emits these on its own; it only supplies the
//! price and order-id lookups a UI gesture needs to build one.

use crate::Side;

/// A command for the order port to encode and send.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Cancel the working order with this venue id.
    CancelOrder { order_id: String },
    /// Place a single limit order at a displayed ladder price.
    NewOrderSingle { side: Side, price: f64 },
}
