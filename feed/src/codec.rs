//! Topic-tagged JSON codec: frames in, commands out.

use log::warn;
use serde_json::json;

use ladderbook::{
    BookSnapshot, Command, Message, OrderStatus, Position, Quote, Side, SubscriptionStatus,
    SymbolConfig, SystemStatus, Trade, VwapPair, WorkingOrder,
};

use crate::error::FeedError;
use crate::wire::*;

/// Decode one inbound frame into an engine message.
///
/// Frames are JSON objects carrying a `topic` tag plus a topic-specific
/// payload. An unrecognized tag is logged and reported as
/// [`FeedError::UnknownTopic`]; the caller drops the frame.
pub fn decode_message(raw: &str) -> Result<Message, FeedError> {
    let probe: TopicProbe = serde_json::from_str(raw)?;
    match probe.topic.as_str() {
        "book" => {
            let wire: WireBook = serde_json::from_str(raw)?;
            Ok(Message::Book(BookSnapshot::new(
                wire.bids.into_iter().map(quote).collect(),
                wire.asks.into_iter().map(quote).collect(),
            )))
        }
        "trade" => {
            let wire: WireTrade = serde_json::from_str(raw)?;
            Ok(Message::Trade(Trade::new(wire.price, wire.volume)))
        }
        "position" => {
            let wire: WirePosition = serde_json::from_str(raw)?;
            Ok(Message::Position(Position::new(wire.qty, wire.avg_price)))
        }
        "symbol_config" => {
            let wire: WireSymbolConfig = serde_json::from_str(raw)?;
            Ok(Message::SymbolConfig(SymbolConfig::new(wire.tick_size)))
        }
        "working_orders" => {
            let wire: WireWorkingOrders = serde_json::from_str(raw)?;
            let orders = wire
                .orders
                .into_iter()
                .map(|o| {
                    Ok(WorkingOrder::new(
                        o.order_id,
                        side_from_tag(&o.side)?,
                        o.price,
                        o.qty,
                    ))
                })
                .collect::<Result<Vec<_>, FeedError>>()?;
            Ok(Message::WorkingOrders(orders))
        }
        "vwap" => {
            let wire: WireVwap = serde_json::from_str(raw)?;
            Ok(Message::Vwap(VwapPair {
                ask: quote(wire.ask),
                bid: quote(wire.bid),
            }))
        }
        "subscription_status" => {
            let wire: WireSubscription = serde_json::from_str(raw)?;
            Ok(Message::Subscription(SubscriptionStatus {
                channel_name: wire.channel_name,
                pair: wire.pair,
                status: wire.status,
            }))
        }
        "system_status" => {
            let wire: WireSystem = serde_json::from_str(raw)?;
            Ok(Message::System(SystemStatus {
                event: wire.event,
                status: wire.status,
            }))
        }
        "order_status" => {
            let wire: WireOrderStatus = serde_json::from_str(raw)?;
            Ok(Message::OrderStatus(OrderStatus {
                status: wire.status,
                descr: wire.descr,
                error_message: wire.error_message,
            }))
        }
        other => {
            warn!("unknown topic: {other}");
            Err(FeedError::UnknownTopic(other.to_string()))
        }
    }
}

/// Encode an outbound command as a topic-tagged JSON frame.
pub fn encode_command(command: &Command) -> String {
    match command {
        Command::CancelOrder { order_id } => json!({
            "topic": "cancel_order",
            "order_id": order_id,
        })
        .to_string(),
        Command::NewOrderSingle { side, price } => json!({
            "topic": "new_order_single",
            "side": side_tag(*side),
            "price": price,
        })
        .to_string(),
    }
}

fn quote(wire: WireQuote) -> Quote {
    Quote::new(wire.price, wire.volume)
}

fn side_from_tag(tag: &str) -> Result<Side, FeedError> {
    match tag {
        "b" => Ok(Side::Buy),
        "s" => Ok(Side::Sell),
        other => Err(FeedError::InvalidSide(other.to_string())),
    }
}

fn side_tag(side: Side) -> &'static str {
    match side {
        Side::Buy => "b",
        Side::Sell => "s",
    }
}
