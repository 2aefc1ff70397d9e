//! Canonical order model
//!
//! The unified internal order representation used by the bridge. The side of
//! an order is encoded in the sign of `amount`: negative means sell.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order lifecycle status
///
/// Only the states the v1 feed can express are modeled. Orders in any other
/// lifecycle state carry no status at all (`Option::None` on [`Order`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order is live on the book
    Active,
    /// Order was canceled (terminal)
    Canceled,
}

/// Order execution type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Market,
    Limit,
    ExchangeLimit,
    Stop,
    TrailingStop,
}

/// Canonical order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Venue-assigned order identifier
    pub id: i64,
    /// Exchange-native instrument symbol
    pub symbol: String,
    /// Hidden order flag
    pub hidden: bool,
    /// Creation timestamp (epoch seconds)
    pub created_at: i64,
    /// Last-update timestamp (epoch seconds)
    pub updated_at: i64,
    /// Limit price
    pub price: Decimal,
    /// Average execution price
    pub avg_execution_price: Decimal,
    /// Remaining quantity, signed (negative = sell)
    pub amount: Decimal,
    /// Original quantity as submitted
    pub amount_orig: Decimal,
    /// Lifecycle status, unset when the source state is unrecognized
    pub status: Option<OrderStatus>,
    /// Execution type, unset when the source label is unrecognized
    pub order_type: Option<OrderType>,
}

impl Order {
    /// Returns true if the signed remaining quantity encodes a sell
    #[inline]
    pub fn is_sell(&self) -> bool {
        self.amount.is_sign_negative()
    }
}
