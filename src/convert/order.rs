//! v1 order record conversion
//!
//! The v1 API reports every numeric order field as a decimal string and the
//! lifecycle as a pair of booleans. Normalization parses straight into typed
//! fields: a numeric string that does not parse fails the whole conversion,
//! while unrecognized enumeration labels degrade to unset instead of
//! guessing a default.

use crate::core::order::{Order, OrderStatus, OrderType};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Order conversion errors
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("invalid numeric field {field}: {value:?}")]
    InvalidNumeric { field: &'static str, value: String },
}

impl NormalizeError {
    fn invalid(field: &'static str, value: &str) -> Self {
        Self::InvalidNumeric {
            field,
            value: value.to_string(),
        }
    }
}

/// Order record as the venue's v1 API reports it
///
/// v1 order format:
/// ```json
/// {
///   "id": 448411365,
///   "symbol": "tBTCUSD",
///   "price": "0.01",
///   "avg_execution_price": "0.0",
///   "side": "buy",
///   "type": "exchange limit",
///   "timestamp": "1444276597.0",
///   "is_live": true,
///   "is_cancelled": false,
///   "is_hidden": false,
///   "original_amount": "0.01",
///   "remaining_amount": "0.01"
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RawOrder {
    pub id: i64,
    pub symbol: String,
    #[serde(default)]
    pub is_hidden: bool,
    /// Epoch seconds with a fractional part, as a decimal string
    pub timestamp: String,
    pub price: String,
    pub avg_execution_price: String,
    /// `"buy"` or `"sell"`; anything else is treated as a buy
    #[serde(default)]
    pub side: String,
    pub original_amount: String,
    pub remaining_amount: String,
    #[serde(default)]
    pub is_live: bool,
    #[serde(default)]
    pub is_cancelled: bool,
    #[serde(default, rename = "type")]
    pub order_type: String,
}

fn decimal_field(field: &'static str, value: &str) -> Result<Decimal, NormalizeError> {
    value
        .parse::<Decimal>()
        .map_err(|_| NormalizeError::invalid(field, value))
}

/// Convert a v1 order record into a canonical order
///
/// The v1 format carries a single timestamp, so creation and last-update
/// times come out equal. Fails on the first numeric field that does not
/// parse; no partial order is produced.
pub fn normalize(raw: &RawOrder) -> Result<Order, NormalizeError> {
    let timestamp = decimal_field("timestamp", &raw.timestamp)?
        .trunc()
        .to_i64()
        .ok_or_else(|| NormalizeError::invalid("timestamp", &raw.timestamp))?;

    let price = decimal_field("price", &raw.price)?;
    let avg_execution_price = decimal_field("avg_execution_price", &raw.avg_execution_price)?;
    let amount_orig = decimal_field("original_amount", &raw.original_amount)?;
    let remaining = decimal_field("remaining_amount", &raw.remaining_amount)?;

    // Canceled wins over live; any other combination stays unset
    let status = if raw.is_cancelled {
        Some(OrderStatus::Canceled)
    } else if raw.is_live {
        Some(OrderStatus::Active)
    } else {
        None
    };

    // Unrecognized sides count as buys
    let amount = if raw.side == "sell" {
        -remaining
    } else {
        remaining
    };

    let order_type = match raw.order_type.as_str() {
        "market" => Some(OrderType::Market),
        "limit" => Some(OrderType::Limit),
        "exchange limit" => Some(OrderType::ExchangeLimit),
        "stop" => Some(OrderType::Stop),
        "trailing-stop" => Some(OrderType::TrailingStop),
        _ => None,
    };

    Ok(Order {
        id: raw.id,
        symbol: raw.symbol.clone(),
        hidden: raw.is_hidden,
        created_at: timestamp,
        updated_at: timestamp,
        price,
        avg_execution_price,
        amount,
        amount_orig,
        status,
        order_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const V1_ORDER: &str = r#"{
        "id": 448411365,
        "symbol": "tBTCUSD",
        "exchange": "main",
        "price": "250.75",
        "avg_execution_price": "0.0",
        "side": "sell",
        "type": "exchange limit",
        "timestamp": "1444276597.252370982",
        "is_live": true,
        "is_cancelled": false,
        "is_hidden": false,
        "was_forced": false,
        "original_amount": "2.0",
        "remaining_amount": "1.5",
        "executed_amount": "0.5"
    }"#;

    fn raw() -> RawOrder {
        serde_json::from_str(V1_ORDER).unwrap()
    }

    #[test]
    fn test_normalize_v1_record() {
        let order = normalize(&raw()).unwrap();
        assert_eq!(order.id, 448411365);
        assert_eq!(order.symbol, "tBTCUSD");
        assert!(!order.hidden);
        assert_eq!(order.price, "250.75".parse::<Decimal>().unwrap());
        assert_eq!(order.avg_execution_price, Decimal::ZERO);
        assert_eq!(order.amount_orig, "2.0".parse::<Decimal>().unwrap());
        assert_eq!(order.status, Some(OrderStatus::Active));
        assert_eq!(order.order_type, Some(OrderType::ExchangeLimit));
    }

    #[test]
    fn test_timestamp_truncated_and_duplicated() {
        let order = normalize(&raw()).unwrap();
        assert_eq!(order.created_at, 1444276597);
        assert_eq!(order.updated_at, order.created_at);
    }

    #[test]
    fn test_sell_negates_remaining_amount() {
        let order = normalize(&raw()).unwrap();
        assert_eq!(order.amount, "-1.5".parse::<Decimal>().unwrap());
        assert!(order.is_sell());
    }

    #[test]
    fn test_buy_and_unrecognized_sides_stay_positive() {
        for side in ["buy", "", "Sell", "short"] {
            let mut record = raw();
            record.side = side.to_string();
            let order = normalize(&record).unwrap();
            assert_eq!(order.amount, "1.5".parse::<Decimal>().unwrap(), "side {side:?}");
        }
    }

    #[test]
    fn test_canceled_wins_over_live() {
        let mut record = raw();
        record.is_cancelled = true;
        assert_eq!(
            normalize(&record).unwrap().status,
            Some(OrderStatus::Canceled)
        );
    }

    #[test]
    fn test_neither_canceled_nor_live_is_unset() {
        let mut record = raw();
        record.is_live = false;
        assert_eq!(normalize(&record).unwrap().status, None);
    }

    #[test]
    fn test_order_type_labels() {
        let cases = [
            ("market", Some(OrderType::Market)),
            ("limit", Some(OrderType::Limit)),
            ("exchange limit", Some(OrderType::ExchangeLimit)),
            ("stop", Some(OrderType::Stop)),
            ("trailing-stop", Some(OrderType::TrailingStop)),
            ("exchange stop", None),
            ("", None),
        ];
        for (label, expected) in cases {
            let mut record = raw();
            record.order_type = label.to_string();
            assert_eq!(normalize(&record).unwrap().order_type, expected, "type {label:?}");
        }
    }

    #[test]
    fn test_unparseable_price_fails_whole_conversion() {
        let mut record = raw();
        record.price = "not-a-price".to_string();
        match normalize(&record) {
            Err(NormalizeError::InvalidNumeric { field, value }) => {
                assert_eq!(field, "price");
                assert_eq!(value, "not-a-price");
            }
            other => panic!("expected InvalidNumeric, got {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_timestamp_fails() {
        let mut record = raw();
        record.timestamp = "yesterday".to_string();
        assert!(normalize(&record).is_err());
    }

    #[test]
    fn test_missing_optional_flags_default() {
        let minimal = r#"{
            "id": 1,
            "symbol": "tETHUSD",
            "price": "1800.0",
            "avg_execution_price": "0.0",
            "timestamp": "1444276597.0",
            "original_amount": "1.0",
            "remaining_amount": "1.0"
        }"#;
        let record: RawOrder = serde_json::from_str(minimal).unwrap();
        let order = normalize(&record).unwrap();
        assert_eq!(order.status, None);
        assert_eq!(order.order_type, None);
        assert!(!order.hidden);
        assert!(!order.is_sell());
    }
}
