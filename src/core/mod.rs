//! Core types shared across the bridge
//!
//! This module contains the canonical order model the rest of the gateway
//! consumes, independent of any single venue wire format.

pub mod order;

pub use order::{Order, OrderStatus, OrderType};
