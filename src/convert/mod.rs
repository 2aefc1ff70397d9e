//! Venue order normalization
//!
//! Converts order records from the venue's v1 API into the canonical
//! [`Order`](crate::core::order::Order) the rest of the bridge consumes.

mod order;

pub use order::{normalize, NormalizeError, RawOrder};
