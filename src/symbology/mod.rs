//! Counterparty symbol translation
//!
//! Each connected counterparty names instruments its own way. The mapping
//! between exchange-native symbols and counterparty symbols is loaded once
//! from a line-oriented file and queried on the hot path for every message
//! that carries a symbol.

mod set;
mod table;

pub use table::{Symbology, SymbologyError};
