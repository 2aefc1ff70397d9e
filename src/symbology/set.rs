//! Per-counterparty symbol set
//!
//! Entries are keyed by exchange-native symbol, so translation toward the
//! counterparty is a direct lookup and the reverse direction is a linear
//! scan. That asymmetry is intentional: the mapping file reads
//! exchange-first, and mapped sets stay small (tens to low hundreds).

use std::collections::HashMap;

/// Symbol mappings for a single counterparty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolSet {
    /// Exchange-native symbol -> counterparty symbol
    entries: HashMap<String, String>,
    /// When set, entries are not consulted and symbols pass through verbatim
    passthrough: bool,
}

impl SymbolSet {
    /// Record a mapping, overwriting any earlier one for the same exchange symbol
    pub fn insert(&mut self, exchange: String, counterparty: String) {
        self.entries.insert(exchange, counterparty);
    }

    pub fn set_passthrough(&mut self) {
        self.passthrough = true;
    }

    #[inline]
    pub fn is_passthrough(&self) -> bool {
        self.passthrough
    }

    /// Keyed lookup: exchange symbol -> counterparty symbol
    #[inline]
    pub fn counterparty_symbol(&self, exchange_symbol: &str) -> Option<&str> {
        self.entries.get(exchange_symbol).map(String::as_str)
    }

    /// Reverse lookup: counterparty symbol -> exchange symbol (linear scan)
    #[inline]
    pub fn exchange_symbol(&self, counterparty_symbol: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, counterparty)| counterparty.as_str() == counterparty_symbol)
            .map(|(exchange, _)| exchange.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_both_directions() {
        let mut set = SymbolSet::default();
        set.insert("tBTCUSD".to_string(), "BXY".to_string());
        set.insert("tETHUSD".to_string(), "EXY".to_string());

        assert_eq!(set.counterparty_symbol("tBTCUSD"), Some("BXY"));
        assert_eq!(set.exchange_symbol("EXY"), Some("tETHUSD"));
        assert_eq!(set.counterparty_symbol("tXRPUSD"), None);
        assert_eq!(set.exchange_symbol("ZZZ"), None);
    }

    #[test]
    fn test_insert_overwrites() {
        let mut set = SymbolSet::default();
        set.insert("tBTCUSD".to_string(), "BXY".to_string());
        set.insert("tBTCUSD".to_string(), "XBT".to_string());

        assert_eq!(set.counterparty_symbol("tBTCUSD"), Some("XBT"));
        assert_eq!(set.exchange_symbol("BXY"), None);
    }

    #[test]
    fn test_passthrough_flag() {
        let mut set = SymbolSet::default();
        assert!(!set.is_passthrough());
        set.set_passthrough();
        assert!(set.is_passthrough());
    }
}
