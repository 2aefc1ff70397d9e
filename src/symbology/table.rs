//! Counterparty symbology table
//!
//! Parses a line-oriented mapping file into per-counterparty symbol sets and
//! answers translation queries in both directions behind one exclusive lock.
//!
//! Mapping file format:
//! ```text
//! [Bloomberg]
//! tBTCUSD=BXY
//!
//! [Reuters]
//! passthrough=true
//! ```
//! L-values are exchange-native symbols, R-values are counterparty symbols.
//! `passthrough=true` (case-insensitive) marks the whole section as
//! untranslated. Lines that are neither a header nor a single `key=value`
//! pair are skipped; the file is human-edited and stray lines must not take
//! the gateway down.

use super::set::SymbolSet;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Symbology errors
///
/// The two `Unknown*` variants are normal lookup outcomes, not faults: the
/// caller decides whether to reject or reroute the affected message.
#[derive(Debug, Error)]
pub enum SymbologyError {
    /// Mapping file missing or unreadable (fatal at construction)
    #[error("failed to read symbology file: {0}")]
    Io(#[from] std::io::Error),

    /// No symbol set configured for the counterparty
    #[error("could not find counterparty: {counterparty}")]
    UnknownCounterparty { counterparty: String },

    /// The counterparty exists but has no mapping for the symbol
    #[error("could not find symbol {symbol:?} for counterparty {counterparty:?}")]
    UnknownSymbol { symbol: String, counterparty: String },
}

/// Accumulates sections while mapping text is parsed.
///
/// The current-section cursor lives here and only here, so the finished
/// [`Symbology`] carries no parse state.
#[derive(Default)]
struct Builder {
    section: Option<String>,
    counterparties: HashMap<String, SymbolSet>,
}

impl Builder {
    fn feed(&mut self, line: &str) {
        if let Some(name) = section_header(line) {
            // A header alone declares the counterparty, even with no entries
            self.counterparties.entry(name.to_string()).or_default();
            self.section = Some(name.to_string());
            return;
        }

        // Entries before the first header have no section to attach to
        let section = match &self.section {
            Some(section) => section,
            None => return,
        };
        let (key, value) = match mapping_entry(line) {
            Some(entry) => entry,
            None => return,
        };

        if let Some(set) = self.counterparties.get_mut(section) {
            if key.eq_ignore_ascii_case("passthrough") && value.eq_ignore_ascii_case("true") {
                set.set_passthrough();
            } else {
                set.insert(key.to_string(), value.to_string());
            }
        }
    }

    fn finish(self) -> Symbology {
        Symbology {
            counterparties: Mutex::new(self.counterparties),
        }
    }
}

/// `[<name>]` alone on a line, non-empty name
fn section_header(line: &str) -> Option<&str> {
    let name = line.strip_prefix('[')?.strip_suffix(']')?;
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// `<key>=<value>` with exactly one `=`
fn mapping_entry(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    if value.contains('=') {
        return None;
    }
    Some((key, value))
}

/// Counterparty symbology table
///
/// Built once from a mapping file, then shared read-only between protocol
/// handlers. Both query directions serialize through one exclusive lock
/// held for the whole lookup; a configuration reload is a fresh instance,
/// never an in-place mutation visible to concurrent readers.
pub struct Symbology {
    counterparties: Mutex<HashMap<String, SymbolSet>>,
}

impl Symbology {
    /// Load a symbology table from a mapping file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read. Malformed lines inside
    /// the file are skipped, not rejected.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SymbologyError> {
        let text = std::fs::read_to_string(path)?;
        let table = Self::parse(&text);
        tracing::info!(
            "symbology loaded: {} counterparties",
            table.counterparties.lock().len()
        );
        Ok(table)
    }

    /// Parse a symbology table from mapping text
    ///
    /// Single sequential pass, one line at a time. Never fails: lines the
    /// grammar does not recognize are dropped.
    pub fn parse(text: &str) -> Self {
        let mut builder = Builder::default();
        for line in text.lines() {
            builder.feed(line);
        }
        builder.finish()
    }

    /// Translate a counterparty symbol into the exchange-native symbol
    ///
    /// Linear scan over the counterparty's entries: the set is keyed by
    /// exchange symbol, so this direction is O(n) in the symbols mapped for
    /// that counterparty.
    pub fn to_exchange(&self, symbol: &str, counterparty: &str) -> Result<String, SymbologyError> {
        let counterparties = self.counterparties.lock();
        let set = match counterparties.get(counterparty) {
            Some(set) => set,
            None => {
                tracing::warn!("could not find counterparty: {}", counterparty);
                return Err(SymbologyError::UnknownCounterparty {
                    counterparty: counterparty.to_string(),
                });
            }
        };
        if set.is_passthrough() {
            return Ok(symbol.to_string());
        }
        match set.exchange_symbol(symbol) {
            Some(exchange) => Ok(exchange.to_string()),
            None => {
                tracing::warn!(
                    "could not find exchange symbol mapping {:?} for counterparty {:?}",
                    symbol,
                    counterparty
                );
                Err(SymbologyError::UnknownSymbol {
                    symbol: symbol.to_string(),
                    counterparty: counterparty.to_string(),
                })
            }
        }
    }

    /// Translate an exchange-native symbol into the counterparty's symbol
    ///
    /// Direct keyed lookup, O(1) after the counterparty lookup.
    pub fn to_counterparty(
        &self,
        symbol: &str,
        counterparty: &str,
    ) -> Result<String, SymbologyError> {
        let counterparties = self.counterparties.lock();
        let set = match counterparties.get(counterparty) {
            Some(set) => set,
            None => {
                tracing::warn!("could not find counterparty: {}", counterparty);
                return Err(SymbologyError::UnknownCounterparty {
                    counterparty: counterparty.to_string(),
                });
            }
        };
        if set.is_passthrough() {
            return Ok(symbol.to_string());
        }
        match set.counterparty_symbol(symbol) {
            Some(mapped) => Ok(mapped.to_string()),
            None => {
                tracing::warn!(
                    "could not find symbol {:?} for counterparty {:?}",
                    symbol,
                    counterparty
                );
                Err(SymbologyError::UnknownSymbol {
                    symbol: symbol.to_string(),
                    counterparty: counterparty.to_string(),
                })
            }
        }
    }
}
