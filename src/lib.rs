//! Translation layer for a FIX-to-exchange trading bridge
//!
//! Two responsibilities:
//! - **symbology**: bidirectional, counterparty-scoped symbol translation,
//!   loaded once from a mapping file and queried concurrently on the hot path
//! - **convert**: normalization of the venue's loosely-typed v1 order records
//!   into the bridge's canonical order representation
//!
//! Transport, session handling and message framing live in the surrounding
//! gateway, not here.
//!
//! ```no_run
//! use fix_bridge::{Config, Symbology};
//!
//! fn main() -> fix_bridge::Result<()> {
//!     let config = Config::load()?;
//!     let symbology = Symbology::load(&config.symbology.mapping_file)?;
//!     let native = symbology.to_exchange("BXY", "Bloomberg")?;
//!     println!("{native}");
//!     Ok(())
//! }
//! ```

pub mod convert;
pub mod core;
pub mod infrastructure;
pub mod symbology;

// Re-export commonly used types
pub use crate::convert::{normalize, NormalizeError, RawOrder};
pub use crate::core::order::{Order, OrderStatus, OrderType};
pub use crate::infrastructure::config::{Config, ConfigError, SymbologyConfig};
pub use crate::symbology::{Symbology, SymbologyError};

use thiserror::Error;

/// Main error type for the bridge
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("symbology error: {0}")]
    Symbology(#[from] SymbologyError),

    #[error("order conversion error: {0}")]
    Normalize(#[from] NormalizeError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, BridgeError>;
