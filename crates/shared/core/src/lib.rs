//! Meridian Core Domain
//!
//! Pure domain types for the Meridian quoting engine.
//! This crate contains no I/O and no mutable state, and is 100% unit testable.

pub mod book;
pub mod entities;
pub mod instruments;
pub mod state;
pub mod values;

// Re-export commonly used types at crate root
pub use book::{OrderBookSnapshot, PriceLevel};
pub use entities::{Order, Side};
pub use instruments::Instrument;
pub use state::{ConversionObservation, Observation, TradingState};
pub use values::{Price, Quantity, Symbol, Timestamp, Volume};
