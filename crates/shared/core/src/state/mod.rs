//! Host tick input
//!
//! Everything the host hands the engine for one tick. The engine reads it
//! and never mutates it.

mod observation;
mod trading_state;

pub use observation::{ConversionObservation, Observation};
pub use trading_state::TradingState;
