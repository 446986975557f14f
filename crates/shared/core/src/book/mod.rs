//! Per-tick order book view
//!
//! The host hands the engine a fresh snapshot of every instrument's book
//! each tick. Snapshots are read-only; nothing here tracks deltas.

mod snapshot;

pub use snapshot::{OrderBookSnapshot, PriceLevel};
