//! Meridian Trader
//!
//! Host-facing entry point of the quoting engine. Each tick the host calls
//! [`Trader::run`] with a [`TradingState`](meridian_core::TradingState) and
//! gets back the orders per instrument, the conversions value and the blob
//! to pass back on the next tick.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use meridian_trader::{Trader, load_default_config};
//!
//! let trader = Trader::new(load_default_config()?)?;
//! let output = trader.run(&state);
//! next_state.trader_data = output.trader_data;
//! ```

pub mod config;
pub mod recorder;
pub mod trader;

pub use config::{
    ConfigError, InstrumentConfig, TraderConfig, load_config, load_config_from_str,
    load_default_config,
};
pub use recorder::{LogRecorder, MemoryRecorder, NullRecorder, RecordedTick, TickRecord, TickRecorder};
pub use trader::{TickOutput, Trader};
