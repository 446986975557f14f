//! Meridian Strategy
//!
//! The decision logic of the per-tick quoting engine:
//! - Fair value estimation (constant and autoregressive)
//! - Quote generation (market taking, then market making)
//! - Position guard (symmetric per-instrument limit)
//! - Lag history carried between ticks in an opaque blob
//!
//! ## Per-tick flow
//!
//! ```text
//!   OrderBookSnapshot ──┐
//!                       ▼
//!   LagBuffer ───► FairValueEstimator ──fair──► QuoteGenerator ───► Vec<Order>
//!       ▲                                            │
//!       │                                      PositionGuard
//!       └──────── TraderState (encode/decode) ◄──────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use meridian_strategy::{FairValueModel, ProductStrategy, QuoteParams, TakeSizing};
//!
//! let strategy = ProductStrategy::new(
//!     Instrument::new("AMETHYSTS", 20),
//!     FairValueModel::constant(dec!(10000)),
//!     QuoteParams::default(),
//!     TakeSizing::Resting,
//! );
//! let orders = strategy.on_tick(&book, position, &mut history);
//! ```

pub mod error;
pub mod fair_value;
pub mod guard;
pub mod lag_buffer;
pub mod persistence;
pub mod product;
pub mod quoting;

// Re-export main types
pub use error::{Result, StateError};
pub use fair_value::{
    ArCoefficients, AutoregressiveFairValue, ConstantFairValue, FairValueEstimator,
    FairValueModel,
};
pub use guard::{Capacity, PositionGuard};
pub use lag_buffer::{LAG_DEPTH, LagBuffer};
pub use persistence::TraderState;
pub use product::ProductStrategy;
pub use quoting::{QuoteGenerator, QuoteParams, TakeSizing};
