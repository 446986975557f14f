//! Per-instrument strategy
//!
//! Binds an instrument to its fair value model and quoting widths, and runs
//! estimate -> generate -> guard check for one tick.

use log::{debug, warn};
use meridian_core::{Instrument, Order, OrderBookSnapshot, Quantity};
use rust_decimal::Decimal;

use crate::fair_value::{FairValueEstimator, FairValueModel};
use crate::guard::PositionGuard;
use crate::lag_buffer::{LAG_DEPTH, LagBuffer};
use crate::quoting::{QuoteGenerator, QuoteParams, TakeSizing};

/// Fair value model plus quoting rules for one instrument
#[derive(Debug, Clone)]
pub struct ProductStrategy {
    instrument: Instrument,
    model: FairValueModel,
    generator: QuoteGenerator,
    guard: PositionGuard,
}

impl ProductStrategy {
    pub fn new(
        instrument: Instrument,
        model: FairValueModel,
        params: QuoteParams,
        sizing: TakeSizing,
    ) -> Self {
        let guard = PositionGuard::from(&instrument);
        Self {
            instrument,
            model,
            generator: QuoteGenerator::new(params, sizing),
            guard,
        }
    }

    pub fn instrument(&self) -> &Instrument {
        &self.instrument
    }

    pub fn symbol(&self) -> &str {
        &self.instrument.symbol
    }

    pub fn model(&self) -> &FairValueModel {
        &self.model
    }

    pub fn guard(&self) -> &PositionGuard {
        &self.guard
    }

    /// Whether this instrument carries lag history between ticks
    pub fn needs_history(&self) -> bool {
        self.model.needs_history()
    }

    /// Estimate fair value, recording into `history` where the model needs it
    pub fn fair_value(&self, book: &OrderBookSnapshot, history: &mut LagBuffer) -> Option<Decimal> {
        self.model.estimate(book, history)
    }

    /// Run one tick for this instrument
    ///
    /// Returns `None` when the fair value is unavailable (cold start), in
    /// which case nothing is quoted. Otherwise returns the orders to submit,
    /// possibly empty.
    pub fn on_tick(
        &self,
        book: &OrderBookSnapshot,
        position: Quantity,
        history: &mut LagBuffer,
    ) -> Option<Vec<Order>> {
        let symbol = self.symbol();

        let Some(fair) = self.fair_value(book, history) else {
            debug!(
                "[{}] Fair value unavailable ({}/{} lags), skipping",
                symbol,
                history.len(),
                LAG_DEPTH
            );
            return None;
        };

        let orders = self
            .generator
            .generate(symbol, fair, book, position, &self.guard);

        if !self.guard.admits(position, &orders) {
            let (long, short) = self.guard.worst_case(position, &orders);
            warn!(
                "[{}] Orders may breach position limit ±{}: worst case long={} short={} (pos={})",
                symbol,
                self.guard.limit(),
                long,
                short,
                position
            );
        }

        debug!(
            "[{}] {} fair={:.2} pos={} orders={}",
            symbol,
            self.model.name(),
            fair,
            position,
            orders.len()
        );

        Some(orders)
    }
}
