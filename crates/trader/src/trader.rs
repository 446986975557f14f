//! Trader - the per-tick entry point
//!
//! Decodes the carried blob, runs every configured instrument's strategy
//! against this tick's book and position, and re-encodes the blob for the
//! host to hand back next tick. The trader itself holds only configuration;
//! all history lives in the blob, so any tick can be replayed from
//! `(TradingState, previous blob)` alone.

use log::{debug, warn};
use meridian_core::{Instrument, Order, Symbol, TradingState};
use meridian_strategy::{LagBuffer, ProductStrategy, TraderState};
use std::collections::HashMap;

use crate::config::{ConfigError, TraderConfig};
use crate::recorder::{NullRecorder, TickRecord, TickRecorder};

/// Everything returned to the host for one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutput {
    /// Orders per instrument; instruments not quoted this tick are absent
    pub orders: HashMap<Symbol, Vec<Order>>,
    pub conversions: i64,
    /// Blob to be handed back on the next tick
    pub trader_data: String,
}

impl TickOutput {
    /// Orders for an instrument (empty if none)
    pub fn orders_for(&self, symbol: &str) -> &[Order] {
        self.orders.get(symbol).map(Vec::as_slice).unwrap_or_default()
    }

    /// Total number of orders across instruments
    pub fn order_count(&self) -> usize {
        self.orders.values().map(Vec::len).sum()
    }
}

/// Per-tick decision engine across all configured instruments
#[derive(Debug, Clone)]
pub struct Trader {
    /// Quoted instruments, in configuration order
    strategies: Vec<ProductStrategy>,
    /// Instruments with a limit but no fair value model
    tracked: Vec<Instrument>,
    conversions: i64,
}

impl Trader {
    /// Build a trader from a validated configuration
    pub fn new(config: TraderConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let tracked = config
            .instruments
            .iter()
            .filter(|i| i.fair_value.is_none())
            .map(|i| i.instrument())
            .collect();

        Ok(Self {
            strategies: config.strategies(),
            tracked,
            conversions: config.conversions,
        })
    }

    /// Build a trader directly from strategies
    pub fn from_strategies(strategies: Vec<ProductStrategy>, conversions: i64) -> Self {
        Self {
            strategies,
            tracked: Vec::new(),
            conversions,
        }
    }

    pub fn strategies(&self) -> &[ProductStrategy] {
        &self.strategies
    }

    pub fn conversions(&self) -> i64 {
        self.conversions
    }

    /// Run one tick without a recorder
    pub fn run(&self, state: &TradingState) -> TickOutput {
        self.run_recorded(state, &mut NullRecorder)
    }

    /// Run one tick and mirror the result to `recorder`
    pub fn run_recorded(&self, state: &TradingState, recorder: &mut dyn TickRecorder) -> TickOutput {
        let mut carried = TraderState::restore(&state.trader_data);
        carried.retain(|symbol| self.carries_history(symbol));

        let mut orders = HashMap::new();
        for strategy in &self.strategies {
            let symbol = strategy.symbol();
            let Some(book) = state.book(symbol) else {
                debug!("[{}] No book this tick", symbol);
                continue;
            };
            let position = state.position(symbol);

            let quoted = if strategy.needs_history() {
                strategy.on_tick(book, position, carried.history_mut(symbol))
            } else {
                strategy.on_tick(book, position, &mut LagBuffer::new())
            };

            if let Some(symbol_orders) = quoted {
                orders.insert(symbol.to_string(), symbol_orders);
            }
        }

        for instrument in &self.tracked {
            if state.book(&instrument.symbol).is_some() {
                debug!("[{}] No fair value model, not quoting", instrument.symbol);
            }
        }

        let trader_data = match carried.encode() {
            Ok(blob) => blob,
            Err(e) => {
                warn!("Failed to encode trader state, next tick starts cold: {}", e);
                String::new()
            }
        };

        let output = TickOutput {
            orders,
            conversions: self.conversions,
            trader_data,
        };

        recorder.record(&TickRecord {
            state,
            orders: &output.orders,
            conversions: output.conversions,
            trader_data: &output.trader_data,
        });

        output
    }

    fn carries_history(&self, symbol: &str) -> bool {
        self.strategies
            .iter()
            .any(|s| s.symbol() == symbol && s.needs_history())
    }
}
