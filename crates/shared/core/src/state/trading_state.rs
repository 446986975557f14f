use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Observation;
use crate::book::OrderBookSnapshot;
use crate::values::{Quantity, Symbol, Timestamp};

/// Snapshot of everything the host provides for one tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradingState {
    pub timestamp: Timestamp,
    /// Opaque blob returned by the engine on the previous tick (may be empty)
    #[serde(default)]
    pub trader_data: String,
    /// Order book per instrument
    #[serde(default)]
    pub order_depths: HashMap<Symbol, OrderBookSnapshot>,
    /// Signed position per instrument; absent means flat
    #[serde(default)]
    pub position: HashMap<Symbol, Quantity>,
    #[serde(default)]
    pub observations: Observation,
}

impl TradingState {
    /// Create an empty state for a tick
    pub fn new(timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            ..Default::default()
        }
    }

    /// Attach the previous tick's blob
    pub fn with_trader_data(mut self, trader_data: impl Into<String>) -> Self {
        self.trader_data = trader_data.into();
        self
    }

    /// Add a book for an instrument
    pub fn with_book(mut self, symbol: impl Into<Symbol>, book: OrderBookSnapshot) -> Self {
        self.order_depths.insert(symbol.into(), book);
        self
    }

    /// Set the current position for an instrument
    pub fn with_position(mut self, symbol: impl Into<Symbol>, position: Quantity) -> Self {
        self.position.insert(symbol.into(), position);
        self
    }

    /// Get the book for an instrument
    pub fn book(&self, symbol: &str) -> Option<&OrderBookSnapshot> {
        self.order_depths.get(symbol)
    }

    /// Get the position for an instrument (0 if none)
    pub fn position(&self, symbol: &str) -> Quantity {
        self.position.get(symbol).copied().unwrap_or_default()
    }
}
