//! Tick Recorder
//!
//! Optional debug sink mirroring each tick's input and output for offline
//! inspection. Recording never influences what is quoted, and the trader
//! runs the same with no recorder at all.

use log::debug;
use meridian_core::{Order, Symbol, Timestamp, TradingState};
use std::collections::HashMap;

/// Everything mirrored for one tick
#[derive(Debug, Clone, Copy)]
pub struct TickRecord<'a> {
    pub state: &'a TradingState,
    pub orders: &'a HashMap<Symbol, Vec<Order>>,
    pub conversions: i64,
    pub trader_data: &'a str,
}

/// Sink for per-tick records
pub trait TickRecorder {
    fn record(&mut self, record: &TickRecord<'_>);
}

/// Discards every record
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRecorder;

impl TickRecorder for NullRecorder {
    fn record(&mut self, _record: &TickRecord<'_>) {}
}

/// Owned copy of a tick's output
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedTick {
    pub timestamp: Timestamp,
    pub orders: HashMap<Symbol, Vec<Order>>,
    pub conversions: i64,
    pub trader_data: String,
}

/// Keeps every tick's output in memory, oldest first
#[derive(Debug, Clone, Default)]
pub struct MemoryRecorder {
    ticks: Vec<RecordedTick>,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ticks(&self) -> &[RecordedTick] {
        &self.ticks
    }

    pub fn last(&self) -> Option<&RecordedTick> {
        self.ticks.last()
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}

impl TickRecorder for MemoryRecorder {
    fn record(&mut self, record: &TickRecord<'_>) {
        self.ticks.push(RecordedTick {
            timestamp: record.state.timestamp,
            orders: record.orders.clone(),
            conversions: record.conversions,
            trader_data: record.trader_data.to_string(),
        });
    }
}

/// Writes a one-line summary per instrument at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogRecorder;

impl TickRecorder for LogRecorder {
    fn record(&mut self, record: &TickRecord<'_>) {
        let state = record.state;

        let mut symbols: Vec<&Symbol> = state.order_depths.keys().collect();
        symbols.sort();

        for symbol in symbols {
            let book = &state.order_depths[symbol];
            let orders = record
                .orders
                .get(symbol)
                .map(|orders| {
                    orders
                        .iter()
                        .map(|o| format!("{}@{}", o.quantity, o.price))
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .unwrap_or_default();

            debug!(
                "[{}] t={} pos={} bid={:?} ask={:?} orders=[{}]",
                symbol,
                state.timestamp,
                state.position(symbol),
                book.best_bid().map(|l| (l.price, l.quantity)),
                book.best_ask().map(|l| (l.price, l.quantity)),
                orders
            );
        }

        debug!(
            "t={} conversions={} trader_data={} bytes",
            state.timestamp,
            record.conversions,
            record.trader_data.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_core::{OrderBookSnapshot, PriceLevel};

    fn sample_state() -> TradingState {
        TradingState::new(100).with_book(
            "AMETHYSTS",
            OrderBookSnapshot::new(
                vec![PriceLevel::new(9996, 1)],
                vec![PriceLevel::new(10004, 1)],
            ),
        )
    }

    #[test]
    fn test_memory_recorder_keeps_owned_copies() {
        let state = sample_state();
        let orders = HashMap::from([(
            "AMETHYSTS".to_string(),
            vec![Order::buy("AMETHYSTS", 9998, 20)],
        )]);

        let mut recorder = MemoryRecorder::new();
        recorder.record(&TickRecord {
            state: &state,
            orders: &orders,
            conversions: 1,
            trader_data: "{}",
        });

        assert_eq!(recorder.len(), 1);
        let tick = recorder.last().unwrap();
        assert_eq!(tick.timestamp, 100);
        assert_eq!(tick.orders, orders);
        assert_eq!(tick.conversions, 1);
        assert_eq!(tick.trader_data, "{}");
    }

    #[test]
    fn test_log_recorder_handles_unquoted_books() {
        let _ = env_logger::try_init();
        let state = sample_state();

        LogRecorder.record(&TickRecord {
            state: &state,
            orders: &HashMap::new(),
            conversions: 1,
            trader_data: "",
        });
        NullRecorder.record(&TickRecord {
            state: &state,
            orders: &HashMap::new(),
            conversions: 1,
            trader_data: "",
        });
    }
}
