use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::values::{Price, Quantity, Volume};

/// A single resting price level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceLevel {
    pub price: Price,
    pub quantity: Volume,
}

impl PriceLevel {
    pub fn new(price: Price, quantity: Volume) -> Self {
        Self { price, quantity }
    }

    /// Resting quantity as a signed order quantity
    pub fn size(&self) -> Quantity {
        Quantity::from(self.quantity)
    }
}

/// Unvalidated book sides, as they arrive over serde
#[derive(Deserialize)]
struct BookSides {
    #[serde(default)]
    bids: Vec<PriceLevel>,
    #[serde(default)]
    asks: Vec<PriceLevel>,
}

impl From<BookSides> for OrderBookSnapshot {
    fn from(sides: BookSides) -> Self {
        OrderBookSnapshot::new(sides.bids, sides.asks)
    }
}

/// Read-only snapshot of one instrument's book for a single tick
///
/// Bids are kept best (highest) first, asks best (lowest) first.
/// Zero-quantity levels are dropped and repeated prices are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BookSides")]
pub struct OrderBookSnapshot {
    bids: Vec<PriceLevel>,
    asks: Vec<PriceLevel>,
}

impl OrderBookSnapshot {
    /// Build a snapshot from levels in any order
    pub fn new(bids: Vec<PriceLevel>, asks: Vec<PriceLevel>) -> Self {
        Self {
            bids: normalise(bids, true),
            asks: normalise(asks, false),
        }
    }

    /// Build a snapshot from the host's price -> quantity depth maps
    ///
    /// The host reports sell quantities as negative numbers; only the
    /// magnitude is kept.
    pub fn from_depth(
        buy_orders: &BTreeMap<Price, Quantity>,
        sell_orders: &BTreeMap<Price, Quantity>,
    ) -> Self {
        let to_levels = |depth: &BTreeMap<Price, Quantity>| -> Vec<PriceLevel> {
            depth
                .iter()
                .map(|(price, qty)| {
                    let volume = Volume::try_from(qty.unsigned_abs()).unwrap_or(Volume::MAX);
                    PriceLevel::new(*price, volume)
                })
                .collect()
        };
        Self::new(to_levels(buy_orders), to_levels(sell_orders))
    }

    /// Snapshot with only a bid side
    pub fn bids_only(bids: Vec<PriceLevel>) -> Self {
        Self::new(bids, Vec::new())
    }

    /// Snapshot with only an ask side
    pub fn asks_only(asks: Vec<PriceLevel>) -> Self {
        Self::new(Vec::new(), asks)
    }

    // === Price Queries ===

    /// Best (highest) bid level
    pub fn best_bid(&self) -> Option<PriceLevel> {
        self.bids.first().copied()
    }

    /// Best (lowest) ask level
    pub fn best_ask(&self) -> Option<PriceLevel> {
        self.asks.first().copied()
    }

    /// Mid price (average of best bid and ask), exact
    pub fn mid_price(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => {
                Some((Decimal::from(bid.price) + Decimal::from(ask.price)) / Decimal::TWO)
            }
            _ => None,
        }
    }

    /// Spread (ask - bid)
    pub fn spread(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask.price - bid.price),
            _ => None,
        }
    }

    // === Level Queries ===

    /// All bid levels, highest price first
    pub fn bids(&self) -> &[PriceLevel] {
        &self.bids
    }

    /// All ask levels, lowest price first
    pub fn asks(&self) -> &[PriceLevel] {
        &self.asks
    }

    /// Check if book is empty
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Check if book has both sides (a mid price exists)
    pub fn is_two_sided(&self) -> bool {
        !self.bids.is_empty() && !self.asks.is_empty()
    }
}

fn normalise(levels: Vec<PriceLevel>, descending: bool) -> Vec<PriceLevel> {
    let mut merged: BTreeMap<Price, Volume> = BTreeMap::new();
    for level in levels {
        if level.quantity == 0 {
            continue;
        }
        let entry = merged.entry(level.price).or_insert(0);
        *entry = entry.saturating_add(level.quantity);
    }
    let ordered = merged.into_iter().map(|(p, q)| PriceLevel::new(p, q));
    if descending {
        ordered.rev().collect()
    } else {
        ordered.collect()
    }
}
