//! Quote Generation
//!
//! Turns a fair value into one tick's orders for an instrument:
//! 1. Take the best ask if it sits more than `taking_width` below fair
//! 2. Take the best bid if it sits more than `taking_width` above fair
//! 3. Make a two-sided market `making_width` around fair with whatever
//!    buy/sell capacity is left
//!
//! Making quantities are sized exactly to the remaining capacity, so the
//! making side alone can never breach the position limit.

use log::{debug, info, warn};
use meridian_core::{Order, OrderBookSnapshot, Price, Quantity};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::guard::{Capacity, PositionGuard};

/// How a take order is sized against the position limit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TakeSizing {
    /// Take the full resting quantity at the best level, even past the limit.
    ///
    /// The capacity counter is still decremented, which can leave it
    /// negative and suppress the making quote on that side.
    #[default]
    Resting,
    /// Take at most the remaining capacity; skip the take when none is left
    ClipToCapacity,
}

/// Per-instrument quoting widths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteParams {
    /// Minimum edge versus fair value before taking resting liquidity
    pub taking_width: Decimal,
    /// Offset from fair value for passive quotes
    pub making_width: Decimal,
}

impl Default for QuoteParams {
    fn default() -> Self {
        Self {
            taking_width: dec!(2),
            making_width: dec!(2),
        }
    }
}

impl QuoteParams {
    pub fn new(taking_width: Decimal, making_width: Decimal) -> Self {
        Self {
            taking_width,
            making_width,
        }
    }
}

/// Stateless quote generator for one instrument
#[derive(Debug, Clone, Copy)]
pub struct QuoteGenerator {
    params: QuoteParams,
    sizing: TakeSizing,
}

impl QuoteGenerator {
    pub fn new(params: QuoteParams, sizing: TakeSizing) -> Self {
        Self { params, sizing }
    }

    pub fn params(&self) -> &QuoteParams {
        &self.params
    }

    pub fn sizing(&self) -> TakeSizing {
        self.sizing
    }

    /// Generate orders around `fair` for the instrument `symbol`
    ///
    /// Orders come out as take-buy, take-sell, make-buy, make-sell, each only
    /// when its condition holds. The position is not modified; the host
    /// applies fills.
    pub fn generate(
        &self,
        symbol: &str,
        fair: Decimal,
        book: &OrderBookSnapshot,
        position: Quantity,
        guard: &PositionGuard,
    ) -> Vec<Order> {
        let mut orders = Vec::new();
        let mut capacity = guard.capacity(position);

        self.take_ask(symbol, fair, book, &mut capacity, &mut orders);
        self.take_bid(symbol, fair, book, &mut capacity, &mut orders);
        self.make(symbol, fair, &capacity, &mut orders);

        orders
    }

    /// Buy the best ask when it is cheap versus fair
    fn take_ask(
        &self,
        symbol: &str,
        fair: Decimal,
        book: &OrderBookSnapshot,
        capacity: &mut Capacity,
        orders: &mut Vec<Order>,
    ) {
        let Some(ask) = book.best_ask() else {
            return;
        };
        if Decimal::from(ask.price) >= fair - self.params.taking_width {
            return;
        }

        let qty = match self.sizing {
            TakeSizing::Resting => ask.size(),
            TakeSizing::ClipToCapacity => capacity.clip_buy(ask.size()),
        };
        if qty <= 0 {
            return;
        }

        info!(
            "[{}] Taking ask: BUY {}x{} (fair={:.2})",
            symbol, qty, ask.price, fair
        );
        orders.push(Order::buy(symbol, ask.price, qty));
        capacity.consume_buy(qty);
    }

    /// Sell into the best bid when it is rich versus fair
    fn take_bid(
        &self,
        symbol: &str,
        fair: Decimal,
        book: &OrderBookSnapshot,
        capacity: &mut Capacity,
        orders: &mut Vec<Order>,
    ) {
        let Some(bid) = book.best_bid() else {
            return;
        };
        if Decimal::from(bid.price) <= fair + self.params.taking_width {
            return;
        }

        let qty = match self.sizing {
            TakeSizing::Resting => bid.size(),
            TakeSizing::ClipToCapacity => capacity.clip_sell(bid.size()),
        };
        if qty <= 0 {
            return;
        }

        info!(
            "[{}] Taking bid: SELL {}x{} (fair={:.2})",
            symbol, qty, bid.price, fair
        );
        orders.push(Order::sell(symbol, bid.price, qty));
        capacity.consume_sell(qty);
    }

    /// Quote the remaining capacity on both sides
    fn make(&self, symbol: &str, fair: Decimal, capacity: &Capacity, orders: &mut Vec<Order>) {
        if capacity.can_buy() {
            match bid_price(fair, self.params.making_width) {
                Some(price) => orders.push(Order::buy(symbol, price, capacity.buy)),
                None => warn!("[{}] Bid price out of range (fair={})", symbol, fair),
            }
        }
        if capacity.can_sell() {
            match ask_price(fair, self.params.making_width) {
                Some(price) => orders.push(Order::sell(symbol, price, capacity.sell)),
                None => warn!("[{}] Ask price out of range (fair={})", symbol, fair),
            }
        }

        debug!(
            "[{}] Making: bid {} / ask {} around fair={:.2}",
            symbol, capacity.buy, capacity.sell, fair
        );
    }
}

/// Passive bid price: `floor(fair - width)`
pub fn bid_price(fair: Decimal, width: Decimal) -> Option<Price> {
    (fair - width).floor().to_i64()
}

/// Passive ask price: `ceil(fair + width)`
pub fn ask_price(fair: Decimal, width: Decimal) -> Option<Price> {
    (fair + width).ceil().to_i64()
}
