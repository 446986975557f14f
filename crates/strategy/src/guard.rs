//! Position Guard
//!
//! The host applies a hard, symmetric position limit per instrument: if every
//! order emitted for a tick were filled in full, the resulting position must
//! stay within `[-limit, +limit]`. The guard owns that limit, hands out the
//! remaining buy/sell capacity quoting works against, and checks an emitted
//! order set against the worst case.

use meridian_core::{Instrument, Order, Quantity};

/// Remaining room to buy and to sell, given the current position
///
/// Both sides are signed. Resting-sized takes can drive a side below zero;
/// callers only act on a side while it is strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    pub buy: Quantity,
    pub sell: Quantity,
}

impl Capacity {
    pub fn can_buy(&self) -> bool {
        self.buy > 0
    }

    pub fn can_sell(&self) -> bool {
        self.sell > 0
    }

    /// Record `qty` units bought
    pub fn consume_buy(&mut self, qty: Quantity) {
        self.buy -= qty;
    }

    /// Record `qty` units sold
    pub fn consume_sell(&mut self, qty: Quantity) {
        self.sell -= qty;
    }

    /// Largest buy of at most `qty` that fits the remaining capacity
    pub fn clip_buy(&self, qty: Quantity) -> Quantity {
        qty.min(self.buy).max(0)
    }

    /// Largest sell of at most `qty` that fits the remaining capacity
    pub fn clip_sell(&self, qty: Quantity) -> Quantity {
        qty.min(self.sell).max(0)
    }
}

/// Symmetric position limit for one instrument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionGuard {
    limit: Quantity,
}

impl PositionGuard {
    pub fn new(limit: u32) -> Self {
        Self {
            limit: Quantity::from(limit),
        }
    }

    pub fn limit(&self) -> Quantity {
        self.limit
    }

    /// Capacity left at `position`
    pub fn capacity(&self, position: Quantity) -> Capacity {
        Capacity {
            buy: self.limit - position,
            sell: self.limit + position,
        }
    }

    /// Extreme positions reachable if every buy, or every sell, fills in full
    ///
    /// Returns `(long, short)`.
    pub fn worst_case(&self, position: Quantity, orders: &[Order]) -> (Quantity, Quantity) {
        let bought: Quantity = orders.iter().filter(|o| o.is_buy()).map(Order::size).sum();
        let sold: Quantity = orders.iter().filter(|o| o.is_sell()).map(Order::size).sum();
        (position + bought, position - sold)
    }

    /// Whether `orders` keep the position within the limit in the worst case
    pub fn admits(&self, position: Quantity, orders: &[Order]) -> bool {
        let (long, short) = self.worst_case(position, orders);
        long <= self.limit && short >= -self.limit
    }
}

impl From<&Instrument> for PositionGuard {
    fn from(instrument: &Instrument) -> Self {
        PositionGuard::new(instrument.position_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_from_position() {
        let guard = PositionGuard::new(20);

        assert_eq!(guard.capacity(0), Capacity { buy: 20, sell: 20 });
        assert_eq!(guard.capacity(5), Capacity { buy: 15, sell: 25 });
        assert_eq!(guard.capacity(-20), Capacity { buy: 40, sell: 0 });
    }

    #[test]
    fn test_consume_can_go_negative() {
        let mut capacity = PositionGuard::new(20).capacity(10);
        capacity.consume_buy(25);

        assert_eq!(capacity.buy, -15);
        assert!(!capacity.can_buy());
        assert_eq!(capacity.clip_buy(3), 0);
    }

    #[test]
    fn test_clip() {
        let capacity = PositionGuard::new(20).capacity(12);
        assert_eq!(capacity.clip_buy(30), 8);
        assert_eq!(capacity.clip_buy(4), 4);
        assert_eq!(capacity.clip_sell(40), 32);
    }

    #[test]
    fn test_worst_case_and_admits() {
        let guard = PositionGuard::new(20);
        let orders = vec![
            Order::buy("AMETHYSTS", 9997, 5),
            Order::sell("AMETHYSTS", 10005, 3),
            Order::buy("AMETHYSTS", 9998, 15),
            Order::sell("AMETHYSTS", 10002, 17),
        ];

        assert_eq!(guard.worst_case(0, &orders), (20, -20));
        assert!(guard.admits(0, &orders));
        assert!(!guard.admits(1, &orders));
    }

    #[test]
    fn test_from_instrument() {
        let guard = PositionGuard::from(&Instrument::new("ORCHIDS", 100));
        assert_eq!(guard.limit(), 100);
    }
}
