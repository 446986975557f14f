use serde::{Deserialize, Serialize};

use super::Side;
use crate::values::{Price, Quantity, Symbol};

/// A limit order submitted to the host for one tick
///
/// The quantity is signed: positive buys, negative sells. Orders have no
/// identity and no lifetime beyond the tick that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    pub symbol: Symbol,
    pub price: Price,
    pub quantity: Quantity,
}

impl Order {
    /// Create an order from a signed quantity
    pub fn new(symbol: impl Into<Symbol>, price: Price, quantity: Quantity) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            quantity,
        }
    }

    /// Create a buy order for `size` units
    pub fn buy(symbol: impl Into<Symbol>, price: Price, size: Quantity) -> Self {
        Self::new(symbol, price, size.abs())
    }

    /// Create a sell order for `size` units (stored with a negative quantity)
    pub fn sell(symbol: impl Into<Symbol>, price: Price, size: Quantity) -> Self {
        Self::new(symbol, price, -size.abs())
    }

    /// Create an order on the given side for `size` units
    pub fn on_side(symbol: impl Into<Symbol>, side: Side, price: Price, size: Quantity) -> Self {
        Self::new(symbol, price, side.sign() * size.abs())
    }

    /// Side implied by the sign of the quantity
    pub fn side(&self) -> Side {
        if self.quantity >= 0 {
            Side::Buy
        } else {
            Side::Sell
        }
    }

    /// Unsigned size of the order
    pub fn size(&self) -> Quantity {
        self.quantity.abs()
    }

    pub fn is_buy(&self) -> bool {
        self.quantity > 0
    }

    pub fn is_sell(&self) -> bool {
        self.quantity < 0
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = match self.side() {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        };
        write!(f, "{} {} {}x{}", verb, self.symbol, self.size(), self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sell_stores_negative_quantity() {
        let order = Order::sell("AMETHYSTS", 10002, 17);
        assert_eq!(order.quantity, -17);
        assert_eq!(order.size(), 17);
        assert_eq!(order.side(), Side::Sell);
        assert!(order.is_sell());
    }

    #[test]
    fn test_buy_normalises_sign() {
        let order = Order::buy("AMETHYSTS", 9998, -15);
        assert_eq!(order.quantity, 15);
        assert_eq!(order.side(), Side::Buy);
    }

    #[test]
    fn test_on_side_matches_helpers() {
        assert_eq!(
            Order::on_side("STARFRUIT", Side::Sell, 5050, 3),
            Order::sell("STARFRUIT", 5050, 3)
        );
        assert_eq!(
            Order::on_side("STARFRUIT", Side::Buy, 5040, 3),
            Order::buy("STARFRUIT", 5040, 3)
        );
    }

    #[test]
    fn test_display() {
        let order = Order::sell("AMETHYSTS", 10005, 3);
        assert_eq!(order.to_string(), "SELL AMETHYSTS 3x10005");
    }
}
