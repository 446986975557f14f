use serde::{Deserialize, Serialize};

use crate::values::{Quantity, Symbol};

/// A tradable product and its symmetric position limit
///
/// The host rejects any tick whose orders could take the signed position
/// outside `[-position_limit, +position_limit]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instrument {
    pub symbol: Symbol,
    pub position_limit: u32,
}

impl Instrument {
    pub fn new(symbol: impl Into<Symbol>, position_limit: u32) -> Self {
        Self {
            symbol: symbol.into(),
            position_limit,
        }
    }

    /// Position limit as a signed quantity
    pub fn limit(&self) -> Quantity {
        Quantity::from(self.position_limit)
    }

    /// Whether `position` lies within the limit
    pub fn within_limit(&self, position: Quantity) -> bool {
        position.abs() <= self.limit()
    }
}

impl std::fmt::Display for Instrument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (±{})", self.symbol, self.position_limit)
    }
}
