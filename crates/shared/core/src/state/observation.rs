use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::values::Symbol;

/// Auxiliary per-product observation used by conversion trades
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversionObservation {
    pub bid_price: f64,
    pub ask_price: f64,
    pub transport_fees: f64,
    pub export_tariff: f64,
    pub import_tariff: f64,
    pub sunlight: f64,
    pub humidity: f64,
}

/// Market observations outside the order books
///
/// Carried through for the recorder; quoting ignores them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(default)]
    pub plain_value_observations: HashMap<Symbol, i64>,
    #[serde(default)]
    pub conversion_observations: HashMap<Symbol, ConversionObservation>,
}

impl Observation {
    pub fn is_empty(&self) -> bool {
        self.plain_value_observations.is_empty() && self.conversion_observations.is_empty()
    }
}
