//! Fair Value Estimation
//!
//! Every quoted instrument is priced around a single scalar fair value.
//! Two models exist:
//! - Constant: a fixed configured price, always available
//! - Autoregressive: a linear model over the last `LAG_DEPTH` mid prices,
//!   unavailable until a full window of mids has been observed
//!
//! Coefficients are configuration data, fitted offline.

use meridian_core::OrderBookSnapshot;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::lag_buffer::{LAG_DEPTH, LagBuffer};

/// Produces a fair value for one instrument each tick
pub trait FairValueEstimator {
    /// Estimate this tick's fair value, or `None` when unavailable.
    ///
    /// `history` is the instrument's carried lag buffer. Models that depend
    /// on history record this tick's observation into it.
    fn estimate(&self, book: &OrderBookSnapshot, history: &mut LagBuffer) -> Option<Decimal>;

    /// Whether the model reads (and therefore carries) lag history
    fn needs_history(&self) -> bool {
        false
    }
}

/// Fixed fair value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantFairValue {
    pub price: Decimal,
}

impl ConstantFairValue {
    pub fn new(price: Decimal) -> Self {
        Self { price }
    }
}

impl FairValueEstimator for ConstantFairValue {
    fn estimate(&self, _book: &OrderBookSnapshot, _history: &mut LagBuffer) -> Option<Decimal> {
        Some(self.price)
    }
}

/// Intercept and per-lag weights of a fitted autoregression
///
/// `weights[0]` applies to the most recent mid, `weights[LAG_DEPTH - 1]`
/// to the oldest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArCoefficients {
    pub intercept: Decimal,
    pub weights: [Decimal; LAG_DEPTH],
}

impl ArCoefficients {
    pub fn new(intercept: Decimal, weights: [Decimal; LAG_DEPTH]) -> Self {
        Self { intercept, weights }
    }

    /// `intercept + Σ weights[i] * lags[i]`
    pub fn apply(&self, lags: &[Decimal; LAG_DEPTH]) -> Decimal {
        self.weights
            .iter()
            .zip(lags.iter())
            .fold(self.intercept, |acc, (w, lag)| acc + w * lag)
    }

    /// Sum of the lag weights (1 means the model has no drift in level)
    pub fn weight_sum(&self) -> Decimal {
        self.weights.iter().sum()
    }
}

/// Autoregressive fair value over lagged mid prices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoregressiveFairValue {
    pub coefficients: ArCoefficients,
}

impl AutoregressiveFairValue {
    pub fn new(coefficients: ArCoefficients) -> Self {
        Self { coefficients }
    }

    /// Fair value implied by a buffer, without recording anything.
    ///
    /// `None` until the buffer is warm.
    pub fn predict(&self, history: &LagBuffer) -> Option<Decimal> {
        history.warmed().map(|lags| self.coefficients.apply(lags))
    }
}

impl FairValueEstimator for AutoregressiveFairValue {
    fn estimate(&self, book: &OrderBookSnapshot, history: &mut LagBuffer) -> Option<Decimal> {
        // A one-sided book has no mid; leave the history untouched
        let mid = book.mid_price()?;
        history.push(mid);
        self.predict(history)
    }

    fn needs_history(&self) -> bool {
        true
    }
}

/// Configured fair value model for an instrument
///
/// Tagged by `model` in configuration:
///
/// ```json
/// { "model": "constant", "price": 10000 }
/// { "model": "autoregressive", "coefficients": { "intercept": 1.05, "weights": [0.29, ...] } }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum FairValueModel {
    Constant(ConstantFairValue),
    Autoregressive(AutoregressiveFairValue),
}

impl FairValueModel {
    pub fn constant(price: Decimal) -> Self {
        FairValueModel::Constant(ConstantFairValue::new(price))
    }

    pub fn autoregressive(coefficients: ArCoefficients) -> Self {
        FairValueModel::Autoregressive(AutoregressiveFairValue::new(coefficients))
    }

    /// Short model name for logging
    pub fn name(&self) -> &'static str {
        match self {
            FairValueModel::Constant(_) => "constant",
            FairValueModel::Autoregressive(_) => "autoregressive",
        }
    }
}

impl FairValueEstimator for FairValueModel {
    fn estimate(&self, book: &OrderBookSnapshot, history: &mut LagBuffer) -> Option<Decimal> {
        match self {
            FairValueModel::Constant(model) => model.estimate(book, history),
            FairValueModel::Autoregressive(model) => model.estimate(book, history),
        }
    }

    fn needs_history(&self) -> bool {
        match self {
            FairValueModel::Constant(model) => model.needs_history(),
            FairValueModel::Autoregressive(model) => model.needs_history(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_core::PriceLevel;
    use rust_decimal_macros::dec;

    fn book(bid: i64, ask: i64) -> OrderBookSnapshot {
        OrderBookSnapshot::new(vec![PriceLevel::new(bid, 10)], vec![PriceLevel::new(ask, 10)])
    }

    /// Equal weights of 0.1: fair value is the plain average of the window
    fn averaging() -> AutoregressiveFairValue {
        AutoregressiveFairValue::new(ArCoefficients::new(dec!(0), [dec!(0.1); LAG_DEPTH]))
    }

    #[test]
    fn test_constant_ignores_book_and_history() {
        let model = FairValueModel::constant(dec!(10000));
        let mut history = LagBuffer::new();

        assert_eq!(model.estimate(&book(1, 3), &mut history), Some(dec!(10000)));
        assert_eq!(
            model.estimate(&OrderBookSnapshot::default(), &mut history),
            Some(dec!(10000))
        );
        assert!(history.is_empty());
        assert!(!model.needs_history());
    }

    #[test]
    fn test_autoregressive_unavailable_until_warm() {
        let model = averaging();
        let mut history = LagBuffer::new();

        for i in 0..LAG_DEPTH - 1 {
            assert_eq!(model.estimate(&book(100, 102), &mut history), None);
            assert_eq!(history.len(), i + 1);
        }
        assert_eq!(model.estimate(&book(100, 102), &mut history), Some(dec!(101)));
        assert!(history.is_warm());
    }

    #[test]
    fn test_autoregressive_weights_most_recent_first() {
        let mut weights = [dec!(0); LAG_DEPTH];
        weights[0] = dec!(1);
        let model = AutoregressiveFairValue::new(ArCoefficients::new(dec!(0.5), weights));

        let mut history = LagBuffer::new();
        for i in 0..LAG_DEPTH as i64 {
            history.push(Decimal::from(1000 + i));
        }
        let fair = model.estimate(&book(2000, 2003), &mut history);

        // Only the mid just observed carries weight
        assert_eq!(fair, Some(dec!(2002)));
    }

    #[test]
    fn test_one_sided_book_leaves_history_alone() {
        let model = FairValueModel::autoregressive(averaging().coefficients);
        let mut history = LagBuffer::new();
        history.push(dec!(5000));

        let bids_only = OrderBookSnapshot::bids_only(vec![PriceLevel::new(4999, 1)]);
        assert_eq!(model.estimate(&bids_only, &mut history), None);
        assert_eq!(history.as_slice(), &[dec!(5000)]);
    }

    #[test]
    fn test_predict_is_pure() {
        let model = averaging();
        let mut history = LagBuffer::new();
        for i in 0..LAG_DEPTH as i64 {
            history.push(Decimal::from(5040 + i));
        }
        let snapshot = history;

        let first = model.predict(&history);
        let second = model.predict(&history);
        assert_eq!(first, second);
        assert_eq!(first, Some(dec!(5044.5)));
        assert_eq!(history, snapshot);
    }

    #[test]
    fn test_intercept_and_weight_sum() {
        let coefficients = ArCoefficients::new(dec!(1.5), [dec!(0.1); LAG_DEPTH]);
        assert_eq!(coefficients.weight_sum(), dec!(1.0));
        assert_eq!(coefficients.apply(&[dec!(10); LAG_DEPTH]), dec!(11.5));
    }

    #[test]
    fn test_model_config_json() {
        let constant: FairValueModel =
            serde_json::from_str(r#"{"model":"constant","price":10000}"#).unwrap();
        assert_eq!(constant, FairValueModel::constant(dec!(10000)));

        let json = r#"{
            "model": "autoregressive",
            "coefficients": {
                "intercept": "2",
                "weights": ["0.5", "0.5", "0", "0", "0", "0", "0", "0", "0", "0"]
            }
        }"#;
        let model: FairValueModel = serde_json::from_str(json).unwrap();
        assert!(model.needs_history());
        assert_eq!(model.name(), "autoregressive");

        let FairValueModel::Autoregressive(ar) = model else {
            panic!("Expected autoregressive model");
        };
        assert_eq!(ar.coefficients.intercept, dec!(2));
        assert_eq!(ar.coefficients.weight_sum(), dec!(1));
    }
}
