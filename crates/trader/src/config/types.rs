use meridian_core::Instrument;
use meridian_strategy::{FairValueModel, ProductStrategy, QuoteParams, TakeSizing};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Root configuration for the trader
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraderConfig {
    /// Instruments in the order they are processed each tick
    pub instruments: Vec<InstrumentConfig>,
    /// Conversions value passed through to the host every tick
    #[serde(default = "default_conversions")]
    pub conversions: i64,
    /// Take sizing policy shared by all instruments
    #[serde(default)]
    pub take_sizing: TakeSizing,
}

impl Default for TraderConfig {
    fn default() -> Self {
        Self {
            instruments: Vec::new(),
            conversions: default_conversions(),
            take_sizing: TakeSizing::default(),
        }
    }
}

/// Configuration for a single instrument
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentConfig {
    pub symbol: String,
    /// Symmetric position limit
    pub position_limit: u32,
    #[serde(default = "default_taking_width")]
    pub taking_width: Decimal,
    #[serde(default = "default_making_width")]
    pub making_width: Decimal,
    /// Fair value model; instruments without one are tracked but never quoted
    #[serde(default)]
    pub fair_value: Option<FairValueModel>,
}

impl InstrumentConfig {
    /// Create a config for a quoted instrument
    pub fn quoted(
        symbol: impl Into<String>,
        position_limit: u32,
        params: QuoteParams,
        fair_value: FairValueModel,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            position_limit,
            taking_width: params.taking_width,
            making_width: params.making_width,
            fair_value: Some(fair_value),
        }
    }

    /// Create a config for an instrument that is tracked but not quoted
    pub fn tracked(symbol: impl Into<String>, position_limit: u32) -> Self {
        let params = QuoteParams::default();
        Self {
            symbol: symbol.into(),
            position_limit,
            taking_width: params.taking_width,
            making_width: params.making_width,
            fair_value: None,
        }
    }

    pub fn instrument(&self) -> Instrument {
        Instrument::new(self.symbol.clone(), self.position_limit)
    }

    pub fn params(&self) -> QuoteParams {
        QuoteParams::new(self.taking_width, self.making_width)
    }

    /// Build the strategy for this instrument, if it is quoted
    pub fn strategy(&self, sizing: TakeSizing) -> Option<ProductStrategy> {
        self.fair_value
            .map(|model| ProductStrategy::new(self.instrument(), model, self.params(), sizing))
    }
}

impl TraderConfig {
    /// Get a specific instrument by symbol
    pub fn get_instrument(&self, symbol: &str) -> Option<&InstrumentConfig> {
        self.instruments.iter().find(|i| i.symbol == symbol)
    }

    /// Instruments that have a fair value model
    pub fn quoted_instruments(&self) -> Vec<&InstrumentConfig> {
        self.instruments
            .iter()
            .filter(|i| i.fair_value.is_some())
            .collect()
    }

    /// Strategies for every quoted instrument, in configuration order
    pub fn strategies(&self) -> Vec<ProductStrategy> {
        self.instruments
            .iter()
            .filter_map(|i| i.strategy(self.take_sizing))
            .collect()
    }
}

fn default_conversions() -> i64 {
    1
}

fn default_taking_width() -> Decimal {
    QuoteParams::default().taking_width
}

fn default_making_width() -> Decimal {
    QuoteParams::default().making_width
}
