//! Carried State
//!
//! The engine keeps nothing in memory between ticks. Whatever history a
//! model needs is encoded into the blob returned to the host and decoded
//! from the blob the host hands back on the next tick.
//!
//! The blob is compact JSON:
//!
//! ```json
//! {"lags":{"STARFRUIT":["5044","5043.5"]}}
//! ```

use log::warn;
use meridian_core::Symbol;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Result, StateError};
use crate::lag_buffer::LagBuffer;

/// Everything carried from one tick to the next
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraderState {
    /// Lag history per instrument with a history-dependent fair value
    #[serde(default)]
    pub lags: BTreeMap<Symbol, LagBuffer>,
}

impl TraderState {
    /// Decode a blob. An empty blob is a cold start.
    pub fn decode(blob: &str) -> Result<Self> {
        if blob.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(blob)?)
    }

    /// Decode a blob, falling back to a cold start on any error
    pub fn restore(blob: &str) -> Self {
        match Self::decode(blob) {
            Ok(state) => state,
            Err(e) => {
                warn!("Discarding unreadable trader state, starting cold: {}", e);
                Self::default()
            }
        }
    }

    /// Encode for the host to hand back next tick
    pub fn encode(&self) -> Result<String> {
        serde_json::to_string(self).map_err(StateError::Encode)
    }

    /// History for `symbol`, if any has been recorded
    pub fn history(&self, symbol: &str) -> Option<&LagBuffer> {
        self.lags.get(symbol)
    }

    /// History for `symbol`, created empty on first use
    pub fn history_mut(&mut self, symbol: &str) -> &mut LagBuffer {
        self.lags.entry(symbol.to_string()).or_default()
    }

    /// Drop history for every instrument `keep` rejects
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.lags.retain(|symbol, _| keep(symbol));
    }

    pub fn is_empty(&self) -> bool {
        self.lags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lag_buffer::LAG_DEPTH;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_blob_is_cold_start() {
        assert_eq!(TraderState::decode("").unwrap(), TraderState::default());
        assert_eq!(TraderState::decode("  ").unwrap(), TraderState::default());
    }

    #[test]
    fn test_round_trip() {
        let mut state = TraderState::default();
        let history = state.history_mut("STARFRUIT");
        for i in 0..LAG_DEPTH as i64 + 3 {
            history.push(Decimal::new(50_425 + i * 5, 1));
        }
        state.history_mut("KELP").push(dec!(2020.5));

        let blob = state.encode().unwrap();
        assert_eq!(TraderState::decode(&blob).unwrap(), state);
    }

    #[test]
    fn test_blob_format() {
        let mut state = TraderState::default();
        state.history_mut("STARFRUIT").push(dec!(5043.5));
        state.history_mut("STARFRUIT").push(dec!(5044));

        assert_eq!(
            state.encode().unwrap(),
            r#"{"lags":{"STARFRUIT":["5044","5043.5"]}}"#
        );
    }

    #[test]
    fn test_malformed_blob_errors() {
        assert!(matches!(
            TraderState::decode("{not json"),
            Err(StateError::Decode(_))
        ));
    }

    #[test]
    fn test_oversized_history_errors() {
        let blob = r#"{"lags":{"STARFRUIT":["1","1","1","1","1","1","1","1","1","1","1"]}}"#;
        assert!(TraderState::decode(blob).is_err());
    }

    #[test]
    fn test_restore_falls_back_to_cold_start() {
        let _ = env_logger::try_init();

        assert!(TraderState::restore("{\"lags\": 7}").is_empty());
        assert!(TraderState::restore("garbage").is_empty());
    }

    #[test]
    fn test_missing_lags_field_defaults() {
        assert!(TraderState::decode("{}").unwrap().is_empty());
    }

    #[test]
    fn test_retain() {
        let mut state = TraderState::default();
        state.history_mut("STARFRUIT").push(dec!(1));
        state.history_mut("RETIRED").push(dec!(1));

        state.retain(|symbol| symbol == "STARFRUIT");
        assert!(state.history("STARFRUIT").is_some());
        assert!(state.history("RETIRED").is_none());
    }
}
