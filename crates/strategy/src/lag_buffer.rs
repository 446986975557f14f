//! Fixed-depth history of observed mid prices
//!
//! Entries are kept most-recent-first: slot 0 is the mid observed this tick,
//! slot `LAG_DEPTH - 1` the oldest still retained. Pushing shifts every entry
//! one slot older and drops whatever falls off the end.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::StateError;

/// Number of lagged mids an autoregressive fair value is fitted on
pub const LAG_DEPTH: usize = 10;

/// Most recent `LAG_DEPTH` mid prices for one instrument
///
/// Serialized as a plain list of its filled entries, most recent first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Decimal>", into = "Vec<Decimal>")]
pub struct LagBuffer {
    /// Slots past `len` are always zero
    lags: [Decimal; LAG_DEPTH],
    len: usize,
}

impl LagBuffer {
    /// Create an empty (cold) buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift in a newly observed mid, dropping the oldest once full
    pub fn push(&mut self, mid: Decimal) {
        self.lags.copy_within(0..LAG_DEPTH - 1, 1);
        self.lags[0] = mid;
        self.len = (self.len + 1).min(LAG_DEPTH);
    }

    /// Lag `i` (0 = most recent), if observed
    pub fn get(&self, i: usize) -> Option<Decimal> {
        self.as_slice().get(i).copied()
    }

    /// Most recent mid
    pub fn latest(&self) -> Option<Decimal> {
        self.get(0)
    }

    /// Number of mids observed, capped at `LAG_DEPTH`
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether a full window of lags has been observed
    pub fn is_warm(&self) -> bool {
        self.len == LAG_DEPTH
    }

    /// The full lag window, only once warm
    pub fn warmed(&self) -> Option<&[Decimal; LAG_DEPTH]> {
        self.is_warm().then_some(&self.lags)
    }

    /// Observed entries, most recent first
    pub fn as_slice(&self) -> &[Decimal] {
        &self.lags[..self.len]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Decimal> {
        self.as_slice().iter()
    }

    /// Forget all history
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl TryFrom<Vec<Decimal>> for LagBuffer {
    type Error = StateError;

    fn try_from(entries: Vec<Decimal>) -> Result<Self, Self::Error> {
        if entries.len() > LAG_DEPTH {
            return Err(StateError::TooManyLags { len: entries.len() });
        }
        let mut buffer = LagBuffer::new();
        buffer.lags[..entries.len()].copy_from_slice(&entries);
        buffer.len = entries.len();
        Ok(buffer)
    }
}

impl From<LagBuffer> for Vec<Decimal> {
    fn from(buffer: LagBuffer) -> Self {
        buffer.as_slice().to_vec()
    }
}
