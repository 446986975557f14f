//! Strategy errors

use thiserror::Error;

use crate::lag_buffer::LAG_DEPTH;

/// Errors raised while carrying lag state between ticks
#[derive(Error, Debug)]
pub enum StateError {
    #[error("Failed to decode trader state: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to encode trader state: {0}")]
    Encode(serde_json::Error),

    #[error("Lag buffer holds {len} entries, at most {max} allowed", max = LAG_DEPTH)]
    TooManyLags { len: usize },
}

pub type Result<T> = std::result::Result<T, StateError>;
