/// Whole-unit tradable price as quoted by the host
pub type Price = i64;

/// Signed order or position quantity (positive = long/buy, negative = short/sell)
pub type Quantity = i64;

/// Resting quantity at a book level, always non-negative
pub type Volume = u32;

/// Host tick timestamp
pub type Timestamp = i64;

/// Symbol identifier for a tradeable instrument
pub type Symbol = String;
