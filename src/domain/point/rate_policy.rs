//! Fixed-rate point accrual policy.

use super::PointPolicy;

/// Default accrual rate, in percent of the purchase price.
const DEFAULT_POINT_RATE: i64 = 1;

/// Accrues points as a fixed percentage of the purchase price,
/// integer-truncated.
///
/// With the default 1% rate, a 10,000 purchase earns 100 points.
#[derive(Debug, Clone, Copy)]
pub struct RatePointPolicy {
    rate: i64,
}

impl RatePointPolicy {
    /// Creates a policy with the given percentage rate.
    pub fn new(rate: i64) -> Self {
        Self { rate }
    }
}

impl Default for RatePointPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_POINT_RATE)
    }
}

impl PointPolicy for RatePointPolicy {
    fn calculate_amount(&self, price: i64) -> i64 {
        price * self.rate / 100
    }
}
