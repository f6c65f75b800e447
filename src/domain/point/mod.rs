//! Point accrual policies.
//!
//! A `PointPolicy` converts a purchase amount into points earned. Policies
//! are pure and stateless; accumulation itself lives in the membership
//! handlers, which add an already-derived point value to the balance.

mod rate_policy;

pub use rate_policy::RatePointPolicy;

/// Strategy for converting a purchase price into points earned.
///
/// `price` must be non-negative; callers enforce that precondition at the
/// boundary, it is not re-checked here.
pub trait PointPolicy: Send + Sync {
    fn calculate_amount(&self, price: i64) -> i64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_policy_is_object_safe() {
        fn _accepts_dyn(_policy: &dyn PointPolicy) {}
    }
}
