//! PostgreSQL adapters - Database implementations for store ports.
//!
//! - `PostgresMembershipStore` - Membership persistence with the
//!   `(user_id, membership_type)` uniqueness constraint enforced in SQL.

mod membership_store;

pub use membership_store::PostgresMembershipStore;
