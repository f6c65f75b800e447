//! Ports - trait contracts between the application core and adapters.

mod membership_store;

pub use membership_store::MembershipStore;
