//! In-memory authoritative store and snapshot helpers.

/// Listing, search, and pagination helpers over record snapshots.
pub mod query;
/// Built-in demo doctors.
pub mod seed;
/// Authoritative doctor store.
pub mod store;
