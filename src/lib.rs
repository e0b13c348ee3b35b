//! Authoritative in-memory doctor roster with an async, latency-simulating front door.
//!
//! # Examples
//!
//! Synchronous usage with [`core::store::DoctorStore`]:
//! ```
//! use docroster::{core::store::DoctorStore, doctor::DoctorDraft};
//!
//! let mut store = DoctorStore::new();
//! let rec = store
//!     .create(DoctorDraft::new("Ada", "Lovelace", "ada@x.com", "Neurology", "555-0100"))
//!     .expect("create");
//! assert!(!rec.id.is_empty());
//! assert_eq!(store.list(1, 10), vec![rec]);
//! ```
//!
//! Runtime usage:
//! ```no_run
//! use docroster::{
//!     core::store::DoctorStore,
//!     doctor::DoctorDraft,
//!     runtime::handle::{spawn_roster, RuntimeConfig},
//! };
//!
//! # #[tokio::main]
//! # async fn main() {
//! let store = DoctorStore::with_seed_data().expect("seed");
//! let handle = spawn_roster(store, RuntimeConfig::default());
//! let rec = handle
//!     .create(DoctorDraft::new("Ada", "Lovelace", "ada@x.com", "Neurology", "555-0100"))
//!     .await
//!     .expect("create");
//! handle.delete(rec.id).await.expect("delete");
//! handle.shutdown().await.expect("shutdown");
//! # }
//! ```
#![deny(missing_docs)]

/// Core in-memory store, seed data, and query helpers.
pub mod core;
/// Doctor domain records and drafts.
pub mod doctor;
/// Store and runtime error types.
pub mod error;
/// Logger bootstrap.
pub mod logging;
/// Single-writer runtime handle and events.
pub mod runtime;
/// Shared primitive types and enums.
pub mod types;
/// Draft validation.
pub mod validate;
