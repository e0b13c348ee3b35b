//! Shared primitive IDs and listing enums.

use serde::{Deserialize, Serialize};

/// Opaque doctor identifier assigned by the store.
pub type DoctorId = String;

/// How `list` treats the requested page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationMode {
    /// Return only the records inside the `(page, limit)` window.
    #[default]
    Slice,
    /// Return the whole collection regardless of the window.
    ///
    /// Matches the legacy mock API, where paging happened downstream.
    IgnoreWindow,
}
