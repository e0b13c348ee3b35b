//! Runtime event stream payloads.

use crate::types::DoctorId;

/// Events emitted from the single-writer runtime loop after a mutation lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterEvent {
    /// A new doctor was created.
    Created {
        /// Created doctor id.
        id: DoctorId,
    },
    /// An existing doctor was replaced in place.
    Updated {
        /// Updated doctor id.
        id: DoctorId,
    },
    /// A doctor was removed.
    Deleted {
        /// Deleted doctor id.
        id: DoctorId,
    },
}
