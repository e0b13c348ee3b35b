//! Error types shared by the store and the runtime.

use thiserror::Error;

use crate::{types::DoctorId, validate::ValidationErrors};

/// Coarse error classification surfaced to UI collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing or malformed field; recoverable by correcting the input.
    Validation,
    /// The operation targeted an id absent from the store.
    NotFound,
    /// Any other failure (closed runtime, backend fault).
    OperationFailed,
}

/// Failures raised by [`crate::core::store::DoctorStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record has this id.
    #[error("doctor not found: {0}")]
    NotFound(DoctorId),
    /// The draft failed field validation; the collection is unchanged.
    #[error("invalid doctor fields: {0}")]
    Validation(#[from] ValidationErrors),
    /// A snapshot carried the same id twice.
    #[error("duplicate doctor id in snapshot: {0}")]
    DuplicateId(DoctorId),
    /// A snapshot carried an empty id.
    #[error("invalid doctor id in snapshot: {0:?}")]
    InvalidId(DoctorId),
    /// Embedded or imported JSON could not be decoded.
    #[error("seed decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl StoreError {
    /// Classifies this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Validation(_) => ErrorKind::Validation,
            Self::DuplicateId(_) | Self::InvalidId(_) | Self::Decode(_) => ErrorKind::OperationFailed,
        }
    }
}

/// Failures returned by [`crate::runtime::handle::RosterHandle`] calls.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The store rejected the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The runtime task has shut down.
    #[error("roster runtime is not running")]
    ChannelClosed,
}

impl RuntimeError {
    /// Classifies this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Store(err) => err.kind(),
            Self::ChannelClosed => ErrorKind::OperationFailed,
        }
    }

    /// True when the error is a [`StoreError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}
