//! Error types for store writes and draft edits.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. Reads never error (they fall back to defaults);
//! write and edit errors are reported to the operator while the draft is
//! kept intact.

/// Failure writing to (or reaching) the storage medium.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Storage is disabled or missing (private browsing, non-browser host).
    #[error("storage unavailable")]
    Unavailable,
    /// The medium refused the write because its quota is exhausted.
    #[error("storage quota exceeded writing {key}")]
    QuotaExceeded { key: String },
    /// Any other write rejection reported by the medium.
    #[error("storage write failed for {key}: {message}")]
    Write { key: String, message: String },
    /// The value could not be encoded as JSON.
    #[error("failed to encode {key}: {message}")]
    Encode { key: String, message: String },
}

/// Refused draft edit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// Removing the entry would leave fewer than `min` entries in `field`.
    #[error("{field} must keep at least {min} item(s)")]
    BelowMinimum { field: &'static str, min: usize },
    /// The index does not address an existing entry.
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
    /// No entry carries the requested id.
    #[error("no entry with id {id}")]
    NotFound { id: String },
}
