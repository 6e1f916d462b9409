//! Payload construction error types.

use thiserror::Error;

/// Result type for payload construction.
pub type Result<T> = std::result::Result<T, PayloadError>;

/// Payload construction errors.
///
/// Every variant is raised by the builder that detects the problem; nothing
/// is retried or recovered inside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// A required field was null.
    #[error("{field} must not be null")]
    MissingField {
        /// Human-readable field label.
        field: &'static str,
    },

    /// An `event` outside the builder's closed set.
    #[error("Invalid event type: {event} (expected one of {})", .allowed.join(", "))]
    InvalidEvent {
        /// Rejected event.
        event: String,
        /// Accepted events.
        allowed: &'static [&'static str],
    },

    /// Live activity priority other than 5 or 10.
    #[error("priority must be 5 or 10, got {0}")]
    InvalidPriority(u8),

    /// WNS payload did not carry exactly one message type.
    #[error("Must specify one message type, got {0}")]
    MessageTypeCount(usize),

    /// Style type with no known content key.
    #[error("Unknown style type: {0}")]
    UnknownStyle(String),

    /// Notification had no entries after compaction and open-platform merge.
    #[error("Notification body is empty")]
    EmptyNotification,

    /// Push request has neither explicit nor configured device types.
    #[error("Push request must target at least one device type")]
    MissingDeviceTypes,

    /// Serialized request body exceeds the configured limit.
    #[error("Payload too large: {size} bytes exceeds limit of {limit} bytes")]
    PayloadTooLarge {
        /// Actual size.
        size: usize,
        /// Maximum allowed size.
        limit: usize,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PayloadError {
    /// Field the error concerns, when there is a single one.
    ///
    /// For [`MissingField`](Self::MissingField) this is the label used in
    /// the message ("url", "Plaintext Body"), not necessarily the wire key.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field } => Some(*field),
            Self::InvalidEvent { .. } => Some("event"),
            Self::InvalidPriority(_) => Some("priority"),
            Self::UnknownStyle(_) => Some("type"),
            Self::MissingDeviceTypes => Some("device_types"),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for PayloadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
