use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the skycov workspace.
///
/// This covers precondition violations in the pure computation steps, failures
/// of the external store and sink collaborators, and argument validation.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SkycovError {
    /// An input violated a precondition of the merger, engine or summary step
    /// (e.g. a range with `lower >= upper` or a negative probability density).
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The store could not supply the requested input.
    #[error("{store} could not supply {capability}: {msg}")]
    FetchFailure {
        /// Store name that failed.
        store: String,
        /// Capability label (e.g. "observation-plan", "localization-tiles").
        capability: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A plan, request or localization could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "plan 7".
        what: String,
    },

    /// The store does not implement a required capability.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested.
        capability: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The overall request exceeded the configured deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Capability label for which the request timed out.
        capability: String,
    },

    /// The persistence/notification sink rejected a finished record.
    #[error("{sink} failed to publish: {msg}")]
    Publish {
        /// Sink name that failed.
        sink: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl SkycovError {
    /// Helper: build a `MalformedInput` error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    /// Helper: build a `FetchFailure` error tagged with store and capability.
    pub fn fetch_failure(
        store: impl Into<String>,
        capability: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self::FetchFailure {
            store: store.into(),
            capability: capability.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Helper: build a `Publish` error with the sink name and message.
    pub fn publish(sink: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Publish {
            sink: sink.into(),
            msg: msg.into(),
        }
    }

    /// Returns true if a fresh run of the same work may succeed.
    ///
    /// Transient collaborator failures are retryable; precondition violations,
    /// missing capabilities and bad arguments are not. Nothing inside skycov
    /// retries on its own.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::FetchFailure { .. } | Self::RequestTimeout { .. } | Self::Publish { .. }
        )
    }
}
