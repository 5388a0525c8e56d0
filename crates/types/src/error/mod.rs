// Path: crates/types/src/error/mod.rs
//! Core error types for dnote.

use crate::app::AccountId;
use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Errors related to the state backend or a state view.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// An error occurred in the state backend.
    #[error("State backend error: {0}")]
    Backend(String),
    /// An error occurred during state deserialization.
    #[error("Decode error: {0}")]
    Decode(String),
    /// The operation was denied due to insufficient permissions on a state key.
    #[error("Permission denied for state key: {0}")]
    PermissionDenied(String),
}

impl ErrorCode for StateError {
    fn code(&self) -> &'static str {
        match self {
            Self::Backend(_) => "STATE_BACKEND_ERROR",
            Self::Decode(_) => "STATE_DECODE_ERROR",
            Self::PermissionDenied(_) => "STATE_PERMISSION_DENIED",
        }
    }
}

/// Errors surfaced by a call to a contract. Any of these aborts the whole
/// top-level call and discards every write it made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    /// The request or its parameters could not be decoded.
    #[error("Deserialization error: {0}")]
    Deserialization(String),
    /// An error originating from the state manager.
    #[error("State error: {0}")]
    State(#[from] StateError),
    /// A record id outside the allocated range `[1, next_id)`.
    #[error("Record id {id} is out of range (next id is {next_id})")]
    OutOfRangeId {
        /// The id supplied by the caller.
        id: u64,
        /// The store's next unallocated id at the time of the call.
        next_id: u64,
    },
    /// A counter would have left its representable range.
    #[error("Counter overflow: {0}")]
    Overflow(String),
    /// The contract does not expose the requested method.
    #[error("Unsupported call: {0}")]
    Unsupported(String),
    /// No contract is deployed at the addressed identity.
    #[error("No contract deployed at {0}")]
    UnknownContract(AccountId),
    /// The access policy rejected the call.
    #[error("Caller {caller} is not authorized to call '{method}'")]
    Unauthorized {
        /// The acting caller that was rejected.
        caller: AccountId,
        /// The method the caller attempted.
        method: String,
    },
    /// Nested calls went deeper than the host allows.
    #[error("Call depth limit of {0} exceeded")]
    CallDepthExceeded(u32),
    /// The raw request exceeded the host's input size ceiling.
    #[error("Call input of {len} bytes exceeds the limit of {max} bytes")]
    InputTooLarge {
        /// Size of the rejected input.
        len: usize,
        /// The configured ceiling.
        max: usize,
    },
}

impl ErrorCode for TransactionError {
    fn code(&self) -> &'static str {
        match self {
            Self::Deserialization(_) => "TX_DESERIALIZATION_ERROR",
            Self::State(_) => "TX_STATE_ERROR",
            Self::OutOfRangeId { .. } => "TX_OUT_OF_RANGE_ID",
            Self::Overflow(_) => "TX_OVERFLOW",
            Self::Unsupported(_) => "TX_UNSUPPORTED",
            Self::UnknownContract(_) => "TX_UNKNOWN_CONTRACT",
            Self::Unauthorized { .. } => "TX_UNAUTHORIZED",
            Self::CallDepthExceeded(_) => "TX_CALL_DEPTH_EXCEEDED",
            Self::InputTooLarge { .. } => "TX_INPUT_TOO_LARGE",
        }
    }
}

/// The canonical codec reports failures as strings; at the call boundary they
/// are decode failures of the request.
impl From<String> for TransactionError {
    fn from(s: String) -> Self {
        TransactionError::Deserialization(s)
    }
}

/// General errors for configuration and identity parsing.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An identity string was not 32 bytes of hex.
    #[error("Invalid identity: {0}")]
    InvalidIdentity(String),
    /// A configuration document could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ErrorCode for CoreError {
    fn code(&self) -> &'static str {
        match self {
            Self::InvalidIdentity(_) => "CORE_INVALID_IDENTITY",
            Self::Config(_) => "CORE_CONFIG_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        let err = TransactionError::OutOfRangeId { id: 9, next_id: 2 };
        assert_eq!(err.code(), "TX_OUT_OF_RANGE_ID");
        assert_eq!(err.to_string(), "Record id 9 is out of range (next id is 2)");

        let wrapped: TransactionError = StateError::Decode("bad".into()).into();
        assert_eq!(wrapped.code(), "TX_STATE_ERROR");
    }

    #[test]
    fn test_codec_strings_map_to_deserialization() {
        let err: TransactionError = String::from("canonical decode failed: eof").into();
        assert!(matches!(err, TransactionError::Deserialization(_)));
    }
}
