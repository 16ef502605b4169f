//! Error types for the task-list client.
//!
//! # Design
//! `ApiError` covers everything that can go wrong once a request leaves the
//! controller: the transport failing, the backend answering with a non-2xx
//! status, or a body that does not decode. `ActionError` wraps it and adds the
//! precondition failures the controller detects before any request is built.
//! A rejected precondition never touches the network.

use thiserror::Error;

use crate::types::TaskId;

/// Errors produced while talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 — the requested task does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The host could not complete the round-trip (connection refused,
    /// timeout, unreadable body).
    #[error("transport failed: {0}")]
    Transport(String),
}

/// Errors returned by `TodoListController` operations.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("title must not be blank")]
    BlankTitle,

    #[error("task {0} is already being edited")]
    EditInProgress(TaskId),

    #[error("no edit is in progress")]
    NoActiveEdit,

    #[error("task {0} is not in the list")]
    UnknownTask(TaskId),

    #[error("invalid due date {0:?}, expected YYYY-MM-DD")]
    InvalidDueDate(String),

    #[error("invalid priority {0:?}, expected high, medium or low")]
    InvalidPriority(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ActionError {
    /// True when the operation was refused locally and no request was sent.
    pub fn is_rejected(&self) -> bool {
        !matches!(self, ActionError::Api(_))
    }
}
