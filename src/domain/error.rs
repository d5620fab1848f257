// src/domain/error.rs
use thiserror::Error;

/// Failure of a single call against the remote note collection
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Service responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Could not decode service response: {0}")]
    Decode(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown display mode: {0}")]
pub struct ParseDisplayModeError(pub String);

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Notes could not be fetched from server")]
    FetchFailed(#[source] ServiceError),
    #[error("Note could not be added")]
    CreateFailed(#[source] ServiceError),
    #[error("The note {content} is unavailable")]
    UpdateFailed {
        id: i64,
        content: String,
        #[source]
        source: ServiceError,
    },
    #[error("Note not found: {0}")]
    NoteNotFound(i64),
}
