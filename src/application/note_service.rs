// src/application/note_service.rs
use crate::domain::{Note, NoteDraft, ServiceError};
use async_trait::async_trait;

/// Remote key-addressed note collection.
///
/// Every call is fallible on its own; callers decide how local state
/// reconciles with a rejected call.
#[async_trait]
pub trait NoteService: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Note>, ServiceError>;

    /// Store a candidate note and return the stored record with its authoritative id
    async fn create(&self, candidate: &NoteDraft) -> Result<Note, ServiceError>;

    async fn update_by_id(&self, id: i64, note: &Note) -> Result<Note, ServiceError>;
}
