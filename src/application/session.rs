// src/application/session.rs
use crate::application::{ClickCounter, NoteService, NoteStore};
use crate::domain::{DisplayMode, DomainError};
use tracing::{debug, warn};

/// A single user action coming from the view layer
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    UpdateDraft(String),
    AddNote,
    ToggleImportance(i64),
    SetDisplayMode(DisplayMode),
    ToggleDisplayMode,
    ClickLeft,
    ClickRight,
}

/// Binds intents to the note store and the click counter.
///
/// Failures never escape a dispatch; they become the current notice.
pub struct Session<S: NoteService> {
    store: NoteStore<S>,
    clicks: ClickCounter,
    notice: Option<String>,
}

impl<S: NoteService> Session<S> {
    pub fn new(service: S) -> Self {
        Self {
            store: NoteStore::new(service),
            clicks: ClickCounter::new(),
            notice: None,
        }
    }

    pub async fn start(&mut self) {
        let result = self.store.initialize().await;
        self.settle(result);
    }

    pub async fn dispatch(&mut self, intent: Intent) {
        debug!(?intent, "Dispatching intent");
        match intent {
            Intent::UpdateDraft(text) => self.store.update_draft(text),
            Intent::AddNote => {
                let result = self.store.add_note().await.map(|_| ());
                self.settle(result);
            }
            Intent::ToggleImportance(id) => {
                let result = self.store.toggle_importance(id).await.map(|_| ());
                self.settle(result);
            }
            Intent::SetDisplayMode(mode) => self.store.set_display_mode(mode),
            Intent::ToggleDisplayMode => {
                let mode = self.store.display_mode().toggled();
                self.store.set_display_mode(mode);
            }
            Intent::ClickLeft => self.clicks.click_left(),
            Intent::ClickRight => self.clicks.click_right(),
        }
    }

    pub fn store(&self) -> &NoteStore<S> {
        &self.store
    }

    pub fn clicks(&self) -> &ClickCounter {
        &self.clicks
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    fn settle(&mut self, result: Result<(), DomainError>) {
        self.notice = match result {
            Ok(()) => None,
            Err(err) => Some(notice_for(&err)),
        };
    }
}

/// User-facing text for a failed operation
pub fn notice_for(err: &DomainError) -> String {
    match err {
        DomainError::FetchFailed(source) => {
            warn!(error = %source, "Initial fetch rejected");
            "Error: Notes could not be fetched from server.".to_string()
        }
        DomainError::CreateFailed(source) => {
            warn!(error = %source, "Create rejected");
            "Error: Note could not be added.".to_string()
        }
        DomainError::UpdateFailed { content, .. } => {
            format!("Error: the note {content} is unavailable.")
        }
        DomainError::NoteNotFound(id) => {
            warn!(note_id = id, "Toggle requested for a note that is not loaded");
            format!("Error: no note with id {id}")
        }
    }
}
