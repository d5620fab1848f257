// src/application/note_store.rs
use crate::application::NoteService;
use crate::domain::{DisplayMode, DomainError, Note, NoteDraft};
use chrono::Utc;
use rand::Rng;
use tracing::{debug, info, instrument, warn};

/// Client-side note state, kept in step with a remote collection
pub struct NoteStore<S: NoteService> {
    service: S,
    collection: Vec<Note>,
    display_mode: DisplayMode,
    draft_content: String,
    initialized: bool,
}

impl<S: NoteService> NoteStore<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            collection: Vec::new(),
            display_mode: DisplayMode::default(),
            draft_content: String::new(),
            initialized: false,
        }
    }

    /// Load the collection from the service.
    ///
    /// Runs at most once per store: later calls return without a request,
    /// whether or not the first load succeeded. On failure the collection
    /// stays empty.
    #[instrument(level = "debug", skip(self))]
    pub async fn initialize(&mut self) -> Result<(), DomainError> {
        if self.initialized {
            debug!("Store already initialized, skipping fetch");
            return Ok(());
        }
        self.initialized = true;

        let notes = self
            .service
            .list_all()
            .await
            .map_err(DomainError::FetchFailed)?;

        info!(count = notes.len(), "Notes have been fetched");
        self.collection = notes;
        Ok(())
    }

    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft_content = text.into();
    }

    /// Submit the current draft with a random importance flag
    pub async fn add_note(&mut self) -> Result<&Note, DomainError> {
        let important = rand::thread_rng().gen_bool(0.5);
        self.add_note_with_importance(important).await
    }

    /// Submit the current draft.
    ///
    /// The returned record is appended only after the service confirms it.
    /// A rejected create leaves both the collection and the draft untouched.
    #[instrument(level = "debug", skip(self))]
    pub async fn add_note_with_importance(&mut self, important: bool) -> Result<&Note, DomainError> {
        let candidate = NoteDraft {
            id: self.next_id(),
            content: self.draft_content.clone(),
            date: Utc::now(),
            important,
        };
        debug!(?candidate, "Posting note");

        let stored = self
            .service
            .create(&candidate)
            .await
            .map_err(DomainError::CreateFailed)?;

        info!(note_id = stored.id, "Note posted to server");
        self.collection.push(stored);
        self.draft_content.clear();
        Ok(&self.collection[self.collection.len() - 1])
    }

    /// Invert the importance flag of a note on the service.
    ///
    /// A rejected update evicts the note from the local collection.
    #[instrument(level = "debug", skip(self))]
    pub async fn toggle_importance(&mut self, id: i64) -> Result<&Note, DomainError> {
        let changed = self
            .collection
            .iter()
            .find(|n| n.id == id)
            .map(Note::with_importance_toggled)
            .ok_or(DomainError::NoteNotFound(id))?;

        match self.service.update_by_id(id, &changed).await {
            Ok(returned) => {
                let position = self
                    .position_of(id)
                    .ok_or(DomainError::NoteNotFound(id))?;
                debug!(note_id = id, important = returned.important, "Note updated");
                self.collection[position] = returned;
                Ok(&self.collection[position])
            }
            Err(source) => {
                warn!(note_id = id, error = %source, "Update rejected, evicting note");
                self.collection.retain(|n| n.id != id);
                Err(DomainError::UpdateFailed {
                    id,
                    content: changed.content,
                    source,
                })
            }
        }
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode;
    }

    pub fn visible_notes(&self) -> Vec<&Note> {
        self.collection
            .iter()
            .filter(|n| self.display_mode.admits(n))
            .collect()
    }

    pub fn notes(&self) -> &[Note] {
        &self.collection
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn draft_content(&self) -> &str {
        &self.draft_content
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    fn position_of(&self, id: i64) -> Option<usize> {
        self.collection.iter().position(|n| n.id == id)
    }

    // max + 1 rather than len + 1, so ids stay unique after an eviction.
    // Past i64::MAX the id is advisory 0 and the service assigns the real one.
    fn next_id(&self) -> i64 {
        self.collection
            .iter()
            .map(|n| n.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .unwrap_or(0)
    }
}
