// src/util/testing.rs

use anyhow::Result;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteService;
use crate::domain::{Note, NoteDraft, ServiceError};

/// Note with a fixed date, for building fixtures
pub fn sample_note(id: i64, content: &str, important: bool) -> Note {
    Note {
        id,
        content: content.to_string(),
        date: "2022-01-10T17:30:31.098Z"
            .parse()
            .expect("fixture date is valid"),
        important,
    }
}

/// Shared in-memory stand-in for the remote note collection
///
/// Behaves like a json-server resource by default: `create` assigns the next
/// free id, `update_by_id` replaces a stored note and answers 404 for
/// unknown ids. Failures can be scripted per call kind.
///
/// # Examples
///
/// ```
/// use notekeeper::util::testing::{sample_note, MockNoteService};
///
/// let mock = MockNoteService::builder()
///     .with_note(sample_note(1, "HTML is easy", true))
///     .with_update_failure(1)
///     .build();
/// ```
pub struct MockNoteService {
    notes: Mutex<Vec<Note>>,
    created: Mutex<Vec<NoteDraft>>,
    update_responses: HashMap<i64, Note>,
    update_failures: HashSet<i64>,
    fail_list: bool,
    fail_create: bool,
    echo_candidate_ids: bool,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
}

impl MockNoteService {
    pub fn builder() -> MockNoteServiceBuilder {
        MockNoteServiceBuilder::new()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    /// Candidates received by `create`, in call order
    pub fn created(&self) -> Vec<NoteDraft> {
        self.created.lock().expect("mock lock poisoned").clone()
    }

    /// Server-side view of the collection
    pub fn stored(&self) -> Vec<Note> {
        self.notes.lock().expect("mock lock poisoned").clone()
    }

    fn rejected(status: u16) -> ServiceError {
        ServiceError::Status {
            status,
            body: "{}".to_string(),
        }
    }
}

#[async_trait]
impl NoteService for MockNoteService {
    async fn list_all(&self) -> Result<Vec<Note>, ServiceError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list {
            return Err(ServiceError::Transport("connection refused".to_string()));
        }
        Ok(self.stored())
    }

    async fn create(&self, candidate: &NoteDraft) -> Result<Note, ServiceError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.created
            .lock()
            .expect("mock lock poisoned")
            .push(candidate.clone());
        if self.fail_create {
            return Err(Self::rejected(500));
        }

        let mut notes = self.notes.lock().expect("mock lock poisoned");
        let id = if self.echo_candidate_ids {
            candidate.id
        } else {
            notes
                .iter()
                .map(|n| n.id)
                .max()
                .unwrap_or(0)
                .checked_add(1)
                .ok_or_else(|| Self::rejected(507))?
        };
        let stored = Note {
            id,
            content: candidate.content.clone(),
            date: candidate.date,
            important: candidate.important,
        };
        notes.push(stored.clone());
        Ok(stored)
    }

    async fn update_by_id(&self, id: i64, note: &Note) -> Result<Note, ServiceError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if self.update_failures.contains(&id) {
            return Err(Self::rejected(404));
        }

        let mut notes = self.notes.lock().expect("mock lock poisoned");
        let slot = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| Self::rejected(404))?;
        let returned = self
            .update_responses
            .get(&id)
            .cloned()
            .unwrap_or_else(|| note.clone());
        *slot = returned.clone();
        Ok(returned)
    }
}

/// Builder for MockNoteService
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNoteServiceBuilder {
    notes: Vec<Note>,
    update_responses: HashMap<i64, Note>,
    update_failures: HashSet<i64>,
    fail_list: bool,
    fail_create: bool,
    echo_candidate_ids: bool,
}

impl MockNoteServiceBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            update_responses: HashMap::new(),
            update_failures: HashSet::new(),
            fail_list: false,
            fail_create: false,
            echo_candidate_ids: false,
        }
    }

    /// Seed the server-side collection; order is preserved by list_all
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    pub fn with_list_failure(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn with_create_failure(mut self) -> Self {
        self.fail_create = true;
        self
    }

    /// Configure update_by_id to be rejected for a specific ID
    pub fn with_update_failure(mut self, id: i64) -> Self {
        self.update_failures.insert(id);
        self
    }

    /// Configure the record update_by_id answers with for a specific ID
    pub fn with_update_response(mut self, id: i64, note: Note) -> Self {
        self.update_responses.insert(id, note);
        self
    }

    /// Keep the candidate's id on create instead of assigning one
    pub fn echo_candidate_ids(mut self) -> Self {
        self.echo_candidate_ids = true;
        self
    }

    pub fn build(self) -> MockNoteService {
        MockNoteService {
            notes: Mutex::new(self.notes),
            created: Mutex::new(vec![]),
            update_responses: self.update_responses,
            update_failures: self.update_failures,
            fail_list: self.fail_list,
            fail_create: self.fail_create,
            echo_candidate_ids: self.echo_candidate_ids,
            list_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
        }
    }
}

impl Default for MockNoteServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "reqwest", "mio", "h2", "tower"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
