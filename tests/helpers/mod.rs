use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use notekeeper::domain::Note;
use notekeeper::infrastructure::{HttpNoteService, ServerConfig};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// In-process stand-in for a json-server `/notes` resource
#[derive(Clone, Default)]
pub struct FakeCollection {
    notes: Arc<Mutex<Vec<Note>>>,
    failing: bool,
}

#[allow(dead_code)]
impl FakeCollection {
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: Arc::new(Mutex::new(notes)),
            failing: false,
        }
    }

    /// Every request answers 500
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn snapshot(&self) -> Vec<Note> {
        self.notes.lock().unwrap().clone()
    }

    /// Drop a note on the server side only
    pub fn remove(&self, id: i64) {
        self.notes.lock().unwrap().retain(|n| n.id != id);
    }

    pub async fn serve(&self) -> SocketAddr {
        let app = Router::new()
            .route("/notes", get(list_notes).post(create_note))
            .route("/notes/:id", put(update_note))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Fake server failed");
        });
        addr
    }
}

async fn list_notes(State(fake): State<FakeCollection>) -> Result<Json<Vec<Note>>, StatusCode> {
    if fake.failing {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(Json(fake.snapshot()))
}

async fn create_note(
    State(fake): State<FakeCollection>,
    Json(mut note): Json<Note>,
) -> Result<(StatusCode, Json<Note>), StatusCode> {
    if fake.failing {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let mut notes = fake.notes.lock().unwrap();
    // server assigns its own id, ignoring the candidate's
    note.id = notes.iter().map(|n| n.id).max().unwrap_or(0) + 100;
    notes.push(note.clone());
    Ok((StatusCode::CREATED, Json(note)))
}

async fn update_note(
    State(fake): State<FakeCollection>,
    Path(id): Path<i64>,
    Json(mut note): Json<Note>,
) -> Result<Json<Note>, StatusCode> {
    if fake.failing {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let mut notes = fake.notes.lock().unwrap();
    let slot = notes
        .iter_mut()
        .find(|n| n.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    note.id = id;
    *slot = note.clone();
    Ok(Json(note))
}

/// HTTP service pointed at a running fake
pub fn service_for(addr: SocketAddr) -> HttpNoteService {
    let config = ServerConfig {
        base_url: format!("http://{addr}"),
        resource: "notes".to_string(),
        timeout_secs: 5,
    };
    HttpNoteService::new(&config).expect("Failed to build HTTP service")
}
