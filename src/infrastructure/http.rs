// src/infrastructure/http.rs
use crate::application::NoteService;
use crate::domain::{Note, NoteDraft, ServiceError};
use crate::infrastructure::config::ServerConfig;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

/// NoteService backed by a json-server style REST resource
#[derive(Debug, Clone)]
pub struct HttpNoteService {
    base_url: String,
    client: Client,
}

impl HttpNoteService {
    pub fn new(config: &ServerConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let base_url = format!(
            "{}/{}",
            config.base_url.trim_end_matches('/'),
            config.resource.trim_matches('/')
        );
        debug!(%base_url, "Created HTTP note service");

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ServiceError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<T>()
            .await
            .map_err(|e| ServiceError::Decode(e.to_string()))
    }
}

fn transport(err: reqwest::Error) -> ServiceError {
    ServiceError::Transport(err.to_string())
}

#[async_trait]
impl NoteService for HttpNoteService {
    #[instrument(level = "debug", skip(self))]
    async fn list_all(&self) -> Result<Vec<Note>, ServiceError> {
        let resp = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(transport)?;

        Self::decode(resp).await
    }

    #[instrument(level = "debug", skip(self))]
    async fn create(&self, candidate: &NoteDraft) -> Result<Note, ServiceError> {
        let resp = self
            .client
            .post(&self.base_url)
            .json(candidate)
            .send()
            .await
            .map_err(transport)?;

        Self::decode(resp).await
    }

    #[instrument(level = "debug", skip(self, note))]
    async fn update_by_id(&self, id: i64, note: &Note) -> Result<Note, ServiceError> {
        let resp = self
            .client
            .put(format!("{}/{}", self.base_url, id))
            .json(note)
            .send()
            .await
            .map_err(transport)?;

        Self::decode(resp).await
    }
}
