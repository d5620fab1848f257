// src/infrastructure/mod.rs
pub mod config;
pub mod http;

pub use config::{Config, ServerConfig};
pub use http::HttpNoteService;
