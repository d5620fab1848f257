// src/domain/mod.rs
pub mod error;
pub mod note;

pub use error::{DomainError, ParseDisplayModeError, ServiceError};
pub use note::{DisplayMode, Note, NoteDraft};
