// src/application/mod.rs
pub mod click_counter;
pub mod note_service;
pub mod note_store;
pub mod session;

pub use click_counter::{ClickCounter, Side};
pub use note_service::NoteService;
pub use note_store::NoteStore;
pub use session::{notice_for, Intent, Session};
