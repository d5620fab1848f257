// src/ports/text.rs
use crate::application::{ClickCounter, NoteService, Session};
use crate::domain::{DisplayMode, Note};
use anyhow::{Context, Result};
use std::fmt::Write;

/// Renders store state as plain terminal text
#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn toggle_label(note: &Note) -> &'static str {
        if note.important {
            "Mark as not important"
        } else {
            "Mark as important"
        }
    }

    /// Label of the control that flips the display mode
    pub fn display_mode_label(mode: DisplayMode) -> &'static str {
        match mode {
            DisplayMode::All => "show important",
            DisplayMode::ImportantOnly => "show all",
        }
    }

    pub fn render_note(&self, note: &Note) -> String {
        let marker = if note.important { '*' } else { ' ' };
        format!(
            "{marker} {:>4}  {}  [{}]",
            note.id,
            note.content,
            Self::toggle_label(note)
        )
    }

    pub fn render_notes(&self, notes: &[&Note]) -> String {
        if notes.is_empty() {
            return "(no notes)\n".to_string();
        }
        notes.iter().fold(String::new(), |mut out, note| {
            let _ = writeln!(out, "{}", self.render_note(note));
            out
        })
    }

    pub fn render_clicks(&self, clicks: &ClickCounter) -> String {
        format!(
            "left {}  right {}\n{}\n",
            clicks.left(),
            clicks.right(),
            clicks.history_text()
        )
    }

    /// Full view of a session: notice, clicks, visible notes, controls
    pub fn render_session<S: NoteService>(&self, session: &Session<S>) -> String {
        let store = session.store();
        let mut out = String::new();

        if let Some(notice) = session.notice() {
            let _ = writeln!(out, "{notice}");
        }
        out.push_str(&self.render_clicks(session.clicks()));
        out.push_str(&self.render_notes(&store.visible_notes()));
        let _ = writeln!(
            out,
            "[{}]  draft: {:?}",
            Self::display_mode_label(store.display_mode()),
            store.draft_content()
        );
        out
    }

    pub fn render_json(&self, notes: &[&Note]) -> Result<String> {
        serde_json::to_string_pretty(notes).context("Failed to serialize notes to JSON")
    }
}
