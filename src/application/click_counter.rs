// src/application/click_counter.rs
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "L"),
            Side::Right => write!(f, "R"),
        }
    }
}

/// Left/right click counters with the full press history.
///
/// Independent of the notes; it only ever grows.
#[derive(Debug, Default)]
pub struct ClickCounter {
    left: u32,
    right: u32,
    all_clicks: Vec<Side>,
}

impl ClickCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn click_left(&mut self) {
        self.all_clicks.push(Side::Left);
        self.left += 1;
    }

    pub fn click_right(&mut self) {
        self.all_clicks.push(Side::Right);
        self.right += 1;
    }

    pub fn left(&self) -> u32 {
        self.left
    }

    pub fn right(&self) -> u32 {
        self.right
    }

    pub fn history(&self) -> &[Side] {
        &self.all_clicks
    }

    pub fn history_text(&self) -> String {
        if self.all_clicks.is_empty() {
            return "the app is used by pressing the buttons".to_string();
        }

        let presses: Vec<String> = self.all_clicks.iter().map(Side::to_string).collect();
        format!("button press history: {}", presses.join(" "))
    }
}
