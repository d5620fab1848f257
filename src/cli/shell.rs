// src/cli/shell.rs
use crate::application::Intent;
use crate::domain::DisplayMode;

pub const HELP: &str = "\
commands:
  draft <text>            set the draft note text
  save                    add the draft as a new note
  toggle <id>             flip the importance of a note
  show [all|important]    choose which notes are listed (no argument flips)
  left | right            press a click counter
  list                    redraw the view
  help                    show this text
  quit                    leave the session";

/// One parsed line of the interactive session
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Intent(Intent),
    List,
    Help,
    Quit,
}

pub fn parse_line(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "draft" => Ok(ShellCommand::Intent(Intent::UpdateDraft(rest.to_string()))),
        "save" => Ok(ShellCommand::Intent(Intent::AddNote)),
        "toggle" => rest
            .parse::<i64>()
            .map(|id| ShellCommand::Intent(Intent::ToggleImportance(id)))
            .map_err(|_| format!("toggle needs a numeric note id, got {rest:?}")),
        "show" if rest.is_empty() => Ok(ShellCommand::Intent(Intent::ToggleDisplayMode)),
        "show" => rest
            .parse::<DisplayMode>()
            .map(|mode| ShellCommand::Intent(Intent::SetDisplayMode(mode)))
            .map_err(|e| e.to_string()),
        "left" => Ok(ShellCommand::Intent(Intent::ClickLeft)),
        "right" => Ok(ShellCommand::Intent(Intent::ClickRight)),
        "list" | "" => Ok(ShellCommand::List),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" => Ok(ShellCommand::Quit),
        other => Err(format!("unknown command: {other} (try help)")),
    }
}
