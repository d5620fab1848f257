// src/lib.rs
pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{bail, Context, Result};
use application::{notice_for, NoteService, NoteStore, Session};
use cli::args::{Args, Command};
use cli::shell::{self, ShellCommand};
use domain::DisplayMode;
use infrastructure::{Config, HttpNoteService};
use ports::TextPresenter;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};

pub async fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notekeeper with arguments");

    // Initialize infrastructure
    let config = load_config(&args)?;
    let service = HttpNoteService::new(&config.server)
        .context("Failed to set up HTTP client")?;
    info!(url = service.base_url(), "Using note service");

    let presenter = TextPresenter::new();

    match args.command {
        Command::List { important, json } => {
            let mut store = NoteStore::new(service);
            initialize(&mut store).await?;
            if important {
                store.set_display_mode(DisplayMode::ImportantOnly);
            }

            let notes = store.visible_notes();
            if json {
                println!("{}", presenter.render_json(&notes)?);
            } else {
                print!("{}", presenter.render_notes(&notes));
            }
        }
        Command::Add { content, important } => {
            let mut store = NoteStore::new(service);
            initialize(&mut store).await?;
            store.update_draft(content);

            let result = match important {
                Some(flag) => store.add_note_with_importance(flag).await,
                None => store.add_note().await,
            };
            let note = result.map_err(|e| anyhow::anyhow!(notice_for(&e)))?;
            println!("{}", presenter.render_note(note));
        }
        Command::Toggle { note_id } => {
            let mut store = NoteStore::new(service);
            initialize(&mut store).await?;

            let note = store
                .toggle_importance(note_id)
                .await
                .map_err(|e| anyhow::anyhow!(notice_for(&e)))?;
            println!("{}", presenter.render_note(note));
        }
        Command::Shell => run_shell(service, &presenter).await?,
    }

    Ok(())
}

async fn initialize<S: NoteService>(store: &mut NoteStore<S>) -> Result<()> {
    if let Err(e) = store.initialize().await {
        bail!(notice_for(&e));
    }
    Ok(())
}

/// Interactive loop: one line is handled to completion before the next is read
async fn run_shell<S: NoteService>(service: S, presenter: &TextPresenter) -> Result<()> {
    let mut session = Session::new(service);
    session.start().await;

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout.write_all(presenter.render_session(&session).as_bytes()).await?;
    stdout.write_all(b"> ").await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let output = match shell::parse_line(&line) {
            Ok(ShellCommand::Quit) => break,
            Ok(ShellCommand::Help) => format!("{}\n", shell::HELP),
            Ok(ShellCommand::List) => presenter.render_session(&session),
            Ok(ShellCommand::Intent(intent)) => {
                session.dispatch(intent).await;
                presenter.render_session(&session)
            }
            Err(msg) => format!("{msg}\n"),
        };

        stdout.write_all(output.as_bytes()).await?;
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
    }

    info!("Session closed");
    Ok(())
}

pub fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            debug!(?path, "Using provided config path");
            Config::load(path)?
        }
        None => Config::load_or_default(Config::default_path()?)?,
    };

    if let Some(url) = &args.server {
        debug!(%url, "Overriding server URL from command line");
        config.server.base_url = url.clone();
    }
    Ok(config)
}
