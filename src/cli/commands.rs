use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use super::render::{render_message, render_timeline_entry};
use crate::config::{AppConfig, GlobalArgs};
use crate::conversation::{AskOutcome, ConversationSession, ConversationStore, HttpAnswerService};
use crate::filters::TimelineFilterEngine;
use crate::parsers::load_transcript;
use crate::storage::FileSlot;
use crate::tui;
use crate::utils::format_path_with_tilde;

#[derive(Parser)]
#[command(name = "askwhy")]
#[command(version = "0.1.0")]
#[command(about = "Ask questions about past conversations and browse transcripts")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask one question and print the reply
    Ask {
        /// Question text; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
    /// Ask questions line by line from stdin (/reset clears, /quit exits)
    Chat,
    /// Print the saved conversation
    History,
    /// Clear the saved conversation
    Reset,
    /// Check the answering service and the saved conversation
    Status,
    /// Filter a recorded transcript by month, week and text
    Timeline {
        /// Transcript file (JSON array or JSON lines)
        file: PathBuf,

        /// Month to show, e.g. "January"
        #[arg(long)]
        month: Option<String>,

        /// Week to show, e.g. "Week 2"
        #[arg(long)]
        week: Option<String>,

        /// Case-insensitive text to look for in messages
        #[arg(long)]
        search: Option<String>,

        /// Print the available month and week options instead of entries
        #[arg(long)]
        facets: bool,

        /// Browse the transcript in the terminal UI
        #[arg(short, long, conflicts_with = "facets")]
        interactive: bool,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    match cli.command {
        Some(Commands::Ask { question }) => {
            let config = AppConfig::from_args(&cli.global)?;
            ask_once(&config, &question.join(" ")).await?;
        }
        Some(Commands::Chat) => {
            let config = AppConfig::from_args(&cli.global)?;
            chat(&config).await?;
        }
        Some(Commands::History) => {
            let config = AppConfig::from_args(&cli.global)?;
            show_history(&config);
        }
        Some(Commands::Reset) => {
            let config = AppConfig::from_args(&cli.global)?;
            reset(&config);
        }
        Some(Commands::Status) => {
            let config = AppConfig::from_args(&cli.global)?;
            show_status(&config).await?;
        }
        Some(Commands::Timeline { file, month, week, search, facets, interactive }) => {
            let options = TimelineOptions { month, week, search, facets, interactive };
            timeline(&file, options).await?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

/// Logs go to stderr so command output on stdout stays clean
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn open_store(config: &AppConfig) -> ConversationStore {
    debug!(data_dir = %config.data_dir.display(), "Opening conversation store");
    ConversationStore::open(FileSlot::new(&config.data_dir))
}

fn open_session(config: &AppConfig) -> Result<ConversationSession<HttpAnswerService>> {
    let service = HttpAnswerService::new(&config.service_url, config.request_timeout)
        .context("Failed to create answering service client")?;
    Ok(ConversationSession::new(open_store(config), service))
}

/// Ask a question and print the reply it produced
async fn ask_and_print(
    session: &ConversationSession<HttpAnswerService>,
    question: &str,
) -> AskOutcome {
    let outcome = session.ask(question).await;
    if outcome == AskOutcome::Ignored {
        return outcome;
    }

    let messages = session.messages();
    if let Some(reply) = messages.last() {
        println!("{}", render_message(reply));
    }
    outcome
}

async fn ask_once(config: &AppConfig, question: &str) -> Result<()> {
    let session = open_session(config)?;

    match ask_and_print(&session, question).await {
        AskOutcome::Ignored => bail!("Question is empty"),
        AskOutcome::Answered => Ok(()),
        AskOutcome::Failed => bail!(
            "Could not get an answer from {} (rerun with --verbose for details)",
            session.service().base_url()
        ),
    }
}

async fn chat(config: &AppConfig) -> Result<()> {
    let session = open_session(config)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read from stdin")? {
        match line.trim() {
            "/quit" => break,
            "/reset" => {
                session.reset();
                println!("Conversation cleared.");
            }
            _ => {
                ask_and_print(&session, &line).await;
            }
        }
    }

    Ok(())
}

fn show_history(config: &AppConfig) {
    let store = open_store(config);
    if store.is_empty() {
        println!("No saved conversation.");
        return;
    }

    for message in store.messages() {
        println!("{}", render_message(message));
    }
}

fn reset(config: &AppConfig) {
    let mut store = open_store(config);
    let count = store.len();
    store.clear();
    println!("Cleared {} saved message(s).", count);
}

async fn show_status(config: &AppConfig) -> Result<()> {
    let store = open_store(config);
    println!("AskWhy Status");
    println!("=============");
    println!("Data directory: {}", format_path_with_tilde(&config.data_dir));
    println!("Saved messages: {}", store.len());
    println!("Service: {}", config.service_url);

    let service = HttpAnswerService::new(&config.service_url, config.request_timeout)
        .context("Failed to create answering service client")?;
    match service.health().await {
        Ok(status) => {
            println!("Service status: {}", status);
            Ok(())
        }
        Err(e) => {
            println!("Service status: unreachable");
            Err(e).context("Answering service health check failed")
        }
    }
}

struct TimelineOptions {
    month: Option<String>,
    week: Option<String>,
    search: Option<String>,
    facets: bool,
    interactive: bool,
}

async fn timeline(path: &Path, options: TimelineOptions) -> Result<()> {
    let transcript = load_transcript(path)?;
    let mut engine = TimelineFilterEngine::new(transcript);

    if let Some(month) = &options.month {
        engine.set_month(month);
        if &engine.state().selected_month != month {
            warn!(month = %month, "No entries for month, showing all months");
        }
    }
    if let Some(week) = &options.week {
        engine.set_week(week);
        if &engine.state().selected_week != week {
            warn!(week = %week, "No entries for week, showing all weeks");
        }
    }
    if let Some(search) = &options.search {
        engine.set_search(search);
    }

    if options.interactive {
        return tokio::task::spawn_blocking(move || tui::run_interactive(engine))
            .await
            .context("Timeline browser stopped unexpectedly")?;
    }

    if options.facets {
        println!("Months: {}", engine.month_options().join(", "));
        let weeks = engine.week_options().join(", ");
        println!("Weeks ({}): {}", engine.state().selected_month, weeks);
        return Ok(());
    }

    let filtered = engine.filtered();
    for entry in &filtered {
        println!("{}", render_timeline_entry(entry));
    }
    println!();
    println!("Showing {} of {} entries", filtered.len(), engine.entries().len());

    Ok(())
}
