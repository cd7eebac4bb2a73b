//! Playfield command-line client
//!
//! Main application entry point

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use playfield_client::{
    config::Settings,
    handlers::{ActionOutcome, EventInteractionClient, FetchOutcome, TerminalFeedback},
    models::{CommentForm, EventFilter},
    state::{ActionState, Control},
    utils::logging,
    views::{events::control_id, EventBrowser, EventDetailView},
};

#[derive(Parser, Debug)]
#[command(name = "playfield", version, about = "Browse and join Playfield events")]
struct Cli {
    /// Configuration file to load instead of ./playfield.*
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Answer yes to confirmation prompts
    #[arg(short, long)]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List upcoming events
    Upcoming {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        skill_level: Option<String>,
        /// First day to include (YYYY-MM-DD)
        #[arg(long)]
        date_from: Option<NaiveDate>,
        /// Last day to include (YYYY-MM-DD)
        #[arg(long)]
        date_to: Option<NaiveDate>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        page: Option<u32>,
    },
    /// List past events
    Past,
    /// Show one event
    Show { id: i64 },
    /// Join or leave an event
    Toggle { id: i64 },
    /// Cancel an event you host
    Cancel { id: i64 },
    /// Delete a past event you hosted
    Delete { id: i64 },
    /// Comment on an event
    Comment { id: i64, text: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Settings::new().context("Failed to load configuration")?,
    };
    settings.validate()?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;
    info!("Starting {}", playfield_client::info());

    let feedback = Arc::new(TerminalFeedback::new(cli.yes));
    let client = EventInteractionClient::new(&settings, feedback)?;
    let browser = EventBrowser::default();

    let succeeded = run(&client, &browser, cli.command).await?;

    if let Some(markup) = browser.render_active().await {
        println!("{}", markup);
    }

    Ok(if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

async fn run(
    client: &EventInteractionClient,
    browser: &EventBrowser,
    command: Command,
) -> anyhow::Result<bool> {
    debug!(command = ?command, "Running command");

    let succeeded = match command {
        Command::Upcoming {
            category,
            skill_level,
            date_from,
            date_to,
            search,
            page,
        } => {
            let filter = EventFilter {
                category,
                skill_level,
                date_from,
                date_to,
                search,
                page,
            };
            fetched(client.show_upcoming(browser, &filter).await)
        }
        Command::Past => fetched(client.show_past(browser).await),
        Command::Show { id } => fetched(client.show_event(browser, id).await),
        Command::Toggle { id } => {
            let detail = load_detail(client, browser, id).await?;
            let control = control_for(&detail, &[ActionState::Attend, ActionState::Unattend])?;
            completed(client.toggle_attendance(browser, &control, &detail.toggle_url()).await)
        }
        Command::Cancel { id } => {
            let detail = load_detail(client, browser, id).await?;
            let control = control_for(&detail, &[ActionState::CancelEvent])?;
            completed(client.cancel_event(browser, &control, &detail.cancel_url()).await)
        }
        Command::Delete { id } => {
            let detail = load_detail(client, browser, id).await?;
            let control = control_for(&detail, &[ActionState::DeletePastEvent])?;
            completed(client.delete_past_event(browser, &control, id).await)
        }
        Command::Comment { id, text } => {
            let form = CommentForm::new(text);
            if form.is_blank() {
                bail!("Comment text is empty");
            }
            let detail = load_detail(client, browser, id).await?;
            let control = Control::new(playfield_client::views::comments::COMMENT_SUBMIT_ID);
            completed(
                client
                    .submit_comment(browser, &control, &detail.comment_url(), &form)
                    .await,
            )
        }
    };

    Ok(succeeded)
}

async fn load_detail(
    client: &EventInteractionClient,
    browser: &EventBrowser,
    id: i64,
) -> anyhow::Result<EventDetailView> {
    if let FetchOutcome::Failed(message) = client.show_event(browser, id).await {
        bail!("Failed to load event {}: {}", id, message);
    }
    browser
        .detail()
        .await
        .with_context(|| format!("Event {} is not loaded", id))
}

/// Control for the action the event currently offers, if it is one of `allowed`
fn control_for(detail: &EventDetailView, allowed: &[ActionState]) -> anyhow::Result<Control> {
    match detail.action {
        Some(action) if allowed.contains(&action) => match control_id(action) {
            Some(id) => Ok(Control::new(id)),
            None => bail!("This action is not available for event {}", detail.event.id),
        },
        Some(_) => bail!("This action is not available for event {}", detail.event.id),
        None => bail!("You need to log in first."),
    }
}

fn fetched(outcome: FetchOutcome) -> bool {
    !matches!(outcome, FetchOutcome::Failed(_))
}

fn completed(outcome: ActionOutcome) -> bool {
    matches!(outcome, ActionOutcome::Completed | ActionOutcome::Declined)
}
