//! CLI interface for Timeline.
//!
//! Two commands, each non-interactive: arguments in, output out.
//!
//! - `timeline add <title> [--date] [--link]` records one activity.
//! - `timeline list [--json]` shows the timeline, most recent first.
//!
//! Every invocation restores the saved timeline before doing anything else,
//! and every change is written back before the command returns.

mod format;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::entry::EntryForm;
use crate::persistence::PersistenceBridge;
use crate::storage::FileStorage;
use crate::store::Store;

use format::format_timeline;

/// Timeline: record what you did, see it most recent first.
#[derive(Debug, Parser)]
#[command(name = "timeline", after_long_help = USAGE_HELP)]
pub struct Cli {
    /// Directory the timeline is stored in.
    /// Overrides `TIMELINE_DATA_DIR` and `~/.timeline/config.toml`.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

const USAGE_HELP: &str = r#"Examples:
  timeline add "Gym" --date 2024-01-10
  timeline add "Launch" --date 2024-03-01 --link https://example.com/launch
  timeline list
  timeline list --json"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record a new activity. Prints the activity ID.
    Add {
        /// What happened.
        title: String,

        /// When it happened, as YYYY-MM-DD. Defaults to today.
        #[arg(long)]
        date: Option<String>,

        /// Optional absolute URL for the activity.
        #[arg(long)]
        link: Option<String>,
    },

    /// Show the timeline, most recent first.
    List {
        /// Print the stored JSON instead of the rendered timeline.
        #[arg(long)]
        json: bool,
    },
}

/// Run the CLI, returning an error message on failure.
pub fn run(config: &Config) -> Result<(), String> {
    let cli = Cli::parse();

    let data_dir = config.resolve_data_dir(cli.data_dir.as_deref())?;
    let storage = FileStorage::new(&data_dir)
        .map_err(|e| format!("failed to open storage at {}: {e}", data_dir.display()))?;

    let mut store = Store::new();
    PersistenceBridge::attach(&mut store, storage);

    match cli.command {
        Command::Add { title, date, link } => {
            let mut form = EntryForm {
                title,
                link: link.unwrap_or_default(),
                ..EntryForm::default()
            };
            if let Some(date) = date {
                form.date = date;
            }
            cmd_add(&mut store, &form)
        }
        Command::List { json } => cmd_list(&store, json),
    }
}

fn cmd_add(store: &mut Store, form: &EntryForm) -> Result<(), String> {
    let entry = form
        .validate()
        .map_err(|errors| format!("invalid activity\n{errors}"))?;
    let activity = entry.into_activity();
    let id = activity.id.clone();

    store.append(activity);

    println!("{id}");
    Ok(())
}

fn cmd_list(store: &Store, json: bool) -> Result<(), String> {
    let activities = &store.state().activities;

    if json {
        let json = serde_json::to_string_pretty(activities)
            .map_err(|e| format!("failed to serialize activities: {e}"))?;
        println!("{json}");
    } else {
        print!("{}", format_timeline(activities));
    }

    Ok(())
}
