use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use log::LevelFilter;

use mindwell_lib::{
    assistant::ChatSession,
    blobs::BlobRegistry,
    checkin,
    config::{default_data_dir, BackendKind, Config},
    dashboard::{self, Overview},
    models::{mood_emoji, CheckinForm, StressBand},
    utils::logging,
    AppState,
};

#[derive(Parser)]
#[command(name = "mindwell")]
#[command(about = "Wellness check-ins, dashboard notes and a pocket wellness assistant")]
struct Cli {
    /// Directory holding the session store
    #[arg(long, env = "MINDWELL_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Storage backend
    #[arg(long, value_enum, env = "MINDWELL_BACKEND", default_value = "json")]
    backend: BackendKind,

    /// Default log level (RUST_LOG still wins per module)
    #[arg(long, env = "MINDWELL_LOG", default_value = "info")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the dashboard overview
    Overview,
    /// Record today's check-in
    Checkin {
        #[arg(long, default_value_t = 7.0)]
        sleep: f64,
        #[arg(long, default_value_t = 5)]
        mood: u8,
        #[arg(long, default_value_t = 3)]
        stress: u8,
        #[arg(long, default_value_t = 6)]
        energy: u8,
        #[arg(long, default_value_t = 3)]
        social: u8,
        #[arg(long, default_value = "")]
        work_hours: String,
        #[arg(long, default_value = "")]
        exercise: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Dismiss the check-in note shown on the overview
    Dismiss,
    /// Manage attached reports
    Reports {
        #[command(subcommand)]
        action: ReportAction,
    },
    /// Ask the wellness assistant
    Chat {
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
    /// Show the stored profile
    Profile,
    /// Clear every stored value
    Logout,
}

#[derive(Subcommand)]
enum ReportAction {
    List,
    Add {
        #[arg(required = true, num_args = 1..)]
        files: Vec<PathBuf>,
    },
    Remove {
        index: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        data_dir: cli.data_dir.unwrap_or_else(default_data_dir),
        backend: cli.backend,
        log_level: cli.log_level,
    };
    logging::init(config.log_level);

    log::info!("MindWell starting up...");
    let app = AppState::from_config(&config)?;

    match cli.command {
        Command::Overview => {
            let overview = Overview::load(&app.store);
            println!("{}", overview.greeting_at(Local::now()));
            println!(
                "{} ({}) <{}>",
                overview.profile.display_name(),
                overview.profile.initials(),
                overview.profile.email
            );
            println!("Sleep last night: {}", overview.sleep_label());
            if overview.has_feedback() {
                println!("Note from your check-in: {}", overview.feedback);
            }
            let reports = app.reports().list();
            println!("Attached reports: {}", reports.len());
        }
        Command::Checkin {
            sleep,
            mood,
            stress,
            energy,
            social,
            work_hours,
            exercise,
            notes,
        } => {
            let form = CheckinForm {
                sleep,
                mood,
                stress,
                energy,
                social_interactions: social,
                work_hours,
                exercise,
                notes,
            };
            let receipt = checkin::submit(&app.store, &form)?;
            println!("Daily check-in saved! 🎉");
            println!(
                "Mood {} {}, stress {}",
                form.mood,
                mood_emoji(form.mood),
                StressBand::from_level(form.stress).as_str()
            );
            println!("Sleep recorded: {}h", receipt.sleep_hours);
            if let Some(note) = receipt.feedback {
                println!("Note pinned to the dashboard: {note}");
            }
        }
        Command::Dismiss => {
            dashboard::dismiss_feedback(&app.store);
            println!("Note dismissed.");
        }
        Command::Reports { action } => {
            let shelf = app.reports();
            match action {
                ReportAction::List => {
                    let reports = shelf.list();
                    if reports.is_empty() {
                        println!("No reports attached yet.");
                    }
                    for (index, report) in reports.iter().enumerate() {
                        let state = if shelf.open(index).is_some() {
                            "available"
                        } else if BlobRegistry::is_blob_url(&report.url) {
                            "link expired"
                        } else {
                            "unrecognised link"
                        };
                        println!("{index}: {} ({state})", report.name);
                    }
                }
                ReportAction::Add { files } => {
                    for report in shelf.upload(&files) {
                        println!("Attached {}", report.name);
                    }
                }
                ReportAction::Remove { index } => {
                    if let Some(report) = shelf.delete(index) {
                        println!("Removed {} (report {index}).", report.name);
                    } else {
                        println!("No report at index {index}.");
                    }
                }
            }
        }
        Command::Chat { message } => {
            let mut session = ChatSession::new();
            let input = message.join(" ");
            match session.send(&input) {
                Some(reply) => println!("{reply}"),
                None => println!("Say something and I'll do my best to help."),
            }
        }
        Command::Profile => {
            let page = app.settings();
            let profile = page.profile();
            println!("{}", profile.display_name());
            println!("{}", profile.email);
        }
        Command::Logout => {
            app.settings().logout();
            println!("Logged out.");
        }
    }

    Ok(())
}
