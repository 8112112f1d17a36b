//! CLI entry point for birthday-manager
//!
//! Provides command-line interface for listing, adding and deleting
//! birthdays, and launching the GUI.

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::*;
use std::io::{self, Write};
use std::path::PathBuf;
use tokio::runtime::Runtime;

use birthday_manager::api::HttpBirthdayApi;
use birthday_manager::config::{expand_path, Settings, DEFAULT_CONFIG_PATH};
use birthday_manager::core::{format_long_date, RecordId, ViewFilter};
use birthday_manager::ui::{ActionError, BirthdayManager, Confirm};

/// Default log filter, extended by `RUST_LOG`
const LOG_DIRECTIVE: &str = "birthday_manager=info";

#[derive(Parser)]
#[command(name = "birthday-manager")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Backend base URL, overrides config file and environment
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List birthdays, sorted by name
    List {
        /// Only show names starting with this prefix
        #[arg(short, long, default_value = "")]
        name: String,

        /// Only show birthdays in this month (1-12)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },

    /// Add a birthday
    Add {
        #[arg(short, long)]
        name: String,

        /// Date of birth (YYYY-MM-DD)
        #[arg(short, long)]
        dob: String,

        #[arg(short, long)]
        email: String,
    },

    /// Delete a birthday by id
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Launch GUI window
    Gui,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    initialize_logging()?;

    let cli = Cli::parse();

    let config_path = expand_path(&cli.config)?;
    let mut settings = Settings::load(&config_path)
        .with_context(|| format!("Failed to load settings from {}", config_path.display()))?;
    if let Some(url) = &cli.api_url {
        settings = settings.with_api_url(url)?;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let succeeded = match cli.command {
        Commands::List { name, month } => {
            runtime.block_on(list_birthdays(&settings, name, month))?
        }
        Commands::Add { name, dob, email } => {
            runtime.block_on(add_birthday(&settings, name, dob, email))?
        }
        Commands::Delete { id, yes } => {
            runtime.block_on(delete_birthday(&settings, RecordId::new(id), yes))?
        }
        Commands::Gui => launch_gui(&runtime, settings)?,
    };

    if !succeeded {
        std::process::exit(1);
    }

    Ok(())
}

/// Initialize the logging system
fn initialize_logging() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(LOG_DIRECTIVE.parse()?),
        )
        .init();
    Ok(())
}

/// Terminal `[y/N]` confirmation, skipped by `--yes`
struct CliConfirm {
    assume_yes: bool,
}

impl Confirm for CliConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        let prompt = prompt.to_string();
        tokio::task::spawn_blocking(move || ask(&prompt))
            .await
            .unwrap_or(false)
    }
}

/// Reads a yes/no answer from stdin; anything but "y"/"yes" is no
fn ask(prompt: &str) -> bool {
    print!("{} {} ", prompt.yellow(), "[y/N]".dimmed());
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }

    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn build_manager(
    settings: &Settings,
    assume_yes: bool,
) -> anyhow::Result<BirthdayManager<HttpBirthdayApi, CliConfirm>> {
    let api = HttpBirthdayApi::new(settings)?;
    Ok(BirthdayManager::new(api, CliConfirm { assume_yes }, settings))
}

/// Prints the final status notice in the colour of its outcome
fn print_status<A, C>(manager: &BirthdayManager<A, C>, ok: bool)
where
    A: birthday_manager::api::BirthdayApi,
    C: Confirm,
{
    let Some(text) = manager.status_text() else {
        return;
    };

    if ok {
        println!("{} {}", "✓".green(), text.green());
    } else {
        println!("{} {}", "✗".red().bold(), text.red());
    }
}

/// List all birthdays matching the filters
async fn list_birthdays(
    settings: &Settings,
    name: String,
    month: Option<u32>,
) -> anyhow::Result<bool> {
    let manager = build_manager(settings, true)?;

    println!("{} Fetching birthdays from {}", "→".cyan(), settings.api_base_url);
    manager
        .mount()
        .await
        .context("Failed to fetch birthdays")?;

    let month_query = month.map(|m| m.to_string()).unwrap_or_default();
    if let Some(month) = ViewFilter::new(&name, &month_query).month() {
        println!("{} Born in {}", "→".cyan(), month.name());
    }

    manager.set_name_query(name);
    manager.set_month_query(month_query);

    let visible = manager.visible_records();
    let total = manager.records().len();

    for record in &visible {
        println!(
            "{} → {} {} {}",
            record.name.cyan().bold(),
            format_long_date(record.dob).green(),
            record.email,
            format!("[{}]", record.id).dimmed()
        );
    }

    println!(
        "\n{} Showing {} of {} birthday{}",
        "✓".green(),
        visible.len(),
        total,
        if total == 1 { "" } else { "s" }
    );

    Ok(true)
}

/// Submit the create form with the given values
async fn add_birthday(
    settings: &Settings,
    name: String,
    dob: String,
    email: String,
) -> anyhow::Result<bool> {
    let manager = build_manager(settings, true)?;

    manager.set_form_name(name);
    manager.set_form_dob(dob);
    manager.set_form_email(email);

    match manager.submit().await {
        Ok(()) => {
            print_status(&manager, true);
            println!("{} {} birthdays stored", "→".cyan(), manager.records().len());
            Ok(true)
        }
        Err(ActionError::Api(e)) => {
            print_status(&manager, false);
            eprintln!("  {}", e.to_string().dimmed());
            Ok(false)
        }
        Err(_) => {
            print_status(&manager, false);
            Ok(false)
        }
    }
}

/// Delete one birthday after confirmation
async fn delete_birthday(settings: &Settings, id: RecordId, yes: bool) -> anyhow::Result<bool> {
    let manager = build_manager(settings, yes)?;

    match manager.delete(&id).await {
        Ok(true) => {
            print_status(&manager, true);
            Ok(true)
        }
        Ok(false) => {
            println!("{}", "Cancelled, nothing deleted".yellow());
            Ok(true)
        }
        Err(e) => {
            print_status(&manager, false);
            eprintln!("  {}", e.to_string().dimmed());
            Ok(false)
        }
    }
}

#[cfg(feature = "gui")]
fn launch_gui(runtime: &Runtime, settings: Settings) -> anyhow::Result<bool> {
    use birthday_manager::ui::App;

    // GTK owns the main thread; spawned timers and requests need the runtime
    let _guard = runtime.enter();

    let app = App::new(settings);
    Ok(app.run() == glib::ExitCode::SUCCESS)
}

#[cfg(not(feature = "gui"))]
fn launch_gui(_runtime: &Runtime, _settings: Settings) -> anyhow::Result<bool> {
    println!("{}", "GUI support not compiled in".yellow());
    println!("Rebuild with `cargo build --features gui`");
    Ok(false)
}
