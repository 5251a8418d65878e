use anyhow::Context;
use clap::{Parser, Subcommand};
use opencode_notifier::config::{self, EventKind, NotifierConfig};
use opencode_notifier::notifications::{project_name_from_dir, NotificationManager};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "opencode-notifier")]
#[command(about = "Inspect OpenCode notification settings", long_about = None)]
struct Cli {
    /// Config file to read instead of ~/.config/opencode/opencode-notifier.json
    #[arg(long, global = true, env = "OPENCODE_NOTIFIER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the config file location
    Path,
    /// Print the effective config as JSON (default)
    Show,
    /// Show whether an event notifies and what it would display
    Check {
        /// Session event to check
        #[arg(value_enum)]
        event: EventKind,
        /// Project name for the summary (defaults to the current directory name)
        #[arg(long)]
        project: Option<String>,
        /// Print the notice as JSON
        #[arg(long)]
        json: bool,
    },
    /// Report whether the config file would be used or ignored
    Validate,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so JSON output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let path = cli.config.unwrap_or_else(config::config_path);

    match cli.command {
        Some(Commands::Path) => {
            println!("{}", path.display());
        }
        None | Some(Commands::Show) => {
            let config = NotifierConfig::load_from(&path);
            let json = serde_json::to_string_pretty(&config)
                .context("Failed to serialize config")?;
            println!("{json}");
        }
        Some(Commands::Check {
            event,
            project,
            json,
        }) => {
            let project = project.or_else(|| {
                std::env::current_dir()
                    .ok()
                    .and_then(|dir| project_name_from_dir(&dir))
            });
            let manager = NotificationManager::new(NotifierConfig::load_from(&path));

            match manager.notice(event, project.as_deref()) {
                Some(notice) if json => {
                    let json = serde_json::to_string_pretty(&notice)
                        .context("Failed to serialize notice")?;
                    println!("{json}");
                }
                Some(notice) => {
                    println!("{event}: enabled");
                    println!("  summary: {}", notice.summary);
                    println!("  body:    {}", notice.body);
                    println!("  timeout: {}s", notice.timeout.as_secs_f64());
                }
                None => {
                    println!("{event}: disabled");
                    println!("  message: {}", config::get_message(manager.config(), event));
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Validate) => match NotifierConfig::try_load_from(&path) {
            Ok(Some(_)) => println!("✓ {} is valid", path.display()),
            Ok(None) => println!("No config at {}, defaults apply", path.display()),
            Err(e) => {
                eprintln!("✗ {} will be ignored: {e}", path.display());
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
