use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

use timbro::logging::{Humanizer, LogCategory};
use timbro::worker::{HelloUnit, Task, WorkerCoordinator, WorkerEvent};

/// Demo driver for the timbro worker core.
///
/// Runs the hello unit through a full coordinator round-trip: redacted
/// logs, status updates, optional input handshake, terminal result.
#[derive(Parser)]
#[command(name = "timbro", about = "Background worker core demo")]
struct Cli {
    /// Ask for a name over the input-request handshake
    #[arg(long)]
    ask: bool,

    /// Seed the humanizer for deterministic phrasing
    #[arg(long)]
    seed: Option<u64>,

    /// Print raw (redacted) log lines instead of humanized ones
    #[arg(long)]
    raw: bool,
}

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("timbro")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("timbro.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

async fn run_demo(cli: &Cli) -> Result<()> {
    let mut humanizer = match cli.seed {
        Some(seed) => Humanizer::with_seed(seed),
        None => Humanizer::new(),
    };

    let unit = if cli.ask {
        HelloUnit::with_input()
    } else {
        HelloUnit::new()
    };

    let (mut coordinator, mut events) = WorkerCoordinator::new(unit);
    coordinator.start(Task::default())?;
    info!("Demo worker started");

    while let Some(event) = events.recv().await {
        match event {
            WorkerEvent::Log(event) => {
                if cli.raw {
                    println!("{}", event.text);
                    continue;
                }
                let line = humanizer.humanize(&event.text);
                let text = match line.category {
                    LogCategory::Error => line.human_text.red(),
                    LogCategory::Success => line.human_text.green(),
                    LogCategory::Info => line.human_text.normal(),
                    _ => line.human_text.cyan(),
                };
                println!("{text}");
            }
            WorkerEvent::Status(status) => {
                println!("{}", format!("[{status}]").yellow());
            }
            WorkerEvent::InputRequest { prompt, responder } => {
                println!("{}", prompt.bold());
                let answer = tokio::task::spawn_blocking(|| {
                    let mut buf = String::new();
                    std::io::stdin().read_line(&mut buf).map(|_| buf.trim().to_string())
                })
                .await?
                .context("Failed to read from stdin")?;
                let _ = responder.send(answer);
            }
            WorkerEvent::Finished(success) => {
                if success {
                    println!("{}", "Worker finished successfully".green());
                } else {
                    println!("{}", "Worker finished with errors".red());
                }
                break;
            }
        }
    }

    coordinator.join().await;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging()?;
    run_demo(&cli).await
}
