//! `forge` – command-line front end for a forge-server.
//!
//! Every invocation loads the server's list first, applies one command
//! through [`WorkoutLog`], and prints the resulting local view.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use forge_client::{WorkoutClient, WorkoutLog};
use forge_types::WorkoutRecord;
use tracing_subscriber::EnvFilter;

/// Log and review workout sessions
#[derive(Parser, Debug)]
#[command(name = "forge")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Server base URL including the API prefix
    #[arg(long, env = "FORGE_API_URL", default_value = "http://127.0.0.1:5000/api")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List workouts, newest first
    List,

    /// Log a new workout session
    Add {
        /// Exercise name, e.g. "Deadlift"
        name: String,
        /// Duration in minutes
        duration: String,
    },

    /// End (remove) a workout by id
    End {
        id: i64,
    },

    /// Remove every workout
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();
    let log = WorkoutLog::new(WorkoutClient::new(cli.base_url));
    log.load().await?;

    match cli.command {
        Command::List => {}
        Command::Add { name, duration } => {
            let record = log.add(&name, duration).await?;
            println!("Logged #{}", record.id);
        }
        Command::End { id } => {
            log.end(id).await?;
            println!("Workout ended");
        }
        Command::Clear { yes } => {
            if !yes && !confirm("Are you sure you want to clear your entire history?")? {
                println!("Nothing cleared");
                return Ok(());
            }
            log.clear().await?;
            println!("All workouts cleared");
        }
    }

    print_workouts(&log.workouts());
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

fn print_workouts(workouts: &[WorkoutRecord]) {
    if workouts.is_empty() {
        println!("No activity recorded. Start your first session!");
        return;
    }
    println!("Recent Activity");
    for w in workouts {
        println!("  #{:<15} {:<24} {} mins", w.id, w.name, w.duration);
    }
}
