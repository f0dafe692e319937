//! Activity Board CLI
//!
//! Terminal client for the board API:
//! - List activities with availability and rosters
//! - Sign a participant up
//! - Remove a participant

use activity_board::client::{BoardClient, ClientError};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "activity-board-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse and manage extracurricular activity signups")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8000", global = true)]
    pub api_url: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List activities
    List,

    /// Sign a participant up for an activity
    Signup {
        /// Activity name
        activity: String,
        /// Participant email
        email: String,
    },

    /// Remove a participant from an activity
    Remove {
        /// Activity name
        activity: String,
        /// Participant email
        email: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = BoardClient::new(cli.api_url);

    let result = match cli.command {
        Commands::List => client.activities().await.map(|snapshot| {
            for activity in snapshot.iter() {
                println!("{}", activity.name);
                println!("  {}", activity.details.description);
                println!("  Schedule: {}", activity.details.schedule);
                println!("  Availability: {} spots left", activity.spots_left());
                if activity.details.participants.is_empty() {
                    println!("  (no participants yet)");
                } else {
                    for participant in &activity.details.participants {
                        println!("  - {}", participant);
                    }
                }
                println!();
            }
        }),
        Commands::Signup { activity, email } => client
            .signup(&activity, &email)
            .await
            .map(|message| println!("{}", message)),
        Commands::Remove { activity, email } => client
            .unregister(&activity, &email)
            .await
            .map(|message| println!("{}", message)),
    };

    match result {
        Ok(()) => Ok(()),
        Err(ClientError::Rejected { status, detail }) => {
            eprintln!(
                "Rejected ({}): {}",
                status,
                detail.as_deref().unwrap_or("An error occurred")
            );
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
