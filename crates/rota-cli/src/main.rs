mod cmd;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rota_core::clock::SystemClock;
use rota_core::config::Config;
use rota_core::service::ScheduleService;
use rota_core::store::FileStore;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rota",
    about = "Rotating assignment scheduler — manage who takes the next turn, and when",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file (a missing file runs on the weekly-Monday defaults)
    #[arg(long, global = true, env = "ROTA_CONFIG", default_value = "rota.yaml")]
    config: PathBuf,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Port to listen on
        #[arg(long, default_value_t = 8080, env = "ROTA_PORT")]
        port: u16,
    },

    /// Show all assignments, ordered by date
    Show,

    /// Show the assignment date for a single user
    Get { username: String },

    /// Add a user to the end of the rotation
    Add { username: String },

    /// Remove a user and re-align the remaining dates
    Remove { username: String },

    /// Start a new rotation: reset all dates, keep the user order
    New,

    /// Who is assigned during a period (default: the next assignment)
    Lookup {
        /// Beginning of the period (default: today)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// End of the period
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Delay the next assignment, or all upcoming assignments
    Delay {
        /// Days to delay by
        #[arg(long, default_value_t = 1)]
        days: u32,
        /// Delay all upcoming assignments, not just the next one
        #[arg(long)]
        all: bool,
    },

    /// Swap the assignment dates of two users
    Swap { user_a: String, user_b: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    if let Commands::Serve { port } = &cli.command {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info,tower_http=debug".into()),
            )
            .init();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        return runtime.block_on(rota_server::serve(config, *port));
    }

    let store = FileStore::new(config.data_file.clone());
    let mut service = ScheduleService::new(store, SystemClock, config);

    match cli.command {
        Commands::Serve { .. } => unreachable!("handled above"),
        Commands::Show => cmd::show::run(&mut service, cli.json),
        Commands::Get { username } => cmd::user::get(&mut service, &username, cli.json),
        Commands::Add { username } => cmd::user::add(&mut service, &username, cli.json),
        Commands::Remove { username } => cmd::user::remove(&mut service, &username),
        Commands::New => cmd::regenerate::run(&mut service, cli.json),
        Commands::Lookup { from, to } => cmd::lookup::run(&mut service, from, to, cli.json),
        Commands::Delay { days, all } => cmd::delay::run(&mut service, all, days, cli.json),
        Commands::Swap { user_a, user_b } => {
            cmd::swap::run(&mut service, &user_a, &user_b, cli.json)
        }
    }
}
