use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use steam_reviews_acquire::app_list::AppListClient;
use steam_reviews_acquire::config::{DEFAULT_BASE_URL, DEFAULT_NUM_PER_PAGE};
use steam_reviews_acquire::output::DEFAULT_OUTPUT_PATH;
use steam_reviews_acquire::FetchConfig;
use steam_reviews_model::AppId;

#[derive(Parser)]
#[command(name = "steam-reviews")]
#[command(about = "Collect Steam store reviews and their helpfulness scores into a JSON file")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long, global = true)]
    utc: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one page of reviews per app and write them as JSON
    Fetch {
        /// Steam app ids (e.g. 730 620). Defaults to a built-in list when no ids or games are given
        app_ids: Vec<AppId>,

        /// Game name to resolve to an app id (exact match, case-insensitive); repeatable
        #[arg(short, long = "game")]
        games: Vec<String>,

        /// Output file path for the reviews JSON
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        /// Review endpoint; the app id is appended as a path segment
        #[arg(long, default_value = DEFAULT_BASE_URL, hide = true)]
        base_url: String,

        /// Reviews requested per app
        #[arg(long, default_value_t = DEFAULT_NUM_PER_PAGE, hide = true)]
        num_per_page: u32,
    },

    /// Look up the app id for a game name
    Resolve {
        /// Game name as shown on the store page
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Map log level, keeping the HTTP stack quiet at debug/trace
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn  => "warn",
        LogLevel::Info  => "info",
        LogLevel::Debug => "debug,hyper=info,hyper_util=info,reqwest=info,rustls=info",
        LogLevel::Trace => "trace,hyper=info,hyper_util=info,rustls=info",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }

    match cli.command {
        Commands::Fetch {
            app_ids,
            games,
            output,
            base_url,
            num_per_page,
        } => {
            let config = FetchConfig {
                base_url,
                num_per_page,
                ..FetchConfig::default()
            };

            steam_reviews_acquire::resolve_and_fetch(&config, &app_ids, &games, &output).await?;
        }
        Commands::Resolve { name } => {
            let config = FetchConfig::default();
            let apps = AppListClient::new(&config)?.fetch_apps().await?;
            match apps.find(&name) {
                Some(app) => println!("{}\t{}", app.appid, app.name),
                None => anyhow::bail!("Game \"{name}\" not found"),
            }
        }
    }

    Ok(())
}
