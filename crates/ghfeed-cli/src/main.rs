use anyhow::Result;
use clap::Parser;
use ghfeed_core::{config::FeedConfig, session, GitHubClient};
use log::LevelFilter;
use std::io;
use std::time::Duration;

#[derive(Parser, Debug)]
#[clap(
    name = "ghfeed",
    author,
    version = "0.1.0",
    about = "Browse a GitHub user's public activity from the terminal"
)]
struct Cli {
    #[clap(long, short, help = "GitHub username (prompted for when omitted)")]
    username: Option<String>,

    #[clap(long, default_value = ghfeed_core::config::DEFAULT_API_URL, help = "Base URL of the events API")]
    api_url: String,

    #[clap(long, default_value_t = ghfeed_core::config::DEFAULT_PER_PAGE, help = "Events per page")]
    per_page: u32,

    #[clap(long, help = "Request timeout in seconds (no timeout when omitted)")]
    timeout_secs: Option<u64>,

    #[clap(long, short, default_value = "warn")]
    log_level: String,

    #[clap(long, help = "Write logs to this file instead of stderr")]
    log_file: Option<String>,
}

impl Cli {
    fn feed_config(&self) -> FeedConfig {
        let mut config = FeedConfig::default()
            .with_api_url(self.api_url.clone())
            .with_per_page(self.per_page);
        if let Some(username) = &self.username {
            config = config.with_username(username.clone());
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli).await {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Warn);

    match &cli.log_file {
        Some(path) => {
            use std::fs::OpenOptions;

            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| anyhow::anyhow!("Failed to open log file '{}': {}", path, e))?;

            env_logger::Builder::new()
                .filter_level(log_level_filter)
                .target(env_logger::Target::Pipe(Box::new(log_file)))
                .init();
        }
        None => {
            // stdout is reserved for the interactive session
            env_logger::Builder::new()
                .filter_level(log_level_filter)
                .target(env_logger::Target::Stderr)
                .init();
        }
    }

    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.feed_config();
    config.validate()?;
    log::info!("Using events API at {}", config.api_url);

    let client = GitHubClient::from_config(&config)?;
    let stdin = io::stdin();
    let stdout = io::stdout();

    session::run(client, stdin.lock(), stdout.lock(), &config).await?;
    Ok(())
}
