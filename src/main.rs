use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use url::Url;

mod config;
use config::{FetchConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};

mod github;
use github::fetch_events;

mod summary;
use summary::print_events;

#[derive(Parser)]
#[clap(version, about = "Show a GitHub user's recent activity")]
struct Opts {
    /// GitHub username whose public events should be listed
    username: Option<String>,
    /// Base URL of the GitHub REST API
    #[clap(long, default_value = DEFAULT_API_URL)]
    api_url: Url,
    /// Request timeout, in seconds
    #[clap(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let opts = Opts::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let username = match opts.username {
        Some(username) => username,
        None => {
            writeln!(out, "Please provide a github username.")
                .context("couldn't write to stdout")?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    let config = FetchConfig::new(opts.api_url, Duration::from_secs(opts.timeout));
    match fetch_events(&config, &username) {
        Ok(events) => {
            print_events(&mut out, &events).context("couldn't write events to stdout")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            writeln!(out, "Error: {}", err).context("couldn't write to stdout")?;
            Ok(ExitCode::FAILURE)
        }
    }
}
