//! Command-line interface definitions for the intro API server.

use std::time::Duration;

use clap::Parser;

/// Command-line arguments for the intro API server.
///
/// Every option has a default, so running the binary without arguments
/// serves on all interfaces, port 8000.
#[derive(Debug, Parser)]
#[command(name = "intro-api")]
#[command(author, version, about = "Introductory HTTP API: static routes, echo and a posts proxy")]
pub struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:8000")]
    pub listen: String,

    /// Base URL of the posts service proxied by /posts
    #[arg(long, default_value = intro_api::upstream::DEFAULT_UPSTREAM_URL)]
    pub upstream: String,

    /// Timeout for calls to the posts service (e.g. 500ms, 5s). No timeout by default.
    #[arg(long, value_parser = humantime::parse_duration)]
    pub upstream_timeout: Option<Duration>,
}
