//! CLI command definitions for the `catchat` binary.
//!
//! Uses clap derive macros for argument parsing. Every server setting can
//! come from a flag or its environment variable, so the same binary runs
//! locally and on a hosting platform without a config file.

pub mod status;

use clap::{Args, Parser, Subcommand};

use catchat_core::store::limits::StoreLimits;
use catchat_infra::llm::openai_compat::config::DEFAULT_OPENAI_MODEL;

/// Chat backend with an in-memory message store and an AI assistant.
#[derive(Parser)]
#[command(name = "catchat", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all log output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(flatten)]
    pub serve: ServeArgs,

    /// Defaults to `serve` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP server.
    Serve,

    /// Print the resolved configuration and exit.
    Status,
}

/// Server settings shared by `serve` and `status`.
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Address to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0", global = true)]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000, global = true)]
    pub port: u16,

    /// Runtime environment name, stamped on every message.
    #[arg(long, env = "APP_ENV", default_value = "development", global = true)]
    pub environment: String,

    /// Hosting platform name, stamped on every message.
    #[arg(long, env = "PLATFORM_NAME", default_value = "Railway", global = true)]
    pub platform_name: String,

    /// Whether the process runs on the hosting platform.
    #[arg(
        long,
        env = "RAILWAY",
        value_parser = clap::builder::BoolishValueParser::new(),
        global = true
    )]
    pub on_platform: bool,

    /// SQLite URL for the message archive. Memory-only when unset or unreachable.
    #[arg(long, env = "DATABASE_URL", global = true)]
    pub database_url: Option<String>,

    /// API key for the OpenAI-compatible completion service.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, global = true)]
    pub openai_api_key: Option<String>,

    /// Model used for assistant replies.
    #[arg(long, env = "OPENAI_MODEL", default_value = DEFAULT_OPENAI_MODEL, global = true)]
    pub openai_model: String,

    /// Base URL override for a compatible endpoint.
    #[arg(long, env = "OPENAI_BASE_URL", global = true)]
    pub openai_base_url: Option<String>,

    /// Message count that triggers truncation.
    #[arg(long, env = "CATCHAT_MAX_MESSAGES", default_value_t = StoreLimits::DEFAULT_CEILING, global = true)]
    pub max_messages: usize,

    /// Message count kept after truncation.
    #[arg(long, env = "CATCHAT_RETAIN_MESSAGES", default_value_t = StoreLimits::DEFAULT_FLOOR, global = true)]
    pub retain_messages: usize,

    /// Start with an empty store instead of the welcome messages.
    #[arg(long, global = true)]
    pub no_demo_data: bool,
}

impl ServeArgs {
    /// Address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether an OpenAI API key is present (blank counts as absent).
    pub fn has_openai_key(&self) -> bool {
        self.openai_api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty())
    }
}
