//! Server configuration.
//!
//! Every option can be given on the command line or through an environment
//! variable (`HIROBA_*`); the command line wins.

use clap::Parser;
use thiserror::Error;

use crate::domain::{
    DEFAULT_MESSAGE_LOG_CAPACITY, SessionLimits,
    session::{DEFAULT_MAX_DISPLAY_NAME_CHARS, DEFAULT_MAX_TEXT_CHARS},
};

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must be at least 1")]
    MustBePositive(&'static str),
}

/// Command line arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "hiroba-server")]
#[command(about = "Real-time chat relay with presence and typing indicators", long_about = None)]
pub struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "HIROBA_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "HIROBA_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Number of broadcast messages kept in memory
    #[arg(long, env = "HIROBA_HISTORY_CAPACITY", default_value_t = DEFAULT_MESSAGE_LOG_CAPACITY)]
    pub history_capacity: usize,

    /// Maximum message length in characters
    #[arg(long, env = "HIROBA_MAX_TEXT_LENGTH", default_value_t = DEFAULT_MAX_TEXT_CHARS)]
    pub max_text_length: usize,

    /// Maximum display name length in characters
    #[arg(long, env = "HIROBA_MAX_DISPLAY_NAME_LENGTH", default_value_t = DEFAULT_MAX_DISPLAY_NAME_CHARS)]
    pub max_display_name_length: usize,

    /// Default log level (overridden by RUST_LOG)
    #[arg(long, env = "HIROBA_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Validated server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub limits: SessionLimits,
    pub log_level: String,
}

impl ServerConfig {
    /// `host:port` for binding the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl TryFrom<Args> for ServerConfig {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let positive = |value: usize, name: &'static str| {
            if value == 0 {
                Err(ConfigError::MustBePositive(name))
            } else {
                Ok(value)
            }
        };

        Ok(Self {
            host: args.host,
            port: args.port,
            limits: SessionLimits {
                history_capacity: positive(args.history_capacity, "history capacity")?,
                max_text_chars: positive(args.max_text_length, "max text length")?,
                max_display_name_chars: positive(
                    args.max_display_name_length,
                    "max display name length",
                )?,
            },
            log_level: args.log_level,
        })
    }
}
