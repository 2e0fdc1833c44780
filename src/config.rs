use clap::{Parser, ValueEnum};
use iced::Theme;
use tracing_subscriber::EnvFilter;

use crate::api::client::DEFAULT_ENDPOINT;

/// Command-line configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "character-browser", version, about)]
pub struct Config {
    /// Character listing endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Color scheme
    #[arg(long, value_enum, default_value_t = ThemeChoice::Dark)]
    pub theme: ThemeChoice,

    /// Tracing filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_filter: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn theme(self) -> Theme {
        match self {
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Light => Theme::Light,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            theme: ThemeChoice::Dark,
            log_filter: "info".to_string(),
        }
    }
}

/// Install the global tracing subscriber. `RUST_LOG` wins over `--log-filter`.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
