// Worldon - Mastodon-compatible data-model bindings
// Copyright (C) 2026 Worldon Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Logging setup for hosts embedding this crate
//!
//! Structured logging with console and rotating JSON file targets. The host
//! calls [`Logger::init`] once at startup; everything in the crate logs
//! through `tracing`.

use anyhow::Result;
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logger configuration
pub struct LoggerConfig {
    /// Log directory path
    pub log_dir: PathBuf,
    /// Log file prefix
    pub file_prefix: String,
    /// Maximum log level
    pub level: Level,
    /// Whether to log to console
    pub console_output: bool,
    /// Whether to log to file
    pub file_output: bool,
    /// Log rotation strategy
    pub rotation: Rotation,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        let log_dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("Worldon")
            .join("logs");

        Self {
            log_dir,
            file_prefix: "worldon".to_string(),
            level: Level::INFO,
            console_output: true,
            file_output: false,
            rotation: Rotation::DAILY,
        }
    }
}

/// Main logger struct
pub struct Logger;

impl Logger {
    /// Initialize the logging system with default configuration
    pub fn init() -> Result<()> {
        Self::init_with_config(LoggerConfig::default())
    }

    /// Initialize the logging system with custom configuration
    pub fn init_with_config(config: LoggerConfig) -> Result<()> {
        if config.file_output {
            std::fs::create_dir_all(&config.log_dir)?;
        }

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("worldon_core={}", config.level)));

        let subscriber = tracing_subscriber::registry().with(env_filter);

        if config.console_output && config.file_output {
            let file_appender = RollingFileAppender::new(
                config.rotation,
                &config.log_dir,
                &config.file_prefix,
            );

            let file_layer = fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_span_events(FmtSpan::CLOSE)
                .json();

            let console_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true)
                .with_span_events(FmtSpan::CLOSE);

            subscriber.with(file_layer).with(console_layer).init();
        } else if config.console_output {
            let console_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true)
                .with_span_events(FmtSpan::CLOSE);

            subscriber.with(console_layer).init();
        } else if config.file_output {
            let file_appender = RollingFileAppender::new(
                config.rotation,
                &config.log_dir,
                &config.file_prefix,
            );

            let file_layer = fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_span_events(FmtSpan::CLOSE)
                .json();

            subscriber.with(file_layer).init();
        }

        Ok(())
    }
}

/// Macro for logging API calls with timing
#[macro_export]
macro_rules! log_api_call {
    ($method:expr, $url:expr) => {
        tracing::info!(
            target: "api",
            method = $method,
            url = $url,
            "API call started"
        )
    };
    ($method:expr, $url:expr, $duration:expr) => {
        tracing::info!(
            target: "api",
            method = $method,
            url = $url,
            duration_ms = $duration,
            "API call completed"
        )
    };
}
