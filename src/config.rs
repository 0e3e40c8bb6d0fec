//! Command-line configuration and logging setup for the server binary.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing::Level;

#[derive(Parser, Debug, Clone)]
#[command(name = "blade-lsp")]
#[command(about = "Language server for Laravel Blade templates", long_about = None)]
pub struct ServerConfig {
    /// Maximum level of log records to emit
    #[arg(long, default_value_t = Level::INFO)]
    pub log_level: Level,

    /// Append logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Installs the global tracing subscriber. Stdout carries the protocol,
    /// so logs go to stderr or to the configured file.
    pub fn init_logging(&self) -> anyhow::Result<()> {
        match &self.log_file {
            Some(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("Failed to open log file {}", path.display()))?;
                tracing_subscriber::fmt()
                    .with_max_level(self.log_level)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .init();
            }
            None => {
                tracing_subscriber::fmt()
                    .with_max_level(self.log_level)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
        Ok(())
    }
}
