//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, optionally overridden by
//! command-line flags, and validated before the server starts.
//!
//! ## Variables
//!
//! - `BIND_ADDR` - Bind address (default: `0.0.0.0`)
//! - `PORT` - TCP port (default: `9876`)
//! - `OUTPUT_FILE` - Persisted set path (default: `domains_collected.txt`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `MAX_BODY_BYTES` - Ingestion body cap (default: 10 MiB, range: 1 KiB to 64 MiB)
//!
//! ```bash
//! export PORT=8080
//! export OUTPUT_FILE="/var/lib/collector/domains.txt"
//! export LOG_FORMAT=json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 9876;
pub const DEFAULT_OUTPUT_FILE: &str = "domains_collected.txt";
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

const MIN_BODY_BYTES: usize = 1024;
const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub port: u16,
    /// Flat file holding the collected set, one item per line.
    pub output_file: PathBuf,
    pub log_level: String,
    pub log_format: String,
    /// Largest accepted `POST /domains` body, in bytes.
    pub max_body_bytes: usize,
}

/// Command-line overrides. Flags take precedence over the environment.
#[derive(Debug, Default, Parser)]
#[command(name = "domain-collector")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Address to bind
    #[arg(short = 'b', long = "bind")]
    pub bind_addr: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// File the collected set is persisted to
    #[arg(short, long = "output")]
    pub output_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `MAX_BODY_BYTES` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let port = match env::var("PORT") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got '{v}'"))?,
            Err(_) => DEFAULT_PORT,
        };

        let output_file = env::var("OUTPUT_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_FILE));

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let max_body_bytes = match env::var("MAX_BODY_BYTES") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("MAX_BODY_BYTES must be a number, got '{v}'"))?,
            Err(_) => DEFAULT_MAX_BODY_BYTES,
        };

        Ok(Self {
            bind_addr,
            port,
            output_file,
            log_level,
            log_format,
            max_body_bytes,
        })
    }

    /// Applies command-line overrides on top of the environment.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(ref bind_addr) = cli.bind_addr {
            self.bind_addr = bind_addr.clone();
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
        if let Some(ref output_file) = cli.output_file {
            self.output_file = output_file.clone();
        }
        if cli.verbose {
            self.log_level = "debug".to_string();
        }
        self
    }

    /// Socket address the server binds to.
    ///
    /// # Errors
    ///
    /// Returns an error if `bind_addr` is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip = self
            .bind_addr
            .parse()
            .with_context(|| format!("BIND_ADDR must be an IP address, got '{}'", self.bind_addr))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `port` is 0
    /// - `bind_addr` is not an IP address
    /// - `log_format` is not `text` or `json`
    /// - `max_body_bytes` is outside 1 KiB to 64 MiB
    /// - `output_file` is empty
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("PORT must be between 1 and 65535");
        }

        self.socket_addr()?;

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !(MIN_BODY_BYTES..=MAX_BODY_BYTES).contains(&self.max_body_bytes) {
            anyhow::bail!(
                "MAX_BODY_BYTES must be between {} and {}, got {}",
                MIN_BODY_BYTES,
                MAX_BODY_BYTES,
                self.max_body_bytes
            );
        }

        if self.output_file.as_os_str().is_empty() {
            anyhow::bail!("OUTPUT_FILE must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}:{}", self.bind_addr, self.port);
        tracing::info!("  Output file: {}", self.output_file.display());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Max body size: {} bytes", self.max_body_bytes);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            port: DEFAULT_PORT,
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Loads configuration from the environment, applies CLI overrides and validates.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load(cli: &Cli) -> Result<Config> {
    let config = Config::from_env()?.with_cli(cli);
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "BIND_ADDR",
        "PORT",
        "OUTPUT_FILE",
        "RUST_LOG",
        "LOG_FORMAT",
        "MAX_BODY_BYTES",
    ];

    fn clear_env() {
        // SAFETY: callers are #[serial], so no concurrent access
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.port = 0;
        assert!(config.validate().is_err());
        config.port = DEFAULT_PORT;

        config.log_format = "xml".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.max_body_bytes = 512;
        assert!(config.validate().is_err());
        config.max_body_bytes = 65 * 1024 * 1024;
        assert!(config.validate().is_err());
        config.max_body_bytes = MIN_BODY_BYTES;
        assert!(config.validate().is_ok());

        config.bind_addr = "localhost".to_string();
        assert!(config.validate().is_err());
        config.bind_addr = "127.0.0.1".to_string();

        config.output_file = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = Config {
            bind_addr: "127.0.0.1".to_string(),
            port: 8080,
            ..Config::default()
        };
        assert_eq!(
            config.socket_addr().unwrap(),
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    #[serial]
    fn test_defaults_from_empty_env() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0");
        assert_eq!(config.port, 9876);
        assert_eq!(config.output_file, PathBuf::from("domains_collected.txt"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.max_body_bytes, 10 * 1024 * 1024);
    }

    #[test]
    #[serial]
    fn test_values_from_env() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("BIND_ADDR", "127.0.0.1");
            env::set_var("PORT", "8000");
            env::set_var("OUTPUT_FILE", "/tmp/out.txt");
            env::set_var("MAX_BODY_BYTES", "4096");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert_eq!(config.output_file, PathBuf::from("/tmp/out.txt"));
        assert_eq!(config.max_body_bytes, 4096);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_in_env() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("PORT", "ninety");
        }

        assert!(Config::from_env().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_cli_overrides_env() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("PORT", "8000");
            env::set_var("OUTPUT_FILE", "from-env.txt");
        }

        let cli = Cli::parse_from(["domain-collector", "-p", "9000", "-o", "from-cli.txt", "-v"]);
        let config = load(&cli).unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.output_file, PathBuf::from("from-cli.txt"));
        assert_eq!(config.log_level, "debug");

        clear_env();
    }

    #[test]
    fn test_cli_without_flags_keeps_config() {
        let cli = Cli::parse_from(["domain-collector"]);
        let config = Config::default().with_cli(&cli);

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.log_level, "info");
    }
}
