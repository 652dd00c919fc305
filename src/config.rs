//! Runtime configuration resolved from command-line flags and environment variables.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, bail};
use clap::Args;

use crate::utils::default_data_dir;

/// Answering service used when nothing else is configured
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5000";
/// Request timeout used when nothing else is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Flags shared by every subcommand; each falls back to an environment variable
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Base URL of the answering service
    #[arg(long, global = true, env = "ASKWHY_SERVICE_URL")]
    pub service_url: Option<String>,

    /// Directory holding the saved conversation
    #[arg(long, global = true, env = "ASKWHY_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Seconds to wait for the answering service
    #[arg(long, global = true, env = "ASKWHY_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub service_url: String,
    pub data_dir: PathBuf,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_args(args: &GlobalArgs) -> Result<Self> {
        let service_url =
            args.service_url.clone().unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());
        if !(service_url.starts_with("http://") || service_url.starts_with("https://")) {
            bail!("Service URL must start with http:// or https://: {}", service_url);
        }

        let data_dir = match &args.data_dir {
            Some(dir) => dir.clone(),
            None => default_data_dir()?,
        };

        let timeout_secs = args.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            bail!("Timeout must be at least one second");
        }

        Ok(Self { service_url, data_dir, request_timeout: Duration::from_secs(timeout_secs) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_args(&GlobalArgs::default()).unwrap();
        assert_eq!(config.service_url, DEFAULT_SERVICE_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(config.data_dir.to_string_lossy().contains("askwhy"));
    }

    #[test]
    fn test_explicit_values() {
        let args = GlobalArgs {
            service_url: Some("https://answers.example.com".to_string()),
            data_dir: Some(PathBuf::from("/tmp/askwhy-test")),
            timeout_secs: Some(5),
            verbose: true,
        };
        let config = AppConfig::from_args(&args).unwrap();
        assert_eq!(config.service_url, "https://answers.example.com");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/askwhy-test"));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_rejects_non_http_url() {
        let args = GlobalArgs { service_url: Some("ftp://nope".to_string()), ..Default::default() };
        let err = AppConfig::from_args(&args).unwrap_err();
        assert!(err.to_string().contains("must start with http"));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let args = GlobalArgs { timeout_secs: Some(0), ..Default::default() };
        assert!(AppConfig::from_args(&args).is_err());
    }
}
