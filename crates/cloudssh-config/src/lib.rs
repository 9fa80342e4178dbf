//! Configuration loading for cloud-ssh
//!
//! The config file is a YAML map of account name to account options.
//! Accounts are validated once at load time, so provider adapters can rely
//! on their required credentials being present.

pub mod error;

pub use error::*;

use cloudssh_cloud::{ConnectionInterface, ProviderKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Default AWS region when an account sets none.
pub const DEFAULT_REGION: &str = "us-east-1";

/// One configured cloud account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Provider kind as written in the file ("aws", "digital_ocean", ...).
    ///
    /// Kept as a string so an unknown provider is skipped with a warning
    /// instead of failing the whole file.
    pub provider: String,

    /// AWS access key id
    pub access_key: Option<String>,

    /// AWS secret access key
    pub secret_key: Option<String>,

    /// DigitalOcean API token
    pub api_token: Option<String>,

    /// Provider region
    #[serde(default = "default_region")]
    pub region: String,

    /// Which resource field to connect to
    #[serde(default)]
    pub connection_interface: ConnectionInterface,

    /// Display template for matched instances
    pub output_format: Option<String>,

    /// User to fill in when the command line carries none
    pub default_user: Option<String>,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

impl AccountConfig {
    /// Parse the provider string into a supported kind.
    pub fn kind(&self) -> cloudssh_cloud::Result<ProviderKind> {
        self.provider.parse()
    }
}

/// The full configuration: account name mapped to its options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    pub accounts: BTreeMap<String, AccountConfig>,
}

impl Config {
    /// Parse a YAML document.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Inject a synthetic `default` aws account from `AWS_ACCESS_KEY_ID` /
    /// `AWS_SECRET_ACCESS_KEY` / `AWS_REGION`.
    ///
    /// Additive only: a `default` account defined in the file wins.
    pub fn apply_env_fallback(&mut self) {
        let (Ok(access_key), Ok(secret_key)) = (
            std::env::var("AWS_ACCESS_KEY_ID"),
            std::env::var("AWS_SECRET_ACCESS_KEY"),
        ) else {
            return;
        };

        self.accounts
            .entry("default".to_string())
            .or_insert_with(|| AccountConfig {
                provider: "aws".to_string(),
                access_key: Some(access_key),
                secret_key: Some(secret_key),
                api_token: None,
                region: std::env::var("AWS_REGION").unwrap_or_else(|_| default_region()),
                connection_interface: ConnectionInterface::default(),
                output_format: None,
                default_user: None,
            });
    }

    /// Check that every account with a known provider carries its required
    /// credentials. Accounts with unknown providers are left for the caller
    /// to warn about and skip.
    pub fn validate(&self) -> Result<()> {
        for (name, account) in &self.accounts {
            let Ok(kind) = account.kind() else {
                continue;
            };

            let missing = match kind {
                ProviderKind::Aws => {
                    if account.access_key.is_none() {
                        Some("access_key")
                    } else if account.secret_key.is_none() {
                        Some("secret_key")
                    } else {
                        None
                    }
                }
                ProviderKind::DigitalOcean => {
                    if account.api_token.is_none() {
                        Some("api_token")
                    } else {
                        None
                    }
                }
            };

            if let Some(key) = missing {
                return Err(ConfigError::MissingKey {
                    account: name.clone(),
                    key,
                });
            }
        }

        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

/// Locate the config file.
///
/// Search order:
/// 1. `CLOUD_SSH_CONFIG` environment variable (direct path)
/// 2. `./cloud-ssh.yaml`
/// 3. `~/.ssh/cloud-ssh.yaml`
/// 4. `/etc/cloud-ssh.yaml`
pub fn find_config_file() -> Option<PathBuf> {
    if let Ok(config_path) = std::env::var("CLOUD_SSH_CONFIG") {
        let path = PathBuf::from(config_path);
        if path.exists() {
            return Some(path);
        }
    }

    let mut candidates = vec![PathBuf::from("cloud-ssh.yaml")];
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".ssh").join("cloud-ssh.yaml"));
    }
    candidates.push(PathBuf::from("/etc/cloud-ssh.yaml"));

    candidates.into_iter().find(|path| path.exists())
}

/// Load the configuration: file discovery, env fallback, validation.
///
/// A missing file is not an error; the run degrades to plain ssh. A
/// malformed file or a known account with missing credentials is fatal.
pub fn load() -> Result<Config> {
    let mut config = match find_config_file() {
        Some(path) => {
            tracing::info!("Found config: {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            Config::parse(&content)?
        }
        None => Config::default(),
    };

    config.apply_env_fallback();
    config.validate()?;

    Ok(config)
}
