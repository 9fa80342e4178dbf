//! Cloud provider trait definition

use crate::error::{CloudError, Result};
use crate::instance::Instances;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cloud provider abstraction trait
///
/// All cloud providers (AWS, DigitalOcean, etc.) implement this trait to
/// expose one account's inventory through a unified interface.
#[async_trait]
pub trait CloudProvider: Send + Sync {
    /// Returns the configured account name (e.g. "prod", "default")
    fn name(&self) -> &str;

    /// Fetch the account's instances, normalized into the common model.
    ///
    /// Implementations list the whole account without filters. Resources
    /// with no usable connection address are omitted.
    async fn fetch(&self) -> Result<Instances>;
}

/// Supported provider kinds.
///
/// Config carries the provider as a string; parsing it through this enum
/// gives an explicit unsupported-provider outcome instead of a silent
/// fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    Aws,
    DigitalOcean,
}

impl FromStr for ProviderKind {
    type Err = CloudError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "aws" => Ok(ProviderKind::Aws),
            "digital_ocean" => Ok(ProviderKind::DigitalOcean),
            other => Err(CloudError::UnknownProvider(other.to_string())),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Aws => write!(f, "aws"),
            ProviderKind::DigitalOcean => write!(f, "digital_ocean"),
        }
    }
}

/// Which resource field becomes the connection address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionInterface {
    /// The provider's primary public hostname field
    #[default]
    PublicDns,
    PublicIp,
    PrivateIp,
    PrivateDns,
}
