//! DigitalOcean droplets API client
//!
//! Direct REST implementation against api.digitalocean.com with Bearer
//! token authentication. Only the droplet listing endpoint is needed.

use cloudssh_cloud::{CloudError, Result};
use serde::Deserialize;

const DIGITALOCEAN_API_BASE: &str = "https://api.digitalocean.com/v2";

/// One droplet as returned by the API, reduced to the fields we read.
#[derive(Debug, Clone, Deserialize)]
pub struct Droplet {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub networks: Networks,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Networks {
    #[serde(default)]
    pub v4: Vec<NetworkV4>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NetworkV4 {
    pub ip_address: String,
    /// "public" or "private"
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Deserialize)]
struct DropletsPage {
    droplets: Vec<Droplet>,
    links: Option<Links>,
}

#[derive(Debug, Deserialize)]
struct Links {
    pages: Option<Pages>,
}

#[derive(Debug, Deserialize)]
struct Pages {
    next: Option<String>,
}

/// Minimal droplets client for one account token.
pub struct DropletApi {
    client: reqwest::Client,
    api_token: String,
}

impl DropletApi {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_token: api_token.into(),
        }
    }

    /// List every droplet in the account, following pagination links.
    pub async fn list_droplets(&self) -> Result<Vec<Droplet>> {
        let mut droplets = Vec::new();
        let mut url = format!("{DIGITALOCEAN_API_BASE}/droplets?per_page=200");

        loop {
            let response = self
                .client
                .get(&url)
                .bearer_auth(&self.api_token)
                .send()
                .await
                .map_err(|err| CloudError::ApiError(err.to_string()))?;

            if response.status() == reqwest::StatusCode::UNAUTHORIZED {
                return Err(CloudError::AuthenticationFailed(
                    "DigitalOcean rejected the API token".to_string(),
                ));
            }
            if !response.status().is_success() {
                return Err(CloudError::ApiError(format!(
                    "DigitalOcean returned {}",
                    response.status()
                )));
            }

            let page: DropletsPage = response
                .json()
                .await
                .map_err(|err| CloudError::ApiError(err.to_string()))?;

            droplets.extend(page.droplets);

            match page.links.and_then(|links| links.pages).and_then(|pages| pages.next) {
                Some(next) => url = next,
                None => break,
            }
        }

        Ok(droplets)
    }
}
