//! Config to provider wiring

use cloudssh_cloud::{CloudProvider, ProviderKind};
use cloudssh_cloud_aws::Ec2Provider;
use cloudssh_cloud_digitalocean::DropletProvider;
use cloudssh_config::Config;

/// Build one provider per configured account.
///
/// Accounts with an unknown provider kind are reported and skipped, so a
/// config written for a newer version still works for the accounts this
/// build understands.
pub async fn providers_from_config(config: &Config) -> Vec<Box<dyn CloudProvider>> {
    let mut providers: Vec<Box<dyn CloudProvider>> = Vec::new();

    for (name, account) in &config.accounts {
        let kind = match account.kind() {
            Ok(kind) => kind,
            Err(_) => {
                tracing::warn!("Unknown provider: {} (account {})", account.provider, name);
                continue;
            }
        };

        match kind {
            ProviderKind::Aws => {
                // Credentials were checked at config load.
                let provider = Ec2Provider::new(
                    name,
                    account.access_key.as_deref().unwrap_or_default(),
                    account.secret_key.as_deref().unwrap_or_default(),
                    &account.region,
                    account.connection_interface,
                )
                .await;
                providers.push(Box::new(provider));
            }
            ProviderKind::DigitalOcean => {
                let provider = DropletProvider::new(
                    name,
                    account.api_token.clone().unwrap_or_default(),
                    account.connection_interface,
                );
                providers.push(Box::new(provider));
            }
        }
    }

    providers
}
