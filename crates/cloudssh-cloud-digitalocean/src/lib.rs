//! DigitalOcean droplet provider for cloud-ssh
//!
//! Droplets carry a name and a flat list of string tags instead of
//! key/value pairs. Both are surfaced as inventory tags: the name under
//! "Name" (so it participates in display-name derivation like an EC2
//! Name tag), each string tag under "Tag".

pub mod api;

pub use api::{Droplet, DropletApi};

use async_trait::async_trait;
use cloudssh_cloud::{CloudProvider, ConnectionInterface, Instances, Result, Tag};

/// One configured DigitalOcean account.
pub struct DropletProvider {
    account: String,
    api: DropletApi,
    interface: ConnectionInterface,
}

impl DropletProvider {
    pub fn new(
        account: impl Into<String>,
        api_token: impl Into<String>,
        interface: ConnectionInterface,
    ) -> Self {
        Self {
            account: account.into(),
            api: DropletApi::new(api_token),
            interface,
        }
    }
}

#[async_trait]
impl CloudProvider for DropletProvider {
    fn name(&self) -> &str {
        &self.account
    }

    async fn fetch(&self) -> Result<Instances> {
        let droplets = self.api.list_droplets().await?;

        let mut instances = Instances::new();
        for droplet in &droplets {
            if let Some((addr, tags)) = map_droplet(droplet, self.interface) {
                instances.insert(addr, tags);
            }
        }

        tracing::debug!("DigitalOcean returned {} connectable droplets", instances.len());

        Ok(instances)
    }
}

/// Normalize one droplet into an inventory entry.
///
/// Droplets have no DNS names, so the DNS interface modes use the
/// corresponding IPv4 address. Returns `None` when the selected network
/// has no address, e.g. a droplet still provisioning.
fn map_droplet(
    droplet: &Droplet,
    interface: ConnectionInterface,
) -> Option<(String, Vec<Tag>)> {
    let wanted = match interface {
        ConnectionInterface::PublicDns | ConnectionInterface::PublicIp => "public",
        ConnectionInterface::PrivateDns | ConnectionInterface::PrivateIp => "private",
    };

    let addr = droplet
        .networks
        .v4
        .iter()
        .find(|network| network.kind == wanted)
        .map(|network| network.ip_address.clone())
        .filter(|addr| !addr.is_empty())?;

    let mut tags = vec![Tag::new("Name", droplet.name.as_str())];
    for tag in &droplet.tags {
        tags.push(Tag::new("Tag", tag.as_str()));
    }

    Some((addr, tags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{Networks, NetworkV4};

    fn droplet(name: &str, tags: &[&str], v4: &[(&str, &str)]) -> Droplet {
        Droplet {
            id: 42,
            name: name.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            networks: Networks {
                v4: v4.iter()
                    .map(|(ip, kind)| NetworkV4 {
                        ip_address: ip.to_string(),
                        kind: kind.to_string(),
                    })
                    .collect(),
            },
        }
    }

    #[test]
    fn test_map_droplet_public_address() {
        let droplet = droplet(
            "web-1",
            &["web"],
            &[("10.128.0.2", "private"), ("104.236.32.182", "public")],
        );

        let (addr, tags) = map_droplet(&droplet, ConnectionInterface::PublicDns).unwrap();

        assert_eq!(addr, "104.236.32.182");
        assert_eq!(tags, vec![Tag::new("Name", "web-1"), Tag::new("Tag", "web")]);
    }

    #[test]
    fn test_map_droplet_private_address() {
        let droplet = droplet(
            "web-1",
            &[],
            &[("10.128.0.2", "private"), ("104.236.32.182", "public")],
        );

        let (addr, _) = map_droplet(&droplet, ConnectionInterface::PrivateIp).unwrap();
        assert_eq!(addr, "10.128.0.2");

        let (addr, _) = map_droplet(&droplet, ConnectionInterface::PrivateDns).unwrap();
        assert_eq!(addr, "10.128.0.2");
    }

    #[test]
    fn test_map_droplet_without_selected_network() {
        let droplet = droplet("lonely", &[], &[("10.128.0.2", "private")]);

        assert!(map_droplet(&droplet, ConnectionInterface::PublicDns).is_none());
        assert!(map_droplet(&droplet, ConnectionInterface::PrivateIp).is_some());
    }

    #[test]
    fn test_map_droplet_name_always_tagged() {
        let droplet = droplet("untagged", &[], &[("104.236.32.182", "public")]);

        let (_, tags) = map_droplet(&droplet, ConnectionInterface::PublicIp).unwrap();

        assert_eq!(tags, vec![Tag::new("Name", "untagged")]);
    }
}
