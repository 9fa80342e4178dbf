//! AWS EC2 provider for cloud-ssh
//!
//! Lists every EC2 instance in one account/region through the official
//! SDK and normalizes them into the common inventory model. Security
//! group names are surfaced as synthetic tags so they are searchable
//! like user tags.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_ec2::config::{Credentials, Region};
use cloudssh_cloud::{CloudError, CloudProvider, ConnectionInterface, Instances, Result, Tag};

/// One configured AWS account.
pub struct Ec2Provider {
    account: String,
    client: aws_sdk_ec2::Client,
    interface: ConnectionInterface,
}

impl Ec2Provider {
    /// Build a client with static credentials for one account/region.
    pub async fn new(
        account: impl Into<String>,
        access_key: &str,
        secret_key: &str,
        region: &str,
        interface: ConnectionInterface,
    ) -> Self {
        let credentials = Credentials::new(access_key, secret_key, None, None, "cloud-ssh");
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .credentials_provider(credentials)
            .load()
            .await;

        Self {
            account: account.into(),
            client: aws_sdk_ec2::Client::new(&config),
            interface,
        }
    }
}

#[async_trait]
impl CloudProvider for Ec2Provider {
    fn name(&self) -> &str {
        &self.account
    }

    async fn fetch(&self) -> Result<Instances> {
        let mut instances = Instances::new();

        let mut pages = self
            .client
            .describe_instances()
            .into_paginator()
            .send();

        while let Some(page) = pages.next().await {
            let page = page.map_err(|err| CloudError::ApiError(err.to_string()))?;

            for reservation in page.reservations() {
                for instance in reservation.instances() {
                    if let Some((addr, tags)) = map_instance(instance, self.interface) {
                        instances.insert(addr, tags);
                    }
                }
            }
        }

        tracing::debug!("EC2 returned {} connectable instances", instances.len());

        Ok(instances)
    }
}

/// Normalize one EC2 instance into an inventory entry.
///
/// Returns `None` when the field selected by `interface` is unset, since
/// an instance without a connection address cannot be ssh'd into. EC2
/// reports pending instances with empty strings rather than nulls, so
/// both are treated as absent.
fn map_instance(
    instance: &aws_sdk_ec2::types::Instance,
    interface: ConnectionInterface,
) -> Option<(String, Vec<Tag>)> {
    let addr = match interface {
        ConnectionInterface::PublicDns => instance.public_dns_name(),
        ConnectionInterface::PublicIp => instance.public_ip_address(),
        ConnectionInterface::PrivateIp => instance.private_ip_address(),
        ConnectionInterface::PrivateDns => instance.private_dns_name(),
    };
    let addr = addr.filter(|addr| !addr.is_empty())?.to_string();

    let mut tags: Vec<Tag> = instance
        .tags()
        .iter()
        .filter_map(|tag| match (tag.key(), tag.value()) {
            (Some(key), Some(value)) => Some(Tag::new(key, value)),
            _ => None,
        })
        .collect();

    for group in instance.security_groups() {
        if let Some(name) = group.group_name() {
            tags.push(Tag::new("Security group", name));
        }
    }

    Some((addr, tags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ec2::types::{GroupIdentifier, Instance, Tag as Ec2Tag};

    fn sample_instance() -> Instance {
        Instance::builder()
            .public_dns_name("ec2-54-0-0-1.compute-1.amazonaws.com")
            .public_ip_address("54.0.0.1")
            .private_dns_name("ip-10-0-0-1.ec2.internal")
            .private_ip_address("10.0.0.1")
            .tags(Ec2Tag::builder().key("Name").value("web-1").build())
            .tags(Ec2Tag::builder().key("Env").value("prod").build())
            .security_groups(GroupIdentifier::builder().group_name("web-sg").build())
            .build()
    }

    #[test]
    fn test_map_instance_default_interface() {
        let (addr, tags) =
            map_instance(&sample_instance(), ConnectionInterface::PublicDns).unwrap();

        assert_eq!(addr, "ec2-54-0-0-1.compute-1.amazonaws.com");
        assert_eq!(tags.len(), 3);
        assert_eq!(tags[0], Tag::new("Name", "web-1"));
        assert_eq!(tags[1], Tag::new("Env", "prod"));
    }

    #[test]
    fn test_map_instance_interface_selection() {
        let instance = sample_instance();

        let (addr, _) = map_instance(&instance, ConnectionInterface::PublicIp).unwrap();
        assert_eq!(addr, "54.0.0.1");

        let (addr, _) = map_instance(&instance, ConnectionInterface::PrivateIp).unwrap();
        assert_eq!(addr, "10.0.0.1");

        let (addr, _) = map_instance(&instance, ConnectionInterface::PrivateDns).unwrap();
        assert_eq!(addr, "ip-10-0-0-1.ec2.internal");
    }

    #[test]
    fn test_map_instance_synthesizes_security_group_tag() {
        let (_, tags) = map_instance(&sample_instance(), ConnectionInterface::PublicDns).unwrap();

        assert_eq!(*tags.last().unwrap(), Tag::new("Security group", "web-sg"));
    }

    #[test]
    fn test_map_instance_skips_missing_address() {
        // Pending instance: no public fields populated yet.
        let instance = Instance::builder()
            .private_ip_address("10.0.0.9")
            .build();

        assert!(map_instance(&instance, ConnectionInterface::PublicDns).is_none());
        assert!(map_instance(&instance, ConnectionInterface::PrivateIp).is_some());
    }

    #[test]
    fn test_map_instance_empty_string_is_absent() {
        let instance = Instance::builder().public_dns_name("").build();

        assert!(map_instance(&instance, ConnectionInterface::PublicDns).is_none());
    }

    #[test]
    fn test_map_instance_drops_malformed_tags() {
        let instance = Instance::builder()
            .public_dns_name("host.example.com")
            .tags(Ec2Tag::builder().key("orphan-key").build())
            .tags(Ec2Tag::builder().key("Name").value("web-1").build())
            .build();

        let (_, tags) = map_instance(&instance, ConnectionInterface::PublicDns).unwrap();

        assert_eq!(tags, vec![Tag::new("Name", "web-1")]);
    }
}
