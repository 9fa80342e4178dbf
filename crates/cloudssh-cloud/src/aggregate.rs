//! Concurrent inventory aggregation
//!
//! Fetches every configured account in parallel and merges the results into
//! a single `Inventory`. A failing provider degrades to an empty entry for
//! its account; it never aborts the run.

use crate::instance::{Instances, Inventory};
use crate::provider::CloudProvider;
use tokio::task::JoinSet;

/// Fetch all providers concurrently and merge their results.
///
/// One task per provider, joined with a full barrier: nothing downstream
/// observes a partial inventory. Each account's result is inserted as a
/// whole unit after its task completes, so writers never interleave.
pub async fn fetch_all(providers: Vec<Box<dyn CloudProvider>>) -> Inventory {
    let mut tasks = JoinSet::new();

    for provider in providers {
        tasks.spawn(async move {
            let account = provider.name().to_string();
            match provider.fetch().await {
                Ok(instances) => {
                    tracing::debug!("Fetched {} instances from {}", instances.len(), account);
                    (account, instances)
                }
                Err(err) => {
                    tracing::error!("Fetching {} failed: {}", account, err);
                    (account, Instances::new())
                }
            }
        });
    }

    let mut inventory = Inventory::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((account, instances)) => inventory.insert(account, instances),
            Err(err) => tracing::error!("Inventory task panicked: {}", err),
        }
    }

    inventory
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CloudError, Result};
    use crate::instance::Tag;
    use async_trait::async_trait;

    struct StaticProvider {
        account: String,
        instances: Instances,
    }

    struct FailingProvider {
        account: String,
    }

    #[async_trait]
    impl CloudProvider for StaticProvider {
        fn name(&self) -> &str {
            &self.account
        }

        async fn fetch(&self) -> Result<Instances> {
            Ok(self.instances.clone())
        }
    }

    #[async_trait]
    impl CloudProvider for FailingProvider {
        fn name(&self) -> &str {
            &self.account
        }

        async fn fetch(&self) -> Result<Instances> {
            Err(CloudError::ApiError("connection refused".to_string()))
        }
    }

    fn static_provider(account: &str, addr: &str, name: &str) -> Box<dyn CloudProvider> {
        let mut instances = Instances::new();
        instances.insert(addr.to_string(), vec![Tag::new("Name", name)]);
        Box::new(StaticProvider {
            account: account.to_string(),
            instances,
        })
    }

    #[tokio::test]
    async fn test_fetch_all_merges_accounts() {
        let providers = vec![
            static_provider("prod", "web-1.example.com", "web-1"),
            static_provider("stage", "web-2.example.com", "web-2"),
        ];

        let inventory = fetch_all(providers).await;

        assert_eq!(inventory.len(), 2);
        assert!(inventory.get("prod").unwrap().contains_key("web-1.example.com"));
        assert!(inventory.get("stage").unwrap().contains_key("web-2.example.com"));
    }

    #[tokio::test]
    async fn test_failing_provider_yields_empty_entry() {
        let providers: Vec<Box<dyn CloudProvider>> = vec![
            static_provider("prod", "web-1.example.com", "web-1"),
            Box::new(FailingProvider {
                account: "broken".to_string(),
            }),
        ];

        let inventory = fetch_all(providers).await;

        // Failure is isolated: the healthy account is intact and the
        // failing one maps to an empty instance set, not an absence.
        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.get("prod").unwrap().len(), 1);
        assert!(inventory.get("broken").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_all_empty() {
        let inventory = fetch_all(Vec::new()).await;
        assert!(inventory.is_empty());
    }
}
