//! Unified instance model
//!
//! Every provider normalizes its native resource records into addresses
//! mapped to tag lists. The aggregator merges one `Instances` set per
//! account into a single multi-cloud `Inventory`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One searchable piece of instance metadata.
///
/// Providers emit native tags as-is and synthesize extra entries for
/// metadata that should be searchable the same way (security group names,
/// droplet names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Instances of one account: connection address mapped to its tags, in the
/// order the provider returned them.
pub type Instances = BTreeMap<String, Vec<Tag>>;

/// The full set of instances known across all accounts, keyed by account
/// name then address.
///
/// BTreeMap-backed so iteration order (accounts ascending, addresses
/// ascending) is stable across runs. Owned by the aggregator after
/// construction; everything downstream reads it immutably.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    accounts: BTreeMap<String, Instances>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one account's instances as a whole unit.
    pub fn insert(&mut self, account: impl Into<String>, instances: Instances) {
        self.accounts.insert(account.into(), instances);
    }

    pub fn get(&self, account: &str) -> Option<&Instances> {
        self.accounts.get(account)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Instances)> {
        self.accounts.iter()
    }

    /// Number of accounts (including ones that fetched empty).
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Total number of instances across all accounts.
    pub fn instance_count(&self) -> usize {
        self.accounts.values().map(|i| i.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_whole_account() {
        let mut inventory = Inventory::new();

        let mut first = Instances::new();
        first.insert("10.0.0.1".to_string(), vec![Tag::new("Name", "old")]);
        inventory.insert("prod", first);

        let mut second = Instances::new();
        second.insert("10.0.0.2".to_string(), vec![Tag::new("Name", "new")]);
        inventory.insert("prod", second);

        assert_eq!(inventory.len(), 1);
        let instances = inventory.get("prod").unwrap();
        assert!(instances.contains_key("10.0.0.2"));
        assert!(!instances.contains_key("10.0.0.1"));
    }

    #[test]
    fn test_iteration_order_is_sorted() {
        let mut inventory = Inventory::new();
        inventory.insert("stage", Instances::new());
        inventory.insert("prod", Instances::new());
        inventory.insert("dev", Instances::new());

        let names: Vec<&str> = inventory.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["dev", "prod", "stage"]);
    }

    #[test]
    fn test_instance_count() {
        let mut inventory = Inventory::new();

        let mut prod = Instances::new();
        prod.insert("10.0.0.1".to_string(), vec![]);
        prod.insert("10.0.0.2".to_string(), vec![]);
        inventory.insert("prod", prod);
        inventory.insert("stage", Instances::new());

        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.instance_count(), 2);
    }
}
