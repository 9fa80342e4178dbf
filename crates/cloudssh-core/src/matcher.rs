//! Fuzzy matching over the aggregated inventory
//!
//! A query matches a tag when the query's characters appear in the tag
//! value, in order, with arbitrary gaps. The cloud-account name is
//! prepended to the matching surface so a query can narrow by account
//! ("prodweb" hits tag "web-1" in account "prod").

use cloudssh_cloud::Inventory;

/// One matching instance, carrying the tag that triggered the match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub cloud: String,
    pub addr: String,
    pub tag_name: String,
    pub tag_value: String,
    /// Value of the tag literally named "Name", empty when absent.
    pub instance_name: String,
}

/// Case-sensitive, order-preserving subsequence scan.
///
/// `"abc"` matches `"aXbXXc"` but not `"cab"`; the empty query matches
/// everything.
pub fn is_subsequence(query: &str, target: &str) -> bool {
    let mut target_chars = target.chars();
    query.chars().all(|q| target_chars.by_ref().any(|t| t == q))
}

/// Match `query` against every tag in the inventory.
///
/// Per instance the first matching tag wins: scanning stops once a tag
/// matches, so an instance never yields more than one candidate. The
/// result is sorted by (tag_value, addr, cloud), which keeps equal tag
/// values in a stable order across runs.
pub fn find_matches(inventory: &Inventory, query: &str) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for (cloud, instances) in inventory.iter() {
        for (addr, tags) in instances {
            let instance_name = tags
                .iter()
                .find(|tag| tag.name == "Name")
                .map(|tag| tag.value.clone())
                .unwrap_or_default();

            for tag in tags {
                let surface = format!("{cloud}{}", tag.value);
                if is_subsequence(query, &surface) {
                    candidates.push(Candidate {
                        cloud: cloud.clone(),
                        addr: addr.clone(),
                        tag_name: tag.name.clone(),
                        tag_value: tag.value.clone(),
                        instance_name: instance_name.clone(),
                    });
                    break;
                }
            }
        }
    }

    candidates.sort_by(|a, b| {
        (&a.tag_value, &a.addr, &a.cloud).cmp(&(&b.tag_value, &b.addr, &b.cloud))
    });

    tracing::debug!("Query {:?} matched {} instances", query, candidates.len());

    candidates
}
