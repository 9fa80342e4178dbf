//! cloud-ssh cloud infrastructure
//!
//! This crate provides the cloud provider abstraction for cloud-ssh: the
//! unified instance model, the provider trait, and the concurrent
//! aggregation of per-account inventories.
//!
//! # Supported Providers
//!
//! - **AWS**: EC2 instances (via the AWS SDK)
//! - **DigitalOcean**: Droplets (via the DigitalOcean REST API)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                 cloud-ssh CLI                    │
//! │            (cloud-ssh user@target)               │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │                cloudssh-cloud                    │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │          Provider Abstraction             │   │
//! │  │  trait CloudProvider { ... }              │   │
//! │  └──────────────────────────────────────────┘   │
//! │  ┌──────────────┐  ┌──────────────┐            │
//! │  │  Inventory   │  │  Aggregator  │            │
//! │  └──────────────┘  └──────────────┘            │
//! └───────┬─────────────────┬───────────────────────┘
//!         │                 │
//! ┌───────▼───────┐ ┌───────▼───────┐
//! │      aws      │ │ digitalocean  │
//! │   provider    │ │   provider    │
//! └───────────────┘ └───────────────┘
//! ```

pub mod aggregate;
pub mod error;
pub mod instance;
pub mod provider;

// Re-exports
pub use aggregate::fetch_all;
pub use error::{CloudError, Result};
pub use instance::{Instances, Inventory, Tag};
pub use provider::{CloudProvider, ConnectionInterface, ProviderKind};
