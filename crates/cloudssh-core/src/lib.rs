//! Core resolution pipeline for cloud-ssh
//!
//! Everything between a fetched `Inventory` and a resolved address lives
//! here: fuzzy matching over instance tags, candidate selection, output
//! formatting, and the ssh argument-list surgery.
//!
//! All of it is synchronous and allocation-light; the async work (provider
//! fetches) happens upstream in `cloudssh-cloud`.

pub mod args;
pub mod error;
pub mod format;
pub mod matcher;
pub mod selector;

pub use args::{find_target, join_user_host, split_user_host};
pub use error::{CoreError, Result};
pub use format::{render, DEFAULT_FORMAT};
pub use matcher::{find_matches, is_subsequence, Candidate};
pub use selector::{pick, resolve, Choice};
