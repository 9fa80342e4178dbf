//! Candidate selection
//!
//! Zero candidates falls back to the typed hostname, one is picked
//! automatically, several need the caller to ask the user. An invalid
//! answer to that question is fatal; ambiguity is never resolved silently.

use crate::error::{CoreError, Result};
use crate::matcher::Candidate;

/// Outcome of resolving a candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// Nothing matched; connect to the typed hostname as-is.
    Unmatched,
    /// Exactly one match, no prompt needed.
    Auto(Candidate),
    /// Several matches; the caller must prompt and call [`pick`].
    Ambiguous(Vec<Candidate>),
}

/// Classify a sorted candidate list.
pub fn resolve(mut candidates: Vec<Candidate>) -> Choice {
    match candidates.len() {
        0 => Choice::Unmatched,
        1 => Choice::Auto(candidates.remove(0)),
        _ => Choice::Ambiguous(candidates),
    }
}

/// Pick a candidate from the user's prompt answer, 1-based.
///
/// Non-numeric input and out-of-range indexes are errors, not retries.
pub fn pick<'a>(candidates: &'a [Candidate], input: &str) -> Result<&'a Candidate> {
    let input = input.trim();

    let index: usize = input
        .parse()
        .map_err(|_| CoreError::InvalidSelection(input.to_string()))?;

    if index < 1 || index > candidates.len() {
        return Err(CoreError::InvalidSelection(input.to_string()));
    }

    Ok(&candidates[index - 1])
}
