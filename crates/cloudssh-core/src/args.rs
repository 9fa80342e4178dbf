//! ssh argument-list parsing
//!
//! The tool forwards the whole argument list to ssh untouched except for
//! one token: the target. The target is the first token that neither
//! starts with `-` nor directly follows a token starting with `-` (that
//! previous token is assumed to be an option expecting a value, like
//! `-p 2222` or `-i key.pem`).

/// Locate the target token in the ssh argument list.
///
/// Returns its index and the token itself, or `None` when every token
/// looks like an option or an option value.
pub fn find_target(args: &[String]) -> Option<(usize, &str)> {
    for (idx, arg) in args.iter().enumerate() {
        if arg.starts_with('-') {
            continue;
        }
        if idx > 0 && args[idx - 1].starts_with('-') {
            continue;
        }
        return Some((idx, arg.as_str()));
    }

    None
}

/// Split `[user@]hostname` into its parts.
pub fn split_user_host(target: &str) -> (Option<&str>, &str) {
    match target.split_once('@') {
        Some((user, host)) => (Some(user), host),
        None => (None, target),
    }
}

/// Rebuild `[user@]hostname`. An empty user is treated as absent.
pub fn join_user_host(user: Option<&str>, host: &str) -> String {
    match user {
        Some(user) if !user.is_empty() => format!("{user}@{host}"),
        _ => host.to_string(),
    }
}
