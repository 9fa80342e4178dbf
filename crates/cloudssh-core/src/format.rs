//! Candidate display formatting
//!
//! Templates carry `{placeholder}` tokens for the candidate fields.
//! Unknown placeholders stay in the output verbatim, so a typo in a
//! configured template degrades visibly instead of erroring.

use crate::matcher::Candidate;

/// Template used when an account configures no `output_format`.
pub const DEFAULT_FORMAT: &str =
    "Cloud: {cloud}\tMatched by: {tag_name} = {tag_value}\tAddr: {addr}";

/// Substitute candidate fields into `template`.
pub fn render(candidate: &Candidate, template: &str) -> String {
    template
        .replace("{cloud}", &candidate.cloud)
        .replace("{addr}", &candidate.addr)
        .replace("{tag_name}", &candidate.tag_name)
        .replace("{tag_value}", &candidate.tag_value)
        .replace("{instance_name}", &candidate.instance_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> Candidate {
        Candidate {
            cloud: "aws1".to_string(),
            addr: "1.2.3.4".to_string(),
            tag_name: "Name".to_string(),
            tag_value: "web-1".to_string(),
            instance_name: "web-1".to_string(),
        }
    }

    #[test]
    fn test_render_two_fields() {
        let out = render(&candidate(), "Cloud: {cloud}\tAddr: {addr}");
        assert_eq!(out, "Cloud: aws1\tAddr: 1.2.3.4");
    }

    #[test]
    fn test_render_default_format() {
        let out = render(&candidate(), DEFAULT_FORMAT);
        assert_eq!(out, "Cloud: aws1\tMatched by: Name = web-1\tAddr: 1.2.3.4");
    }

    #[test]
    fn test_render_unknown_placeholder_kept() {
        let out = render(&candidate(), "{instance_name} {bogus}");
        assert_eq!(out, "web-1 {bogus}");
    }

    #[test]
    fn test_render_repeated_placeholder() {
        let out = render(&candidate(), "{addr} -> {addr}");
        assert_eq!(out, "1.2.3.4 -> 1.2.3.4");
    }
}
