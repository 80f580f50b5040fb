//! HTML text utilities

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

static TAG_PATTERN: OnceLock<Regex> = OnceLock::new();

fn tag_pattern() -> &'static Regex {
    // Complete <...> runs only; a stray '<' with no closing '>' is text.
    TAG_PATTERN.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"))
}

/// Remove HTML tags, preserving inner text content
///
/// Permissive best-effort removal: every complete `<...>` run is dropped,
/// with no tag or nesting validation. Input without markup is returned
/// borrowed and unchanged, and stripping is idempotent.
pub fn strip_tags(input: &str) -> Cow<'_, str> {
    tag_pattern().replace_all(input, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_wrapping_paragraph() {
        assert_eq!(strip_tags("<p>Soil and rock.</p>"), "Soil and rock.");
    }

    #[test]
    fn test_strips_nested_tags() {
        assert_eq!(
            strip_tags("<p>Soil <em>and</em> rock.</p>"),
            "Soil and rock."
        );
    }

    #[test]
    fn test_strips_tags_with_attributes() {
        assert_eq!(
            strip_tags(r#"<a href="/term/3">Geology</a> basics<br/>"#),
            "Geology basics"
        );
    }

    #[test]
    fn test_plain_text_is_borrowed_unchanged() {
        let result = strip_tags("Soil and rock.");
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, "Soil and rock.");
    }

    #[test]
    fn test_stray_angle_bracket_is_kept() {
        assert_eq!(strip_tags("5 < 6"), "5 < 6");
    }

    #[test]
    fn test_idempotent() {
        let once = strip_tags("<p>Soil and rock.</p>").into_owned();
        let twice = strip_tags(&once);
        assert_eq!(twice, once);
    }
}
