//! Token-replacement handlers

use serde_json::Value;

use crate::helpers::strip_tags;
use crate::hooks::HookContext;

/// Token-context kind for taxonomy terms
pub const TERM_CONTEXT_KIND: &str = "term";

/// Token id of the term description replacement
pub const TERM_DESCRIPTION_TOKEN: &str = "[term:description]";

/// Strips HTML tags from the term description token
///
/// Without this the term description is rendered wrapped in a `<p>` tag.
pub fn term_description_tokens(ctx: &mut HookContext<'_>) {
    let is_term = ctx
        .token_context
        .as_ref()
        .is_some_and(|c| c.kind == TERM_CONTEXT_KIND);
    if !is_term {
        return;
    }
    let Some(replacements) = ctx.replacements.as_deref_mut() else {
        return;
    };
    let Some(entry) = replacements.get_mut(TERM_DESCRIPTION_TOKEN) else {
        return;
    };
    if let Some(text) = entry.as_str() {
        let stripped = strip_tags(text);
        if stripped != text {
            tracing::debug!("stripped markup from term description token");
            *entry = Value::String(stripped.into_owned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::TokenContext;
    use crate::host::HostServices;
    use serde_json::{json, Map};

    fn services() -> HostServices {
        HostServices::fixed(false, "olivero")
    }

    fn replacements_with_description(value: &str) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(TERM_DESCRIPTION_TOKEN.to_string(), json!(value));
        map.insert("[term:name]".to_string(), json!("Geology"));
        map
    }

    #[test]
    fn test_strips_markup_for_term_context() {
        let services = services();
        let mut replacements = replacements_with_description("<p>Soil and rock.</p>");

        let mut ctx = HookContext::tokens_alter(
            &services,
            &mut replacements,
            TokenContext::new("term"),
            None,
        );
        term_description_tokens(&mut ctx);

        assert_eq!(replacements[TERM_DESCRIPTION_TOKEN], json!("Soil and rock."));
        assert_eq!(replacements["[term:name]"], json!("Geology"));
    }

    #[test]
    fn test_plain_description_unchanged() {
        let services = services();
        let mut replacements = replacements_with_description("Soil and rock.");

        let mut ctx = HookContext::tokens_alter(
            &services,
            &mut replacements,
            TokenContext::new("term"),
            None,
        );
        term_description_tokens(&mut ctx);

        assert_eq!(replacements[TERM_DESCRIPTION_TOKEN], json!("Soil and rock."));
    }

    #[test]
    fn test_non_term_context_untouched() {
        let services = services();
        let mut replacements = replacements_with_description("<p>Soil and rock.</p>");

        let mut ctx = HookContext::tokens_alter(
            &services,
            &mut replacements,
            TokenContext::new("node"),
            None,
        );
        term_description_tokens(&mut ctx);

        assert_eq!(
            replacements[TERM_DESCRIPTION_TOKEN],
            json!("<p>Soil and rock.</p>")
        );
    }

    #[test]
    fn test_missing_description_token_is_noop() {
        let services = services();
        let mut replacements = Map::new();
        replacements.insert("[term:name]".to_string(), json!("Geology"));
        let expected = replacements.clone();

        let mut ctx = HookContext::tokens_alter(
            &services,
            &mut replacements,
            TokenContext::new("term"),
            None,
        );
        term_description_tokens(&mut ctx);
        assert_eq!(replacements, expected);
    }

    #[test]
    fn test_non_string_replacement_untouched() {
        let services = services();
        let mut replacements = Map::new();
        replacements.insert(TERM_DESCRIPTION_TOKEN.to_string(), json!(42));

        let mut ctx = HookContext::tokens_alter(
            &services,
            &mut replacements,
            TokenContext::new("term"),
            None,
        );
        term_description_tokens(&mut ctx);
        assert_eq!(replacements[TERM_DESCRIPTION_TOKEN], json!(42));
    }

    #[test]
    fn test_idempotent() {
        let services = services();
        let mut replacements = replacements_with_description("<p>Soil and rock.</p>");

        let mut ctx = HookContext::tokens_alter(
            &services,
            &mut replacements,
            TokenContext::new("term"),
            None,
        );
        term_description_tokens(&mut ctx);
        let after_first = replacements.clone();

        let mut ctx = HookContext::tokens_alter(
            &services,
            &mut replacements,
            TokenContext::new("term"),
            None,
        );
        term_description_tokens(&mut ctx);
        assert_eq!(replacements, after_first);
    }
}
