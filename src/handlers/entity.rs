//! Entity presave handlers

use crate::hooks::HookContext;

/// Bundle whose term descriptions get format normalization
pub const CATEGORY_BUNDLE: &str = "category";

/// Fallback text format applied at save time
pub const PLAIN_TEXT_FORMAT: &str = "plain_text";

/// Forces a text format onto category term descriptions saved without one
///
/// Base field overrides can assign the description format, but they do
/// not apply outside the UI, so imported terms arrive with an empty
/// format. Might want to enforce this for all vocabularies, not just
/// category.
pub fn term_presave(ctx: &mut HookContext<'_>) {
    let Some(entity) = ctx.entity.as_deref_mut() else {
        return;
    };
    if entity.bundle != CATEGORY_BUNDLE {
        return;
    }
    let description = &mut entity.description;
    if !description.value.is_empty() && description.format.is_empty() {
        description.format = PLAIN_TEXT_FORMAT.to_string();
        tracing::debug!(bundle = %entity.bundle, "defaulted term description format");
    }
}
