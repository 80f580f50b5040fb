//! Form-alter handlers
//!
//! Three reactions to form rendering: a generic placeholder, the taxonomy
//! overview cleanup, and the category edit-info lockdown.

use serde_json::{json, Value};

use crate::hooks::HookContext;

/// Form id of the taxonomy term overview listing
pub const TAXONOMY_OVERVIEW_TERMS_FORM: &str = "taxonomy_overview_terms";

/// Form id of the category term edit-info form mode
pub const CATEGORY_EDIT_INFO_FORM: &str = "taxonomy_term_category_edit_info_form";

/// Key of the "reset to alphabetical order" action on the overview form
const RESET_ALPHABETICAL_ACTION: &str = "reset_alphabetical";

/// Generic guard run for every form render
///
/// Reserved for future diagnostic messaging; intentionally a no-op.
pub fn form_guard(_ctx: &mut HookContext<'_>) {}

/// Removes the "reset to alphabetical order" action from the term
/// overview form.
pub fn term_overview_guard(ctx: &mut HookContext<'_>) {
    let Some(form) = ctx.form.as_deref_mut() else {
        return;
    };
    let Some(actions) = form.get_mut("actions").and_then(Value::as_object_mut) else {
        return;
    };
    if actions.remove(RESET_ALPHABETICAL_ACTION).is_some() {
        tracing::debug!("removed reset-to-alphabetical action from term overview form");
    }
}

/// Denies access to the term relations section in the category edit-info
/// form mode; relations must not be altered there.
pub fn category_edit_info_guard(ctx: &mut HookContext<'_>) {
    let Some(form) = ctx.form.as_deref_mut() else {
        return;
    };
    let Some(root) = form.as_object_mut() else {
        return;
    };
    let relations = root.entry("relations").or_insert_with(|| json!({}));
    match relations.as_object_mut() {
        Some(section) => {
            section.insert("#access".to_string(), json!(false));
        }
        // A non-object placeholder gets replaced outright
        None => {
            *relations = json!({ "#access": false });
        }
    }
}
