//! Page-attachment handlers

use serde_json::{json, Value};

use crate::hooks::HookContext;

/// Library appended on admin pages, qualified by the default theme
pub const GIN_OVERRIDES_LIBRARY: &str = "gin_overrides";

/// Attaches the default theme's Gin override stylesheet on admin routes
///
/// Assumes the default theme defines a `gin_overrides` library. The
/// `#attached.library` path is created when absent, and the entry is not
/// duplicated if it is already attached.
pub fn admin_page_attachments(ctx: &mut HookContext<'_>) {
    if !ctx.services.is_admin_route() {
        return;
    }
    let library = format!("{}/{}", ctx.services.default_theme(), GIN_OVERRIDES_LIBRARY);

    let Some(attachments) = ctx.attachments.as_deref_mut() else {
        return;
    };
    let Some(root) = attachments.as_object_mut() else {
        return;
    };
    let attached = root.entry("#attached").or_insert_with(|| json!({}));
    let Some(attached) = attached.as_object_mut() else {
        return;
    };
    let list = attached.entry("library").or_insert_with(|| json!([]));
    let Some(list) = list.as_array_mut() else {
        return;
    };

    if !list.iter().any(|v| v.as_str() == Some(library.as_str())) {
        tracing::debug!(library = %library, "attaching admin override library");
        list.push(Value::String(library));
    }
}
