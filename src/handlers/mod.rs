//! The handler set
//!
//! Seven independent, stateless reactions, each bound to one extension
//! point of the host framework:
//! - `form_guard` - placeholder run for every form
//! - `term_overview_guard` - drops the reset-to-alphabetical action
//! - `category_edit_info_guard` - locks the relations section
//! - `term_description_tokens` - strips markup from the description token
//! - `term_presave` - defaults the description text format
//! - `admin_page_attachments` - attaches the Gin override library
//! - `auto_username_guard` - placeholder for username post-processing
//!
//! `register_defaults()` wires all of them into a ready registry.

mod attachments;
mod entity;
mod forms;
mod tokens;
mod username;

pub use attachments::{admin_page_attachments, GIN_OVERRIDES_LIBRARY};
pub use entity::{term_presave, CATEGORY_BUNDLE, PLAIN_TEXT_FORMAT};
pub use forms::{
    category_edit_info_guard, form_guard, term_overview_guard, CATEGORY_EDIT_INFO_FORM,
    TAXONOMY_OVERVIEW_TERMS_FORM,
};
pub use tokens::{term_description_tokens, TERM_CONTEXT_KIND, TERM_DESCRIPTION_TOKEN};
pub use username::{auto_username_guard, USERNAME_KEY};

use crate::core::HelperResult;
use crate::hooks::{HookEvent, HookRegistry};

/// Build a registry with every handler bound to its extension point
pub fn register_defaults() -> HelperResult<HookRegistry> {
    let mut registry = HookRegistry::new();
    registry.add(HookEvent::FormAlter, form_guard);
    registry.add_for_form(TAXONOMY_OVERVIEW_TERMS_FORM, term_overview_guard)?;
    registry.add_for_form(CATEGORY_EDIT_INFO_FORM, category_edit_info_guard)?;
    registry.add(HookEvent::TokensAlter, term_description_tokens);
    registry.add(HookEvent::TermPresave, term_presave);
    registry.add(HookEvent::PageAttachments, admin_page_attachments);
    registry.add(HookEvent::AutoUsernameAlter, auto_username_guard);
    Ok(registry)
}
