//! Hooks Module
//!
//! The event model the host dispatches through. The host owns invocation
//! timing, dispatch order, and the lifetimes of every structure a hook
//! touches; this module only provides the listener map and the context
//! handed to each listener.
//!
//! # Example
//!
//! ```ignore
//! use ascend_helper::hooks::{HookContext, HookEvent, HookRegistry};
//! use ascend_helper::host::HostServices;
//!
//! let mut registry = HookRegistry::new();
//!
//! // Run for every form
//! registry.add(HookEvent::FormAlter, |ctx: &mut HookContext| {
//!     // inspect ctx.form_id, mutate ctx.form
//! });
//!
//! // Run only for one form id
//! registry.add_for_form("taxonomy_overview_terms", |ctx: &mut HookContext| {
//!     // ...
//! })?;
//!
//! // Host-side dispatch, once per matching event:
//! let services = HostServices::fixed(false, "olivero");
//! let mut ctx = HookContext::form_alter(&services, &mut form, None, "some_form");
//! registry.dispatch(&mut ctx);
//! ```
//!
//! # Hook Events
//!
//! | Event | When | Context carries |
//! |-------|------|-----------------|
//! | `FormAlter` | A form description is built for render | `form`, `form_state`, `form_id` |
//! | `TokensAlter` | Token replacements are resolved | `replacements`, `token_context`, `token_metadata` |
//! | `TermPresave` | A taxonomy term is about to be persisted | `entity` |
//! | `PageAttachments` | A page response assembles attachments | `attachments` |
//! | `AutoUsernameAlter` | An auto-generated username is derived | `username_data` |

mod registry;
mod types;

pub use registry::{ArcHook, Hook, HookMatcher, HookRegistry};
pub use types::{HookContext, HookEvent, TokenContext};
