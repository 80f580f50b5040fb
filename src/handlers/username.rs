//! Auto-username handlers

use crate::hooks::HookContext;

/// Key of the derived username in the payload
pub const USERNAME_KEY: &str = "username";

/// Guard run before an auto-generated username is applied
///
/// Reserved for forcing generated usernames to lower case; intentionally
/// a no-op.
pub fn auto_username_guard(_ctx: &mut HookContext<'_>) {}
