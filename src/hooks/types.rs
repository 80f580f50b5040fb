//! Hook Types
//!
//! Core types for the hook system:
//! - `HookEvent` - the extension point being dispatched
//! - `TokenContext` - entity-kind discriminator for token resolution
//! - `HookContext` - mutable context passed to hooks

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::host::{HostServices, TermEntity};

/// Hook event types
///
/// One variant per extension point of the host framework this crate
/// binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookEvent {
    /// A form description is being built for render
    FormAlter,
    /// Token replacements are being resolved
    TokensAlter,
    /// A taxonomy term is about to be persisted
    TermPresave,
    /// A page response is assembling its attachments
    PageAttachments,
    /// An auto-generated username is about to be applied
    AutoUsernameAlter,
}

impl std::fmt::Display for HookEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HookEvent::FormAlter => write!(f, "FormAlter"),
            HookEvent::TokensAlter => write!(f, "TokensAlter"),
            HookEvent::TermPresave => write!(f, "TermPresave"),
            HookEvent::PageAttachments => write!(f, "PageAttachments"),
            HookEvent::AutoUsernameAlter => write!(f, "AutoUsernameAlter"),
        }
    }
}

/// Token-resolution context
///
/// `kind` discriminates the entity type tokens are resolved against
/// (serialized as `type` in the host's wire shape).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenContext {
    #[serde(rename = "type")]
    pub kind: String,
}

impl TokenContext {
    /// Create a context for the given entity kind
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}

/// Mutable context passed to hooks
///
/// Carries the event, the injected host services, and whichever host
/// structures apply to the event. Hooks borrow the structures for the
/// duration of one call; they never take ownership and cannot retain the
/// references past the call.
pub struct HookContext<'a> {
    /// The hook event type
    pub event: HookEvent,

    /// Injected read-only host capabilities
    pub services: &'a HostServices,

    // === Form events ===
    /// Form description, mutated in place (element key -> definition)
    pub form: Option<&'a mut Value>,

    /// Form state, read-only here
    pub form_state: Option<&'a Value>,

    /// Identifier of the form being rendered
    pub form_id: Option<String>,

    // === Token resolution ===
    /// Token id -> replacement value, entries may be rewritten in place
    pub replacements: Option<&'a mut Map<String, Value>>,

    /// Entity-kind discriminator for the tokens being resolved
    pub token_context: Option<TokenContext>,

    /// Bubbleable render metadata; unused by the current handlers
    pub token_metadata: Option<&'a mut Value>,

    // === Entity presave ===
    /// The term about to be persisted
    pub entity: Option<&'a mut TermEntity>,

    // === Page assembly ===
    /// Page attachments, handlers may append to `#attached.library`
    pub attachments: Option<&'a mut Value>,

    // === Username generation ===
    /// Payload with the derived `username` key
    pub username_data: Option<&'a mut Map<String, Value>>,
}

impl<'a> HookContext<'a> {
    fn empty(event: HookEvent, services: &'a HostServices) -> Self {
        Self {
            event,
            services,
            form: None,
            form_state: None,
            form_id: None,
            replacements: None,
            token_context: None,
            token_metadata: None,
            entity: None,
            attachments: None,
            username_data: None,
        }
    }

    /// Create context for a FormAlter dispatch
    pub fn form_alter(
        services: &'a HostServices,
        form: &'a mut Value,
        form_state: Option<&'a Value>,
        form_id: impl Into<String>,
    ) -> Self {
        Self {
            form: Some(form),
            form_state,
            form_id: Some(form_id.into()),
            ..Self::empty(HookEvent::FormAlter, services)
        }
    }

    /// Create context for a TokensAlter dispatch
    pub fn tokens_alter(
        services: &'a HostServices,
        replacements: &'a mut Map<String, Value>,
        token_context: TokenContext,
        token_metadata: Option<&'a mut Value>,
    ) -> Self {
        Self {
            replacements: Some(replacements),
            token_context: Some(token_context),
            token_metadata,
            ..Self::empty(HookEvent::TokensAlter, services)
        }
    }

    /// Create context for a TermPresave dispatch
    pub fn term_presave(services: &'a HostServices, entity: &'a mut TermEntity) -> Self {
        Self {
            entity: Some(entity),
            ..Self::empty(HookEvent::TermPresave, services)
        }
    }

    /// Create context for a PageAttachments dispatch
    pub fn page_attachments(services: &'a HostServices, attachments: &'a mut Value) -> Self {
        Self {
            attachments: Some(attachments),
            ..Self::empty(HookEvent::PageAttachments, services)
        }
    }

    /// Create context for an AutoUsernameAlter dispatch
    pub fn auto_username_alter(
        services: &'a HostServices,
        username_data: &'a mut Map<String, Value>,
    ) -> Self {
        Self {
            username_data: Some(username_data),
            ..Self::empty(HookEvent::AutoUsernameAlter, services)
        }
    }
}
