//! Injected host capabilities
//!
//! The two global lookups handlers need - admin-route detection and the
//! default theme name - are modeled as read-only traits injected per
//! invocation rather than fetched from ambient state, so tests can
//! substitute fakes.

use std::fmt;
use std::sync::Arc;

/// Routing predicate: is the current request under the admin section?
pub trait AdminContext: Send + Sync {
    fn is_admin_route(&self) -> bool;
}

/// Configuration lookup for the site's default theme
pub trait ThemeConfig: Send + Sync {
    fn default_theme(&self) -> String;
}

/// Bundle of host capabilities passed along with every hook invocation
#[derive(Clone)]
pub struct HostServices {
    admin_context: Arc<dyn AdminContext>,
    theme_config: Arc<dyn ThemeConfig>,
}

impl HostServices {
    /// Create a service bundle from host-provided implementations
    pub fn new(admin_context: Arc<dyn AdminContext>, theme_config: Arc<dyn ThemeConfig>) -> Self {
        Self {
            admin_context,
            theme_config,
        }
    }

    /// Create a bundle with fixed answers
    ///
    /// Useful in tests and in embeddings where the answers never change.
    pub fn fixed(is_admin_route: bool, default_theme: impl Into<String>) -> Self {
        Self::new(
            Arc::new(FixedAdminContext(is_admin_route)),
            Arc::new(FixedThemeConfig(default_theme.into())),
        )
    }

    /// Whether the active route is part of the administrative interface
    pub fn is_admin_route(&self) -> bool {
        self.admin_context.is_admin_route()
    }

    /// Name of the site's default theme
    pub fn default_theme(&self) -> String {
        self.theme_config.default_theme()
    }
}

impl fmt::Debug for HostServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostServices")
            .field("is_admin_route", &self.is_admin_route())
            .field("default_theme", &self.default_theme())
            .finish()
    }
}

/// Admin-route predicate with a fixed answer
pub struct FixedAdminContext(pub bool);

impl AdminContext for FixedAdminContext {
    fn is_admin_route(&self) -> bool {
        self.0
    }
}

/// Theme lookup with a fixed answer
pub struct FixedThemeConfig(pub String);

impl ThemeConfig for FixedThemeConfig {
    fn default_theme(&self) -> String {
        self.0.clone()
    }
}
