//! Hook Registry
//!
//! Contains:
//! - `Hook` trait - for implementing hooks
//! - `HookMatcher` - filters FormAlter dispatches by form id
//! - `HookRegistry` - stores and runs hooks

use std::collections::HashMap;
use std::sync::Arc;

use regex::Regex;

use crate::core::HelperResult;

use super::types::{HookContext, HookEvent};

/// Trait for hook implementations
///
/// Hooks are synchronous: each runs to completion on the host's
/// request-handling thread before control returns to the dispatch loop.
/// Hooks must never panic out of a dispatch; missing or ill-shaped input
/// is a silent no-op for that call.
pub trait Hook: Send + Sync {
    /// Execute the hook with the given context
    fn call(&self, ctx: &mut HookContext<'_>);
}

/// Implement Hook for closures
///
/// Uses Higher-Ranked Trait Bounds (HRTB) so the closure works with any
/// lifetime of HookContext.
impl<F> Hook for F
where
    F: for<'a> Fn(&mut HookContext<'a>) + Send + Sync,
{
    fn call(&self, ctx: &mut HookContext<'_>) {
        (self)(ctx)
    }
}

/// Type alias for stored hooks
pub type ArcHook = Arc<dyn Hook>;

/// Filters FormAlter dispatches by form id and executes a hook
pub struct HookMatcher {
    /// Regex matched against the form id (None = every form)
    pattern: Option<Regex>,

    /// The hook to execute
    hook: ArcHook,
}

impl HookMatcher {
    /// Create a matcher that runs for every dispatch of its event
    pub fn new<H: Hook + 'static>(hook: H) -> Self {
        Self {
            pattern: None,
            hook: Arc::new(hook),
        }
    }

    /// Create a matcher with a form-id regex
    pub fn with_pattern<H: Hook + 'static>(pattern: &str, hook: H) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Some(Regex::new(pattern)?),
            hook: Arc::new(hook),
        })
    }

    /// Create a matcher bound to exactly one form id
    ///
    /// The id is escaped and anchored, so comparison is exact and
    /// case-sensitive.
    pub fn for_form<H: Hook + 'static>(form_id: &str, hook: H) -> Result<Self, regex::Error> {
        Self::with_pattern(&format!("^{}$", regex::escape(form_id)), hook)
    }

    /// Check if this matcher applies to a form id
    pub fn matches(&self, form_id: &str) -> bool {
        match &self.pattern {
            Some(regex) => regex.is_match(form_id),
            None => true, // No pattern = match all
        }
    }

    /// Run the hook with the given context
    pub fn run(&self, ctx: &mut HookContext<'_>) {
        self.hook.call(ctx)
    }
}

impl std::fmt::Debug for HookMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookMatcher")
            .field("pattern", &self.pattern.as_ref().map(|r| r.as_str()))
            .finish()
    }
}

/// Central registry the host dispatches through
///
/// The registry is the listener map: event -> hooks, with optional
/// form-id filters on FormAlter hooks. Hooks for one event run in
/// registration order; no hook may rely on ordering relative to hooks
/// registered by unrelated code.
#[derive(Default)]
pub struct HookRegistry {
    hooks: HashMap<HookEvent, Vec<HookMatcher>>,
}

impl HookRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a hook that runs for every dispatch of an event
    pub fn add<H: Hook + 'static>(&mut self, event: HookEvent, hook: H) -> &mut Self {
        self.hooks
            .entry(event)
            .or_default()
            .push(HookMatcher::new(hook));
        self
    }

    /// Add a hook with a form-id pattern
    ///
    /// The pattern only filters FormAlter dispatches; other events ignore
    /// matcher patterns.
    pub fn add_with_pattern<H: Hook + 'static>(
        &mut self,
        event: HookEvent,
        pattern: &str,
        hook: H,
    ) -> HelperResult<&mut Self> {
        self.hooks
            .entry(event)
            .or_default()
            .push(HookMatcher::with_pattern(pattern, hook)?);
        Ok(self)
    }

    /// Add a FormAlter hook bound to exactly one form id
    pub fn add_for_form<H: Hook + 'static>(
        &mut self,
        form_id: &str,
        hook: H,
    ) -> HelperResult<&mut Self> {
        self.hooks
            .entry(HookEvent::FormAlter)
            .or_default()
            .push(HookMatcher::for_form(form_id, hook)?);
        Ok(self)
    }

    /// Add a pre-built matcher
    pub fn add_matcher(&mut self, event: HookEvent, matcher: HookMatcher) -> &mut Self {
        self.hooks.entry(event).or_default().push(matcher);
        self
    }

    /// Check if there are any hooks for an event
    pub fn has_hooks(&self, event: HookEvent) -> bool {
        self.hooks
            .get(&event)
            .map(|v| !v.is_empty())
            .unwrap_or(false)
    }

    /// Get the number of hooks for an event
    pub fn hook_count(&self, event: HookEvent) -> usize {
        self.hooks.get(&event).map(|v| v.len()).unwrap_or(0)
    }

    /// Run all matching hooks for the context's event
    ///
    /// FormAlter hooks are filtered by form id; other events run every
    /// hook. Hooks run in registration order, each to completion, and
    /// dispatch never short-circuits: a hook that declines to act simply
    /// leaves the context untouched.
    pub fn dispatch(&self, ctx: &mut HookContext<'_>) {
        let event = ctx.event;
        let form_id = ctx.form_id.clone();

        let matchers = match self.hooks.get(&event) {
            Some(matchers) => matchers,
            None => return,
        };

        for matcher in matchers {
            let should_run = match (&form_id, event) {
                (Some(id), HookEvent::FormAlter) => matcher.matches(id),
                _ => true, // Non-form hooks always run
            };

            if !should_run {
                continue;
            }

            tracing::debug!(event = %event, "[HookRegistry] running hook");
            matcher.run(ctx);
        }
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (event, matchers) in &self.hooks {
            map.entry(event, &matchers.len());
        }
        map.finish()
    }
}
