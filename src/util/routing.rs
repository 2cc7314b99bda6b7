//! Route interpretation for the selector-scoped views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routes look like `/login`, `/{selector}` and `/{selector}/{sid}`. The
//! selector names the submission group on display; the optional sid opens a
//! detail overlay without changing the group.

#[cfg(test)]
#[path = "routing_test.rs"]
mod routing_test;

use leptos_router::NavigateOptions;

/// Path of the unauthenticated entry route.
pub const LOGIN_PATH: &str = "/login";

/// Selector shown when none is named (wildcard redirect target).
pub const DEFAULT_SELECTOR: &str = "sent";

/// Navigation options for replace-style redirects, which is how every
/// programmatic navigation in this console behaves.
pub fn replace_nav() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}

/// Extract the selector segment from a path, if the path names one.
/// `/login` and `/` carry no selector.
pub fn selector_of(path: &str) -> Option<String> {
    let first = path.trim_start_matches('/').split('/').next()?;
    if first.is_empty() || path == LOGIN_PATH {
        return None;
    }
    Some(first.to_owned())
}

/// What a route change should trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteAction {
    /// Selector changed while authenticated: reload the list for it.
    Refetch(String),
    /// Unauthenticated navigation outside the login page.
    RedirectLogin,
    /// Nothing to do (e.g. opening the detail overlay on the same selector).
    None,
}

/// Decide how to react to a navigation that moved the selector from
/// `prev_selector` to `next_selector`, landing on `next_path`.
pub fn route_action(
    authenticated: bool,
    prev_selector: Option<&str>,
    next_selector: Option<&str>,
    next_path: &str,
) -> RouteAction {
    if authenticated {
        return match next_selector {
            Some(next) if prev_selector != Some(next) => RouteAction::Refetch(next.to_owned()),
            _ => RouteAction::None,
        };
    }
    if next_path == LOGIN_PATH {
        RouteAction::None
    } else {
        RouteAction::RedirectLogin
    }
}
