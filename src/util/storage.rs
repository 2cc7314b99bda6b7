//! Browser storage for the auth token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token lives under one key in two places: sessionStorage for the
//! current tab and localStorage when the user asked to be remembered. A
//! non-empty session-scoped value always wins over the durable one.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Storage key shared by both storage areas.
pub const TOKEN_KEY: &str = "authToken";

/// Pick the effective token from the two storage reads. Empty strings are
/// treated as absent.
#[cfg(any(test, feature = "hydrate"))]
fn resolve_token(session: Option<String>, durable: Option<String>) -> Option<String> {
    session
        .filter(|token| !token.is_empty())
        .or_else(|| durable.filter(|token| !token.is_empty()))
}

/// Read the stored auth token, preferring sessionStorage over localStorage.
/// Returns `None` when neither area holds one, or on the server.
pub fn find_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let session = window
            .session_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten());
        let durable = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten());
        resolve_token(session, durable)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a token: into localStorage when `remember`, otherwise into
/// sessionStorage only.
pub fn save_token(token: &str, remember: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let area = if remember {
            window.local_storage()
        } else {
            window.session_storage()
        };
        if let Ok(Some(storage)) = area {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, remember);
    }
}

/// Remove the token from both storage areas.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Ok(Some(storage)) = window.session_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
