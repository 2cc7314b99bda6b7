//! Session lifecycle orchestration: silent login, credential install, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! These are the only three entry points that change the session phase. The
//! auth probe here is the single failure path that forces a login redirect;
//! every other request failure is logged where it happens and the view is
//! left as-is.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::AppInfo;
use crate::state::session::SessionState;
use crate::state::submissions::SubmissionsState;
use crate::util::{refresh, routing, storage};

/// Attempt a silent login from a stored token.
///
/// No stored token: navigate to the login route. Otherwise probe
/// `GET /api/auth` with the candidate credential; on success install it and
/// load the list for `selector` (falling back to the default selector); on
/// any failure, including a network failure, navigate to the login route.
pub fn check_login<F>(
    session: RwSignal<SessionState>,
    info: RwSignal<AppInfo>,
    submissions: RwSignal<SubmissionsState>,
    selector: Option<String>,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let Some(token) = storage::find_token() else {
        navigate(routing::LOGIN_PATH, routing::replace_nav());
        return;
    };
    session.update(|state| state.begin_probe(&token));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let auth = session.get_untracked().auth.clone();
        match crate::net::api::probe_auth(&auth).await {
            Ok(()) => {
                login(session, info);
                let selector = selector.unwrap_or_else(|| routing::DEFAULT_SELECTOR.to_owned());
                refresh::load_submissions(session, submissions, selector);
            }
            Err(err) => {
                log::warn!("silent login rejected: {err}");
                session.update(SessionState::reject);
                navigate(routing::LOGIN_PATH, routing::replace_nav());
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (info, submissions, selector);
    }
}

/// Install the persisted credential and fetch application metadata once.
///
/// Precondition: a token is already persisted. Credential exchange itself is
/// the login page's job; both it and the silent-login path call this after a
/// successful probe.
pub fn login(session: RwSignal<SessionState>, info: RwSignal<AppInfo>) {
    let Some(token) = storage::find_token() else {
        return;
    };
    session.update(|state| state.establish(&token));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_info().await {
            Some(fetched) => info.set(fetched),
            None => log::warn!("info fetch failed; keeping previous metadata"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = info;
    }
}

/// Clear stored credentials, drop the session and return to the login page.
/// Safe to call when already logged out.
pub fn logout<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions),
{
    storage::clear_token();
    session.update(|state| state.logout());
    navigate(routing::LOGIN_PATH, routing::replace_nav());
}
