//! Selector-scoped list refresh shared by the session gate and page actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every reload goes through [`load_submissions`] so each fetch picks up a
//! sequence tag from the shared state; a completion that is no longer the
//! latest issued fetch is dropped instead of overwriting newer data.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::submissions::SubmissionsState;

/// Fetch the list for `selector` and replace the shared state wholesale,
/// discarding the response if a newer fetch is issued before it resolves.
/// Failures are logged; the previous list stays on display.
pub fn load_submissions(
    session: RwSignal<SessionState>,
    submissions: RwSignal<SubmissionsState>,
    selector: String,
) {
    #[cfg(feature = "hydrate")]
    {
        let Some(seq) = submissions.try_update(SubmissionsState::begin_fetch) else {
            return;
        };
        let auth = session.get_untracked().auth.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_submissions(&auth, &selector).await {
                Ok(items) => {
                    let applied = submissions
                        .try_update(|state| state.apply_fetch(seq, items))
                        .unwrap_or(false);
                    if !applied {
                        log::debug!("dropping stale submissions response for '{selector}'");
                    }
                }
                Err(err) => {
                    log::warn!("submissions fetch for '{selector}' failed: {err}");
                    submissions.update(|state| state.fail_fetch(seq));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, submissions, selector);
    }
}
