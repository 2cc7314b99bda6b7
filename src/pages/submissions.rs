//! Submissions page — selector-scoped list with bulk actions and a detail
//! overlay.
//!
//! ARCHITECTURE
//! ============
//! Every state-changing action posts to the backend and, on success only,
//! reloads the list for the route's *current* selector. The local list is
//! never patched in place; what is displayed is always a server snapshot.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate, use_params_map};

use crate::components::submission_row::SubmissionRow;
use crate::net::types::{AppInfo, Submission};
use crate::state::session::SessionState;
use crate::state::submissions::SubmissionsState;
use crate::util::routing;

/// List view for the route's selector; renders the detail overlay when the
/// route carries a sid segment.
#[component]
pub fn SubmissionsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let info = expect_context::<RwSignal<AppInfo>>();
    let submissions = expect_context::<RwSignal<SubmissionsState>>();
    let params = use_params_map();
    let location = use_location();
    let navigate = use_navigate();
    let pathname = location.pathname;

    let selector = Memo::new(move |_| {
        params
            .read()
            .get("selector")
            .unwrap_or_else(|| routing::DEFAULT_SELECTOR.to_owned())
    });
    let detail_id =
        Memo::new(move |_| params.read().get("sid").and_then(|sid| sid.parse::<u64>().ok()));

    let on_archive_one = Callback::new(move |id: u64| {
        let auth = session.get_untracked().auth.clone();
        run_action(session, submissions, pathname, async move {
            crate::net::api::archive_submission(&auth, id).await
        });
    });
    let on_unarchive_one = Callback::new(move |id: u64| {
        let auth = session.get_untracked().auth.clone();
        run_action(session, submissions, pathname, async move {
            crate::net::api::unarchive_submission(&auth, id).await
        });
    });
    let on_delete_one = Callback::new(move |id: u64| {
        let auth = session.get_untracked().auth.clone();
        run_action(session, submissions, pathname, async move {
            crate::net::api::delete_submission(&auth, id).await
        });
    });
    let on_archive_all = move |_| {
        let auth = session.get_untracked().auth.clone();
        let group = selector.get_untracked();
        run_action(session, submissions, pathname, async move {
            crate::net::api::archive_submissions(&auth, &group).await
        });
    };
    let on_delete_all = move |_| {
        let auth = session.get_untracked().auth.clone();
        let group = selector.get_untracked();
        run_action(session, submissions, pathname, async move {
            crate::net::api::delete_submissions(&auth, &group).await
        });
    };
    let on_respond = Callback::new(move |(id, text): (u64, String)| {
        let auth = session.get_untracked().auth.clone();
        run_action(session, submissions, pathname, async move {
            crate::net::api::respond(&auth, id, &text).await
        });
    });

    let logout_navigate = navigate.clone();
    let on_logout = move |_| crate::util::auth::logout(session, logout_navigate.clone());

    let close_navigate = navigate;
    let on_close = Callback::new(move |()| {
        close_navigate(
            &format!("/{}", selector.get_untracked()),
            NavigateOptions::default(),
        );
    });

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=|| {
                view! {
                    <div class="submissions-page">
                        <p>"Checking session..."</p>
                    </div>
                }
            }
        >
            <div class="submissions-page">
                <header class="submissions-page__header toolbar">
                    <span class="toolbar__title">{move || info.get().title}</span>
                    <span class="toolbar__divider" aria-hidden="true"></span>
                    <span class="toolbar__selector">{move || selector.get()}</span>

                    <span class="toolbar__spacer"></span>

                    <button class="btn toolbar__archive-all" on:click=on_archive_all>
                        "Archive All"
                    </button>
                    <button class="btn btn--danger toolbar__delete-all" on:click=on_delete_all>
                        "Delete All"
                    </button>
                    <button class="btn toolbar__logout" on:click=on_logout.clone() title="Logout">
                        "Logout"
                    </button>
                </header>

                <Show when=move || submissions.get().loading>
                    <p class="submissions-page__loading">"Loading..."</p>
                </Show>

                <div class="submissions-page__list">
                    {move || {
                        submissions
                            .get()
                            .items
                            .into_iter()
                            .map(|sub| {
                                view! {
                                    <SubmissionRow
                                        submission=sub
                                        selector=selector.get()
                                        on_archive=on_archive_one
                                        on_unarchive=on_unarchive_one
                                        on_delete=on_delete_one
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <Show when=move || detail_id.get().is_some()>
                    <SubmissionDetail
                        detail_id=detail_id
                        submissions=submissions
                        on_respond=on_respond
                        on_close=on_close
                    />
                </Show>
            </div>
        </Show>
    }
}

/// Detail overlay for one submission, with a respond box.
#[component]
fn SubmissionDetail(
    detail_id: Memo<Option<u64>>,
    submissions: RwSignal<SubmissionsState>,
    on_respond: Callback<(u64, String)>,
    on_close: Callback<()>,
) -> impl IntoView {
    let text = RwSignal::new(String::new());
    let record = Memo::new(move |_| {
        detail_id.get().and_then(|id| {
            submissions
                .read()
                .items
                .iter()
                .find(|sub| sub.id == id)
                .cloned()
        })
    });

    let submit = Callback::new(move |()| {
        let Some(id) = detail_id.get_untracked() else {
            return;
        };
        let value = text.get_untracked();
        if value.trim().is_empty() {
            return;
        }
        on_respond.run((id, value.trim().to_owned()));
        text.set(String::new());
        on_close.run(());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog submission-detail" on:click=move |ev| ev.stop_propagation()>
                <h2>
                    {move || {
                        detail_id.get().map(|id| format!("Submission #{id}")).unwrap_or_default()
                    }}
                </h2>
                <pre class="submission-detail__fields">
                    {move || {
                        record
                            .get()
                            .map(|sub| render_fields(&sub))
                            .unwrap_or_else(|| "Loading...".to_owned())
                    }}
                </pre>
                <label class="dialog__label">
                    "Response"
                    <textarea
                        class="dialog__input"
                        prop:value=move || text.get()
                        on:input=move |ev| text.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Send"
                    </button>
                </div>
            </div>
        </div>
    }
}

fn render_fields(submission: &Submission) -> String {
    serde_json::to_string_pretty(&submission.fields).unwrap_or_default()
}

/// Run one state-changing request; on success reload the list for whatever
/// selector the route holds *now*. Failures are logged and the view is left
/// stale.
fn run_action<Fut>(
    session: RwSignal<SessionState>,
    submissions: RwSignal<SubmissionsState>,
    pathname: Memo<String>,
    request: Fut,
) where
    Fut: std::future::Future<Output = Result<(), String>> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match request.await {
            Ok(()) => {
                let selector = routing::selector_of(&pathname.get_untracked())
                    .unwrap_or_else(|| routing::DEFAULT_SELECTOR.to_owned());
                crate::util::refresh::load_submissions(session, submissions, selector);
            }
            Err(err) => log::warn!("submission action failed: {err}"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, submissions, pathname);
        drop(request);
    }
}
