//! Login page exchanging username + password for a stored Basic token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session gate only validates tokens that are already persisted, so
//! this page encodes the credentials, probes `/api/auth` with them, and
//! persists the token before running the login transition.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::AppInfo;
use crate::state::session::SessionState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let info = expect_context::<RwSignal<AppInfo>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let user = username.get().trim().to_owned();
        let pass = password.get();
        if user.is_empty() || pass.is_empty() {
            message.set("Enter both username and password.".to_owned());
            return;
        }
        busy.set(true);
        message.set("Signing in...".to_owned());
        submit_login(
            session,
            info,
            navigate.clone(),
            user,
            pass,
            remember.get_untracked(),
            message,
            busy,
        );
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{move || info.get().title}</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <label class="login-remember">
                        <input
                            type="checkbox"
                            prop:checked=move || remember.get()
                            on:change=move |ev| remember.set(event_target_checked(&ev))
                        />
                        "Remember me"
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !message.get().is_empty()>
                    <p class="login-message">{move || message.get()}</p>
                </Show>
            </div>
        </div>
    }
}

/// Probe the backend with the encoded credentials; persist the token and run
/// the login transition on success.
#[cfg(feature = "hydrate")]
#[allow(clippy::too_many_arguments)]
fn submit_login<F>(
    session: RwSignal<SessionState>,
    info: RwSignal<AppInfo>,
    navigate: F,
    user: String,
    pass: String,
    remember: bool,
    message: RwSignal<String>,
    busy: RwSignal<bool>,
) where
    F: Fn(&str, NavigateOptions) + 'static,
{
    leptos::task::spawn_local(async move {
        let Some(token) = encode_token(&user, &pass) else {
            message.set("Could not encode credentials.".to_owned());
            busy.set(false);
            return;
        };
        let candidate = crate::state::session::AuthContext::from_token(&token);
        match crate::net::api::probe_auth(&candidate).await {
            Ok(()) => {
                crate::util::storage::save_token(&token, remember);
                crate::util::auth::login(session, info);
                navigate(
                    &format!("/{}", crate::util::routing::DEFAULT_SELECTOR),
                    crate::util::routing::replace_nav(),
                );
            }
            Err(err) => {
                message.set(format!("Sign-in failed: {err}"));
                busy.set(false);
            }
        }
    });
}

#[cfg(not(feature = "hydrate"))]
#[allow(clippy::too_many_arguments)]
fn submit_login<F>(
    session: RwSignal<SessionState>,
    info: RwSignal<AppInfo>,
    navigate: F,
    user: String,
    pass: String,
    remember: bool,
    message: RwSignal<String>,
    busy: RwSignal<bool>,
) where
    F: Fn(&str, NavigateOptions) + 'static,
{
    let _ = (session, info, navigate, user, pass, remember, message, busy);
}

/// Base64-encode `user:pass` for the Basic scheme using the browser's btoa.
#[cfg(feature = "hydrate")]
fn encode_token(user: &str, pass: &str) -> Option<String> {
    let window = web_sys::window()?;
    window.btoa(&format!("{user}:{pass}")).ok()
}
