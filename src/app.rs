//! Root application component with routing, context providers and the
//! session gate.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::net::types::AppInfo;
use crate::pages::{login::LoginPage, submissions::SubmissionsPage};
use crate::state::session::SessionState;
use crate::state::submissions::SubmissionsState;
use crate::util::routing::{self, RouteAction};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts and sets up client-side routing. The
/// wildcard route redirects to the default selector.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let info = RwSignal::new(AppInfo::default());
    let submissions = RwSignal::new(SubmissionsState::default());

    provide_context(session);
    provide_context(info);
    provide_context(submissions);

    view! {
        <Stylesheet id="leptos" href="/pkg/submissions-admin.css"/>
        <Title text=move || info.get().title/>

        <Router>
            <SessionGate/>
            <Routes fallback=default_selector_redirect>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=ParamSegment("selector") view=SubmissionsPage/>
                <Route
                    path=(ParamSegment("selector"), ParamSegment("sid"))
                    view=SubmissionsPage
                />
            </Routes>
        </Router>
    }
}

/// Wildcard fallback: any unknown path lands on the default selector.
fn default_selector_redirect() -> impl IntoView {
    view! { <Redirect path=format!("/{}", routing::DEFAULT_SELECTOR)/> }
}

/// Invisible component that bootstraps the session once and reacts to every
/// subsequent navigation.
#[component]
fn SessionGate() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let info = expect_context::<RwSignal<AppInfo>>();
    let submissions = expect_context::<RwSignal<SubmissionsState>>();
    let location = use_location();
    let navigate = use_navigate();
    let pathname = location.pathname;

    // Silent login on startup, using whatever selector the entry URL holds.
    let boot_navigate = navigate.clone();
    let booted = StoredValue::new(false);
    Effect::new(move || {
        if booted.get_value() {
            return;
        }
        booted.set_value(true);
        let selector = routing::selector_of(&pathname.get_untracked());
        crate::util::auth::check_login(session, info, submissions, selector, boot_navigate.clone());
    });

    // Route watch: refetch when the selector changes while authenticated,
    // force unauthenticated navigation back to the login page. The first run
    // only records the entry route; the silent-login path owns the initial
    // fetch.
    let prev_selector = StoredValue::new(None::<String>);
    let primed = StoredValue::new(false);
    Effect::new(move || {
        let path = pathname.get();
        let next = routing::selector_of(&path);
        let authenticated = session.get().is_authenticated();
        if !primed.get_value() {
            primed.set_value(true);
            prev_selector.set_value(next);
            return;
        }
        let prev = prev_selector.get_value();
        prev_selector.set_value(next.clone());
        match routing::route_action(authenticated, prev.as_deref(), next.as_deref(), &path) {
            RouteAction::Refetch(selector) => {
                crate::util::refresh::load_submissions(session, submissions, selector);
            }
            RouteAction::RedirectLogin => navigate(routing::LOGIN_PATH, routing::replace_nav()),
            RouteAction::None => {}
        }
    });
}
