//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::net::api;
use crate::pages::{
    add_stuff::AddStuffPage, admin::AdminPage, change_password::ChangePasswordPage, edit_stuff::EditStuffPage,
    list::ListPage, not_authorized::NotAuthorizedPage, sign_in::SignInPage, sign_out::SignOutPage,
    sign_up::SignUpPage,
};
use crate::state::auth::AuthState;

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
/// Provides the auth context and sets up client-side routing. The session
/// lookup runs once in the browser; until it answers, guards hold off.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    provide_context(auth);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let user = api::fetch_session().await;
            #[cfg(feature = "hydrate")]
            log::debug!("session resolved: signed_in={}", user.is_some());
            auth.set(AuthState::resolved(user));
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/stuff-tracker.css"/>
        <Title text="Stuff Tracker"/>

        <Router>
            <NavBar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("list") view=ListPage/>
                <Route path=StaticSegment("add") view=AddStuffPage/>
                <Route path=(StaticSegment("edit"), ParamSegment("id")) view=EditStuffPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("signin")) view=SignInPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("signup")) view=SignUpPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("signout")) view=SignOutPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("change-password")) view=ChangePasswordPage/>
                <Route path=StaticSegment("not-authorized") view=NotAuthorizedPage/>
            </Routes>
        </Router>
    }
}
