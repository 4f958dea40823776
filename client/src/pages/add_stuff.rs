//! Add Stuff page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::stuff_form::{StuffForm, empty_draft};
use crate::net::api;
use crate::net::types::StuffDraft;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;
use crate::util::nav::install_pending_navigation;

#[component]
pub fn AddStuffPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    let busy = RwSignal::new(false);
    let message = RwSignal::new(String::new());
    let go_to = RwSignal::new(None::<String>);
    install_pending_navigation(go_to, navigate);

    let on_submit = Callback::new(move |draft: StuffDraft| {
        busy.set(true);
        message.set(String::new());
        leptos::task::spawn_local(async move {
            match api::create_stuff(&draft).await {
                Ok(_) => go_to.set(Some("/list".to_owned())),
                Err(e) => message.set(e),
            }
            busy.set(false);
        });
    });

    view! {
        <main class="page page--narrow">
            <h2 class="page__title--center">"Add Stuff"</h2>
            <StuffForm initial=empty_draft() submit_label="Submit" busy on_submit/>
            <Show when=move || !message.get().is_empty()>
                <p class="form-error">{move || message.get()}</p>
            </Show>
        </main>
    }
}
