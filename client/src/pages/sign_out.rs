//! Sign-out confirmation page.

use leptos::prelude::*;

use crate::net::api;
use crate::state::auth::AuthState;
use crate::util::nav::reload_to;

#[component]
pub fn SignOutPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    let on_confirm = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        leptos::task::spawn_local(async move {
            match api::sign_out().await {
                Ok(()) => {
                    auth.set(AuthState::resolved(None));
                    // `/` is the server's redirect, not a client route.
                    reload_to("/");
                }
                Err(e) => {
                    info.set(e);
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <main class="page page--narrow">
            <h2 class="page__title--center">"Do you want to sign out?"</h2>
            <div class="auth-form__actions">
                <button class="button button--danger" on:click=on_confirm disabled=move || busy.get()>
                    "Sign Out"
                </button>
                <a class="button button--secondary" href="/list">
                    "Cancel"
                </a>
            </div>
            <Show when=move || !info.get().is_empty()>
                <p class="form-error">{move || info.get()}</p>
            </Show>
        </main>
    }
}
