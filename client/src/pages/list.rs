//! List page: the signed-in user's stuff followed by sample contacts.
//!
//! SYSTEM CONTEXT
//! ==============
//! The stuff read is issued only after the session lookup has produced a
//! user; anonymous viewers are redirected to sign-in and never trigger it.
//! The server enforces the same ordering on `GET /api/stuff`.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::contact_card::ContactCard;
use crate::components::stuff_item::StuffItem;
use crate::net::api;
use crate::net::types::Stuff;
use crate::state::auth::AuthState;
use crate::state::contacts::{Contact, sample_contacts};
use crate::util::auth::install_unauth_redirect;

/// True when the owner-scoped read may be issued.
pub fn should_fetch(state: &AuthState, already_requested: bool) -> bool {
    !already_requested && !state.loading && state.is_signed_in()
}

#[component]
pub fn ListPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let items = RwSignal::new(Vec::<Stuff>::new());
    let error = RwSignal::new(String::new());
    let requested = RwSignal::new(false);

    Effect::new(move || {
        if !should_fetch(&auth.get(), requested.get_untracked()) {
            return;
        }
        requested.set(true);
        leptos::task::spawn_local(async move {
            match api::fetch_stuff().await {
                Ok(list) => items.set(list),
                Err(e) => error.set(e),
            }
        });
    });

    view! {
        <main id="list" class="page page--list">
            <section class="page__section">
                <h1>"Stuff"</h1>
                <Show when=move || !error.get().is_empty()>
                    <p class="form-error">{move || error.get()}</p>
                </Show>
                <table class="stuff-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Quantity"</th>
                            <th>"Condition"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || items.get()
                            key=|stuff| stuff.id.clone()
                            children=move |stuff: Stuff| view! { <StuffItem stuff/> }
                        />
                    </tbody>
                </table>
            </section>
            <section class="page__section">
                <h1 class="page__title--center">"Contacts"</h1>
                <div class="contacts-grid">
                    <For
                        each=move || sample_contacts().to_vec()
                        key=Contact::key
                        children=move |contact: Contact| view! { <ContactCard contact/> }
                    />
                </div>
            </section>
        </main>
    }
}
