//! Edit Stuff page for one owned record.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::stuff_form::StuffForm;
use crate::net::api;
use crate::net::types::{Stuff, StuffDraft};
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;
use crate::util::nav::install_pending_navigation;

#[component]
pub fn EditStuffPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    let params = use_params_map();
    let stuff_id = move || params.get().get("id").unwrap_or_default();

    let item = RwSignal::new(None::<Stuff>);
    let busy = RwSignal::new(false);
    let message = RwSignal::new(String::new());
    let requested = RwSignal::new(false);
    let go_to = RwSignal::new(None::<String>);
    install_pending_navigation(go_to, navigate);

    Effect::new(move || {
        let state = auth.get();
        if requested.get_untracked() || state.loading || state.user.is_none() {
            return;
        }
        requested.set(true);
        let id = stuff_id();
        leptos::task::spawn_local(async move {
            match api::fetch_stuff_item(&id).await {
                Ok(stuff) => item.set(Some(stuff)),
                Err(e) => message.set(e),
            }
        });
    });

    let on_submit = Callback::new(move |draft: StuffDraft| {
        busy.set(true);
        message.set(String::new());
        let id = stuff_id();
        leptos::task::spawn_local(async move {
            match api::update_stuff(&id, &draft).await {
                Ok(_) => go_to.set(Some("/list".to_owned())),
                Err(e) => message.set(e),
            }
            busy.set(false);
        });
    });

    let on_delete = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        let id = stuff_id();
        leptos::task::spawn_local(async move {
            match api::delete_stuff(&id).await {
                Ok(()) => go_to.set(Some("/list".to_owned())),
                Err(e) => message.set(e),
            }
            busy.set(false);
        });
    };

    view! {
        <main class="page page--narrow">
            <h2 class="page__title--center">"Edit Stuff"</h2>
            {move || {
                item.get()
                    .map(|stuff| {
                        let initial = StuffDraft {
                            name: stuff.name,
                            quantity: stuff.quantity,
                            condition: stuff.condition,
                        };
                        view! { <StuffForm initial submit_label="Save" busy on_submit/> }
                    })
            }}
            <Show when=move || item.get().is_some()>
                <button class="button button--danger" on:click=on_delete disabled=move || busy.get()>
                    "Delete"
                </button>
            </Show>
            <Show when=move || !message.get().is_empty()>
                <p class="form-error">{move || message.get()}</p>
            </Show>
        </main>
    }
}
