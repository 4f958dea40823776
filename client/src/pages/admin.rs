//! Admin page: every stuff record and every account.
//!
//! Requests are issued only once the session is known to carry the admin
//! role; other viewers are redirected by [`install_admin_redirect`].

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::stuff_item::StuffItemAdmin;
use crate::net::api;
use crate::net::types::{AdminUserRow, Stuff};
use crate::state::auth::AuthState;
use crate::util::auth::install_admin_redirect;

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_admin_redirect(auth, use_navigate());

    let stuff = RwSignal::new(Vec::<Stuff>::new());
    let users = RwSignal::new(Vec::<AdminUserRow>::new());
    let error = RwSignal::new(String::new());
    let requested = RwSignal::new(false);
    let viewer = move || auth.with(|state| state.user.as_ref().map(|u| u.email.clone()).unwrap_or_default());

    Effect::new(move || {
        let state = auth.get();
        if requested.get_untracked() || state.loading || !state.is_admin() {
            return;
        }
        requested.set(true);
        leptos::task::spawn_local(async move {
            match api::fetch_admin_stuff().await {
                Ok(list) => stuff.set(list),
                Err(e) => error.set(e),
            }
            match api::fetch_admin_users().await {
                Ok(list) => users.set(list),
                Err(e) => error.set(e),
            }
        });
    });

    view! {
        <main id="admin" class="page">
            <Show when=move || !error.get().is_empty()>
                <p class="form-error">{move || error.get()}</p>
            </Show>
            <section class="page__section">
                <h1>"List Stuff Admin"</h1>
                <table class="stuff-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Quantity"</th>
                            <th>"Condition"</th>
                            <th>"Owner"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || stuff.get()
                            key=|item| item.id.clone()
                            children=move |item: Stuff| view! { <StuffItemAdmin stuff=item viewer=viewer()/> }
                        />
                    </tbody>
                </table>
            </section>
            <section class="page__section">
                <h1>"List Users Admin"</h1>
                <table class="stuff-table">
                    <thead>
                        <tr>
                            <th>"Email"</th>
                            <th>"Role"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || users.get()
                            key=|row| row.id.clone()
                            children=move |row: AdminUserRow| {
                                view! {
                                    <tr>
                                        <td>{row.email}</td>
                                        <td>{row.role}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </section>
        </main>
    }
}
