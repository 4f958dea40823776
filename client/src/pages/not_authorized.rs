//! Shown when a signed-in user opens an admin-only page.

use leptos::prelude::*;

#[component]
pub fn NotAuthorizedPage() -> impl IntoView {
    view! {
        <main class="page page--narrow">
            <h2 class="page__title--center">"Not Authorized"</h2>
            <p class="page__title--center">"You do not have permission to view this page."</p>
        </main>
    }
}
