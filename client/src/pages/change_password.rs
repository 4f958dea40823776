//! Change-password page for the signed-in user.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::auth_form::validate_change_password_input;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let old_password = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (old_value, new_value, confirm_value) = (old_password.get(), password.get(), confirm.get());
        if let Err(message) = validate_change_password_input(&old_value, &new_value, &confirm_value) {
            info.set(message.to_owned());
            return;
        }
        busy.set(true);
        info.set(String::new());

        leptos::task::spawn_local(async move {
            match api::change_password(&old_value, &new_value, &confirm_value).await {
                Ok(()) => {
                    old_password.set(String::new());
                    password.set(String::new());
                    confirm.set(String::new());
                    info.set("Password changed.".to_owned());
                }
                Err(e) => info.set(e),
            }
            busy.set(false);
        });
    };

    view! {
        <main class="page page--narrow">
            <div class="auth-card">
                <h1>"Change Password"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__field">
                        "Old Password"
                        <input
                            type="password"
                            prop:value=move || old_password.get()
                            on:input=move |ev| old_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__field">
                        "New Password"
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__field">
                        "Confirm New Password"
                        <input
                            type="password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="button" type="submit" disabled=move || busy.get()>
                        "Change"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="form-message">{move || info.get()}</p>
                </Show>
            </div>
        </main>
    }
}
