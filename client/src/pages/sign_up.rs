//! Sign-up page; a new account is signed in immediately.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::auth_form::validate_sign_up_input;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::util::nav::install_pending_navigation;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let go_to = RwSignal::new(None::<String>);
    install_pending_navigation(go_to, use_navigate());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_sign_up_input(&email.get(), &password.get(), &confirm.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set(String::new());

        leptos::task::spawn_local(async move {
            match api::sign_up(&email_value, &password_value).await {
                Ok(user) => {
                    auth.set(AuthState::resolved(Some(user)));
                    go_to.set(Some("/add".to_owned()));
                }
                Err(e) => info.set(e),
            }
            busy.set(false);
        });
    };

    let on_reset = move |_| {
        email.set(String::new());
        password.set(String::new());
        confirm.set(String::new());
        info.set(String::new());
    };

    view! {
        <main class="page page--narrow">
            <div class="auth-card">
                <h1>"Sign Up"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__field">
                        "Email"
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__field">
                        "Password"
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__field">
                        "Confirm Password"
                        <input
                            type="password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="auth-form__actions">
                        <button class="button" type="submit" disabled=move || busy.get()>
                            "Register"
                        </button>
                        <button class="button button--secondary" type="button" on:click=on_reset>
                            "Reset"
                        </button>
                    </div>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="form-error">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already have an account? " <a href="/auth/signin">"Sign in"</a>
                </p>
            </div>
        </main>
    }
}
