//! Sign-in page for email + password credentials.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::auth_form::validate_sign_in_input;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::util::nav::install_pending_navigation;

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let go_to = RwSignal::new(None::<String>);
    install_pending_navigation(go_to, use_navigate());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_sign_in_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        leptos::task::spawn_local(async move {
            match api::sign_in(&email_value, &password_value).await {
                Ok(user) => {
                    auth.set(AuthState::resolved(Some(user)));
                    go_to.set(Some("/list".to_owned()));
                }
                Err(e) => info.set(e),
            }
            busy.set(false);
        });
    };

    view! {
        <main class="page page--narrow">
            <div class="auth-card">
                <h1>"Sign In"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__field">
                        "Email"
                        <input
                            type="email"
                            placeholder="you@example.com"
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
                    <button class="button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="form-error">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Don't have an account? " <a href="/auth/signup">"Sign up"</a>
                </p>
            </div>
        </main>
    }
}
