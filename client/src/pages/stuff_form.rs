//! Shared add/edit form for stuff records.

#[cfg(test)]
#[path = "stuff_form_test.rs"]
mod stuff_form_test;

use leptos::prelude::*;

use crate::net::types::{CONDITIONS, DEFAULT_CONDITION, StuffDraft};

pub const MAX_NAME_LEN: usize = 200;

/// Turn raw form fields into a draft, or a message for the user.
pub fn validate_stuff_form(name: &str, quantity: &str, condition: &str) -> Result<StuffDraft, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required.");
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err("Name is too long.");
    }
    let quantity: i32 = quantity.trim().parse().map_err(|_| "Quantity must be a whole number.")?;
    if quantity < 0 {
        return Err("Quantity must not be negative.");
    }
    let condition = if CONDITIONS.contains(&condition) { condition } else { DEFAULT_CONDITION };
    Ok(StuffDraft { name: name.to_owned(), quantity, condition: condition.to_owned() })
}

/// Blank draft for the add page.
pub fn empty_draft() -> StuffDraft {
    StuffDraft { name: String::new(), quantity: 0, condition: DEFAULT_CONDITION.to_owned() }
}

#[component]
pub fn StuffForm(
    initial: StuffDraft,
    submit_label: &'static str,
    busy: RwSignal<bool>,
    on_submit: Callback<StuffDraft>,
) -> impl IntoView {
    let name = RwSignal::new(initial.name);
    let quantity = RwSignal::new(initial.quantity.to_string());
    let condition = RwSignal::new(initial.condition);
    let error = RwSignal::new(String::new());

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        match validate_stuff_form(&name.get(), &quantity.get(), &condition.get()) {
            Ok(draft) => {
                error.set(String::new());
                on_submit.run(draft);
            }
            Err(message) => error.set(message.to_owned()),
        }
    };

    view! {
        <form class="stuff-form" on:submit=on_form_submit>
            <label class="stuff-form__field">
                "Name"
                <input
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="stuff-form__field">
                "Quantity"
                <input
                    type="number"
                    min="0"
                    prop:value=move || quantity.get()
                    on:input=move |ev| quantity.set(event_target_value(&ev))
                />
            </label>
            <label class="stuff-form__field">
                "Condition"
                <select
                    prop:value=move || condition.get()
                    on:change=move |ev| condition.set(event_target_value(&ev))
                >
                    {CONDITIONS
                        .iter()
                        .map(|&value| {
                            view! {
                                <option value=value selected=move || condition.get() == value>
                                    {value}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <button class="stuff-form__submit" type="submit" disabled=move || busy.get()>
                {submit_label}
            </button>
            <Show when=move || !error.get().is_empty()>
                <p class="form-error">{move || error.get()}</p>
            </Show>
        </form>
    }
}
