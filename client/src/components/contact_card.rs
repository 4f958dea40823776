//! Display card for a sample contact.

use leptos::prelude::*;

use crate::state::contacts::Contact;

#[component]
pub fn ContactCard(contact: Contact) -> impl IntoView {
    let name = contact.full_name();
    view! {
        <div class="contact-card">
            <img class="contact-card__image" src=contact.image alt=name.clone() width="75"/>
            <div class="contact-card__body">
                <h3 class="contact-card__name">{name}</h3>
                <p class="contact-card__address">{contact.address}</p>
                <p class="contact-card__description">{contact.description}</p>
            </div>
        </div>
    }
}
