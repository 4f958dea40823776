//! Table rows for stuff records on the list and admin pages.

#[cfg(test)]
#[path = "stuff_item_test.rs"]
mod stuff_item_test;

use leptos::prelude::*;

use crate::net::types::Stuff;

pub fn edit_href(id: &str) -> String {
    format!("/edit/{id}")
}

/// Edit target for `stuff` when `viewer` owns it. The edit API is
/// owner-scoped, so other owners' records get no link.
pub fn edit_href_for(stuff: &Stuff, viewer: &str) -> Option<String> {
    (stuff.owner == viewer).then(|| edit_href(&stuff.id))
}

/// Row on the list page; every record there belongs to the viewer.
#[component]
pub fn StuffItem(stuff: Stuff) -> impl IntoView {
    let href = edit_href(&stuff.id);
    view! {
        <tr class="stuff-item">
            <td>{stuff.name}</td>
            <td>{stuff.quantity}</td>
            <td>{stuff.condition}</td>
            <td>
                <a class="stuff-item__edit" href=href>
                    "Edit"
                </a>
            </td>
        </tr>
    }
}

/// Row on the admin page, showing the owner of each record.
#[component]
pub fn StuffItemAdmin(stuff: Stuff, viewer: String) -> impl IntoView {
    let href = edit_href_for(&stuff, &viewer);
    view! {
        <tr class="stuff-item">
            <td>{stuff.name}</td>
            <td>{stuff.quantity}</td>
            <td>{stuff.condition}</td>
            <td>{stuff.owner}</td>
            <td>
                {href.map(|href| view! {
                    <a class="stuff-item__edit" href=href>
                        "Edit"
                    </a>
                })}
            </td>
        </tr>
    }
}
