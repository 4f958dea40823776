//! Top navigation bar.
//!
//! DESIGN
//! ======
//! What the bar shows is computed by [`nav_model`], a pure function of the
//! auth state and the current path, so the branching is testable without
//! a reactive runtime. The component only renders the model.
//!
//! While the session lookup is pending (including the server-rendered
//! HTML) the bar carries no links and no account menu, so a signed-in
//! user never sees a stale "Login" dropdown.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::net::types;
use crate::state::auth::AuthState;

/// A primary navigation link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub id: &'static str,
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// An entry in the right-hand account dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub href: &'static str,
    pub label: &'static str,
}

/// Bar contents. An empty `menu` means no account dropdown is rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavModel {
    pub links: Vec<NavLink>,
    pub menu_title: String,
    pub menu: Vec<MenuItem>,
}

fn link(id: &'static str, href: &'static str, label: &'static str, path: &str) -> NavLink {
    NavLink { id, href, label, active: path == href }
}

/// Derive the bar's contents from the auth state and current path.
pub fn nav_model(state: &AuthState, path: &str) -> NavModel {
    if state.loading {
        return NavModel::default();
    }
    let Some(user) = state.user.as_ref() else {
        return NavModel {
            links: Vec::new(),
            menu_title: "Login".to_owned(),
            menu: vec![
                MenuItem { id: "login-dropdown-sign-in", href: "/auth/signin", label: "Sign in" },
                MenuItem { id: "login-dropdown-sign-up", href: "/auth/signup", label: "Sign up" },
            ],
        };
    };

    let mut links = vec![
        link("add-stuff-nav", "/add", "Add Stuff", path),
        link("list-stuff-nav", "/list", "List Stuff / Contacts", path),
    ];
    if types::is_admin(user) {
        links.push(link("admin-stuff-nav", "/admin", "Admin", path));
    }

    NavModel {
        links,
        menu_title: user.email.clone(),
        menu: vec![
            MenuItem { id: "login-dropdown-sign-out", href: "/auth/signout", label: "Sign Out" },
            MenuItem {
                id: "login-dropdown-change-password",
                href: "/auth/change-password",
                label: "Change Password",
            },
        ],
    }
}

/// Navigation bar shown on every page.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let model = Memo::new(move |_| nav_model(&auth.get(), &location.pathname.get()));

    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <a class="navbar__brand" href="/">"Stuff Tracker"</a>
                <ul class="navbar__links">
                    {move || {
                        model
                            .get()
                            .links
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <li>
                                        <a
                                            id=link.id
                                            class="navbar__link"
                                            class:navbar__link--active=link.active
                                            href=link.href
                                        >
                                            {link.label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
                {move || {
                    let model = model.get();
                    (!model.menu.is_empty()).then(|| view! {
                        <details class="navbar__dropdown" id="login-dropdown">
                            <summary class="navbar__dropdown-title">{model.menu_title}</summary>
                            <ul class="navbar__dropdown-menu">
                                {model
                                    .menu
                                    .into_iter()
                                    .map(|item| {
                                        view! {
                                            <li>
                                                <a id=item.id class="navbar__dropdown-item" href=item.href>
                                                    {item.label}
                                                </a>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </details>
                    })
                }}
            </div>
        </nav>
    }
}
