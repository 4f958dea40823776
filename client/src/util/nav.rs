//! Deferred navigation for async handlers.
//!
//! Submit handlers run inside `spawn_local` and cannot hold the router's
//! navigate function, so they write the destination into a signal and an
//! effect installed here performs the navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

/// Navigate whenever `target` is set, then clear it.
pub fn install_pending_navigation<F>(target: RwSignal<Option<String>>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if let Some(path) = target.get() {
            target.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });
}

/// Full page load, for destinations served by the server rather than the
/// client router.
pub fn reload_to(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
