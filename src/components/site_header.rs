//! Site Header Component
//!
//! Scroll progress bar, auto-hiding header, dark-mode toggle and the
//! mobile navigation drawer.

use leptos::prelude::*;
use leptos_scroll_fx::ScrollSignals;

use crate::store::{use_site_store, SiteStateStoreFields};

/// In-page navigation targets
const NAV_LINKS: &[(&str, &str)] = &[
    ("#notices", "Notices"),
    ("#about", "About"),
    ("#resources", "Resources"),
    ("#gallery", "Gallery"),
];

#[component]
pub fn SiteHeader(scroll: ScrollSignals) -> impl IntoView {
    let store = use_site_store();

    // Mirror dark mode onto <html class="dark">
    Effect::new(move |_| {
        let dark = store.dark_mode().get();
        if let Some(root) = document().document_element() {
            let _ = root.class_list().toggle_with_force("dark", dark);
        }
    });

    let toggle_dark = move |_| {
        let dark_mode = store.dark_mode();
        let mut dark = dark_mode.write();
        *dark = !*dark;
    };

    view! {
        <div id="progress-bar" style:width=move || format!("{}%", scroll.progress_read.get())></div>

        <header
            id="site-header"
            style:transform=move || if scroll.header_hidden_read.get() { "translateY(-100%)" } else { "translateY(0)" }
        >
            <a class="brand" href="#top">"Community Noticeboard"</a>
            <nav class="desktop-nav">
                {NAV_LINKS.iter().map(|(href, label)| view! { <a href=*href>{*label}</a> }).collect_view()}
            </nav>
            <div class="header-actions">
                <button id="darkToggle" type="button" aria-label="Toggle dark mode" on:click=toggle_dark>
                    <i class=move || if store.dark_mode().get() { "fa-solid fa-sun" } else { "fa-solid fa-moon" }></i>
                </button>
                <button id="mobileBtn" type="button" aria-label="Open menu" on:click=move |_| *store.menu_open().write() = true>
                    "☰"
                </button>
            </div>
        </header>

        <MobileMenu />
    }
}

/// Slide-in navigation for small screens
#[component]
fn MobileMenu() -> impl IntoView {
    let store = use_site_store();
    let close = move |_: web_sys::MouseEvent| *store.menu_open().write() = false;

    view! {
        <aside
            id="mobileMenu"
            style:transform=move || if store.menu_open().get() { "translateX(0)" } else { "translateX(100%)" }
        >
            <button id="mobileClose" type="button" aria-label="Close menu" on:click=close>"×"</button>
            {NAV_LINKS.iter().map(|(href, label)| view! {
                <a class="mobile-link" href=*href on:click=close>{*label}</a>
            }).collect_view()}
        </aside>
    }
}
