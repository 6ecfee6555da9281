//! Public Site Page
//!
//! Loads links, notices and gallery independently; a failure in one only
//! affects its own section.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_scroll_fx::{bind_window_scroll, count_up_on_view, create_scroll_signals, reveal_on_scroll};
use reactive_stores::Store;

use crate::components::{GalleryCarousel, NoticeTicker, ResourceGrid, SiteHeader, StatsStrip};
use crate::context::use_app_context;
use crate::models::{GalleryImage, Link, Notice, Record};
use crate::store::{SiteState, SiteStateStoreFields};

fn log_load<R: Record>(result: &Result<Vec<R>, String>) {
    match result {
        Ok(list) => web_sys::console::log_1(&format!("[SITE] Loaded {} {}", list.len(), R::COLLECTION).into()),
        Err(e) => web_sys::console::error_1(&format!("[SITE] Failed to fetch {}: {}", R::COLLECTION, e).into()),
    }
}

#[component]
pub fn SitePage() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(SiteState::default());
    provide_context(store);

    let scroll = create_scroll_signals();
    bind_window_scroll(scroll);

    // Fetch once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let result = ctx.client().list::<Link>().await;
            log_load(&result);
            *store.links().write() = result.into();
        });
        spawn_local(async move {
            let result = ctx.client().list::<Notice>().await;
            log_load(&result);
            *store.notices().write() = result.into();
        });
        spawn_local(async move {
            let result = ctx.client().list::<GalleryImage>().await;
            log_load(&result);
            *store.gallery().write() = result.into();
        });
    });

    // Observers need the sections mounted
    Effect::new(move |_| {
        reveal_on_scroll(".reveal", "visible");
        count_up_on_view(".stat-num");
    });

    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <SiteHeader scroll=scroll />

        <main id="top">
            <section class="hero reveal">
                <h1>"Community Noticeboard"</h1>
                <p>"News, resources and photos from around the neighbourhood."</p>
            </section>

            <NoticeTicker />
            <StatsStrip />
            <ResourceGrid />
            <GalleryCarousel />
        </main>

        <footer class="site-footer">
            <p>"© " <span id="year">{year}</span> " Community Noticeboard"</p>
        </footer>
    }
}
