//! Resource Grid Component
//!
//! Public link cards.

use leptos::prelude::*;

use crate::content::{safe_href, FetchState, LINKS_FAILED};
use crate::context::use_app_context;
use crate::models::Link;
use crate::store::{use_site_store, SiteStateStoreFields};

/// Card for one link; `thumb` is the resolved thumbnail URL
pub(crate) fn link_card(link: Link, thumb: Option<String>) -> impl IntoView {
    view! {
        <a href=safe_href(&link.url) class="resource-card" target="_blank" rel="noopener noreferrer">
            {thumb.map(|src| view! { <img src=src alt="" /> })}
            <div class="title">{link.title}</div>
        </a>
    }
}

#[component]
pub fn ResourceGrid() -> impl IntoView {
    let store = use_site_store();
    let ctx = use_app_context();

    view! {
        <section id="resources" class="section reveal">
            <h2>"Resources"</h2>
            <div id="resourcesGrid" class="resources-grid">
                {move || match store.links().get() {
                    FetchState::Loading => view! { <p class="muted">"Loading resources..."</p> }.into_any(),
                    FetchState::Failed => view! { <p>{LINKS_FAILED}</p> }.into_any(),
                    FetchState::Ready(links) => links.into_iter().map(|link| {
                        let thumb = link.image.as_deref()
                            .filter(|f| !f.is_empty())
                            .map(|f| ctx.upload_url(f));
                        link_card(link, thumb)
                    }).collect_view().into_any(),
                }}
            </div>
        </section>
    }
}
