//! Notice Ticker Component
//!
//! Horizontally scrolling notice strip. The CSS animation loops over a
//! doubled list; hovering pauses it.

use leptos::prelude::*;

use crate::content::{ticker_items, FetchState, NOTICES_FAILED};
use crate::store::{use_site_store, SiteStateStoreFields};

/// Track entries, one `.ticker-item` per text
pub(crate) fn ticker_entries(items: Vec<String>) -> impl IntoView {
    items.into_iter().map(|text| view! { <div class="ticker-item">{text}</div> }).collect_view()
}

#[component]
pub fn NoticeTicker() -> impl IntoView {
    let store = use_site_store();
    let (paused, set_paused) = signal(false);

    let items = move || match store.notices().get() {
        FetchState::Loading => Vec::new(),
        FetchState::Ready(notices) => ticker_items(&notices),
        FetchState::Failed => vec![NOTICES_FAILED.to_string()],
    };

    view! {
        <section id="notices" class="ticker">
            <div class="ticker-label">"Notices"</div>
            <div class="ticker-viewport">
                <div
                    id="tickerTrack"
                    class="ticker-track"
                    style:animation-play-state=move || if paused.get() { "paused" } else { "running" }
                    on:mouseenter=move |_| set_paused.set(true)
                    on:mouseleave=move |_| set_paused.set(false)
                >
                    {move || ticker_entries(items())}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Notice;
    use leptos::tachys::view::RenderHtml;

    fn render(notices: &[Notice]) -> String {
        ticker_entries(ticker_items(notices)).to_html()
    }

    fn item_count(html: &str) -> usize {
        html.matches("class=\"ticker-item\"").count()
    }

    #[test]
    fn test_track_holds_list_twice() {
        let notices: Vec<Notice> = (1..=3).map(|id| Notice { id, text: format!("n{}", id) }).collect();
        assert_eq!(item_count(&render(&notices)), 6);
    }

    #[test]
    fn test_empty_track_has_single_placeholder() {
        let html = render(&[]);
        assert_eq!(item_count(&html), 1);
        assert!(html.contains(crate::content::NO_NOTICES));
    }

    #[test]
    fn test_notice_markup_renders_as_text() {
        let html = render(&[Notice { id: 1, text: "<script>alert('x')</script><b>hi</b>".into() }]);
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
    }
}
