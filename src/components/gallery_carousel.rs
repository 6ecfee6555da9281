//! Gallery Carousel Component
//!
//! Auto-advancing slideshow of uploaded images. Hovering the track pauses
//! it; prev/next move one slide and restart the timer.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::carousel::{Carousel, AUTOPLAY_INTERVAL_MS};
use crate::content::{FetchState, GALLERY_EMPTY, GALLERY_FAILED};
use crate::context::use_app_context;
use crate::store::{use_site_store, SiteStateStoreFields};

#[component]
pub fn GalleryCarousel() -> impl IntoView {
    let store = use_site_store();
    let ctx = use_app_context();

    let message = |text: &'static str| view! { <p class="gallery-message">{text}</p> }.into_any();

    view! {
        <section id="gallery" class="section reveal">
            <h2>"Gallery"</h2>
            <div class="gallery-viewport">
                {move || match store.gallery().get() {
                    FetchState::Loading => message("Loading gallery..."),
                    FetchState::Failed => message(GALLERY_FAILED),
                    FetchState::Ready(images) => match Carousel::new(images.len()) {
                        None => message(GALLERY_EMPTY),
                        Some(carousel) => {
                            let slides = images.iter().map(|img| ctx.upload_url(&img.filename)).collect::<Vec<_>>();
                            view! { <CarouselTrack slides=slides carousel=carousel /> }.into_any()
                        }
                    },
                }}
            </div>
        </section>
    }
}

/// Slide track plus controls; owns the autoplay timer
#[component]
fn CarouselTrack(slides: Vec<String>, carousel: Carousel) -> impl IntoView {
    let state = RwSignal::new(carousel);
    let timer: StoredValue<Option<Interval>, LocalStorage> = StoredValue::new_local(None);

    // Dropping an Interval cancels it
    let stop_auto = move || timer.set_value(None);
    let start_auto = move || {
        stop_auto();
        let tick = Interval::new(AUTOPLAY_INTERVAL_MS, move || state.update(|c| c.advance()));
        timer.set_value(Some(tick));
    };

    start_auto();
    on_cleanup(move || timer.set_value(None));

    view! {
        <div
            id="galleryTrack"
            class="gallery-track"
            style:transform=move || state.with(|c| c.track_transform())
            on:mouseenter=move |_| {
                state.update(|c| c.pointer_enter());
                stop_auto();
            }
            on:mouseleave=move |_| {
                state.update(|c| c.pointer_leave());
                start_auto();
            }
        >
            {slides.into_iter().map(|src| view! {
                <div class="gallery-slide">
                    <img src=src alt="Gallery image" />
                </div>
            }).collect_view()}
        </div>
        <button
            type="button"
            class="gallery-nav prev"
            aria-label="Previous image"
            on:click=move |_| {
                state.update(|c| c.prev());
                start_auto();
            }
        >
            "‹"
        </button>
        <button
            type="button"
            class="gallery-nav next"
            aria-label="Next image"
            on:click=move |_| {
                state.update(|c| c.next());
                start_auto();
            }
        >
            "›"
        </button>
    }
}
