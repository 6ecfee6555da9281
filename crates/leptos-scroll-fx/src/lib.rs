//! Leptos Scroll Effects
//!
//! Scroll-driven page affordances for Leptos:
//! reading progress, a header that hides while scrolling down,
//! reveal-on-view and count-up animations (IntersectionObserver based).

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Scroll distance before the header is allowed to hide
pub const HEADER_HIDE_OFFSET_PX: f64 = 80.0;

/// Visible fraction that triggers a reveal
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Visible fraction that starts a counter
pub const COUNT_UP_THRESHOLD: f64 = 0.5;

/// Delay between counter frames
pub const COUNT_UP_TICK_MS: u32 = 12;

/// Scroll state signals
#[derive(Clone, Copy)]
pub struct ScrollSignals {
    /// Page progress in percent (0..=100)
    pub progress_read: ReadSignal<f64>,
    pub progress_write: WriteSignal<f64>,
    pub header_hidden_read: ReadSignal<bool>,
    pub header_hidden_write: WriteSignal<bool>,
}

pub fn create_scroll_signals() -> ScrollSignals {
    let (progress_read, progress_write) = signal(0.0f64);
    let (header_hidden_read, header_hidden_write) = signal(false);
    ScrollSignals {
        progress_read,
        progress_write,
        header_hidden_read,
        header_hidden_write,
    }
}

/// Scroll position as a percentage of the scrollable distance.
///
/// Returns `None` when the page is not taller than the viewport.
pub fn progress_percent(scroll_y: f64, page_height: f64, viewport_height: f64) -> Option<f64> {
    if page_height <= viewport_height {
        return None;
    }
    let pct = scroll_y / (page_height - viewport_height) * 100.0;
    Some(pct.clamp(0.0, 100.0))
}

/// Header hide-on-scroll-down tracker
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderAutoHide {
    last_scroll: f64,
}

impl HeaderAutoHide {
    /// Feed the new scroll offset, returns whether the header should be hidden
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let hidden = scroll_y > self.last_scroll && scroll_y > HEADER_HIDE_OFFSET_PX;
        self.last_scroll = scroll_y;
        hidden
    }
}

/// Bind window scroll handler that drives progress and header visibility
pub fn bind_window_scroll(scroll: ScrollSignals) {
    use wasm_bindgen::closure::Closure;

    let mut header = HeaderAutoHide::default();
    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        let Some(win) = web_sys::window() else { return };
        let scroll_y = win.scroll_y().unwrap_or(0.0);
        let viewport = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let page = win
            .document()
            .and_then(|doc| doc.body())
            .map(|body| body.scroll_height() as f64)
            .unwrap_or(0.0);

        if let Some(pct) = progress_percent(scroll_y, page, viewport) {
            scroll.progress_write.set(pct);
        }
        scroll.header_hidden_write.set(header.on_scroll(scroll_y));
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    }
    on_scroll.forget();
}

/// Observe every element matching `selector` and call `on_visible` the first
/// time each one crosses `threshold`. Elements are unobserved after firing.
pub fn observe_once<F>(selector: &str, threshold: f64, on_visible: F)
where
    F: Fn(Element) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else { return };
    let Ok(nodes) = doc.query_selector_all(selector) else { return };
    if nodes.length() == 0 {
        return;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    observer.unobserve(&target);
                    on_visible(target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let Ok(observer) = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) else {
        return;
    };
    callback.forget();

    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&el);
        }
    }
}

/// Add `class` to each `selector` element once it scrolls into view
pub fn reveal_on_scroll(selector: &str, class: &str) {
    let class = class.to_string();
    observe_once(selector, REVEAL_THRESHOLD, move |el| {
        let _ = el.class_list().add_1(&class);
    });
}

/// Count-up animation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUp {
    target: u64,
    current: u64,
    step: u64,
}

impl CountUp {
    pub fn new(target: u64) -> Self {
        let step = ((target as f64 / 100.0).round() as u64).max(1);
        Self { target, current: 0, step }
    }

    /// Advance one frame. Returns the value to display and whether the
    /// animation has finished.
    pub fn tick(&mut self) -> (u64, bool) {
        self.current = self.current.saturating_add(self.step);
        if self.current >= self.target {
            self.current = self.target;
            (self.target, true)
        } else {
            (self.current, false)
        }
    }
}

/// Parse a `data-target` attribute; anything unparsable counts as zero
pub fn parse_target(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
        .map(|v| v as u64)
        .unwrap_or(0)
}

/// Format with comma thousands separators (1234567 -> "1,234,567")
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Count each `selector` element up to its `data-target` once half visible
pub fn count_up_on_view(selector: &str) {
    observe_once(selector, COUNT_UP_THRESHOLD, |el| {
        let target = parse_target(el.get_attribute("data-target").as_deref());
        wasm_bindgen_futures::spawn_local(async move {
            let mut counter = CountUp::new(target);
            loop {
                TimeoutFuture::new(COUNT_UP_TICK_MS).await;
                let (value, done) = counter.tick();
                el.set_text_content(Some(&format_count(value)));
                if done {
                    break;
                }
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0.0, 2000.0, 1000.0), Some(0.0));
        assert_eq!(progress_percent(500.0, 2000.0, 1000.0), Some(50.0));
        assert_eq!(progress_percent(1000.0, 2000.0, 1000.0), Some(100.0));
        // Overscroll (rubber banding) is clamped
        assert_eq!(progress_percent(1200.0, 2000.0, 1000.0), Some(100.0));
        assert_eq!(progress_percent(-30.0, 2000.0, 1000.0), Some(0.0));
        // Page fits in the viewport
        assert_eq!(progress_percent(0.0, 800.0, 1000.0), None);
        assert_eq!(progress_percent(0.0, 1000.0, 1000.0), None);
    }

    #[test]
    fn test_header_hides_only_when_scrolling_down_past_offset() {
        let mut header = HeaderAutoHide::default();
        assert!(!header.on_scroll(40.0)); // down, but above the offset
        assert!(!header.on_scroll(80.0)); // not past the offset
        assert!(header.on_scroll(120.0));
        assert!(header.on_scroll(300.0));
        assert!(!header.on_scroll(250.0)); // scrolling up shows it
        assert!(!header.on_scroll(250.0)); // no movement
        assert!(header.on_scroll(260.0));
    }

    #[test]
    fn test_count_up_reaches_target_exactly() {
        let mut counter = CountUp::new(1250);
        let mut frames = 0;
        let last = loop {
            frames += 1;
            let (value, done) = counter.tick();
            assert!(value <= 1250);
            if done {
                break value;
            }
        };
        assert_eq!(last, 1250);
        // step = round(1250 / 100) = 13 -> ceil(1250 / 13) frames
        assert_eq!(frames, 97);
    }

    #[test]
    fn test_count_up_small_targets_step_by_one() {
        let mut counter = CountUp::new(3);
        assert_eq!(counter.tick(), (1, false));
        assert_eq!(counter.tick(), (2, false));
        assert_eq!(counter.tick(), (3, true));

        let mut zero = CountUp::new(0);
        assert_eq!(zero.tick(), (0, true));
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target(Some("1500")), 1500);
        assert_eq!(parse_target(Some(" 42 ")), 42);
        assert_eq!(parse_target(Some("12.7")), 12);
        assert_eq!(parse_target(Some("abc")), 0);
        assert_eq!(parse_target(Some("-5")), 0);
        assert_eq!(parse_target(None), 0);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(25000), "25,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
