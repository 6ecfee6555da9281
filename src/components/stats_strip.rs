//! Stats Strip Component
//!
//! Headline numbers. The page counts them up once they scroll into view.

use leptos::prelude::*;

const STATS: &[(&str, u64)] = &[
    ("Members", 1250),
    ("Events this year", 48),
    ("Volunteer hours", 15000),
];

#[component]
pub fn StatsStrip() -> impl IntoView {
    view! {
        <section id="about" class="section stats reveal">
            {STATS.iter().map(|(label, target)| view! {
                <div class="stat">
                    <span class="stat-num" data-target=target.to_string()>"0"</span>
                    <span class="stat-label">{*label}</span>
                </div>
            }).collect_view()}
        </section>
    }
}
