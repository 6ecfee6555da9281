//! Admin Dashboard
//!
//! Authoring page with one panel per collection.

use leptos::prelude::*;

use crate::components::{GalleryPanel, ResourcePanel};
use crate::models::{Link, Notice};

#[component]
pub fn AdminDashboard() -> impl IntoView {
    view! {
        <main class="admin-layout">
            <h1>"Content Admin"</h1>
            <ResourcePanel<Notice> title="Notices" />
            <ResourcePanel<Link> title="Links" />
            <GalleryPanel />
        </main>
    }
}
