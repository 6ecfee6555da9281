//! Public Site State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::content::FetchState;
use crate::models::{GalleryImage, Link, Notice};

/// Public page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct SiteState {
    pub links: FetchState<Vec<Link>>,
    pub notices: FetchState<Vec<Notice>>,
    pub gallery: FetchState<Vec<GalleryImage>>,
    /// Mobile navigation drawer
    pub menu_open: bool,
    pub dark_mode: bool,
}

/// Type alias for the store
pub type SiteStore = Store<SiteState>;

/// Get the site store from context
pub fn use_site_store() -> SiteStore {
    expect_context::<SiteStore>()
}
