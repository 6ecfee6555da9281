//! Noticeboard Frontend App
//!
//! Root component: provides configuration and picks the page from the URL.

use leptos::prelude::*;

use crate::components::{AdminDashboard, SitePage};
use crate::config::ApiConfig;
use crate::context::AppContext;

/// Which page the binary is serving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Admin,
    Site,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/admin" | "/admin.html" => Page::Admin,
            _ => Page::Site,
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_document();
    web_sys::console::log_1(&format!("[APP] API base {}", config.api_base).into());
    provide_context(AppContext::new(config));

    let path = window().location().pathname().unwrap_or_default();
    match Page::from_path(&path) {
        Page::Admin => view! { <AdminDashboard /> }.into_any(),
        Page::Site => view! { <SitePage /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_path() {
        assert_eq!(Page::from_path("/admin"), Page::Admin);
        assert_eq!(Page::from_path("/admin/"), Page::Admin);
        assert_eq!(Page::from_path("/admin.html"), Page::Admin);
        assert_eq!(Page::from_path("/"), Page::Site);
        assert_eq!(Page::from_path(""), Page::Site);
        assert_eq!(Page::from_path("/index.html"), Page::Site);
        assert_eq!(Page::from_path("/administrator"), Page::Site);
    }
}
