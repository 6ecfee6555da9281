//! UI Components
//!
//! Leptos components for the admin dashboard and the public site.

mod delete_confirm_button;
mod resource_panel;
mod gallery_panel;
mod admin_dashboard;
mod site_header;
mod notice_ticker;
mod resource_grid;
mod gallery_carousel;
mod stats_strip;
mod site_page;

pub use delete_confirm_button::DeleteConfirmButton;
pub use resource_panel::ResourcePanel;
pub use gallery_panel::GalleryPanel;
pub use admin_dashboard::AdminDashboard;
pub use site_header::SiteHeader;
pub use notice_ticker::NoticeTicker;
pub use resource_grid::ResourceGrid;
pub use gallery_carousel::GalleryCarousel;
pub use stats_strip::StatsStrip;
pub use site_page::SitePage;
