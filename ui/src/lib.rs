//! Shared UI crate for Nametrend. Dataset logic, the chart renderer and the
//! explorer views live here; platform crates only supply routing and config.

pub mod chart;
pub mod core;
pub mod explorer;
pub mod i18n;
pub mod ingest;
pub mod loader;
pub mod views;

mod navbar;
pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    pub use super::navbar::Navbar;
}
