#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::{Path, PathBuf};

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::AppConfig;
use ui::views::{About, Explorer};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Explorer {},
    #[route("/about")]
    About {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();
    let config = load_config(&resource_dir);
    tracing::info!(
        data_source = %config.data_source,
        categories = ?config.categories,
        "starting desktop shell"
    );

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Nametrend – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .with_context(config)
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_explorer(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Explorer {}, "{label}" })
}
fn nav_about(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::About {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Shared language signal; AppNavbar writes it on selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    register_nav(NavBuilder {
        explorer: nav_explorer,
        about: nav_about,
    });

    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Translated components read `lang_code` via `use_language`.
        Router::<Route> { }
    }
}

/// `config.json` next to the bundled assets, if present. The dataset
/// directory defaults to `<resources>/data`.
#[cfg(feature = "desktop")]
fn load_config(resource_dir: &Path) -> AppConfig {
    let path = resource_dir.join("config.json");
    let mut config = match std::fs::read_to_string(&path) {
        Ok(raw) => match AppConfig::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "invalid config; using defaults");
                AppConfig::default()
            }
        },
        Err(_) => AppConfig::default(),
    };
    if config.data_source.is_empty() {
        config.data_source = resource_dir.join("data").to_string_lossy().into_owned();
    }
    config
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
