use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::AppConfig;
use ui::views::{About, Explorer};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Explorer {},
    #[route("/about")]
    About {},
}

const MAIN_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// CSVs are served from `public/data/` next to the bundle.
const DATA_SOURCE: &str = "data";

fn nav_explorer(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Explorer {},
        "{label}"
    })
}
fn nav_about(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::About {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        explorer: nav_explorer,
        about: nav_about,
    });

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);
    use_context_provider(|| AppConfig::default().with_data_source(DATA_SOURCE));

    rsx! {
        document::Style { "{MAIN_CSS}" }

        Router::<Route> {}
    }
}

#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
