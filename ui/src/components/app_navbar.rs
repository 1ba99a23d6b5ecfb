use crate::i18n::{self};
use crate::navbar::Navbar;
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Link constructors supplied by a platform crate, so `ui` never needs to
/// know the platform's `Route` enum.
///
/// Each closure receives the localized label and returns a `Link` whose only
/// child is that label. Register once with [`register_nav`] before the router
/// renders; without a builder `AppNavbar` falls back to its `children`.
///
/// ```ignore
/// register_nav(NavBuilder {
///     explorer: |label| rsx!( Link { class: "navbar__link", to: Route::Explorer {}, "{label}" } ),
///     about: |label| rsx!( Link { class: "navbar__link", to: Route::About {}, "{label}" } ),
/// });
/// ```
pub struct NavBuilder {
    pub explorer: fn(label: &str) -> Element,
    pub about: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = i18n::use_language();

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                tracing::debug!(lang = %val, "language switched");
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(lang = %val, error = %err, "language switch failed"),
        }
    };

    let internal_nav = NAV_BUILDER.get().map(|b| {
        let explorer = (b.explorer)(&t!("nav-explorer"));
        let about = (b.about)(&t!("nav-about"));
        rsx! {
            nav { class: "navbar__links",
                {explorer}
                {about}
            }
        }
    });

    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { style: "display:none", "{lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Nametrend" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    Navbar { {children} }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
