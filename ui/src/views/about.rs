use dioxus::prelude::*;

use crate::core::format::join_categories;
use crate::core::{platform, AppConfig};
use crate::i18n::use_language;
use crate::t;

#[component]
pub fn About() -> Element {
    let _lang = use_language();
    let config = try_use_context::<AppConfig>().unwrap_or_default();
    let datasets = join_categories(&config.categories, &t!("list-conjunction"));
    let platform = platform::platform_string();

    rsx! {
        section { class: "page page-about",
            h1 { {t!("about-title")} }
            p { {t!("about-intro")} }
            p { {t!("about-datasets", datasets = datasets)} }
            p { class: "page-about__disclaimer", {t!("about-disclaimer")} }
            p { class: "page-about__meta",
                {t!("about-build", version = env!("CARGO_PKG_VERSION"), platform = platform)}
            }
        }
    }
}
