use dioxus::prelude::*;

use crate::i18n::use_language;
use crate::t;

/// Hosts the rendered SVG. `markup` is `None` until the first series is
/// added, so the chart area stays empty before then.
#[component]
pub fn ChartPanel(markup: Option<String>) -> Element {
    let _lang = use_language();
    rsx! {
        section { class: "explorer-card explorer-chart",
            div { class: "explorer-card__header",
                h2 { {t!("chart-title")} }
            }
            match markup {
                Some(svg) => rsx! {
                    div { class: "explorer-chart__canvas", dangerous_inner_html: "{svg}" }
                },
                None => rsx! {
                    p { class: "explorer-card__placeholder", {t!("chart-empty")} }
                },
            }
        }
    }
}
