use dioxus::prelude::*;

use crate::i18n::use_language;
use crate::t;

/// Selected names with a remove control each. Names absent from the active
/// dataset carry a badge.
#[component]
pub fn SelectedNames(
    names: Vec<String>,
    missing: Vec<String>,
    on_remove: EventHandler<String>,
) -> Element {
    let _lang = use_language();
    let count = names.len();

    rsx! {
        section { class: "explorer-card explorer-selection",
            div { class: "explorer-card__header",
                h2 { {t!("selection-title")} }
                span { class: "explorer-card__meta", {t!("selection-count", count = count)} }
            }

            if names.is_empty() {
                p { class: "explorer-card__placeholder", {t!("selection-empty")} }
            } else {
                ul { class: "explorer-selection__list",
                    {names.iter().map(|name| {
                        let target = name.clone();
                        let is_missing = missing.contains(name);
                        let remove_label = t!("selection-remove-label", name = name.as_str());
                        rsx! {
                            li {
                                key: "{name}",
                                class: "explorer-selection__item",
                                span { class: "explorer-selection__name", "{name}" }
                                if is_missing {
                                    span { class: "explorer-selection__badge", {t!("selection-missing-badge")} }
                                }
                                button {
                                    r#type: "button",
                                    class: "button button--ghost explorer-selection__remove",
                                    aria_label: "{remove_label}",
                                    onclick: move |_| on_remove.call(target.clone()),
                                    "×"
                                }
                            }
                        }
                    })}
                }
            }
        }
    }
}
