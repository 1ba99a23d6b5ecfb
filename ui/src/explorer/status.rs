use dioxus::prelude::*;

use crate::core::format::join_categories;
use crate::core::{Category, Notice};
use crate::i18n::use_language;
use crate::t;

pub(crate) fn notice_message(notice: &Notice) -> String {
    match notice {
        Notice::NotFound { name, category } => t!(
            "notice-not-found",
            name = name.as_str(),
            dataset = category.to_string()
        ),
        Notice::Duplicate { name } => t!("notice-duplicate", name = name.as_str()),
        Notice::LoadFailed { category, message } => t!(
            "notice-load-failed",
            dataset = category.to_string(),
            reason = message.as_str()
        ),
        Notice::MissingAfterSwitch { category, names } => t!(
            "notice-missing-after-switch",
            dataset = category.to_string(),
            names = names.join(", ")
        ),
    }
}

/// Visible while any dataset is still being fetched.
#[component]
pub fn LoadingBanner(categories: Vec<Category>) -> Element {
    let _lang = use_language();
    if categories.is_empty() {
        return rsx! {};
    }
    let datasets = join_categories(&categories, &t!("list-conjunction"));

    rsx! {
        div { class: "explorer-loading", role: "status",
            span { class: "explorer-loading__spinner", aria_hidden: "true" }
            span { {t!("loading-datasets", datasets = datasets)} }
        }
    }
}

#[component]
pub fn DatasetToggle(
    offered: Vec<Category>,
    active: Category,
    on_switch: EventHandler<Category>,
) -> Element {
    let _lang = use_language();
    rsx! {
        fieldset { class: "explorer-toggle",
            legend { {t!("dataset-legend")} }
            for category in offered.iter().copied() {
                label {
                    key: "{category.slug()}",
                    class: if category == active { "explorer-toggle__option explorer-toggle__option--active" } else { "explorer-toggle__option" },
                    input {
                        r#type: "radio",
                        name: "dataset",
                        value: "{category.slug()}",
                        checked: category == active,
                        onchange: move |_| on_switch.call(category),
                    }
                    "{category}"
                }
            }
            p { class: "explorer-toggle__current",
                {t!("dataset-current", dataset = active.to_string())}
            }
        }
    }
}

#[component]
pub fn NoticeList(notices: Vec<String>, on_dismiss: EventHandler<()>) -> Element {
    let _lang = use_language();
    if notices.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "explorer-notices", role: "alert",
            ul {
                for (idx, message) in notices.iter().enumerate() {
                    li { key: "{idx}", class: "explorer-notices__item", "{message}" }
                }
            }
            button {
                r#type: "button",
                class: "button button--ghost",
                onclick: move |_| on_dismiss.call(()),
                {t!("notice-dismiss")}
            }
        }
    }
}
