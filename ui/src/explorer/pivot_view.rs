use dioxus::prelude::*;

use crate::core::format::format_cell;
use crate::core::pivot::PivotTable;
use crate::i18n::use_language;
use crate::t;

#[component]
pub fn PivotGrid(pivot: PivotTable, on_export: EventHandler<()>, exporting: bool) -> Element {
    let _lang = use_language();
    let has_columns = !pivot.columns().is_empty();

    rsx! {
        section { class: "explorer-card explorer-pivot",
            div { class: "explorer-card__header",
                h2 { {t!("pivot-title")} }
                if has_columns {
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        disabled: exporting,
                        onclick: move |_| on_export.call(()),
                        {t!("pivot-export")}
                    }
                }
            }

            if !has_columns {
                p { class: "explorer-card__placeholder", {t!("pivot-empty")} }
            } else {
                div { class: "explorer-pivot__scroll",
                    table { class: "explorer-pivot__table",
                        thead {
                            tr {
                                th { scope: "col", {t!("pivot-year")} }
                                for name in pivot.columns().iter() {
                                    th { key: "{name}", scope: "col", "{name}" }
                                }
                            }
                        }
                        tbody {
                            for row in pivot.rows().iter() {
                                tr { key: "{row.year}",
                                    th { scope: "row", "{row.year}" }
                                    for (idx, cell) in row.cells.iter().enumerate() {
                                        td {
                                            key: "{idx}",
                                            class: if cell.is_none() { "explorer-pivot__cell--blank" },
                                            "{format_cell(*cell)}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
