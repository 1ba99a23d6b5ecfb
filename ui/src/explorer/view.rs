use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::chart::SvgChartFactory;
use crate::core::{
    platform, AddOutcome, AppConfig, Category, DataTable, LoadError, LoadTicket, NamesApp, Notice,
};
use crate::i18n::use_language;
use crate::loader::load_dataset;
use crate::t;

use super::chart_view::ChartPanel;
use super::export::export_pivot;
use super::pivot_view::PivotGrid;
use super::selection_view::SelectedNames;
use super::status::{notice_message, DatasetToggle, LoadingBanner, NoticeList};

/// Explorer state as the views hold it.
pub type ExplorerApp = NamesApp<SvgChartFactory>;

#[derive(Debug)]
enum ExplorerEvent {
    Loaded {
        ticket: LoadTicket,
        result: Result<DataTable, LoadError>,
    },
    Add(String),
    Remove(String),
    Switch(Category),
    ExportPivot,
}

#[derive(Debug, Clone, PartialEq)]
enum ExportStatus {
    Idle,
    Working,
    Done(Option<String>),
    Failed(String),
}

#[component]
pub fn NameExplorer() -> Element {
    let config = try_use_context::<AppConfig>().unwrap_or_default();
    let _lang = use_language();

    let app = use_signal(|| {
        let factory = SvgChartFactory::new(config.chart.clone());
        NamesApp::new(config.clone(), factory)
    });
    let notices = use_signal(Vec::<Notice>::new);
    let mut draft = use_signal(String::new);
    let export_status = use_signal(|| ExportStatus::Idle);

    let explorer = use_coroutine(move |mut rx: UnboundedReceiver<ExplorerEvent>| {
        let mut app = app;
        let notices = notices;
        let mut draft = draft;
        let mut export_status = export_status;

        async move {
            while let Some(event) = rx.next().await {
                match event {
                    ExplorerEvent::Loaded { ticket, result } => {
                        if !app.with_mut(|state| state.finish_load(ticket, result)) {
                            tracing::debug!(category = %ticket.category, "discarded stale dataset load");
                        }
                    }
                    ExplorerEvent::Add(name) => {
                        let outcome = app.with_mut(|state| state.on_add_requested(&name));
                        if matches!(outcome, AddOutcome::Added | AddOutcome::Queued) {
                            draft.set(String::new());
                        }
                    }
                    ExplorerEvent::Remove(name) => {
                        app.with_mut(|state| state.on_remove_requested(&name));
                    }
                    ExplorerEvent::Switch(category) => {
                        app.with_mut(|state| state.on_dataset_switch_requested(category));
                    }
                    ExplorerEvent::ExportPivot => {
                        if export_status() == ExportStatus::Working {
                            continue;
                        }
                        export_status.set(ExportStatus::Working);
                        let pivot = app.peek().pivot().clone();
                        platform::spawn_future(async move {
                            let mut export_status = export_status;
                            match export_pivot(pivot).await {
                                Ok(path) => export_status.set(ExportStatus::Done(path)),
                                Err(err) => {
                                    tracing::warn!(error = %err, "pivot export failed");
                                    export_status.set(ExportStatus::Failed(err.to_string()));
                                }
                            }
                        });
                    }
                }
                drain_notices(app, notices);
            }
        }
    });

    // Every offered dataset starts loading on mount; completions come back
    // through the coroutine in whatever order they finish.
    use_hook(move || {
        let mut app = app;
        let tickets: Vec<LoadTicket> = app.with_mut(|state| {
            let offered = state.offered_categories().to_vec();
            offered
                .into_iter()
                .filter_map(|category| state.begin_load(category))
                .collect()
        });
        for ticket in tickets {
            let location = app.peek().config().dataset_location(ticket.category);
            let sender = explorer.tx();
            platform::spawn_future(async move {
                let result = load_dataset(location).await;
                let _ = sender.unbounded_send(ExplorerEvent::Loaded { ticket, result });
            });
        }
    });

    #[cfg(debug_assertions)]
    tracing::trace!("explorer render");

    let state = app.read();
    let offered = state.offered_categories().to_vec();
    let active = state.active_category();
    let loading = state.loading_categories();
    let controls_visible = loading.is_empty();
    let selected = state.selected_names().to_vec();
    let missing = state.missing_names().to_vec();
    let pivot = state.pivot().clone();
    let markup = state
        .chart()
        .renderer()
        .map(|chart| chart.markup().to_string());
    drop(state);

    let notice_texts: Vec<String> = notices.read().iter().map(notice_message).collect();
    let exporting = export_status() == ExportStatus::Working;
    let export_feedback = match export_status() {
        ExportStatus::Idle | ExportStatus::Working => None,
        ExportStatus::Done(Some(path)) => Some(t!("export-saved", path = path)),
        ExportStatus::Done(None) => Some(t!("export-started")),
        ExportStatus::Failed(reason) => Some(t!("export-failed", reason = reason)),
    };

    let mut clear_notices = notices;

    rsx! {
        section { class: "page page-explorer",
            h1 { {t!("explorer-title")} }
            p { class: "page-explorer__intro", {t!("explorer-intro")} }

            LoadingBanner { categories: loading }

            if controls_visible {
                DatasetToggle {
                    offered,
                    active,
                    on_switch: move |category| explorer.send(ExplorerEvent::Switch(category)),
                }

                form {
                    class: "explorer-search",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        explorer.send(ExplorerEvent::Add(draft()));
                    },
                    label { class: "visually-hidden", r#for: "name-input", {t!("search-label")} }
                    input {
                        id: "name-input",
                        class: "explorer-search__input",
                        r#type: "text",
                        autocomplete: "off",
                        placeholder: t!("search-placeholder"),
                        value: "{draft}",
                        oninput: move |evt| draft.set(evt.value()),
                    }
                    button { r#type: "submit", class: "button button--primary", {t!("search-add")} }
                }
            }

            NoticeList {
                notices: notice_texts,
                on_dismiss: move |_| clear_notices.set(Vec::new()),
            }

            div { class: "explorer__panels",
                SelectedNames {
                    names: selected,
                    missing,
                    on_remove: move |name| explorer.send(ExplorerEvent::Remove(name)),
                }
                ChartPanel { markup }
            }

            PivotGrid {
                pivot,
                exporting,
                on_export: move |_| explorer.send(ExplorerEvent::ExportPivot),
            }
            if let Some(message) = export_feedback {
                p { class: "explorer-card__meta", "{message}" }
            }
        }
    }
}

fn drain_notices(mut app: Signal<ExplorerApp>, mut notices: Signal<Vec<Notice>>) {
    let fresh = app.with_mut(|state| state.take_notices());
    if !fresh.is_empty() {
        notices.with_mut(|list| list.extend(fresh));
    }
}
