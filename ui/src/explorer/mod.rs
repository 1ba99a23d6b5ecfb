//! Dioxus views over [`crate::core::NamesApp`].

mod chart_view;
mod export;
mod pivot_view;
mod selection_view;
mod status;
mod view;

pub use chart_view::ChartPanel;
pub use export::{export_pivot, pivot_csv, ExportError};
pub use pivot_view::PivotGrid;
pub use selection_view::SelectedNames;
pub use status::{DatasetToggle, LoadingBanner, NoticeList};
pub use view::{ExplorerApp, NameExplorer};
