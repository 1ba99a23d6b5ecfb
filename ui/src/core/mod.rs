//! Platform-agnostic explorer logic: tables, matching, selection, and the
//! chart / pivot reconcilers driven by [`app::NamesApp`].

pub mod app;
pub mod chart_sync;
pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod names;
pub mod pivot;
pub mod platform;
pub mod selection;
pub mod series;
pub mod table;

pub use app::{AddOutcome, NamesApp, Notice, RemoveOutcome, SwitchOutcome};
pub use chart_sync::{ChartRenderer, ChartSync, RendererFactory};
pub use config::{AppConfig, ChartConfig, MissingNamePolicy};
pub use dataset::{DatasetSwitch, LoadState, LoadTicket, LoadTracker};
pub use error::LoadError;
pub use pivot::{PivotRow, PivotTable};
pub use selection::{DedupePolicy, SelectionChange, SelectionSet};
pub use series::{ChartSeries, ColorPicker, Point, Rgb};
pub use table::{Category, DataTable, Row};
