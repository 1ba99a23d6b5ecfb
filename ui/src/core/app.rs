//! Application controller: the single owner of explorer state.
//!
//! Every user action enters through one of the `on_*` methods; dataset
//! loading enters through [`NamesApp::begin_load`] / [`NamesApp::finish_load`].
//! Derived views (chart series, pivot grid) are recomputed from the selection
//! and the active table, never patched from the outside.

use std::collections::VecDeque;

use super::chart_sync::{ChartSync, RendererFactory};
use super::config::{AppConfig, MissingNamePolicy};
use super::dataset::{DatasetSwitch, LoadState, LoadTicket, LoadTracker};
use super::error::LoadError;
use super::pivot::PivotTable;
use super::selection::{SelectionChange, SelectionSet};
use super::series::{ChartSeries, ColorPicker};
use super::table::{Category, DataTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// Held until the active dataset finishes loading.
    Queued,
    Blank,
    Duplicate,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    Absent,
    Queued,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    Switched,
    Unchanged,
    Queued,
    Unavailable,
}

/// User-facing signals; the view layer decides how to word them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    NotFound { name: String, category: Category },
    Duplicate { name: String },
    LoadFailed { category: Category, message: String },
    MissingAfterSwitch { category: Category, names: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Add(String),
    Remove(String),
    Switch(Category),
}

pub struct NamesApp<F: RendererFactory> {
    config: AppConfig,
    datasets: DatasetSwitch,
    loads: LoadTracker,
    selection: SelectionSet,
    chart: ChartSync<F>,
    pivot: PivotTable,
    colors: ColorPicker,
    missing: Vec<String>,
    pending: VecDeque<Command>,
    notices: Vec<Notice>,
}

impl<F: RendererFactory> NamesApp<F> {
    pub fn new(config: AppConfig, factory: F) -> Self {
        let datasets = DatasetSwitch::new(config.categories.clone(), config.default_category);
        let selection = SelectionSet::new(config.dedupe);
        Self {
            config,
            datasets,
            loads: LoadTracker::new(),
            selection,
            chart: ChartSync::new(factory),
            pivot: PivotTable::default(),
            colors: ColorPicker::new(),
            missing: Vec::new(),
            pending: VecDeque::new(),
            notices: Vec::new(),
        }
    }

    /// Replaces the colour source (deterministic tests).
    pub fn with_colors(mut self, colors: ColorPicker) -> Self {
        self.colors = colors;
        self
    }

    pub fn on_add_requested(&mut self, name: &str) -> AddOutcome {
        if name.trim().is_empty() {
            return AddOutcome::Blank;
        }
        let command = Command::Add(name.to_string());
        if self.should_queue(&command) {
            tracing::debug!(name, "add queued behind in-flight load");
            self.pending.push_back(command);
            return AddOutcome::Queued;
        }
        self.apply_add(name)
    }

    pub fn on_remove_requested(&mut self, name: &str) -> RemoveOutcome {
        let command = Command::Remove(name.to_string());
        if self.should_queue(&command) {
            self.pending.push_back(command);
            return RemoveOutcome::Queued;
        }
        self.apply_remove(name)
    }

    pub fn on_dataset_switch_requested(&mut self, category: Category) -> SwitchOutcome {
        if !self.datasets.is_offered(category) {
            return SwitchOutcome::Unavailable;
        }
        let command = Command::Switch(category);
        if self.should_queue(&command) {
            self.pending.push_back(command);
            return SwitchOutcome::Queued;
        }
        self.apply_switch(category)
    }

    /// Recomputes chart and pivot from the selection and the active table.
    ///
    /// Returns the selected names with no rows in the active table. Nothing
    /// is purged while the active category has no table installed.
    pub fn on_state_changed(&mut self) -> Vec<String> {
        let active = self.datasets.active();
        let installed = self.datasets.is_installed(active);
        let table = self.datasets.active_table();
        let missing = self
            .chart
            .rebuild(self.selection.list(), &table, &mut self.colors);

        match self.config.missing_names {
            MissingNamePolicy::Purge if installed => {
                self.selection.retain(|name| !missing.contains(name));
                self.missing.clear();
            }
            MissingNamePolicy::Retain | MissingNamePolicy::Purge => {
                self.missing = missing.clone();
            }
        }
        self.pivot = PivotTable::recompute(self.selection.list(), &table);

        if installed && !missing.is_empty() {
            tracing::info!(
                category = %active,
                missing = ?missing,
                "selected names absent from dataset"
            );
        }
        missing
    }

    /// Marks `category` as loading. `None` when it is not offered or a fetch
    /// for it is already in flight.
    pub fn begin_load(&mut self, category: Category) -> Option<LoadTicket> {
        if !self.datasets.is_offered(category) {
            return None;
        }
        let ticket = self.loads.begin(category);
        if ticket.is_some() {
            tracing::info!(%category, "dataset load started");
        } else {
            tracing::debug!(%category, "dataset load already in flight");
        }
        ticket
    }

    /// Applies a finished fetch. Returns `false` for a stale ticket.
    ///
    /// On failure the previously installed table (if any) stays active.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<DataTable, LoadError>) -> bool {
        let category = ticket.category;
        match result {
            Ok(table) => {
                if !self.loads.finish(ticket, Ok(())) {
                    return false;
                }
                tracing::info!(%category, rows = table.len(), "dataset loaded");
                self.datasets.install(category, table);
                if category == self.datasets.active() {
                    self.on_state_changed();
                }
            }
            Err(err) => {
                let message = err.to_string();
                if !self.loads.finish(ticket, Err(message.clone())) {
                    return false;
                }
                tracing::warn!(%category, error = %message, "dataset load failed");
                self.notices.push(Notice::LoadFailed { category, message });
            }
        }
        self.replay_pending();
        true
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn selected_names(&self) -> &[String] {
        self.selection.list()
    }

    pub fn chart(&self) -> &ChartSync<F> {
        &self.chart
    }

    pub fn series(&self) -> &[ChartSeries] {
        self.chart.series()
    }

    pub fn pivot(&self) -> &PivotTable {
        &self.pivot
    }

    pub fn active_category(&self) -> Category {
        self.datasets.active()
    }

    pub fn offered_categories(&self) -> &[Category] {
        self.datasets.offered()
    }

    pub fn active_table(&self) -> DataTable {
        self.datasets.active_table()
    }

    pub fn is_loading(&self) -> bool {
        self.loads.is_loading()
    }

    pub fn loading_categories(&self) -> Vec<Category> {
        self.loads.loading_categories()
    }

    pub fn load_state(&self, category: Category) -> LoadState {
        self.loads.state(category)
    }

    /// Selected names with no rows in the active dataset.
    pub fn missing_names(&self) -> &[String] {
        &self.missing
    }

    pub fn is_missing(&self, name: &str) -> bool {
        self.missing.iter().any(|n| n == name)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    fn should_queue(&self, command: &Command) -> bool {
        !self.pending.is_empty() || self.is_gated(command)
    }

    fn is_gated(&self, command: &Command) -> bool {
        match command {
            Command::Add(_) | Command::Remove(_) => {
                self.loads.is_category_loading(self.datasets.active())
            }
            Command::Switch(category) => self.loads.is_category_loading(*category),
        }
    }

    fn replay_pending(&mut self) {
        while let Some(command) = self.pending.front() {
            if self.is_gated(command) {
                break;
            }
            let Some(command) = self.pending.pop_front() else {
                break;
            };
            match command {
                Command::Add(name) => {
                    self.apply_add(&name);
                }
                Command::Remove(name) => {
                    self.apply_remove(&name);
                }
                Command::Switch(category) => {
                    self.apply_switch(category);
                }
            }
        }
    }

    fn apply_add(&mut self, name: &str) -> AddOutcome {
        if self.selection.contains(name) {
            tracing::debug!(name, "name already selected");
            self.notices.push(Notice::Duplicate {
                name: name.to_string(),
            });
            return AddOutcome::Duplicate;
        }

        let table = self.datasets.active_table();
        if self.chart.add(name, &table, &mut self.colors).is_err() {
            let category = self.datasets.active();
            tracing::debug!(name, %category, "name not found");
            self.notices.push(Notice::NotFound {
                name: name.to_string(),
                category,
            });
            return AddOutcome::NotFound;
        }

        match self.selection.add(name) {
            SelectionChange::Added => {}
            SelectionChange::Duplicate | SelectionChange::Blank => {
                // Guarded above; keep chart and selection one-to-one regardless.
                self.chart.remove(name);
                return AddOutcome::Duplicate;
            }
        }
        self.pivot = PivotTable::recompute(self.selection.list(), &table);
        AddOutcome::Added
    }

    fn apply_remove(&mut self, name: &str) -> RemoveOutcome {
        self.chart.remove(name);
        if !self.selection.remove(name) {
            return RemoveOutcome::Absent;
        }
        self.missing.retain(|n| n != name);
        self.pivot = PivotTable::recompute(self.selection.list(), &self.datasets.active_table());
        RemoveOutcome::Removed
    }

    fn apply_switch(&mut self, category: Category) -> SwitchOutcome {
        if !self.datasets.switch_to(category) {
            return SwitchOutcome::Unchanged;
        }
        tracing::info!(%category, "active dataset switched");
        let missing = self.on_state_changed();
        if self.datasets.is_installed(category) && !missing.is_empty() {
            self.notices.push(Notice::MissingAfterSwitch {
                category,
                names: missing,
            });
        }
        SwitchOutcome::Switched
    }
}
