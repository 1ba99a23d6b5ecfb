//! Active-dataset state machine and per-category load bookkeeping.

use std::collections::BTreeMap;

use super::table::{Category, DataTable};

/// Holds one table per loaded category and which one is active.
///
/// Tables are installed with a single map insert, so readers only ever see a
/// complete old table or a complete new one.
#[derive(Debug, Clone)]
pub struct DatasetSwitch {
    offered: Vec<Category>,
    active: Category,
    tables: BTreeMap<Category, DataTable>,
}

impl DatasetSwitch {
    /// `default` is added to `offered` if missing.
    pub fn new(offered: Vec<Category>, default: Category) -> Self {
        let mut offered = offered;
        if !offered.contains(&default) {
            offered.insert(0, default);
        }
        Self {
            offered,
            active: default,
            tables: BTreeMap::new(),
        }
    }

    pub fn offered(&self) -> &[Category] {
        &self.offered
    }

    pub fn is_offered(&self, category: Category) -> bool {
        self.offered.contains(&category)
    }

    pub fn active(&self) -> Category {
        self.active
    }

    /// Returns `true` when the active category actually changed.
    pub fn switch_to(&mut self, category: Category) -> bool {
        if !self.is_offered(category) || self.active == category {
            return false;
        }
        self.active = category;
        true
    }

    pub fn install(&mut self, category: Category, table: DataTable) {
        self.tables.insert(category, table);
    }

    /// Active table, or an empty one if it has not loaded (yet).
    pub fn active_table(&self) -> DataTable {
        self.table(self.active).cloned().unwrap_or_default()
    }

    pub fn table(&self, category: Category) -> Option<&DataTable> {
        self.tables.get(&category)
    }

    pub fn is_installed(&self, category: Category) -> bool {
        self.tables.contains_key(&category)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Proof that a fetch was started; hand it back on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub category: Category,
    generation: u64,
}

#[derive(Debug, Clone, Default)]
pub struct LoadTracker {
    states: BTreeMap<Category, (LoadState, u64)>,
    next_generation: u64,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fetch for `category`. `None` while one is already in flight.
    pub fn begin(&mut self, category: Category) -> Option<LoadTicket> {
        if self.is_category_loading(category) {
            return None;
        }
        self.next_generation += 1;
        let generation = self.next_generation;
        self.states
            .insert(category, (LoadState::Loading, generation));
        Some(LoadTicket {
            category,
            generation,
        })
    }

    /// Records completion. Returns `false` (and changes nothing) for a stale
    /// ticket.
    pub fn finish(&mut self, ticket: LoadTicket, outcome: Result<(), String>) -> bool {
        match self.states.get_mut(&ticket.category) {
            Some((state, generation)) if *generation == ticket.generation => {
                *state = match outcome {
                    Ok(()) => LoadState::Loaded,
                    Err(message) => LoadState::Failed(message),
                };
                true
            }
            _ => false,
        }
    }

    pub fn state(&self, category: Category) -> LoadState {
        self.states
            .get(&category)
            .map(|(state, _)| state.clone())
            .unwrap_or_default()
    }

    pub fn is_category_loading(&self, category: Category) -> bool {
        matches!(self.states.get(&category), Some((LoadState::Loading, _)))
    }

    /// Combined flag: true while any fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.states
            .values()
            .any(|(state, _)| *state == LoadState::Loading)
    }

    pub fn loading_categories(&self) -> Vec<Category> {
        self.states
            .iter()
            .filter(|(_, (state, _))| *state == LoadState::Loading)
            .map(|(category, _)| *category)
            .collect()
    }
}
