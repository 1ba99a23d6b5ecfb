//! Keeps a chart renderer's series list in step with the selection.
//!
//! The canonical series collection lives here; the renderer only ever receives
//! commands (`add_series`, `remove_series_by_label`, `replace_all_series`,
//! `render`) and clones of the series it should draw.

use super::names::match_rows;
use super::series::{build_series, series_label, ChartSeries, ColorPicker, Rgb};
use super::table::DataTable;

/// Drawing surface driven by [`ChartSync`].
pub trait ChartRenderer {
    fn add_series(&mut self, series: ChartSeries);
    /// Returns whether a series with `label` existed.
    fn remove_series_by_label(&mut self, label: &str) -> bool;
    fn replace_all_series(&mut self, series: Vec<ChartSeries>);
    fn render(&mut self);
}

/// Creates the renderer on the first successful add.
pub trait RendererFactory {
    type Renderer: ChartRenderer;

    fn create(&mut self) -> Self::Renderer;
}

impl<R, F> RendererFactory for F
where
    R: ChartRenderer,
    F: FnMut() -> R,
{
    type Renderer = R;

    fn create(&mut self) -> R {
        self()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFound {
    pub name: String,
}

pub struct ChartSync<F: RendererFactory> {
    factory: F,
    renderer: Option<F::Renderer>,
    series: Vec<ChartSeries>,
}

impl<F: RendererFactory> ChartSync<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            renderer: None,
            series: Vec::new(),
        }
    }

    /// Builds and appends the series for `name`. Nothing changes when the
    /// name has no rows in `table`.
    pub fn add(
        &mut self,
        name: &str,
        table: &DataTable,
        colors: &mut ColorPicker,
    ) -> Result<&ChartSeries, NotFound> {
        let rows = match_rows(table, name);
        if rows.is_empty() {
            return Err(NotFound {
                name: name.to_string(),
            });
        }

        let color = colors.pick(&self.colors_in_use());
        let series = build_series(&rows, series_label(name), color);

        let renderer = self.ensure_renderer();
        renderer.add_series(series.clone());
        renderer.render();

        self.series.push(series);
        Ok(&self.series[self.series.len() - 1])
    }

    /// Drops the series for `name`. Returns whether one existed.
    pub fn remove(&mut self, name: &str) -> bool {
        let label = series_label(name);
        let before = self.series.len();
        self.series.retain(|s| s.label != label);
        let removed = self.series.len() != before;

        if let Some(renderer) = self.renderer.as_mut() {
            renderer.remove_series_by_label(&label);
            renderer.render();
        }
        removed
    }

    /// Recomputes every series against `table` (dataset switch / reload).
    ///
    /// Names keep their previous colour. Returns the names with no rows in
    /// `table`; they are absent from the chart afterwards.
    pub fn rebuild<S: AsRef<str>>(
        &mut self,
        names: &[S],
        table: &DataTable,
        colors: &mut ColorPicker,
    ) -> Vec<String> {
        let previous = std::mem::take(&mut self.series);
        let mut missing = Vec::new();
        let mut matched = Vec::new();

        for name in names {
            let name = name.as_ref();
            let rows = match_rows(table, name);
            if rows.is_empty() {
                missing.push(name.to_string());
                continue;
            }
            let label = series_label(name);
            let kept = previous.iter().find(|s| s.label == label).map(|s| s.color);
            matched.push((rows, label, kept));
        }

        // Fresh colours avoid every kept one, wherever it sits in the list.
        let mut taken: Vec<Rgb> = matched.iter().filter_map(|(_, _, kept)| *kept).collect();
        for (rows, label, kept) in matched {
            let color = kept.unwrap_or_else(|| {
                let fresh = colors.pick(&taken);
                taken.push(fresh);
                fresh
            });
            self.series.push(build_series(&rows, label, color));
        }

        let snapshot = self.series.clone();
        if self.renderer.is_none() && snapshot.is_empty() {
            return missing;
        }
        let renderer = self.ensure_renderer();
        renderer.replace_all_series(snapshot);
        renderer.render();

        missing
    }

    pub fn series(&self) -> &[ChartSeries] {
        &self.series
    }

    pub fn series_for(&self, name: &str) -> Option<&ChartSeries> {
        let label = series_label(name);
        self.series.iter().find(|s| s.label == label)
    }

    pub fn renderer(&self) -> Option<&F::Renderer> {
        self.renderer.as_ref()
    }

    pub fn has_renderer(&self) -> bool {
        self.renderer.is_some()
    }

    fn colors_in_use(&self) -> Vec<Rgb> {
        self.series.iter().map(|s| s.color).collect()
    }

    fn ensure_renderer(&mut self) -> &mut F::Renderer {
        let factory = &mut self.factory;
        self.renderer.get_or_insert_with(|| factory.create())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::table::Row;

    /// Records every command it receives.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingRenderer {
        pub labels: Vec<String>,
        pub renders: usize,
        pub replaced: usize,
    }

    impl ChartRenderer for RecordingRenderer {
        fn add_series(&mut self, series: ChartSeries) {
            self.labels.push(series.label);
        }

        fn remove_series_by_label(&mut self, label: &str) -> bool {
            let before = self.labels.len();
            self.labels.retain(|l| l != label);
            before != self.labels.len()
        }

        fn replace_all_series(&mut self, series: Vec<ChartSeries>) {
            self.replaced += 1;
            self.labels = series.into_iter().map(|s| s.label).collect();
        }

        fn render(&mut self) {
            self.renders += 1;
        }
    }

    fn sync() -> ChartSync<impl RendererFactory<Renderer = RecordingRenderer>> {
        ChartSync::new(RecordingRenderer::default)
    }

    fn table() -> DataTable {
        DataTable::new(vec![
            Row::new("ALICE", 2000, 10),
            Row::new("ALICE", 2001, 12),
            Row::new("BOB", 2000, 5),
        ])
    }

    #[test]
    fn renderer_is_created_lazily() {
        let mut chart = sync();
        let mut colors = ColorPicker::seeded(1);
        assert!(!chart.has_renderer());

        assert!(chart.add("Zed", &table(), &mut colors).is_err());
        assert!(!chart.has_renderer());

        chart.add("Alice", &table(), &mut colors).unwrap();
        let renderer = chart.renderer().unwrap();
        assert_eq!(renderer.labels, vec!["Alice Frequency"]);
        assert_eq!(renderer.renders, 1);
    }

    #[test]
    fn remove_targets_label() {
        let mut chart = sync();
        let mut colors = ColorPicker::seeded(2);
        chart.add("Alice", &table(), &mut colors).unwrap();
        chart.add("Bob", &table(), &mut colors).unwrap();

        assert!(chart.remove("Alice"));
        assert!(!chart.remove("Alice"));
        assert_eq!(chart.renderer().unwrap().labels, vec!["Bob Frequency"]);
        assert_eq!(chart.series().len(), 1);
    }

    #[test]
    fn rebuild_drops_missing_and_keeps_colours() {
        let mut chart = sync();
        let mut colors = ColorPicker::seeded(3);
        let alice_color = chart.add("Alice", &table(), &mut colors).unwrap().color;
        chart.add("Bob", &table(), &mut colors).unwrap();

        let other = DataTable::new(vec![Row::new("ALICE", 1999, 40)]);
        let missing = chart.rebuild(&["Alice", "Bob"], &other, &mut colors);

        assert_eq!(missing, vec!["Bob".to_string()]);
        let renderer = chart.renderer().unwrap();
        assert_eq!(renderer.labels, vec!["Alice Frequency"]);
        assert_eq!(renderer.replaced, 1);
        assert_eq!(chart.series_for("Alice").unwrap().color, alice_color);
        assert!(chart.series_for("Bob").is_none());
    }

    #[test]
    fn rebuild_never_reuses_a_kept_colour_for_a_new_name() {
        let mut chart = sync();
        let bob_color = chart
            .add("Bob", &table(), &mut ColorPicker::seeded(7))
            .unwrap()
            .color;

        // Same seed: the first fresh draw is Bob's colour.
        let mut colors = ColorPicker::seeded(7);
        chart.rebuild(&["Alice", "Bob"], &table(), &mut colors);

        let alice = chart.series_for("Alice").unwrap().color;
        assert_eq!(chart.series_for("Bob").unwrap().color, bob_color);
        assert_ne!(alice, bob_color);
    }

    #[test]
    fn rebuild_without_renderer_and_no_series_stays_lazy() {
        let mut chart = sync();
        let mut colors = ColorPicker::seeded(4);
        let missing = chart.rebuild(&["Alice"], &DataTable::empty(), &mut colors);
        assert_eq!(missing, vec!["Alice".to_string()]);
        assert!(!chart.has_renderer());
    }
}
