//! Line chart drawn as inline SVG markup.

use crate::core::chart_sync::{ChartRenderer, RendererFactory};
use crate::core::config::ChartConfig;
use crate::core::series::ChartSeries;

const Y_TICKS: u64 = 4;
const MAX_X_TICKS: i32 = 8;
const POINT_RADIUS: f64 = 3.0;
const LEGEND_ROW: f64 = 18.0;

/// Renderer that keeps its own copy of the plotted series and rebuilds the
/// SVG document on every `render`.
#[derive(Debug, Clone, Default)]
pub struct SvgChart {
    config: ChartConfig,
    series: Vec<ChartSeries>,
    markup: String,
    renders: usize,
}

impl SvgChart {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Last rendered document; empty before the first `render`.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.label.as_str())
    }

    pub fn render_count(&self) -> usize {
        self.renders
    }
}

impl ChartRenderer for SvgChart {
    fn add_series(&mut self, series: ChartSeries) {
        self.series.push(series);
    }

    fn remove_series_by_label(&mut self, label: &str) -> bool {
        let before = self.series.len();
        self.series.retain(|s| s.label != label);
        before != self.series.len()
    }

    fn replace_all_series(&mut self, series: Vec<ChartSeries>) {
        self.series = series;
    }

    fn render(&mut self) {
        self.markup = render_svg(&self.config, &self.series);
        self.renders += 1;
    }
}

/// Builds [`SvgChart`]s sharing one chart size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgChartFactory {
    config: ChartConfig,
}

impl SvgChartFactory {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }
}

impl RendererFactory for SvgChartFactory {
    type Renderer = SvgChart;

    fn create(&mut self) -> SvgChart {
        tracing::debug!(
            width = self.config.width,
            height = self.config.height,
            "chart renderer created"
        );
        SvgChart::new(self.config.clone())
    }
}

#[derive(Debug, Clone, Copy)]
struct Scale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl Scale {
    fn map(&self, value: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            return self.range.0;
        }
        self.range.0 + (value - self.domain.0) / span * (self.range.1 - self.range.0)
    }
}

/// Year bounds across every series, widened to at least two years.
fn year_domain(series: &[ChartSeries]) -> (i32, i32) {
    let spans = series.iter().filter_map(ChartSeries::year_span);
    let (first, last) = spans.fold((i32::MAX, i32::MIN), |(lo, hi), (a, b)| {
        (lo.min(a), hi.max(b))
    });
    if first > last {
        return (2000, 2001);
    }
    if first == last {
        return (first, first + 1);
    }
    (first, last)
}

/// Smallest 1/2/5 × 10ⁿ not below `max`.
fn nice_ceiling(max: u32) -> u64 {
    let max = u64::from(max.max(1));
    let mut magnitude = 1u64;
    while magnitude * 10 <= max {
        magnitude *= 10;
    }
    [1, 2, 5, 10]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|candidate| *candidate >= max)
        .unwrap_or(magnitude * 10)
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

pub(crate) fn render_svg(config: &ChartConfig, series: &[ChartSeries]) -> String {
    let width = f64::from(config.width);
    let height = f64::from(config.height);
    let pad = f64::from(config.padding);

    let (first_year, last_year) = year_domain(series);
    let y_max = nice_ceiling(series.iter().filter_map(ChartSeries::peak).max().unwrap_or(0));

    let x = Scale {
        domain: (f64::from(first_year), f64::from(last_year)),
        range: (pad, width - pad),
    };
    let y = Scale {
        domain: (0.0, y_max as f64),
        range: (height - pad, pad),
    };

    let mut out = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' class='chart' viewBox='0 0 {w} {h}' \
         preserveAspectRatio='xMidYMid meet' role='img'>",
        w = config.width,
        h = config.height,
    );

    // Axes
    out.push_str(&format!(
        "<g class='chart__axes'><line x1='{pad}' y1='{bottom:.1}' x2='{right:.1}' y2='{bottom:.1}'/>\
         <line x1='{pad}' y1='{pad}' x2='{pad}' y2='{bottom:.1}'/></g>",
        bottom = height - pad,
        right = width - pad,
    ));

    out.push_str("<g class='chart__ticks chart__ticks--y'>");
    for step in 0..=Y_TICKS {
        let value = y_max * step / Y_TICKS;
        let ty = y.map(value as f64);
        out.push_str(&format!(
            "<line class='chart__grid' x1='{pad}' y1='{ty:.1}' x2='{right:.1}' y2='{ty:.1}'/>\
             <text x='{lx:.1}' y='{ty:.1}' text-anchor='end' dominant-baseline='middle'>{value}</text>",
            right = width - pad,
            lx = pad - 6.0,
        ));
    }
    out.push_str("</g>");

    let span = last_year - first_year;
    let stride = ((span + MAX_X_TICKS - 1) / MAX_X_TICKS).max(1);
    out.push_str("<g class='chart__ticks chart__ticks--x'>");
    let mut year = first_year;
    while year <= last_year {
        let tx = x.map(f64::from(year));
        out.push_str(&format!(
            "<text x='{tx:.1}' y='{ly:.1}' text-anchor='middle'>{year}</text>",
            ly = height - pad + 18.0,
        ));
        year += stride;
    }
    out.push_str("</g>");

    for line in series {
        let color = line.color.hex();
        let label = escape_xml(&line.label);
        let points: Vec<String> = line
            .points
            .iter()
            .map(|p| format!("{:.1},{:.1}", x.map(f64::from(p.x.year())), y.map(f64::from(p.y))))
            .collect();

        out.push_str(&format!(
            "<g class='chart__series' data-label='{label}'>\
             <polyline fill='none' stroke='{color}' stroke-width='2' points='{}'/>",
            points.join(" ")
        ));
        for point in &line.points {
            out.push_str(&format!(
                "<circle cx='{cx:.1}' cy='{cy:.1}' r='{POINT_RADIUS}' fill='{color}'>\
                 <title>Year: {year}, Frequency: {freq}</title></circle>",
                cx = x.map(f64::from(point.x.year())),
                cy = y.map(f64::from(point.y)),
                year = point.x.year(),
                freq = point.y,
            ));
        }
        out.push_str("</g>");
    }

    if !series.is_empty() {
        out.push_str("<g class='chart__legend'>");
        for (idx, line) in series.iter().enumerate() {
            let top = pad + idx as f64 * LEGEND_ROW;
            out.push_str(&format!(
                "<rect x='{sx:.1}' y='{top:.1}' width='12' height='12' fill='{color}'/>\
                 <text x='{tx:.1}' y='{ty:.1}' dominant-baseline='middle'>{label}</text>",
                sx = pad + 12.0,
                tx = pad + 30.0,
                ty = top + 6.0,
                color = line.color.hex(),
                label = escape_xml(&line.label),
            ));
        }
        out.push_str("</g>");
    }

    out.push_str("</svg>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::series::{build_series, series_label, Rgb};
    use crate::core::table::Row;

    fn alice() -> ChartSeries {
        build_series(
            &[Row::new("ALICE", 2000, 10), Row::new("ALICE", 2001, 12)],
            series_label("Alice"),
            Rgb::new(255, 0, 0),
        )
    }

    #[test]
    fn render_draws_one_polyline_per_series() {
        let mut chart = SvgChartFactory::default().create();
        chart.add_series(alice());
        chart.render();

        let markup = chart.markup();
        assert!(markup.starts_with("<svg"));
        assert!(markup.contains("viewBox='0 0 960 360'"));
        assert_eq!(markup.matches("<polyline").count(), 1);
        assert!(markup.contains("stroke='#ff0000'"));
        assert!(markup.contains("<title>Year: 2001, Frequency: 12</title>"));
        assert!(markup.contains(">Alice Frequency</text>"));
    }

    #[test]
    fn remove_by_label_reports_presence() {
        let mut chart = SvgChart::new(ChartConfig::default());
        chart.add_series(alice());
        assert!(chart.remove_series_by_label("Alice Frequency"));
        assert!(!chart.remove_series_by_label("Alice Frequency"));
        chart.render();
        assert!(!chart.markup().contains("<polyline"));
        assert_eq!(chart.render_count(), 1);
    }

    #[test]
    fn labels_are_escaped() {
        let mut series = alice();
        series.label = "<b>&".into();
        let markup = render_svg(&ChartConfig::default(), &[series]);
        assert!(markup.contains("&lt;b&gt;&amp;"));
        assert!(!markup.contains("<b>"));
    }

    #[test]
    fn y_axis_rounds_up_to_a_readable_ceiling() {
        assert_eq!(nice_ceiling(0), 1);
        assert_eq!(nice_ceiling(12), 20);
        assert_eq!(nice_ceiling(450), 500);
        assert_eq!(nice_ceiling(1000), 1000);
        assert_eq!(nice_ceiling(1001), 2000);
    }

    #[test]
    fn single_year_domain_is_widened() {
        let series = build_series(&[Row::new("A", 1990, 3)], "A Frequency", Rgb::new(0, 0, 0));
        assert_eq!(year_domain(&[series]), (1990, 1991));
        assert_eq!(year_domain(&[]), (2000, 2001));
    }
}
