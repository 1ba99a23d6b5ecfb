//! Converts matched rows into chart-ready time series.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use time::{Date, Month};

use super::table::Row;

/// Redraws attempted before accepting a colour that is already in use.
const MAX_COLOR_ATTEMPTS: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: Date,
    pub y: u32,
}

/// One plotted line.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub points: Vec<Point>,
    pub color: Rgb,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `(first_year, last_year)` covered by the series.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let first = self.points.first()?.x.year();
        let last = self.points.last()?.x.year();
        Some((first, last))
    }

    pub fn peak(&self) -> Option<u32> {
        self.points.iter().map(|p| p.y).max()
    }
}

/// Renderer-facing label for a selected name.
pub fn series_label(name: &str) -> String {
    format!("{name} Frequency")
}

/// Year mapped onto the time axis (January 1st). `None` when out of range.
pub fn year_to_date(year: i32) -> Option<Date> {
    Date::from_calendar_date(year, Month::January, 1).ok()
}

/// Builds a monotonic series from matched rows; rows without a valid date are
/// dropped.
pub fn build_series(rows: &[Row], label: impl Into<String>, color: Rgb) -> ChartSeries {
    let mut points: Vec<Point> = rows
        .iter()
        .filter_map(|row| {
            year_to_date(row.year()).map(|x| Point {
                x,
                y: row.frequency(),
            })
        })
        .collect();
    // Stable: equal years keep source order.
    points.sort_by_key(|p| p.x);

    ChartSeries {
        label: label.into(),
        points,
        color,
    }
}

/// Uniform random colours over the full RGB cube, avoiding colours in use.
#[derive(Debug, Clone)]
pub struct ColorPicker {
    rng: StdRng,
}

impl ColorPicker {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn pick(&mut self, in_use: &[Rgb]) -> Rgb {
        let mut candidate = self.draw();
        for _ in 1..MAX_COLOR_ATTEMPTS {
            if !in_use.contains(&candidate) {
                break;
            }
            candidate = self.draw();
        }
        candidate
    }

    fn draw(&mut self) -> Rgb {
        Rgb::new(self.rng.gen(), self.rng.gen(), self.rng.gen())
    }
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::new()
    }
}
