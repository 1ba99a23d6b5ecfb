mod svg;

pub use svg::{SvgChart, SvgChartFactory};
