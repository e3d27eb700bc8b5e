use chrono::Datelike;

use super::aggregate::{CategoryCounts, DailyCounts};
use crate::domain::Category;

/// Series key used when a chart is given no explicit series.
pub const DEFAULT_SERIES_KEY: &str = "value";

/// One slice of a proportional chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDatum {
    pub name: String,
    pub value: f64,
}

/// One x-axis position of a bar or line chart: a date or category label
/// plus a value per series key.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub key: String,
    pub values: Vec<(String, f64)>,
}

impl ChartRow {
    pub fn value(&self, series_key: &str) -> f64 {
        self.values
            .iter()
            .find(|(key, _)| key == series_key)
            .map(|(_, v)| *v)
            .unwrap_or(0.0)
    }
}

impl From<ChartDatum> for ChartRow {
    fn from(datum: ChartDatum) -> Self {
        Self {
            key: datum.name,
            values: vec![(DEFAULT_SERIES_KEY.to_string(), datum.value)],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    pub key: String,
    pub label: String,
    pub color: Option<String>,
}

impl SeriesSpec {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Pie slices in category declaration order. Slice colours come from
/// [`category_colors`].
pub fn to_pie<C: Category>(counts: &CategoryCounts<C>) -> Vec<ChartDatum> {
    counts
        .iter()
        .map(|(category, n)| ChartDatum {
            name: category.label().to_string(),
            value: f64::from(n),
        })
        .collect()
}

pub fn pie_rows<C: Category>(counts: &CategoryCounts<C>) -> Vec<ChartRow> {
    to_pie(counts).into_iter().map(ChartRow::from).collect()
}

pub fn category_colors<C: Category>() -> Vec<String> {
    C::ALL.iter().map(|category| category.color().to_string()).collect()
}

/// Single-series bar rows, one per category.
pub fn to_rows<C: Category>(counts: &CategoryCounts<C>) -> Vec<ChartRow> {
    counts
        .iter()
        .map(|(category, n)| ChartRow {
            key: category.label().to_string(),
            values: vec![(DEFAULT_SERIES_KEY.to_string(), f64::from(n))],
        })
        .collect()
}

/// Multi-series rows keyed by date, one value per category keyed by
/// `Category::as_str`. Pair with [`series_for`]. Labels are `MM/DD` unless
/// the days span more than one calendar year, then `YYYY/MM/DD`.
pub fn daily_rows<C: Category>(days: &[DailyCounts<C>]) -> Vec<ChartRow> {
    let first_year = days.first().map(|day| day.date.year());
    let label_format = if days.iter().any(|day| Some(day.date.year()) != first_year) {
        "%Y/%m/%d"
    } else {
        "%m/%d"
    };
    days.iter()
        .map(|day| ChartRow {
            key: day.date.format(label_format).to_string(),
            values: day
                .counts
                .iter()
                .map(|(category, n)| (category.as_str().to_string(), f64::from(n)))
                .collect(),
        })
        .collect()
}

/// One series per category, in declaration order.
pub fn series_for<C: Category>() -> Vec<SeriesSpec> {
    C::ALL
        .iter()
        .map(|category| SeriesSpec::new(category.as_str(), category.label()).with_color(category.color()))
        .collect()
}

/// Rows for caller-ordered `(key, count)` pairs, with `label` resolving the
/// display name of each key.
pub fn keyed_rows<F>(counts: &[(String, u32)], label: F) -> Vec<ChartRow>
where
    F: Fn(&str) -> String,
{
    counts
        .iter()
        .map(|(key, n)| ChartRow {
            key: label(key),
            values: vec![(DEFAULT_SERIES_KEY.to_string(), f64::from(*n))],
        })
        .collect()
}
