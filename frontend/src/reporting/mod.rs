//! Report data pipeline: records are reduced by [`aggregate`], reshaped by
//! [`adapter`], and drawn by `components::chart::Chart`.

pub mod adapter;
pub mod aggregate;

pub use adapter::{ChartDatum, ChartRow, SeriesSpec, DEFAULT_SERIES_KEY};
pub use aggregate::{CategoryCounts, DailyCounts};
pub use crate::domain::Category;
