//! SVG chart renderer.
//!
//! One component draws bar, line and pie charts from adapted rows. Geometry
//! is computed by the free functions below so it can be checked without a
//! DOM; the component only turns shapes into markup.

use std::f64::consts::PI;
use std::str::FromStr;

use leptos::*;

use crate::domain::UnknownVariant;
use crate::reporting::{ChartRow, SeriesSpec, DEFAULT_SERIES_KEY};

/// Fallback colours, cycled when fewer explicit colours than series are given.
pub const DEFAULT_PALETTE: [&str; 6] = [
    "#FF9800", // Orange
    "#4CAF50", // Green
    "#2196F3", // Blue
    "#9C27B0", // Purple
    "#F44336", // Red
    "#00BCD4", // Cyan
];

const MARGIN_LEFT: f64 = 36.0;
const MARGIN_RIGHT: f64 = 12.0;
const MARGIN_TOP: f64 = 12.0;
const MARGIN_BOTTOM: f64 = 28.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Pie => "pie",
        }
    }
}

impl FromStr for ChartKind {
    type Err = UnknownVariant;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "bar" => Ok(Self::Bar),
            "line" => Ok(Self::Line),
            "pie" => Ok(Self::Pie),
            _ => Err(UnknownVariant {
                kind: "chart kind",
                value: raw.to_string(),
            }),
        }
    }
}

/// A requested chart kind. Unknown names are kept so the renderer can say
/// what it was asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartSelection {
    Kind(ChartKind),
    Unsupported(String),
}

impl From<ChartKind> for ChartSelection {
    fn from(kind: ChartKind) -> Self {
        Self::Kind(kind)
    }
}

impl From<&str> for ChartSelection {
    fn from(raw: &str) -> Self {
        match raw.parse::<ChartKind>() {
            Ok(kind) => Self::Kind(kind),
            Err(err) => Self::Unsupported(err.value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartRenderState {
    Loading,
    Empty,
    Populated,
}

/// Empty when no drawn series has a positive value in any row. Values under
/// keys that are not drawn do not count.
pub fn chart_render_state(loading: bool, rows: &[ChartRow], drawn: &[SeriesSpec]) -> ChartRenderState {
    if loading {
        ChartRenderState::Loading
    } else if rows
        .iter()
        .all(|row| drawn.iter().all(|s| row.value(&s.key) <= 0.0))
    {
        ChartRenderState::Empty
    } else {
        ChartRenderState::Populated
    }
}

pub fn resolve_colors(explicit: &[String], count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            explicit
                .get(i)
                .cloned()
                .unwrap_or_else(|| DEFAULT_PALETTE[i % DEFAULT_PALETTE.len()].to_string())
        })
        .collect()
}

/// The caller's series, or one implicit series reading [`DEFAULT_SERIES_KEY`].
pub fn effective_series(series: &[SeriesSpec]) -> Vec<SeriesSpec> {
    if series.is_empty() {
        vec![SeriesSpec::new(DEFAULT_SERIES_KEY, "Value")]
    } else {
        series.to_vec()
    }
}

/// The series a chart of `kind` actually draws. Pies only read the first.
pub fn drawn_series(kind: ChartKind, series: &[SeriesSpec]) -> Vec<SeriesSpec> {
    let mut drawn = effective_series(series);
    if kind == ChartKind::Pie {
        drawn.truncate(1);
    }
    drawn
}

/// A series' own colour wins; otherwise the palette slot for its position.
pub fn series_colors(series: &[SeriesSpec], palette: &[String]) -> Vec<String> {
    let fallback = resolve_colors(palette, series.len());
    series
        .iter()
        .zip(fallback)
        .map(|(spec, fallback)| spec.color.clone().unwrap_or(fallback))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            width: (f64::from(width) - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
            height: (f64::from(height) - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn y_for(&self, value: f64, max: f64) -> f64 {
        self.bottom() - (value.max(0.0) / max) * self.height
    }
}

pub fn scale_max(rows: &[ChartRow], series: &[SeriesSpec]) -> f64 {
    rows.iter()
        .flat_map(|row| series.iter().map(move |s| row.value(&s.key)))
        .fold(0.0_f64, f64::max)
        .max(1.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
}

/// Grouped bars: one group per row, one bar per series inside the group.
pub fn bar_rects(
    rows: &[ChartRow],
    series: &[SeriesSpec],
    colors: &[String],
    area: PlotArea,
) -> Vec<BarRect> {
    if rows.is_empty() || series.is_empty() {
        return Vec::new();
    }
    let max = scale_max(rows, series);
    let group_width = area.width / rows.len() as f64;
    let bar_width = group_width * 0.8 / series.len() as f64;
    let mut rects = Vec::with_capacity(rows.len() * series.len());
    for (i, row) in rows.iter().enumerate() {
        for (j, spec) in series.iter().enumerate() {
            let y = area.y_for(row.value(&spec.key), max);
            rects.push(BarRect {
                x: area.left + i as f64 * group_width + group_width * 0.1 + j as f64 * bar_width,
                y,
                width: bar_width,
                height: area.bottom() - y,
                color: colors.get(j).cloned().unwrap_or_default(),
            });
        }
    }
    rects
}

pub fn line_points(rows: &[ChartRow], series_key: &str, area: PlotArea, max: f64) -> Vec<(f64, f64)> {
    let step = if rows.len() > 1 {
        area.width / (rows.len() - 1) as f64
    } else {
        0.0
    };
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let x = if rows.len() > 1 {
                area.left + i as f64 * step
            } else {
                area.left + area.width / 2.0
            };
            (x, area.y_for(row.value(series_key), max))
        })
        .collect()
}

pub fn polyline_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, PartialEq)]
pub enum PieShape {
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        color: String,
    },
    Slice {
        path: String,
        color: String,
    },
}

/// Slices start at twelve o'clock and run clockwise. Zero and negative
/// values get no slice; a single non-zero value becomes a full circle since
/// an SVG arc cannot close on itself.
pub fn pie_shapes(values: &[f64], colors: &[String], cx: f64, cy: f64, r: f64) -> Vec<PieShape> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let visible: Vec<(usize, f64)> = values
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, v)| *v > 0.0)
        .collect();
    let color_at = |i: usize| colors.get(i).cloned().unwrap_or_default();

    if let [(index, _)] = visible.as_slice() {
        return vec![PieShape::Circle {
            cx,
            cy,
            r,
            color: color_at(*index),
        }];
    }

    let mut angle = -PI / 2.0;
    visible
        .into_iter()
        .map(|(index, value)| {
            let sweep = value / total * 2.0 * PI;
            let (x1, y1) = (cx + r * angle.cos(), cy + r * angle.sin());
            angle += sweep;
            let (x2, y2) = (cx + r * angle.cos(), cy + r * angle.sin());
            let large_arc = if sweep > PI { 1 } else { 0 };
            PieShape::Slice {
                path: format!(
                    "M {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} Z",
                    cx, cy, x1, y1, r, r, large_arc, x2, y2
                ),
                color: color_at(index),
            }
        })
        .collect()
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

#[component]
pub fn Chart(
    #[prop(into)] kind: ChartSelection,
    #[prop(into)] data: MaybeSignal<Vec<ChartRow>>,
    #[prop(optional)] series: Vec<SeriesSpec>,
    #[prop(optional)] colors: Vec<String>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(default = 480)] width: u32,
    #[prop(default = 240)] height: u32,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] empty_message: Option<String>,
) -> impl IntoView {
    let empty_message = empty_message.unwrap_or_else(|| "No data to display".to_string());

    let body = move || {
        let rows = data.get();
        let drawn = match &kind {
            ChartSelection::Kind(k) => drawn_series(*k, &series),
            ChartSelection::Unsupported(_) => effective_series(&series),
        };
        match chart_render_state(loading.get(), &rows, &drawn) {
            ChartRenderState::Loading => view! {
                <div class="flex flex-col items-center justify-center py-8 text-sm text-fg-muted chart-loading">
                    <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg mb-2"></div>
                    "Loading chart..."
                </div>
            }
            .into_view(),
            state => match &kind {
                ChartSelection::Unsupported(raw) => view! {
                    <p class="py-8 text-center text-sm text-status-warning-text chart-unsupported">
                        {format!("Unsupported chart type: {}", raw)}
                    </p>
                }
                .into_view(),
                ChartSelection::Kind(_) if state == ChartRenderState::Empty => view! {
                    <p class="py-8 text-center text-sm text-fg-muted chart-empty">{empty_message.clone()}</p>
                }
                .into_view(),
                ChartSelection::Kind(ChartKind::Bar) => {
                    render_bar(&rows, &series, &colors, width, height)
                }
                ChartSelection::Kind(ChartKind::Line) => {
                    render_line(&rows, &series, &colors, width, height)
                }
                ChartSelection::Kind(ChartKind::Pie) => render_pie(&rows, &series, &colors, width, height),
            },
        }
    };

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4">
            {title.map(|t| view! { <h3 class="text-sm font-semibold text-fg mb-2">{t}</h3> })}
            {body}
        </div>
    }
}

fn axis_labels(rows: &[ChartRow], area: PlotArea, centered: bool) -> View {
    let slot = if centered {
        area.width / rows.len().max(1) as f64
    } else if rows.len() > 1 {
        area.width / (rows.len() - 1) as f64
    } else {
        0.0
    };
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let x = if centered {
                area.left + slot * (i as f64 + 0.5)
            } else if rows.len() > 1 {
                area.left + slot * i as f64
            } else {
                area.left + area.width / 2.0
            };
            view! {
                <text x=format!("{:.1}", x) y=format!("{:.1}", area.bottom() + 16.0) text-anchor="middle" font-size="10" fill="currentColor">
                    {row.key.clone()}
                </text>
            }
        })
        .collect_view()
}

fn axes(area: PlotArea, max: f64) -> View {
    view! {
        <line
            x1=format!("{:.1}", area.left)
            y1=format!("{:.1}", area.bottom())
            x2=format!("{:.1}", area.left + area.width)
            y2=format!("{:.1}", area.bottom())
            stroke="#9CA3AF"
        />
        <text x="4" y=format!("{:.1}", area.top + 8.0) font-size="10" fill="currentColor">
            {format_value(max)}
        </text>
        <text x="4" y=format!("{:.1}", area.bottom()) font-size="10" fill="currentColor">"0"</text>
    }
    .into_view()
}

fn legend(entries: Vec<(String, String)>) -> View {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-2">
            {entries
                .into_iter()
                .map(|(label, color)| view! {
                    <div class="flex items-center space-x-2">
                        <span class="inline-block w-3 h-3 rounded-full" style=format!("background-color: {}", color)></span>
                        <span class="text-xs text-fg-muted">{label}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
    .into_view()
}

fn render_bar(rows: &[ChartRow], series: &[SeriesSpec], palette: &[String], width: u32, height: u32) -> View {
    let series = effective_series(series);
    let colors = series_colors(&series, palette);
    let area = PlotArea::new(width, height);
    let max = scale_max(rows, &series);
    let rects = bar_rects(rows, &series, &colors, area);
    let entries = series.iter().map(|s| s.label.clone()).zip(colors).collect();

    view! {
        <svg viewBox=format!("0 0 {} {}", width, height) class="w-full h-auto" role="img">
            {axes(area, max)}
            {rects
                .into_iter()
                .map(|r| view! {
                    <rect
                        x=format!("{:.1}", r.x)
                        y=format!("{:.1}", r.y)
                        width=format!("{:.1}", r.width)
                        height=format!("{:.1}", r.height)
                        fill=r.color
                    />
                })
                .collect_view()}
            {axis_labels(rows, area, true)}
        </svg>
        {legend(entries)}
    }
    .into_view()
}

fn render_line(rows: &[ChartRow], series: &[SeriesSpec], palette: &[String], width: u32, height: u32) -> View {
    let series = effective_series(series);
    let colors = series_colors(&series, palette);
    let area = PlotArea::new(width, height);
    let max = scale_max(rows, &series);
    let lines: Vec<(Vec<(f64, f64)>, String)> = series
        .iter()
        .zip(colors.iter())
        .map(|(spec, color)| (line_points(rows, &spec.key, area, max), color.clone()))
        .collect();
    let entries = series.iter().map(|s| s.label.clone()).zip(colors).collect();

    view! {
        <svg viewBox=format!("0 0 {} {}", width, height) class="w-full h-auto" role="img">
            {axes(area, max)}
            {lines
                .into_iter()
                .map(|(points, color)| {
                    let markers = points
                        .iter()
                        .map(|(x, y)| view! {
                            <circle cx=format!("{:.1}", x) cy=format!("{:.1}", y) r="3" fill=color.clone() />
                        })
                        .collect_view();
                    view! {
                        <polyline points=polyline_attr(&points) fill="none" stroke=color.clone() stroke-width="2" />
                        {markers}
                    }
                })
                .collect_view()}
            {axis_labels(rows, area, false)}
        </svg>
        {legend(entries)}
    }
    .into_view()
}

fn render_pie(rows: &[ChartRow], series: &[SeriesSpec], palette: &[String], width: u32, height: u32) -> View {
    let key = series
        .first()
        .map(|s| s.key.clone())
        .unwrap_or_else(|| DEFAULT_SERIES_KEY.to_string());
    let values: Vec<f64> = rows.iter().map(|row| row.value(&key)).collect();
    let colors = resolve_colors(palette, rows.len());
    let (cx, cy) = (f64::from(width) / 2.0, f64::from(height) / 2.0);
    let r = (cx.min(cy) - 8.0).max(1.0);
    let shapes = pie_shapes(&values, &colors, cx, cy, r);
    let entries = rows
        .iter()
        .zip(values.iter())
        .map(|(row, v)| format!("{} ({})", row.key, format_value(*v)))
        .zip(colors)
        .collect();

    view! {
        <svg viewBox=format!("0 0 {} {}", width, height) class="w-full h-auto" role="img">
            {shapes
                .into_iter()
                .map(|shape| match shape {
                    PieShape::Circle { cx, cy, r, color } => view! {
                        <circle cx=format!("{:.1}", cx) cy=format!("{:.1}", cy) r=format!("{:.1}", r) fill=color />
                    }
                    .into_view(),
                    PieShape::Slice { path, color } => view! {
                        <path d=path fill=color stroke="#FFFFFF" stroke-width="1" />
                    }
                    .into_view(),
                })
                .collect_view()}
        </svg>
        {legend(entries)}
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(key: &str, value: f64) -> ChartRow {
        ChartRow {
            key: key.into(),
            values: vec![(DEFAULT_SERIES_KEY.into(), value)],
        }
    }

    #[test]
    fn selection_parses_known_kinds_and_keeps_unknown() {
        assert_eq!(ChartSelection::from("Bar"), ChartSelection::Kind(ChartKind::Bar));
        assert_eq!(
            ChartSelection::from("radar"),
            ChartSelection::Unsupported("radar".into())
        );
        assert_eq!("pie".parse::<ChartKind>().unwrap().as_str(), "pie");
    }

    #[test]
    fn render_state_prefers_loading() {
        let rows = vec![row("a", 1.0)];
        let drawn = effective_series(&[]);
        assert_eq!(chart_render_state(true, &rows, &drawn), ChartRenderState::Loading);
        assert_eq!(chart_render_state(false, &[], &drawn), ChartRenderState::Empty);
        assert_eq!(chart_render_state(false, &[row("a", 0.0)], &drawn), ChartRenderState::Empty);
        assert_eq!(chart_render_state(false, &rows, &drawn), ChartRenderState::Populated);
    }

    #[test]
    fn render_state_ignores_values_outside_drawn_series() {
        let rows = vec![ChartRow {
            key: "2024-05-01".into(),
            values: vec![("present".into(), 0.0), ("late".into(), 3.0)],
        }];
        let present_only = vec![SeriesSpec::new("present", "Present")];
        assert_eq!(chart_render_state(false, &rows, &present_only), ChartRenderState::Empty);
        let both = vec![
            SeriesSpec::new("present", "Present"),
            SeriesSpec::new("late", "Late"),
        ];
        assert_eq!(chart_render_state(false, &rows, &both), ChartRenderState::Populated);
    }

    #[test]
    fn pie_draws_only_the_first_series() {
        let series = vec![SeriesSpec::new("a", "A"), SeriesSpec::new("b", "B")];
        let drawn = drawn_series(ChartKind::Pie, &series);
        assert_eq!(drawn.len(), 1);
        assert_eq!(drawn[0].key, "a");
        assert_eq!(drawn_series(ChartKind::Bar, &series).len(), 2);
    }

    #[test]
    fn colors_cycle_default_palette_after_explicit_ones() {
        let colors = resolve_colors(&["#000000".to_string()], 8);
        assert_eq!(colors[0], "#000000");
        assert_eq!(colors[1], DEFAULT_PALETTE[1]);
        assert_eq!(colors[6], DEFAULT_PALETTE[0]);
        assert_eq!(colors[7], DEFAULT_PALETTE[1]);
    }

    #[test]
    fn series_color_overrides_palette() {
        let series = vec![
            SeriesSpec::new("a", "A").with_color("#111111"),
            SeriesSpec::new("b", "B"),
        ];
        assert_eq!(
            series_colors(&series, &[]),
            vec!["#111111".to_string(), DEFAULT_PALETTE[1].to_string()]
        );
        assert_eq!(effective_series(&[])[0].key, DEFAULT_SERIES_KEY);
    }

    #[test]
    fn bars_scale_to_largest_value() {
        let area = PlotArea::new(200, 140);
        let series = effective_series(&[]);
        let rects = bar_rects(
            &[row("a", 2.0), row("b", 4.0)],
            &series,
            &resolve_colors(&[], 1),
            area,
        );
        assert_eq!(rects.len(), 2);
        assert!((rects[1].height - area.height).abs() < 1e-9);
        assert!((rects[0].height - area.height / 2.0).abs() < 1e-9);
        assert!((rects[1].y - area.top).abs() < 1e-9);
    }

    #[test]
    fn single_point_line_is_centered() {
        let area = PlotArea::new(100, 100);
        let points = line_points(&[row("a", 1.0)], DEFAULT_SERIES_KEY, area, 1.0);
        assert_eq!(points.len(), 1);
        assert!((points[0].0 - (area.left + area.width / 2.0)).abs() < 1e-9);
        assert_eq!(polyline_attr(&[(1.0, 2.0), (3.5, 4.24)]), "1.0,2.0 3.5,4.2");
    }

    #[test]
    fn pie_uses_circle_for_single_slice_and_large_arc_flag() {
        let colors = resolve_colors(&[], 3);
        let single = pie_shapes(&[0.0, 5.0, 0.0], &colors, 50.0, 50.0, 40.0);
        assert!(matches!(&single[..], [PieShape::Circle { color, .. }] if color == DEFAULT_PALETTE[1]));

        let shapes = pie_shapes(&[3.0, 1.0], &colors, 50.0, 50.0, 40.0);
        assert_eq!(shapes.len(), 2);
        match &shapes[0] {
            PieShape::Slice { path, .. } => assert!(path.contains(" 0 1 1 ")),
            other => panic!("expected slice, got {:?}", other),
        }
        assert!(pie_shapes(&[0.0, -1.0], &colors, 50.0, 50.0, 40.0).is_empty());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn rows() -> Vec<ChartRow> {
        vec![
            ChartRow::from(crate::reporting::ChartDatum {
                name: "Present".into(),
                value: 2.0,
            }),
            ChartRow::from(crate::reporting::ChartDatum {
                name: "Absent".into(),
                value: 1.0,
            }),
        ]
    }

    #[test]
    fn loading_never_renders_chart_markup() {
        let html = render_to_string(move || {
            view! { <Chart kind=ChartKind::Bar data=rows() loading=true /> }
        });
        assert!(html.contains("Loading chart..."));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn empty_data_renders_message() {
        let html = render_to_string(move || {
            view! { <Chart kind=ChartKind::Line data={Vec::<ChartRow>::new()} empty_message="Nothing this month" /> }
        });
        assert!(html.contains("Nothing this month"));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn unsupported_kind_renders_fallback_text() {
        let html = render_to_string(move || view! { <Chart kind="radar" data=rows() /> });
        assert!(html.contains("Unsupported chart type: radar"));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn populated_kinds_render_their_shapes() {
        let bar = render_to_string(move || view! { <Chart kind="bar" data=rows() title="Tasks" /> });
        assert!(bar.contains("<rect"));
        assert!(bar.contains("Tasks"));

        let line = render_to_string(move || view! { <Chart kind="line" data=rows() /> });
        assert!(line.contains("<polyline"));

        let pie = render_to_string(move || view! { <Chart kind="pie" data=rows() /> });
        assert!(pie.contains("<path"));
        assert!(pie.contains("Present (2)"));
    }
}
