//! Metric chart data shaping and Plotly figure JSON.
//!
//! Kept free of DOM access so it can be unit tested natively; the metrics
//! panel hands the JSON to `Plotly.newPlot`.

use std::collections::BTreeMap;

use expboard_core::models::MetricEntry;
use expboard_core::ChartKind;
use plotly::{
    common::{Font, Mode, Title},
    layout::{Axis, Margin},
    Bar, Layout, Plot, Scatter,
};

fn chronological(entries: &[MetricEntry]) -> Vec<&MetricEntry> {
    let mut sorted: Vec<&MetricEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.created_at);
    sorted
}

/// One `(steps, values)` series per metric name. A step is the position of the
/// report in time order, so series with gaps keep their alignment.
pub fn metric_series(entries: &[MetricEntry]) -> BTreeMap<String, (Vec<f64>, Vec<f64>)> {
    let mut series: BTreeMap<String, (Vec<f64>, Vec<f64>)> = BTreeMap::new();
    for (step, entry) in chronological(entries).into_iter().enumerate() {
        for (name, value) in &entry.values {
            let (x, y) = series.entry(name.clone()).or_default();
            x.push(step as f64);
            y.push(*value);
        }
    }
    series
}

/// Latest value of every metric. The experiment's own `last_metric` wins when
/// present; otherwise the history is folded in time order.
pub fn latest_values(
    entries: &[MetricEntry],
    last_metric: Option<&BTreeMap<String, f64>>,
) -> BTreeMap<String, f64> {
    if let Some(last) = last_metric.filter(|m| !m.is_empty()) {
        return last.clone();
    }
    let mut latest = BTreeMap::new();
    for entry in chronological(entries) {
        latest.extend(entry.values.iter().map(|(k, v)| (k.clone(), *v)));
    }
    latest
}

fn layout(x_title: &str) -> Layout {
    Layout::new()
        .margin(Margin::new().left(50).right(50).top(30).bottom(50))
        .show_legend(true)
        .paper_background_color("rgba(0,0,0,0)")
        .plot_background_color("rgba(0,0,0,0)")
        .font(Font::new().color("#94a3b8"))
        .x_axis(
            Axis::new()
                .title(Title::from(x_title))
                .show_grid(true)
                .grid_color("#1e293b"),
        )
        .y_axis(
            Axis::new()
                .title(Title::from("Value"))
                .show_grid(true)
                .grid_color("#1e293b"),
        )
}

/// Serialized Plotly figure for one chart kind.
pub fn chart_json(
    kind: ChartKind,
    entries: &[MetricEntry],
    last_metric: Option<&BTreeMap<String, f64>>,
) -> String {
    let mut plot = Plot::new();
    match kind {
        ChartKind::Line => {
            plot.set_layout(layout("Step"));
            for (name, (x, y)) in metric_series(entries) {
                let trace = Scatter::new(x, y)
                    .name(name.as_str())
                    .mode(Mode::LinesMarkers);
                plot.add_trace(trace);
            }
        }
        ChartKind::Bar => {
            plot.set_layout(layout("Metric"));
            let (names, values): (Vec<String>, Vec<f64>) =
                latest_values(entries, last_metric).into_iter().unzip();
            if !names.is_empty() {
                plot.add_trace(Bar::new(names, values).name("latest"));
            }
        }
    }
    plot.to_json()
}
