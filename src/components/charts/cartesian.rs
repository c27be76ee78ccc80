//! Area, line and bar charts over a labelled series.

use leptos::prelude::*;
use meto_core::chart::Cartesian;
use meto_core::format::group_thousands;
use meto_core::models::ChartPoint;

use crate::config::chart::{CARTESIAN, TICK_COUNT};

stylance::import_crate_style!(css, "src/components/charts/charts.module.css");

/// How a series is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesKind {
    /// Line with a translucent fill down to the baseline.
    Area,
    /// Line with a marker on every point.
    Line,
    /// One bar per point.
    Bar,
}

/// Formats y axis ticks and tooltips.
pub type ValueFormat = fn(f64) -> String;

/// Inline SVG chart with a zero-based y axis and dashed grid lines.
#[component]
pub fn CartesianChart(
    #[prop(into)] points: Signal<Vec<ChartPoint>>,
    kind: SeriesKind,
    /// Accessible chart description.
    label: &'static str,
    #[prop(default = "var(--accent)")] color: &'static str,
    #[prop(default = group_thousands as ValueFormat)] format: ValueFormat,
) -> impl IntoView {
    view! {
        <svg class=css::chart viewBox=CARTESIAN.view_box() role="img" aria-label=label>
            {move || points.with(|points| plot(points, kind, color, format))}
        </svg>
    }
}

fn plot(points: &[ChartPoint], kind: SeriesKind, color: &'static str, format: ValueFormat) -> AnyView {
    let area = CARTESIAN;
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    let projection = Cartesian::new(area, &values, TICK_COUNT);

    let grid = projection
        .y_ticks()
        .into_iter()
        .map(|tick| {
            view! {
                <line
                    class=css::gridLine
                    x1=area.left
                    x2=area.width - area.right
                    y1=tick.position
                    y2=tick.position
                />
                <text
                    class=css::axisLabel
                    x=area.left - 8.0
                    y=tick.position
                    text-anchor="end"
                    dominant-baseline="middle"
                >
                    {format(tick.value)}
                </text>
            }
        })
        .collect_view();

    let x_of = |i: usize| match kind {
        SeriesKind::Bar => projection.band_center(i),
        SeriesKind::Area | SeriesKind::Line => projection.point_x(i),
    };

    let x_labels = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            view! {
                <text class=css::axisLabel x=x_of(i) y=area.baseline() + 20.0 text-anchor="middle">
                    {point.label.clone()}
                </text>
            }
        })
        .collect_view();

    let tooltip = |point: &ChartPoint| format!("{}: {}", point.label, format(point.value));

    let series = match kind {
        SeriesKind::Bar => projection
            .bars(&values)
            .into_iter()
            .zip(points)
            .map(|(bar, point)| {
                view! {
                    <rect
                        class=css::bar
                        x=bar.x
                        y=bar.y
                        width=bar.width
                        height=bar.height
                        rx="4"
                        fill=color
                    >
                        <title>{tooltip(point)}</title>
                    </rect>
                }
            })
            .collect_view()
            .into_any(),
        SeriesKind::Area | SeriesKind::Line => {
            let fill = (kind == SeriesKind::Area).then(|| {
                view! { <path class=css::areaFill d=projection.area_path(&values) fill=color /> }
            });
            let radius = if kind == SeriesKind::Line { "4" } else { "3" };
            let markers = points
                .iter()
                .enumerate()
                .map(|(i, point)| {
                    view! {
                        <circle
                            class=css::marker
                            cx=projection.point_x(i)
                            cy=projection.y(point.value)
                            r=radius
                            fill=color
                        >
                            <title>{tooltip(point)}</title>
                        </circle>
                    }
                })
                .collect_view();

            view! {
                {fill}
                <path class=css::line d=projection.line_path(&values) stroke=color />
                {markers}
            }
            .into_any()
        }
    };

    view! {
        <g>{grid}</g>
        <g>{x_labels}</g>
        <g>{series}</g>
    }
    .into_any()
}
