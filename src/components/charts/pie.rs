//! Pie and donut charts with a colour legend.

use leptos::prelude::*;
use meto_core::Choice;
use meto_core::chart::{PieGeometry, pie_slices};
use meto_core::format::percent;
use meto_core::models::CategoryShare;

use crate::config::chart::{PAD_ANGLE, PIE_SIZE};

stylance::import_crate_style!(css, "src/components/charts/charts.module.css");

/// Category shares as sectors. An inner radius of zero draws a full pie.
#[component]
pub fn PieChart(
    shares: Vec<CategoryShare>,
    /// (inner, outer) radius in chart units.
    #[prop(into)]
    radii: Signal<(f64, f64)>,
    label: &'static str,
) -> impl IntoView {
    let values: Vec<f64> = shares.iter().map(|s| s.value).collect();
    let legend = shares.clone();
    let center = PIE_SIZE / 2.0;

    let slices = move || {
        let (inner_radius, outer_radius) = radii.get();
        let geometry = PieGeometry {
            cx: center,
            cy: center,
            inner_radius,
            outer_radius,
            pad_angle: if inner_radius > 0.0 { PAD_ANGLE } else { 0.0 },
        };

        pie_slices(&values, geometry)
            .into_iter()
            .zip(&shares)
            .map(|(slice, share)| {
                view! {
                    <path class=css::slice d=slice.path fill=share.color.clone()>
                        <title>{format!("{}: {}", share.category.label(), percent(share.value))}</title>
                    </path>
                }
            })
            .collect_view()
    };

    view! {
        <div class=css::pie>
            <svg
                class=css::pieCanvas
                viewBox=format!("0 0 {} {}", PIE_SIZE, PIE_SIZE)
                role="img"
                aria-label=label
            >
                {slices}
            </svg>
            <Legend shares=legend />
        </div>
    }
}

#[component]
fn Legend(shares: Vec<CategoryShare>) -> impl IntoView {
    view! {
        <ul class=css::legend>
            {shares
                .into_iter()
                .map(|share| {
                    view! {
                        <li class=css::legendItem>
                            <span class=css::swatch style:background=share.color></span>
                            {format!("{} {}", share.category.label(), percent(share.value))}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
