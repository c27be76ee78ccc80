//! Analytics page.
//!
//! The time-range select drives the revenue chart and the exported report;
//! the other panels show the full dataset.

use leptos::prelude::*;
use leptos_icons::Icon;
use meto_core::analytics::{AnalyticsReport, TOP_PRODUCTS_LIMIT, TimeRange, top_products};
use meto_core::data::AnalyticsData;
use meto_core::format::{group_thousands, percent};
use meto_core::models::Product;
use meto_core::Choice;

use crate::components::charts::{CartesianChart, PieChart, SeriesKind};
use crate::components::icons as ic;
use crate::components::widgets::{self, PageHeader, StatGrid};
use crate::config::{REPORT_FILE_PREFIX, REPORT_MIME, chart};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/pages/pages.module.css");

#[component]
pub fn Analytics(data: AnalyticsData, products: Vec<Product>) -> impl IntoView {
    let range = RwSignal::new(TimeRange::default());
    let top = top_products(&products, TOP_PRODUCTS_LIMIT);

    let stats = data.stats.clone();
    let sales = data.sales.clone();
    let activity = data.activity.clone();
    let data = StoredValue::new(data);
    let products = StoredValue::new(products);

    let revenue = Signal::derive(move || {
        let range = range.get();
        data.with_value(|d| range.window(&d.revenue).to_vec())
    });

    let export = move |_: leptos::ev::MouseEvent| {
        let report = data.with_value(|d| {
            products.with_value(|p| AnalyticsReport::build(d, p, range.get_untracked()))
        });
        if let Err(e) = export_report(&report) {
            web_sys::console::error_1(&format!("Report export failed: {}", e).into());
        }
    };

    view! {
        <div class=css::page>
            <PageHeader title="Analytics" subtitle="Track your business performance">
                <button type="button" class=widgets::css::primaryButton on:click=export>
                    <Icon icon=ic::DOWNLOAD />
                    "Export Report"
                </button>
                <button type="button" class=widgets::css::secondaryButton>
                    <Icon icon=ic::FILTER />
                    "Filter"
                </button>
            </PageHeader>

            <StatGrid stats=stats />

            <div class=css::chartGrid>
                <section class=format!("{} {}", css::panel, css::wide)>
                    <PanelHead title="Revenue Overview" note="Monthly revenue analysis">
                        <RangeSelect value=range />
                    </PanelHead>
                    <CartesianChart
                        points=revenue
                        kind=SeriesKind::Line
                        label="Monthly revenue"
                    />
                </section>

                <section class=css::panel>
                    <PanelHead title="Sales Distribution" note="Category-wise sales analysis" />
                    <PieChart
                        shares=sales
                        radii=(0.0, chart::PIE_RADIUS)
                        label="Sales distribution by category"
                    />
                </section>

                <section class=css::panel>
                    <PanelHead title="User Activity" note="Daily active users" />
                    <CartesianChart
                        points=activity
                        kind=SeriesKind::Bar
                        label="Daily active users"
                        color="#10b981"
                    />
                </section>

                <section class=format!("{} {}", css::panel, css::wide)>
                    <PanelHead title="Top Products" note="Best performing products" />
                    <ol class=css::rankList>
                        {top
                            .into_iter()
                            .map(|product| {
                                let share = percent(product.sales_share);
                                view! {
                                    <li class=css::rankItem>
                                        <div class=css::identity>
                                            <div class=css::thumb aria-hidden="true">
                                                <Icon icon=ic::CART />
                                            </div>
                                            <div>
                                                <div class=css::strong>{product.name}</div>
                                                <div class=css::subText>{product.category.label()}</div>
                                            </div>
                                        </div>
                                        <div class=css::rankMeta>
                                            <div class=css::strong>{product.revenue}</div>
                                            <div class=css::subText>
                                                {format!(
                                                    "{} sales · {}",
                                                    group_thousands(f64::from(product.sales)),
                                                    share,
                                                )}
                                            </div>
                                            <div class=css::shareTrack>
                                                <div class=css::shareFill style:width=share></div>
                                            </div>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                </section>
            </div>
        </div>
    }
}

/// Serialize the report and hand it to the browser as a download.
fn export_report(report: &AnalyticsReport) -> Result<(), String> {
    let json = report.to_json().map_err(|e| e.to_string())?;
    let file_name = report.file_name(REPORT_FILE_PREFIX);

    dom::download_text(&file_name, REPORT_MIME, &json).map_err(|e| format!("{:?}", e))?;
    web_sys::console::log_1(&format!("Exported {}", file_name).into());
    Ok(())
}

#[component]
fn PanelHead(
    title: &'static str,
    note: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class=css::panelHead>
            <div>
                <h2 class=css::panelTitle>{title}</h2>
                <p class=css::panelNote>{note}</p>
            </div>
            {children.map(|children| children())}
        </div>
    }
}

/// Selection is set per option: the `<select>` gets its attributes before
/// its options exist, so a value set on it would be lost.
fn is_selected(current: TimeRange, option: TimeRange) -> bool {
    current == option
}

/// Time-range picker for the revenue chart.
#[component]
fn RangeSelect(value: RwSignal<TimeRange>) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        match event_target_value(&ev).parse::<TimeRange>() {
            Ok(range) => value.set(range),
            Err(err) => {
                web_sys::console::warn_1(&format!("Time range reset: {}", err).into());
                value.set(TimeRange::default());
            }
        }
    };

    view! {
        <div class=widgets::css::selectGroup>
            <Icon icon=ic::CALENDAR />
            <select class=widgets::css::select aria-label="Time range" on:change=on_change>
                {TimeRange::ALL
                    .iter()
                    .copied()
                    .map(|range| {
                        view! {
                            <option
                                value=range.value()
                                prop:selected=move || is_selected(value.get(), range)
                            >
                                {range.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range_is_the_only_selected_option() {
        let current = TimeRange::default();
        let selected: Vec<_> = TimeRange::ALL
            .iter()
            .copied()
            .filter(|option| is_selected(current, *option))
            .collect();

        assert_eq!(selected, vec![TimeRange::LastHalfYear]);
        // The browser's fallback (first option) would disagree with the chart.
        assert_ne!(TimeRange::ALL[0], current);
    }

    #[test]
    fn test_selection_follows_range_changes() {
        for current in TimeRange::ALL.iter().copied() {
            let count = TimeRange::ALL
                .iter()
                .filter(|option| is_selected(current, **option))
                .count();
            assert_eq!(count, 1, "{}", current.value());
        }
    }
}
