//! Overview page: stat cards, revenue trend, category split and recent
//! transactions.

use leptos::prelude::*;
use leptos_use::use_media_query;
use meto_core::data::DashboardData;
use meto_core::format::currency_thousands;

use super::table::DataTable;
use crate::components::charts::{CartesianChart, PieChart, SeriesKind};
use crate::components::widgets::{PageHeader, PaymentStatus, StatGrid};
use crate::config::chart;

stylance::import_crate_style!(css, "src/pages/pages.module.css");

const TRANSACTION_HEADERS: &[&str] = &["Transaction ID", "Customer", "Amount", "Status", "Date"];

#[component]
pub fn Dashboard(data: DashboardData) -> impl IntoView {
    let DashboardData {
        stats,
        revenue,
        categories,
        transactions,
    } = data;

    let compact = use_media_query(chart::COMPACT_QUERY.to_string());
    let donut_radii = Signal::derive(move || {
        if compact.get() {
            chart::DONUT_RADII_COMPACT
        } else {
            chart::DONUT_RADII
        }
    });

    view! {
        <div class=css::page>
            <PageHeader title="Dashboard" subtitle="Welcome back, here's what's happening today" />

            <StatGrid stats=stats />

            <div class=css::chartGrid>
                <section class=css::panel>
                    <div class=css::panelHead>
                        <h2 class=css::panelTitle>"Revenue Overview"</h2>
                        <span class=css::panelNote>"Last 6 months"</span>
                    </div>
                    <CartesianChart
                        points=revenue
                        kind=SeriesKind::Area
                        label="Monthly revenue"
                        format=currency_thousands
                    />
                </section>

                <section class=css::panel>
                    <div class=css::panelHead>
                        <h2 class=css::panelTitle>"Sales by Category"</h2>
                    </div>
                    <PieChart shares=categories radii=donut_radii label="Sales by category" />
                </section>
            </div>

            <section class=css::panel>
                <div class=css::panelHead>
                    <h2 class=css::panelTitle>"Recent Transactions"</h2>
                </div>
                <DataTable headers=TRANSACTION_HEADERS>
                    {transactions
                        .into_iter()
                        .map(|tx| {
                            view! {
                                <tr>
                                    <td class=css::strong>{tx.id}</td>
                                    <td>{tx.customer}</td>
                                    <td class=css::strong>{tx.amount}</td>
                                    <td><PaymentStatus status=tx.status /></td>
                                    <td>{tx.date}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </DataTable>
            </section>
        </div>
    }
}
