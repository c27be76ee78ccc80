use leptos::prelude::*;
use leptos_icons::Icon;
use meto_core::data::ListData;
use meto_core::models::{Order, OrderStatus};
use meto_core::{KeyFilter, ListQuery};

use super::table::{DataTable, EmptyRow, ResultSummary};
use crate::components::icons as ic;
use crate::components::widgets::{self, KeySelect, PageHeader, PaymentStatus, SearchInput, StatGrid, Toolbar};

stylance::import_crate_style!(css, "src/pages/pages.module.css");

const HEADERS: &[&str] = &["Order ID", "Customer", "Product", "Amount", "Status", "Date", "Items"];

#[component]
pub fn Orders(data: ListData<Order>) -> impl IntoView {
    let ListData { stats, records } = data;
    let total = records.len();
    let records = StoredValue::new(records);

    let search = RwSignal::new(String::new());
    let status = RwSignal::new(KeyFilter::<OrderStatus>::All);

    let filtered = Memo::new(move |_| {
        let query = ListQuery::new(search.get(), status.get());
        records.with_value(|all| query.apply(all).into_iter().cloned().collect::<Vec<_>>())
    });
    let shown = Signal::derive(move || filtered.with(Vec::len));

    view! {
        <div class=css::page>
            <PageHeader title="Orders" subtitle="Manage and track your orders">
                <button type="button" class=widgets::css::primaryButton>
                    <Icon icon=ic::FILE_LIST />
                    "New Order"
                </button>
            </PageHeader>

            <StatGrid stats=stats />

            <Toolbar>
                <SearchInput value=search placeholder="Search orders..." />
                <KeySelect value=status all_label="All Status" />
            </Toolbar>

            <div class=css::tableCard>
                <DataTable headers=HEADERS>
                    <For
                        each=move || filtered.get()
                        key=|order| order.id.clone()
                        children=move |order: Order| {
                            view! {
                                <tr>
                                    <td class=css::strong>{order.id}</td>
                                    <td>{order.customer}</td>
                                    <td>{order.product}</td>
                                    <td class=css::strong>{order.amount}</td>
                                    <td><PaymentStatus status=order.status /></td>
                                    <td>{order.date}</td>
                                    <td>{order.items}</td>
                                </tr>
                            }
                        }
                    />
                    <Show when=move || shown.get() == 0>
                        <EmptyRow columns=HEADERS.len() message="No orders match your filters" />
                    </Show>
                </DataTable>
                <ResultSummary shown=shown total=total noun="orders" />
            </div>
        </div>
    }
}
