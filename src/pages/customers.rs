use leptos::prelude::*;
use leptos_icons::Icon;
use meto_core::data::ListData;
use meto_core::models::{Customer, CustomerStatus};
use meto_core::{KeyFilter, ListQuery};

use super::table::{DataTable, EmptyRow, ResultSummary, RowActions};
use crate::components::icons as ic;
use crate::components::widgets::{self, Badge, KeySelect, PageHeader, SearchInput, StatGrid, Toolbar};

stylance::import_crate_style!(css, "src/pages/pages.module.css");

const HEADERS: &[&str] = &[
    "Customer",
    "Contact",
    "Location",
    "Orders",
    "Total Spent",
    "Status",
    "Last Order",
    "Actions",
];

#[component]
pub fn Customers(data: ListData<Customer>) -> impl IntoView {
    let ListData { stats, records } = data;
    let total = records.len();
    let records = StoredValue::new(records);

    let search = RwSignal::new(String::new());
    let status = RwSignal::new(KeyFilter::<CustomerStatus>::All);

    let filtered = Memo::new(move |_| {
        let query = ListQuery::new(search.get(), status.get());
        records.with_value(|all| query.apply(all).into_iter().cloned().collect::<Vec<_>>())
    });
    let shown = Signal::derive(move || filtered.with(Vec::len));

    view! {
        <div class=css::page>
            <PageHeader title="Customers" subtitle="Manage your customer base">
                <button type="button" class=widgets::css::primaryButton>
                    <Icon icon=ic::USER_PLUS />
                    "Add Customer"
                </button>
            </PageHeader>

            <StatGrid stats=stats />

            <Toolbar>
                <SearchInput value=search placeholder="Search customers..." />
                <KeySelect value=status all_label="All Status" />
            </Toolbar>

            <div class=css::tableCard>
                <DataTable headers=HEADERS>
                    <For
                        each=move || filtered.get()
                        key=|customer| customer.id.clone()
                        children=move |customer: Customer| {
                            view! {
                                <tr>
                                    <td>
                                        <div class=css::identity>
                                            <div class=css::thumb aria-hidden="true">
                                                <Icon icon=ic::USER />
                                            </div>
                                            <div>
                                                <div class=css::strong>{customer.name.clone()}</div>
                                                <div class=css::subText>{customer.id}</div>
                                            </div>
                                        </div>
                                    </td>
                                    <td>
                                        <div class=css::iconLine>
                                            <Icon icon=ic::MAIL />
                                            {customer.email}
                                        </div>
                                        <div class=css::iconLine>
                                            <Icon icon=ic::PHONE />
                                            {customer.phone}
                                        </div>
                                    </td>
                                    <td>
                                        <div class=css::iconLine>
                                            <Icon icon=ic::LOCATION />
                                            {customer.location}
                                        </div>
                                    </td>
                                    <td>{customer.orders}</td>
                                    <td class=css::strong>{customer.total_spent}</td>
                                    <td><Badge status=customer.status /></td>
                                    <td>{customer.last_order}</td>
                                    <td><RowActions record=customer.name /></td>
                                </tr>
                            }
                        }
                    />
                    <Show when=move || shown.get() == 0>
                        <EmptyRow columns=HEADERS.len() message="No customers match your filters" />
                    </Show>
                </DataTable>
                <ResultSummary shown=shown total=total noun="customers" />
            </div>
        </div>
    }
}
