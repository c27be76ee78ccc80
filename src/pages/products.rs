use leptos::prelude::*;
use leptos_icons::Icon;
use meto_core::data::ListData;
use meto_core::models::{Product, ProductCategory};
use meto_core::{Choice, KeyFilter, ListQuery};

use super::table::{DataTable, EmptyRow, ResultSummary, RowActions};
use crate::components::icons as ic;
use crate::components::widgets::{self, Badge, KeySelect, PageHeader, SearchInput, StatGrid, Toolbar};

stylance::import_crate_style!(css, "src/pages/pages.module.css");

const HEADERS: &[&str] = &[
    "Product", "Category", "Price", "Stock", "Status", "Sales", "Revenue", "Actions",
];

#[component]
pub fn Products(data: ListData<Product>) -> impl IntoView {
    let ListData { stats, records } = data;
    let total = records.len();
    let records = StoredValue::new(records);

    let search = RwSignal::new(String::new());
    let category = RwSignal::new(KeyFilter::<ProductCategory>::All);

    let filtered = Memo::new(move |_| {
        let query = ListQuery::new(search.get(), category.get());
        records.with_value(|all| query.apply(all).into_iter().cloned().collect::<Vec<_>>())
    });
    let shown = Signal::derive(move || filtered.with(Vec::len));

    view! {
        <div class=css::page>
            <PageHeader title="Products" subtitle="Manage your product inventory">
                <button type="button" class=widgets::css::primaryButton>
                    <Icon icon=ic::PLUS />
                    "Add Product"
                </button>
            </PageHeader>

            <StatGrid stats=stats />

            <Toolbar>
                <SearchInput value=search placeholder="Search products..." />
                <KeySelect value=category all_label="All Categories" />
            </Toolbar>

            <div class=css::tableCard>
                <DataTable headers=HEADERS>
                    <For
                        each=move || filtered.get()
                        key=|product| product.id.clone()
                        children=move |product: Product| {
                            view! {
                                <tr>
                                    <td>
                                        <div class=css::identity>
                                            <div class=css::thumb aria-hidden="true">
                                                <Icon icon=ic::STORE />
                                            </div>
                                            <div>
                                                <div class=css::strong>{product.name.clone()}</div>
                                                <div class=css::subText>{product.id}</div>
                                            </div>
                                        </div>
                                    </td>
                                    <td>{product.category.label()}</td>
                                    <td class=css::strong>{product.price}</td>
                                    <td>{product.stock}</td>
                                    <td><Badge status=product.status /></td>
                                    <td>{product.sales}</td>
                                    <td class=css::strong>{product.revenue}</td>
                                    <td><RowActions record=product.name /></td>
                                </tr>
                            }
                        }
                    />
                    <Show when=move || shown.get() == 0>
                        <EmptyRow columns=HEADERS.len() message="No products match your filters" />
                    </Show>
                </DataTable>
                <ResultSummary shown=shown total=total noun="products" />
            </div>
        </div>
    }
}
