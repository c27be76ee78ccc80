//! Table scaffolding shared by the dashboard and the list pages.

use leptos::prelude::*;
use leptos_icons::Icon;
use meto_core::format::result_summary;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/pages/pages.module.css");

/// Scrollable table with a fixed header row. Children are the body rows.
#[component]
pub fn DataTable(headers: &'static [&'static str], children: Children) -> impl IntoView {
    view! {
        <div class=css::tableScroll>
            <table class=css::table>
                <thead>
                    <tr>{headers.iter().map(|h| view! { <th scope="col">{*h}</th> }).collect_view()}</tr>
                </thead>
                <tbody>{children()}</tbody>
            </table>
        </div>
    }
}

/// Full-width row shown when a filter leaves nothing to list.
#[component]
pub fn EmptyRow(columns: usize, message: &'static str) -> impl IntoView {
    view! {
        <tr>
            <td class=css::empty colspan=columns.to_string()>{message}</td>
        </tr>
    }
}

/// "Showing n of m" line under a filtered table.
#[component]
pub fn ResultSummary(
    #[prop(into)] shown: Signal<usize>,
    total: usize,
    noun: &'static str,
) -> impl IntoView {
    view! {
        <p class=css::summary aria-live="polite">
            {move || result_summary(shown.get(), total, noun)}
        </p>
    }
}

/// View, edit, delete and overflow buttons at the end of a record row.
///
/// The buttons are placeholders: no record operations exist.
#[component]
pub fn RowActions(record: String) -> impl IntoView {
    let actions = [
        (ic::EYE, "View"),
        (ic::EDIT, "Edit"),
        (ic::DELETE, "Delete"),
        (ic::MORE, "More actions"),
    ];

    view! {
        <div class=css::rowActions>
            {actions
                .into_iter()
                .map(|(icon, action)| {
                    view! {
                        <button
                            type="button"
                            class=css::iconButton
                            title=action
                            aria-label=format!("{} {}", action, record)
                        >
                            <Icon icon=icon />
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
