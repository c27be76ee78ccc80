//! Search and filter controls above the list tables.

use std::str::FromStr;

use leptos::prelude::*;
use leptos_icons::Icon;
use meto_core::{Choice, KeyFilter, ParseChoiceError};

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/widgets/widgets.module.css");

/// Container row for the list controls.
#[component]
pub fn Toolbar(children: Children) -> impl IntoView {
    view! { <div class=css::toolbar>{children()}</div> }
}

/// Free-text search box bound to `value`.
#[component]
pub fn SearchInput(value: RwSignal<String>, placeholder: &'static str) -> impl IntoView {
    view! {
        <div class=css::search>
            <span class=css::searchIcon aria-hidden="true"><Icon icon=ic::SEARCH /></span>
            <input
                type="search"
                class=css::searchInput
                placeholder=placeholder
                aria-label=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Entries of a [`KeySelect`]: "all" first, then every key in order.
fn filter_options<K: Choice>() -> Vec<KeyFilter<K>> {
    std::iter::once(KeyFilter::All)
        .chain(K::ALL.iter().copied().map(KeyFilter::Only))
        .collect()
}

/// Select over every value of `K`, plus an "all" entry.
///
/// Each option carries its own `selected` state; the `<select>` element is
/// built before its options, so a value set on it would not stick.
///
/// Unknown option values fall back to no filter.
#[component]
pub fn KeySelect<K>(value: RwSignal<KeyFilter<K>>, all_label: &'static str) -> impl IntoView
where
    K: Choice + FromStr<Err = ParseChoiceError> + Send + Sync,
{
    let on_change = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        match raw.parse::<KeyFilter<K>>() {
            Ok(filter) => value.set(filter),
            Err(err) => {
                web_sys::console::warn_1(&format!("Filter reset: {}", err).into());
                value.set(KeyFilter::All);
            }
        }
    };

    view! {
        <div class=css::selectGroup>
            <Icon icon=ic::FILTER />
            <select class=css::select aria-label=all_label on:change=on_change>
                {filter_options::<K>()
                    .into_iter()
                    .map(|option| {
                        let label = match option {
                            KeyFilter::All => all_label,
                            KeyFilter::Only(key) => key.label(),
                        };
                        view! {
                            <option
                                value=option.select_value()
                                prop:selected=move || value.get() == option
                            >
                                {label}
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
    use meto_core::models::{CustomerStatus, OrderStatus};

    use super::*;

    #[test]
    fn test_filter_options_start_with_all() {
        let options = filter_options::<OrderStatus>();
        assert_eq!(options[0], KeyFilter::All);
        assert_eq!(options.len(), OrderStatus::ALL.len() + 1);
        assert_eq!(options[0].select_value(), "all");
    }

    #[test]
    fn test_each_filter_selects_exactly_one_option() {
        let options = filter_options::<CustomerStatus>();
        for current in &options {
            let selected: Vec<_> = options.iter().filter(|o| *o == current).collect();
            assert_eq!(selected, vec![current]);
        }
    }
}
