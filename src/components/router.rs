//! Application router component.
//!
//! Handles URL-based routing with hash history (`#/orders`).
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the current path is derived from `#/path`
//! - **Shell never re-renders on navigation**: only the page inside it is swapped
//! - **hashchange events**: Browser back/forward buttons work automatically
//! - **Unmatched paths**: render [`NotFound`] and log a warning

use leptos::prelude::*;
use meto_core::Dataset;
use meto_core::nav::{Route, path_from_hash};

use crate::components::Shell;
use crate::pages::{Analytics, Customers, Dashboard, NotFound, Orders, Products, Settings};
use crate::utils::{WindowListener, dom};

/// Current route path (`/`, `/orders`, ...), provided to every component
/// below the router.
#[derive(Clone, Copy)]
pub struct RouteContext(pub Memo<String>);

fn current_path() -> String {
    path_from_hash(&dom::get_hash())
}

/// Main application router.
///
/// Sets up hash-based routing with the following structure:
/// - `#/` → Dashboard
/// - `#/orders`, `#/products`, `#/customers` → list pages
/// - `#/analytics` → Analytics
/// - `#/settings` → Settings
#[component]
pub fn AppRouter(dataset: Dataset) -> impl IntoView {
    let path = RwSignal::new(current_path());

    match WindowListener::new("hashchange", move |_| path.set(current_path())) {
        Some(listener) => listener.scoped(),
        None => web_sys::console::warn_1(&"Hash routing unavailable".into()),
    }

    let route_path = Memo::new(move |_| path.get());
    provide_context(RouteContext(route_path));

    let route = Memo::new(move |_| route_path.with(|p| Route::from_path(p)));

    Effect::new(move || {
        route_path.with(|p| {
            if Route::from_path(p).is_none() {
                web_sys::console::warn_1(&format!("No route for `{}`", p).into());
            }
        });
    });

    let dataset = StoredValue::new(dataset);

    view! {
        <Shell>
            {move || match route.get() {
                Some(Route::Dashboard) => {
                    let data = dataset.with_value(|d| d.dashboard.clone());
                    view! { <Dashboard data=data /> }.into_any()
                }
                Some(Route::Orders) => {
                    let data = dataset.with_value(|d| d.orders.clone());
                    view! { <Orders data=data /> }.into_any()
                }
                Some(Route::Products) => {
                    let data = dataset.with_value(|d| d.products.clone());
                    view! { <Products data=data /> }.into_any()
                }
                Some(Route::Customers) => {
                    let data = dataset.with_value(|d| d.customers.clone());
                    view! { <Customers data=data /> }.into_any()
                }
                Some(Route::Analytics) => {
                    let (data, products) = dataset
                        .with_value(|d| (d.analytics.clone(), d.products.records.clone()));
                    view! { <Analytics data=data products=products /> }.into_any()
                }
                Some(Route::Settings) => view! { <Settings /> }.into_any(),
                None => view! { <NotFound path=route_path.get() /> }.into_any(),
            }}
        </Shell>
    }
}
