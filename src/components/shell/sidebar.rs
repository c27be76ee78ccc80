//! Navigation sidebar.
//!
//! | Viewport | Appearance |
//! |----------|------------|
//! | Desktop, expanded | Logo, name and labelled links; collapse button |
//! | Desktop, collapsed | Logo mark and icons only |
//! | Mobile | Full width drawer, off-canvas until the menu button opens it |

use leptos::prelude::*;
use leptos_icons::Icon;
use meto_core::{LayoutState, NAV_ITEMS, NavItem};

use crate::components::icons as ic;
use crate::components::router::RouteContext;
use crate::config::{APP_MONOGRAM, APP_NAME};

stylance::import_crate_style!(css, "src/components/shell/shell.module.css");

/// The sidebar never mutates layout state itself: collapse requests go
/// through `on_collapse`, mobile menu requests through `on_mobile_change`.
#[component]
pub fn Sidebar(
    #[prop(into)] layout: Signal<LayoutState>,
    on_collapse: Callback<bool>,
    on_mobile_change: Callback<bool>,
) -> impl IntoView {
    let sidebar_class = move || {
        let state = layout.get();
        let mut class = css::sidebar.to_string();
        if state.is_collapsed && !state.is_mobile {
            class.push(' ');
            class.push_str(css::collapsed);
        }
        if state.sidebar_hidden() {
            class.push(' ');
            class.push_str(css::hidden);
        }
        class
    };

    // Labels are always shown in the mobile drawer.
    let show_labels = Signal::derive(move || {
        let state = layout.get();
        state.is_mobile || !state.is_collapsed
    });

    let on_navigate = Callback::new(move |_: ()| {
        if layout.with_untracked(|s| s.navigation_closes_menu()) {
            on_mobile_change.run(false);
        }
    });

    let collapse_title = move || {
        if layout.get().is_collapsed {
            "Expand sidebar"
        } else {
            "Collapse sidebar"
        }
    };

    view! {
        <aside class=sidebar_class>
            <div class=css::brand>
                <div class=css::logo>{APP_MONOGRAM}</div>
                <Show when=move || show_labels.get()>
                    <span class=css::brandName>{APP_NAME}</span>
                </Show>
            </div>

            <nav class=css::nav aria-label="Main">
                <ul class=css::navList>
                    {NAV_ITEMS
                        .iter()
                        .map(|item| view! { <NavLink item=*item show_label=show_labels on_navigate=on_navigate /> })
                        .collect_view()}
                </ul>
            </nav>

            <Show when=move || layout.get().shows_collapse_toggle()>
                <button
                    class=css::collapseButton
                    on:click=move |_| on_collapse.run(!layout.with_untracked(|s| s.is_collapsed))
                    title=collapse_title
                    aria-label=collapse_title
                >
                    {move || {
                        let icon = if layout.get().is_collapsed {
                            ic::CHEVRON_RIGHT
                        } else {
                            ic::CHEVRON_LEFT
                        };
                        view! { <Icon icon=icon /> }
                    }}
                </button>
            </Show>
        </aside>
    }
}

/// One navigation entry. Highlighting depends only on the current path.
#[component]
fn NavLink(item: NavItem, show_label: Signal<bool>, on_navigate: Callback<()>) -> impl IntoView {
    let route_ctx = use_context::<RouteContext>().expect("RouteContext must be provided");

    let is_active = Memo::new(move |_| route_ctx.0.with(|path| item.is_active(path)));

    let class = move || {
        if is_active.get() {
            format!("{} {}", css::link, css::active)
        } else {
            css::link.to_string()
        }
    };

    view! {
        <li>
            <a
                href=item.route.href()
                class=class
                title=item.label
                aria-current=move || is_active.get().then_some("page")
                on:click=move |_| on_navigate.run(())
            >
                <span class=css::linkIcon><Icon icon=ic::for_key(item.icon) /></span>
                <Show when=move || show_label.get()>
                    <span>{item.label}</span>
                </Show>
            </a>
        </li>
    }
}
