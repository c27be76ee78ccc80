//! Application chrome: sidebar, mobile menu and content area.
//!
//! The shell owns the viewport subscription that keeps
//! [`LayoutController`](crate::app::LayoutController) in sync with the
//! window size. It is released when the shell unmounts.

mod sidebar;

use leptos::prelude::*;
use leptos_icons::Icon;
use meto_core::Choice;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::ViewportObserver;
use sidebar::Sidebar;

stylance::import_crate_style!(css, "src/components/shell/shell.module.css");

#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let layout = ctx.layout;
    let preferences = ctx.preferences;

    ViewportObserver::scoped(move |width| layout.resize(width));

    let menu_open = move || layout.get().is_mobile_menu_open;
    let menu_label = move || if menu_open() { "Close menu" } else { "Open menu" };

    view! {
        <div
            class=css::shell
            data-theme=move || preferences.with(|p| p.theme.value())
            data-accent=move || preferences.with(|p| p.accent.value())
        >
            <Sidebar
                layout=layout.signal()
                on_collapse=Callback::new(move |collapsed: bool| layout.set_collapsed(collapsed))
                on_mobile_change=Callback::new(move |open: bool| layout.set_mobile_menu(open))
            />

            <Show when=move || layout.get().shows_menu_button()>
                <button
                    class=css::menuButton
                    on:click=move |_| layout.toggle_mobile_menu()
                    aria-label=menu_label
                    aria-expanded=move || menu_open().to_string()
                >
                    {move || {
                        let icon = if menu_open() { ic::CLOSE } else { ic::MENU };
                        view! { <Icon icon=icon /> }
                    }}
                </button>
            </Show>

            <Show when=move || layout.get().shows_overlay()>
                <div class=css::overlay on:click=move |_| layout.close_mobile_menu()></div>
            </Show>

            <main class=css::main style:margin-left=move || layout.get().sidebar_offset().css()>
                <div class=css::content>{children()}</div>
            </main>
        </div>
    }
}
