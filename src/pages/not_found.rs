use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/pages/pages.module.css");

/// Shown for any hash path without a route.
#[component]
pub fn NotFound(path: String) -> impl IntoView {
    view! {
        <div class=css::notFound>
            <h1 class=css::panelTitle>"Page not found"</h1>
            <p>"Nothing lives at " <code>{path}</code></p>
            <a class=css::homeLink href="#/">
                "Back to dashboard"
                <Icon icon=ic::ARROW_RIGHT />
            </a>
        </div>
    }
}
