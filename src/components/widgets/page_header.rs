use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/widgets/widgets.module.css");

/// Page title, subtitle and an optional row of action buttons.
#[component]
pub fn PageHeader(
    title: &'static str,
    subtitle: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class=css::pageHeader>
            <div>
                <h1 class=css::pageTitle>{title}</h1>
                <p class=css::pageSubtitle>{subtitle}</p>
            </div>
            {children.map(|children| view! { <div class=css::actions>{children()}</div> })}
        </div>
    }
}
