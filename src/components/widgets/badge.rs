//! Status badges and glyphs.

use leptos::prelude::*;
use leptos_icons::Icon;
use meto_core::Choice;
use meto_core::models::{OrderStatus, StatusBadge};

use super::tone::tone_class;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/widgets/widgets.module.css");

/// Coloured pill with the status label.
#[component]
pub fn Badge<S>(status: S) -> impl IntoView
where
    S: StatusBadge + Send + Sync,
{
    view! {
        <span class=format!("{} {}", css::badge, tone_class(status.tone()))>
            {status.label()}
        </span>
    }
}

/// Check, clock or alert glyph for a payment status.
#[component]
pub fn StatusGlyph(status: OrderStatus) -> impl IntoView {
    let icon = match status {
        OrderStatus::Completed => ic::CHECK,
        OrderStatus::Pending => ic::CLOCK,
        OrderStatus::Failed => ic::ALERT,
    };

    view! {
        <span class=format!("{} {}", css::glyph, tone_class(status.tone())) aria-hidden="true">
            <Icon icon=icon />
        </span>
    }
}

/// Glyph followed by badge, as shown in order and transaction tables.
#[component]
pub fn PaymentStatus(status: OrderStatus) -> impl IntoView {
    view! {
        <div class=css::statusCell>
            <StatusGlyph status=status />
            <Badge status=status />
        </div>
    }
}
