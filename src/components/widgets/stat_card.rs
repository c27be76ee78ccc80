//! Stat cards at the top of each page.

use leptos::prelude::*;
use leptos_icons::Icon;
use meto_core::models::{StatCard as StatCardData, Trend};

use super::tone::tone_class;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/widgets/widgets.module.css");

/// Row of stat cards (two columns on small screens, four on large).
#[component]
pub fn StatGrid(stats: Vec<StatCardData>) -> impl IntoView {
    view! {
        <div class=css::statGrid>
            {stats
                .into_iter()
                .map(|card| view! { <StatCard card=card /> })
                .collect_view()}
        </div>
    }
}

/// A single statistic with icon, value and trend.
#[component]
pub fn StatCard(card: StatCardData) -> impl IntoView {
    let (trend_class, trend_icon) = match card.trend() {
        Trend::Up => (css::trendUp, ic::ARROW_UP),
        Trend::Down => (css::trendDown, ic::ARROW_DOWN),
    };

    view! {
        <div class=format!("{} {}", css::statCard, tone_class(card.tone))>
            <div class=css::statHead>
                <div class=css::statIcon>
                    <Icon icon=ic::for_key(card.icon) />
                </div>
                <h3 class=css::statTitle>{card.title}</h3>
            </div>
            <div class=css::statValue>{card.value}</div>
            <div class=format!("{} {}", css::statChange, trend_class)>
                <Icon icon=trend_icon />
                {card.change}
            </div>
        </div>
    }
}
