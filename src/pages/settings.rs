//! Settings page.
//!
//! Form controls are bound to [`Preferences`] in the app context, so theme
//! and accent changes apply to the shell immediately. Nothing is persisted.

use gloo_timers::callback::Timeout;
use icondata::Icon as Glyph;
use leptos::prelude::*;
use leptos_icons::Icon;
use meto_core::Choice;
use meto_core::models::{Accent, Preferences, Theme, Tone};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::widgets::{self, PageHeader, tone_class};
use crate::config::SAVED_NOTICE_MS;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/pages/settings.module.css");

/// Shortcut card at the top of the page. `target` is the id of the panel
/// it scrolls to; sections without a panel render disabled.
struct Section {
    title: &'static str,
    description: &'static str,
    icon: Glyph,
    tone: Tone,
    target: Option<&'static str>,
}

const SECTIONS: &[Section] = &[
    Section {
        title: "Profile Settings",
        description: "Manage your account information",
        icon: ic::PROFILE,
        tone: Tone::Indigo,
        target: Some("profile"),
    },
    Section {
        title: "Notifications",
        description: "Configure your notification preferences",
        icon: ic::BELL,
        tone: Tone::Emerald,
        target: Some("notifications"),
    },
    Section {
        title: "Security",
        description: "Manage your security settings",
        icon: ic::LOCK,
        tone: Tone::Blue,
        target: Some("security"),
    },
    Section {
        title: "Appearance",
        description: "Customize the look and feel",
        icon: ic::PALETTE,
        tone: Tone::Amber,
        target: Some("appearance"),
    },
    Section {
        title: "Language",
        description: "Set your preferred language",
        icon: ic::GLOBE,
        tone: Tone::Purple,
        target: None,
    },
];

fn accent_tone(accent: Accent) -> Tone {
    match accent {
        Accent::Indigo => Tone::Indigo,
        Accent::Emerald => Tone::Emerald,
        Accent::Blue => Tone::Blue,
        Accent::Amber => Tone::Amber,
        Accent::Purple => Tone::Purple,
    }
}

fn preferences() -> RwSignal<Preferences> {
    use_context::<AppContext>()
        .expect("AppContext must be provided at root")
        .preferences
}

#[component]
pub fn Settings() -> impl IntoView {
    let preferences = preferences();
    let saved = RwSignal::new(false);
    // Replacing the handle drops (and cancels) the previous timer.
    let notice_timer = StoredValue::new_local(None::<Timeout>);

    let save = move |_: leptos::ev::MouseEvent| {
        preferences.with_untracked(|p| {
            web_sys::console::log_1(
                &format!("Settings saved: theme={}, accent={}", p.theme, p.accent).into(),
            );
        });
        saved.set(true);
        let timer = Timeout::new(SAVED_NOTICE_MS, move || saved.set(false));
        notice_timer.set_value(Some(timer));
    };

    view! {
        <div class=css::page>
            <PageHeader title="Settings" subtitle="Manage your account settings">
                <button type="button" class=widgets::css::primaryButton on:click=save>
                    <Icon icon=ic::SAVE />
                    "Save Changes"
                </button>
            </PageHeader>

            <Show when=move || saved.get()>
                <div class=css::notice role="status">
                    <Icon icon=ic::CHECK />
                    "Changes saved"
                </div>
            </Show>

            <div class=css::sectionGrid>
                {SECTIONS.iter().map(|section| view! { <SectionCard section=section /> }).collect_view()}
            </div>

            <ProfilePanel />
            <SecurityPanel />
            <NotificationsPanel />
            <AppearancePanel />
            <DangerZone />
        </div>
    }
}

#[component]
fn SectionCard(section: &'static Section) -> impl IntoView {
    let target = section.target;
    let on_click = move |_: leptos::ev::MouseEvent| {
        if let Some(id) = target {
            if !dom::scroll_to_id(id) {
                web_sys::console::warn_1(&format!("Settings panel `{}` not found", id).into());
            }
        }
    };

    view! {
        <button
            type="button"
            class=format!("{} {}", css::sectionCard, tone_class(section.tone))
            disabled=target.is_none()
            on:click=on_click
        >
            <div class=css::iconTile aria-hidden="true"><Icon icon=section.icon /></div>
            <div>
                <h3 class=css::title>{section.title}</h3>
                <p class=css::text>{section.description}</p>
            </div>
        </button>
    }
}

#[component]
fn Panel(
    id: &'static str,
    icon: Glyph,
    tone: Tone,
    title: &'static str,
    description: &'static str,
    #[prop(optional)] danger: bool,
    children: Children,
) -> impl IntoView {
    let class = if danger {
        format!("{} {}", css::panel, css::danger)
    } else {
        css::panel.to_string()
    };

    view! {
        <section id=id class=class>
            <div class=format!("{} {}", css::panelHead, tone_class(tone))>
                <div class=css::iconTile aria-hidden="true"><Icon icon=icon /></div>
                <div>
                    <h2 class=css::title>{title}</h2>
                    <p class=css::text>{description}</p>
                </div>
            </div>
            {children()}
        </section>
    }
}

#[component]
fn ProfilePanel() -> impl IntoView {
    let preferences = preferences();

    view! {
        <Panel
            id="profile"
            icon=ic::PROFILE
            tone=Tone::Indigo
            title="Profile Settings"
            description="Update your personal information"
        >
            <div class=css::fields>
                <label class=css::field>
                    "Full Name"
                    <input
                        type="text"
                        class=css::input
                        placeholder="John Doe"
                        prop:value=move || preferences.with(|p| p.full_name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            preferences.update(|p| p.full_name = value);
                        }
                    />
                </label>
                <label class=css::field>
                    "Email"
                    <input
                        type="email"
                        class=css::input
                        placeholder="john@example.com"
                        prop:value=move || preferences.with(|p| p.email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            preferences.update(|p| p.email = value);
                        }
                    />
                </label>
            </div>
        </Panel>
    }
}

#[component]
fn SecurityPanel() -> impl IntoView {
    let preferences = preferences();
    let reveal = RwSignal::new(false);

    view! {
        <Panel
            id="security"
            icon=ic::LOCK
            tone=Tone::Blue
            title="Security Settings"
            description="Manage your password and security"
        >
            <div class=css::fields>
                <label class=css::field>
                    "Current Password"
                    <div class=css::secret>
                        <input
                            type=move || if reveal.get() { "text" } else { "password" }
                            class=css::input
                            placeholder="••••••••"
                            autocomplete="current-password"
                        />
                        <button
                            type="button"
                            class=css::reveal
                            aria-label=move || if reveal.get() { "Hide password" } else { "Show password" }
                            on:click=move |_| reveal.update(|r| *r = !*r)
                        >
                            {move || {
                                let icon = if reveal.get() { ic::EYE_OFF } else { ic::EYE };
                                view! { <Icon icon=icon /> }
                            }}
                        </button>
                    </div>
                </label>
                <label class=css::field>
                    "New Password"
                    <input type="password" class=css::input placeholder="••••••••" autocomplete="new-password" />
                </label>
                <label class=css::field>
                    "Confirm Password"
                    <input type="password" class=css::input placeholder="••••••••" autocomplete="new-password" />
                </label>
            </div>
            <label class=css::check style="margin-top: 1.25rem">
                <input
                    type="checkbox"
                    prop:checked=move || preferences.with(|p| p.two_factor)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        preferences.update(|p| p.two_factor = checked);
                    }
                />
                "Enable two-factor authentication"
            </label>
        </Panel>
    }
}

#[component]
fn NotificationsPanel() -> impl IntoView {
    let preferences = preferences();

    view! {
        <Panel
            id="notifications"
            icon=ic::BELL
            tone=Tone::Emerald
            title="Notification Settings"
            description="Configure your notification preferences"
        >
            <ToggleRow
                icon=ic::BELL
                title="Push Notifications"
                description="Receive push notifications"
                checked=Signal::derive(move || preferences.with(|p| p.push_notifications))
                on_toggle=move |on| preferences.update(|p| p.push_notifications = on)
            />
            <ToggleRow
                icon=ic::MAIL
                title="Email Notifications"
                description="Receive email notifications"
                checked=Signal::derive(move || preferences.with(|p| p.email_notifications))
                on_toggle=move |on| preferences.update(|p| p.email_notifications = on)
            />
        </Panel>
    }
}

#[component]
fn ToggleRow(
    icon: Glyph,
    title: &'static str,
    description: &'static str,
    checked: Signal<bool>,
    on_toggle: impl Fn(bool) + 'static,
) -> impl IntoView {
    view! {
        <div class=css::toggleRow>
            <div class=css::toggleLabel>
                <Icon icon=icon />
                <div>
                    <div class=css::title>{title}</div>
                    <div class=css::text>{description}</div>
                </div>
            </div>
            <input
                type="checkbox"
                role="switch"
                class=css::switch
                aria-label=title
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle(event_target_checked(&ev))
            />
        </div>
    }
}

#[component]
fn AppearancePanel() -> impl IntoView {
    let preferences = preferences();
    let theme = move || preferences.with(|p| p.theme);
    let accent = move || preferences.with(|p| p.accent);

    view! {
        <Panel
            id="appearance"
            icon=ic::PALETTE
            tone=Tone::Amber
            title="Appearance Settings"
            description="Customize the look and feel"
        >
            <div class=css::field>
                "Theme"
                <div class=css::choices>
                    {Theme::ALL
                        .iter()
                        .copied()
                        .map(|option| {
                            let icon = match option {
                                Theme::Light => ic::SUN,
                                Theme::Dark => ic::MOON,
                            };
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if theme() == option {
                                            format!("{} {}", css::themeButton, css::selected)
                                        } else {
                                            css::themeButton.to_string()
                                        }
                                    }
                                    aria-pressed=move || (theme() == option).to_string()
                                    on:click=move |_| preferences.update(|p| p.theme = option)
                                >
                                    <Icon icon=icon />
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class=css::field style="margin-top: 1.5rem">
                "Accent Color"
                <div class=css::choices>
                    {Accent::ALL
                        .iter()
                        .copied()
                        .map(|option| {
                            let tone = tone_class(accent_tone(option));
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if accent() == option {
                                            format!("{} {} {}", css::swatch, css::swatchSelected, tone)
                                        } else {
                                            format!("{} {}", css::swatch, tone)
                                        }
                                    }
                                    title=option.label()
                                    aria-label=format!("{} accent", option.label())
                                    aria-pressed=move || (accent() == option).to_string()
                                    on:click=move |_| preferences.update(|p| p.accent = option)
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Panel>
    }
}

#[component]
fn DangerZone() -> impl IntoView {
    view! {
        <Panel
            id="danger-zone"
            icon=ic::DELETE
            tone=Tone::Red
            title="Danger Zone"
            description="Irreversible and destructive actions"
            danger=true
        >
            <div class=css::dangerRow>
                <div>
                    <div class=css::title>"Delete Account"</div>
                    <div class=css::text>"Permanently delete your account and all data"</div>
                </div>
                <button type="button" class=css::dangerButton>"Delete Account"</button>
            </div>
        </Panel>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_swatch_uses_matching_tone() {
        for accent in Accent::ALL {
            assert_eq!(accent_tone(*accent).value(), accent.value());
        }
    }

    #[test]
    fn test_section_targets_are_panel_ids() {
        let panels = ["profile", "security", "notifications", "appearance"];
        let targets: Vec<_> = SECTIONS.iter().filter_map(|s| s.target).collect();

        assert_eq!(targets.len(), panels.len());
        assert!(targets.iter().all(|t| panels.contains(t)));
        assert!(SECTIONS.iter().any(|s| s.title == "Language" && s.target.is_none()));
    }
}
