//! Settings page state. Held in memory only; every reload starts from
//! [`Preferences::default`].

use crate::choice::choice_enum;

choice_enum! {
    /// Colour scheme of the shell.
    pub enum Theme("theme") {
        Light => ("light", "Light"),
        Dark => ("dark", "Dark"),
    }
}

choice_enum! {
    /// Accent colour used for active navigation and primary buttons.
    pub enum Accent("accent") {
        Indigo => ("indigo", "Indigo"),
        Emerald => ("emerald", "Emerald"),
        Blue => ("blue", "Blue"),
        Amber => ("amber", "Amber"),
        Purple => ("purple", "Purple"),
    }
}

/// User-adjustable settings.
#[derive(Clone, Debug, PartialEq)]
pub struct Preferences {
    pub full_name: String,
    pub email: String,
    pub theme: Theme,
    pub accent: Accent,
    pub push_notifications: bool,
    pub email_notifications: bool,
    pub two_factor: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            theme: Theme::Light,
            accent: Accent::Indigo,
            push_notifications: true,
            email_notifications: true,
            two_factor: false,
        }
    }
}
