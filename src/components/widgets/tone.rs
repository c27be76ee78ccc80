//! Tone classes shared by badges, glyphs and stat cards.

use meto_core::models::Tone;

stylance::import_crate_style!(css, "src/components/widgets/widgets.module.css");

/// Class that sets the `--tone*` custom properties for `tone`.
pub fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Indigo => css::toneIndigo,
        Tone::Emerald => css::toneEmerald,
        Tone::Amber => css::toneAmber,
        Tone::Red => css::toneRed,
        Tone::Blue => css::toneBlue,
        Tone::Purple => css::tonePurple,
        Tone::Slate => css::toneSlate,
    }
}
