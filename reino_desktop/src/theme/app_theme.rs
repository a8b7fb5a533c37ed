use iced::{theme, Theme};
use super::palette::palette;

/// Creates the custom Reino night-sky theme.
pub fn app_theme() -> Theme {
    let p = palette();
    Theme::custom(
        "Reino Noturno".to_string(),
        theme::Palette {
            background: p.background,
            text: p.text,
            primary: p.accent,
            success: p.success,
            danger: p.danger,
        },
    )
}
