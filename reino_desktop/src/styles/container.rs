use crate::constants::CARD_BORDER_RADIUS;
use crate::theme::PaletteColors;
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Glassy content card used for testimonials, contact info and stats.
pub fn card_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(Color {
            a: 0.6,
            ..palette.surface
        })),
        text_color: Some(palette.text),
        border: Border {
            color: Color {
                a: 0.6,
                ..palette.border
            },
            width: 1.0,
            radius: CARD_BORDER_RADIUS.into(),
        },
        ..Default::default()
    }
}

/// Small gold pill above section headers.
pub fn badge_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(Color {
            a: 0.12,
            ..palette.accent
        })),
        text_color: Some(palette.accent),
        border: Border {
            color: Color {
                a: 0.4,
                ..palette.accent
            },
            width: 1.0,
            radius: 999.0.into(),
        },
        ..Default::default()
    }
}

/// Top navigation bar. Transparent at rest, condenses to a solid
/// bar with a bottom border once the page scrolls.
pub fn nav_bar_style(
    palette: PaletteColors,
    condensed: bool,
) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(Color {
            a: if condensed { 0.92 } else { 0.0 },
            ..palette.background
        })),
        border: Border {
            color: if condensed {
                Color {
                    a: 0.6,
                    ..palette.border
                }
            } else {
                Color::TRANSPARENT
            },
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Raised ticket modal card with a gold border and halo.
pub fn modal_card_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(palette.surface_raised)),
        text_color: Some(palette.text),
        border: Border {
            color: Color {
                a: 0.7,
                ..palette.accent
            },
            width: 1.0,
            radius: CARD_BORDER_RADIUS.into(),
        },
        shadow: Shadow {
            color: Color {
                a: 0.35,
                ..palette.glow
            },
            blur_radius: 40.0,
            offset: Vector::default(),
        },
        ..Default::default()
    }
}

/// Dimming veil behind the ticket modal.
pub fn backdrop_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(Color {
            a: 0.7,
            ..palette.background
        })),
        ..Default::default()
    }
}

/// Dashed-ticket inner panel listing destination and date.
pub fn ticket_panel_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(Color {
            a: 0.10,
            ..palette.accent
        })),
        text_color: Some(palette.text),
        border: Border {
            color: Color {
                a: 0.5,
                ..palette.accent_soft
            },
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

/// Footer band below the contact section.
pub fn footer_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(Color {
            a: 0.8,
            ..palette.surface
        })),
        text_color: Some(palette.muted),
        border: Border {
            color: Color {
                a: 0.5,
                ..palette.border
            },
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Full-screen loading veil. Alpha follows the fade-out animation.
pub fn loading_veil_style(
    palette: PaletteColors,
    opacity: f32,
) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(Color {
            a: opacity,
            ..palette.background
        })),
        text_color: Some(Color {
            a: opacity,
            ..palette.text
        }),
        ..Default::default()
    }
}

