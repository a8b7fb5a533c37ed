use crate::constants::{BUTTON_BORDER_RADIUS, CARD_BORDER_RADIUS, FAB_SIZE};
use crate::theme::PaletteColors;
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Primary gold call-to-action button with glow on hover.
pub fn primary_button_style(
    palette: PaletteColors,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let base = button::Style {
            background: Some(Background::Color(palette.accent)),
            text_color: palette.background,
            border: Border {
                color: palette.accent,
                width: 1.0,
                radius: BUTTON_BORDER_RADIUS.into(),
            },
            shadow: Shadow::default(),
        };
        match status {
            button::Status::Hovered => button::Style {
                background: Some(Background::Color(Color {
                    a: 0.9,
                    ..palette.accent
                })),
                shadow: Shadow {
                    color: palette.glow,
                    blur_radius: 14.0,
                    offset: Vector::default(),
                },
                ..base
            },
            button::Status::Pressed => button::Style {
                background: Some(Background::Color(palette.accent_soft)),
                ..base
            },
            _ => base,
        }
    }
}

/// Outlined secondary button that fills faintly on hover.
pub fn ghost_button_style(
    palette: PaletteColors,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let base = button::Style {
            background: Some(Background::Color(Color::TRANSPARENT)),
            text_color: palette.text,
            border: Border {
                color: palette.border,
                width: 1.0,
                radius: BUTTON_BORDER_RADIUS.into(),
            },
            shadow: Shadow::default(),
        };
        match status {
            button::Status::Hovered => button::Style {
                background: Some(Background::Color(Color {
                    a: 0.08,
                    ..palette.accent
                })),
                border: Border {
                    color: palette.accent,
                    ..base.border
                },
                text_color: palette.accent,
                ..base
            },
            _ => base,
        }
    }
}

/// Navigation link button. The active section is tinted gold.
pub fn nav_link_style(
    palette: PaletteColors,
    is_active: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let hovered = matches!(status, button::Status::Hovered);
        let text_color = if is_active {
            palette.accent
        } else if hovered {
            palette.text
        } else {
            palette.muted
        };
        button::Style {
            background: Some(Background::Color(if is_active {
                Color {
                    a: 0.12,
                    ..palette.accent
                }
            } else if hovered {
                Color {
                    a: 0.06,
                    ..palette.text
                }
            } else {
                Color::TRANSPARENT
            })),
            text_color,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 10.0.into(),
            },
            shadow: Shadow::default(),
        }
    }
}

/// Round icon button for the floating sound toggle.
pub fn icon_button_style(
    palette: PaletteColors,
    is_on: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let icon_color = if is_on { palette.accent } else { palette.muted };
        let base = button::Style {
            background: Some(Background::Color(Color {
                a: 0.85,
                ..palette.surface_raised
            })),
            text_color: icon_color,
            border: Border {
                color: if is_on { palette.accent } else { palette.border },
                width: 1.0,
                radius: (FAB_SIZE / 2.0).into(),
            },
            shadow: Shadow::default(),
        };
        match status {
            button::Status::Hovered => button::Style {
                shadow: Shadow {
                    color: palette.glow,
                    blur_radius: 8.0,
                    offset: Vector::default(),
                },
                ..base
            },
            _ => base,
        }
    }
}

/// Floating WhatsApp action button, green with a soft halo.
pub fn fab_button_style(
    palette: PaletteColors,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let blur = match status {
            button::Status::Hovered => 18.0,
            _ => 10.0,
        };
        button::Style {
            background: Some(Background::Color(palette.success)),
            text_color: Color::WHITE,
            border: Border {
                color: palette.success,
                width: 0.0,
                radius: (FAB_SIZE / 2.0).into(),
            },
            shadow: Shadow {
                color: Color {
                    a: 0.6,
                    ..palette.success
                },
                blur_radius: blur,
                offset: Vector::default(),
            },
        }
    }
}

/// FAQ question row. Open entries carry a gold border.
pub fn faq_row_style(
    palette: PaletteColors,
    is_open: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let hovered = matches!(status, button::Status::Hovered);
        button::Style {
            background: Some(Background::Color(if is_open {
                Color {
                    a: 0.10,
                    ..palette.accent
                }
            } else {
                Color {
                    a: 0.6,
                    ..palette.surface
                }
            })),
            text_color: if is_open { palette.accent } else { palette.text },
            border: Border {
                color: if is_open {
                    Color {
                        a: 0.6,
                        ..palette.accent
                    }
                } else if hovered {
                    palette.border
                } else {
                    Color {
                        a: 0.5,
                        ..palette.border
                    }
                },
                width: 1.0,
                radius: CARD_BORDER_RADIUS.into(),
            },
            shadow: Shadow::default(),
        }
    }
}

/// Carousel pager dot.
pub fn carousel_dot_style(
    palette: PaletteColors,
    is_active: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, _| button::Style {
        background: Some(Background::Color(if is_active {
            palette.accent
        } else {
            Color {
                a: 0.4,
                ..palette.muted
            }
        })),
        text_color: Color::TRANSPARENT,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 5.0.into(),
        },
        shadow: Shadow::default(),
    }
}
