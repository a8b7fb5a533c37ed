use iced::Color;

/// Core color palette for the Reino night-sky theme.
#[derive(Debug, Clone, Copy)]
pub struct PaletteColors {
    pub background: Color,
    pub surface: Color,
    pub surface_raised: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub accent_soft: Color,
    pub success: Color,
    pub danger: Color,
    pub glow: Color,
}

impl Default for PaletteColors {
    fn default() -> Self {
        Self::night()
    }
}

impl PaletteColors {
    /// Night-sky palette. The site renders a single fixed theme;
    /// the kiosk never switches to a light mode.
    pub fn night() -> Self {
        Self {
            background: Color::from_rgb8(6, 9, 24),       // Deep space navy
            surface: Color::from_rgb8(13, 18, 40),        // Dark indigo
            surface_raised: Color::from_rgb8(22, 28, 58), // Raised indigo
            border: Color::from_rgb8(48, 58, 100),        // Indigo border
            text: Color::from_rgb8(240, 244, 255),        // Off-white
            muted: Color::from_rgb8(148, 158, 192),       // Blue-gray
            accent: Color::from_rgb8(255, 215, 0),        // Star gold
            accent_soft: Color::from_rgb8(250, 204, 21),  // Softer amber
            success: Color::from_rgb8(37, 211, 102),      // WhatsApp green
            danger: Color::from_rgb8(255, 105, 120),      // Warm red
            glow: Color::from_rgb8(255, 233, 140),        // Warm star glow
        }
    }
}

/// Returns the default palette for the application.
pub fn palette() -> PaletteColors {
    PaletteColors::default()
}

/// Accent color for one of the four themed worlds, by card index.
pub fn world_accent(index: usize) -> Color {
    match index {
        0 => Color::from_rgb8(96, 165, 250),  // Base Galáctica blue
        1 => Color::from_rgb8(255, 105, 180), // Reino Encantado pink
        2 => Color::from_rgb8(74, 222, 128),  // Expedição Safari green
        _ => Color::from_rgb8(192, 132, 252), // Arena Gamer purple
    }
}
