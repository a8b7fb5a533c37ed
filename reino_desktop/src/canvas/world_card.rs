use crate::animation::WorldCardState;
use crate::constants::CARD_BORDER_RADIUS;
use crate::theme::PaletteColors;
use iced::advanced::graphics::gradient;
use iced::mouse;
use iced::widget::canvas::{self, Geometry, Path, Stroke};
use iced::{Color, Point, Rectangle, Theme};
use std::f32::consts::PI;
use std::marker::PhantomData;

/// Canvas program for a themed world card with a hover glare.
///
/// Sits behind the card text in a stack; the accent wash and the
/// moving glare react to the pointer position stored in the state.
pub struct WorldCard<'a, Message> {
    pub state: &'a WorldCardState,
    pub accent: Color,
    pub palette: PaletteColors,
    pub _marker: PhantomData<Message>,
}

impl<'a, Message> WorldCard<'a, Message> {
    pub fn new(state: &'a WorldCardState, accent: Color, palette: PaletteColors) -> Self {
        Self {
            state,
            accent,
            palette,
            _marker: PhantomData,
        }
    }
}

impl<'a, Message> canvas::Program<Message> for WorldCard<'a, Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let card = self.state.cache.draw(renderer, bounds.size(), |frame| {
            let center = frame.center();
            let mouse_p = if self.state.is_hovered {
                self.state.mouse_position
            } else {
                center
            };

            let dx = (mouse_p.x - center.x) / (bounds.width / 2.0);
            let dy = (mouse_p.y - center.y) / (bounds.height / 2.0);

            let card_path =
                Path::rounded_rectangle(Point::ORIGIN, bounds.size(), CARD_BORDER_RADIUS.into());

            // Accent wash fading into the surface color
            let wash = gradient::Linear::new(Point::ORIGIN, Point::new(0.0, bounds.height))
                .add_stop(0.0, Color { a: 0.30, ..self.accent })
                .add_stop(
                    1.0,
                    Color {
                        a: 0.95,
                        ..self.palette.surface
                    },
                );
            frame.fill(&card_path, wash);

            // Border with pulse effect on hover
            let pulse = (self.state.hover_tick.sin() + 1.0) * 0.5;
            let border_alpha = if self.state.is_hovered {
                0.7 + (0.3 * pulse)
            } else {
                0.25
            };
            let border_color = if self.state.is_hovered {
                self.accent
            } else {
                self.palette.border
            };
            let stroke_width = if self.state.is_hovered { 2.0 } else { 1.0 };

            frame.stroke(
                &card_path,
                Stroke::default()
                    .with_color(Color {
                        a: border_alpha,
                        ..border_color
                    })
                    .with_width(stroke_width),
            );

            // Glare sweep following the pointer
            if self.state.is_hovered {
                let angle = dx * 0.5 + PI / 4.0;
                let glare_len = bounds.width * 1.5;
                let cx = center.x + (dx * bounds.width * 0.2);
                let cy = center.y + (dy * bounds.height * 0.2);

                let start = Point::new(
                    cx + (angle.cos() * glare_len * 0.5),
                    cy + (angle.sin() * glare_len * 0.5),
                );
                let end = Point::new(
                    cx - (angle.cos() * glare_len * 0.5),
                    cy - (angle.sin() * glare_len * 0.5),
                );

                let glare = gradient::Linear::new(start, end)
                    .add_stop(0.0, Color::TRANSPARENT)
                    .add_stop(0.5, Color { a: 0.08, ..Color::WHITE })
                    .add_stop(1.0, Color::TRANSPARENT);

                frame.fill(&card_path, glare);
            }
        });
        vec![card]
    }
}
