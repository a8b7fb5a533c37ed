use crate::animation::ParticleFieldState;
use crate::theme::PaletteColors;
use iced::mouse;
use iced::widget::canvas::{self, Geometry, Path};
use iced::{Color, Point, Rectangle, Theme};
use std::marker::PhantomData;

/// Canvas program for the ambient dust motes drifting up the page.
pub struct ParticleField<'a, Message> {
    pub state: &'a ParticleFieldState,
    pub palette: PaletteColors,
    pub opacity: f32,
    pub _marker: PhantomData<Message>,
}

impl<'a, Message> ParticleField<'a, Message> {
    pub fn new(state: &'a ParticleFieldState, palette: PaletteColors, opacity: f32) -> Self {
        Self {
            state,
            palette,
            opacity,
            _marker: PhantomData,
        }
    }
}

impl<'a, Message> canvas::Program<Message> for ParticleField<'a, Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let motes = self.state.cache.draw(renderer, bounds.size(), |frame| {
            if self.opacity <= 0.01 {
                return;
            }

            let tick = self.state.tick;
            for (index, seed) in self.state.seeds.iter().enumerate() {
                // Motes climb slowly and wrap at the top.
                let y = (seed.y - tick * seed.speed).rem_euclid(1.0);
                let x = seed.x + (tick * 0.4 + seed.phase).sin() * 0.012;
                let shimmer = 0.22 + 0.18 * (tick * 1.3 + seed.phase).sin();

                let base = if index % 3 == 0 {
                    self.palette.accent
                } else {
                    self.palette.text
                };
                frame.fill(
                    &Path::circle(
                        Point::new(x * bounds.width, y * bounds.height),
                        seed.size,
                    ),
                    Color {
                        a: shimmer * self.opacity,
                        ..base
                    },
                );
            }
        });
        vec![motes]
    }
}
