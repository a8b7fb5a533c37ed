use crate::animation::StarfieldState;
use iced::mouse;
use iced::widget::canvas::{self, Geometry, Path};
use iced::{Color, Point, Rectangle, Theme};
use reino_core::starfield::Rgba;
use std::marker::PhantomData;

fn tint(color: Rgba, opacity: f32) -> Color {
    Color {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a * opacity,
    }
}

/// Canvas program for the constellation starfield behind the page.
///
/// All geometry comes from the frame plan computed in `reino_core`;
/// this layer only turns it into paths. Colors travel inside the plan,
/// one accent per constellation.
pub struct ConstellationField<'a, Message> {
    pub state: &'a StarfieldState,
    pub opacity: f32,
    pub coarse_pointer: bool,
    pub _marker: PhantomData<Message>,
}

impl<'a, Message> ConstellationField<'a, Message> {
    pub fn new(state: &'a StarfieldState, opacity: f32, coarse_pointer: bool) -> Self {
        Self {
            state,
            opacity,
            coarse_pointer,
            _marker: PhantomData,
        }
    }
}

impl<'a, Message> canvas::Program<Message> for ConstellationField<'a, Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let field = self.state.cache.draw(renderer, bounds.size(), |frame| {
            if self.opacity <= 0.01 {
                return;
            }

            let plan = self.state.plan(self.coarse_pointer);
            // A non-finite plan is dropped for this frame; the next tick
            // rebuilds it from scratch.
            if !plan.is_finite() {
                return;
            }

            for line in &plan.lines {
                let stroke = canvas::Stroke {
                    style: canvas::Style::Solid(tint(line.color, self.opacity)),
                    width: line.width,
                    line_cap: canvas::LineCap::Round,
                    ..Default::default()
                };
                frame.stroke(
                    &Path::line(
                        Point::new(line.from.0, line.from.1),
                        Point::new(line.to.0, line.to.1),
                    ),
                    stroke,
                );
            }

            for star in &plan.stars {
                let center = Point::new(star.x, star.y);

                // Concentric discs stand in for a radial glow, brightest
                // at the center.
                let glow = [
                    (star.glow_radius, star.alpha * 0.2),
                    (star.glow_radius * 0.6, star.alpha * 0.45),
                    (star.glow_radius * 0.3, star.alpha * 0.8),
                ];
                for (radius, alpha) in glow {
                    frame.fill(
                        &Path::circle(center, radius),
                        tint(star.color.with_alpha(alpha), self.opacity),
                    );
                }

                frame.fill(
                    &Path::circle(center, star.core_radius),
                    tint(Rgba::WHITE.with_alpha(star.core_alpha), self.opacity),
                );
            }
        });
        vec![field]
    }
}
