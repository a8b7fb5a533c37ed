//! Constellation starfield: scene construction and per-frame planning.
//!
//! A [`Scene`] is built for a concrete surface size and rebuilt from
//! scratch whenever that size changes: the star budget, base scale and
//! anchor positions all derive from the dimensions. Stars store their
//! final surface coordinates, so per-frame work reduces to the twinkle
//! term and the parallax offset.
//!
//! The per-frame output is a [`FramePlan`], plain draw commands with no
//! UI types in them. The desktop canvas translates the plan into
//! geometry; tests inspect it directly.

pub mod templates;

use templates::{ShapeTemplate, SHAPES};

/// Straight (non-premultiplied) RGBA color, components in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub fn with_alpha(self, a: f32) -> Rgba {
        Rgba { a, ..self }
    }
}

/// Plain 2D vector used for pointer offsets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Vec2 {
        Vec2 { x, y }
    }
}

/// Width below which the narrow star budget applies.
const NARROW_WIDTH: f32 = 640.0;
/// Upper width of the mid budget band (inclusive).
const MID_WIDTH: f32 = 1024.0;
/// Width below which the compact layout and fixed scale are used.
const MOBILE_WIDTH: f32 = 768.0;
/// Reference dimension the proportional scale is derived from.
const SCALE_REFERENCE: f32 = 1200.0;
const MOBILE_SCALE: f32 = 0.6;

/// Pointer influence in surface pixels across the full surface.
pub const PARALLAX_STRENGTH: f32 = 20.0;
/// Depth factor applied per constellation index.
pub const PARALLAX_DAMPING: f32 = 0.3;

/// Connection line alpha for fine and coarse pointers.
pub const LINE_ALPHA: f32 = 0.125;
pub const LINE_ALPHA_TOUCH: f32 = 0.082;
pub const LINE_WIDTH: f32 = 0.5;

/// The twinkle oscillator is `sin(clock * speed * RATE + phase)`.
const TWINKLE_RATE: f32 = 100.0;
const TWINKLE_AMPLITUDE: f32 = 0.2;

/// Disc radii relative to the authored star size.
pub const GLOW_RADIUS_FACTOR: f32 = 3.0;
pub const CORE_RADIUS_FACTOR: f32 = 0.5;
const CORE_ALPHA_FACTOR: f32 = 0.8;

/// Anchors as width/height fractions, with relative scales per shape.
const WIDE_ANCHORS: [(f32, f32); 3] = [(0.85, 0.25), (0.10, 0.35), (0.92, 0.70)];
const WIDE_SCALES: [f32; 3] = [1.2, 1.0, 0.9];
const COMPACT_ANCHORS: [(f32, f32); 3] = [(0.75, 0.15), (0.15, 0.30), (0.85, 0.65)];
const COMPACT_SCALES: [f32; 3] = [0.7, 0.6, 0.5];

/// Star budget band for a surface width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Narrow,
    Mid,
    Wide,
}

impl Tier {
    pub fn for_width(width: f32) -> Tier {
        if width < NARROW_WIDTH {
            Tier::Narrow
        } else if width <= MID_WIDTH {
            Tier::Mid
        } else {
            Tier::Wide
        }
    }

    /// Stars granted to a full-density constellation.
    pub fn star_budget(self) -> usize {
        match self {
            Tier::Narrow => 8,
            Tier::Mid => 12,
            Tier::Wide => 15,
        }
    }
}

/// Maps an absolute pointer position to the parallax offset vector.
///
/// Zero at the surface center, growing linearly toward the edges. A
/// degenerate surface yields no offset.
pub fn pointer_offset(px: f32, py: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2 {
        x: (px / width - 0.5) * PARALLAX_STRENGTH,
        y: (py / height - 0.5) * PARALLAX_STRENGTH,
    }
}

/// A star placed in surface coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub alpha: f32,
    pub twinkle_speed: f32,
    pub twinkle_phase: f32,
}

impl Star {
    /// Twinkled alpha for the given clock value, clamped so it can
    /// never go negative or overshoot full opacity.
    pub fn rendered_alpha(&self, clock: f32) -> f32 {
        let twinkle = (clock * self.twinkle_speed * TWINKLE_RATE + self.twinkle_phase).sin();
        (self.alpha + twinkle * TWINKLE_AMPLITUDE).clamp(0.0, 1.0)
    }
}

/// A placed constellation. Connections are validated at construction,
/// so the renderer never bounds-checks.
#[derive(Debug, Clone)]
pub struct Constellation {
    pub name: &'static str,
    pub stars: Vec<Star>,
    pub connections: Vec<(usize, usize)>,
    pub color: Rgba,
}

impl Constellation {
    fn from_template(
        template: &ShapeTemplate,
        center_x: f32,
        center_y: f32,
        scale: f32,
        budget: usize,
    ) -> Constellation {
        let count = ((budget as f32) * template.density).floor() as usize;
        let count = count.min(template.stars.len());

        let stars = template.stars[..count]
            .iter()
            .map(|s| Star {
                x: center_x + s.dx * scale,
                y: center_y + s.dy * scale,
                size: s.size,
                alpha: s.alpha,
                twinkle_speed: s.twinkle_speed,
                twinkle_phase: s.twinkle_phase,
            })
            .collect();

        // The templates author connections against the full star table;
        // pairs that reference a truncated star are dropped here.
        let connections = template
            .connections
            .iter()
            .copied()
            .filter(|&(a, b)| a < count && b < count)
            .collect();

        Constellation {
            name: template.name,
            stars,
            connections,
            color: template.color,
        }
    }
}

/// One connection line ready to stroke.
#[derive(Debug, Clone, Copy)]
pub struct LineSegment {
    pub from: (f32, f32),
    pub to: (f32, f32),
    pub color: Rgba,
    pub width: f32,
}

/// One star ready to fill: an accent glow disc plus a white core.
#[derive(Debug, Clone, Copy)]
pub struct StarDot {
    pub x: f32,
    pub y: f32,
    pub glow_radius: f32,
    pub core_radius: f32,
    pub color: Rgba,
    pub alpha: f32,
    pub core_alpha: f32,
}

/// Draw commands for one frame, in paint order (lines under stars).
#[derive(Debug, Clone, Default)]
pub struct FramePlan {
    pub lines: Vec<LineSegment>,
    pub stars: Vec<StarDot>,
}

impl FramePlan {
    /// True when every coordinate and radius is a finite number. A plan
    /// failing this is dropped for the frame instead of reaching the
    /// canvas; the loop stays armed and the next frame retries.
    pub fn is_finite(&self) -> bool {
        let lines_ok = self.lines.iter().all(|l| {
            l.from.0.is_finite() && l.from.1.is_finite() && l.to.0.is_finite() && l.to.1.is_finite()
        });
        let stars_ok = self.stars.iter().all(|s| {
            s.x.is_finite() && s.y.is_finite() && s.glow_radius.is_finite() && s.alpha.is_finite()
        });
        lines_ok && stars_ok
    }
}

/// All constellations placed for one surface size.
#[derive(Debug, Clone)]
pub struct Scene {
    pub constellations: Vec<Constellation>,
    pub width: f32,
    pub height: f32,
}

impl Scene {
    /// Builds the scene for a surface size.
    ///
    /// Degenerate sizes are not an error: a zero dimension falls into
    /// the narrow tier and the compact layout, and stars collapse onto
    /// their anchor points.
    pub fn build(width: f32, height: f32) -> Scene {
        let width = width.max(0.0);
        let height = height.max(0.0);

        let budget = Tier::for_width(width).star_budget();
        let compact = width < MOBILE_WIDTH;
        let base_scale = if compact {
            MOBILE_SCALE
        } else {
            width.min(height) / SCALE_REFERENCE
        };
        let (anchors, scales) = if compact {
            (COMPACT_ANCHORS, COMPACT_SCALES)
        } else {
            (WIDE_ANCHORS, WIDE_SCALES)
        };

        let constellations = SHAPES
            .iter()
            .zip(anchors.iter().zip(scales.iter()))
            .map(|(shape, (&(ax, ay), &relative))| {
                Constellation::from_template(
                    shape,
                    width * ax,
                    height * ay,
                    base_scale * relative,
                    budget,
                )
            })
            .collect();

        Scene {
            constellations,
            width,
            height,
        }
    }

    pub fn tier(&self) -> Tier {
        Tier::for_width(self.width)
    }

    /// Plans one frame. Pure: the caller owns the clock and the pointer
    /// vector, and a hidden surface simply never calls this.
    pub fn frame(&self, clock: f32, pointer: Vec2, touch: bool) -> FramePlan {
        let line_alpha = if touch { LINE_ALPHA_TOUCH } else { LINE_ALPHA };
        let mut plan = FramePlan::default();

        for (index, constellation) in self.constellations.iter().enumerate() {
            let depth = (index + 1) as f32 * PARALLAX_DAMPING;
            let ox = pointer.x * depth;
            let oy = pointer.y * depth;

            for &(a, b) in &constellation.connections {
                let s = &constellation.stars[a];
                let e = &constellation.stars[b];
                plan.lines.push(LineSegment {
                    from: (s.x + ox, s.y + oy),
                    to: (e.x + ox, e.y + oy),
                    color: constellation.color.with_alpha(line_alpha),
                    width: LINE_WIDTH,
                });
            }

            for star in &constellation.stars {
                let alpha = star.rendered_alpha(clock);
                plan.stars.push(StarDot {
                    x: star.x + ox,
                    y: star.y + oy,
                    glow_radius: star.size * GLOW_RADIUS_FACTOR,
                    core_radius: star.size * CORE_RADIUS_FACTOR,
                    color: constellation.color,
                    alpha,
                    core_alpha: alpha * CORE_ALPHA_FACTOR,
                });
            }
        }

        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star_counts(scene: &Scene) -> Vec<usize> {
        scene.constellations.iter().map(|c| c.stars.len()).collect()
    }

    #[test]
    fn test_tier_bands() {
        assert_eq!(Tier::for_width(0.0), Tier::Narrow);
        assert_eq!(Tier::for_width(639.0), Tier::Narrow);
        assert_eq!(Tier::for_width(640.0), Tier::Mid);
        assert_eq!(Tier::for_width(1024.0), Tier::Mid);
        assert_eq!(Tier::for_width(1025.0), Tier::Wide);
        assert_eq!(Tier::for_width(2560.0), Tier::Wide);
    }

    #[test]
    fn test_star_counts_per_tier() {
        // Budget, then the crown at 0.8x and the saber at 0.9x, floored.
        assert_eq!(star_counts(&Scene::build(480.0, 800.0)), vec![8, 6, 7]);
        assert_eq!(star_counts(&Scene::build(800.0, 600.0)), vec![12, 9, 10]);
        assert_eq!(star_counts(&Scene::build(1440.0, 900.0)), vec![15, 11, 12]);
    }

    #[test]
    fn test_connections_valid_at_every_tier() {
        for width in [320.0, 480.0, 640.0, 800.0, 1024.0, 1280.0, 1920.0] {
            let scene = Scene::build(width, 900.0);
            for c in &scene.constellations {
                for &(a, b) in &c.connections {
                    assert!(a < c.stars.len(), "{} at {width}: {a}", c.name);
                    assert!(b < c.stars.len(), "{} at {width}: {b}", c.name);
                }
            }
        }
    }

    #[test]
    fn test_truncated_tiers_drop_out_of_range_connections() {
        let narrow = Scene::build(480.0, 800.0);
        let lines: Vec<usize> = narrow
            .constellations
            .iter()
            .map(|c| c.connections.len())
            .collect();
        // Mouse keeps its ear triangles plus the brow links, the crown
        // loses everything touching its jewel, the saber keeps the hilt.
        assert_eq!(lines, vec![8, 5, 7]);

        let wide = Scene::build(1440.0, 900.0);
        let lines: Vec<usize> = wide
            .constellations
            .iter()
            .map(|c| c.connections.len())
            .collect();
        assert_eq!(lines, vec![18, 15, 12]);
    }

    #[test]
    fn test_twinkle_alpha_never_negative() {
        let scene = Scene::build(1440.0, 900.0);
        let mut clock = 0.0_f32;
        while clock < 12.0 {
            for c in &scene.constellations {
                for star in &c.stars {
                    let alpha = star.rendered_alpha(clock);
                    assert!((0.0..=1.0).contains(&alpha), "alpha {alpha} at {clock}");
                }
            }
            clock += 0.037;
        }
    }

    #[test]
    fn test_parallax_offset_proportional_to_depth() {
        let scene = Scene::build(1440.0, 900.0);
        let pointer = Vec2::new(10.0, -6.0);
        let plan = scene.frame(0.0, pointer, false);

        let mut dot = 0;
        for (index, c) in scene.constellations.iter().enumerate() {
            let depth = (index + 1) as f32 * PARALLAX_DAMPING;
            for star in &c.stars {
                let drawn = &plan.stars[dot];
                assert!((drawn.x - star.x - pointer.x * depth).abs() < 1e-3);
                assert!((drawn.y - star.y - pointer.y * depth).abs() < 1e-3);
                dot += 1;
            }
        }
        assert_eq!(dot, plan.stars.len());
    }

    #[test]
    fn test_pointer_offset_mapping() {
        assert_eq!(pointer_offset(512.0, 384.0, 1024.0, 768.0), Vec2::ZERO);

        let edge = pointer_offset(1024.0, 0.0, 1024.0, 768.0);
        assert!((edge.x - PARALLAX_STRENGTH / 2.0).abs() < 1e-4);
        assert!((edge.y + PARALLAX_STRENGTH / 2.0).abs() < 1e-4);

        // Degenerate surfaces produce no offset rather than NaN.
        assert_eq!(pointer_offset(10.0, 10.0, 0.0, 0.0), Vec2::ZERO);
    }

    #[test]
    fn test_touch_lowers_line_alpha_only() {
        let scene = Scene::build(1440.0, 900.0);
        let fine = scene.frame(1.0, Vec2::ZERO, false);
        let coarse = scene.frame(1.0, Vec2::ZERO, true);

        assert_eq!(fine.lines.len(), coarse.lines.len());
        for (a, b) in fine.lines.iter().zip(coarse.lines.iter()) {
            assert!((a.color.a - LINE_ALPHA).abs() < 1e-6);
            assert!((b.color.a - LINE_ALPHA_TOUCH).abs() < 1e-6);
            assert_eq!(a.from, b.from);
        }
        for (a, b) in fine.stars.iter().zip(coarse.stars.iter()) {
            assert_eq!(a.x, b.x);
            assert!((a.alpha - b.alpha).abs() < 1e-6);
        }
    }

    #[test]
    fn test_rebuild_moves_stars_and_changes_tier() {
        let before = Scene::build(1440.0, 900.0);
        let after = Scene::build(800.0, 600.0);

        assert_eq!(before.tier(), Tier::Wide);
        assert_eq!(after.tier(), Tier::Mid);
        assert_ne!(
            before.constellations[0].stars.len(),
            after.constellations[0].stars.len()
        );
        let b = &before.constellations[0].stars[0];
        let a = &after.constellations[0].stars[0];
        assert!((b.x - a.x).abs() > 1.0 || (b.y - a.y).abs() > 1.0);
    }

    #[test]
    fn test_zero_size_scene_is_safe() {
        let scene = Scene::build(0.0, 0.0);
        assert_eq!(scene.tier(), Tier::Narrow);
        let plan = scene.frame(0.5, Vec2::new(3.0, 3.0), false);
        assert!(plan.is_finite());
        assert!(!plan.stars.is_empty());
    }

    #[test]
    fn test_frame_plan_flags_non_finite_geometry() {
        let mut plan = Scene::build(800.0, 600.0).frame(0.0, Vec2::ZERO, false);
        assert!(plan.is_finite());
        plan.stars[0].x = f32::NAN;
        assert!(!plan.is_finite());
    }

    #[test]
    fn test_example_scenario_tablet_center() {
        // 1024x768, pointer dead center, clock zero.
        let scene = Scene::build(1024.0, 768.0);
        assert_eq!(scene.tier(), Tier::Mid);
        assert_eq!(star_counts(&scene), vec![12, 9, 10]);

        let pointer = pointer_offset(512.0, 384.0, 1024.0, 768.0);
        assert_eq!(pointer, Vec2::ZERO);

        let plan = scene.frame(0.0, pointer, false);
        let total: usize = scene.constellations.iter().map(|c| c.stars.len()).sum();
        assert_eq!(plan.stars.len(), total);
        assert!(plan.stars.iter().all(|s| s.alpha >= 0.0));

        // Zero pointer means the drawn positions are the stored ones.
        let mut dot = 0;
        for c in &scene.constellations {
            for star in &c.stars {
                assert_eq!(plan.stars[dot].x, star.x);
                assert_eq!(plan.stars[dot].y, star.y);
                dot += 1;
            }
        }
    }
}
