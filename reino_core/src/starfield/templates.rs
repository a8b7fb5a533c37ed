//! Hand-authored constellation silhouettes.
//!
//! Offsets are in template units around the constellation anchor; the
//! scene scales and translates them once at build time. Connection
//! pairs index into the star table and are validated against the
//! truncated star count when the scene is built, so shapes stay
//! swappable without touching the renderer.

use super::Rgba;

/// One candidate star in template space.
#[derive(Debug, Clone, Copy)]
pub struct StarTemplate {
    pub dx: f32,
    pub dy: f32,
    pub size: f32,
    pub alpha: f32,
    pub twinkle_speed: f32,
    pub twinkle_phase: f32,
}

/// A complete constellation silhouette.
#[derive(Debug, Clone, Copy)]
pub struct ShapeTemplate {
    pub name: &'static str,
    pub stars: &'static [StarTemplate],
    pub connections: &'static [(usize, usize)],
    pub color: Rgba,
    /// Fraction of the surface star budget granted to this shape.
    pub density: f32,
}

const fn star(
    dx: f32,
    dy: f32,
    size: f32,
    alpha: f32,
    twinkle_speed: f32,
    twinkle_phase: f32,
) -> StarTemplate {
    StarTemplate {
        dx,
        dy,
        size,
        alpha,
        twinkle_speed,
        twinkle_phase,
    }
}

/// Round-eared mouse silhouette, the anchor shape of the set. Two ear
/// clusters, then the face ring from brow to chin.
pub const MOUSE: ShapeTemplate = ShapeTemplate {
    name: "mouse",
    stars: &[
        star(-35.0, -35.0, 2.0, 0.6, 0.02, 0.0),
        star(-45.0, -25.0, 1.5, 0.5, 0.015, 1.0),
        star(-30.0, -45.0, 1.8, 0.55, 0.018, 2.0),
        star(35.0, -35.0, 2.0, 0.6, 0.02, 0.5),
        star(45.0, -25.0, 1.5, 0.5, 0.015, 1.5),
        star(30.0, -45.0, 1.8, 0.55, 0.018, 2.5),
        star(0.0, -25.0, 2.5, 0.7, 0.025, 0.0),
        star(-15.0, -15.0, 2.0, 0.6, 0.02, 0.3),
        star(15.0, -15.0, 2.0, 0.6, 0.02, 0.7),
        star(-20.0, 0.0, 2.2, 0.65, 0.022, 1.0),
        star(0.0, 0.0, 3.0, 0.8, 0.03, 0.0),
        star(20.0, 0.0, 2.2, 0.65, 0.022, 1.2),
        star(-15.0, 15.0, 2.0, 0.6, 0.02, 1.5),
        star(0.0, 20.0, 2.5, 0.7, 0.025, 0.8),
        star(15.0, 15.0, 2.0, 0.6, 0.02, 1.8),
    ],
    connections: &[
        (0, 1),
        (1, 2),
        (0, 2),
        (3, 4),
        (4, 5),
        (3, 5),
        (6, 7),
        (7, 10),
        (10, 11),
        (11, 8),
        (8, 6),
        (7, 9),
        (9, 12),
        (12, 13),
        (13, 14),
        (14, 11),
        (0, 7),
        (3, 8),
    ],
    // #FFD700
    color: Rgba {
        r: 1.0,
        g: 0.843,
        b: 0.0,
        a: 1.0,
    },
    density: 1.0,
};

/// Five-point crown: the band runs left to right, the peaks arc above
/// it, and a jewel star sits in the middle.
pub const CROWN: ShapeTemplate = ShapeTemplate {
    name: "crown",
    stars: &[
        star(-40.0, 15.0, 1.5, 0.5, 0.015, 0.0),
        star(-20.0, 10.0, 2.0, 0.6, 0.02, 0.5),
        star(0.0, 12.0, 2.2, 0.65, 0.022, 1.0),
        star(20.0, 10.0, 2.0, 0.6, 0.02, 1.5),
        star(40.0, 15.0, 1.5, 0.5, 0.015, 2.0),
        star(-30.0, -10.0, 2.5, 0.7, 0.025, 0.0),
        star(-15.0, -25.0, 3.0, 0.8, 0.03, 0.3),
        star(0.0, -35.0, 3.5, 0.9, 0.035, 0.0),
        star(15.0, -25.0, 3.0, 0.8, 0.03, 0.7),
        star(30.0, -10.0, 2.5, 0.7, 0.025, 1.2),
        star(0.0, -5.0, 2.8, 0.85, 0.04, 0.0),
    ],
    connections: &[
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 4),
        (0, 5),
        (5, 6),
        (6, 7),
        (7, 8),
        (8, 9),
        (9, 4),
        (5, 10),
        (6, 10),
        (7, 10),
        (8, 10),
        (9, 10),
    ],
    // #FF69B4
    color: Rgba {
        r: 1.0,
        g: 0.412,
        b: 0.706,
        a: 1.0,
    },
    density: 0.8,
};

/// Upright glowing saber: hilt at the bottom, blade rising through
/// brighter stars toward the tip.
pub const SABER: ShapeTemplate = ShapeTemplate {
    name: "saber",
    stars: &[
        star(0.0, 40.0, 2.0, 0.6, 0.02, 0.0),
        star(0.0, 30.0, 2.2, 0.65, 0.022, 0.5),
        star(0.0, 20.0, 2.5, 0.7, 0.025, 1.0),
        star(-5.0, 25.0, 1.5, 0.5, 0.018, 1.5),
        star(5.0, 25.0, 1.5, 0.5, 0.018, 2.0),
        star(-8.0, 15.0, 2.0, 0.6, 0.02, 0.0),
        star(8.0, 15.0, 2.0, 0.6, 0.02, 0.5),
        star(0.0, 5.0, 3.0, 0.8, 0.03, 0.0),
        star(0.0, -10.0, 3.2, 0.85, 0.032, 0.3),
        star(0.0, -25.0, 3.5, 0.9, 0.035, 0.6),
        star(0.0, -40.0, 3.0, 0.8, 0.03, 0.9),
        star(0.0, -55.0, 2.5, 0.7, 0.028, 1.2),
    ],
    connections: &[
        (0, 1),
        (1, 2),
        (2, 3),
        (2, 4),
        (2, 5),
        (2, 6),
        (5, 6),
        (2, 7),
        (7, 8),
        (8, 9),
        (9, 10),
        (10, 11),
    ],
    // #60A5FA
    color: Rgba {
        r: 0.376,
        g: 0.647,
        b: 0.98,
        a: 1.0,
    },
    density: 0.9,
};

/// Shapes in draw order. Parallax depth grows with the index, so the
/// saber drifts the most.
pub const SHAPES: [ShapeTemplate; 3] = [MOUSE, CROWN, SABER];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_have_authored_star_counts() {
        assert_eq!(MOUSE.stars.len(), 15);
        assert_eq!(CROWN.stars.len(), 11);
        assert_eq!(SABER.stars.len(), 12);
    }

    #[test]
    fn test_full_templates_connect_existing_stars() {
        for shape in SHAPES {
            for &(a, b) in shape.connections {
                assert!(a < shape.stars.len(), "{}: {a} out of range", shape.name);
                assert!(b < shape.stars.len(), "{}: {b} out of range", shape.name);
                assert_ne!(a, b, "{}: degenerate connection", shape.name);
            }
        }
    }

    #[test]
    fn test_densities_are_fractions() {
        for shape in SHAPES {
            assert!(shape.density > 0.0 && shape.density <= 1.0);
        }
    }

    #[test]
    fn test_template_alphas_leave_twinkle_headroom() {
        // Base alpha plus the twinkle amplitude must stay renderable.
        for shape in SHAPES {
            for star in shape.stars {
                assert!(star.alpha > 0.0 && star.alpha <= 0.9);
                assert!(star.size > 0.0);
                assert!(star.twinkle_speed > 0.0);
            }
        }
    }
}
