use crate::constants::{SPRING_DAMPING, SPRING_STIFFNESS, SPRING_THRESHOLD};

/// A spring-based animation value for smooth transitions.
///
/// Position lives in 0.0..=1.0. Everything animated on the page
/// (modal scale, FAQ reveal, carousel fade) drives one of these.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    pub position: f32,
    pub velocity: f32,
    pub target: f32,
    pub stiffness: f32,
    pub damping: f32,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
        }
    }
}

impl Spring {
    /// Creates a new spring with custom parameters.
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            ..Default::default()
        }
    }

    /// Updates the spring physics. Returns true if still animating.
    pub fn update(&mut self) -> bool {
        let force = (self.target - self.position) * self.stiffness;
        self.velocity = (self.velocity + force) * self.damping;
        self.position += self.velocity;

        // Clamp position to valid range to prevent oscillation overshoot
        self.position = self.position.clamp(0.0, 1.0);

        // If very close to target and velocity is low, snap to target
        let distance = (self.target - self.position).abs();
        if distance < SPRING_THRESHOLD && self.velocity.abs() < SPRING_THRESHOLD {
            self.position = self.target;
            self.velocity = 0.0;
            return false;
        }

        self.velocity.abs() > SPRING_THRESHOLD || distance > SPRING_THRESHOLD
    }

    /// Sets the target value for the spring to animate towards.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jumps to a position at rest and animates towards `target` from there.
    /// Used when a carousel slide restarts its fade-in from zero.
    pub fn snap_to(&mut self, position: f32, target: f32) {
        self.position = position.clamp(0.0, 1.0);
        self.velocity = 0.0;
        self.target = target;
    }

    /// Returns true if the spring is open (target > 0.5).
    pub fn is_open(&self) -> bool {
        self.target > 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_converges_to_target() {
        let mut spring = Spring::default();
        spring.set_target(1.0);
        let mut steps = 0;
        while spring.update() {
            steps += 1;
            assert!(steps < 1000, "spring failed to settle");
        }
        assert_eq!(spring.position, 1.0);
        assert_eq!(spring.velocity, 0.0);
    }

    #[test]
    fn test_spring_settled_update_is_inert() {
        let mut spring = Spring::default();
        assert!(!spring.update());
        assert_eq!(spring.position, 0.0);
    }

    #[test]
    fn test_snap_to_restarts_from_position() {
        let mut spring = Spring::default();
        spring.set_target(1.0);
        for _ in 0..5 {
            spring.update();
        }
        spring.snap_to(0.0, 1.0);
        assert_eq!(spring.position, 0.0);
        assert_eq!(spring.velocity, 0.0);
        assert!(spring.is_open());
        assert!(spring.update());
    }

    #[test]
    fn test_position_stays_in_unit_range() {
        let mut spring = Spring::new(0.5, 0.99);
        spring.set_target(1.0);
        for _ in 0..200 {
            spring.update();
            assert!((0.0..=1.0).contains(&spring.position));
        }
    }
}
