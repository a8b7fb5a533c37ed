use super::Spring;
use crate::constants::{
    CAROUSEL_INTERVAL, HOVER_PULSE_RATE, LOADING_FADE_RATE, LOADING_FADE_SNAP, MAX_FRAME_DT,
    PARTICLE_COUNT, PARTICLE_DRIFT,
};
use iced::widget::canvas;
use iced::Point;
use rand::Rng;
use reino_core::starfield::{pointer_offset, FramePlan, Scene, Vec2};
use reino_core::{LoadingProgress, Tier};
use std::time::Duration;

/// State for the constellation starfield canvas.
///
/// The clock only moves while the window is focused, so a window in the
/// background stops twinkling and costs nothing per tick.
#[derive(Debug)]
pub struct StarfieldState {
    pub scene: Scene,
    pub clock: f32,
    pub pointer: Vec2,
    pub visible: bool,
    pub cache: canvas::Cache,
}

impl StarfieldState {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            scene: Scene::build(width, height),
            clock: 0.0,
            pointer: Vec2::ZERO,
            visible: true,
            cache: canvas::Cache::default(),
        }
    }

    /// Advances the twinkle clock. Returns true if a redraw is needed.
    /// Long gaps between ticks are clamped so a stall never fast-forwards
    /// the animation.
    pub fn update(&mut self, dt: f32) -> bool {
        if !self.visible {
            return false;
        }
        self.clock += dt.min(MAX_FRAME_DT);
        self.cache.clear();
        true
    }

    /// Rebuilds the scene for a new surface size. The clock and pointer
    /// survive the rebuild; star placement does not.
    pub fn rebuild(&mut self, width: f32, height: f32) {
        self.scene = Scene::build(width, height);
        self.cache.clear();
    }

    /// Records the pointer position in surface coordinates.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = pointer_offset(x, y, self.scene.width, self.scene.height);
        self.cache.clear();
    }

    pub fn tier(&self) -> Tier {
        self.scene.tier()
    }

    /// Plans the current frame for the canvas layer.
    pub fn plan(&self, touch: bool) -> FramePlan {
        self.scene.frame(self.clock, self.pointer, touch)
    }
}

/// One drifting dust mote. Positions are normalized to the surface.
#[derive(Debug, Clone, Copy)]
pub struct ParticleSeed {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub phase: f32,
    pub size: f32,
}

/// State for the ambient particle layer behind the page content.
#[derive(Debug)]
pub struct ParticleFieldState {
    pub seeds: Vec<ParticleSeed>,
    pub tick: f32,
    pub cache: canvas::Cache,
}

impl Default for ParticleFieldState {
    fn default() -> Self {
        let mut rng = rand::thread_rng();
        let seeds = (0..PARTICLE_COUNT)
            .map(|_| ParticleSeed {
                x: rng.gen::<f32>(),
                y: rng.gen::<f32>(),
                speed: PARTICLE_DRIFT * rng.gen_range(0.4..1.0),
                phase: rng.gen_range(0.0..std::f32::consts::TAU),
                size: rng.gen_range(1.0..2.5),
            })
            .collect();
        Self {
            seeds,
            tick: 0.0,
            cache: canvas::Cache::default(),
        }
    }
}

impl ParticleFieldState {
    /// Advances the drift animation. Returns true if a redraw is needed.
    pub fn update(&mut self, dt: f32) -> bool {
        self.tick += dt.min(MAX_FRAME_DT);
        self.cache.clear();
        true
    }
}

/// State for the intro loading screen: a timed progress counter from
/// the core crate plus a fade-out once it finishes.
#[derive(Debug)]
pub struct LoadingState {
    pub progress: LoadingProgress,
    pub opacity: f32,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self {
            progress: LoadingProgress::default(),
            opacity: 1.0,
        }
    }
}

impl LoadingState {
    /// Advances the counter, then the fade once the counter completes.
    /// Returns true while the overlay still needs ticks.
    pub fn update(&mut self, dt: f32) -> bool {
        if self.is_dismissed() {
            return false;
        }
        if !self.progress.is_complete() {
            self.progress.advance(Duration::from_secs_f32(dt.max(0.0)));
            return true;
        }
        self.opacity += (0.0 - self.opacity) * LOADING_FADE_RATE;
        if self.opacity < LOADING_FADE_SNAP {
            self.opacity = 0.0;
        }
        true
    }

    pub fn skip(&mut self) {
        self.progress.skip();
    }

    /// True once the fade has finished and the overlay left the tree.
    pub fn is_dismissed(&self) -> bool {
        self.progress.is_complete() && self.opacity == 0.0
    }

    pub fn is_visible(&self) -> bool {
        !self.is_dismissed()
    }
}

/// State for the auto-advancing testimonial carousel.
#[derive(Debug)]
pub struct CarouselState {
    pub active: usize,
    pub timer: f32,
    pub slide: Spring,
    len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        let mut slide = Spring::default();
        slide.snap_to(1.0, 1.0);
        Self {
            active: 0,
            timer: 0.0,
            slide,
            len,
        }
    }

    /// Advances the dwell timer and the slide fade. Returns true if
    /// still animating. The dwell measures wall-clock time, so unlike
    /// the springs it takes the delta unclamped.
    pub fn update(&mut self, dt: f32) -> bool {
        self.timer += dt.max(0.0);
        if self.timer >= CAROUSEL_INTERVAL {
            self.advance();
        }
        self.slide.update()
    }

    /// Moves to the next slide, wrapping at the end.
    pub fn advance(&mut self) {
        if self.len == 0 {
            return;
        }
        self.active = (self.active + 1) % self.len;
        self.timer = 0.0;
        self.slide.snap_to(0.0, 1.0);
    }

    /// Jumps to a slide from the pager dots and restarts the dwell timer.
    pub fn select(&mut self, index: usize) {
        if index < self.len && index != self.active {
            self.active = index;
            self.slide.snap_to(0.0, 1.0);
        }
        self.timer = 0.0;
    }

    /// Fade-in progress of the current slide.
    pub fn fade(&self) -> f32 {
        self.slide.position
    }
}

/// State for the ticket modal overlay animation.
#[derive(Debug, Default)]
pub struct ModalState {
    pub spring: Spring,
}

impl ModalState {
    /// Updates the modal animation. Returns true if still animating.
    pub fn update(&mut self) -> bool {
        self.spring.update()
    }

    pub fn open(&mut self) {
        self.spring.set_target(1.0);
    }

    pub fn close(&mut self) {
        self.spring.set_target(0.0);
    }

    pub fn is_open(&self) -> bool {
        self.spring.is_open()
    }

    /// Current animation progress (0.0 to 1.0).
    pub fn progress(&self) -> f32 {
        self.spring.position
    }
}

/// State for the FAQ accordion. At most one entry is open; opening
/// another closes the previous one. The first entry starts open.
#[derive(Debug)]
pub struct FaqState {
    pub open: Option<usize>,
    pub reveal: Spring,
}

impl Default for FaqState {
    fn default() -> Self {
        let mut reveal = Spring::default();
        reveal.snap_to(1.0, 1.0);
        Self {
            open: Some(0),
            reveal,
        }
    }
}

impl FaqState {
    /// Toggles an entry. A second click on the open entry closes it.
    pub fn toggle(&mut self, index: usize) {
        if self.open == Some(index) {
            self.reveal.set_target(0.0);
        } else {
            self.open = Some(index);
            self.reveal.snap_to(0.0, 1.0);
        }
    }

    /// Updates the reveal animation. Returns true if still animating.
    pub fn update(&mut self) -> bool {
        let animating = self.reveal.update();
        if !animating && self.reveal.target == 0.0 {
            self.open = None;
        }
        animating
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Reveal progress of the open entry (0.0 to 1.0).
    pub fn progress(&self) -> f32 {
        self.reveal.position
    }
}

/// State for a tilt-responsive world card.
#[derive(Debug, Default)]
pub struct WorldCardState {
    pub mouse_position: Point,
    pub is_hovered: bool,
    pub hover_tick: f32,
    pub cache: canvas::Cache,
}

impl WorldCardState {
    /// Updates the card hover pulse. Returns true if a redraw is needed.
    pub fn update(&mut self, dt: f32) -> bool {
        if self.is_hovered {
            self.hover_tick += dt.min(MAX_FRAME_DT) * HOVER_PULSE_RATE;
            self.cache.clear();
            true
        } else {
            false
        }
    }

    /// Sets the hover state.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.is_hovered = hovered;
        if !hovered {
            self.hover_tick = 0.0;
        }
        self.cache.clear();
    }

    /// Sets the mouse position for tilt calculation.
    pub fn set_mouse_position(&mut self, position: Point) {
        self.mouse_position = position;
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hidden_starfield_ignores_ticks() {
        let mut state = StarfieldState::new(1280.0, 800.0);
        state.visible = false;
        let before = state.clock;
        assert!(!state.update(0.016));
        assert_eq!(state.clock, before);
    }

    #[test]
    fn test_stalled_frame_is_clamped() {
        let mut state = StarfieldState::new(1280.0, 800.0);
        state.update(10.0);
        assert_eq!(state.clock, MAX_FRAME_DT);
    }

    #[test]
    fn test_rebuild_keeps_clock_and_pointer() {
        let mut state = StarfieldState::new(1280.0, 800.0);
        state.update(0.016);
        state.set_pointer(320.0, 200.0);
        let clock = state.clock;
        let pointer = state.pointer;

        state.rebuild(500.0, 900.0);
        assert_eq!(state.clock, clock);
        assert_eq!(state.pointer, pointer);
        assert_eq!(state.scene.width, 500.0);
        assert_eq!(state.tier(), Tier::Narrow);
    }

    #[test]
    fn test_pointer_center_is_neutral() {
        let mut state = StarfieldState::new(1000.0, 600.0);
        state.set_pointer(500.0, 300.0);
        assert_eq!(state.pointer, Vec2::ZERO);
    }

    #[test]
    fn test_carousel_auto_advances_and_wraps() {
        let mut carousel = CarouselState::new(3);
        carousel.update(CAROUSEL_INTERVAL);
        assert_eq!(carousel.active, 1);
        assert_eq!(carousel.timer, 0.0);

        carousel.advance();
        carousel.advance();
        assert_eq!(carousel.active, 0);
    }

    #[test]
    fn test_carousel_select_restarts_dwell() {
        let mut carousel = CarouselState::new(5);
        carousel.timer = 3.0;
        carousel.select(2);
        assert_eq!(carousel.active, 2);
        assert_eq!(carousel.timer, 0.0);
        assert_eq!(carousel.fade(), 0.0);

        carousel.select(9);
        assert_eq!(carousel.active, 2);
    }

    #[test]
    fn test_faq_starts_with_first_entry_revealed() {
        let faq = FaqState::default();
        assert!(faq.is_open(0));
        assert_eq!(faq.progress(), 1.0);
    }

    #[test]
    fn test_faq_keeps_a_single_entry_open() {
        let mut faq = FaqState::default();
        faq.toggle(1);
        assert!(faq.is_open(1));
        assert!(!faq.is_open(0));

        faq.toggle(3);
        assert!(faq.is_open(3));
        assert!(!faq.is_open(1));

        faq.toggle(3);
        while faq.update() {}
        assert_eq!(faq.open, None);
    }

    #[test]
    fn test_modal_opens_and_settles() {
        let mut modal = ModalState::default();
        modal.open();
        assert!(modal.is_open());
        while modal.update() {}
        assert_eq!(modal.progress(), 1.0);

        modal.close();
        while modal.update() {}
        assert_eq!(modal.progress(), 0.0);
    }

    #[test]
    fn test_loading_fades_after_completion() {
        let mut loading = LoadingState::default();
        loading.update(5.0);
        assert!(loading.progress.is_complete());
        assert!(loading.is_visible());

        let before = loading.opacity;
        loading.update(0.016);
        assert!(loading.opacity < before);

        let mut guard = 0;
        while loading.update(0.016) {
            guard += 1;
            assert!(guard < 10_000, "fade never settled");
        }
        assert!(loading.is_dismissed());
    }

    #[test]
    fn test_loading_skip_completes_immediately() {
        let mut loading = LoadingState::default();
        loading.update(0.5);
        loading.skip();
        assert!(loading.progress.is_complete());
        assert_eq!(loading.progress.percent(), 100.0);
    }

    #[test]
    fn test_world_card_count_matches_content() {
        assert_eq!(crate::constants::WORLD_CARD_COUNT, reino_core::content::WORLDS.len());
    }

    #[test]
    fn test_world_card_pulses_only_while_hovered() {
        let mut card = WorldCardState::default();
        assert!(!card.update(0.016));
        assert_eq!(card.hover_tick, 0.0);

        card.set_hovered(true);
        assert!(card.update(0.016));
        assert!(card.hover_tick > 0.0);

        card.set_hovered(false);
        assert_eq!(card.hover_tick, 0.0);
    }
}
