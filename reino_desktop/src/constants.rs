// Animation timing
pub const TICK_INTERVAL_MS: u64 = 16;
pub const MAX_FRAME_DT: f32 = 0.1;

// Spring physics defaults
pub const SPRING_STIFFNESS: f32 = 0.03;
pub const SPRING_DAMPING: f32 = 0.80;
pub const SPRING_THRESHOLD: f32 = 0.001;

// Starfield canvas
pub const STARFIELD_OPACITY: f32 = 0.5;

// Ambient particles
pub const PARTICLE_COUNT: usize = 30;
pub const PARTICLE_DRIFT: f32 = 0.035;

// Testimonial carousel
pub const CAROUSEL_INTERVAL: f32 = 5.0;

// World card hover pulse, radians per second
pub const HOVER_PULSE_RATE: f32 = 6.0;

// Loading screen
pub const LOADING_FADE_RATE: f32 = 0.1;
pub const LOADING_FADE_SNAP: f32 = 0.005;

// Navigation bar condenses once the page scrolls past this offset
pub const NAV_CONDENSE_OFFSET: f32 = 50.0;

// Ticket modal
pub const TICKET_LAUNCH_DELAY_MS: u64 = 300;
pub const MODAL_WIDTH: f32 = 380.0;

// UI dimensions
pub const CONTENT_MAX_WIDTH: f32 = 1080.0;
pub const BUTTON_BORDER_RADIUS: f32 = 24.0;
pub const CARD_BORDER_RADIUS: f32 = 16.0;
pub const FAB_SIZE: f32 = 56.0;
pub const WORLD_CARD_HEIGHT: f32 = 340.0;

// Worlds grid
pub const WORLD_CARD_COUNT: usize = 4;

// Default window size before the first resize event arrives
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;
