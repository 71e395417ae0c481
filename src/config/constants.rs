// Default tuning for the viscous liquid, in screen units (pixels, seconds).
// `y` grows downward, so gravity is positive.

// Domain
pub const DOMAIN_WIDTH: f32 = 800.0;
pub const DOMAIN_HEIGHT: f32 = 600.0;
pub const MAX_PARTICLES: usize = 400;

// Kernel and equation of state
pub const SMOOTHING_RADIUS: f32 = 28.0;
pub const REST_DENSITY: f32 = 1.2;
pub const GAS_CONSTANT: f32 = 400.0;
pub const DENSITY_FLOOR: f32 = 1.0;

// Gravity and viscosity
pub const BASE_GRAVITY: f32 = 500.0;
pub const GRAVITY_BASS_GAIN: f32 = 1.5;
pub const BASE_VISCOSITY: f32 = 3.0;
pub const VISCOSITY_BASS_GAIN: f32 = 2.0;
pub const THROB_HZ: f32 = 0.5;
pub const THROB_DEPTH: f32 = 0.25;
pub const BEAT_PULSE: f32 = 0.6;

// Integration
pub const DAMPING: f32 = 0.99;
pub const REFERENCE_DT: f32 = 1.0 / 60.0;
pub const MAX_SPEED: f32 = 1200.0;

// Boundary restitution
pub const WALL_RESTITUTION: f32 = 0.5;
pub const TOP_RESTITUTION: f32 = 0.3;
pub const FLOOR_RESTITUTION: f32 = 0.3;
pub const FLOOR_FRICTION: f32 = 0.8;

// Settling
pub const SETTLE_EPSILON: f32 = 1.0;
pub const SETTLE_SPEED: f32 = 15.0;

// Spawning
pub const SPAWN_VELOCITY_JITTER: f32 = 30.0;
pub const MIN_PARTICLE_SIZE: f32 = 4.0;
pub const MAX_PARTICLE_SIZE: f32 = 9.0;
pub const SIZE_RMS_GAIN: f32 = 0.8;
pub const DRAG_SPAWN_COUNT: usize = 2;
pub const DRAG_SPAWN_SPREAD: f32 = 6.0;
pub const CLICK_BURST: usize = 12;
pub const CLICK_RETENTION: f32 = 0.25;
pub const AUTO_SPAWN_THRESHOLD: f32 = 0.35;
pub const AUTO_SPAWN_CHANCE: f32 = 0.5;
pub const AUTO_SPAWN_COUNT: usize = 3;

// Colour
pub const HUE_SPEED: f32 = 12.0;
pub const HUE_CENTROID_SPAN: f32 = 90.0;
pub const ALPHA_DENSITY_SCALE: f32 = 4.0;
pub const MIN_ALPHA: f32 = 0.25;

// Longest frame the solver will integrate in one step, in seconds.
pub const MAX_FRAME_DT: f32 = 1.0 / 20.0;
