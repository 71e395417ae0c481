use bevy::prelude::*;

use super::constants::*;
use crate::math::{Real, Vector, vector};

/// Fixed configuration for the liquid solver.
///
/// Everything here is set once when the simulation is created; the values that
/// react to audio and input each frame live in [`SolverConstants`](super::SolverConstants).
#[derive(Resource, Clone, Debug)]
pub struct FluidParams {
    /// Simulation domain size. The domain spans `[0, width] x [0, height]`.
    pub domain: Vector,
    /// Hard upper bound on the particle population.
    pub max_particles: usize,

    /// Interaction cutoff `h`.
    pub smoothing_radius: Real,
    pub rest_density: Real,
    pub gas_constant: Real,

    pub base_gravity: Real,
    /// How much bass energy amplifies gravity (`g * (1 + bass * gain)`).
    pub gravity_bass_gain: Real,
    pub base_viscosity: Real,
    pub viscosity_bass_gain: Real,
    /// Frequency of the slow viscosity oscillation, in Hz.
    pub throb_hz: Real,
    pub throb_depth: Real,
    /// Extra viscosity multiplier added on beat ticks.
    pub beat_pulse: Real,

    /// Velocity damping applied once per `reference_dt` of simulated time.
    pub damping: Real,
    pub reference_dt: Real,
    /// Speed clamp applied during integration.
    pub max_speed: Real,

    pub wall_restitution: Real,
    pub top_restitution: Real,
    pub floor_restitution: Real,
    /// Horizontal velocity factor applied when a particle hits the floor.
    pub floor_friction: Real,

    pub settle_epsilon: Real,
    pub settle_speed: Real,

    pub spawn_velocity_jitter: Real,
    pub size_range: (Real, Real),
    pub size_rms_gain: Real,
    pub drag_spawn_count: usize,
    pub drag_spawn_spread: Real,
    pub click_burst: usize,
    /// Clicks older than this are dropped from the input state.
    pub click_retention: Real,
    pub auto_spawn_threshold: Real,
    pub auto_spawn_chance: Real,
    pub auto_spawn_count: usize,

    pub hue_speed: Real,
    pub hue_centroid_span: Real,
    pub alpha_density_scale: Real,
    pub min_alpha: Real,

    /// Seed for spawn jitter and the autonomous spawn roll. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for FluidParams {
    fn default() -> Self {
        Self {
            domain: vector(DOMAIN_WIDTH, DOMAIN_HEIGHT),
            max_particles: MAX_PARTICLES,
            smoothing_radius: SMOOTHING_RADIUS,
            rest_density: REST_DENSITY,
            gas_constant: GAS_CONSTANT,
            base_gravity: BASE_GRAVITY,
            gravity_bass_gain: GRAVITY_BASS_GAIN,
            base_viscosity: BASE_VISCOSITY,
            viscosity_bass_gain: VISCOSITY_BASS_GAIN,
            throb_hz: THROB_HZ,
            throb_depth: THROB_DEPTH,
            beat_pulse: BEAT_PULSE,
            damping: DAMPING,
            reference_dt: REFERENCE_DT,
            max_speed: MAX_SPEED,
            wall_restitution: WALL_RESTITUTION,
            top_restitution: TOP_RESTITUTION,
            floor_restitution: FLOOR_RESTITUTION,
            floor_friction: FLOOR_FRICTION,
            settle_epsilon: SETTLE_EPSILON,
            settle_speed: SETTLE_SPEED,
            spawn_velocity_jitter: SPAWN_VELOCITY_JITTER,
            size_range: (MIN_PARTICLE_SIZE, MAX_PARTICLE_SIZE),
            size_rms_gain: SIZE_RMS_GAIN,
            drag_spawn_count: DRAG_SPAWN_COUNT,
            drag_spawn_spread: DRAG_SPAWN_SPREAD,
            click_burst: CLICK_BURST,
            click_retention: CLICK_RETENTION,
            auto_spawn_threshold: AUTO_SPAWN_THRESHOLD,
            auto_spawn_chance: AUTO_SPAWN_CHANCE,
            auto_spawn_count: AUTO_SPAWN_COUNT,
            hue_speed: HUE_SPEED,
            hue_centroid_span: HUE_CENTROID_SPAN,
            alpha_density_scale: ALPHA_DENSITY_SCALE,
            min_alpha: MIN_ALPHA,
            seed: None,
        }
    }
}

impl FluidParams {
    /// Default tuning: a thick, slow liquid.
    pub fn honey() -> Self {
        Self::default()
    }

    /// Thinner liquid with less cohesion and livelier splashes.
    pub fn water() -> Self {
        Self {
            base_viscosity: 0.8,
            viscosity_bass_gain: 1.0,
            damping: 0.995,
            ..Self::default()
        }
    }

    pub fn with_domain(mut self, width: Real, height: Real) -> Self {
        self.domain = vector(width, height);
        self
    }

    pub fn with_max_particles(mut self, max_particles: usize) -> Self {
        self.max_particles = max_particles;
        self
    }

    pub fn with_smoothing_radius(mut self, radius: Real) -> Self {
        self.smoothing_radius = radius;
        self
    }

    pub fn with_equation_of_state(mut self, rest_density: Real, gas_constant: Real) -> Self {
        self.rest_density = rest_density;
        self.gas_constant = gas_constant;
        self
    }

    pub fn with_gravity(mut self, gravity: Real) -> Self {
        self.base_gravity = gravity;
        self
    }

    pub fn with_viscosity(mut self, viscosity: Real) -> Self {
        self.base_viscosity = viscosity;
        self
    }

    pub fn with_damping(mut self, damping: Real) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_spawn_velocity_jitter(mut self, jitter: Real) -> Self {
        self.spawn_velocity_jitter = jitter;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn width(&self) -> Real {
        self.domain.x
    }

    pub fn height(&self) -> Real {
        self.domain.y
    }

    /// Return a copy with out-of-range values pulled back into a usable range.
    ///
    /// Bad values are never rejected; each correction is logged. Non-finite
    /// values always fall back to the default.
    pub fn validated(mut self) -> Self {
        let finite_domain = self.domain.x.is_finite() && self.domain.y.is_finite();
        if !(finite_domain && self.domain.x > 0.0 && self.domain.y > 0.0) {
            warn!("invalid domain {:?}, using defaults", self.domain);
            self.domain = vector(DOMAIN_WIDTH, DOMAIN_HEIGHT);
        }
        if self.max_particles == 0 {
            warn!("max_particles must be at least 1");
            self.max_particles = 1;
        }

        repair("smoothing_radius", &mut self.smoothing_radius, SMOOTHING_RADIUS, |v| v > 0.0);
        repair("rest_density", &mut self.rest_density, REST_DENSITY, |v| v > 0.0);
        repair("gas_constant", &mut self.gas_constant, GAS_CONSTANT, |v| v >= 0.0);

        repair("base_gravity", &mut self.base_gravity, BASE_GRAVITY, |_| true);
        repair("gravity_bass_gain", &mut self.gravity_bass_gain, GRAVITY_BASS_GAIN, |_| true);
        repair("base_viscosity", &mut self.base_viscosity, BASE_VISCOSITY, |v| v >= 0.0);
        repair("viscosity_bass_gain", &mut self.viscosity_bass_gain, VISCOSITY_BASS_GAIN, |_| true);
        repair("throb_hz", &mut self.throb_hz, THROB_HZ, |v| v >= 0.0);
        repair("throb_depth", &mut self.throb_depth, THROB_DEPTH, |v| v >= 0.0);
        repair("beat_pulse", &mut self.beat_pulse, BEAT_PULSE, |v| v >= 0.0);

        repair("damping", &mut self.damping, DAMPING, |_| true);
        let damping = self.damping.clamp(0.0, 1.0);
        if damping != self.damping {
            warn!("damping {} clamped to {}", self.damping, damping);
            self.damping = damping;
        }
        repair("reference_dt", &mut self.reference_dt, REFERENCE_DT, |v| v > 0.0);
        repair("max_speed", &mut self.max_speed, MAX_SPEED, |v| v > 0.0);

        let unit = |v: Real| (0.0..=1.0).contains(&v);
        repair("wall_restitution", &mut self.wall_restitution, WALL_RESTITUTION, unit);
        repair("top_restitution", &mut self.top_restitution, TOP_RESTITUTION, unit);
        repair("floor_restitution", &mut self.floor_restitution, FLOOR_RESTITUTION, unit);
        repair("floor_friction", &mut self.floor_friction, FLOOR_FRICTION, unit);
        repair("settle_epsilon", &mut self.settle_epsilon, SETTLE_EPSILON, |v| v >= 0.0);
        repair("settle_speed", &mut self.settle_speed, SETTLE_SPEED, |v| v >= 0.0);

        let (min_size, max_size) = self.size_range;
        if !(min_size.is_finite() && max_size.is_finite() && min_size > 0.0 && max_size >= min_size) {
            warn!("invalid size range {:?}, using defaults", self.size_range);
            self.size_range = (MIN_PARTICLE_SIZE, MAX_PARTICLE_SIZE);
        }
        repair("spawn_velocity_jitter", &mut self.spawn_velocity_jitter, SPAWN_VELOCITY_JITTER, |v| v >= 0.0);
        repair("size_rms_gain", &mut self.size_rms_gain, SIZE_RMS_GAIN, |v| v >= 0.0);
        repair("drag_spawn_spread", &mut self.drag_spawn_spread, DRAG_SPAWN_SPREAD, |v| v >= 0.0);
        repair("click_retention", &mut self.click_retention, CLICK_RETENTION, |v| v >= 0.0);
        repair("auto_spawn_threshold", &mut self.auto_spawn_threshold, AUTO_SPAWN_THRESHOLD, |_| true);
        repair("auto_spawn_chance", &mut self.auto_spawn_chance, AUTO_SPAWN_CHANCE, |v| v >= 0.0);

        repair("hue_speed", &mut self.hue_speed, HUE_SPEED, |_| true);
        repair("hue_centroid_span", &mut self.hue_centroid_span, HUE_CENTROID_SPAN, |_| true);
        repair("alpha_density_scale", &mut self.alpha_density_scale, ALPHA_DENSITY_SCALE, |v| v > 0.0);
        repair("min_alpha", &mut self.min_alpha, MIN_ALPHA, unit);
        self
    }
}

/// Replace `value` with `fallback` unless it is finite and passes `valid`.
fn repair(name: &str, value: &mut Real, fallback: Real, valid: impl Fn(Real) -> bool) {
    if !(value.is_finite() && valid(*value)) {
        warn!("{} = {} is out of range, using {}", name, value, fallback);
        *value = fallback;
    }
}
