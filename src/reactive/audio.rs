use bevy::prelude::*;

use crate::math::Real;

/// One frame of audio features, each roughly in `[0, 1]` after the extractor's
/// own normalization.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct AudioFrame {
    pub rms: Real,
    pub bass: Real,
    pub mid: Real,
    pub treble: Real,
    pub centroid: Real,
    /// A beat was detected on this frame.
    pub beat: bool,
}

impl AudioFrame {
    pub fn silent() -> Self {
        Self::default()
    }

    pub fn with_bass(mut self, bass: Real) -> Self {
        self.bass = bass;
        self
    }

    pub fn with_rms(mut self, rms: Real) -> Self {
        self.rms = rms;
        self
    }

    pub fn with_centroid(mut self, centroid: Real) -> Self {
        self.centroid = centroid;
        self
    }

    pub fn with_beat(mut self, beat: bool) -> Self {
        self.beat = beat;
        self
    }

    /// Clamp every feature into `[0, 1]`; non-finite values read as silence.
    pub fn sanitized(self) -> Self {
        fn unit(value: Real) -> Real {
            if value.is_finite() { value.clamp(0.0, 1.0) } else { 0.0 }
        }
        Self {
            rms: unit(self.rms),
            bass: unit(self.bass),
            mid: unit(self.mid),
            treble: unit(self.treble),
            centroid: unit(self.centroid),
            beat: self.beat,
        }
    }
}
