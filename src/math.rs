use bevy::math::Vec2;

pub type Real = f32;

pub type Vector = Vec2;
pub type Point = Vec2;

/// Distances at or below this are treated as coincident.
pub const DISTANCE_EPSILON: Real = 1.0e-4;

#[inline(always)]
pub fn zero_vector() -> Vector {
    Vec2::ZERO
}

#[inline(always)]
pub fn vector(x: Real, y: Real) -> Vector {
    Vec2::new(x, y)
}

/// Unit vector pointing down the screen (`+y`), the direction gravity pulls.
#[inline(always)]
pub fn down() -> Vector {
    Vec2::Y
}

#[inline(always)]
pub fn is_finite_vector(v: Vector) -> bool {
    v.x.is_finite() && v.y.is_finite()
}

/// Scale `v` down so its length does not exceed `max_length`.
#[inline]
pub fn clamp_length(v: Vector, max_length: Real) -> Vector {
    let length_squared = v.length_squared();
    if length_squared > max_length * max_length && length_squared > 0.0 {
        v * (max_length / length_squared.sqrt())
    } else {
        v
    }
}

/// Wrap an angle in degrees into `[0, 360)`.
#[inline]
pub fn wrap_degrees(angle: Real) -> Real {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
