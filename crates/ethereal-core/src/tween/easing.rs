//! Pure easing functions
//!
//! Maps input progress [0, 1] to output [0, 1] with various acceleration curves.

pub use crate::config::EasingType;

impl EasingType {
    /// Apply the easing function to a progress value in [0, 1]
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => if t < 1.0 { 0.0 } else { 1.0 },
            EasingType::Linear => t,
            EasingType::Cubic => cubic_ease_out(t),
            EasingType::Quintic => quintic_ease_out(t),
            EasingType::EaseOut => exponential_ease_out(t),
            EasingType::Power2InOut => power_in_out(t, 3),
            EasingType::Power4InOut => power_in_out(t, 5),
        }
    }
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Quintic ease-out: f(t) = 1 - (1-t)⁵
#[inline]
fn quintic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

/// Exponential ease-out: f(t) = 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

/// Symmetric polynomial ease-in-out of the given degree
#[inline]
fn power_in_out(t: f64, degree: i32) -> f64 {
    if t < 0.5 {
        0.5 * (2.0 * t).powi(degree)
    } else {
        1.0 - 0.5 * (2.0 * (1.0 - t)).powi(degree)
    }
}
