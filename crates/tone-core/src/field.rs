use std::f64::consts::PI;

use crate::grid::Point2;

/// Fraction of the amplitude removed at full tension.
pub const TENSION_DAMPING: f64 = 0.9;

/// Trait for scalar height fields over the sampling plane.
pub trait Field2 {
    fn evaluate(&self, point: Point2) -> f64;
}

/// Radially symmetric cosine wave centered on the origin.
///
/// Tension attenuates the amplitude linearly from `1.0` at `0.0` down to
/// `0.1` at `1.0`; frequency sets the number of half-waves per unit radius.
/// Neither parameter is clamped, so values outside the expected ranges still
/// produce a defined height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneField {
    tension: f64,
    frequency: f64,
}

impl ToneField {
    pub fn new(tension: f64, frequency: f64) -> Self {
        Self { tension, frequency }
    }

    pub fn tension(&self) -> f64 {
        self.tension
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    #[inline]
    pub fn amplitude(&self) -> f64 {
        1.0 - self.tension * TENSION_DAMPING
    }
}

impl Field2 for ToneField {
    #[inline]
    fn evaluate(&self, point: Point2) -> f64 {
        let radius = (point[0] * point[0] + point[1] * point[1]).sqrt();
        self.amplitude() * (self.frequency * radius * PI).cos()
    }
}

/// Convenience constructor for a tone field.
#[inline]
pub fn tone_field(tension: f64, frequency: f64) -> ToneField {
    ToneField::new(tension, frequency)
}

#[cfg(test)]
mod tests {
    use super::{Field2, tone_field};

    #[test]
    fn amplitude_spans_full_to_damped() {
        assert!((tone_field(0.0, 3.0).amplitude() - 1.0).abs() < 1e-12);
        assert!((tone_field(1.0, 3.0).amplitude() - 0.1).abs() < 1e-12);
        assert!((tone_field(0.5, 3.0).amplitude() - 0.55).abs() < 1e-12);
    }

    #[test]
    fn origin_value_equals_amplitude() {
        for frequency in [0.0, 1.0, 4.5, -7.0] {
            let field = tone_field(0.3, frequency);
            assert!((field.evaluate([0.0, 0.0]) - field.amplitude()).abs() < 1e-12);
        }
    }

    #[test]
    fn first_node_sits_at_half_wavelength() {
        let field = tone_field(0.0, 1.0);
        assert!(field.evaluate([0.5, 0.0]).abs() < 1e-12);
        assert!((field.evaluate([1.0, 0.0]) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn value_depends_only_on_radius() {
        let field = tone_field(0.2, 2.3);
        let a = field.evaluate([0.6, 0.0]);
        let b = field.evaluate([0.0, -0.6]);
        let c = field.evaluate([0.36, 0.48]);
        assert!((a - b).abs() < 1e-12);
        assert!((a - c).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_parameters_stay_finite() {
        let field = tone_field(2.0, -3.0);
        assert!((field.amplitude() + 0.8).abs() < 1e-12);
        assert!(field.evaluate([0.25, 0.75]).is_finite());
    }
}
