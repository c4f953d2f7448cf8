//! Lossless gear stage between motor and weapon.
//!
//! # Gear Ratio Convention
//!
//! `ratio = N_output / N_input` (out:in):
//! - `ratio > 1` means torque multiplication / speed reduction at the weapon.
//! - Weapon inertia seen by the motor = actual inertia / `ratio^2`.
//! - Weapon velocity = motor velocity / `ratio`.
//! - Weapon torque = motor torque * `ratio`.
//!
//! The stage is idealized: no efficiency loss, no backlash. Energy computed
//! on either side of the gears therefore agrees by construction.

use spinup_core::error::DomainError;

/// Single lossless gear stage with a positive out:in ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GearTrain {
    ratio: f64,
}

impl GearTrain {
    /// Create a gear stage. Fails on non-positive or non-finite ratio.
    pub fn new(ratio: f64) -> Result<Self, DomainError> {
        if ratio > 0.0 && ratio.is_finite() {
            Ok(Self { ratio })
        } else {
            Err(DomainError::GearRatio(ratio))
        }
    }

    /// Direct drive (1:1).
    #[must_use]
    pub const fn direct() -> Self {
        Self { ratio: 1.0 }
    }

    /// Gear ratio (out:in).
    #[must_use]
    pub const fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Weapon inertia reflected to the motor side: `inertia / ratio^2`.
    pub fn reflected_inertia(&self, inertia: f64) -> Result<f64, DomainError> {
        if inertia > 0.0 && inertia.is_finite() {
            Ok(inertia / (self.ratio * self.ratio))
        } else {
            Err(DomainError::Inertia(inertia))
        }
    }

    /// Transform motor velocity to weapon velocity.
    #[must_use]
    pub fn output_velocity(&self, motor_velocity: f64) -> f64 {
        motor_velocity / self.ratio
    }

    /// Transform motor torque to weapon torque.
    #[must_use]
    pub fn output_torque(&self, motor_torque: f64) -> f64 {
        motor_torque * self.ratio
    }
}

impl Default for GearTrain {
    fn default() -> Self {
        Self::direct()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
