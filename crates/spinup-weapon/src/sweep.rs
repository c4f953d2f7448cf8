//! Sweep policy around an operating point.
//!
//! The exploration ranges are a design decision, not plotting incidentals:
//! - Time: linear, zero to the spin-up target plus two seconds.
//! - Inertia: logarithmic, from a full decade below the target's order of
//!   magnitude up to twice the target.
//! - Gear ratio: logarithmic, a factor of four below to a factor of four
//!   above the target ratio.
//!
//! Every axis contains the operating point it was built around, so a
//! rendered surface always shows the user's own configuration.

use spinup_core::error::DomainError;
use spinup_core::sweep::{linspace, logspace};

use crate::session::OperatingPoint;

/// Samples per sweep axis.
pub const SWEEP_POINTS: usize = 30;

/// Seconds appended past the spin-up target on the time axis.
pub const TIME_PADDING: f64 = 2.0;

/// Factor swept below/above the target gear ratio.
const RATIO_SPAN: f64 = 4.0;

/// Linear time axis `[0, t_target + 2]`.
pub fn time_axis(t_target: f64) -> Result<Vec<f64>, DomainError> {
    if !(t_target >= 0.0 && t_target.is_finite()) {
        return Err(DomainError::SpinupTime(t_target));
    }
    Ok(linspace(0.0, t_target + TIME_PADDING, SWEEP_POINTS))
}

/// Logarithmic inertia axis spanning
/// `[10^(floor(log10 moi) - 1), 2 * moi]`.
pub fn inertia_axis(moi: f64) -> Result<Vec<f64>, DomainError> {
    if !(moi > 0.0 && moi.is_finite()) {
        return Err(DomainError::Inertia(moi));
    }
    let order = moi.log10();
    Ok(logspace(
        order.floor() - 1.0,
        order + 2.0_f64.log10(),
        SWEEP_POINTS,
    ))
}

/// Logarithmic gear-ratio axis spanning `[ratio / 4, ratio * 4]`.
pub fn ratio_axis(ratio: f64) -> Result<Vec<f64>, DomainError> {
    if !(ratio > 0.0 && ratio.is_finite()) {
        return Err(DomainError::GearRatio(ratio));
    }
    let center = ratio.log10();
    let span = RATIO_SPAN.log10();
    Ok(logspace(center - span, center + span, SWEEP_POINTS))
}

// ---------------------------------------------------------------------------
// SweepRanges
// ---------------------------------------------------------------------------

/// The three sweep axes bundled for a visualization collaborator.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepRanges {
    /// Time samples (s), linear.
    pub time: Vec<f64>,
    /// Inertia samples (kg-m^2), logarithmic.
    pub inertia: Vec<f64>,
    /// Gear-ratio samples (out:in), logarithmic.
    pub ratio: Vec<f64>,
}

impl SweepRanges {
    /// Build all three axes around an operating point.
    pub fn for_operating_point(op: &OperatingPoint) -> Result<Self, DomainError> {
        Ok(Self {
            time: time_axis(op.spinup_time)?,
            inertia: inertia_axis(op.weapon_moi)?,
            ratio: ratio_axis(op.gear_ratio)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
