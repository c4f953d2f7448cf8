//! Closed-form DC motor and drivetrain models for weapon spin-up analysis.
//!
//! Pure computation with no I/O. Given a linearized torque-speed curve
//! `torque = a - b * velocity` and a constant inertial load, the spin-up
//! trajectory has a closed-form solution; no numerical integration is
//! involved anywhere in this crate.
//!
//! # Evaluation Pipeline
//!
//! ```text
//! Nameplate -> Torque Curve -> Gear Train -> Weapon-frame quantities
//! (kv, amps)   (a, b)          (I/g^2, w/g)  (velocity, energy, ...)
//! ```
//!
//! # Quick Start
//!
//! ```
//! use spinup_motor::prelude::*;
//!
//! let specs = MotorSpecs::new(900.0, 37.0, 14.8, 11.1);
//! let curve = specs.torque_curve()?;
//! let gears = GearTrain::new(0.8)?;
//!
//! let reflected = gears.reflected_inertia(5.6e-4)?;
//! let weapon_velocity = gears.output_velocity(curve.velocity(4.0, reflected)?);
//! assert!(weapon_velocity > 0.0);
//! # Ok::<(), spinup_core::error::DomainError>(())
//! ```

pub mod curve;
pub mod gearing;
pub mod presets;
pub mod specs;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::curve::TorqueCurve;
    pub use crate::gearing::GearTrain;
    pub use crate::presets;
    pub use crate::specs::MotorSpecs;
}
