//! Weapon-system model: a geared DC motor spinning up a rotational weapon.
//!
//! [`session::WeaponSession`] owns the mutable per-session state (the
//! current motor model and any open visualization surfaces) and answers
//! weapon-frame queries by composing the closed-form motor model with a
//! lossless gear reflection. The surrounding sweep policy lives in
//! [`sweep`]; the numeric surfaces handed to a plotting front-end live in
//! [`surface`].
//!
//! # Quick Start
//!
//! ```
//! use spinup_motor::presets::motors;
//! use spinup_weapon::prelude::*;
//!
//! let mut session = WeaponSession::new();
//! session.init_motor(motors::as2814_900kv())?;
//!
//! let op = OperatingPoint::new(4.0, 5.6e-4, 0.8);
//! let result = session.evaluate(&op)?;
//! assert!(result.energy > 0.0);
//! assert!(result.velocity > 0.0);
//! # Ok::<(), spinup_core::error::SpinupError>(())
//! ```

pub mod session;
pub mod surface;
pub mod sweep;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::session::{MotorSummary, OperatingPoint, OperatingPointResult, WeaponSession};
    pub use crate::surface::{SurfaceGrid, SurfaceHandle, SurfaceQuantity, SweepParameter};
    pub use crate::sweep::{SweepRanges, SWEEP_POINTS};
}
