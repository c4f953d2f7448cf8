// spinup-core: Errors, numeric grids, sweep axes, and scenario config for Spinup.

pub mod config;
pub mod error;
pub mod grid;
pub mod sweep;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::config::{MotorConfig, ScenarioConfig, WeaponConfig};
    pub use crate::error::{ConfigError, DomainError, GridError, SessionError, SpinupError};
    pub use crate::grid::Grid;
    pub use crate::sweep::{linspace, logspace};
}
