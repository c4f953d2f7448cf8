//! Numeric surfaces handed to the visualization collaborator.
//!
//! The core never issues rendering commands. A "visualization" here is a
//! dense grid of weapon-frame values plus its axes; whoever draws it owns
//! the pixels. Surfaces are tracked by opaque handles owned by the session
//! and released in bulk by `WeaponSession::close_visualizations`.

use spinup_core::grid::Grid;

/// Which weapon-frame quantity a surface samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceQuantity {
    /// Kinetic energy (J).
    Energy,
    /// Angular velocity (rad/s).
    Velocity,
}

/// Which swept parameter runs along the surface's columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepParameter {
    /// Weapon inertia (kg-m^2), gear ratio held at the operating point.
    Inertia,
    /// Gear ratio (out:in), inertia held at the operating point.
    GearRatio,
}

/// Opaque handle to an open surface. Never reused within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceHandle(pub(crate) u64);

/// Dense surface: time down the rows, the swept parameter across the
/// columns, `values[(r, c)]` at `(time[r], parameter_values[c])`.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceGrid {
    pub quantity: SurfaceQuantity,
    pub parameter: SweepParameter,
    /// Row axis: time samples (s).
    pub time: Vec<f64>,
    /// Column axis: inertia or gear-ratio samples.
    pub parameter_values: Vec<f64>,
    /// Sampled quantity, shape `time.len() x parameter_values.len()`.
    pub values: Grid,
}

impl SurfaceGrid {
    /// Largest value on the surface.
    #[must_use]
    pub fn peak(&self) -> f64 {
        self.values.max()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
