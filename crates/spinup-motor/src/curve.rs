//! Linearized DC motor torque curve with closed-form spin-up dynamics.
//!
//! Physics: `torque(w) = a - b * w`. Driving a constant inertial load `I` at
//! constant voltage gives the first-order ODE `I * dw/dt = a - b * w`, whose
//! solution is
//!
//! ```text
//! velocity(t, I) = (a / b) * (1 - exp(-b * t / I))
//! ```
//!
//! Every other quantity (torque, power, kinetic energy, angular momentum)
//! is derived from that velocity. All operations come in a scalar form and
//! a [`Grid`] form; grid operands follow the broadcast rules of
//! [`Grid::zip_with`].

use spinup_core::error::{DomainError, SpinupError};
use spinup_core::grid::Grid;

/// Reject non-positive or non-finite inertia before it reaches a divide.
fn check_inertia(inertia: f64) -> Result<f64, DomainError> {
    if inertia > 0.0 && inertia.is_finite() {
        Ok(inertia)
    } else {
        Err(DomainError::Inertia(inertia))
    }
}

/// Grid version of [`check_inertia`]: every element must pass.
fn check_inertia_grid(inertia: &Grid) -> Result<(), DomainError> {
    match inertia.iter().find(|v| !(*v > 0.0 && v.is_finite())) {
        Some(bad) => Err(DomainError::Inertia(bad)),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// TorqueCurve
// ---------------------------------------------------------------------------

/// Immutable torque-curve constants `(a, b)` for `torque = a - b * velocity`.
///
/// `a` is the stall torque at the operating voltage (Nm); `b` is the
/// torque-speed slope magnitude (Nm-s/rad). `b > 0` is enforced at
/// construction, so the terminal velocity `a / b` is always defined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TorqueCurve {
    a: f64,
    b: f64,
}

impl TorqueCurve {
    /// Create a torque curve. Fails on non-finite `a` or non-positive `b`.
    pub fn new(a: f64, b: f64) -> Result<Self, DomainError> {
        if !a.is_finite() {
            return Err(DomainError::StallTorque(a));
        }
        if !(b > 0.0 && b.is_finite()) {
            return Err(DomainError::DecayConstant(b));
        }
        Ok(Self { a, b })
    }

    /// Stall torque at the operating voltage (Nm).
    #[must_use]
    pub const fn stall_torque(&self) -> f64 {
        self.a
    }

    /// Torque-speed slope magnitude (Nm-s/rad).
    #[must_use]
    pub const fn decay_rate(&self) -> f64 {
        self.b
    }

    /// Unloaded terminal velocity `a / b` (rad/s), the `t -> inf` asymptote.
    #[must_use]
    pub fn terminal_velocity(&self) -> f64 {
        self.a / self.b
    }

    fn velocity_unchecked(&self, t: f64, inertia: f64) -> f64 {
        self.a / self.b * (1.0 - (-self.b * t / inertia).exp())
    }

    // -- scalar operations --

    /// Motor velocity after `t` seconds against load `inertia` (rad/s).
    pub fn velocity(&self, t: f64, inertia: f64) -> Result<f64, DomainError> {
        let inertia = check_inertia(inertia)?;
        Ok(self.velocity_unchecked(t, inertia))
    }

    /// Output torque at time `t` (Nm). Decreases from `a` toward zero.
    pub fn torque(&self, t: f64, inertia: f64) -> Result<f64, DomainError> {
        let v = self.velocity(t, inertia)?;
        Ok(self.b.mul_add(-v, self.a))
    }

    /// Mechanical output power at time `t` (W).
    ///
    /// Canonical form is the velocity-torque product; the equivalent
    /// exponential identity from the curve algebra is checked by test.
    pub fn power(&self, t: f64, inertia: f64) -> Result<f64, DomainError> {
        let v = self.velocity(t, inertia)?;
        Ok(v * self.b.mul_add(-v, self.a))
    }

    /// Kinetic energy stored in the load at time `t` (J).
    pub fn energy(&self, t: f64, inertia: f64) -> Result<f64, DomainError> {
        let v = self.velocity(t, inertia)?;
        Ok(0.5 * inertia * v * v)
    }

    /// Angular momentum of the load at time `t` (kg-m^2/s).
    pub fn momentum(&self, t: f64, inertia: f64) -> Result<f64, DomainError> {
        let v = self.velocity(t, inertia)?;
        Ok(inertia * v)
    }

    // -- grid operations --

    /// Grid form of [`TorqueCurve::velocity`].
    pub fn velocity_grid(&self, t: &Grid, inertia: &Grid) -> Result<Grid, SpinupError> {
        check_inertia_grid(inertia)?;
        let v = t.zip_with(inertia, |t, i| self.velocity_unchecked(t, i))?;
        Ok(v)
    }

    /// Grid form of [`TorqueCurve::torque`].
    pub fn torque_grid(&self, t: &Grid, inertia: &Grid) -> Result<Grid, SpinupError> {
        let v = self.velocity_grid(t, inertia)?;
        Ok(v.map(|v| self.b.mul_add(-v, self.a)))
    }

    /// Grid form of [`TorqueCurve::power`].
    pub fn power_grid(&self, t: &Grid, inertia: &Grid) -> Result<Grid, SpinupError> {
        let v = self.velocity_grid(t, inertia)?;
        Ok(v.map(|v| v * self.b.mul_add(-v, self.a)))
    }

    /// Grid form of [`TorqueCurve::energy`].
    pub fn energy_grid(&self, t: &Grid, inertia: &Grid) -> Result<Grid, SpinupError> {
        let v = self.velocity_grid(t, inertia)?;
        let e = v.zip_with(inertia, |v, i| 0.5 * i * v * v)?;
        Ok(e)
    }

    /// Grid form of [`TorqueCurve::momentum`].
    pub fn momentum_grid(&self, t: &Grid, inertia: &Grid) -> Result<Grid, SpinupError> {
        let v = self.velocity_grid(t, inertia)?;
        let p = v.zip_with(inertia, |v, i| i * v)?;
        Ok(p)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
