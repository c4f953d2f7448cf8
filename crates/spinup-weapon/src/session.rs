//! Weapon-system session: motor lifecycle, weapon-frame queries, and
//! visualization handle ownership.
//!
//! One [`WeaponSession`] per caller session. The session is the only owner
//! of mutable state (the current motor model and the open surfaces); there
//! is no process-wide singleton. Motor-dependent queries fail with
//! [`SessionError::Uninitialized`] until [`WeaponSession::init_motor`] has
//! run; re-initialization replaces the model at any time.

use spinup_core::config::WeaponConfig;
use spinup_core::error::{DomainError, SessionError, SpinupError};
use spinup_core::grid::Grid;
use spinup_motor::curve::TorqueCurve;
use spinup_motor::gearing::GearTrain;
use spinup_motor::specs::MotorSpecs;

use crate::surface::{SurfaceGrid, SurfaceHandle, SurfaceQuantity, SweepParameter};
use crate::sweep::SweepRanges;

// ---------------------------------------------------------------------------
// OperatingPoint
// ---------------------------------------------------------------------------

/// The single (time, inertia, gear ratio) triple of direct user interest,
/// distinct from the sweep ranges built around it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OperatingPoint {
    /// Target spin-up time (s).
    pub spinup_time: f64,
    /// Weapon rotor inertia (kg-m^2).
    pub weapon_moi: f64,
    /// Gear ratio (out:in).
    pub gear_ratio: f64,
}

impl OperatingPoint {
    #[must_use]
    pub const fn new(spinup_time: f64, weapon_moi: f64, gear_ratio: f64) -> Self {
        Self {
            spinup_time,
            weapon_moi,
            gear_ratio,
        }
    }
}

impl From<&WeaponConfig> for OperatingPoint {
    fn from(cfg: &WeaponConfig) -> Self {
        Self::new(cfg.spinup_time, cfg.moi, cfg.gear_ratio)
    }
}

/// Weapon-frame result at an operating point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OperatingPointResult {
    /// Kinetic energy stored in the weapon (J).
    pub energy: f64,
    /// Weapon angular velocity (rad/s).
    pub velocity: f64,
}

/// Derived electrical readback for display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotorSummary {
    /// Velocity constant (rad/s per Volt).
    pub kv: f64,
    /// Torque constant (Nm per Amp).
    pub kt: f64,
    /// Torque-curve stall constant `a` (Nm).
    pub stall_torque: f64,
    /// Torque-curve slope constant `b` (Nm-s/rad).
    pub decay_rate: f64,
    /// Unloaded motor speed at the operating voltage (rad/s).
    pub terminal_velocity: f64,
}

// ---------------------------------------------------------------------------
// WeaponSession
// ---------------------------------------------------------------------------

struct MotorState {
    specs: MotorSpecs,
    kv: f64,
    kt: f64,
    curve: TorqueCurve,
}

/// Mutable per-session model state.
pub struct WeaponSession {
    motor: Option<MotorState>,
    surfaces: Vec<(SurfaceHandle, SurfaceGrid)>,
    next_handle: u64,
}

impl Default for WeaponSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WeaponSession {
    /// Fresh session with no motor model and no open surfaces.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            motor: None,
            surfaces: Vec::new(),
            next_handle: 0,
        }
    }

    // -- motor lifecycle --

    /// Derive torque-curve constants from a nameplate and install the motor
    /// model, replacing any previous one. Open surfaces are unaffected.
    pub fn init_motor(&mut self, specs: MotorSpecs) -> Result<(), DomainError> {
        let curve = specs.torque_curve()?;
        self.motor = Some(MotorState {
            specs,
            kv: specs.kv(),
            kt: specs.kt(),
            curve,
        });
        Ok(())
    }

    /// Whether a motor model is installed.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.motor.is_some()
    }

    fn state(&self) -> Result<&MotorState, SessionError> {
        self.motor.as_ref().ok_or(SessionError::Uninitialized)
    }

    /// Velocity constant of the installed motor (rad/s per Volt).
    pub fn kv(&self) -> Result<f64, SessionError> {
        Ok(self.state()?.kv)
    }

    /// Torque constant of the installed motor (Nm per Amp).
    pub fn kt(&self) -> Result<f64, SessionError> {
        Ok(self.state()?.kt)
    }

    /// Nameplate the current model was derived from.
    pub fn specs(&self) -> Result<&MotorSpecs, SessionError> {
        Ok(&self.state()?.specs)
    }

    /// Torque curve of the installed motor.
    pub fn torque_curve(&self) -> Result<&TorqueCurve, SessionError> {
        Ok(&self.state()?.curve)
    }

    /// Electrical readback for display.
    pub fn motor_summary(&self) -> Result<MotorSummary, SessionError> {
        let state = self.state()?;
        Ok(MotorSummary {
            kv: state.kv,
            kt: state.kt,
            stall_torque: state.curve.stall_torque(),
            decay_rate: state.curve.decay_rate(),
            terminal_velocity: state.curve.terminal_velocity(),
        })
    }

    // -- weapon-frame queries --

    /// Weapon angular velocity after `t` seconds (rad/s).
    ///
    /// Reflects the weapon inertia through the gears (`I / g^2`), runs the
    /// motor model, and transforms the motor velocity back (`/ g`).
    pub fn velocity(&self, t: f64, weapon_moi: f64, gear_ratio: f64) -> Result<f64, SpinupError> {
        let state = self.state()?;
        let gears = GearTrain::new(gear_ratio)?;
        let reflected = gears.reflected_inertia(weapon_moi)?;
        Ok(gears.output_velocity(state.curve.velocity(t, reflected)?))
    }

    /// Weapon kinetic energy after `t` seconds (J), using the actual
    /// (unreflected) weapon inertia.
    pub fn energy(&self, t: f64, weapon_moi: f64, gear_ratio: f64) -> Result<f64, SpinupError> {
        let v = self.velocity(t, weapon_moi, gear_ratio)?;
        Ok(0.5 * weapon_moi * v * v)
    }

    /// Grid form of [`WeaponSession::velocity`]: `t` and `weapon_moi` follow
    /// [`Grid::zip_with`] broadcast rules, `gear_ratio` is a fixed scalar.
    pub fn velocity_grid(
        &self,
        t: &Grid,
        weapon_moi: &Grid,
        gear_ratio: f64,
    ) -> Result<Grid, SpinupError> {
        let state = self.state()?;
        let gears = GearTrain::new(gear_ratio)?;
        if let Some(bad) = weapon_moi.iter().find(|v| !(*v > 0.0 && v.is_finite())) {
            return Err(DomainError::Inertia(bad).into());
        }
        let ratio = gears.ratio();
        let reflected = weapon_moi.map(|i| i / (ratio * ratio));
        let motor_v = state.curve.velocity_grid(t, &reflected)?;
        Ok(motor_v.map(|v| gears.output_velocity(v)))
    }

    /// Grid form of [`WeaponSession::energy`].
    pub fn energy_grid(
        &self,
        t: &Grid,
        weapon_moi: &Grid,
        gear_ratio: f64,
    ) -> Result<Grid, SpinupError> {
        let v = self.velocity_grid(t, weapon_moi, gear_ratio)?;
        let e = v.zip_with(weapon_moi, |v, i| 0.5 * i * v * v)?;
        Ok(e)
    }

    /// Evaluate the operating point: the load-bearing scalar output.
    pub fn evaluate(&self, op: &OperatingPoint) -> Result<OperatingPointResult, SpinupError> {
        let velocity = self.velocity(op.spinup_time, op.weapon_moi, op.gear_ratio)?;
        let energy = 0.5 * op.weapon_moi * velocity * velocity;
        Ok(OperatingPointResult { energy, velocity })
    }

    /// Sweep axes around an operating point, for the visualization
    /// collaborator. Does not require an installed motor.
    pub fn sweep_ranges(&self, op: &OperatingPoint) -> Result<SweepRanges, DomainError> {
        SweepRanges::for_operating_point(op)
    }

    // -- surfaces --

    /// Compute a surface over the sweep ranges and register it as an open
    /// visualization. Returns the handle; the grid stays owned by the
    /// session until [`WeaponSession::close_visualizations`].
    pub fn open_surface(
        &mut self,
        quantity: SurfaceQuantity,
        parameter: SweepParameter,
        op: &OperatingPoint,
    ) -> Result<SurfaceHandle, SpinupError> {
        let ranges = SweepRanges::for_operating_point(op)?;
        let surface = match parameter {
            SweepParameter::Inertia => {
                let (t, moi) = Grid::meshgrid(&ranges.time, &ranges.inertia)?;
                let values = match quantity {
                    SurfaceQuantity::Energy => self.energy_grid(&t, &moi, op.gear_ratio)?,
                    SurfaceQuantity::Velocity => self.velocity_grid(&t, &moi, op.gear_ratio)?,
                };
                SurfaceGrid {
                    quantity,
                    parameter,
                    time: ranges.time,
                    parameter_values: ranges.inertia,
                    values,
                }
            }
            SweepParameter::GearRatio => {
                let rows = ranges.time.len();
                let cols = ranges.ratio.len();
                let mut data = Vec::with_capacity(rows * cols);
                for &t in &ranges.time {
                    for &g in &ranges.ratio {
                        let value = match quantity {
                            SurfaceQuantity::Energy => self.energy(t, op.weapon_moi, g)?,
                            SurfaceQuantity::Velocity => self.velocity(t, op.weapon_moi, g)?,
                        };
                        data.push(value);
                    }
                }
                SurfaceGrid {
                    quantity,
                    parameter,
                    time: ranges.time,
                    parameter_values: ranges.ratio,
                    values: Grid::from_row_major(rows, cols, data)?,
                }
            }
        };

        let handle = SurfaceHandle(self.next_handle);
        self.next_handle += 1;
        self.surfaces.push((handle, surface));
        Ok(handle)
    }

    /// The energy-over-inertia surface the tool has always drawn.
    pub fn open_energy_surface(&mut self, op: &OperatingPoint) -> Result<SurfaceHandle, SpinupError> {
        self.open_surface(SurfaceQuantity::Energy, SweepParameter::Inertia, op)
    }

    /// Velocity companion to [`WeaponSession::open_energy_surface`].
    pub fn open_velocity_surface(
        &mut self,
        op: &OperatingPoint,
    ) -> Result<SurfaceHandle, SpinupError> {
        self.open_surface(SurfaceQuantity::Velocity, SweepParameter::Inertia, op)
    }

    /// Look up an open surface by handle.
    #[must_use]
    pub fn surface(&self, handle: SurfaceHandle) -> Option<&SurfaceGrid> {
        self.surfaces
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, s)| s)
    }

    /// Number of open surfaces.
    #[must_use]
    pub fn open_surface_count(&self) -> usize {
        self.surfaces.len()
    }

    /// Release every open surface. Idempotent; handles become stale.
    pub fn close_visualizations(&mut self) {
        self.surfaces.clear();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
