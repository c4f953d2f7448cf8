//! Motor nameplate parameters and torque-curve derivation.
//!
//! Spec sheets quote KV in RPM/V and stall current at some test voltage.
//! The torque curve at the *operating* voltage follows from scaling the
//! stall current linearly with voltage (fixed winding resistance at stall)
//! and anchoring the zero-torque speed at `kv * v_op`.

use std::f64::consts::PI;

use spinup_core::config::MotorConfig;
use spinup_core::error::DomainError;

use crate::curve::TorqueCurve;

/// Motor nameplate as printed on the spec sheet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotorSpecs {
    /// Velocity constant (RPM per Volt).
    pub kv_rpm: f64,
    /// Stall current at `stall_voltage` (A).
    pub stall_current: f64,
    /// Voltage at which the stall current is quoted (V).
    pub stall_voltage: f64,
    /// Voltage applied in the robot (V).
    pub operating_voltage: f64,
}

impl MotorSpecs {
    /// Create from spec-sheet values.
    #[must_use]
    pub const fn new(
        kv_rpm: f64,
        stall_current: f64,
        stall_voltage: f64,
        operating_voltage: f64,
    ) -> Self {
        Self {
            kv_rpm,
            stall_current,
            stall_voltage,
            operating_voltage,
        }
    }

    /// Create from a sheet that quotes maximum power instead of stall
    /// voltage: `v_stall = w_max / i_stall`.
    #[must_use]
    pub fn from_max_power(
        kv_rpm: f64,
        stall_current: f64,
        max_power: f64,
        operating_voltage: f64,
    ) -> Self {
        Self::new(
            kv_rpm,
            stall_current,
            max_power / stall_current,
            operating_voltage,
        )
    }

    /// Validate nameplate values. Returns Err on physically meaningless
    /// input; nothing is clamped.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !(self.kv_rpm > 0.0 && self.kv_rpm.is_finite()) {
            return Err(DomainError::VelocityConstant(self.kv_rpm));
        }
        if !(self.stall_current >= 0.0 && self.stall_current.is_finite()) {
            return Err(DomainError::StallCurrent(self.stall_current));
        }
        if !(self.stall_voltage > 0.0 && self.stall_voltage.is_finite()) {
            return Err(DomainError::StallVoltage(self.stall_voltage));
        }
        if !(self.operating_voltage > 0.0 && self.operating_voltage.is_finite()) {
            return Err(DomainError::OperatingVoltage(self.operating_voltage));
        }
        Ok(())
    }

    /// Velocity constant in rad/s per Volt.
    #[must_use]
    pub fn kv(&self) -> f64 {
        2.0 * PI / 60.0 * self.kv_rpm
    }

    /// Torque constant in Nm per Amp (reciprocal of [`MotorSpecs::kv`]).
    #[must_use]
    pub fn kt(&self) -> f64 {
        1.0 / self.kv()
    }

    /// Stall current scaled to the operating voltage (A).
    #[must_use]
    pub fn nominal_stall_current(&self) -> f64 {
        self.operating_voltage / self.stall_voltage * self.stall_current
    }

    /// Unloaded speed at the operating voltage (rad/s), the curve's
    /// zero-torque velocity.
    #[must_use]
    pub fn unloaded_speed(&self) -> f64 {
        self.kv() * self.operating_voltage
    }

    /// Derive the torque curve at the operating voltage.
    ///
    /// `a = kt * i_nom_stall`, `b = a / (kv * v_op)`, so the curve hits
    /// zero torque exactly at the unloaded speed.
    pub fn torque_curve(&self) -> Result<TorqueCurve, DomainError> {
        self.validate()?;
        let a = self.kt() * self.nominal_stall_current();
        let b = a / self.unloaded_speed();
        TorqueCurve::new(a, b)
    }
}

impl From<&MotorConfig> for MotorSpecs {
    fn from(cfg: &MotorConfig) -> Self {
        Self::new(
            cfg.kv_rpm,
            cfg.stall_current,
            cfg.stall_voltage,
            cfg.operating_voltage,
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> MotorSpecs {
        MotorSpecs::new(900.0, 37.0, 14.8, 11.1)
    }

    #[test]
    fn kv_kt_reference_values() {
        let specs = reference();
        assert!((specs.kv() - 94.247_779_607_693_79).abs() < 1e-12);
        assert!((specs.kt() - 0.010_610_329_539_459_69).abs() < 1e-15);
        // kt is the reciprocal of kv by definition.
        assert!((specs.kv() * specs.kt() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn nominal_stall_current_scales_with_voltage() {
        let specs = reference();
        // 11.1 / 14.8 * 37 = 27.75
        assert!((specs.nominal_stall_current() - 27.75).abs() < 1e-12);
    }

    #[test]
    fn torque_curve_reference_constants() {
        let curve = reference().torque_curve().unwrap();
        assert!((curve.stall_torque() - 0.294_436_644_720_006_36).abs() < 1e-15);
        assert!((curve.decay_rate() - 2.814_477_323_398_271_7e-4).abs() < 1e-18);
    }

    #[test]
    fn curve_zero_torque_at_unloaded_speed() {
        let specs = reference();
        let curve = specs.torque_curve().unwrap();
        // a - b * (kv * v_op) == 0 by construction.
        let residual = curve
            .decay_rate()
            .mul_add(-specs.unloaded_speed(), curve.stall_torque());
        assert!(residual.abs() < 1e-12);
        assert!((curve.terminal_velocity() - specs.unloaded_speed()).abs() < 1e-9);
    }

    #[test]
    fn from_max_power_recovers_stall_voltage() {
        // Original exploratory numbers: 553 W max power at 37 A stall.
        let specs = MotorSpecs::from_max_power(900.0, 37.0, 553.0, 11.1);
        assert!((specs.stall_voltage - 553.0 / 37.0).abs() < 1e-12);
        assert!(specs.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_kv() {
        let specs = MotorSpecs::new(0.0, 37.0, 14.8, 11.1);
        assert!(matches!(
            specs.validate().unwrap_err(),
            DomainError::VelocityConstant(_)
        ));
    }

    #[test]
    fn validate_rejects_negative_stall_current() {
        let specs = MotorSpecs::new(900.0, -1.0, 14.8, 11.1);
        assert!(matches!(
            specs.validate().unwrap_err(),
            DomainError::StallCurrent(_)
        ));
    }

    #[test]
    fn validate_rejects_non_positive_voltages() {
        assert!(matches!(
            MotorSpecs::new(900.0, 37.0, 0.0, 11.1).validate().unwrap_err(),
            DomainError::StallVoltage(_)
        ));
        assert!(matches!(
            MotorSpecs::new(900.0, 37.0, 14.8, -11.1)
                .validate()
                .unwrap_err(),
            DomainError::OperatingVoltage(_)
        ));
    }

    #[test]
    fn zero_stall_current_fails_at_curve_construction() {
        // i_stall = 0 is a legal nameplate but yields a = b = 0, which the
        // curve rejects.
        let specs = MotorSpecs::new(900.0, 0.0, 14.8, 11.1);
        assert!(specs.validate().is_ok());
        assert!(matches!(
            specs.torque_curve().unwrap_err(),
            DomainError::DecayConstant(_)
        ));
    }

    #[test]
    fn torque_curve_propagates_validation_errors() {
        let specs = MotorSpecs::new(900.0, 37.0, 14.8, f64::INFINITY);
        assert!(specs.torque_curve().is_err());
    }

    #[test]
    fn from_motor_config() {
        let cfg = MotorConfig::default();
        let specs = MotorSpecs::from(&cfg);
        assert_eq!(specs, reference());
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn specs_are_send_sync() {
        assert_send_sync::<MotorSpecs>();
    }
}
