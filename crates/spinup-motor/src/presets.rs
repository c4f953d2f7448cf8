//! Nameplate presets for motors commonly put behind weapon drivetrains.

use crate::specs::MotorSpecs;

/// Common motor nameplates.
pub mod motors {
    use super::MotorSpecs;

    /// Tmotor AS2814 900KV outrunner, 3S operation on a 4S nameplate.
    #[must_use]
    pub const fn as2814_900kv() -> MotorSpecs {
        MotorSpecs::new(900.0, 37.0, 14.8, 11.1)
    }

    /// 775-class brushed can (BaneBots RS-775 class), 12 V.
    #[must_use]
    pub const fn brushed_775() -> MotorSpecs {
        MotorSpecs::new(1087.5, 97.0, 12.0, 12.0)
    }

    /// Low-KV heavyweight outrunner on 6S.
    #[must_use]
    pub const fn outrunner_330kv() -> MotorSpecs {
        MotorSpecs::new(330.0, 90.0, 22.2, 22.2)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as2814_valid() {
        let specs = motors::as2814_900kv();
        assert!(specs.validate().is_ok());
        assert!(specs.torque_curve().is_ok());
    }

    #[test]
    fn as2814_matches_reference_configuration() {
        let specs = motors::as2814_900kv();
        assert!((specs.kv_rpm - 900.0).abs() < f64::EPSILON);
        assert!((specs.nominal_stall_current() - 27.75).abs() < 1e-12);
    }

    #[test]
    fn brushed_775_valid() {
        let specs = motors::brushed_775();
        assert!(specs.validate().is_ok());
        let curve = specs.torque_curve().unwrap();
        assert!(curve.stall_torque() > 0.0);
    }

    #[test]
    fn outrunner_330kv_valid() {
        let specs = motors::outrunner_330kv();
        assert!(specs.validate().is_ok());
        // Low KV, high voltage: slower terminal speed than the 775.
        let slow = specs.torque_curve().unwrap().terminal_velocity();
        let fast = motors::brushed_775().torque_curve().unwrap().terminal_velocity();
        assert!(slow < fast);
    }
}
