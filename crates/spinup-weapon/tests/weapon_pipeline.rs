//! Integration test: scenario config through to weapon-frame numbers.
//!
//! Exercises the full evaluation path the CLI uses:
//! 1. Parse a TOML scenario and validate it
//! 2. Derive the torque curve from the nameplate and install it
//! 3. Evaluate the operating point against the hard-coded reference numbers
//! 4. Check the gear-reflection identity and sweep-bound guarantees under
//!    seeded random sampling
//!
//! Reference configuration: Tmotor AS2814 900KV on 3S (11.1 V), 5.6e-4
//! kg-m^2 rotor, 0.8:1 gearing, 4 s spin-up target.

use rand::Rng;
use spinup_core::config::ScenarioConfig;
use spinup_core::error::{DomainError, SessionError, SpinupError};
use spinup_motor::specs::MotorSpecs;
use spinup_test_utils::{sample_log_uniform, seeded_rng};
use spinup_weapon::prelude::*;

const SCENARIO_TOML: &str = r#"
[meta]
name = "beetleweight reference"

[motor]
kv_rpm = 900.0
stall_current = 37.0
stall_voltage = 14.8
operating_voltage = 11.1

[weapon]
moi = 5.6e-4
gear_ratio = 0.8
spinup_time = 4.0
"#;

fn session_from_scenario(cfg: &ScenarioConfig) -> (WeaponSession, OperatingPoint) {
    let mut session = WeaponSession::new();
    session
        .init_motor(MotorSpecs::from(&cfg.motor))
        .expect("reference nameplate must derive");
    (session, OperatingPoint::from(&cfg.weapon))
}

#[test]
fn scenario_to_operating_point_regression() {
    let cfg: ScenarioConfig = toml::from_str(SCENARIO_TOML).unwrap();
    cfg.validate().unwrap();
    let (session, op) = session_from_scenario(&cfg);

    let summary = session.motor_summary().unwrap();
    assert!((summary.kv - 94.247_779_607_693_79).abs() < 1e-9);
    assert!((summary.kt - 0.010_610_329_539_459_69).abs() < 1e-12);
    assert!((summary.stall_torque - 0.294_436_644_720_006_36).abs() < 1e-12);
    assert!((summary.decay_rate - 2.814_477_323_398_271_7e-4).abs() < 1e-15);

    let result = session.evaluate(&op).unwrap();
    assert!((result.velocity - 946.500_258_543_118_8).abs() < 1e-6);
    assert!((result.energy - 250.841_567_038_213_38).abs() < 1e-6);
}

#[test]
fn reflection_identity_holds_across_sampled_space() {
    let cfg = ScenarioConfig::default();
    let (session, _) = session_from_scenario(&cfg);
    let curve = *session.torque_curve().unwrap();

    let mut rng = seeded_rng(17);
    for _ in 0..500 {
        let t = rng.gen_range(0.0..12.0);
        let moi = sample_log_uniform(&mut rng, 1e-6, 1e-1);
        let g = sample_log_uniform(&mut rng, 0.1, 10.0);

        let weapon_v = session.velocity(t, moi, g).unwrap();
        let motor_v = curve.velocity(t, moi / (g * g)).unwrap();
        let scale = weapon_v.abs().max(1.0);
        assert!(
            (weapon_v - motor_v / g).abs() / scale < 1e-12,
            "identity violated at t={t}, moi={moi}, g={g}"
        );

        let energy = session.energy(t, moi, g).unwrap();
        assert!((energy - 0.5 * moi * weapon_v * weapon_v).abs() / energy.abs().max(1.0) < 1e-12);
    }
}

#[test]
fn doubling_gear_ratio_scaling() {
    let cfg = ScenarioConfig::default();
    let (session, op) = session_from_scenario(&cfg);
    let curve = *session.torque_curve().unwrap();

    let v1 = session.velocity(op.spinup_time, op.weapon_moi, 0.8).unwrap();
    let v2 = session.velocity(op.spinup_time, op.weapon_moi, 1.6).unwrap();

    // Doubling g quarters the reflected inertia; the expected velocity ratio
    // follows from the closed form, not from a simple power law.
    let i1 = op.weapon_moi / (0.8 * 0.8);
    let i2 = op.weapon_moi / (1.6 * 1.6);
    assert!((i2 / i1 - 0.25).abs() < 1e-12);
    let expected_ratio = (curve.velocity(op.spinup_time, i2).unwrap() / 1.6)
        / (curve.velocity(op.spinup_time, i1).unwrap() / 0.8);
    assert!((v2 / v1 - expected_ratio).abs() < 1e-12);
    // Regression value for the reference point.
    assert!((v2 / v1 - 0.686_781_288_219_403_9).abs() < 1e-9);
}

#[test]
fn sweep_ranges_always_cover_operating_point() {
    let cfg = ScenarioConfig::default();
    let (session, _) = session_from_scenario(&cfg);

    let mut rng = seeded_rng(23);
    for _ in 0..300 {
        let op = OperatingPoint::new(
            rng.gen_range(0.0..10.0),
            sample_log_uniform(&mut rng, 1e-7, 1.0),
            sample_log_uniform(&mut rng, 0.05, 20.0),
        );
        let ranges = session.sweep_ranges(&op).unwrap();

        assert_eq!(ranges.time.len(), SWEEP_POINTS);
        assert!(ranges.time[0] <= op.spinup_time);
        assert!(ranges.time[SWEEP_POINTS - 1] > op.spinup_time);

        assert!(ranges.inertia[0] <= op.weapon_moi);
        assert!(ranges.inertia[SWEEP_POINTS - 1] > op.weapon_moi);

        assert!(ranges.ratio[0] < op.gear_ratio);
        assert!(ranges.ratio[SWEEP_POINTS - 1] > op.gear_ratio);
    }
}

#[test]
fn surface_lifecycle_end_to_end() {
    let cfg = ScenarioConfig::default();
    let (mut session, op) = session_from_scenario(&cfg);

    let energy = session.open_energy_surface(&op).unwrap();
    let velocity = session.open_velocity_surface(&op).unwrap();
    let ratio = session
        .open_surface(SurfaceQuantity::Energy, SweepParameter::GearRatio, &op)
        .unwrap();
    assert_eq!(session.open_surface_count(), 3);

    // The energy surface peaks at the heavy-inertia, long-time corner; it
    // must dominate the operating-point energy.
    let op_energy = session.evaluate(&op).unwrap().energy;
    let peak = session.surface(energy).unwrap().peak();
    assert!(peak > op_energy);

    for handle in [energy, velocity, ratio] {
        let surface = session.surface(handle).unwrap();
        assert_eq!(surface.values.shape(), (SWEEP_POINTS, SWEEP_POINTS));
        assert!(surface.values.min() >= 0.0);
    }

    session.close_visualizations();
    assert_eq!(session.open_surface_count(), 0);
    assert!(session.surface(energy).is_none());
    session.close_visualizations(); // idempotent
}

#[test]
fn error_paths_surface_typed_errors() {
    let cfg = ScenarioConfig::default();
    let (session, _) = session_from_scenario(&cfg);

    assert!(matches!(
        session.velocity(1.0, 0.0, 1.0),
        Err(SpinupError::Domain(DomainError::Inertia(_)))
    ));
    assert!(matches!(
        session.energy(1.0, 5.6e-4, -2.0),
        Err(SpinupError::Domain(DomainError::GearRatio(_)))
    ));

    let uninitialized = WeaponSession::new();
    assert!(matches!(
        uninitialized.velocity(1.0, 5.6e-4, 1.0),
        Err(SpinupError::Session(SessionError::Uninitialized))
    ));

    let bad_scenario: ScenarioConfig = toml::from_str(
        r"
        [weapon]
        moi = -5.6e-4
    ",
    )
    .unwrap();
    assert!(bad_scenario.validate().is_err());
}
