//! Scenario configuration loaded from TOML.
//!
//! A scenario pairs a motor nameplate block with a weapon block. All fields
//! have defaults matching the Tmotor AS2814 900KV beetleweight setup the
//! tool grew up around, so an empty file is a valid scenario.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_kv_rpm() -> f64 {
    900.0
}
const fn default_stall_current() -> f64 {
    37.0
}
const fn default_stall_voltage() -> f64 {
    14.8
}
const fn default_operating_voltage() -> f64 {
    11.1
}
const fn default_weapon_moi() -> f64 {
    5.6e-4
}
const fn default_gear_ratio() -> f64 {
    0.8
}
const fn default_spinup_time() -> f64 {
    4.0
}

fn require_positive(field: &str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field: field.into(),
            message: format!("must be positive and finite, got {value}"),
        })
    }
}

fn require_non_negative(field: &str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field: field.into(),
            message: format!("must be non-negative and finite, got {value}"),
        })
    }
}

// ---------------------------------------------------------------------------
// ScenarioMeta
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

// ---------------------------------------------------------------------------
// MotorConfig
// ---------------------------------------------------------------------------

/// Motor nameplate parameters as printed on the spec sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotorConfig {
    /// Velocity constant in RPM per Volt.
    #[serde(default = "default_kv_rpm")]
    pub kv_rpm: f64,

    /// Stall current at the nameplate stall voltage (A).
    #[serde(default = "default_stall_current")]
    pub stall_current: f64,

    /// Voltage at which the stall current is quoted (V).
    #[serde(default = "default_stall_voltage")]
    pub stall_voltage: f64,

    /// Voltage actually applied in the robot (V).
    #[serde(default = "default_operating_voltage")]
    pub operating_voltage: f64,
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            kv_rpm: default_kv_rpm(),
            stall_current: default_stall_current(),
            stall_voltage: default_stall_voltage(),
            operating_voltage: default_operating_voltage(),
        }
    }
}

impl MotorConfig {
    /// Validate configuration. Returns Err on invalid values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("motor.kv_rpm", self.kv_rpm)?;
        require_non_negative("motor.stall_current", self.stall_current)?;
        require_positive("motor.stall_voltage", self.stall_voltage)?;
        require_positive("motor.operating_voltage", self.operating_voltage)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// WeaponConfig
// ---------------------------------------------------------------------------

/// Weapon-side parameters: rotor inertia, gear stage, spin-up target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponConfig {
    /// Moment of inertia of the weapon rotor (kg-m^2).
    #[serde(default = "default_weapon_moi")]
    pub moi: f64,

    /// Gear ratio, out:in. `> 1` trades speed for torque.
    #[serde(default = "default_gear_ratio")]
    pub gear_ratio: f64,

    /// Target spin-up time (s).
    #[serde(default = "default_spinup_time")]
    pub spinup_time: f64,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            moi: default_weapon_moi(),
            gear_ratio: default_gear_ratio(),
            spinup_time: default_spinup_time(),
        }
    }
}

impl WeaponConfig {
    /// Validate configuration. Returns Err on invalid values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("weapon.moi", self.moi)?;
        require_positive("weapon.gear_ratio", self.gear_ratio)?;
        require_non_negative("weapon.spinup_time", self.spinup_time)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ScenarioConfig
// ---------------------------------------------------------------------------

/// Complete scenario loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub meta: ScenarioMeta,
    #[serde(default)]
    pub motor: MotorConfig,
    #[serde(default)]
    pub weapon: WeaponConfig,
}

impl ScenarioConfig {
    /// Validate all sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.motor.validate()?;
        self.weapon.validate()?;
        Ok(())
    }

    /// Load from a TOML file and validate.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
