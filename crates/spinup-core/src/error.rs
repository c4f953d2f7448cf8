use thiserror::Error;

/// Top-level error type for the Spinup workspace.
#[derive(Debug, Error)]
pub enum SpinupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Physically meaningless inputs, rejected at the call boundary before any
/// computation. Values are never clamped or coerced to defaults.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("Inertia must be positive and finite, got {0} kg-m^2")]
    Inertia(f64),

    #[error("Gear ratio must be positive and finite, got {0}")]
    GearRatio(f64),

    #[error("Velocity constant must be positive and finite, got {0} rpm/V")]
    VelocityConstant(f64),

    #[error("Stall current must be non-negative and finite, got {0} A")]
    StallCurrent(f64),

    #[error("Stall voltage must be positive and finite, got {0} V")]
    StallVoltage(f64),

    #[error("Operating voltage must be positive and finite, got {0} V")]
    OperatingVoltage(f64),

    #[error("Stall torque constant must be finite, got {0} Nm")]
    StallTorque(f64),

    #[error("Torque decay constant must be positive and finite, got {0} Nm-s/rad")]
    DecayConstant(f64),

    #[error("Spin-up time target must be non-negative and finite, got {0} s")]
    SpinupTime(f64),
}

/// Elementwise grid operation errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("Mismatched grid shapes: {left_rows}x{left_cols} vs {right_rows}x{right_cols}")]
    ShapeMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    #[error("Data length {len} does not fill a {rows}x{cols} grid")]
    DataLength {
        len: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Grid must have at least one element")]
    Empty,
}

/// Weapon-session lifecycle errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("Motor model not initialized: call init_motor first")]
    Uninitialized,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
