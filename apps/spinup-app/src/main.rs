//! Weapon spin-up calculator CLI.
//!
//! Provides three modes of operation:
//! - `evaluate`: Derive the motor model and print the operating-point result
//! - `sweep`: Emit the visualization surfaces as JSON
//! - `info`: Print workspace crate versions
//!
//! All numeric output goes to stdout; errors go to stderr with a non-zero
//! exit status. The physics crates themselves never print.

use std::error::Error;
use std::f64::consts::PI;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use spinup_core::config::ScenarioConfig;
use spinup_motor::specs::MotorSpecs;
use spinup_weapon::prelude::*;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Spin-up dynamics for geared weapon drivetrains.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the operating point and print the derived motor constants.
    Evaluate {
        /// Scenario TOML file. Defaults to the built-in reference scenario.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the weapon moment of inertia (kg-m^2).
        #[arg(long)]
        moi: Option<f64>,

        /// Override the gear ratio (out:in).
        #[arg(short = 'g', long)]
        gear_ratio: Option<f64>,

        /// Override the spin-up time target (s).
        #[arg(short = 't', long)]
        spinup_time: Option<f64>,
    },

    /// Compute the sweep surfaces and write them as JSON.
    Sweep {
        /// Scenario TOML file. Defaults to the built-in reference scenario.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print crate information.
    Info,
}

// ---------------------------------------------------------------------------
// JSON dump types
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct SurfaceDump {
    quantity: &'static str,
    parameter: &'static str,
    time: Vec<f64>,
    parameter_values: Vec<f64>,
    values: Vec<Vec<f64>>,
}

impl SurfaceDump {
    fn from_surface(surface: &SurfaceGrid) -> Self {
        Self {
            quantity: match surface.quantity {
                SurfaceQuantity::Energy => "energy_j",
                SurfaceQuantity::Velocity => "velocity_rad_s",
            },
            parameter: match surface.parameter {
                SweepParameter::Inertia => "inertia_kg_m2",
                SweepParameter::GearRatio => "gear_ratio",
            },
            time: surface.time.clone(),
            parameter_values: surface.parameter_values.clone(),
            values: surface.values.to_rows(),
        }
    }
}

#[derive(Serialize)]
struct SweepDump {
    scenario: String,
    surfaces: Vec<SurfaceDump>,
}

// ---------------------------------------------------------------------------
// Mode implementations
// ---------------------------------------------------------------------------

fn load_scenario(path: Option<&PathBuf>) -> Result<ScenarioConfig, Box<dyn Error>> {
    match path {
        Some(path) => Ok(ScenarioConfig::from_file(path)?),
        None => Ok(ScenarioConfig::default()),
    }
}

fn build_session(cfg: &ScenarioConfig) -> Result<(WeaponSession, OperatingPoint), Box<dyn Error>> {
    let mut session = WeaponSession::new();
    session.init_motor(MotorSpecs::from(&cfg.motor))?;
    Ok((session, OperatingPoint::from(&cfg.weapon)))
}

fn run_evaluate(
    config: Option<&PathBuf>,
    moi: Option<f64>,
    gear_ratio: Option<f64>,
    spinup_time: Option<f64>,
) -> Result<(), Box<dyn Error>> {
    let mut cfg = load_scenario(config)?;
    if let Some(moi) = moi {
        cfg.weapon.moi = moi;
    }
    if let Some(ratio) = gear_ratio {
        cfg.weapon.gear_ratio = ratio;
    }
    if let Some(t) = spinup_time {
        cfg.weapon.spinup_time = t;
    }
    cfg.validate()?;

    let (session, op) = build_session(&cfg)?;
    let summary = session.motor_summary()?;
    let result = session.evaluate(&op)?;

    if !cfg.meta.name.is_empty() {
        println!("scenario: {}", cfg.meta.name);
    }
    println!(
        "motor: kv={:.4} rad/s/V  kt={:.6} Nm/A",
        summary.kv, summary.kt
    );
    println!(
        "curve: a={:.6} Nm  b={:.6e} Nm-s/rad  no-load={:.2} rad/s",
        summary.stall_torque, summary.decay_rate, summary.terminal_velocity
    );
    println!(
        "operating point: t={} s  moi={} kg-m^2  ratio={}",
        op.spinup_time, op.weapon_moi, op.gear_ratio
    );
    println!(
        "result: energy={:.2} J  velocity={:.2} rad/s ({:.0} rpm)",
        result.energy,
        result.velocity,
        result.velocity * 60.0 / (2.0 * PI)
    );
    Ok(())
}

fn run_sweep(config: Option<&PathBuf>, output: Option<&PathBuf>) -> Result<(), Box<dyn Error>> {
    let cfg = load_scenario(config)?;
    let (mut session, op) = build_session(&cfg)?;

    let handles = [
        session.open_energy_surface(&op)?,
        session.open_velocity_surface(&op)?,
        session.open_surface(SurfaceQuantity::Energy, SweepParameter::GearRatio, &op)?,
    ];

    let dump = SweepDump {
        scenario: cfg.meta.name.clone(),
        surfaces: handles
            .iter()
            .filter_map(|&h| session.surface(h))
            .map(SurfaceDump::from_surface)
            .collect(),
    };

    let json = serde_json::to_string_pretty(&dump)?;
    match output {
        Some(path) => std::fs::write(path, json)?,
        None => println!("{json}"),
    }

    session.close_visualizations();
    Ok(())
}

fn run_info() {
    println!("spinup v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("crates:");
    println!("  spinup-core   {}", env!("CARGO_PKG_VERSION"));
    println!("  spinup-motor  {}", env!("CARGO_PKG_VERSION"));
    println!("  spinup-weapon {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("edition: 2024");
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Evaluate {
            config,
            moi,
            gear_ratio,
            spinup_time,
        }) => run_evaluate(config.as_ref(), moi, gear_ratio, spinup_time),
        Some(Commands::Sweep { config, output }) => run_sweep(config.as_ref(), output.as_ref()),
        Some(Commands::Info) => {
            run_info();
            Ok(())
        }
        // Default: evaluate the built-in reference scenario.
        None => run_evaluate(None, None, None, None),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
