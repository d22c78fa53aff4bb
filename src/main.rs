use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use projectile_sim::core::ballistics::{IdealFlight, ideal_flight, sample_ideal_path};
use projectile_sim::core::chart::render_png;
use projectile_sim::core::constants::MAX_PREVIEW_TIME_S;
use projectile_sim::core::preview::{Prediction, predict};
use projectile_sim::core::{
    Arena, ControlValues, EnvironmentConfig, FlightPhase, GroundMode, LaunchInputs,
    OutOfBoundsPolicy, Preset, Target,
};

const IDEAL_PATH_SAMPLES: usize = 200;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PresetArg {
    Arcade,
    Smooth,
    Theoretical,
}

impl From<PresetArg> for Preset {
    fn from(value: PresetArg) -> Self {
        match value {
            PresetArg::Arcade => Preset::Arcade,
            PresetArg::Smooth => Preset::Smooth,
            PresetArg::Theoretical => Preset::Theoretical,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum GroundArg {
    Radius,
    Point,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BoundsArg {
    Terminal,
    Advisory,
}

/// Fly one projectile headlessly and report its telemetry.
#[derive(Debug, Parser)]
#[command(name = "projectile_sim", version, about, long_about = None)]
struct Cli {
    /// Engine variant supplying the defaults
    #[arg(long, value_enum, default_value = "arcade")]
    preset: PresetArg,

    /// TOML file with an environment configuration (overrides the preset)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Launch angle (degrees)
    #[arg(short = 'a', long)]
    angle: Option<f64>,

    /// Muzzle velocity (m/s)
    #[arg(short = 'p', long)]
    power: Option<f64>,

    /// Projectile mass (kg)
    #[arg(short = 'm', long)]
    mass: Option<f64>,

    /// Drag in control units; divided by 1000 to get the coefficient
    #[arg(short = 'd', long)]
    drag: Option<u32>,

    /// Gravitational acceleration (m/s^2)
    #[arg(short = 'g', long)]
    gravity: Option<f64>,

    /// Integration time step (s)
    #[arg(long)]
    time_step: Option<f64>,

    /// Integrator steps per tick
    #[arg(long)]
    sub_steps: Option<u32>,

    #[arg(long, value_enum)]
    ground: Option<GroundArg>,

    #[arg(long, value_enum)]
    out_of_bounds: Option<BoundsArg>,

    /// Place the target's left edge here instead of at random
    #[arg(long)]
    target_x: Option<f64>,

    /// Seed for the random target placement
    #[arg(long)]
    seed: Option<u64>,

    /// Give up after this many simulated seconds
    #[arg(long, default_value_t = MAX_PREVIEW_TIME_S)]
    max_time: f64,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Write a PNG chart of the flight (default name carries a timestamp)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    plot: Option<Option<PathBuf>>,
}

#[derive(Debug, Serialize)]
struct FlightReport {
    generated_at: DateTime<Local>,
    config: EnvironmentConfig,
    launch: LaunchInputs,
    target: Target,
    outcome: FlightPhase,
    timed_out: bool,
    elapsed_time: f64,
    max_height: f64,
    final_range: Option<f64>,
    landed: bool,
    drag_free: Option<IdealFlight>,
}

fn load_config(path: &Path) -> Result<EnvironmentConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("could not read config '{}'", path.display()))?;
    toml::from_str(&text).with_context(|| format!("invalid config '{}'", path.display()))
}

fn resolve_config(cli: &Cli) -> Result<(EnvironmentConfig, LaunchInputs)> {
    let defaults = ControlValues::default();
    let controls = ControlValues {
        angle_deg: cli.angle.unwrap_or(defaults.angle_deg),
        power: cli.power.unwrap_or(defaults.power),
        mass: cli.mass.unwrap_or(defaults.mass),
        drag_raw: cli.drag.unwrap_or(defaults.drag_raw),
        gravity: cli.gravity.unwrap_or(defaults.gravity),
    };

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Preset::from(cli.preset).config(controls.physics()),
    };

    if cli.config.is_some() {
        // Only explicit flags override physics loaded from a file.
        if let Some(mass) = cli.mass {
            config.physics.mass = mass;
        }
        if cli.drag.is_some() {
            config.physics.drag_coefficient = controls.drag_coefficient();
        }
        if let Some(gravity) = cli.gravity {
            config.physics.gravity = gravity;
        }
    }
    if let Some(time_step) = cli.time_step {
        config.time_step = time_step;
    }
    if let Some(sub_steps) = cli.sub_steps {
        config.sub_steps = sub_steps;
    }
    if let Some(ground) = cli.ground {
        config.ground_mode = match ground {
            GroundArg::Radius => GroundMode::RadiusOffset,
            GroundArg::Point => GroundMode::PointParticle,
        };
    }
    if let Some(bounds) = cli.out_of_bounds {
        config.out_of_bounds = match bounds {
            BoundsArg::Terminal => OutOfBoundsPolicy::Terminal,
            BoundsArg::Advisory => OutOfBoundsPolicy::Advisory,
        };
    }

    config.validate()?;
    let launch = controls.launch();
    launch.validate()?;
    Ok((config, launch))
}

fn place_target(cli: &Cli, arena: &Arena) -> Target {
    match cli.target_x {
        Some(x) => Target::on_ground(arena, x),
        None => {
            let mut rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            Target::random(arena, &mut rng)
        }
    }
}

fn drag_free_reference(
    arena: &Arena,
    config: &EnvironmentConfig,
    launch: LaunchInputs,
) -> (Option<IdealFlight>, Vec<(f64, f64)>) {
    let clearance = config.ground_mode.clearance(arena.projectile_radius);
    let Some(flight) = ideal_flight(launch, config.physics.gravity, 0.0) else {
        return (None, Vec::new());
    };
    let path = sample_ideal_path(launch, config.physics.gravity, flight.time_s, IDEAL_PATH_SAMPLES)
        .into_iter()
        .map(|(x, h)| (x, h + clearance))
        .collect();
    (Some(flight), path)
}

fn build_report(
    config: EnvironmentConfig,
    launch: LaunchInputs,
    target: Target,
    prediction: &Prediction,
    drag_free: Option<IdealFlight>,
) -> FlightReport {
    FlightReport {
        generated_at: Local::now(),
        config,
        launch,
        target,
        outcome: prediction.phase,
        timed_out: prediction.timed_out,
        elapsed_time: prediction.measurement.elapsed_time,
        max_height: prediction.measurement.max_height,
        final_range: prediction.measurement.final_range,
        landed: prediction.measurement.landed,
        drag_free,
    }
}

fn print_report(report: &FlightReport) {
    let outcome = if report.timed_out {
        "Timed out"
    } else {
        report.outcome.label()
    };
    println!("Outcome: {outcome}");
    println!("Time of flight: {:.2} s", report.elapsed_time);
    println!("Max height: {:.2} m", report.max_height);
    match report.final_range {
        Some(range) => println!("Range: {range:.2} m"),
        None => println!("Range: -"),
    }
    println!("Target at x = {:.2}", report.target.x);
    if let Some(ideal) = report.drag_free {
        println!(
            "Drag-free reference: {:.2} m in {:.2} s (apex {:.2} m)",
            ideal.range, ideal.time_s, ideal.apex
        );
    }
}

fn default_plot_path() -> PathBuf {
    PathBuf::from(format!(
        "trajectory-{}.png",
        Local::now().format("%Y%m%d-%H%M%S")
    ))
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let arena = Arena::default();
    let (config, launch) = resolve_config(&cli)?;
    let target = place_target(&cli, &arena);

    let prediction = predict(&config, arena, target, launch, cli.max_time)?;
    let (drag_free, reference) = drag_free_reference(&arena, &config, launch);
    let report = build_report(config, launch, target, &prediction, drag_free);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if let Some(plot) = &cli.plot {
        let path = plot.clone().unwrap_or_else(default_plot_path);
        let caption = format!(
            "{} at {:.1} deg, {:.1} m/s",
            report.outcome.label(),
            launch.angle_deg,
            launch.power
        );
        render_png(
            &path,
            &caption,
            &arena,
            &target,
            &prediction.points,
            &reference,
        )
        .with_context(|| format!("could not write chart '{}'", path.display()))?;
        if !cli.json {
            println!("Chart written to {}", path.display());
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("projectile_sim").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn flags_override_preset() {
        let cli = parse(&[
            "--preset",
            "theoretical",
            "--angle",
            "30",
            "--drag",
            "12",
            "--sub-steps",
            "4",
        ]);
        let (config, launch) = resolve_config(&cli).expect("valid config");
        assert_eq!(launch.angle_deg, 30.0);
        assert_eq!(config.physics.drag_coefficient, 0.012);
        assert_eq!(config.sub_steps, 4);
        assert_eq!(config.out_of_bounds, OutOfBoundsPolicy::Advisory);
    }

    #[test]
    fn rejects_zero_mass() {
        let cli = parse(&["--mass", "0"]);
        assert!(resolve_config(&cli).is_err());
    }

    #[test]
    fn plot_flag_accepts_optional_path() {
        assert!(parse(&[]).plot.is_none());
        assert_eq!(parse(&["--plot"]).plot, Some(None));
        assert_eq!(
            parse(&["--plot", "out.png"]).plot,
            Some(Some(PathBuf::from("out.png")))
        );
    }

    #[test]
    fn explicit_target_is_flush_with_ground() {
        let cli = parse(&["--target-x", "300"]);
        let arena = Arena::default();
        let target = place_target(&cli, &arena);
        assert_eq!(target.x, 300.0);
        assert_eq!(target.y + target.height, arena.ground_level);
    }
}
