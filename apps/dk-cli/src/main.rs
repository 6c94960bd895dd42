use clap::{Parser, Subcommand};
use dk_core::units::volts;
use dk_devices::{Diode, DiodeParams, TwoTerminalDevice};
use std::path::PathBuf;
use tracing::info;

mod config;
mod error;

use config::{load_config, resolve_params};
use error::{CliError, CliResult};

#[derive(Parser)]
#[command(name = "dk-cli")]
#[command(about = "diodekit CLI - evaluate junction diode models", long_about = None)]
struct Cli {
    /// YAML file with diode parameters
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Saturation current in amperes (overrides config)
    #[arg(long = "is", global = true)]
    saturation_current: Option<f64>,

    /// Ideality factor, 1..=2 (overrides config)
    #[arg(long = "ideality", global = true)]
    ideality_factor: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the worked examples for ideality factors 1 and 1.3
    Demo,
    /// Evaluate current for one bias point
    Current {
        /// Anode voltage in volts (omit to leave unset)
        #[arg(long, allow_hyphen_values = true)]
        anode: Option<String>,
        /// Cathode voltage in volts (omit to leave unset)
        #[arg(long, allow_hyphen_values = true)]
        cathode: Option<String>,
    },
    /// Print an I-V table, sweeping the anode with the cathode held fixed
    Sweep {
        /// First anode voltage
        #[arg(long, allow_hyphen_values = true)]
        from: f64,
        /// Last anode voltage (inclusive)
        #[arg(long, allow_hyphen_values = true)]
        to: f64,
        /// Step in volts
        #[arg(long)]
        step: f64,
        /// Cathode voltage
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        cathode: f64,
    },
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let file = cli.config.as_deref().map(load_config).transpose()?;
    let params = resolve_params(file.as_ref(), cli.saturation_current, cli.ideality_factor);

    match cli.command {
        Commands::Demo => cmd_demo(&params),
        Commands::Current { anode, cathode } => {
            cmd_current(&params, anode.as_deref(), cathode.as_deref())
        }
        Commands::Sweep {
            from,
            to,
            step,
            cathode,
        } => cmd_sweep(&params, from, to, step, cathode),
    }
}

fn cmd_demo(params: &DiodeParams) -> CliResult<()> {
    for n in [1.0, 1.3] {
        let demo_params = DiodeParams {
            ideality_factor: n,
            ..*params
        };
        let mut diode = Diode::from_params(format!("D(n={n})"), &demo_params)?;
        println!("{diode}");

        for (anode, cathode) in [(0.2, -0.2), (1.0, 0.0), (1.0, 1.1)] {
            diode.set_bias(volts(anode), volts(cathode))?;
            let vd = diode.forward_drop()?.value;
            let i = diode.current()?.value;
            println!("\nanode: {anode} V, cathode: {cathode} V (drop {vd:.3} V)");
            println!("current: {i:e} A");
        }
        println!();
    }
    Ok(())
}

fn cmd_current(params: &DiodeParams, anode: Option<&str>, cathode: Option<&str>) -> CliResult<()> {
    let mut diode = Diode::from_params("D1".into(), params)?;
    if let Some(text) = anode {
        diode.anode_mut().set_from_str(text)?;
    }
    if let Some(text) = cathode {
        diode.cathode_mut().set_from_str(text)?;
    }

    if let Some(missing) = diode.missing_terminals() {
        info!(device = diode.name(), %missing, "terminal left unset");
    }

    let i = diode.current()?;
    let g = diode.conductance()?;
    println!("{diode}");
    println!("current:     {:e} A", i.value);
    println!("conductance: {:e} S", g.value);
    Ok(())
}

fn cmd_sweep(params: &DiodeParams, from: f64, to: f64, step: f64, cathode: f64) -> CliResult<()> {
    let points = sweep_points(from, to, step)?;
    let mut diode = Diode::from_params("D1".into(), params)?;
    diode.cathode_mut().set(volts(cathode))?;

    info!(points = points.len(), from, to, step, "running sweep");
    println!("{:>10}  {:>14}", "Vd (V)", "I (A)");
    for anode in points {
        diode.anode_mut().set(volts(anode))?;
        let vd = diode.forward_drop()?.value;
        let i = diode.current()?.value;
        println!("{vd:>10.4}  {i:>14.6e}");
    }
    Ok(())
}

/// Upper bound on the number of rows a sweep prints.
const MAX_SWEEP_POINTS: usize = 100_000;

/// Anode voltages from `from` to `to` inclusive, spaced by `step`.
fn sweep_points(from: f64, to: f64, step: f64) -> CliResult<Vec<f64>> {
    if !(step.is_finite() && step > 0.0) {
        return Err(CliError::InvalidArg {
            what: format!("sweep step must be positive, got {step}"),
        });
    }
    if !(from.is_finite() && to.is_finite()) || to < from {
        return Err(CliError::InvalidArg {
            what: format!("sweep range {from}..{to} is empty or not finite"),
        });
    }
    // small slack so `to` is kept despite rounding in (to - from) / step
    let intervals = ((to - from) / step + 1e-9).floor();
    if !intervals.is_finite() || intervals >= MAX_SWEEP_POINTS as f64 {
        return Err(CliError::InvalidArg {
            what: format!("sweep step {step} gives more than {MAX_SWEEP_POINTS} points"),
        });
    }
    let count = (intervals as usize)
        .checked_add(1)
        .ok_or_else(|| CliError::InvalidArg {
            what: format!("sweep step {step} is too small"),
        })?;
    Ok((0..count).map(|k| from + k as f64 * step).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use dk_devices::DeviceError;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn sweep_points_include_end() {
        let pts = sweep_points(0.0, 0.7, 0.1).unwrap();
        assert_eq!(pts.len(), 8);
        assert!((pts[7] - 0.7).abs() < 1e-12);
    }

    #[test]
    fn sweep_rejects_bad_step() {
        assert!(sweep_points(0.0, 1.0, 0.0).is_err());
        assert!(sweep_points(0.0, 1.0, -0.1).is_err());
        assert!(sweep_points(1.0, 0.0, 0.1).is_err());
    }

    #[test]
    fn sweep_rejects_tiny_step() {
        for step in [f64::MIN_POSITIVE, 1e-12] {
            let err = sweep_points(0.0, 1.0, step).unwrap_err();
            assert!(matches!(err, CliError::InvalidArg { .. }), "step = {step}");
        }
    }

    #[test]
    fn sweep_point_cap_is_inclusive() {
        let pts = sweep_points(0.0, 1.0, 1.0 / (MAX_SWEEP_POINTS - 1) as f64).unwrap();
        assert_eq!(pts.len(), MAX_SWEEP_POINTS);
        assert!(sweep_points(0.0, 1.0, 1.0 / MAX_SWEEP_POINTS as f64).is_err());
    }

    #[test]
    fn parses_negative_voltages() {
        let args = ["dk-cli", "current", "--anode", "0.2", "--cathode", "-0.2"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Current { anode, cathode } => {
                assert_eq!(anode.as_deref(), Some("0.2"));
                assert_eq!(cathode.as_deref(), Some("-0.2"));
            }
            _ => panic!("expected current subcommand"),
        }
    }

    #[test]
    fn unset_cathode_is_a_device_error() {
        let params = resolve_params(None, None, None);
        let err = cmd_current(&params, Some("0.3"), None).unwrap_err();
        assert!(matches!(err, CliError::Device(_)));
    }

    #[test]
    fn bad_ideality_flag_is_rejected() {
        let params = resolve_params(None, None, Some(2.5));
        let err = cmd_current(&params, Some("0"), Some("0")).unwrap_err();
        assert!(matches!(
            err,
            CliError::Device(DeviceError::ParameterRange { .. })
        ));
    }
}
