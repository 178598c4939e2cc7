use std::env;
use std::path::PathBuf;
use std::process;

use serde::Serialize;

use fet_model::{
    drain_current, gate_drain_cap, gate_source_cap, instantaneous_power, transconductance,
    GmMode, Polarity, Tech,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_help() {
    println!(
        r#"Planar FET model bias sweeper

USAGE:
    fet-cli [OPTIONS]

OPTIONS:
    -h, --help              Print help information
    -V, --version           Print version information
    -t, --tech <NODE>       Technology node: 180n or 65n (default: 180n)
    -p, --polarity <TYPE>   Device polarity: n or p (default: n)
    -w, --width <VALUE>     Channel width in meters, SI suffixes ok (default: 1u)
    -s, --sweep <AXIS>      Swept terminal voltage: vgs or vds (default: vgs)
    --start <VALUE>         Sweep start voltage (default: 0)
    --stop <VALUE>          Sweep stop voltage (default: 1.8)
    --step <VALUE>          Sweep step, must be > 0 (default: 0.1)
    --vgs <VALUE>           Fixed Vgs when sweeping vds (default: 1.0)
    --vds <VALUE>           Fixed Vds when sweeping vgs (default: 1.0)
    --gm-mode <MODE>        Transconductance mode: analytic or numeric (default: analytic)
    --json <PATH>           Also write the sweep to a JSON file
    --precision <N>         Output precision (1-15 significant digits, default: 6)

EXAMPLES:
    fet-cli --sweep vgs --vds 1.2                 # Id/Gm/Cgs/Cgd vs Vgs
    fet-cli -t 65n -p p --start 0 --stop -1.2 \
        --step -0.05 --vds -0.6                   # P-type transfer sweep
    fet-cli --sweep vds --vgs 0.9 --json out.json # output curve + JSON"#
    );
}

fn print_version() {
    println!("fet-cli {}", VERSION);
}

#[derive(Clone, Copy, PartialEq)]
enum SweepAxis {
    Vgs,
    Vds,
}

#[derive(Serialize)]
struct SweepPoint {
    voltage: f64,
    id: f64,
    gm: f64,
    cgs: f64,
    cgd: f64,
    power: f64,
}

#[derive(Serialize)]
struct SweepOutput {
    tech_node: String,
    tech: Tech,
    polarity: Polarity,
    gm_mode: GmMode,
    width: f64,
    swept: String,
    fixed_voltage: f64,
    points: Vec<SweepPoint>,
}

fn main() {
    let mut args = env::args().skip(1);
    let mut tech_name = String::from("180n");
    let mut polarity = Polarity::N;
    let mut width = 1e-6;
    let mut axis = SweepAxis::Vgs;
    let mut start = 0.0;
    let mut stop = 1.8;
    let mut step = 0.1;
    let mut vgs_fixed = 1.0;
    let mut vds_fixed = 1.0;
    let mut gm_mode = GmMode::Analytic;
    let mut json_path: Option<PathBuf> = None;
    let mut precision: usize = 6;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--version" | "-V" => {
                print_version();
                process::exit(0);
            }
            "--tech" | "-t" => {
                tech_name = next_value(&mut args, &arg).to_ascii_lowercase();
            }
            "--polarity" | "-p" => {
                polarity = match next_value(&mut args, &arg).to_ascii_lowercase().as_str() {
                    "n" => Polarity::N,
                    "p" => Polarity::P,
                    other => {
                        eprintln!("polarity must be n or p, got {}", other);
                        process::exit(2);
                    }
                };
            }
            "--width" | "-w" => {
                width = parse_positive(&next_value(&mut args, &arg), "width");
            }
            "--sweep" | "-s" => {
                axis = match next_value(&mut args, &arg).to_ascii_lowercase().as_str() {
                    "vgs" => SweepAxis::Vgs,
                    "vds" => SweepAxis::Vds,
                    other => {
                        eprintln!("sweep axis must be vgs or vds, got {}", other);
                        process::exit(2);
                    }
                };
            }
            "--start" => start = parse_voltage(&next_value(&mut args, &arg), "start"),
            "--stop" => stop = parse_voltage(&next_value(&mut args, &arg), "stop"),
            "--step" => step = parse_voltage(&next_value(&mut args, &arg), "step"),
            "--vgs" => vgs_fixed = parse_voltage(&next_value(&mut args, &arg), "vgs"),
            "--vds" => vds_fixed = parse_voltage(&next_value(&mut args, &arg), "vds"),
            "--gm-mode" => {
                gm_mode = match next_value(&mut args, &arg).to_ascii_lowercase().as_str() {
                    "analytic" => GmMode::Analytic,
                    "numeric" => GmMode::Numeric,
                    other => {
                        eprintln!("gm-mode must be analytic or numeric, got {}", other);
                        process::exit(2);
                    }
                };
            }
            "--json" => {
                json_path = Some(PathBuf::from(next_value(&mut args, &arg)));
            }
            "--precision" => {
                let value = next_value(&mut args, &arg);
                precision = match value.parse::<usize>() {
                    Ok(p) if (1..=15).contains(&p) => p,
                    _ => {
                        eprintln!("precision must be between 1 and 15");
                        process::exit(2);
                    }
                };
            }
            _ => {
                eprintln!("unexpected argument: {}", arg);
                process::exit(2);
            }
        }
    }

    let tech = match tech_name.as_str() {
        "180n" | "180nm" => Tech::T180NM,
        "65n" | "65nm" | "065n" => Tech::T065NM,
        other => {
            eprintln!("unknown technology node: {} (expected 180n or 65n)", other);
            process::exit(2);
        }
    };

    if step == 0.0 {
        eprintln!("sweep step must be nonzero");
        process::exit(2);
    }
    if (stop - start) * step < 0.0 {
        eprintln!("sweep step sign does not move start toward stop");
        process::exit(2);
    }

    let (axis_name, fixed_name, fixed_voltage) = match axis {
        SweepAxis::Vgs => ("Vgs", "Vds", vds_fixed),
        SweepAxis::Vds => ("Vds", "Vgs", vgs_fixed),
    };
    println!(
        "sweep: {} from {} to {} step {} ({}={}, W={:e} m, {} node)",
        axis_name, start, stop, step, fixed_name, fixed_voltage, width, tech_name
    );
    println!(
        "{:>14} {:>14} {:>14} {:>14} {:>14} {:>14}",
        axis_name, "Id [A]", "Gm [A/V]", "Cgs [F]", "Cgd [F]", "P [W]"
    );

    let mut points = Vec::new();
    let mut value = start;
    let mut guard = 0usize;
    while (value - stop) * step.signum() <= step.abs() * 0.5 {
        let (vgs, vds) = match axis {
            SweepAxis::Vgs => (value, vds_fixed),
            SweepAxis::Vds => (vgs_fixed, value),
        };

        let point = SweepPoint {
            voltage: value,
            id: drain_current(&tech, width, vgs, vds, polarity),
            gm: transconductance(&tech, width, vgs, vds, polarity, gm_mode),
            cgs: gate_source_cap(&tech, width, vgs, vds, polarity),
            cgd: gate_drain_cap(&tech, width, vgs, vds, polarity),
            power: instantaneous_power(&tech, width, vgs, vds, polarity),
        };
        println!(
            "{:>14.*e} {:>14.*e} {:>14.*e} {:>14.*e} {:>14.*e} {:>14.*e}",
            precision, point.voltage, precision, point.id, precision, point.gm, precision,
            point.cgs, precision, point.cgd, precision, point.power
        );
        points.push(point);

        value += step;
        guard += 1;
        if guard > 1_000_000 {
            eprintln!("sweep aborted: too many steps");
            process::exit(2);
        }
    }

    if let Some(path) = json_path {
        let output = SweepOutput {
            tech_node: tech_name,
            tech,
            polarity,
            gm_mode,
            width,
            swept: axis_name.to_ascii_lowercase(),
            fixed_voltage,
            points,
        };
        let body = match serde_json::to_string_pretty(&output) {
            Ok(body) => body,
            Err(err) => {
                eprintln!("failed to serialize sweep: {}", err);
                process::exit(1);
            }
        };
        if let Err(err) = std::fs::write(&path, body) {
            eprintln!("failed to write {}: {}", path.display(), err);
            process::exit(1);
        }
        println!("json written: {}", path.display());
    }
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> String {
    let Some(value) = args.next() else {
        eprintln!("missing value for {}", flag);
        process::exit(2);
    };
    value
}

fn parse_voltage(s: &str, name: &str) -> f64 {
    match parse_number(s) {
        Some(v) => v,
        None => {
            eprintln!("invalid {} value: {}", name, s);
            process::exit(2);
        }
    }
}

fn parse_positive(s: &str, name: &str) -> f64 {
    let v = parse_voltage(s, name);
    if v <= 0.0 {
        eprintln!("{} must be > 0, got {}", name, v);
        process::exit(2);
    }
    v
}

/// Parse a number with optional SI suffix
fn parse_number(s: &str) -> Option<f64> {
    let lower = s.to_ascii_lowercase();
    let trimmed = lower.trim();

    let (num_str, multiplier) = if trimmed.ends_with("meg") {
        (&trimmed[..trimmed.len() - 3], 1e6)
    } else {
        let (value_part, suffix) = trimmed.split_at(trimmed.len().saturating_sub(1));
        match suffix {
            "f" => (value_part, 1e-15),
            "p" => (value_part, 1e-12),
            "n" => (value_part, 1e-9),
            "u" => (value_part, 1e-6),
            "m" => (value_part, 1e-3),
            "k" => (value_part, 1e3),
            _ => (trimmed, 1.0),
        }
    };

    num_str
        .parse::<f64>()
        .ok()
        .map(|n| n * multiplier)
        .or_else(|| trimmed.parse::<f64>().ok())
}
