//! Bias-matrix tests for the smoothed planar FET surface.
//!
//! Each public quantity is checked against the per-region closed forms at
//! five canonical 180 nm bias conditions, for both polarities. The raw
//! reference formulas live in `fet_model::planar::raw`; the blend should
//! land within tolerance of whichever region dominates at each condition.

use float_eq::float_eq;

use fet_model::planar::raw;
use fet_model::{
    drain_current, gate_drain_cap, gate_source_cap, instantaneous_power, transconductance,
    transient_current, GmMode, Polarity, Tech,
};

const W: f64 = 1e-6;
const ID_TOL: f64 = 1e-6;
const CAP_TOL: f64 = 1e-6;
// relaxed: the analytic blend mixes a little of the far region in
const GM_TOL: f64 = 1.5e-5;

#[derive(Clone, Copy)]
enum Condition {
    Cutoff,
    LinBarelyOn,
    LinAlmostSat,
    SatBarely,
    SatDeep,
}

/// N-convention bias point for a condition; P tests mirror the signs.
fn bias(tech: &Tech, cond: Condition) -> (f64, f64) {
    match cond {
        Condition::Cutoff => (tech.vt - 0.1, 0.5),
        Condition::LinBarelyOn => (tech.vt + 0.01, 0.0),
        Condition::LinAlmostSat => {
            let vgs = tech.vt + 0.2;
            (vgs, vgs - tech.vt - 0.01)
        }
        Condition::SatBarely => {
            let vgs = tech.vt + 0.5;
            (vgs, vgs - tech.vt)
        }
        Condition::SatDeep => {
            let vgs = tech.vt + 0.7;
            (vgs, vgs)
        }
    }
}

fn mirrored(vgs: f64, vds: f64, polarity: Polarity) -> (f64, f64) {
    match polarity {
        Polarity::N => (vgs, vds),
        Polarity::P => (-vgs, -vds),
    }
}

/// Reference drain current from the dominant-region closed form, signed
/// per polarity and using the mobility the raw gate sign selects.
fn ref_id(tech: &Tech, cond: Condition, polarity: Polarity) -> f64 {
    let (nvgs, nvds) = bias(tech, cond);
    let mu = match polarity {
        Polarity::N => tech.mu_n,
        Polarity::P => tech.mu_p,
    };
    let magnitude = match cond {
        Condition::Cutoff => 0.0,
        Condition::LinBarelyOn | Condition::LinAlmostSat => raw::id_lin(tech, W, mu, nvgs, nvds),
        Condition::SatBarely | Condition::SatDeep => raw::id_sat(tech, W, mu, nvgs, nvds),
    };
    match polarity {
        Polarity::N => magnitude,
        Polarity::P => -magnitude,
    }
}

fn ref_gm(tech: &Tech, cond: Condition, polarity: Polarity) -> f64 {
    let (nvgs, nvds) = bias(tech, cond);
    let mu = match polarity {
        Polarity::N => tech.mu_n,
        Polarity::P => tech.mu_p,
    };
    match cond {
        Condition::Cutoff => 0.0,
        Condition::LinBarelyOn | Condition::LinAlmostSat => raw::gm_lin(tech, W, mu, nvds),
        Condition::SatBarely | Condition::SatDeep => raw::gm_sat(tech, W, mu, nvgs),
    }
}

fn ref_cgs(tech: &Tech, cond: Condition) -> f64 {
    let wch = W - tech.lovl;
    match cond {
        Condition::Cutoff => tech.covl,
        Condition::LinBarelyOn | Condition::LinAlmostSat => raw::cgs_lin(tech, wch) + tech.covl,
        Condition::SatBarely | Condition::SatDeep => raw::cgs_sat(tech, wch) + tech.covl,
    }
}

fn ref_cgd(tech: &Tech, cond: Condition) -> f64 {
    let wch = W - tech.lovl;
    match cond {
        Condition::Cutoff => tech.covl,
        Condition::LinBarelyOn | Condition::LinAlmostSat => raw::cgd_lin(tech, wch) + tech.covl,
        Condition::SatBarely | Condition::SatDeep => raw::cgd_sat(tech, wch) + tech.covl,
    }
}

const ALL_CONDITIONS: [Condition; 5] = [
    Condition::Cutoff,
    Condition::LinBarelyOn,
    Condition::LinAlmostSat,
    Condition::SatBarely,
    Condition::SatDeep,
];

#[test]
fn id_matches_region_forms_ntype() {
    let tech = Tech::T180NM;
    for cond in ALL_CONDITIONS {
        let (vgs, vds) = bias(&tech, cond);
        let id = drain_current(&tech, W, vgs, vds, Polarity::N);
        assert!(id >= 0.0);
        assert!(float_eq!(id, ref_id(&tech, cond, Polarity::N), abs <= ID_TOL));
    }
}

#[test]
fn id_matches_region_forms_ptype() {
    let tech = Tech::T180NM;
    for cond in ALL_CONDITIONS {
        let (vgs, vds) = bias(&tech, cond);
        let (vgs, vds) = mirrored(vgs, vds, Polarity::P);
        let id = drain_current(&tech, W, vgs, vds, Polarity::P);
        assert!(id <= 0.0);
        assert!(float_eq!(id, ref_id(&tech, cond, Polarity::P), abs <= ID_TOL));
    }
}

#[test]
fn id_deep_saturation_strictly_positive() {
    let tech = Tech::T180NM;
    let (vgs, vds) = bias(&tech, Condition::SatDeep);
    assert!(drain_current(&tech, W, vgs, vds, Polarity::N) > 0.0);
}

#[test]
fn gm_analytic_matches_region_forms() {
    let tech = Tech::T180NM;
    for pol in [Polarity::N, Polarity::P] {
        for cond in ALL_CONDITIONS {
            let (vgs, vds) = bias(&tech, cond);
            let (vgs, vds) = mirrored(vgs, vds, pol);
            let gm = transconductance(&tech, W, vgs, vds, pol, GmMode::Analytic);
            assert!(float_eq!(gm, ref_gm(&tech, cond, pol), abs <= GM_TOL));
        }
    }
}

#[test]
fn gm_numeric_tracks_analytic() {
    let tech = Tech::T180NM;
    for pol in [Polarity::N, Polarity::P] {
        for cond in ALL_CONDITIONS {
            let (vgs, vds) = bias(&tech, cond);
            let (vgs, vds) = mirrored(vgs, vds, pol);
            let analytic = transconductance(&tech, W, vgs, vds, pol, GmMode::Analytic);
            let numeric = transconductance(&tech, W, vgs, vds, pol, GmMode::Numeric);
            assert!(
                float_eq!(analytic, numeric, abs <= 3e-5),
                "analytic={} numeric={}",
                analytic,
                numeric
            );
        }
    }
}

#[test]
fn caps_match_region_forms() {
    let tech = Tech::T180NM;
    for pol in [Polarity::N, Polarity::P] {
        for cond in ALL_CONDITIONS {
            let (vgs, vds) = bias(&tech, cond);
            let (vgs, vds) = mirrored(vgs, vds, pol);
            let cgs = gate_source_cap(&tech, W, vgs, vds, pol);
            let cgd = gate_drain_cap(&tech, W, vgs, vds, pol);
            assert!(float_eq!(cgs, ref_cgs(&tech, cond), abs <= CAP_TOL));
            assert!(float_eq!(cgd, ref_cgd(&tech, cond), abs <= CAP_TOL));
        }
    }
}

#[test]
fn caps_in_cutoff_are_exactly_overlap() {
    let tech = Tech::T180NM;
    let (vgs, vds) = bias(&tech, Condition::Cutoff);
    assert_eq!(gate_source_cap(&tech, W, vgs, vds, Polarity::N), tech.covl);
    assert_eq!(gate_drain_cap(&tech, W, vgs, vds, Polarity::N), tech.covl);
}

#[test]
fn ptype_mirror_of_sat_barely_matches_magnitude() {
    // scenario: raw Vgs = -(Vt+0.5), Vds = -(Vgs'-Vt); Id negative with
    // the saturation magnitude for the hole mobility
    let tech = Tech::T180NM;
    let (nvgs, nvds) = bias(&tech, Condition::SatBarely);
    let id = drain_current(&tech, W, -nvgs, -nvds, Polarity::P);
    assert!(id < 0.0);
    let expected = raw::id_sat(&tech, W, tech.mu_p, nvgs, nvds);
    assert!(float_eq!(-id, expected, abs <= ID_TOL));
}

#[test]
fn bias_matrix_on_65nm_node() {
    // same qualitative behavior on the denser node
    let tech = Tech::T065NM;
    for cond in ALL_CONDITIONS {
        let (vgs, vds) = bias(&tech, cond);
        let id = drain_current(&tech, W, vgs, vds, Polarity::N);
        assert!(float_eq!(id, ref_id(&tech, cond, Polarity::N), abs <= ID_TOL));
    }
}

#[test]
fn transient_and_power_compose_public_quantities() {
    let tech = Tech::T180NM;
    let (vgs, vds) = bias(&tech, Condition::SatBarely);

    let id = drain_current(&tech, W, vgs, vds, Polarity::N);
    let cgs = gate_source_cap(&tech, W, vgs, vds, Polarity::N);
    let cgd = gate_drain_cap(&tech, W, vgs, vds, Polarity::N);

    let it = transient_current(&tech, W, vgs, vds, 2e8, 1e8, Polarity::N);
    assert!(float_eq!(it, id + cgs * 2e8 + cgd * 1e8, abs <= 1e-12));

    let p = instantaneous_power(&tech, W, vgs, vds, Polarity::N);
    assert!(float_eq!(p, vds * id, abs <= 1e-12));
}
