//! Smoothed public evaluation surface.
//!
//! Every function here is a pure map from raw terminal conditions to one
//! output quantity. The shared shape:
//!
//! 1. explicit cutoff guard on the raw gate voltage (outputs are exactly
//!    zero below threshold, never "almost zero via smoothing");
//! 2. normalize voltages into the N-type sign convention;
//! 3. evaluate both region closed forms from [`raw`](super::raw);
//! 4. blend them with the logistic weight of the region margin.
//!
//! Drain current is signed per polarity: positive for a conducting N
//! device, negative for a conducting P device. Transconductance is the
//! true sensitivity dId/dVgs and comes out non-negative for a conducting
//! device of either polarity; capacitances are polarity-symmetric.

use super::params::Tech;
use super::raw;
use super::types::{GmMode, Polarity};
use crate::smoothing::smooth_blend;

/// Floor for the finite-difference gate perturbation [V].
const GM_STEP_FLOOR: f64 = 1e-3;

/// Drain current [A].
///
/// Smoothed between the linear and saturation closed forms; zero in
/// cutoff. Signed per polarity.
///
/// # Arguments
/// * `tech` - Technology descriptor
/// * `w` - Channel width [m]
/// * `vgs`, `vds` - Raw terminal voltages [V]
/// * `polarity` - Channel type
pub fn drain_current(tech: &Tech, w: f64, vgs: f64, vds: f64, polarity: Polarity) -> f64 {
    if !raw::is_conducting(tech, vgs, polarity) {
        return 0.0;
    }
    let (nvgs, nvds) = raw::normalize(vgs, vds, polarity);
    let mu = raw::mobility(tech, vgs);
    let gamma = raw::region_margin(tech, nvgs, nvds);
    let id = smooth_blend(
        tech.beta,
        gamma,
        raw::id_sat(tech, w, mu, nvgs, nvds),
        raw::id_lin(tech, w, mu, nvgs, nvds),
    );
    match polarity {
        Polarity::N => id,
        Polarity::P => -id,
    }
}

/// Small-signal transconductance dId/dVgs [A/V].
///
/// `GmMode::Analytic` blends the per-region closed-form derivatives with
/// the same weight as the current. `GmMode::Numeric` forward-differences
/// [`drain_current`] with a step of `max(0.01 * Vt, 1e-3)` volts; the
/// step sign is flipped for P-type so the perturbation moves toward
/// stronger conduction. Both the floor and the sign flip are stability
/// policy, not approximation artifacts.
pub fn transconductance(
    tech: &Tech,
    w: f64,
    vgs: f64,
    vds: f64,
    polarity: Polarity,
    mode: GmMode,
) -> f64 {
    if !raw::is_conducting(tech, vgs, polarity) {
        return 0.0;
    }
    match mode {
        GmMode::Analytic => {
            let (nvgs, nvds) = raw::normalize(vgs, vds, polarity);
            let mu = raw::mobility(tech, vgs);
            let gamma = raw::region_margin(tech, nvgs, nvds);
            smooth_blend(
                tech.beta,
                gamma,
                raw::gm_sat(tech, w, mu, nvgs),
                raw::gm_lin(tech, w, mu, nvds),
            )
        }
        GmMode::Numeric => {
            // step scales with Vt so small nodes are not over-perturbed
            let mut delta = (0.01 * tech.vt).max(GM_STEP_FLOOR);
            if polarity == Polarity::P {
                delta = -delta;
            }
            let id_0 = drain_current(tech, w, vgs, vds, polarity);
            let id_1 = drain_current(tech, w, vgs + delta, vds, polarity);
            (id_1 - id_0) / delta
        }
    }
}

/// Gate-source capacitance [F], including the fixed overlap term.
///
/// Equals `Covl` exactly in cutoff; above threshold the channel
/// contribution (computed on the overlap-reduced width `W - Lovl`) is
/// blended between its linear and saturation partitions with `Covl` as a
/// fixed parallel term.
pub fn gate_source_cap(tech: &Tech, w: f64, vgs: f64, vds: f64, polarity: Polarity) -> f64 {
    if !raw::is_conducting(tech, vgs, polarity) {
        return tech.covl;
    }
    let (nvgs, nvds) = raw::normalize(vgs, vds, polarity);
    let gamma = raw::region_margin(tech, nvgs, nvds);
    let wch = w - tech.lovl;
    smooth_blend(
        tech.beta,
        gamma,
        raw::cgs_sat(tech, wch) + tech.covl,
        raw::cgs_lin(tech, wch) + tech.covl,
    )
}

/// Gate-drain capacitance [F], including the fixed overlap term.
pub fn gate_drain_cap(tech: &Tech, w: f64, vgs: f64, vds: f64, polarity: Polarity) -> f64 {
    if !raw::is_conducting(tech, vgs, polarity) {
        return tech.covl;
    }
    let (nvgs, nvds) = raw::normalize(vgs, vds, polarity);
    let gamma = raw::region_margin(tech, nvgs, nvds);
    let wch = w - tech.lovl;
    smooth_blend(
        tech.beta,
        gamma,
        raw::cgd_sat(tech, wch) + tech.covl,
        raw::cgd_lin(tech, wch) + tech.covl,
    )
}

/// Quasi-static transient current [A].
///
/// First-order superposition `Id + Cgs*dVgs/dt + Cgd*dVds/dt`; does not
/// account for capacitance derivatives with respect to bias.
#[allow(clippy::too_many_arguments)]
pub fn transient_current(
    tech: &Tech,
    w: f64,
    vgs: f64,
    vds: f64,
    dvgs_dt: f64,
    dvds_dt: f64,
    polarity: Polarity,
) -> f64 {
    let id = drain_current(tech, w, vgs, vds, polarity);
    let cgs = gate_source_cap(tech, w, vgs, vds, polarity);
    let cgd = gate_drain_cap(tech, w, vgs, vds, polarity);
    id + cgs * dvgs_dt + cgd * dvds_dt
}

/// Instantaneous power [W]. Local diagnostic, not an energy integral.
///
/// `Vds * Id`, with the Vds sign flipped for P-type since the drain
/// current itself is signed per polarity.
pub fn instantaneous_power(tech: &Tech, w: f64, vgs: f64, vds: f64, polarity: Polarity) -> f64 {
    let vds_signed = match polarity {
        Polarity::N => vds,
        Polarity::P => -vds,
    };
    vds_signed * drain_current(tech, w, vgs, vds, polarity)
}
