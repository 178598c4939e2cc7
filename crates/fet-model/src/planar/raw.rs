//! Per-region closed forms and classification helpers.
//!
//! Everything here is reachable so the formulas can be tested directly
//! against the smoothed public surface, but it is NOT part of the stable
//! public contract: signatures and semantics may change between releases.
//! Callers wanting simulator-facing quantities should use
//! [`evaluate`](super::evaluate).
//!
//! Current/transconductance formulas take pre-normalized voltages (see
//! [`normalize`]) and a pre-selected mobility (see [`mobility`]); they do
//! not re-check conduction. The capacitance formulas take the
//! overlap-reduced channel width `W - Lovl`.

use super::params::Tech;
use super::types::Polarity;

/// Map raw terminal voltages into the shared N-type sign convention.
///
/// Identity for N-type; negates both voltages for P-type so every region
/// formula can be written once.
pub fn normalize(vgs: f64, vds: f64, polarity: Polarity) -> (f64, f64) {
    match polarity {
        Polarity::N => (vgs, vds),
        Polarity::P => (-vgs, -vds),
    }
}

/// Channel conduction test on the raw (un-normalized) gate-source voltage.
///
/// N-type conducts for `vgs >= Vt`, P-type for `vgs <= -Vt`. Below
/// threshold the device is in cutoff and every variable output quantity
/// is exactly zero.
pub fn is_conducting(tech: &Tech, vgs: f64, polarity: Polarity) -> bool {
    match polarity {
        Polarity::N => vgs >= tech.vt,
        Polarity::P => vgs <= -tech.vt,
    }
}

/// Signed distance from the linear/saturation boundary (gamma).
///
/// Zero at `Vds = Vgs - Vt`; positive favors saturation, negative favors
/// linear. Used as the gamma argument to the smoothing utilities.
pub fn region_margin(tech: &Tech, vgs: f64, vds: f64) -> f64 {
    vds - vgs + tech.vt
}

/// Carrier mobility selected by the sign of the raw gate voltage.
///
/// Electron mobility for `vgs > 0`, hole mobility otherwise. Selection is
/// deliberately by the un-normalized voltage sign, not the polarity tag;
/// the two differ right at the normalization boundary and the voltage-sign
/// form is the reference behavior.
pub fn mobility(tech: &Tech, vgs: f64) -> f64 {
    if vgs > 0.0 {
        tech.mu_n
    } else {
        tech.mu_p
    }
}

/// Linear (triode) region drain current [A].
pub fn id_lin(tech: &Tech, w: f64, mu: f64, vgs: f64, vds: f64) -> f64 {
    mu * tech.cox
        * (w / tech.l)
        * ((vgs - tech.vt) * vds - vds * vds / 2.0)
        * (1.0 + tech.lambda * vds)
}

/// Saturation region drain current [A].
pub fn id_sat(tech: &Tech, w: f64, mu: f64, vgs: f64, vds: f64) -> f64 {
    let vov = vgs - tech.vt;
    0.5 * mu * tech.cox * (w / tech.l) * vov * vov * (1.0 + tech.lambda * vds)
}

/// Linear region transconductance dId/dVgs [A/V].
pub fn gm_lin(tech: &Tech, w: f64, mu: f64, vds: f64) -> f64 {
    mu * tech.cox * (w / tech.l) * vds
}

/// Saturation region transconductance dId/dVgs [A/V].
pub fn gm_sat(tech: &Tech, w: f64, mu: f64, vgs: f64) -> f64 {
    mu * tech.cox * (w / tech.l) * (vgs - tech.vt)
}

/// Linear region gate-source channel capacitance [F].
pub fn cgs_lin(tech: &Tech, w: f64) -> f64 {
    0.5 * tech.cox * w * tech.l
}

/// Saturation region gate-source channel capacitance [F].
///
/// 2/3 of the channel charge partitions to the source end when the
/// channel pinches off at the drain.
pub fn cgs_sat(tech: &Tech, w: f64) -> f64 {
    (2.0 / 3.0) * tech.cox * w * tech.l
}

/// Linear region gate-drain channel capacitance [F].
pub fn cgd_lin(tech: &Tech, w: f64) -> f64 {
    0.5 * tech.cox * w * tech.l
}

/// Saturation region gate-drain channel capacitance [F].
pub fn cgd_sat(tech: &Tech, w: f64) -> f64 {
    (1.0 / 3.0) * tech.cox * w * tech.l
}
