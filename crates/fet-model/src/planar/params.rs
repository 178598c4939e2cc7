//! Technology descriptor.
//!
//! One immutable bundle of process and geometry constants per fabrication
//! node, shared read-only by every device instance on that node.

use serde::Serialize;

use crate::constants::{OxideConstants, SILICON_DIOXIDE};
use crate::error::TechError;

/// Process/geometry constants for one technology node.
///
/// `cox` and `covl` are derived from the oxide constants at construction
/// and are never set directly; [`Tech::new`] is the validated entry point,
/// and the `T180NM`/`T065NM` presets are known-good canonical nodes.
/// A descriptor never changes after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tech {
    /// Channel length [m]
    pub l: f64,
    /// Gate oxide thickness [m]
    pub tox: f64,
    /// Drain/source gate overlap length [m]
    pub lovl: f64,
    /// Threshold voltage magnitude [V]
    pub vt: f64,
    /// Electron mobility [m^2/V*s]
    pub mu_n: f64,
    /// Hole mobility [m^2/V*s]
    pub mu_p: f64,
    /// Channel length modulation [1/V]
    pub lambda: f64,
    /// Linear->saturation smoothing sharpness [1/V]
    pub beta: f64,
    /// Gate capacitance per unit area [F/m^2], derived
    pub cox: f64,
    /// Fixed gate overlap capacitance [F], derived
    pub covl: f64,
}

impl Tech {
    /// Canonical 180 nm node.
    pub const T180NM: Tech = Tech {
        l: 180e-9,
        tox: 5e-9,
        lovl: 15e-9,
        vt: 0.4,
        mu_n: 35e-3,
        mu_p: 15e-3,
        lambda: 0.015,
        beta: 100.0,
        cox: SILICON_DIOXIDE.eps0 * SILICON_DIOXIDE.eta_ox / 5e-9,
        covl: SILICON_DIOXIDE.eps0 * SILICON_DIOXIDE.eta_ox * 15e-9 / 5e-9,
    };

    /// Canonical 65 nm node.
    pub const T065NM: Tech = Tech {
        l: 65e-9,
        tox: 2.5e-9,
        lovl: 10e-9,
        vt: 0.25,
        mu_n: 45e-3,
        mu_p: 25e-3,
        lambda: 0.02,
        beta: 200.0,
        cox: SILICON_DIOXIDE.eps0 * SILICON_DIOXIDE.eta_ox / 2.5e-9,
        covl: SILICON_DIOXIDE.eps0 * SILICON_DIOXIDE.eta_ox * 10e-9 / 2.5e-9,
    };

    /// Validating constructor.
    ///
    /// Rejects non-physical parameters at construction time instead of
    /// deferring to evaluation: `l`, `tox`, `vt`, `mu_n`, `mu_p`, `beta`
    /// must be strictly positive; `lovl` and `lambda` may be zero but not
    /// negative. The oxide constants are injected so the derived `cox`
    /// and `covl` carry no ambient global state.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        oxide: OxideConstants,
        l: f64,
        tox: f64,
        lovl: f64,
        vt: f64,
        mu_n: f64,
        mu_p: f64,
        lambda: f64,
        beta: f64,
    ) -> Result<Tech, TechError> {
        require_positive("L", l)?;
        require_positive("Tox", tox)?;
        require_non_negative("Lovl", lovl)?;
        require_positive("Vt", vt)?;
        require_positive("MUn", mu_n)?;
        require_positive("MUp", mu_p)?;
        require_non_negative("LAMBDA", lambda)?;
        require_positive("BETA", beta)?;

        let eps_ox = oxide.eps_ox();
        Ok(Tech {
            l,
            tox,
            lovl,
            vt,
            mu_n,
            mu_p,
            lambda,
            beta,
            cox: eps_ox / tox,
            covl: eps_ox * lovl / tox,
        })
    }
}

fn require_positive(name: &'static str, value: f64) -> Result<(), TechError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(TechError::NonPositive { name, value })
    }
}

fn require_non_negative(name: &'static str, value: f64) -> Result<(), TechError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(TechError::Negative { name, value })
    }
}
