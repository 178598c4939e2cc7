//! Physical constants for gate-stack capacitance.
//!
//! Kept as an immutable value object that is passed into [`Tech`]
//! construction rather than referenced as ambient global state.
//!
//! [`Tech`]: crate::planar::params::Tech

use serde::Serialize;

/// Permittivity constants describing a gate dielectric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OxideConstants {
    /// Permittivity of free space [F/m]
    pub eps0: f64,
    /// Relative permittivity of the gate dielectric [dimensionless]
    pub eta_ox: f64,
}

impl OxideConstants {
    /// Absolute permittivity of the dielectric [F/m]
    pub fn eps_ox(&self) -> f64 {
        self.eps0 * self.eta_ox
    }
}

/// Thermally grown silicon dioxide (~34.53e-12 F/m)
pub const SILICON_DIOXIDE: OxideConstants = OxideConstants {
    eps0: 8.854e-12,
    eta_ox: 3.9,
};
