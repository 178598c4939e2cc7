//! Planar FET type tags.

use serde::Serialize;

/// Device polarity (channel type).
///
/// Selects the sign convention: every internal formula is written for
/// N-type and reused for P-type by negating the terminal voltages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Polarity {
    /// N-channel: conducts for Vgs >= Vt, positive drain current.
    N,
    /// P-channel: conducts for Vgs <= -Vt, negative drain current.
    P,
}

/// Transconductance evaluation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GmMode {
    /// Closed-form partial derivative of the region currents.
    Analytic,
    /// Finite difference of the smoothed drain current. Exists to
    /// validate the analytic model and for callers needing an empirical
    /// sensitivity without a closed-form derivative.
    Numeric,
}
