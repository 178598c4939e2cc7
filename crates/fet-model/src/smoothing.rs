//! Continuous blending between operating regions.
//!
//! Region classification is never switched discretely in the public model
//! output: the linear-region and saturation-region closed forms are both
//! evaluated and combined through a logistic weight of the signed distance
//! from the region boundary. This keeps every public quantity and its
//! derivative continuous across the boundary, which a Newton-type solver
//! consuming the model relies on.

/// Offset added to gamma before the logistic, breaking exact-boundary
/// ties deterministically toward the saturation branch.
pub const GAMMA_OFFSET: f64 = 0.04;

/// Exponent clamp so the logistic saturates instead of overflowing.
const EXP_ARG_LIMIT: f64 = 700.0;

/// Logistic blending weight.
///
/// `beta` sets the transition sharpness (larger is sharper), `gamma` is
/// the signed distance from the linear/saturation boundary. Total over
/// all finite inputs: the result is never NaN or infinite, saturating to
/// the nearest representable value deep in either tail.
pub fn blend_weight(beta: f64, gamma: f64) -> f64 {
    let arg = (-beta * (gamma + GAMMA_OFFSET)).clamp(-EXP_ARG_LIMIT, EXP_ARG_LIMIT);
    1.0 / (1.0 + arg.exp())
}

/// Weighted blend of the two region candidates.
///
/// `toward_sat` is the saturation-region value, `toward_lin` the
/// linear-region value; the weight favors `toward_sat` as gamma grows.
pub fn smooth_blend(beta: f64, gamma: f64, toward_sat: f64, toward_lin: f64) -> f64 {
    let alpha = blend_weight(beta, gamma);
    alpha * toward_sat + (1.0 - alpha) * toward_lin
}
