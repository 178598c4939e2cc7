//! Planar FET (traditional MOSFET) compact model.
//!
//! A first-order square-law model with channel-length modulation and
//! logistic smoothing between the linear and saturation regions. Intended
//! as a building block for DC and quasi-static transient evaluation inside
//! a circuit simulator; the engine supplies terminal voltages, the model
//! returns currents, sensitivities, and capacitances.
//!
//! ## Module Structure
//!
//! - `params`: technology descriptor (`Tech`) with canonical presets
//! - `types`: polarity and transconductance-mode tags
//! - `raw`: per-region closed forms, not part of the stable contract
//! - `evaluate`: the smoothed public surface
//!
//! ## Usage
//!
//! ```
//! use fet_model::planar::evaluate::drain_current;
//! use fet_model::planar::params::Tech;
//! use fet_model::planar::types::Polarity;
//!
//! let tech = Tech::T180NM;
//! let id = drain_current(&tech, 1e-6, 0.9, 0.5, Polarity::N);
//! assert!(id > 0.0);
//! ```

pub mod evaluate;
pub mod params;
pub mod raw;
pub mod types;

pub use evaluate::{
    drain_current, gate_drain_cap, gate_source_cap, instantaneous_power, transconductance,
    transient_current,
};
pub use params::Tech;
pub use types::{GmMode, Polarity};
