//! Compact planar-FET device model for circuit simulation.
//!
//! Maps instantaneous terminal voltages (and their rates of change) to a
//! drain current, small-signal transconductance, gate capacitances,
//! transient current, and instantaneous power, parameterized by a
//! technology descriptor ([`Tech`]).
//!
//! All evaluation functions are pure and stateless: a surrounding
//! simulation engine holds one descriptor per process node and calls them
//! at every iteration or timestep. There is no shared mutable state, so
//! any number of threads may evaluate concurrently on the same descriptor.
//!
//! ## Module structure
//!
//! - `constants`: oxide permittivity constants injected into `Tech`
//! - `smoothing`: logistic blending between operating regions
//! - `error`: construction-time contract violations
//! - `planar`: the model proper (params, types, region formulas, public API)

pub mod constants;
pub mod error;
pub mod planar;
pub mod smoothing;

pub use constants::{OxideConstants, SILICON_DIOXIDE};
pub use error::TechError;
pub use planar::evaluate::{
    drain_current, gate_drain_cap, gate_source_cap, instantaneous_power, transconductance,
    transient_current,
};
pub use planar::params::Tech;
pub use planar::types::{GmMode, Polarity};
