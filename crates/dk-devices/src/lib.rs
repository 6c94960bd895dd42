//! dk-devices: semiconductor device models for circuit simulation hosts.
//!
//! Provides:
//! - Terminals holding an optional node voltage (unset is distinct from 0 V)
//! - A junction diode with a clamped exponential current law
//!
//! Devices implement the `TwoTerminalDevice` trait and are deterministic
//! functions of terminal state and parameters. Netlists, topology and the
//! nonlinear solver live in the host.
//!
//! # Example
//!
//! ```
//! use dk_devices::{Diode, TwoTerminalDevice};
//! use dk_core::units::{amps, volts};
//!
//! let mut diode = Diode::with_ideality("D1".into(), amps(25e-9), 1.3).unwrap();
//!
//! // Unset terminals are an error, not a zero reading
//! assert!(diode.current().is_err());
//!
//! diode.anode_mut().set(volts(0.2)).unwrap();
//! diode.cathode_mut().set(volts(-0.2)).unwrap();
//!
//! let i = diode.current().unwrap();
//! println!("{diode}\ncurrent: {} A", i.value);
//! ```

pub mod common;
pub mod diode;
pub mod error;
pub mod params;
pub mod terminal;
pub mod traits;

// Re-exports
pub use diode::{Diode, IDEALITY_MAX, IDEALITY_MIN, MAX_FORWARD_DROP_V};
pub use error::{DeviceError, DeviceResult, MissingTerminals};
pub use params::DiodeParams;
pub use terminal::{Terminal, TerminalKind};
pub use traits::TwoTerminalDevice;
