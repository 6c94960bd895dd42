//! Core traits for device models.

use crate::error::{DeviceError, DeviceResult};
use dk_core::units::{Conductance, Current};

/// Trait for two-terminal devices evaluated from their own terminal state.
///
/// Devices are deterministic functions of terminal voltages and fixed
/// parameters. A host may evaluate many devices in parallel as long as each
/// device (and its terminals) is only touched by one worker at a time.
pub trait TwoTerminalDevice: Send + Sync {
    /// Device name for debugging and identification.
    fn name(&self) -> &str;

    /// Current flowing from anode to cathode for the present terminal state.
    ///
    /// Positive current means forward conduction. Fails if the terminal state
    /// is incomplete.
    fn current(&self) -> DeviceResult<Current>;

    /// Optional: small-signal conductance dI/dV at the present terminal state.
    ///
    /// Nonlinear devices expose this so a Newton-style host can linearise them.
    ///
    /// Default implementation returns NotSupported.
    fn conductance(&self) -> DeviceResult<Conductance> {
        Err(DeviceError::NotSupported {
            what: "conductance not implemented for this device",
        })
    }
}
