//! Voltage terminals ("pins") owned by a device.

use crate::error::{DeviceError, DeviceResult};
use dk_core::units::{Voltage, volts};
use std::fmt;

/// Which end of a two-terminal device a [`Terminal`] sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalKind {
    Anode,
    Cathode,
}

impl fmt::Display for TerminalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminalKind::Anode => write!(f, "anode"),
            TerminalKind::Cathode => write!(f, "cathode"),
        }
    }
}

/// A device terminal holding an optional node voltage.
///
/// A fresh terminal is unset. "Unset" is its own state and never reads as 0 V,
/// so a device cannot silently evaluate against a voltage nobody supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct Terminal {
    kind: TerminalKind,
    voltage: Option<Voltage>,
}

impl Terminal {
    /// Create an unset terminal.
    pub fn new(kind: TerminalKind) -> Self {
        Self {
            kind,
            voltage: None,
        }
    }

    pub fn kind(&self) -> TerminalKind {
        self.kind
    }

    /// Store a voltage on the terminal.
    ///
    /// NaN and infinities are not real voltages and are rejected with
    /// [`DeviceError::TypeConstraint`]; the previous value is kept in that case.
    pub fn set(&mut self, v: Voltage) -> DeviceResult<()> {
        if !v.value.is_finite() {
            return Err(DeviceError::TypeConstraint {
                terminal: self.kind,
                value: v.value.to_string(),
            });
        }
        self.voltage = Some(v);
        Ok(())
    }

    /// Parse a voltage in volts from text and store it.
    pub fn set_from_str(&mut self, text: &str) -> DeviceResult<()> {
        let value: f64 = text
            .trim()
            .parse()
            .map_err(|_| DeviceError::TypeConstraint {
                terminal: self.kind,
                value: text.to_string(),
            })?;
        self.set(volts(value))
    }

    /// Clear the stored voltage (models a disconnected pin).
    pub fn unset(&mut self) {
        self.voltage = None;
    }

    /// Stored voltage, or `None` if unset.
    pub fn read(&self) -> Option<Voltage> {
        self.voltage
    }

    pub fn is_set(&self) -> bool {
        self.voltage.is_some()
    }
}
