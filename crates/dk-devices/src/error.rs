//! Error types for device operations.

use crate::terminal::TerminalKind;
use dk_core::error::CoreError;
use std::fmt;
use thiserror::Error;

/// Which terminals were missing a voltage when the device was evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingTerminals {
    Anode,
    Cathode,
    Both,
}

impl MissingTerminals {
    /// Classify a pair of "is set" flags. Returns `None` when both are set.
    pub fn from_flags(anode_set: bool, cathode_set: bool) -> Option<Self> {
        match (anode_set, cathode_set) {
            (true, true) => None,
            (false, true) => Some(Self::Anode),
            (true, false) => Some(Self::Cathode),
            (false, false) => Some(Self::Both),
        }
    }
}

impl fmt::Display for MissingTerminals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anode => write!(f, "anode"),
            Self::Cathode => write!(f, "cathode"),
            Self::Both => write!(f, "anode, cathode"),
        }
    }
}

/// Errors that can occur while building or evaluating a device.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeviceError {
    /// A device parameter lies outside its physical range.
    #[error("Parameter out of range: {what} = {value} (expected {min}..={max})")]
    ParameterRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The device was evaluated with incomplete terminal state.
    #[error("Anode and cathode must be set (unset: {missing})")]
    UnsetTerminal { missing: MissingTerminals },

    /// A terminal was given something that is not a real voltage.
    #[error("Terminal {terminal} requires a real voltage, got {value}")]
    TypeConstraint {
        terminal: TerminalKind,
        value: String,
    },

    #[error("Not supported: {what}")]
    NotSupported { what: &'static str },
}

pub type DeviceResult<T> = Result<T, DeviceError>;

impl From<DeviceError> for CoreError {
    fn from(e: DeviceError) -> Self {
        match e {
            DeviceError::ParameterRange {
                what,
                value,
                min,
                max,
            } => CoreError::OutOfRange {
                what,
                value,
                min,
                max,
            },
            DeviceError::UnsetTerminal { .. } => CoreError::InvalidArg {
                what: "unset terminal",
            },
            DeviceError::TypeConstraint { .. } => CoreError::InvalidArg {
                what: "terminal voltage",
            },
            DeviceError::NotSupported { what } => CoreError::InvalidArg { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_message_names_missing_terminals() {
        let err = DeviceError::UnsetTerminal {
            missing: MissingTerminals::Both,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Anode and cathode must be set"));
        assert!(msg.contains("anode, cathode"));

        let err = DeviceError::UnsetTerminal {
            missing: MissingTerminals::Cathode,
        };
        assert!(err.to_string().ends_with("(unset: cathode)"));
    }

    #[test]
    fn missing_from_flags() {
        assert_eq!(MissingTerminals::from_flags(true, true), None);
        assert_eq!(
            MissingTerminals::from_flags(false, true),
            Some(MissingTerminals::Anode)
        );
        assert_eq!(
            MissingTerminals::from_flags(true, false),
            Some(MissingTerminals::Cathode)
        );
        assert_eq!(
            MissingTerminals::from_flags(false, false),
            Some(MissingTerminals::Both)
        );
    }

    #[test]
    fn error_conversion() {
        let dev_err = DeviceError::ParameterRange {
            what: "ideality factor",
            value: 3.0,
            min: 1.0,
            max: 2.0,
        };
        let core_err: CoreError = dev_err.into();
        assert!(matches!(core_err, CoreError::OutOfRange { value, .. } if value == 3.0));
    }
}
