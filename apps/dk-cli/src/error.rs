use dk_devices::DeviceError;
use std::path::PathBuf;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Device(#[from] DeviceError),

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config YAML: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },
}
