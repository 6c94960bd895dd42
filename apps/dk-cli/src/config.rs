//! Diode parameter resolution: `DiodeParams::default()`, then the YAML file, then flags.

use crate::error::{CliError, CliResult};
use dk_devices::DiodeParams;
use serde::Deserialize;
use std::path::Path;

/// Top-level config file layout.
///
/// ```yaml
/// diode:
///   saturation_current_a: 2.5e-8
///   ideality_factor: 1.3
/// ```
#[derive(Debug, Deserialize)]
pub struct CliConfig {
    pub diode: DiodeParams,
}

pub fn parse_config(content: &str) -> CliResult<CliConfig> {
    Ok(serde_yaml::from_str(content)?)
}

pub fn load_config(path: &Path) -> CliResult<CliConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_config(&content)
}

/// Merge config and command-line overrides. Flags win over the file.
pub fn resolve_params(
    file: Option<&CliConfig>,
    saturation_current_a: Option<f64>,
    ideality_factor: Option<f64>,
) -> DiodeParams {
    let mut params = file.map(|c| c.diode).unwrap_or_default();
    if let Some(is) = saturation_current_a {
        params.saturation_current_a = is;
    }
    if let Some(n) = ideality_factor {
        params.ideality_factor = n;
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_file_or_flags() {
        let p = resolve_params(None, None, None);
        assert_eq!(p, DiodeParams::default());
        assert_eq!(p.ideality_factor, 1.0);
    }

    #[test]
    fn flags_override_file() {
        let cfg = parse_config("diode:\n  saturation_current_a: 1.0e-12\n  ideality_factor: 1.8\n")
            .unwrap();
        let p = resolve_params(Some(&cfg), None, Some(1.3));
        assert_eq!(p.saturation_current_a, 1.0e-12);
        assert_eq!(p.ideality_factor, 1.3);
    }

    #[test]
    fn bad_yaml_is_reported() {
        let err = parse_config("diode: [1, 2]").unwrap_err();
        assert!(matches!(err, CliError::ConfigParse(_)));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = load_config(Path::new("/nonexistent/dk.yaml")).unwrap_err();
        assert!(matches!(err, CliError::ConfigRead { .. }));
    }
}
