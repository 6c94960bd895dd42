//! Plain parameter record for building diodes from configuration.

/// Diode parameters as they appear in a config file.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiodeParams {
    /// Saturation current in amperes
    pub saturation_current_a: f64,
    /// Ideality (emission) factor, 1..=2
    #[cfg_attr(feature = "serde", serde(default = "default_ideality"))]
    pub ideality_factor: f64,
}

fn default_ideality() -> f64 {
    1.0
}

impl Default for DiodeParams {
    fn default() -> Self {
        Self {
            saturation_current_a: 25e-9,
            ideality_factor: default_ideality(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_reference_diode() {
        let params = DiodeParams::default();
        assert_eq!(params.saturation_current_a, 25e-9);
        assert_eq!(params.ideality_factor, 1.0);
    }
}
