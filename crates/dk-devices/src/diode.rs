//! Junction diode with an exponential (Shockley) current law.

use crate::common::{check_range, clamp_upper};
use crate::error::{DeviceError, DeviceResult, MissingTerminals};
use crate::params::DiodeParams;
use crate::terminal::{Terminal, TerminalKind};
use crate::traits::TwoTerminalDevice;
use dk_core::units::{Conductance, Current, Voltage, amps, constants, siemens, volts};
use std::fmt;
use tracing::{debug, trace, warn};

/// Forward drop at which conduction is treated as saturated (V).
pub const MAX_FORWARD_DROP_V: f64 = 0.7;

/// Lower bound (inclusive) of the ideality factor.
pub const IDEALITY_MIN: f64 = 1.0;
/// Upper bound (inclusive) of the ideality factor.
pub const IDEALITY_MAX: f64 = 2.0;

/// Two-terminal junction diode.
///
/// Parameters are fixed at construction. The only mutable state is the pair
/// of owned terminals, which the host sets between evaluations.
///
/// Current law: `I = Is * (exp(Vd / (n * Vt)) - 1)` where `Vd` is the forward
/// drop clamped from above at 0.7 V. Reverse bias is not clamped, so large
/// reverse drops settle at `-Is`.
#[derive(Debug, Clone)]
pub struct Diode {
    name: String,
    saturation_current: Current,
    ideality_factor: f64,
    max_forward_drop: Voltage,
    thermal_voltage: Voltage,
    anode: Terminal,
    cathode: Terminal,
}

impl Diode {
    /// Create a diode with ideality factor 1.
    pub fn new(name: String, saturation_current: Current) -> Self {
        Self::build(name, saturation_current, IDEALITY_MIN)
    }

    /// Create a diode with an explicit ideality factor.
    ///
    /// Fails with [`DeviceError::ParameterRange`] unless `1 <= ideality_factor <= 2`.
    pub fn with_ideality(
        name: String,
        saturation_current: Current,
        ideality_factor: f64,
    ) -> DeviceResult<Self> {
        let n = check_range(ideality_factor, IDEALITY_MIN, IDEALITY_MAX, "ideality factor")?;
        Ok(Self::build(name, saturation_current, n))
    }

    /// Create a diode from a config parameter record.
    pub fn from_params(name: String, params: &DiodeParams) -> DeviceResult<Self> {
        Self::with_ideality(
            name,
            amps(params.saturation_current_a),
            params.ideality_factor,
        )
    }

    fn build(name: String, saturation_current: Current, ideality_factor: f64) -> Self {
        if saturation_current.value.is_nan() || saturation_current.value <= 0.0 {
            warn!(
                device = %name,
                is_a = saturation_current.value,
                "saturation current should be positive"
            );
        }
        debug!(
            device = %name,
            is_a = saturation_current.value,
            n = ideality_factor,
            "diode created"
        );
        Self {
            name,
            saturation_current,
            ideality_factor,
            max_forward_drop: volts(MAX_FORWARD_DROP_V),
            thermal_voltage: constants::thermal_voltage(),
            anode: Terminal::new(TerminalKind::Anode),
            cathode: Terminal::new(TerminalKind::Cathode),
        }
    }

    pub fn saturation_current(&self) -> Current {
        self.saturation_current
    }

    pub fn ideality_factor(&self) -> f64 {
        self.ideality_factor
    }

    pub fn max_forward_drop(&self) -> Voltage {
        self.max_forward_drop
    }

    pub fn thermal_voltage(&self) -> Voltage {
        self.thermal_voltage
    }

    pub fn anode(&self) -> &Terminal {
        &self.anode
    }

    pub fn anode_mut(&mut self) -> &mut Terminal {
        &mut self.anode
    }

    pub fn cathode(&self) -> &Terminal {
        &self.cathode
    }

    pub fn cathode_mut(&mut self) -> &mut Terminal {
        &mut self.cathode
    }

    /// Set both terminal voltages at once.
    ///
    /// The anode is checked first; if either value is rejected neither terminal changes.
    pub fn set_bias(&mut self, anode: Voltage, cathode: Voltage) -> DeviceResult<()> {
        let mut a = self.anode.clone();
        let mut c = self.cathode.clone();
        a.set(anode)?;
        c.set(cathode)?;
        self.anode = a;
        self.cathode = c;
        Ok(())
    }

    /// Terminals that still need a voltage, or `None` when the diode can be evaluated.
    pub fn missing_terminals(&self) -> Option<MissingTerminals> {
        MissingTerminals::from_flags(self.anode.is_set(), self.cathode.is_set())
    }

    /// Anode minus cathode, unclamped.
    pub fn forward_drop(&self) -> DeviceResult<Voltage> {
        match (self.anode.read(), self.cathode.read()) {
            (Some(a), Some(c)) => Ok(a - c),
            (None, Some(_)) => Err(DeviceError::UnsetTerminal {
                missing: MissingTerminals::Anode,
            }),
            (Some(_), None) => Err(DeviceError::UnsetTerminal {
                missing: MissingTerminals::Cathode,
            }),
            (None, None) => Err(DeviceError::UnsetTerminal {
                missing: MissingTerminals::Both,
            }),
        }
    }

    /// Normalised exponent `Vd / (n * Vt)` after the forward clamp.
    fn exponent(&self, forward_drop: Voltage) -> f64 {
        let vd = forward_drop.value;
        let vd_eff = clamp_upper(vd, self.max_forward_drop.value);
        if vd_eff < vd {
            trace!(device = %self.name, vd, vd_eff, "forward drop clamped");
        }
        vd_eff / (self.ideality_factor * self.thermal_voltage.value)
    }

    /// Diode current for an explicit forward drop, ignoring terminal state.
    pub fn current_at(&self, forward_drop: Voltage) -> Current {
        let x = self.exponent(forward_drop);
        // exp_m1 keeps precision when x is near zero
        amps(self.saturation_current.value * x.exp_m1())
    }

    /// Diode current for the present terminal voltages.
    pub fn calculate_current(&self) -> DeviceResult<Current> {
        let vd = self.forward_drop()?;
        Ok(self.current_at(vd))
    }

    /// Small-signal conductance `Is * exp(x) / (n * Vt)` at an explicit forward drop.
    ///
    /// Beyond the clamp this stays at the 0.7 V value rather than dropping to
    /// zero, which keeps a Newton host's Jacobian non-singular.
    pub fn conductance_at(&self, forward_drop: Voltage) -> Conductance {
        let x = self.exponent(forward_drop);
        let nvt = self.ideality_factor * self.thermal_voltage.value;
        siemens(self.saturation_current.value * x.exp() / nvt)
    }

    /// Small-signal conductance for the present terminal voltages.
    pub fn calculate_conductance(&self) -> DeviceResult<Conductance> {
        let vd = self.forward_drop()?;
        Ok(self.conductance_at(vd))
    }
}

impl TwoTerminalDevice for Diode {
    fn name(&self) -> &str {
        &self.name
    }

    fn current(&self) -> DeviceResult<Current> {
        self.calculate_current()
    }

    fn conductance(&self) -> DeviceResult<Conductance> {
        self.calculate_conductance()
    }
}

impl fmt::Display for Diode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Is = {:e} A", self.saturation_current.value)?;
        writeln!(f, "max V = {} V", self.max_forward_drop.value)?;
        writeln!(f, "n = {}", self.ideality_factor)?;
        write!(f, "Vt = {} V", self.thermal_voltage.value)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn valid_ideality_constructs(n in 1.0_f64..=2.0) {
            prop_assert!(Diode::with_ideality("d".into(), amps(25e-9), n).is_ok());
        }

        #[test]
        fn invalid_ideality_rejected(n in prop_oneof![-10.0_f64..1.0, 2.0_f64 + 1e-9..10.0]) {
            let err = Diode::with_ideality("d".into(), amps(25e-9), n).unwrap_err();
            let is_range_error = matches!(err, DeviceError::ParameterRange { .. });
            prop_assert!(is_range_error);
        }

        #[test]
        fn current_increases_below_clamp(
            cathode in -1.0_f64..1.0,
            a in -0.5_f64..0.69,
            step in 1e-4_f64..0.01,
            n in 1.0_f64..=2.0,
        ) {
            let mut d = Diode::with_ideality("d".into(), amps(25e-9), n).unwrap();
            let b = (a + step).min(MAX_FORWARD_DROP_V);
            prop_assume!(b > a);
            d.set_bias(volts(cathode + a), volts(cathode)).unwrap();
            let lo = d.calculate_current().unwrap();
            d.anode_mut().set(volts(cathode + b)).unwrap();
            let hi = d.calculate_current().unwrap();
            prop_assert!(hi > lo);
        }

        #[test]
        fn flat_beyond_clamp(vd in 0.7_f64..100.0) {
            let d = Diode::new("d".into(), amps(25e-9));
            prop_assert_eq!(d.current_at(volts(vd)), d.current_at(volts(MAX_FORWARD_DROP_V)));
        }

        #[test]
        fn reverse_current_bounded_by_is(vd in -1e3_f64..0.0) {
            let d = Diode::new("d".into(), amps(25e-9));
            let i = d.current_at(volts(vd)).value;
            prop_assert!(i <= 0.0 && i >= -25e-9);
        }
    }
}
