// dk-core/src/units.rs

use uom::si::f64::{
    ElectricCurrent as UomElectricCurrent, ElectricPotential as UomElectricPotential,
    ElectricalConductance as UomElectricalConductance,
};

// Public canonical unit types (SI, f64)
pub type Voltage = UomElectricPotential;
pub type Current = UomElectricCurrent;
pub type Conductance = UomElectricalConductance;

#[inline]
pub fn volts(v: f64) -> Voltage {
    use uom::si::electric_potential::volt;
    Voltage::new::<volt>(v)
}

#[inline]
pub fn amps(v: f64) -> Current {
    use uom::si::electric_current::ampere;
    Current::new::<ampere>(v)
}

#[inline]
pub fn siemens(v: f64) -> Conductance {
    use uom::si::electrical_conductance::siemens;
    Conductance::new::<siemens>(v)
}

pub mod constants {
    use super::*;

    /// kT/q at roughly 300 K.
    pub const THERMAL_VOLTAGE_V: f64 = 0.025_85;

    #[inline]
    pub fn thermal_voltage() -> Voltage {
        volts(THERMAL_VOLTAGE_V)
    }
}
