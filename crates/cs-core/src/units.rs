// cs-core/src/units.rs

use uom::si::f64::{
    ElectricCharge as UomElectricCharge, ElectricCurrent as UomElectricCurrent,
    ElectricPotential as UomElectricPotential, ElectricalResistance as UomElectricalResistance,
    Energy as UomEnergy, Power as UomPower, Ratio as UomRatio, Time as UomTime,
};

// Public canonical unit types (SI, f64)
pub type Charge = UomElectricCharge;
pub type Current = UomElectricCurrent;
pub type Voltage = UomElectricPotential;
pub type Resistance = UomElectricalResistance;
pub type Energy = UomEnergy;
pub type Power = UomPower;
pub type Ratio = UomRatio;
pub type Time = UomTime;

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
pub fn ohms(v: f64) -> Resistance {
    use uom::si::electrical_resistance::ohm;
    Resistance::new::<ohm>(v)
}

#[inline]
pub fn joules(v: f64) -> Energy {
    use uom::si::energy::joule;
    Energy::new::<joule>(v)
}

#[inline]
pub fn watts(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

#[inline]
pub fn amp_hours(v: f64) -> Charge {
    use uom::si::electric_charge::ampere_hour;
    Charge::new::<ampere_hour>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

/// Raw SI accessors for the f64 series the simulator records.
pub mod si {
    use super::*;

    #[inline]
    pub fn volts_of(v: Voltage) -> f64 {
        v.get::<uom::si::electric_potential::volt>()
    }

    #[inline]
    pub fn amps_of(i: Current) -> f64 {
        i.get::<uom::si::electric_current::ampere>()
    }

    #[inline]
    pub fn ohms_of(r: Resistance) -> f64 {
        r.get::<uom::si::electrical_resistance::ohm>()
    }

    #[inline]
    pub fn joules_of(e: Energy) -> f64 {
        e.get::<uom::si::energy::joule>()
    }

    #[inline]
    pub fn watts_of(p: Power) -> f64 {
        p.get::<uom::si::power::watt>()
    }

    #[inline]
    pub fn seconds_of(t: Time) -> f64 {
        t.get::<uom::si::time::second>()
    }

    #[inline]
    pub fn coulombs_of(q: Charge) -> f64 {
        q.get::<uom::si::electric_charge::coulomb>()
    }
}

/// Display conversions used when reporting series (s -> h, W·s -> Wh, A -> mA).
pub mod display {
    use super::*;

    #[inline]
    pub fn to_hours(seconds: f64) -> f64 {
        s(seconds).get::<uom::si::time::hour>()
    }

    #[inline]
    pub fn to_watt_hours(watt_seconds: f64) -> f64 {
        joules(watt_seconds).get::<uom::si::energy::watt_hour>()
    }

    #[inline]
    pub fn to_milliamps(amperes: f64) -> f64 {
        amps(amperes).get::<uom::si::electric_current::milliampere>()
    }
}

pub use display::{to_hours, to_milliamps, to_watt_hours};
