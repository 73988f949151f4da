//! Alkaline AA cell on a continuous 10 Ω resistor.
//!
//! Prints the discharge curve once per simulated hour, converted to the
//! units a plot would use: hours, watt-hours and milliamperes.

use cs_core::units::{si, to_hours, to_milliamps, to_watt_hours};
use cs_models::{Alkaline, BatteryModel, ResistorLoad};
use cs_sim::{SampleSeries, SimOptions, SimResult, Simulator};
use tracing::info;

const LOAD_OHMS: f64 = 10.0;
const ROWS_EVERY_S: f64 = 3600.0;

fn main() -> SimResult<()> {
    tracing_subscriber::fmt::init();

    let mut sim = Simulator::new(Alkaline::default(), ResistorLoad::new(LOAD_OHMS)?);
    let opts = SimOptions::default();

    let outcome = sim.run_with_progress(&opts, |p| {
        tracing::debug!(
            hours = to_hours(p.sim_time_s),
            voltage = p.voltage_v,
            dod = p.depth_of_discharge,
            "progress"
        );
    })?;

    info!(
        stop_reason = ?outcome.stop_reason,
        steps = outcome.steps,
        "simulation complete"
    );

    print_table(&outcome.series);
    print_summary(&outcome.series, si::volts_of(sim.battery().cutoff_voltage()));
    Ok(())
}

fn print_table(series: &SampleSeries) {
    println!(
        "{:>8}  {:>10}  {:>8}  {:>9}",
        "t [h]", "E [Wh]", "U [V]", "I [mA]"
    );
    println!("{}", "-".repeat(42));

    let mut next_row = 0.0;
    let last_index = series.len().saturating_sub(1);
    for (i, sample) in series.iter().enumerate() {
        if sample.t_s >= next_row || i == last_index {
            println!(
                "{:>8.2}  {:>10.4}  {:>8.4}  {:>9.2}",
                to_hours(sample.t_s),
                to_watt_hours(sample.energy_ws),
                sample.voltage_v,
                to_milliamps(sample.current_a)
            );
            next_row += ROWS_EVERY_S;
        }
    }
}

fn print_summary(series: &SampleSeries, cutoff_v: f64) {
    let Some(last) = series.last() else {
        println!("No samples recorded");
        return;
    };
    println!();
    println!("Samples:          {}", series.len());
    println!("Service life:     {:.2} h", to_hours(last.t_s));
    println!("Energy delivered: {:.3} Wh", to_watt_hours(last.energy_ws));
    println!(
        "Final voltage:    {:.3} V (cutoff {:.2} V)",
        last.voltage_v, cutoff_v
    );
}
