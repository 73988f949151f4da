//! Progress snapshots emitted during long discharge runs.

/// Snapshot of a running simulation.
#[derive(Debug, Clone, Default)]
pub struct SimProgress {
    /// Completed time steps
    pub step: usize,
    /// Simulated time (s)
    pub sim_time_s: f64,
    /// Present terminal voltage (V)
    pub voltage_v: f64,
    /// Energy delivered so far (W·s)
    pub energy_ws: f64,
    /// Fraction of nominal capacity delivered
    pub depth_of_discharge: f64,
    /// Fraction of `max_time` elapsed, when a time limit is set
    pub fraction_complete: Option<f64>,
}
