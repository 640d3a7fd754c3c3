// Simulated readings: independent uniform draws per call

use crate::models::MetricsSample;
use rand::Rng;
use std::ops::Range;

/// CPU load in hundredths of a percent: [50.00, 95.00).
pub const CPU_LOAD_CENTI: Range<u32> = 5_000..9_500;
/// Network traffic in thousandths of a Mbps: [0.500, 10.500).
pub const NETWORK_TRAFFIC_MILLI: Range<u32> = 500..10_500;
/// Disk utilization in hundredths of a percent: [10.00, 50.00).
pub const DISK_UTILIZATION_CENTI: Range<u32> = 1_000..5_000;

/// Draws on the display grid so rounding can never push a value onto the open upper bound.
pub fn generate() -> MetricsSample {
    let mut rng = rand::rng();
    let cpu_load = rng.random_range(CPU_LOAD_CENTI) as f64 / 100.0;
    let network_traffic = rng.random_range(NETWORK_TRAFFIC_MILLI) as f64 / 1_000.0;
    let disk_utilization = rng.random_range(DISK_UTILIZATION_CENTI) as f64 / 100.0;
    MetricsSample::from_readings(cpu_load, network_traffic, disk_utilization)
}
