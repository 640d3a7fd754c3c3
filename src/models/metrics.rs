// Metrics sample model (wire format for GET /api/metrics)

use serde::{Deserialize, Serialize};

/// Fractional digits printed when checking whether a value sits exactly on a rounding tie.
const TIE_CHECK_DIGITS: usize = 40;

/// Readings are kept as pre-formatted decimal strings so every client sees
/// the same fixed precision: 2 digits for cpu/disk, 3 for network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSample {
    pub cpu_load: String,
    pub network_traffic_mbps: String,
    pub disk_utilization: String,
}

impl MetricsSample {
    pub fn from_readings(cpu_load: f64, network_traffic_mbps: f64, disk_utilization: f64) -> Self {
        Self {
            cpu_load: to_fixed(cpu_load, 2),
            network_traffic_mbps: to_fixed(network_traffic_mbps, 3),
            disk_utilization: to_fixed(disk_utilization, 2),
        }
    }

    /// All-zero sample, reported when the catalog returns no products.
    pub fn zero() -> Self {
        Self::from_readings(0.0, 0.0, 0.0)
    }

    /// Fixed sample reported whenever the catalog source fails (simulated critical state).
    pub fn critical() -> Self {
        Self::from_readings(99.99, 0.0, 0.0)
    }
}

/// Rounds to nearest on the exact binary value; exact ties go away from zero.
/// `format!` alone would send ties to the even digit.
fn to_fixed(value: f64, digits: usize) -> String {
    if is_exact_tie(value, digits) {
        // A tie scaled by 10^digits is n + 0.5, which f64 holds exactly.
        let scale = 10f64.powi(digits as i32);
        return format!("{:.*}", digits, (value * scale).round() / scale);
    }
    format!("{:.*}", digits, value)
}

fn is_exact_tie(value: f64, digits: usize) -> bool {
    let expanded = format!("{:.*}", digits + TIE_CHECK_DIGITS, value.abs());
    let Some((_, frac)) = expanded.split_once('.') else {
        return false;
    };
    let tail = &frac[digits..];
    tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0')
}
