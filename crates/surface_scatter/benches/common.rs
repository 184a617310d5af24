use std::time::Duration;

use criterion::{Criterion, Throughput};
use surface_scatter::prelude::{GenerationReport, OccupiedSet};

pub const SAMPLE_SIZE: usize = 30;
pub const WARM_UP: Duration = Duration::from_millis(500);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(3);

/// Criterion settings shared by the scatter benches.
pub fn scatter_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

/// Placements made by a preview run; a run that places nothing counts as one.
pub fn placements_throughput(report: &GenerationReport) -> Throughput {
    Throughput::Elements(report.total_placed.max(1) as u64)
}

/// Occupied entries scanned by one separation check.
pub fn scanned_throughput(occupied: &OccupiedSet) -> Throughput {
    Throughput::Elements(occupied.len().max(1) as u64)
}
