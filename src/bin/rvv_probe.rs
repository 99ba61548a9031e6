//! Runs the vadd conformance probes on the selected backend.
//!
//! Takes no arguments. `RVV_KERNELS_ISA` picks the backend, `RUST_LOG`
//! the verbosity. Always exits 0: results are reported, not asserted.

use rvv_kernels::probes;
use rvv_kernels::CpuKernels;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let kernels = match CpuKernels::from_env() {
        Ok(kernels) => kernels,
        Err(err) => {
            log::warn!("{err}, falling back to detected ISA");
            CpuKernels::new()
        }
    };

    for report in probes::run_all(&kernels) {
        match serde_json::to_string(&report) {
            Ok(json) => log::info!("{json}"),
            Err(err) => log::warn!("probe {}: cannot serialize report: {err}", report.name),
        }
        if !report.matches() {
            log::warn!(
                "probe {} on {}: got {:?}, expected {:?}",
                report.name,
                report.isa,
                report.lanes.active(report.vl),
                report.expected
            );
        }
    }
}
