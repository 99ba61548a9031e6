use std::env;

use crate::cpu_kernels::{get_isa_level, IsaLevel};
use crate::error::{BackendError, BackendResult};

/// Environment variable forcing the kernel ISA: `scalar`, `sse2`, `neon` or `auto`.
pub const ISA_ENV: &str = "RVV_KERNELS_ISA";

/// ISA from `RVV_KERNELS_ISA`, or the detected one when unset.
pub fn auto_select_isa() -> BackendResult<IsaLevel> {
    match env::var(ISA_ENV) {
        Ok(value) => parse_isa_override(&value),
        Err(_) => Ok(get_isa_level()),
    }
}

/// Resolve an override value. `auto` (or empty) means detection.
pub fn parse_isa_override(value: &str) -> BackendResult<IsaLevel> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("auto") {
        return Ok(get_isa_level());
    }
    let isa: IsaLevel = value.parse()?;
    if !isa.is_supported() {
        return Err(BackendError::UnsupportedIsa(isa.name()));
    }
    log::debug!("{ISA_ENV} override: {isa}");
    Ok(isa)
}
