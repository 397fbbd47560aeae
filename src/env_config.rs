//! Environment configuration for the simulator binary.
//!
//! Resolves the rayon worker count from `--threads`, then `RAYON_NUM_THREADS`,
//! then `OMP_NUM_THREADS`, falling back to one thread per configuration.

use crate::error::Result;

fn threads_from_env() -> Option<usize> {
    std::env::var("RAYON_NUM_THREADS")
        .or_else(|_| std::env::var("OMP_NUM_THREADS"))
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|&n| n > 0)
}

/// Thread count for a run over `num_configs` configurations.
pub fn resolve_threads(requested: Option<usize>, num_configs: usize) -> usize {
    requested
        .filter(|&n| n > 0)
        .or_else(threads_from_env)
        .unwrap_or(num_configs)
        .max(1)
}

/// Build the rayon global thread pool. Returns thread count.
pub fn init_rayon_threads(requested: Option<usize>, num_configs: usize) -> Result<usize> {
    let num_threads = resolve_threads(requested, num_configs);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .thread_name(|i| format!("cantstop-worker-{}", i))
        .build_global()?;
    Ok(num_threads)
}
