//! Timing and readout helpers for debug overlays.

use std::time::{Duration, Instant};

use tracing::debug;

/// Runs `f`, logs how long it took under `label` at debug level and
/// returns its result together with the elapsed time.
///
/// # Examples
/// ```
/// use u_toolkit::debug::measure;
/// let (sum, elapsed) = measure("sum", || (1..=100).sum::<u32>());
/// assert_eq!(sum, 5050);
/// assert!(elapsed.as_secs() < 1);
/// ```
pub fn measure<T, F: FnOnce() -> T>(label: &str, f: F) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();
    debug!(label, elapsed_ms = elapsed.as_secs_f64() * 1000.0, "measured");
    (value, elapsed)
}

const BYTE_UNITS: [&str; 5] = ["KB", "MB", "GB", "TB", "PB"];

/// Human-readable size with 1024-based units and two decimals.
///
/// Values under 1 KB are printed as whole bytes.
///
/// # Examples
/// ```
/// use u_toolkit::debug::format_bytes;
/// assert_eq!(format_bytes(512), "512 B");
/// assert_eq!(format_bytes(1536), "1.50 KB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < BYTE_UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.2} {}", BYTE_UNITS[unit])
}

/// Engine-side performance counters.
pub trait PerformanceMonitor {
    fn frames_per_second(&self) -> f64;
    /// Memory in use by the process or engine, in bytes.
    fn memory_bytes(&self) -> u64;
}

/// One-line readout such as `"FPS: 60.0 | Memory: 1.50 MB"`.
pub fn performance_summary(monitor: &dyn PerformanceMonitor) -> String {
    format!(
        "FPS: {:.1} | Memory: {}",
        monitor.frames_per_second(),
        format_bytes(monitor.memory_bytes())
    )
}
