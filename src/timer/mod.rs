//! High-resolution monotonic timer
//!
//! Platform-agnostic wrapper around QueryPerformanceCounter / clock_gettime.
//! One frequency query at calibration (the only fallible step), then raw tick
//! queries converted to milliseconds as `(end - start) / frequency * 1000`.

/// Calibrated high-resolution timer.
///
/// Holds the tick frequency for the process lifetime; nothing to release.
#[derive(Debug, Clone, Copy)]
pub struct HighResTimer {
    frequency: u64,
}

impl HighResTimer {
    /// Calibrate by querying the platform tick frequency.
    ///
    /// Fails only when the platform reports no usable high-resolution
    /// counter; callers treat this as fatal.
    pub fn new() -> Result<Self, TimerError> {
        let frequency = query_frequency()?;
        if frequency == 0 {
            return Err(TimerError::FrequencyUnavailable);
        }
        Ok(Self { frequency })
    }

    /// Ticks per second of the underlying counter.
    #[inline]
    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    /// Current counter value in ticks.
    #[inline]
    pub fn ticks(&self) -> u64 {
        query_ticks()
    }

    /// Convert a tick interval to milliseconds.
    #[inline]
    pub fn elapsed_ms(&self, start: u64, end: u64) -> f64 {
        end.saturating_sub(start) as f64 / self.frequency as f64 * 1000.0
    }
}

/// Timer calibration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    FrequencyUnavailable,
}

impl core::fmt::Display for TimerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::FrequencyUnavailable => {
                write!(f, "high-resolution timer frequency unavailable")
            }
        }
    }
}

impl std::error::Error for TimerError {}

#[cfg(unix)]
const NANOS_PER_SEC: u64 = 1_000_000_000;

#[cfg(unix)]
fn query_frequency() -> Result<u64, TimerError> {
    // CLOCK_MONOTONIC counts nanoseconds; probe it once so a missing clock
    // surfaces at calibration rather than mid-loop.
    let mut ts = libc::timespec { tv_sec: 0, tv_nsec: 0 };
    let rc = unsafe { libc::clock_gettime(libc::CLOCK_MONOTONIC, &mut ts) };
    if rc != 0 {
        return Err(TimerError::FrequencyUnavailable);
    }
    Ok(NANOS_PER_SEC)
}

#[cfg(unix)]
fn query_ticks() -> u64 {
    let mut ts = libc::timespec { tv_sec: 0, tv_nsec: 0 };
    // Cannot fail for CLOCK_MONOTONIC once calibration has probed it.
    unsafe { libc::clock_gettime(libc::CLOCK_MONOTONIC, &mut ts) };
    ts.tv_sec as u64 * NANOS_PER_SEC + ts.tv_nsec as u64
}

#[cfg(windows)]
fn query_frequency() -> Result<u64, TimerError> {
    use winapi::um::profileapi::QueryPerformanceFrequency;
    use winapi::um::winnt::LARGE_INTEGER;

    let mut freq: LARGE_INTEGER = unsafe { core::mem::zeroed() };
    let ok = unsafe { QueryPerformanceFrequency(&mut freq) };
    if ok == 0 {
        return Err(TimerError::FrequencyUnavailable);
    }
    Ok(unsafe { *freq.QuadPart() } as u64)
}

#[cfg(windows)]
fn query_ticks() -> u64 {
    use winapi::um::profileapi::QueryPerformanceCounter;
    use winapi::um::winnt::LARGE_INTEGER;

    let mut ticks: LARGE_INTEGER = unsafe { core::mem::zeroed() };
    unsafe { QueryPerformanceCounter(&mut ticks) };
    (unsafe { *ticks.QuadPart() }) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calibration_succeeds() {
        let timer = HighResTimer::new().unwrap();
        assert!(timer.frequency() > 0);
    }

    #[test]
    fn test_ticks_monotonic() {
        let timer = HighResTimer::new().unwrap();
        let a = timer.ticks();
        let b = timer.ticks();
        assert!(b >= a);
    }

    #[test]
    fn test_elapsed_conversion() {
        let timer = HighResTimer::new().unwrap();
        assert_eq!(timer.elapsed_ms(100, 100), 0.0);

        // One full second of ticks is exactly 1000 ms.
        let ms = timer.elapsed_ms(0, timer.frequency());
        assert!((ms - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_elapsed_nonnegative_and_finite() {
        let timer = HighResTimer::new().unwrap();
        let start = timer.ticks();
        let end = timer.ticks();
        let ms = timer.elapsed_ms(start, end);
        assert!(ms >= 0.0);
        assert!(ms.is_finite());
    }

    #[test]
    fn test_error_display() {
        let msg = TimerError::FrequencyUnavailable.to_string();
        assert!(msg.contains("frequency"));
    }
}
