//! Benchmark driver - the timed call loops
//!
//! Four strictly sequential steps: setup, timer calibration, the
//! struct-pointer loop, the primitive-parameter loop. The struct-pointer
//! loop breaks early if the callee ever reports a predicate failure; with a
//! shared layout definition that branch never fires, so a partial count is a
//! caller/callee layout mismatch signal.

use crate::native::{self, TestStruct, Vector3};
use crate::timer::{HighResTimer, TimerError};
use tracing::{debug, warn};

/// Fixed iteration budget per loop.
pub const MAX_CALLS: usize = 100_000;

/// Outcome of one timed loop.
#[derive(Debug, Clone, Copy)]
pub struct LoopReport {
    pub calls: usize,
    pub elapsed_ms: f64,
}

/// Outcome of a full run.
#[derive(Debug, Clone, Copy)]
pub struct RunReport {
    pub struct_loop: LoopReport,
    pub primitive_loop: LoopReport,
}

/// Run both timed loops back to back and report per-loop call counts and
/// elapsed wall-clock time.
pub fn run() -> Result<RunReport, TimerError> {
    // 1. Setup
    let t = TestStruct::new(Vector3::ZERO, Vector3::ONE);

    // 2. Calibrate
    let timer = HighResTimer::new()?;
    debug!(frequency = timer.frequency(), "timer calibrated");

    // 3 & 4. Timed loops
    let struct_loop = run_struct_loop(&timer, &t);
    let primitive_loop = run_primitive_loop(&timer);

    Ok(RunReport {
        struct_loop,
        primitive_loop,
    })
}

/// Loop A: repeated struct-pointer calls with the early-exit sanity check.
pub fn run_struct_loop(timer: &HighResTimer, t: &TestStruct) -> LoopReport {
    let mut calls = 0;
    let start = timer.ticks();

    for _ in 0..MAX_CALLS {
        let success = unsafe { native::native_function(t) };
        calls += 1;

        if success == 0 {
            break;
        }
    }

    let end = timer.ticks();
    let report = LoopReport {
        calls,
        elapsed_ms: timer.elapsed_ms(start, end),
    };

    if report.calls != MAX_CALLS {
        warn!(
            calls = report.calls,
            "struct-pointer call failed early; caller/callee layout mismatch"
        );
    }

    report
}

/// Loop B: repeated primitive-parameter calls, no exit condition.
pub fn run_primitive_loop(timer: &HighResTimer) -> LoopReport {
    let mut calls = 0;
    let start = timer.ticks();

    for _ in 0..MAX_CALLS {
        native::native_function_with_primitive_parameters(1.0, 1.0, 1);
        calls += 1;
    }

    let end = timer.ticks();
    LoopReport {
        calls,
        elapsed_ms: timer.elapsed_ms(start, end),
    }
}
