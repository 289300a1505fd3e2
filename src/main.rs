//! Benchmark driver binary
//!
//! Runs both timed loops against the callee entry points, prints the
//! per-loop reports, and holds the console open on one line of input so the
//! numbers stay visible before the window closes.

use std::io::{self, BufRead};
use std::process::ExitCode;

use callcost::{bench, logging};

fn main() -> ExitCode {
    logging::init();

    let report = match bench::run() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error querying perf timer frequency: {e}");
            return ExitCode::from(1);
        }
    };

    println!(
        "{} calls through native function from native code: {:.1} ms",
        report.struct_loop.calls, report.struct_loop.elapsed_ms
    );
    println!(
        "{} calls through another native function from native code: {:.1} ms",
        report.primitive_loop.calls, report.primitive_loop.elapsed_ms
    );

    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);

    ExitCode::SUCCESS
}
