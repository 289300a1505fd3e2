//! Callcost - native call overhead measurement harness
//!
//! This crate provides a foreign-call-compatible callee surface (a
//! fixed-layout struct and two exported entry points) together with the
//! benchmark driver that measures per-call overhead of invoking those entry
//! points from native code.
//!
//! Built as a `cdylib` so the entry points stay loadable from a managed
//! runtime, and as an `rlib` so the driver binary and tests link directly.

pub mod bench;
pub mod logging;
pub mod native;
pub mod timer;

// Re-export core types
pub use native::{TestStruct, Vector3};
pub use timer::{HighResTimer, TimerError};

/// Host-facing initialization (callable from a foreign runtime before the
/// first entry-point call). Idempotent.
#[no_mangle]
pub extern "system" fn callcost_init() {
    logging::init();
}
