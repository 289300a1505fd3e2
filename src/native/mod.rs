//! Native callee - the entry points whose call overhead gets measured
//!
//! Design: foreign-runtime compatible surface:
//! - `types.rs` - fixed-layout payload types (`Vector3`, `TestStruct`)
//! - unmangled entry points with `extern "system"` linkage
//!
//! The entry points assume a trusted caller; pointer validity is part of the
//! caller's contract and is not checked here.

mod types;

pub use types::{TestStruct, Vector3, TEST_STRUCT_SIZE, V2_OFFSET, VECTOR3_SIZE};

use tracing::trace;

/// Struct-pointer entry point.
///
/// Reads `v1.x` and `v2.y` only. Returns 1 when `v1.x == 0.0 && v2.y == 1.0`
/// (exact equality, no tolerance), 0 otherwise. A zero return from a caller
/// that shares this crate's layout definition indicates an ABI or layout
/// mismatch, never an expected outcome.
///
/// # Safety
/// `ptr` must be a non-null pointer to a readable, validly laid-out
/// `TestStruct`. Anything else is undefined behavior.
#[no_mangle]
pub unsafe extern "system" fn native_function(ptr: *const TestStruct) -> i32 {
    let t = &*ptr;

    trace!(target: "callcost::native", "{}", t.v1);
    trace!(target: "callcost::native", "{}", t.v2);

    let x1 = t.v1.x;
    let y2 = t.v2.y;

    i32::from(x1 == 0.0 && y2 == 1.0)
}

/// Primitive-parameter entry point.
///
/// Accepts three primitives by value and does nothing: the baseline call
/// with no pointer or struct marshalling on the way in.
#[no_mangle]
pub extern "system" fn native_function_with_primitive_parameters(
    _arg1: f32,
    _arg2: f64,
    _arg3: i32,
) {
}
