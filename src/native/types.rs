//! Fixed-layout types shared across the call boundary
//!
//! Field order, explicit padding, and total size are part of the contract
//! with any foreign caller: the managed mirror of `TestStruct` declares an
//! explicit 32-byte layout with the second vector at offset 16.

use core::fmt;
use core::mem::{align_of, size_of};

/// Three-component vector, natural alignment only.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Vector3 {
    /// Diagnostic form: `(x, y, z)` with six decimal places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6}, {:.6})", self.x, self.y, self.z)
    }
}

/// Benchmark payload: two vectors, each followed by one explicit pad field.
///
/// The pads keep each `Vector3` block 16 bytes wide, so `v2` sits at offset
/// 16 and the total size is 32. They are load-bearing for the cross-boundary
/// layout contract; do not remove or reorder.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct TestStruct {
    pub v1: Vector3,
    pub _pad0: f32,
    pub v2: Vector3,
    pub _pad1: f32,
}

impl TestStruct {
    #[inline]
    pub const fn new(v1: Vector3, v2: Vector3) -> Self {
        Self {
            v1,
            _pad0: 0.0,
            v2,
            _pad1: 0.0,
        }
    }
}

/// Expected layout, pinned at compile time.
pub const VECTOR3_SIZE: usize = 12;
pub const TEST_STRUCT_SIZE: usize = 32;
pub const V2_OFFSET: usize = 16;

const _: () = assert!(size_of::<Vector3>() == VECTOR3_SIZE);
const _: () = assert!(align_of::<Vector3>() == 4);
const _: () = assert!(size_of::<TestStruct>() == TEST_STRUCT_SIZE);
