use callcost::native::{
    native_function, native_function_with_primitive_parameters, TestStruct, Vector3,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Same predicate as the exported entry point, as a plain inlinable
/// function: the no-call-overhead baseline.
fn inlined_predicate(t: &TestStruct) -> i32 {
    i32::from(t.v1.x == 0.0 && t.v2.y == 1.0)
}

fn bench_struct_pointer(c: &mut Criterion) {
    let t = TestStruct::new(Vector3::ZERO, Vector3::ONE);
    c.bench_function("struct_pointer_call", |b| {
        b.iter(|| unsafe { native_function(black_box(&t)) });
    });
}

fn bench_struct_pointer_via_fn_ptr(c: &mut Criterion) {
    // Delegate/symbol-lookup analog: the call goes through a function
    // pointer instead of a direct symbol reference.
    let t = TestStruct::new(Vector3::ZERO, Vector3::ONE);
    let f: unsafe extern "system" fn(*const TestStruct) -> i32 = native_function;
    c.bench_function("struct_pointer_call_fn_ptr", |b| {
        b.iter(|| unsafe { black_box(f)(black_box(&t)) });
    });
}

fn bench_primitive_parameters(c: &mut Criterion) {
    c.bench_function("primitive_parameter_call", |b| {
        b.iter(|| {
            native_function_with_primitive_parameters(
                black_box(1.0),
                black_box(1.0),
                black_box(1),
            )
        });
    });
}

fn bench_inlined_baseline(c: &mut Criterion) {
    let t = TestStruct::new(Vector3::ZERO, Vector3::ONE);
    c.bench_function("inlined_predicate", |b| {
        b.iter(|| inlined_predicate(black_box(&t)));
    });
}

criterion_group!(
    benches,
    bench_struct_pointer,
    bench_struct_pointer_via_fn_ptr,
    bench_primitive_parameters,
    bench_inlined_baseline
);
criterion_main!(benches);
