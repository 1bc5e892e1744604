use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use vectors::{Vector2, Vector3};

fn arithmetic(c: &mut Criterion) {
    let a = Vector3::new(1., 2., 3.);
    let b = Vector3::new(-4., 0.5, 2.);
    c.bench_function("vector3 add scale", |bencher| {
        bencher.iter(|| (black_box(a) + black_box(b)) * black_box(0.5))
    });
    c.bench_function("vector3 floor divide", |bencher| {
        bencher.iter(|| black_box(a).floor_divided(black_box(0.3)))
    });
}

fn geometry(c: &mut Criterion) {
    let a = Vector3::new(1., 2., 3.);
    let axis = Vector3::new(1., 1., 1.).normalized();
    c.bench_function("vector3 normalized", |bencher| {
        bencher.iter(|| black_box(a).normalized())
    });
    c.bench_function("vector3 rotated", |bencher| {
        bencher.iter(|| black_box(a).rotated(black_box(axis), black_box(33.)))
    });
    let v = Vector2::new(3., 4.);
    c.bench_function("vector2 rotated", |bencher| {
        bencher.iter(|| black_box(v).rotated(black_box(33.)))
    });
}

fn swizzle(c: &mut Criterion) {
    c.bench_function("vector3 set_zyx", |bencher| {
        let mut v = Vector3::ZERO;
        bencher.iter(|| v.set_zyx(black_box(&[1., 2., 3.])))
    });
}

criterion_group!(benches, arithmetic, geometry, swizzle);
criterion_main!(benches);
