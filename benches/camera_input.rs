use criterion::{black_box, criterion_group, criterion_main, Criterion};
use freelook::FreeLookCamera;
use glam::Vec3;

fn camera() -> FreeLookCamera {
    FreeLookCamera::new(Vec3::new(0.0, 2.0, 10.0), Vec3::new(0.3, -0.2, -1.0))
}

fn bench_pointer_move(c: &mut Criterion) {
    let mut camera = camera();
    let mut x = 0;
    c.bench_function("pointer_move", |b| {
        b.iter(|| {
            x = (x + 3) % 640;
            camera.pointer_move(black_box(x), black_box(240));
        })
    });
}

fn bench_key_press(c: &mut Criterion) {
    let mut camera = camera();
    let keys = ['w', 'a', 's', 'd'];
    let mut i = 0;
    c.bench_function("key_press", |b| {
        b.iter(|| {
            i = (i + 1) % keys.len();
            black_box(camera.key_press(black_box(keys[i]), 0, 0, 1.0))
        })
    });
}

fn bench_analog_move(c: &mut Criterion) {
    let mut camera = camera();
    c.bench_function("analog_move", |b| {
        b.iter(|| camera.analog_move(black_box(0.01), black_box(-0.01)))
    });
}

fn bench_transform(c: &mut Criterion) {
    let camera = camera();
    c.bench_function("transform", |b| b.iter(|| black_box(&camera).transform()));
    c.bench_function("view_matrix", |b| {
        b.iter(|| black_box(&camera).transform().view_matrix())
    });
}

criterion_group!(
    benches,
    bench_pointer_move,
    bench_key_press,
    bench_analog_move,
    bench_transform
);
criterion_main!(benches);
