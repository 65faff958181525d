use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slidekit_core::{resolve, GeometrySnapshot, Point, Rect, SliderRange};

const TRACK: Rect = Rect::new(48.0, 12.0, 640.0, 16.0);
const SAMPLES: usize = 1024;

fn bench_resolve(c: &mut Criterion) {
    let range = SliderRange::new(0.0, 100.0, 1.0).unwrap();

    c.bench_function("resolve_horizontal_sweep", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for i in 0..SAMPLES {
                let x = TRACK.x - 32.0 + (i as f32) * 0.75;
                let snapshot =
                    GeometrySnapshot::new(TRACK, Point::new(x, 0.0), false, false);
                acc += resolve(black_box(&range), black_box(&snapshot));
            }
            acc
        })
    });

    let fine = SliderRange::new(0.0, 1.0, 0.005).unwrap();
    c.bench_function("resolve_fine_steps", |b| {
        b.iter(|| {
            let snapshot =
                GeometrySnapshot::new(TRACK, Point::new(300.0, 0.0), false, true);
            resolve(black_box(&fine), black_box(&snapshot))
        })
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
