use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mandelbrot_animator::{
    Complex, GridSize, MANDELBROT_VIEWPORT, Palette, PaletteKind, compute_escape, palette_factory,
    rasterize_frame, render_frame,
};

fn bench_compute_escape(c: &mut Criterion) {
    c.bench_function("compute_escape/bounded_point", |b| {
        b.iter(|| compute_escape(black_box(Complex::new(-0.1, 0.65)), black_box(1000)))
    });
}

fn bench_rasterize_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize_frame");

    for size in [64u32, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                rasterize_frame(GridSize::new(size, size), MANDELBROT_VIEWPORT, 92, 100)
                    .expect("valid frame parameters")
            })
        });
    }

    group.finish();
}

fn bench_render_frame(c: &mut Criterion) {
    let matrix = rasterize_frame(GridSize::new(256, 256), MANDELBROT_VIEWPORT, 92, 100)
        .expect("valid frame parameters");
    let colour_map = palette_factory(Palette::new(PaletteKind::Magma));

    c.bench_function("render_frame/256", |b| {
        b.iter(|| render_frame(black_box(&matrix), &colour_map))
    });
}

criterion_group!(
    benches,
    bench_compute_escape,
    bench_rasterize_frame,
    bench_render_frame
);
criterion_main!(benches);
