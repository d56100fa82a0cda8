use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mandelbrot_zoom::{Sampling, ZoomConfig, ZoomRenderer};

const SIZE: u32 = 400;

fn renderer(sampling: Sampling) -> ZoomRenderer {
    ZoomRenderer::with_config(ZoomConfig {
        sampling,
        ..ZoomConfig::default()
    })
    .expect("default config with sampling override is valid")
}

fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");
    let mut buffer = vec![0u32; (SIZE * SIZE) as usize];

    for sampling in [Sampling::Sequential, Sampling::Parallel] {
        for high_resolution in [false, true] {
            let resolution = if high_resolution { "full" } else { "block" };
            let id = BenchmarkId::new(format!("{sampling:?}"), resolution);

            group.bench_function(id, |b| {
                b.iter_batched_ref(
                    || renderer(sampling),
                    |renderer| {
                        renderer.render_frame(black_box(&mut buffer), SIZE, SIZE, high_resolution);
                    },
                    criterion::BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_render_frame);
criterion_main!(benches);
