use criterion::{black_box, criterion_group, criterion_main, Criterion};

use _rust::proj::meridional_arc::ArcCoefficients;
use _rust::{Converter, Projection, WGS84};

fn converter() -> Converter {
    Converter::new(WGS84, -69.0, 0.9996, 10_000_000.0, 500_000.0).unwrap()
}

fn make_geo_points(n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            (-55.0 + t * 40.0, -71.5 + (t * 97.0).fract() * 5.0)
        })
        .collect()
}

fn bench_single_point(c: &mut Criterion) {
    let conv = converter();

    c.bench_function("geo2tm_single", |b| {
        b.iter(|| black_box(conv.geo2tm(black_box(-27.489_522_86), black_box(-70.385_774_73))))
    });

    c.bench_function("tm2geo_single", |b| {
        b.iter(|| black_box(conv.tm2geo(black_box(6_958_579.443), black_box(363_102.736))))
    });

    let (x, y, z) = conv.geo2ecef(-27.5, -70.4, 1_500.0).unwrap();
    c.bench_function("ecef2geo_single", |b| {
        b.iter(|| black_box(conv.ecef2geo(black_box(x), black_box(y), black_box(z))))
    });

    let coeffs = ArcCoefficients::new(&WGS84);
    c.bench_function("meridional_arc", |b| {
        b.iter(|| black_box(coeffs.length(black_box(0.7))))
    });
}

fn bench_batch_throughput(c: &mut Criterion) {
    let conv = converter();
    let n = 1_000_000_usize;
    let geo = make_geo_points(n);
    let projected = conv.geo2tm_batch(&geo).unwrap();

    c.bench_function("geo2tm_batch_1M", |b| {
        b.iter(|| black_box(conv.geo2tm_batch(&geo).unwrap()))
    });

    c.bench_function("tm2geo_batch_1M", |b| {
        b.iter(|| black_box(conv.tm2geo_batch(&projected).unwrap()))
    });

    c.bench_function("tm2geo_sequential_1M", |b| {
        b.iter(|| {
            let mut coords = projected.clone();
            conv.inverse_batch(&mut coords).unwrap();
            black_box(coords)
        })
    });
}

fn bench_thread_scaling(c: &mut Criterion) {
    let conv = converter();
    let projected = conv.geo2tm_batch(&make_geo_points(250_000)).unwrap();

    for &threads in &[1, 2, 4, 8] {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .unwrap();

        c.bench_function(&format!("tm2geo_threads_{threads}_250k"), |b| {
            b.iter(|| black_box(pool.install(|| conv.tm2geo_batch(&projected).unwrap())))
        });
    }
}

criterion_group!(
    benches,
    bench_single_point,
    bench_batch_throughput,
    bench_thread_scaling
);
criterion_main!(benches);
