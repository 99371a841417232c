use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dse_geo::{
    decode_date_range, encode_date_range, encode_point, DateRange, DateRangeBound,
    DateRangePrecision, LineString, Polygon,
};

fn circle(num_points: usize, radius: f64) -> Vec<(f64, f64)> {
    (0..num_points)
        .map(|i| {
            let theta = i as f64 / num_points as f64 * std::f64::consts::TAU;
            (radius * theta.cos(), radius * theta.sin())
        })
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("encode point", |b| {
        b.iter(|| encode_point(black_box(1.5), black_box(-2.25)))
    });

    let points = circle(1_000, 10.);
    c.bench_function("build line string with 1000 points", |b| {
        b.iter(|| {
            let mut line_string = LineString::new();
            line_string.reserve(points.len());
            for &(x, y) in &points {
                line_string.add_point(x, y).unwrap();
            }
            line_string.finish().unwrap();
            line_string
        })
    });

    let exterior = circle(1_000, 10.);
    let hole = circle(100, 1.);
    c.bench_function("build polygon with one hole", |b| {
        b.iter(|| Polygon::from_rings([exterior.iter().copied(), hole.iter().copied()]).unwrap())
    });

    let range = DateRange::closed(
        DateRangeBound::new(DateRangePrecision::Millisecond, 1_486_094_706_007),
        DateRangeBound::new(DateRangePrecision::Year, 1_514_764_800_000),
    );
    let encoded = encode_date_range(&range);
    c.bench_function("encode date range", |b| {
        b.iter(|| encode_date_range(black_box(&range)))
    });
    c.bench_function("decode date range", |b| {
        b.iter(|| decode_date_range(black_box(&encoded)).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
