use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use skiff::{DataType, Field, Schema, Table, Value, asof_left_join};

fn build_left(rng: &mut StdRng, rows: usize) -> Table {
    let schema = Schema::from_fields(vec![
        Field::required("ts", DataType::Int64),
        Field::required("qty", DataType::Int64),
        Field::required("px", DataType::Float64),
    ]);
    let values = (0..rows)
        .map(|_| {
            vec![
                Value::Int64(rng.gen_range(0..1_000_000)),
                Value::Int64(rng.gen_range(1..500)),
                Value::float64(rng.gen_range(1.0..200.0)),
            ]
        })
        .collect();
    Table::from_values(schema, values).unwrap()
}

fn build_right(rng: &mut StdRng, rows: usize) -> Table {
    let schema = Schema::from_fields(vec![
        Field::required("quote_ts", DataType::Int64),
        Field::required("bid", DataType::Float64),
        Field::required("ask", DataType::Float64),
    ]);
    let values = (0..rows)
        .map(|_| {
            let bid = rng.gen_range(1.0..200.0);
            vec![
                Value::Int64(rng.gen_range(0..1_000_000)),
                Value::float64(bid),
                Value::float64(bid + 0.01),
            ]
        })
        .collect();
    Table::from_values(schema, values).unwrap()
}

fn bench_asof_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("asof_left_join");
    for &rows in &[1_000usize, 10_000, 100_000] {
        let mut rng = StdRng::seed_from_u64(42);
        let left = build_left(&mut rng, rows);
        let right = build_right(&mut rng, rows);

        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, _| {
            b.iter(|| asof_left_join(black_box(&left), black_box(&right), "ts", "quote_ts"))
        });
    }
    group.finish();
}

fn bench_asof_join_skewed(c: &mut Criterion) {
    // Wide left scanning a small right table, the common enrichment shape.
    let mut rng = StdRng::seed_from_u64(7);
    let left = build_left(&mut rng, 100_000);
    let right = build_right(&mut rng, 100);

    c.bench_function("asof_left_join_small_right", |b| {
        b.iter(|| asof_left_join(black_box(&left), black_box(&right), "ts", "quote_ts"))
    });
}

criterion_group!(benches, bench_asof_join, bench_asof_join_skewed);
criterion_main!(benches);
