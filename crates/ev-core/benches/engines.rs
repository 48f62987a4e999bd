use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use ev_core::spectrum::{
    SpectrumConfig, fill_columnar, fill_event_loop, fill_frame, fill_frame_expr,
};
use ev_core::toy::{ToyConfig, generate};
use ev_core::{EventStore, Hist1D, Result};

type Engine = fn(&EventStore, &SpectrumConfig) -> Result<Hist1D>;

fn bench_engines(c: &mut Criterion) {
    let data = generate(&ToyConfig { events: 2000, seed: 11, ..Default::default() }).unwrap();
    let store = data.to_store().unwrap();
    let cfg = SpectrumConfig::default();

    let engines: [(&str, Engine); 4] = [
        ("event_loop", fill_event_loop),
        ("columnar", fill_columnar),
        ("frame", fill_frame),
        ("frame_expr", fill_frame_expr),
    ];

    let mut group = c.benchmark_group("spectrum_fill");
    for (name, engine) in engines {
        group.bench_with_input(BenchmarkId::from_parameter(name), &engine, |b, engine| {
            b.iter(|| black_box(engine(&store, &cfg).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_engines);
criterion_main!(benches);
