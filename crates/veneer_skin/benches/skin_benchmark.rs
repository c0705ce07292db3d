//! Benchmark for child lookup and render passes.
//!
//! TARGET: lookup over a wide group well under a microsecond
//!
//! Run with: cargo bench --package veneer_skin --bench skin_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use veneer_core::RenderConfig;
use veneer_skin::{
    Bitmap, BitmapRegistry, CommandSurface, GuiObject, Group, KeyAllocator, Layer, RenderContext,
};

const CHILDREN: usize = 256;

fn create_wide_group() -> Group {
    let mut keys = KeyAllocator::new();
    let mut group = Group::new(keys.next_key());
    group.set_attribute("id", "wide").expect("valid fixture");
    group.set_attribute("background", "wide.bg").expect("valid fixture");
    for i in 0..CHILDREN {
        let mut layer = Layer::new(keys.next_key());
        layer.set_attribute("id", &format!("Layer{i}")).expect("valid fixture");
        layer.set_attribute("image", "cell").expect("valid fixture");
        layer.set_attribute("x", &(i * 4).to_string()).expect("valid fixture");
        group.add_child(Box::new(layer));
    }
    group
}

fn create_bitmaps() -> BitmapRegistry {
    [
        Bitmap::new("wide.bg", "main.png"),
        Bitmap::new("cell", "cells.png").with_offset(4, 0).with_size(4, 4),
    ]
    .into_iter()
    .collect()
}

fn benchmark_find_child(c: &mut Criterion) {
    let group = create_wide_group();

    c.bench_function("find_child_last_of_256", |b| {
        b.iter(|| black_box(group.find_child(black_box("layer255")).is_ok()));
    });

    c.bench_function("find_child_missing", |b| {
        b.iter(|| black_box(group.find_child(black_box("nowhere")).is_err()));
    });
}

fn benchmark_render_pass(c: &mut Criterion) {
    let mut group = create_wide_group();
    let bitmaps = create_bitmaps();
    let config = RenderConfig::default();
    let mut surface = CommandSurface::new();

    let mut bench = c.benchmark_group("render_pass");
    bench.throughput(Throughput::Elements(CHILDREN as u64 + 1));
    bench.bench_function("rerender_256_layers", |b| {
        b.iter(|| {
            surface.clear_commands();
            let mut cx = RenderContext::new(&mut surface, &bitmaps, &config);
            black_box(group.render(&mut cx))
        });
    });
    bench.finish();
}

criterion_group!(benches, benchmark_find_child, benchmark_render_pass);
criterion_main!(benches);
