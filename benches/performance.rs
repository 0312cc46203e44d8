//! Performance benchmarks for the shulker tracker.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shulker_tracker::{
    records, BlockPos, Observer, SessionContext, ShulkerTracker, StoreConfig, Timestamp,
};
use tempfile::TempDir;

fn populated_tracker(dir: &TempDir, count: i32) -> ShulkerTracker {
    let tracker = ShulkerTracker::new(StoreConfig {
        app_root: dir.path().to_path_buf(),
        ..Default::default()
    });
    tracker.on_session_start(&SessionContext::Unresolved);
    for i in 0..count {
        tracker
            .on_block_placed(
                BlockPos::new(i * 3, 64, -i),
                "minecraft:purple_shulker_box",
                "minecraft:overworld",
                "",
                Timestamp(i64::from(i)),
            )
            .unwrap();
    }
    tracker
}

/// Benchmark listing a middle page with varying store sizes
fn bench_list_page(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_page");
    let observer = Observer::new(BlockPos::new(0, 64, 0), "minecraft:overworld");

    for count in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("records", count), &count, |b, &count| {
            let dir = TempDir::new().unwrap();
            let tracker = populated_tracker(&dir, count);
            let page = ((count as usize).div_ceil(8) / 2).max(1).to_string();

            b.iter(|| black_box(tracker.list(&observer, Some(&page))));
        });
    }

    group.finish();
}

/// Benchmark the full-file rewrite done on every mutation
fn bench_place_and_break(c: &mut Criterion) {
    let mut group = c.benchmark_group("place_and_break");

    for count in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("records", count), &count, |b, &count| {
            let dir = TempDir::new().unwrap();
            let tracker = populated_tracker(&dir, count);
            let pos = BlockPos::new(-1, 64, -1);

            b.iter(|| {
                tracker
                    .on_block_placed(
                        pos,
                        "minecraft:shulker_box",
                        "minecraft:overworld",
                        "",
                        Timestamp(0),
                    )
                    .unwrap();
                tracker.on_block_broken(pos).unwrap();
            });
        });
    }

    group.finish();
}

/// Benchmark decoding a record line
fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode_line", |b| {
        let line = "-1204,63,877,minecraft:overworld,Light Blue,1700000000000,Redstone";
        b.iter(|| black_box(records::decode(line)))
    });
}

criterion_group!(benches, bench_list_page, bench_place_and_break, bench_decode);
criterion_main!(benches);
