// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the masonry layout hot paths.
//!
//! Measures the cost of:
//! - Packing a full gallery (ceiling-sized) worth of cells
//! - Resetting and repacking after a viewport-width change
//! - Computing the visible window over packed placements

use criterion::{criterion_group, criterion_main, Criterion};
use iced::Size;
use iced_mosaic::config::{LayoutConfig, DEFAULT_ITEM_CEILING};
use iced_mosaic::ui::gallery::layout::{
    self, MasonryPositioner, MeasurementCache, PositionerConfig,
};
use std::hint::black_box;

fn measurements(layout: &LayoutConfig) -> MeasurementCache {
    MeasurementCache::new(Size::new(layout.column_width, layout.card_height))
}

fn bench_full_pack(c: &mut Criterion) {
    let layout_config = LayoutConfig::default();
    let cache = measurements(&layout_config);

    c.bench_function("pack_1000_cells", |b| {
        b.iter(|| {
            let mut positioner =
                MasonryPositioner::new(PositionerConfig::for_width(800.0, &layout_config));
            positioner.extend_to(black_box(DEFAULT_ITEM_CEILING), &cache);
            black_box(positioner.content_height())
        });
    });
}

fn bench_reset_repack(c: &mut Criterion) {
    let layout_config = LayoutConfig::default();
    let cache = measurements(&layout_config);
    let mut positioner = MasonryPositioner::new(PositionerConfig::for_width(800.0, &layout_config));
    positioner.extend_to(DEFAULT_ITEM_CEILING, &cache);

    c.bench_function("reset_and_repack_1000_cells", |b| {
        b.iter(|| {
            positioner.reset(PositionerConfig::for_width(black_box(400.0), &layout_config));
            positioner.extend_to(DEFAULT_ITEM_CEILING, &cache);
            black_box(positioner.content_height())
        });
    });
}

fn bench_visible_window(c: &mut Criterion) {
    let layout_config = LayoutConfig::default();
    let cache = measurements(&layout_config);
    let mut positioner = MasonryPositioner::new(PositionerConfig::for_width(800.0, &layout_config));
    positioner.extend_to(DEFAULT_ITEM_CEILING, &cache);

    c.bench_function("last_visible_index_mid_scroll", |b| {
        b.iter(|| {
            let window = layout::visible_window(black_box(15_000.0), 600.0, 230.0);
            black_box(layout::last_visible_index(positioner.placements(), window))
        });
    });
}

criterion_group!(
    benches,
    bench_full_pack,
    bench_reset_repack,
    bench_visible_window
);
criterion_main!(benches);
