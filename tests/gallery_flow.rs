// SPDX-License-Identifier: MPL-2.0
//! End-to-end gallery behavior: batch loading against the ceiling, column
//! derivation, and resize handling, exercised without a window.

use iced::Size;
use iced_mosaic::config::{LayoutConfig, LoadingConfig};
use iced_mosaic::ui::gallery::layout::{self, MasonryPositioner, MeasurementCache, PositionerConfig};
use iced_mosaic::ui::gallery::{component, Phase};

fn gallery(width: f32, height: f32) -> component::State {
    let mut state = component::State::new(
        LayoutConfig::default(),
        LoadingConfig::default(),
        Size::new(width, height),
    );
    let _ = state.initialize();
    state
}

#[test]
fn mount_loads_fifty_items_in_four_columns() {
    // Ceiling 1000, batch 50, width 800 with card 180 / gutter 10.
    let state = gallery(800.0, 600.0);
    assert_eq!(state.items_len(), 50);
    assert_eq!(state.column_count(), 4);
    assert_eq!(state.phase(), Phase::Partial);
}

#[test]
fn twenty_load_mores_reach_the_ceiling_then_noop() {
    let mut state = gallery(800.0, 600.0);
    for _ in 0..19 {
        state.load_more();
    }
    assert_eq!(state.items_len(), 1000);
    assert_eq!(state.phase(), Phase::Complete);
    // No trailing placeholder row once complete.
    assert_eq!(state.row_count(), 1000);

    // The 21st overall request is a no-op.
    state.load_more();
    assert_eq!(state.items_len(), 1000);
    assert_eq!(state.row_count(), 1000);
}

#[test]
fn row_count_carries_placeholder_below_ceiling() {
    let mut state = gallery(800.0, 600.0);
    assert_eq!(state.row_count(), 51);
    state.load_more();
    assert_eq!(state.row_count(), 101);
}

#[test]
fn item_loaded_predicate_is_exact_prefix() {
    let state = gallery(800.0, 600.0);
    for index in 0..state.items_len() {
        assert!(state.is_item_loaded(index));
    }
    assert!(!state.is_item_loaded(state.items_len()));
}

#[test]
fn viewport_shrink_recomputes_columns_and_resets_layout() {
    let mut state = gallery(800.0, 600.0);
    let packed_at_800 = state.content_height();

    let _ = state.handle_resize(Size::new(400.0, 600.0));
    assert_eq!(state.column_count(), 2);
    assert!(state.content_height() > packed_at_800);

    // Growing back restores the four-column packing exactly.
    let _ = state.handle_resize(Size::new(800.0, 600.0));
    assert_eq!(state.column_count(), 4);
    assert_eq!(state.content_height(), packed_at_800);
}

#[test]
fn batch_counts_are_multiples_of_batch_size_below_ceiling() {
    let mut state = gallery(800.0, 600.0);
    for step in 1..=10 {
        state.load_more();
        assert_eq!(state.items_len(), 50 + step * 50);
    }
}

#[test]
fn positioner_reset_preserves_instance_semantics() {
    // The positioner contract the component relies on: reset adopts a new
    // config in place and repacking yields the same result as a fresh pack.
    let layout_config = LayoutConfig::default();
    let measurements = MeasurementCache::new(Size::new(
        layout_config.column_width,
        layout_config.card_height,
    ));

    let mut reused = MasonryPositioner::new(PositionerConfig::for_width(800.0, &layout_config));
    reused.extend_to(100, &measurements);
    reused.reset(PositionerConfig::for_width(400.0, &layout_config));
    reused.extend_to(100, &measurements);

    let mut fresh = MasonryPositioner::new(PositionerConfig::for_width(400.0, &layout_config));
    fresh.extend_to(100, &measurements);

    assert_eq!(reused.placements(), fresh.placements());
    assert_eq!(reused.content_height(), fresh.content_height());
}

#[test]
fn column_count_property_holds_across_widths() {
    let layout_config = LayoutConfig::default();
    for width in [0.0_f32, 1.0, 189.0, 190.0, 400.0, 759.0, 800.0, 1920.0] {
        let expected = (width / 190.0).floor() as usize;
        assert_eq!(layout::column_count(width, &layout_config), expected);
    }
}
