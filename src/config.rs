// SPDX-License-Identifier: MPL-2.0
//! Gallery configuration: card geometry and batch-loading limits.
//!
//! Both structs are plain value types read by every layout computation and
//! never mutated at runtime. Constructors clamp out-of-range values so a
//! nonsensical configuration cannot produce a broken gallery.

/// Fixed card width in logical pixels.
pub const CARD_WIDTH: f32 = 180.0;

/// Fixed card height in logical pixels.
pub const CARD_HEIGHT: f32 = 230.0;

/// Horizontal and vertical gap between cards.
pub const GUTTER_SIZE: f32 = 10.0;

/// Number of items appended per load-more request.
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// Total item count after which loading stops.
pub const DEFAULT_ITEM_CEILING: usize = 1000;

/// How many rows ahead of the visible range trigger a load-more request.
pub const DEFAULT_LOAD_THRESHOLD: usize = 5;

/// Geometry constants used by the masonry layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Width of every card, which is also the masonry column width.
    pub column_width: f32,
    /// Height of every card.
    pub card_height: f32,
    /// Gap between columns and between cards within a column.
    pub gutter_size: f32,
    /// Extra pixels rendered above and below the viewport.
    pub overscan_px: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            column_width: CARD_WIDTH,
            card_height: CARD_HEIGHT,
            gutter_size: GUTTER_SIZE,
            overscan_px: CARD_HEIGHT,
        }
    }
}

impl LayoutConfig {
    /// Horizontal footprint of one column including its trailing gutter.
    #[must_use]
    pub fn column_stride(&self) -> f32 {
        self.column_width + self.gutter_size
    }
}

/// Batch-loading limits for the infinite loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingConfig {
    /// Items appended per request.
    pub batch_size: usize,
    /// Maximum total item count.
    pub item_ceiling: usize,
    /// Rows of lookahead before triggering a load.
    pub threshold_rows: usize,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            item_ceiling: DEFAULT_ITEM_CEILING,
            threshold_rows: DEFAULT_LOAD_THRESHOLD,
        }
    }
}

impl LoadingConfig {
    /// Creates a loading configuration, clamping values into a sane range.
    ///
    /// A zero batch size would make load-more spin forever without progress,
    /// so it is clamped to 1.
    #[must_use]
    pub fn new(batch_size: usize, item_ceiling: usize, threshold_rows: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            item_ceiling,
            threshold_rows,
        }
    }
}

const _: () = {
    assert!(CARD_WIDTH > 0.0);
    assert!(CARD_HEIGHT > 0.0);
    assert!(GUTTER_SIZE >= 0.0);
    assert!(DEFAULT_BATCH_SIZE > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_card_constants() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.column_width, CARD_WIDTH);
        assert_eq!(layout.card_height, CARD_HEIGHT);
        assert_eq!(layout.overscan_px, CARD_HEIGHT);
        assert_eq!(layout.column_stride(), CARD_WIDTH + GUTTER_SIZE);
    }

    #[test]
    fn loading_config_clamps_zero_batch() {
        let config = LoadingConfig::new(0, 100, 5);
        assert_eq!(config.batch_size, 1);
    }

    #[test]
    fn loading_config_defaults() {
        let config = LoadingConfig::default();
        assert_eq!(config.batch_size, 50);
        assert_eq!(config.item_ceiling, 1000);
        assert_eq!(config.threshold_rows, 5);
    }
}
