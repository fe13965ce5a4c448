// SPDX-License-Identifier: MPL-2.0
//! Masonry layout math: column counting, cell positioning, size memoization,
//! and the visible-window computation.
//!
//! Everything here is pure state-in/state-out so the layout contract can be
//! tested without a window. The component feeds these helpers read-only
//! configuration and viewport measurements; they never reach back into
//! widget state.

use crate::config::LayoutConfig;
use iced::Size;

/// Number of columns that fit in `width`.
///
/// `floor(width / (column_width + gutter))`; zero for widths narrower than
/// one column stride. Callers building a positioner config clamp to 1 so a
/// sliver-sized window still lays out a single column.
#[must_use]
pub fn column_count(width: f32, layout: &LayoutConfig) -> usize {
    let stride = layout.column_stride();
    if stride <= 0.0 {
        return 0;
    }
    (width.max(0.0) / stride).floor() as usize
}

/// Result of a viewport-width change.
///
/// Makes the resize contract explicit: the new column count, and whether the
/// positioner must be reset before the next layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportChange {
    pub column_count: usize,
    pub positioner_reset_required: bool,
}

/// Computes the state transition for a viewport-width change.
#[must_use]
pub fn on_viewport_change(width: f32, layout: &LayoutConfig) -> ViewportChange {
    ViewportChange {
        column_count: column_count(width, layout),
        positioner_reset_required: true,
    }
}

/// Configuration the positioner packs against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionerConfig {
    pub column_count: usize,
    pub column_width: f32,
    pub spacer: f32,
}

impl PositionerConfig {
    /// Builds a positioner config for the given viewport width.
    ///
    /// The column count is clamped to a minimum of 1 here, and only here:
    /// [`column_count`] stays a pure floor so derived state reflects the real
    /// viewport, while layout always has at least one column to pack into.
    #[must_use]
    pub fn for_width(width: f32, layout: &LayoutConfig) -> Self {
        Self {
            column_count: column_count(width, layout).max(1),
            column_width: layout.column_width,
            spacer: layout.gutter_size,
        }
    }
}

/// Placement of one cell inside the masonry grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPosition {
    pub column: usize,
    pub x: f32,
    pub y: f32,
    pub height: f32,
}

/// Memoized per-cell sizes.
///
/// Cards are fixed-size, so unmeasured cells report the default size; a
/// recorded measurement (e.g. from a decoded image) is remembered per index.
/// The cache deliberately survives positioner resets so a width change never
/// throws away known sizes.
#[derive(Debug, Clone)]
pub struct MeasurementCache {
    default_size: Size,
    measured: Vec<Option<Size>>,
}

impl MeasurementCache {
    /// Creates a cache reporting `default_size` for unmeasured cells.
    #[must_use]
    pub fn new(default_size: Size) -> Self {
        Self {
            default_size,
            measured: Vec::new(),
        }
    }

    /// Size to lay out for the cell at `index`.
    #[must_use]
    pub fn size_of(&self, index: usize) -> Size {
        self.measured
            .get(index)
            .copied()
            .flatten()
            .unwrap_or(self.default_size)
    }

    /// Records an actual measurement for `index`.
    pub fn record(&mut self, index: usize, size: Size) {
        if index >= self.measured.len() {
            self.measured.resize(index + 1, None);
        }
        self.measured[index] = Some(size);
    }

    /// Whether `index` has a recorded measurement.
    #[must_use]
    pub fn is_measured(&self, index: usize) -> bool {
        self.measured.get(index).copied().flatten().is_some()
    }
}

/// Stateful shortest-column cell packer.
///
/// Exactly one positioner exists per mounted gallery. It is created lazily on
/// the first known viewport width and [`reset`](Self::reset) in place on
/// width changes; placements are extended incrementally as items arrive so
/// `view` can read them without mutation.
#[derive(Debug, Clone)]
pub struct MasonryPositioner {
    config: PositionerConfig,
    column_heights: Vec<f32>,
    placements: Vec<CellPosition>,
}

impl MasonryPositioner {
    /// Creates a positioner for the given config.
    #[must_use]
    pub fn new(config: PositionerConfig) -> Self {
        let columns = config.column_count.max(1);
        Self {
            config,
            column_heights: vec![0.0; columns],
            placements: Vec::new(),
        }
    }

    /// Adopts a new config and clears placements, reusing the instance.
    ///
    /// Cells must be re-packed (via [`extend_to`](Self::extend_to)) after a
    /// reset; the measurement cache is external and unaffected.
    pub fn reset(&mut self, config: PositionerConfig) {
        let columns = config.column_count.max(1);
        self.config = config;
        self.column_heights.clear();
        self.column_heights.resize(columns, 0.0);
        self.placements.clear();
    }

    /// Packs cells `placements.len()..count` into the shortest columns.
    pub fn extend_to(&mut self, count: usize, measurements: &MeasurementCache) {
        while self.placements.len() < count {
            let index = self.placements.len();
            let size = measurements.size_of(index);
            let column = shortest_column(&self.column_heights);
            let x = column as f32 * (self.config.column_width + self.config.spacer);
            let y = self.column_heights[column];
            self.column_heights[column] = y + size.height + self.config.spacer;
            self.placements.push(CellPosition {
                column,
                x,
                y,
                height: size.height,
            });
        }
    }

    /// All computed placements, in item order.
    #[must_use]
    pub fn placements(&self) -> &[CellPosition] {
        &self.placements
    }

    /// Current packing config.
    #[must_use]
    pub fn config(&self) -> PositionerConfig {
        self.config
    }

    /// Total packed content height: the tallest column minus its trailing
    /// spacer.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        let max = self
            .column_heights
            .iter()
            .copied()
            .fold(0.0_f32, f32::max);
        (max - self.config.spacer).max(0.0)
    }
}

fn shortest_column(heights: &[f32]) -> usize {
    let mut column = 0;
    let mut best = heights.first().copied().unwrap_or(0.0);
    for (i, height) in heights.iter().enumerate().skip(1) {
        if *height < best {
            best = *height;
            column = i;
        }
    }
    column
}

/// Vertical pixel band of content that should be materialized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleWindow {
    pub top: f32,
    pub bottom: f32,
}

impl VisibleWindow {
    /// Whether a cell at `y` with `height` overlaps the window.
    #[must_use]
    pub fn contains(&self, y: f32, height: f32) -> bool {
        y + height >= self.top && y <= self.bottom
    }
}

/// Computes the band of content to materialize from the scroll position,
/// viewport height, and overscan distance.
#[must_use]
pub fn visible_window(scroll_y: f32, viewport_height: f32, overscan_px: f32) -> VisibleWindow {
    let top = (scroll_y - overscan_px).max(0.0);
    let bottom = (scroll_y + viewport_height + overscan_px).max(top);
    VisibleWindow { top, bottom }
}

/// Highest item index whose cell overlaps the window, if any.
#[must_use]
pub fn last_visible_index(placements: &[CellPosition], window: VisibleWindow) -> Option<usize> {
    placements
        .iter()
        .enumerate()
        .filter(|(_, cell)| window.contains(cell.y, cell.height))
        .map(|(index, _)| index)
        .max()
}
