// SPDX-License-Identifier: MPL-2.0
//! Gallery component encapsulating state and update logic.
//!
//! The component owns the append-only item list, the derived column count,
//! the lazily-created positioner, and the measurement/tile caches. All
//! mutation happens in [`State::update`]; `view` only reads the placements
//! the positioner has already materialized.

use crate::config::{LayoutConfig, LoadingConfig};
use crate::error::Error;
use crate::media::{fetch_tile, GalleryItem, ImageSource, TileCache, TileImage};
use crate::ui::gallery::layout::{
    self, CellPosition, MasonryPositioner, MeasurementCache, PositionerConfig,
};
use crate::ui::gallery::loader::{self, LoadGate, Phase};
use crate::ui::gallery::tile::{self, TileContent};
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{scrollable, Column, Row, Space};
use iced::{Element, Length, Rectangle, Size, Task};
use std::collections::HashSet;

/// Messages emitted by the gallery widgets and fetch tasks.
#[derive(Debug, Clone)]
pub enum Message {
    /// The scrollable reported a new offset and bounds.
    Scrolled {
        bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    /// The available viewport changed size (window resize / orientation).
    ViewportResized(Size),
    /// An image fetch settled.
    TileFetched {
        index: usize,
        id: u64,
        result: Result<TileImage, Error>,
    },
}

/// Viewport geometry tracked from the scrollable and resize events.
#[derive(Debug, Clone, Copy, Default)]
struct ViewportRegion {
    width: f32,
    height: f32,
    scroll_y: f32,
}

/// Gallery state: items, layout helpers, and image caches.
pub struct State {
    layout: LayoutConfig,
    items: Vec<GalleryItem>,
    source: ImageSource,
    column_count: usize,
    positioner: Option<MasonryPositioner>,
    measurements: MeasurementCache,
    gate: LoadGate,
    batch_size: usize,
    viewport: ViewportRegion,
    tiles: TileCache,
    pending: HashSet<u64>,
    failed: HashSet<u64>,
    client: reqwest::Client,
}

impl State {
    /// Creates an empty gallery sized against `initial_size`.
    #[must_use]
    pub fn new(layout: LayoutConfig, loading: LoadingConfig, initial_size: Size) -> Self {
        Self {
            layout,
            items: Vec::new(),
            source: ImageSource::new(layout.column_width as u32, layout.card_height as u32),
            column_count: 0,
            positioner: None,
            measurements: MeasurementCache::new(Size::new(
                layout.column_width,
                layout.card_height,
            )),
            gate: LoadGate::new(loading.item_ceiling, loading.threshold_rows),
            batch_size: loading.batch_size,
            viewport: ViewportRegion {
                width: initial_size.width,
                height: initial_size.height,
                scroll_y: 0.0,
            },
            tiles: TileCache::default(),
            pending: HashSet::new(),
            failed: HashSet::new(),
            client: reqwest::Client::new(),
        }
    }

    /// Loads the initial batch and kicks off fetches for the first screen.
    pub fn initialize(&mut self) -> Task<Message> {
        self.request_batch();
        self.ensure_positioner();
        self.schedule_fetches()
    }

    /// Number of items currently loaded.
    #[must_use]
    pub fn items_len(&self) -> usize {
        self.items.len()
    }

    /// Derived column count for the current viewport width.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Lifecycle phase derived from the loaded count.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.gate.phase(self.items.len())
    }

    /// Row count reported to the infinite loader.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.gate.row_count(self.items.len())
    }

    /// Whether an item already exists at `index`.
    #[must_use]
    pub fn is_item_loaded(&self, index: usize) -> bool {
        loader::is_item_loaded(self.items.len(), index)
    }

    /// Total packed content height, zero before the positioner exists.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.positioner
            .as_ref()
            .map_or(0.0, MasonryPositioner::content_height)
    }

    /// Handles one message, returning fetch tasks to run.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Scrolled { bounds, offset } => self.handle_scroll(bounds, offset),
            Message::ViewportResized(size) => self.handle_resize(size),
            Message::TileFetched { index, id, result } => {
                self.handle_tile_fetched(index, id, result)
            }
        }
    }

    /// Appends one batch when below the ceiling; a permanent no-op once the
    /// ceiling is reached. Safe to invoke redundantly: an in-flight request
    /// suppresses the gate, and the ceiling check bounds the total.
    pub fn load_more(&mut self) {
        if self.phase() == Phase::Complete {
            return;
        }
        let request = self.gate.begin();
        tracing::info!(request, loaded = self.items.len(), "load more");
        self.request_batch();
        self.gate.settle();
    }

    /// Applies a viewport-width change: recompute the column count and reset
    /// (not recreate) the positioner before the next layout pass.
    pub fn handle_resize(&mut self, size: Size) -> Task<Message> {
        let width_changed = (size.width - self.viewport.width).abs() > f32::EPSILON;
        self.viewport.width = size.width;
        self.viewport.height = size.height;

        if width_changed {
            let change = layout::on_viewport_change(size.width, &self.layout);
            self.column_count = change.column_count;
            debug_assert!(change.positioner_reset_required);
            match self.positioner.as_mut() {
                Some(positioner) => {
                    positioner.reset(PositionerConfig::for_width(size.width, &self.layout));
                    positioner.extend_to(self.items.len(), &self.measurements);
                }
                None => self.ensure_positioner(),
            }
        }

        self.schedule_fetches()
    }

    fn handle_scroll(&mut self, bounds: Rectangle, offset: AbsoluteOffset) -> Task<Message> {
        self.viewport.height = bounds.height;
        self.viewport.scroll_y = offset.y;

        let window = layout::visible_window(
            self.viewport.scroll_y,
            self.viewport.height,
            self.layout.overscan_px,
        );
        let last_visible = self
            .positioner
            .as_ref()
            .and_then(|p| layout::last_visible_index(p.placements(), window));

        if self.gate.should_load(self.items.len(), last_visible) {
            self.load_more();
        }

        self.schedule_fetches()
    }

    fn handle_tile_fetched(
        &mut self,
        index: usize,
        id: u64,
        result: Result<TileImage, Error>,
    ) -> Task<Message> {
        self.pending.remove(&id);
        match result {
            Ok(tile) => {
                // Cards are fixed-size; record the cell footprint, not the
                // decoded dimensions, so layout stays stable.
                self.measurements.record(
                    index,
                    Size::new(self.layout.column_width, self.layout.card_height),
                );
                self.tiles.put(id, tile);
            }
            Err(error) => {
                tracing::warn!(id, %error, "tile fetch failed");
                self.failed.insert(id);
            }
        }
        Task::none()
    }

    /// Appends the next batch and packs the new cells.
    fn request_batch(&mut self) {
        let batch = self.source.next_batch(self.batch_size);
        self.items.extend(batch);
        if let Some(positioner) = self.positioner.as_mut() {
            positioner.extend_to(self.items.len(), &self.measurements);
        }
    }

    /// Creates the positioner once the viewport width is known.
    ///
    /// Invoked once per component lifetime; width changes afterwards go
    /// through reset.
    fn ensure_positioner(&mut self) {
        if self.positioner.is_some() || self.viewport.width <= 0.0 {
            return;
        }
        self.column_count = layout::column_count(self.viewport.width, &self.layout);
        let mut positioner = MasonryPositioner::new(PositionerConfig::for_width(
            self.viewport.width,
            &self.layout,
        ));
        positioner.extend_to(self.items.len(), &self.measurements);
        self.positioner = Some(positioner);
    }

    /// Starts fetches for visible items whose images are neither cached,
    /// pending, nor failed. De-duplication is keyed on the image id so
    /// overlapping scroll events never fetch the same tile twice.
    fn schedule_fetches(&mut self) -> Task<Message> {
        let Some(positioner) = self.positioner.as_ref() else {
            return Task::none();
        };
        let window = layout::visible_window(
            self.viewport.scroll_y,
            self.viewport.height,
            self.layout.overscan_px,
        );

        let mut tasks = Vec::new();
        for (index, cell) in positioner.placements().iter().enumerate() {
            if !window.contains(cell.y, cell.height) {
                continue;
            }
            let Some(item) = self.items.get(index) else {
                continue;
            };
            let id = item.id;
            if self.tiles.contains(id) || self.pending.contains(&id) || self.failed.contains(&id)
            {
                continue;
            }
            self.pending.insert(id);
            let future = fetch_tile(self.client.clone(), item.url.clone());
            tasks.push(Task::perform(future, move |result| Message::TileFetched {
                index,
                id,
                result,
            }));
        }

        if tasks.is_empty() {
            Task::none()
        } else {
            tracing::debug!(count = tasks.len(), "scheduling tile fetches");
            Task::batch(tasks)
        }
    }

    fn tile_content(&self, index: usize) -> TileContent<'_> {
        match self.items.get(index) {
            None => TileContent::Missing,
            Some(item) => {
                if self.failed.contains(&item.id) {
                    TileContent::Failed
                } else if let Some(tile) = self.tiles.peek(item.id) {
                    TileContent::Loaded(tile)
                } else {
                    TileContent::Loading
                }
            }
        }
    }

    /// Renders the virtualized masonry grid.
    ///
    /// Only cells overlapping the visible window (plus overscan) are
    /// materialized; the rest of each column is represented by spacer runs so
    /// the scrollbar reflects the full content height.
    pub fn view(&self) -> Element<'_, Message> {
        let Some(positioner) = self.positioner.as_ref() else {
            return Space::new().width(Length::Fill).height(Length::Fill).into();
        };

        let window = layout::visible_window(
            self.viewport.scroll_y,
            self.viewport.height,
            self.layout.overscan_px,
        );
        let content_height = positioner.content_height();
        let column_total = positioner.config().column_count;

        let mut columns: Vec<Vec<(usize, &CellPosition)>> = vec![Vec::new(); column_total];
        for (index, cell) in positioner.placements().iter().enumerate() {
            if window.contains(cell.y, cell.height) && cell.column < column_total {
                columns[cell.column].push((index, cell));
            }
        }

        let mut grid = Row::new().spacing(self.layout.gutter_size);
        for cells in columns {
            let mut column = Column::new().width(Length::Fixed(self.layout.column_width));
            let mut cursor = 0.0_f32;
            for (index, cell) in cells {
                if cell.y > cursor {
                    column = column.push(Space::new().height(Length::Fixed(cell.y - cursor)));
                }
                column = column.push(tile::view(self.tile_content(index), &self.layout));
                cursor = cell.y + cell.height;
            }
            if content_height > cursor {
                column = column.push(Space::new().height(Length::Fixed(content_height - cursor)));
            }
            grid = grid.push(column);
        }

        scrollable(grid)
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(|viewport| Message::Scrolled {
                bounds: viewport.bounds(),
                offset: viewport.absolute_offset(),
            })
            .into()
    }
}
