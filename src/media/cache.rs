// SPDX-License-Identifier: MPL-2.0
//! LRU cache for decoded gallery images.
//!
//! The gallery can grow to a thousand items while only a screenful is ever
//! visible, so decoded pixels are kept in a bounded LRU keyed by image id.
//! Eviction only discards pixels; the item list is never touched, and an
//! evicted image is simply re-fetched the next time it scrolls into view.

use crate::media::TileImage;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Default number of decoded tiles kept in memory.
///
/// At 180x230 RGBA a tile is ~165 KB, so 256 tiles stay under ~42 MB while
/// covering several screens of scrollback.
pub const DEFAULT_TILE_CAPACITY: usize = 256;

/// Bounded cache of decoded tile images keyed by image id.
#[derive(Debug)]
pub struct TileCache {
    entries: LruCache<u64, TileImage>,
}

impl TileCache {
    /// Creates a cache holding at most `capacity` decoded tiles.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("clamped above zero");
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Inserts a decoded tile, evicting the least recently used one if full.
    pub fn put(&mut self, id: u64, tile: TileImage) {
        self.entries.put(id, tile);
    }

    /// Looks up a tile and marks it as recently used.
    pub fn get(&mut self, id: u64) -> Option<&TileImage> {
        self.entries.get(&id)
    }

    /// Looks up a tile without touching recency, for use from `view`.
    #[must_use]
    pub fn peek(&self, id: u64) -> Option<&TileImage> {
        self.entries.peek(&id)
    }

    /// Whether a tile is currently cached.
    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.entries.contains(&id)
    }

    /// Number of cached tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TileCache {
    fn default() -> Self {
        Self::new(DEFAULT_TILE_CAPACITY)
    }
}
