// SPDX-License-Identifier: MPL-2.0
//! Media handling: item generation, remote image fetching, and caching.

pub mod cache;
pub mod fetch;
pub mod source;

pub use cache::TileCache;
pub use fetch::{fetch_tile, TileImage};
pub use source::{GalleryItem, ImageSource, FIRST_IMAGE_ID};
