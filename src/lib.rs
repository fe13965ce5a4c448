// SPDX-License-Identifier: MPL-2.0
//! `iced_mosaic` is an infinite-scrolling masonry image gallery built with the
//! Iced GUI framework.
//!
//! The gallery packs fixed-size image cards into columns, virtualizes the
//! scrolled content so only cards near the viewport are materialized, and
//! appends placeholder-image batches as the user scrolls until an item
//! ceiling is reached.

pub mod app;
pub mod config;
pub mod error;
pub mod media;
pub mod ui;
