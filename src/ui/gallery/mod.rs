// SPDX-License-Identifier: MPL-2.0
//! The gallery view: masonry layout, infinite-load gating, and the component
//! wiring them to Iced.

pub mod component;
pub mod layout;
pub mod loader;
pub mod tile;

pub use component::{Message, State};
pub use loader::Phase;
