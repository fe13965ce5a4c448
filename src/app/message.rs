// SPDX-License-Identifier: MPL-2.0
//! Top-level messages for the application.

use crate::ui::gallery::component;

/// Messages consumed by `App::update`. Variants forward component messages so
/// the application keeps a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(component::Message),
}
