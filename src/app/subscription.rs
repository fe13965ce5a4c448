// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window resize events are routed to the gallery so the column count can be
//! recomputed and the positioner reset before the next layout pass.

use super::Message;
use crate::ui::gallery::component;
use iced::{event, window, Subscription};

/// Creates the native-event subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::Gallery(
            component::Message::ViewportResized(size),
        )),
        _ => None,
    })
}
