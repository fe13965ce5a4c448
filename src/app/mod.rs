// SPDX-License-Identifier: MPL-2.0
//! Application root: owns the gallery component and wires it into the Iced
//! runtime (boot, update, view, subscriptions).

mod message;
mod subscription;
mod view;

pub use message::Message;

use crate::config::{LayoutConfig, LoadingConfig};
use crate::ui::gallery::component;
use iced::{window, Element, Size, Subscription, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 650.0;

/// Root application state.
pub struct App {
    gallery: component::State,
}

impl App {
    /// Initializes the gallery and kicks off the initial batch load.
    fn new() -> (Self, Task<Message>) {
        let mut gallery = component::State::new(
            LayoutConfig::default(),
            LoadingConfig::default(),
            Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        );
        let boot = gallery.initialize().map(Message::Gallery);
        (Self { gallery }, boot)
    }

    fn title(&self) -> String {
        String::from("Iced Mosaic")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(message) => self.gallery.update(message).map(Message::Gallery),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(&self.gallery)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}
