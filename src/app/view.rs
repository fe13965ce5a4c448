// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::gallery::component;
use iced::widget::{container, text, Column};
use iced::{Element, Length};

/// Renders the header and the gallery below it.
pub fn view(gallery: &component::State) -> Element<'_, Message> {
    let header = container(
        text("Infinite-scroll masonry gallery")
            .size(typography::MD),
    )
    .padding(spacing::LG);

    Column::new()
        .push(header)
        .push(gallery.view().map(Message::Gallery))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
