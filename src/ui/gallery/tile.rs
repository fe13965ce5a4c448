// SPDX-License-Identifier: MPL-2.0
//! Cell renderer: one fixed-size card of the masonry grid.

use crate::config::LayoutConfig;
use crate::media::TileImage;
use crate::ui::design_tokens::{palette, typography};
use iced::widget::{container, image, text, Space};
use iced::{Background, ContentFit, Element, Length};

/// What the cell at an index currently holds.
#[derive(Debug, Clone, Copy)]
pub enum TileContent<'a> {
    /// Decoded image ready to show.
    Loaded(&'a TileImage),
    /// Item exists but its image is still being fetched.
    Loading,
    /// The image could not be fetched or decoded.
    Failed,
    /// No item exists at this index yet (render-ahead placeholder).
    Missing,
}

/// Renders one cell as a fixed-size card.
pub fn view<'a, Message: 'a>(
    content: TileContent<'a>,
    layout: &LayoutConfig,
) -> Element<'a, Message> {
    let width = Length::Fixed(layout.column_width);
    let height = Length::Fixed(layout.card_height);

    match content {
        TileContent::Loaded(tile) => container(
            image(tile.handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover),
        )
        .width(width)
        .height(height)
        .style(|_theme| card_style(palette::CARD_BACKGROUND))
        .into(),
        TileContent::Loading => container(Space::new().width(Length::Fill).height(Length::Fill))
            .width(width)
            .height(height)
            .style(|_theme| card_style(palette::GRAY_100))
            .into(),
        TileContent::Failed => container(
            text("image unavailable")
                .size(typography::SM)
                .color(palette::ERROR_500),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .width(width)
        .height(height)
        .style(|_theme| card_style(palette::GRAY_100))
        .into(),
        TileContent::Missing => Space::new().width(width).height(height).into(),
    }
}

fn card_style(color: iced::Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        ..container::Style::default()
    }
}
