// SPDX-License-Identifier: MPL-2.0
//! Remote image fetching and decoding.
//!
//! Cards are small (180x230), so decoding happens inline in the async task
//! rather than on a blocking pool. Decoded pixels are handed to Iced as RGBA
//! so a corrupt response is caught here instead of inside the renderer.

use crate::error::Result;
use iced::widget::image;

/// A decoded gallery image ready for display.
#[derive(Debug, Clone)]
pub struct TileImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl TileImage {
    /// Creates a tile image from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Approximate memory footprint of the decoded pixels, in bytes.
    #[must_use]
    pub fn byte_size(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}

/// Fetches and decodes one gallery image.
///
/// # Errors
///
/// Returns `Error::Http` when the request fails or the host answers with a
/// non-success status, and `Error::Decode` when the payload is not a
/// decodable image.
pub async fn fetch_tile(client: reqwest::Client, url: String) -> Result<TileImage> {
    let response = client.get(&url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;

    let decoded = image_rs::load_from_memory(&bytes)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(TileImage::from_rgba(width, height, rgba.into_vec()))
}
