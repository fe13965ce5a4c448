// SPDX-License-Identifier: MPL-2.0
//! Placeholder-image item source.
//!
//! Items carry no payload beyond a URL built from a monotonically increasing
//! identifier; the remote host (picsum.photos) serves a distinct placeholder
//! photo per id at the requested pixel size. The counter is owned by the
//! source instance so multiple galleries never interfere with each other.

/// First image id handed out by a fresh source.
pub const FIRST_IMAGE_ID: u64 = 10;

const IMAGE_HOST: &str = "https://picsum.photos";

/// One gallery entry: an externally-hosted image descriptor.
///
/// Items are append-only and never mutated after creation; their identity is
/// their position in the gallery sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    /// Monotonic image identifier used to build the URL.
    pub id: u64,
    /// Fully formed image URL.
    pub url: String,
}

/// Counter-driven generator of [`GalleryItem`] batches.
#[derive(Debug, Clone)]
pub struct ImageSource {
    next_id: u64,
    width: u32,
    height: u32,
}

impl ImageSource {
    /// Creates a source producing URLs for images of the given pixel size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            next_id: FIRST_IMAGE_ID,
            width,
            height,
        }
    }

    /// Returns the id the next generated item will receive.
    #[must_use]
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Generates the next `count` items, advancing the id counter.
    pub fn next_batch(&mut self, count: usize) -> Vec<GalleryItem> {
        (0..count)
            .map(|_| {
                let id = self.next_id;
                self.next_id += 1;
                GalleryItem {
                    id,
                    url: format!(
                        "{}/{}/{}?image={}",
                        IMAGE_HOST, self.width, self.height, id
                    ),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_item_uses_initial_id() {
        let mut source = ImageSource::new(180, 230);
        let batch = source.next_batch(1);
        assert_eq!(batch[0].id, FIRST_IMAGE_ID);
        assert_eq!(batch[0].url, "https://picsum.photos/180/230?image=10");
    }

    #[test]
    fn ids_are_monotonic_across_batches() {
        let mut source = ImageSource::new(180, 230);
        let first = source.next_batch(50);
        let second = source.next_batch(50);
        assert_eq!(first.len(), 50);
        assert_eq!(first.last().unwrap().id, FIRST_IMAGE_ID + 49);
        assert_eq!(second[0].id, FIRST_IMAGE_ID + 50);
        assert_eq!(source.next_id(), FIRST_IMAGE_ID + 100);
    }

    #[test]
    fn independent_sources_do_not_interfere() {
        let mut a = ImageSource::new(180, 230);
        let mut b = ImageSource::new(180, 230);
        a.next_batch(10);
        let batch = b.next_batch(1);
        assert_eq!(batch[0].id, FIRST_IMAGE_ID);
    }

    #[test]
    fn empty_batch_is_allowed() {
        let mut source = ImageSource::new(180, 230);
        assert!(source.next_batch(0).is_empty());
        assert_eq!(source.next_id(), FIRST_IMAGE_ID);
    }
}
