// SPDX-License-Identifier: MPL-2.0
//! Remote image cache for gallery tiles and the detail screen.
//!
//! Each URL is requested at most once while it stays listed. A failed
//! download shows a placeholder until the gallery is refreshed.

use crate::error::Result;
use iced::widget::image;
use std::collections::{HashMap, HashSet};

/// Load state of one remote image.
#[derive(Debug, Clone)]
pub enum Thumbnail {
    Pending,
    Ready(image::Handle),
    Failed,
}

#[derive(Debug, Default)]
pub struct ThumbnailCache {
    entries: HashMap<String, Thumbnail>,
}

impl ThumbnailCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `url` as pending.
    ///
    /// Returns `true` when the caller should start the download, `false` if
    /// the URL is already pending, loaded or failed.
    pub fn request(&mut self, url: &str) -> bool {
        if url.is_empty() || self.entries.contains_key(url) {
            return false;
        }
        self.entries.insert(url.to_string(), Thumbnail::Pending);
        true
    }

    /// Stores the result of a download started by [`request`](Self::request).
    ///
    /// Results for URLs dropped by [`retain_listed`](Self::retain_listed)
    /// are discarded.
    pub fn finish(&mut self, url: &str, result: Result<Vec<u8>>) {
        let Some(entry) = self.entries.get_mut(url) else {
            tracing::debug!(%url, "thumbnail no longer listed, dropping download");
            return;
        };
        *entry = match result {
            Ok(bytes) => Thumbnail::Ready(image::Handle::from_bytes(bytes)),
            Err(err) => {
                tracing::debug!(%url, error = %err, "thumbnail download failed");
                Thumbnail::Failed
            }
        };
    }

    /// Keeps only entries for `listed` URLs that have not failed, so failed
    /// images are downloaded again.
    pub fn retain_listed<'a>(&mut self, listed: impl IntoIterator<Item = &'a str>) {
        let listed: HashSet<&str> = listed.into_iter().collect();
        self.entries.retain(|url, entry| {
            !matches!(entry, Thumbnail::Failed) && listed.contains(url.as_str())
        });
    }

    #[must_use]
    pub fn get(&self, url: &str) -> Option<&Thumbnail> {
        self.entries.get(url)
    }

    /// Handle of a loaded image, if any.
    #[must_use]
    pub fn handle(&self, url: &str) -> Option<&image::Handle> {
        match self.entries.get(url) {
            Some(Thumbnail::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn url_is_requested_once() {
        let mut cache = ThumbnailCache::new();
        assert!(cache.request("https://img.test/1.jpg"));
        assert!(!cache.request("https://img.test/1.jpg"));
        assert!(matches!(cache.get("https://img.test/1.jpg"), Some(Thumbnail::Pending)));
    }

    #[test]
    fn empty_url_is_never_requested() {
        let mut cache = ThumbnailCache::new();
        assert!(!cache.request(""));
        assert!(cache.is_empty());
    }

    #[test]
    fn finished_download_exposes_handle() {
        let mut cache = ThumbnailCache::new();
        cache.request("https://img.test/1.jpg");
        cache.finish("https://img.test/1.jpg", Ok(vec![0xFF, 0xD8, 0xFF]));

        assert!(cache.handle("https://img.test/1.jpg").is_some());
        assert!(!cache.request("https://img.test/1.jpg"));
    }

    #[test]
    fn failed_download_is_not_retried() {
        let mut cache = ThumbnailCache::new();
        cache.request("https://img.test/404.jpg");
        cache.finish("https://img.test/404.jpg", Err(Error::Status(404)));

        assert!(matches!(cache.get("https://img.test/404.jpg"), Some(Thumbnail::Failed)));
        assert!(cache.handle("https://img.test/404.jpg").is_none());
        assert!(!cache.request("https://img.test/404.jpg"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn retain_listed_forgets_failures_and_unlisted_images() {
        let mut cache = ThumbnailCache::new();
        for url in ["https://img.test/1.jpg", "https://img.test/2.jpg", "https://img.test/3.jpg"] {
            cache.request(url);
        }
        cache.finish("https://img.test/1.jpg", Ok(vec![1]));
        cache.finish("https://img.test/2.jpg", Err(Error::Status(500)));

        cache.retain_listed(["https://img.test/1.jpg", "https://img.test/2.jpg"]);

        assert!(cache.handle("https://img.test/1.jpg").is_some());
        assert!(cache.get("https://img.test/2.jpg").is_none());
        assert!(cache.get("https://img.test/3.jpg").is_none());
        assert!(cache.request("https://img.test/2.jpg"));

        // Late result for an image that left the list.
        cache.finish("https://img.test/3.jpg", Ok(vec![3]));
        assert!(cache.get("https://img.test/3.jpg").is_none());
        assert_eq!(cache.len(), 2);
    }
}
