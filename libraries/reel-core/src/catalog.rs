//! Video catalog
//!
//! A fixed set of videos keyed by id. Entries are never added or removed after
//! construction; only their moderation flag changes.

use crate::error::{ReelError, Result};
use crate::types::{Video, VideoId};
use std::collections::HashMap;

/// Reason stored when a video is flagged without one
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// Read-only video lookup with mutable flag state
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Videos in construction order
    videos: Vec<Video>,

    /// Position of each id in `videos`
    index: HashMap<VideoId, usize>,
}

impl Catalog {
    /// Build a catalog from pre-populated records
    ///
    /// If an id appears more than once the first record wins.
    pub fn new(videos: impl IntoIterator<Item = Video>) -> Self {
        let mut catalog = Self::default();

        for video in videos {
            if catalog.index.contains_key(&video.id) {
                tracing::warn!("Ignoring duplicate catalog entry: {}", video.id);
                continue;
            }
            catalog.index.insert(video.id.clone(), catalog.videos.len());
            catalog.videos.push(video);
        }

        tracing::debug!("Catalog built with {} videos", catalog.videos.len());
        catalog
    }

    /// Exact-match lookup by id
    pub fn get_video(&self, id: &str) -> Option<&Video> {
        self.index.get(id).map(|&position| &self.videos[position])
    }

    /// Every video, in construction order
    ///
    /// Display order is the caller's concern (sorted by title).
    pub fn get_all_videos(&self) -> &[Video] {
        &self.videos
    }

    /// Videos that are not flagged
    pub fn playable(&self) -> impl Iterator<Item = &Video> {
        self.videos.iter().filter(|video| !video.is_flagged())
    }

    /// Flag a video
    ///
    /// A blank reason is stored as [`DEFAULT_FLAG_REASON`]. Overwrites any
    /// previous reason; refusing to flag twice is a playback-level rule.
    pub fn set_flag(&mut self, id: &str, reason: &str) -> Result<()> {
        let video = self.get_video_mut(id)?;
        let reason = reason.trim();
        let reason = if reason.is_empty() {
            DEFAULT_FLAG_REASON
        } else {
            reason
        };
        video.set_flag(reason.to_string());
        Ok(())
    }

    /// Remove a video's flag
    pub fn clear_flag(&mut self, id: &str) -> Result<()> {
        self.get_video_mut(id)?.clear_flag();
        Ok(())
    }

    /// Number of videos
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Whether the catalog has no videos
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    fn get_video_mut(&mut self, id: &str) -> Result<&mut Video> {
        let position = *self
            .index
            .get(id)
            .ok_or_else(|| ReelError::video_not_found(id))?;
        Ok(&mut self.videos[position])
    }
}
