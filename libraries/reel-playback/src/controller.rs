//! Playback controller - the now-playing state machine
//!
//! ```text
//! Idle    ── play / play_random ──▶ Playing
//! Playing ── pause ───────────────▶ Paused
//! Paused  ── resume ──────────────▶ Playing
//! Playing │ Paused ── play ───────▶ Playing   (old video stopped first)
//! Playing │ Paused ── stop ───────▶ Idle
//! Playing │ Paused ── flag(current) ▶ Idle
//! ```
//!
//! The controller only holds a video id; the catalog it is handed on every
//! call owns the video and its moderation flag.

use crate::{events::PlaybackEvent, types::NowPlaying, types::PlaybackState};
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};
use reel_core::{Catalog, ReelError, Result, Video, VideoId};

/// Owns the single "currently playing" slot
///
/// Every failed transition leaves the slot, the paused flag and the event
/// queue exactly as they were.
#[derive(Debug, Default)]
pub struct PlaybackController {
    /// Current video, if any
    current: Option<VideoId>,

    /// Only meaningful while `current` is set
    paused: bool,

    /// Events not yet drained by the caller
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackController {
    /// Create an idle controller
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Playback Control =====

    /// Play a video by id
    ///
    /// Stops the current video first, if there is one.
    pub fn play<'a>(&mut self, catalog: &'a Catalog, id: &str) -> Result<&'a Video> {
        let video = catalog
            .get_video(id)
            .ok_or_else(|| ReelError::video_not_found(id))?;

        if let Some(reason) = video.flag_reason() {
            return Err(ReelError::Flagged {
                id: video.id.clone(),
                reason: reason.to_string(),
            });
        }

        self.start(video);
        Ok(video)
    }

    /// Play a uniformly random unflagged video
    pub fn play_random<'a>(&mut self, catalog: &'a Catalog) -> Result<&'a Video> {
        self.play_random_with(catalog, &mut thread_rng())
    }

    /// Play a random unflagged video using the given generator
    pub fn play_random_with<'a, R>(&mut self, catalog: &'a Catalog, rng: &mut R) -> Result<&'a Video>
    where
        R: Rng + ?Sized,
    {
        let candidates: Vec<&Video> = catalog.playable().collect();
        let video = candidates
            .choose(rng)
            .copied()
            .ok_or(ReelError::NoneAvailable)?;

        self.start(video);
        Ok(video)
    }

    /// Stop the current video
    ///
    /// Returns the id of the video that was stopped.
    pub fn stop(&mut self) -> Result<VideoId> {
        let video_id = self.current.take().ok_or(ReelError::NothingPlaying)?;
        self.paused = false;

        tracing::debug!("Stopped {}", video_id);
        self.pending_events.push(PlaybackEvent::Stopped {
            video_id: video_id.clone(),
        });
        Ok(video_id)
    }

    /// Pause the current video
    pub fn pause(&mut self) -> Result<&VideoId> {
        let video_id = self.current.as_ref().ok_or(ReelError::NothingPlaying)?;
        if self.paused {
            return Err(ReelError::AlreadyPaused {
                id: video_id.clone(),
            });
        }

        self.paused = true;
        tracing::debug!("Paused {}", video_id);
        self.pending_events.push(PlaybackEvent::Paused {
            video_id: video_id.clone(),
        });
        Ok(video_id)
    }

    /// Resume the current video
    pub fn resume(&mut self) -> Result<&VideoId> {
        let video_id = self.current.as_ref().ok_or(ReelError::NothingPlaying)?;
        if !self.paused {
            return Err(ReelError::NotPaused {
                id: video_id.clone(),
            });
        }

        self.paused = false;
        tracing::debug!("Resumed {}", video_id);
        self.pending_events.push(PlaybackEvent::Resumed {
            video_id: video_id.clone(),
        });
        Ok(video_id)
    }

    // ===== Moderation =====

    /// Flag a video
    ///
    /// Flagging the current video stops it.
    pub fn flag(&mut self, catalog: &mut Catalog, id: &str, reason: &str) -> Result<()> {
        let video = catalog
            .get_video(id)
            .ok_or_else(|| ReelError::video_not_found(id))?;
        if video.is_flagged() {
            return Err(ReelError::AlreadyFlagged {
                id: video.id.clone(),
            });
        }

        catalog.set_flag(id, reason)?;
        tracing::debug!("Flagged {}", id);

        if self.is_current(id) {
            self.stop()?;
        }
        Ok(())
    }

    /// Remove a video's flag
    pub fn unflag(&self, catalog: &mut Catalog, id: &str) -> Result<()> {
        let video = catalog
            .get_video(id)
            .ok_or_else(|| ReelError::video_not_found(id))?;
        if !video.is_flagged() {
            return Err(ReelError::NotFlagged {
                id: video.id.clone(),
            });
        }

        catalog.clear_flag(id)?;
        tracing::debug!("Unflagged {}", id);
        Ok(())
    }

    // ===== State Queries =====

    /// Get current playback state
    pub fn state(&self) -> PlaybackState {
        debug_assert!(self.current.is_some() || !self.paused);
        match (&self.current, self.paused) {
            (None, _) => PlaybackState::Idle,
            (Some(_), false) => PlaybackState::Playing,
            (Some(_), true) => PlaybackState::Paused,
        }
    }

    /// Id of the current video
    pub fn current_video_id(&self) -> Option<&VideoId> {
        self.current.as_ref()
    }

    /// Whether the current video is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// The current video and paused flag, resolved through the catalog
    pub fn now_playing<'a>(&self, catalog: &'a Catalog) -> Result<NowPlaying<'a>> {
        let video_id = self.current.as_ref().ok_or(ReelError::NothingPlaying)?;
        let video = catalog
            .get_video(video_id.as_str())
            .ok_or_else(|| ReelError::video_not_found(video_id.clone()))?;

        Ok(NowPlaying {
            video,
            paused: self.paused,
        })
    }

    /// Take all events queued since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    fn is_current(&self, id: &str) -> bool {
        self.current.as_ref().is_some_and(|current| current == id)
    }

    fn start(&mut self, video: &Video) {
        if let Some(previous) = self.current.take() {
            tracing::debug!("Stopped {}", previous);
            self.pending_events.push(PlaybackEvent::Stopped { video_id: previous });
        }

        tracing::debug!("Playing {}", video.id);
        self.current = Some(video.id.clone());
        self.paused = false;
        self.pending_events.push(PlaybackEvent::Started {
            video_id: video.id.clone(),
        });
    }
}
