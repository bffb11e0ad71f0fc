//! Playing-list state machine
//!
//! Tracks what is queued for playback right now and which entry is current.
//! The list is source-agnostic: search results, an album, a playlist or a
//! single track all become the same flat sequence, so next/previous behave
//! identically regardless of where the tracks came from.
//!
//! ```text
//! Idle ──set_playing_list(non-empty)──▶ Ready
//!  ▲                                     │
//!  └──────set_playing_list(empty)────────┘
//!
//! Ready: next()     index = (index + 1) mod len
//!        previous() index = (index + len - 1) mod len
//! ```

use tunebox_core::{Track, TrackId};

use crate::types::PlayerState;

/// Playing list plus current index
///
/// Invariant: `index` is `None` exactly when the list is empty, and is always
/// a valid position otherwise.
#[derive(Debug, Clone, Default)]
pub struct PlaybackStateMachine {
    tracks: Vec<Track>,
    index: Option<usize>,
}

impl PlaybackStateMachine {
    /// Create an idle state machine
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the playing list
    ///
    /// The current index becomes `start_index` when it is in range, otherwise
    /// 0 for a non-empty list and `None` for an empty one.
    pub fn set_playing_list(&mut self, tracks: Vec<Track>, start_index: Option<usize>) {
        self.index = match start_index {
            Some(i) if i < tracks.len() => Some(i),
            _ if tracks.is_empty() => None,
            _ => Some(0),
        };
        self.tracks = tracks;
    }

    /// Make the first track with `track_id` current
    ///
    /// Unknown ids leave the index untouched. Returns whether the id was found.
    pub fn select_by_id(&mut self, track_id: &TrackId) -> bool {
        match self.tracks.iter().position(|t| &t.id == track_id) {
            Some(position) => {
                self.index = Some(position);
                true
            }
            None => false,
        }
    }

    /// Advance circularly, wrapping to the first track past the end
    pub fn next(&mut self) -> Option<&Track> {
        let len = self.tracks.len();
        self.index = self.index.map(|i| (i + 1) % len);
        self.current_track()
    }

    /// Step back circularly, wrapping to the last track before the first
    pub fn previous(&mut self) -> Option<&Track> {
        let len = self.tracks.len();
        self.index = self.index.map(|i| (i + len - 1) % len);
        self.current_track()
    }

    /// The track at the current index, if any
    pub fn current_track(&self) -> Option<&Track> {
        self.index.and_then(|i| self.tracks.get(i))
    }

    pub fn current_index(&self) -> Option<usize> {
        self.index
    }

    pub fn playing_list(&self) -> &[Track] {
        &self.tracks
    }

    pub fn state(&self) -> PlayerState {
        if self.index.is_some() {
            PlayerState::Ready
        } else {
            PlayerState::Idle
        }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
