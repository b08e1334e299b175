//! Footer audio player state.
//!
//! The player model is plain data plus pure transition helpers; the
//! `FooterPlayer` component syncs it against the `<audio>` element. Keeping
//! the transitions pure means toggle/seek/volume behavior is testable
//! natively, without an audio element.

#[cfg(test)]
#[path = "player_test.rs"]
mod player_test;

use canvas::item::ItemId;

/// The track currently loaded into the footer player.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub id: ItemId,
    pub name: String,
    pub url: String,
}

/// Footer player state: current track, playback flag, and telemetry the
/// `<audio>` element reports back.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayerState {
    pub track: Option<Track>,
    pub playing: bool,
    /// Playback position in seconds.
    pub progress_s: f64,
    /// Track duration in seconds, once metadata has loaded.
    pub duration_s: Option<f64>,
    /// Volume in [0, 1].
    pub volume: Option<f64>,
}

impl PlayerState {
    /// Toggle playback for an audio file. Clicking the playing track pauses
    /// it, clicking a paused track resumes, clicking a different track loads
    /// it from the start.
    pub fn toggle(&mut self, id: &ItemId, name: &str, url: &str) {
        if self.track.as_ref().is_some_and(|t| &t.id == id) {
            self.playing = !self.playing;
            return;
        }
        self.track = Some(Track { id: id.clone(), name: name.to_owned(), url: url.to_owned() });
        self.playing = true;
        self.progress_s = 0.0;
        self.duration_s = None;
    }

    /// Stop playback and unload the track (background click, delete, or a
    /// playback error).
    pub fn stop(&mut self) {
        self.track = None;
        self.playing = false;
        self.progress_s = 0.0;
        self.duration_s = None;
    }

    /// Whether this item is the one currently playing.
    #[must_use]
    pub fn is_playing(&self, id: &ItemId) -> bool {
        self.playing && self.track.as_ref().is_some_and(|t| &t.id == id)
    }

    /// Progress as a fraction of duration, for the seek bar. Zero until the
    /// duration is known.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        match self.duration_s {
            Some(d) if d > 0.0 => (self.progress_s / d).clamp(0.0, 1.0),
            _ => 0.0,
        }
    }

    /// Map a seek-bar fraction back to a position in seconds.
    #[must_use]
    pub fn seek_target(&self, fraction: f64) -> Option<f64> {
        let duration = self.duration_s?;
        Some((fraction.clamp(0.0, 1.0)) * duration)
    }

    /// Whether the player is muted. Unset volume counts as full volume.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.volume.is_some_and(|v| v <= 0.0)
    }

    /// Toggle between muted and full volume.
    pub fn toggle_mute(&mut self) {
        self.volume = Some(if self.is_muted() { 1.0 } else { 0.0 });
    }
}

/// Format a position in seconds as `m:ss`. Non-finite input (the audio
/// element reports NaN before metadata loads) renders as `--:--`.
#[must_use]
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "--:--".to_owned();
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
