//! Audio player state, independent of the media element.

use crate::models::{Episode, EpisodeId, FeedId};
use thiserror::Error;

/// Why an episode cannot be played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// The episode carries no audio enclosure.
    #[error("episode {0} has no audio")]
    NoAudio(EpisodeId),
}

/// An episode known to carry audio.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayableEpisode {
    /// Episode id.
    pub id: EpisodeId,
    /// Owning feed.
    pub feed_id: FeedId,
    /// Display title, if any.
    pub title: Option<String>,
    /// Audio enclosure URL.
    pub audio_url: String,
    /// Feed-provided duration string.
    pub duration: Option<String>,
    /// Original link.
    pub link: Option<String>,
}

impl TryFrom<&Episode> for PlayableEpisode {
    type Error = PlayerError;

    fn try_from(episode: &Episode) -> Result<Self, Self::Error> {
        let audio_url = episode
            .audio()
            .ok_or(PlayerError::NoAudio(episode.id))?
            .to_string();
        Ok(Self {
            id: episode.id,
            feed_id: episode.feed_id,
            title: episode.display_title().map(ToString::to_string),
            audio_url,
            duration: episode.duration.clone(),
            link: episode.original_link().map(ToString::to_string),
        })
    }
}

/// Icon shown on the mute button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VolumeIcon {
    /// Muted or zero volume.
    Muted,
    /// Volume below one half.
    Low,
    /// Volume at or above one half.
    Normal,
}

/// Playback state mirrored from the media element.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerState {
    /// Episode bound to the element; `None` while closed.
    pub episode: Option<PlayableEpisode>,
    /// Whether playback is running.
    pub playing: bool,
    /// Mute flag, independent of `volume`.
    pub muted: bool,
    /// Volume in `[0, 1]`.
    pub volume: f64,
    /// Current position in seconds.
    pub current_time: f64,
    /// Total length in seconds, `0` until metadata loads.
    pub duration: f64,
    /// `true` while the user drags the seek bar.
    pub seeking: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            episode: None,
            playing: false,
            muted: false,
            volume: 1.0,
            current_time: 0.0,
            duration: 0.0,
            seeking: false,
        }
    }
}

impl PlayerState {
    /// Whether the modal is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.episode.is_some()
    }

    /// Bind a new episode and reset progress. Volume and mute carry over.
    pub fn open(&mut self, episode: PlayableEpisode) {
        self.episode = Some(episode);
        self.playing = false;
        self.current_time = 0.0;
        self.duration = 0.0;
        self.seeking = false;
    }

    /// Translation key for the play/pause toggle. Opening leaves it at play.
    #[must_use]
    pub const fn toggle_label_key(&self) -> &'static str {
        if self.playing { "player.pause" } else { "player.play" }
    }

    /// Unbind the episode and stop.
    pub fn close(&mut self) {
        self.episode = None;
        self.playing = false;
        self.current_time = 0.0;
        self.duration = 0.0;
        self.seeking = false;
    }

    /// Record metadata from the element.
    pub fn set_duration(&mut self, seconds: f64) {
        self.duration = if seconds.is_finite() && seconds > 0.0 {
            seconds
        } else {
            0.0
        };
    }

    /// Sync the position from a `timeupdate`; ignored while seeking.
    pub fn sync_time(&mut self, seconds: f64) {
        if !self.seeking && seconds.is_finite() {
            self.current_time = seconds.max(0.0);
        }
    }

    /// Start dragging the seek bar.
    pub const fn begin_seek(&mut self) {
        self.seeking = true;
    }

    /// Position for a seek bar fraction in `[0, 1]`; updates `current_time`.
    pub fn seek_to(&mut self, fraction: f64) -> f64 {
        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.current_time = self.duration * fraction;
        self.current_time
    }

    /// Finish dragging the seek bar.
    pub const fn end_seek(&mut self) {
        self.seeking = false;
    }

    /// Seek bar position in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.current_time / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Set the volume; any explicit change unmutes.
    pub fn set_volume(&mut self, volume: f64) {
        self.volume = if volume.is_finite() {
            volume.clamp(0.0, 1.0)
        } else {
            self.volume
        };
        self.muted = false;
    }

    /// Flip the mute flag, leaving volume alone.
    pub const fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Icon for the mute button.
    #[must_use]
    pub fn volume_icon(&self) -> VolumeIcon {
        if self.muted || self.volume <= 0.0 {
            VolumeIcon::Muted
        } else if self.volume < 0.5 {
            VolumeIcon::Low
        } else {
            VolumeIcon::Normal
        }
    }
}

/// Format seconds as `m:ss`, or `h:mm:ss` from one hour.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let hours = total / 3_600;
    let minutes = (total % 3_600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(audio: Option<&str>) -> Episode {
        Episode {
            id: 7,
            feed_id: 1,
            guid: None,
            title: Some("Ep".into()),
            link: None,
            summary: None,
            description: None,
            audio_url: audio.map(Into::into),
            duration: Some("12:00".into()),
            published: None,
        }
    }

    #[test]
    fn only_audio_episodes_are_playable() {
        assert_eq!(
            PlayableEpisode::try_from(&episode(None)),
            Err(PlayerError::NoAudio(7))
        );
        assert_eq!(
            PlayableEpisode::try_from(&episode(Some("  "))),
            Err(PlayerError::NoAudio(7))
        );
        let playable = PlayableEpisode::try_from(&episode(Some("https://a/x.mp3"))).unwrap();
        assert_eq!(playable.audio_url, "https://a/x.mp3");
    }

    #[test]
    fn open_resets_progress_and_close_clears() {
        let mut state = PlayerState::default();
        state.current_time = 30.0;
        state.playing = true;
        let playable = PlayableEpisode::try_from(&episode(Some("https://a/x.mp3"))).unwrap();
        state.open(playable);
        assert!(state.is_open());
        assert!(!state.playing);
        assert!(state.current_time.abs() < f64::EPSILON);

        state.close();
        assert!(!state.is_open());
    }

    #[test]
    fn opening_waits_for_the_toggle_to_play() {
        let mut state = PlayerState::default();
        state.playing = true;
        assert_eq!(state.toggle_label_key(), "player.pause");

        let playable = PlayableEpisode::try_from(&episode(Some("https://a/x.mp3"))).unwrap();
        state.open(playable);
        assert_eq!(state.toggle_label_key(), "player.play");
    }

    #[test]
    fn time_updates_are_ignored_while_seeking() {
        let mut state = PlayerState::default();
        state.set_duration(200.0);
        state.begin_seek();
        assert!((state.seek_to(0.5) - 100.0).abs() < f64::EPSILON);
        state.sync_time(10.0);
        assert!((state.current_time - 100.0).abs() < f64::EPSILON);
        state.end_seek();
        state.sync_time(101.0);
        assert!((state.progress() - 0.505).abs() < 1e-9);
    }

    #[test]
    fn volume_unmutes_and_drives_icon() {
        let mut state = PlayerState::default();
        assert_eq!(state.volume_icon(), VolumeIcon::Normal);
        assert!(state.toggle_mute());
        assert_eq!(state.volume_icon(), VolumeIcon::Muted);
        state.set_volume(0.3);
        assert!(!state.muted);
        assert_eq!(state.volume_icon(), VolumeIcon::Low);
        state.set_volume(0.0);
        assert_eq!(state.volume_icon(), VolumeIcon::Muted);
        state.set_volume(4.0);
        assert!((state.volume - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn time_formats() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.9), "1:05");
        assert_eq!(format_time(3_725.0), "1:02:05");
        assert_eq!(format_time(f64::NAN), "0:00");
    }

    #[test]
    fn unknown_duration_keeps_progress_at_zero() {
        let mut state = PlayerState::default();
        state.set_duration(f64::INFINITY);
        state.sync_time(12.0);
        assert!(state.progress().abs() < f64::EPSILON);
    }
}
