use super::*;

fn audio_id(s: &str) -> ItemId {
    ItemId::Committed(s.to_owned())
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_loads_and_plays_a_new_track() {
    let mut p = PlayerState::default();
    p.toggle(&audio_id("a"), "song.mp3", "https://cdn.example/a");
    assert!(p.playing);
    assert!(p.is_playing(&audio_id("a")));
    assert_eq!(p.track.as_ref().map(|t| t.name.as_str()), Some("song.mp3"));
    assert_eq!(p.progress_s, 0.0);
    assert!(p.duration_s.is_none());
}

#[test]
fn toggle_same_track_pauses_then_resumes() {
    let mut p = PlayerState::default();
    p.toggle(&audio_id("a"), "song.mp3", "url");
    p.toggle(&audio_id("a"), "song.mp3", "url");
    assert!(!p.playing);
    assert!(p.track.is_some());
    p.toggle(&audio_id("a"), "song.mp3", "url");
    assert!(p.playing);
}

#[test]
fn toggle_other_track_switches_from_the_start() {
    let mut p = PlayerState::default();
    p.toggle(&audio_id("a"), "a.mp3", "url-a");
    p.progress_s = 42.0;
    p.duration_s = Some(100.0);
    p.toggle(&audio_id("b"), "b.mp3", "url-b");
    assert!(p.is_playing(&audio_id("b")));
    assert!(!p.is_playing(&audio_id("a")));
    assert_eq!(p.progress_s, 0.0);
    assert!(p.duration_s.is_none());
}

#[test]
fn stop_unloads_the_track() {
    let mut p = PlayerState::default();
    p.toggle(&audio_id("a"), "a.mp3", "url");
    p.stop();
    assert!(p.track.is_none());
    assert!(!p.playing);
    assert!(!p.is_playing(&audio_id("a")));
}

// =============================================================
// Seek math
// =============================================================

#[test]
fn fraction_is_zero_without_duration() {
    let p = PlayerState { progress_s: 10.0, ..PlayerState::default() };
    assert_eq!(p.fraction(), 0.0);
}

#[test]
fn fraction_and_seek_round_trip() {
    let p = PlayerState { progress_s: 30.0, duration_s: Some(120.0), ..PlayerState::default() };
    assert!((p.fraction() - 0.25).abs() < 1e-12);
    assert_eq!(p.seek_target(0.5), Some(60.0));
    assert_eq!(p.seek_target(2.0), Some(120.0));
}

#[test]
fn seek_without_duration_is_none() {
    assert!(PlayerState::default().seek_target(0.5).is_none());
}

// =============================================================
// Mute
// =============================================================

#[test]
fn mute_toggles_between_silent_and_full_volume() {
    let mut p = PlayerState::default();
    assert!(!p.is_muted());
    p.toggle_mute();
    assert!(p.is_muted());
    assert_eq!(p.volume, Some(0.0));
    p.toggle_mute();
    assert!(!p.is_muted());
    assert_eq!(p.volume, Some(1.0));
}

#[test]
fn mute_from_a_lowered_volume_silences() {
    let mut p = PlayerState { volume: Some(0.4), ..PlayerState::default() };
    p.toggle_mute();
    assert_eq!(p.volume, Some(0.0));
}

// =============================================================
// Time formatting
// =============================================================

#[test]
fn format_time_renders_minutes_and_padded_seconds() {
    assert_eq!(format_time(0.0), "0:00");
    assert_eq!(format_time(7.9), "0:07");
    assert_eq!(format_time(65.0), "1:05");
    assert_eq!(format_time(600.0), "10:00");
}

#[test]
fn format_time_handles_nan_and_negative() {
    assert_eq!(format_time(f64::NAN), "--:--");
    assert_eq!(format_time(f64::INFINITY), "--:--");
    assert_eq!(format_time(-3.0), "--:--");
}
