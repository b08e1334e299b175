use super::file_icon;

#[test]
fn audio_files_get_the_music_icon() {
    assert_eq!(file_icon("audio/mpeg"), "\u{1f3b5}");
    assert_eq!(file_icon("audio/wav"), "\u{1f3b5}");
}

#[test]
fn everything_else_gets_the_page_icon() {
    assert_eq!(file_icon("application/pdf"), "\u{1f4c4}");
    assert_eq!(file_icon("video/mp4"), "\u{1f4c4}");
    assert_eq!(file_icon(""), "\u{1f4c4}");
}
