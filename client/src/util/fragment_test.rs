use super::{format, parse};

#[test]
fn parses_both_keys() {
    assert_eq!(parse("x=120&y=-45"), Some((120.0, -45.0)));
    assert_eq!(parse("#x=0&y=0"), Some((0.0, 0.0)));
}

#[test]
fn key_order_does_not_matter() {
    assert_eq!(parse("y=7&x=3"), Some((3.0, 7.0)));
}

#[test]
fn unknown_keys_are_ignored() {
    assert_eq!(parse("x=1&zoom=2&y=3"), Some((1.0, 3.0)));
}

#[test]
fn incomplete_or_malformed_fragments_are_rejected() {
    assert_eq!(parse(""), None);
    assert_eq!(parse("x=1"), None);
    assert_eq!(parse("x=abc&y=2"), None);
    assert_eq!(parse("garbage"), None);
}

#[test]
fn format_rounds_to_whole_pixels() {
    assert_eq!(format(120.6, -45.4), "x=121&y=-45");
    assert_eq!(format(0.0, 0.0), "x=0&y=0");
}

#[test]
fn format_parse_round_trip() {
    let (x, y) = parse(&format(33.0, -7.0)).unwrap();
    assert_eq!((x, y), (33.0, -7.0));
}
