use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

#[test]
fn test_initial_paint_shows_file() {
    let harness = EditorTestHarness::with_content(40, 10, "first\nsecond\n\nfourth\n").unwrap();

    assert_eq!(harness.screen_row(0), "first");
    assert_eq!(harness.screen_row(1), "second");
    assert_eq!(harness.screen_row(2), "");
    assert_eq!(harness.screen_row(3), "fourth");
    harness.assert_screen_matches_buffer();
    harness.assert_caret_matches_cursor();
}

#[test]
fn test_backspace_leaves_no_stale_glyphs() {
    let mut harness = EditorTestHarness::with_content(40, 10, "abcdef").unwrap();
    harness
        .send_key_repeat(KeyCode::Right, KeyModifiers::NONE, 6)
        .unwrap();
    harness
        .send_key_repeat(KeyCode::Backspace, KeyModifiers::NONE, 4)
        .unwrap();

    assert_eq!(harness.screen_row(0), "ab");
    harness.assert_screen_matches_buffer();
    harness.assert_caret_matches_cursor();
}

#[test]
fn test_merge_blanks_vacated_last_row() {
    let mut harness = EditorTestHarness::with_content(40, 10, "one\ntwo\nthree\n").unwrap();
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    harness
        .send_key(KeyCode::Backspace, KeyModifiers::NONE)
        .unwrap();

    assert_eq!(harness.screen_row(0), "onetwo");
    assert_eq!(harness.screen_row(1), "three");
    assert_eq!(harness.screen_row(2), "");
    harness.assert_screen_matches_buffer();
    harness.assert_caret_matches_cursor();
}

#[test]
fn test_split_shifts_following_rows_down() {
    let mut harness = EditorTestHarness::with_content(40, 10, "abcd\nnext\n").unwrap();
    harness
        .send_key_repeat(KeyCode::Right, KeyModifiers::NONE, 2)
        .unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();

    assert_eq!(harness.screen_row(0), "ab");
    assert_eq!(harness.screen_row(1), "cd");
    assert_eq!(harness.screen_row(2), "next");
    harness.assert_screen_matches_buffer();
    harness.assert_caret_matches_cursor();
}

#[test]
fn test_long_lines_are_cut_at_screen_edge() {
    let mut harness = EditorTestHarness::new(10, 4).unwrap();
    harness.type_text("0123456789abcdef").unwrap();

    assert_eq!(harness.screen_row(0), "0123456789");
    assert_eq!(harness.screen_row(1), "");
    // Caret is pinned to the last column
    assert_eq!(harness.screen_cursor_position(), (0, 9));
    harness.assert_screen_matches_buffer();
}

#[test]
fn test_rows_below_screen_are_not_drawn() {
    let mut harness = EditorTestHarness::new(20, 3).unwrap();
    harness.type_text("a\nb\nc\nd\ne").unwrap();

    harness.assert_buffer_content("a\nb\nc\nd\ne");
    assert_eq!(harness.screen_row(0), "a");
    assert_eq!(harness.screen_row(1), "b");
    assert_eq!(harness.screen_row(2), "c");
    assert_eq!(harness.screen_cursor_position(), (2, 1));
}

#[test]
fn test_screen_tracks_buffer_through_mixed_edits() {
    let mut harness = EditorTestHarness::new(30, 8).unwrap();
    harness.type_text("The quick\nbrown fox").unwrap();
    harness.send_key(KeyCode::Up, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Tab, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    harness
        .send_key_repeat(KeyCode::Left, KeyModifiers::NONE, 20)
        .unwrap();
    harness
        .send_key(KeyCode::Backspace, KeyModifiers::NONE)
        .unwrap();
    harness.type_text("!\n").unwrap();

    harness.assert_screen_matches_buffer();
    harness.assert_caret_matches_cursor();
}

#[test]
fn test_control_bytes_in_file_cannot_drive_the_terminal() {
    // ESC [2J would clear the screen and ESC [5;1H would jump to row 5
    let harness = EditorTestHarness::with_content(40, 5, "top\n\x1b[2J\x1b[5;1Hx\n").unwrap();

    assert_eq!(harness.screen_row(0), "top");
    assert_eq!(harness.screen_row(1), "?[2J?[5;1Hx");
    assert_eq!(harness.screen_row(4), "");
    harness.assert_screen_matches_buffer();
    harness.assert_caret_matches_cursor();
}
