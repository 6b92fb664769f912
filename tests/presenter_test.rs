//! Tests for console report lines over verified boards.

use serde_json::json;
use strictly_verdict::{report_lines, write_report};
use strictly_verifier::verify;

#[test]
fn test_n_1_x_wins() {
    assert_eq!(report_lines(&verify(&json!([["X"]]))), vec!["X wins!"]);
}

#[test]
fn test_o_wins() {
    let board = json!([["O", "X", "X"], ["O", "X", "X"], ["O", "O", "-"]]);
    assert_eq!(report_lines(&verify(&board)), vec!["O wins!"]);
}

#[test]
fn test_draw() {
    let board = json!([["X", "O", "X"], ["O", "X", "X"], ["O", "X", "O"]]);
    assert_eq!(report_lines(&verify(&board)), vec!["Game ended in a DRAW."]);
}

#[test]
fn test_ongoing() {
    let board = json!([["X", "-"], ["O", "-"]]);
    assert_eq!(report_lines(&verify(&board)), vec!["Game is ONGOING."]);
}

#[test]
fn test_not_square_is_illegal() {
    let board = json!([["X", "O", "X"], ["O", "X"], ["O", "X", "X"]]);
    assert_eq!(
        report_lines(&verify(&board)),
        vec![
            "Board is ILLEGAL.",
            "Cause: Board is not a square or contains illegal values."
        ]
    );
}

#[test]
fn test_both_players_win_is_invalid() {
    let board = json!([["X", "X", "X"], ["O", "O", "O"], ["X", "O", "X"]]);
    assert_eq!(
        report_lines(&verify(&board)),
        vec!["Board is INVALID.", "Cause: Both players cannot win."]
    );
}

#[test]
fn test_too_many_x_is_invalid() {
    let board = json!([["X", "X", "X"], ["O", "O", "X"], ["-", "-", "-"]]);
    assert_eq!(
        report_lines(&verify(&board)),
        vec!["Board is INVALID.", "Cause: Invalid number of moves."]
    );
}

#[test]
fn test_invalid_x_win_reports_cause_not_winner() {
    let board = json!([["X", "X", "X"], ["O", "O", "-"], ["O", "-", "-"]]);
    assert_eq!(
        report_lines(&verify(&board)),
        vec![
            "Board is INVALID.",
            "Cause: X must have one more move than O if X wins."
        ]
    );
}

#[test]
fn test_invalid_draw_on_even_board() {
    let board = json!([
        ["X", "X", "X", "O"],
        ["O", "O", "X", "O"],
        ["X", "O", "X", "O"],
        ["O", "X", "O", "X"]
    ]);
    assert_eq!(
        report_lines(&verify(&board)),
        vec![
            "Board is INVALID.",
            "Cause: Drawn game must have X with one more move than O."
        ]
    );
}

#[test]
fn test_write_report_ends_each_line() {
    let mut out = Vec::new();
    write_report(&verify(&json!("not a board")), &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Board is ILLEGAL.\nCause: Board is not a square or contains illegal values.\n"
    );
}
