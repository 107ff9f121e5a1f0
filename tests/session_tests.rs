//! Session flow tests through the public facade: the selection state
//! machine, swap commit/revert, pause, and reset.

use match_three::core::{BoardConfig, Grid, Phase, SelectError, Session};
use match_three::types::TokenKind::*;
use match_three::types::{TokenId, TokenKind};

fn session_over(rows: &[Vec<TokenKind>]) -> Session {
    let grid = Grid::from_rows(rows);
    let config = BoardConfig {
        width: grid.width(),
        height: grid.height(),
        kinds: TokenKind::ALL.to_vec(),
        seed: 9,
    };
    Session::from_grid(grid, config).unwrap()
}

#[test]
fn full_select_swap_commit_flow() {
    // Swapping ids 2 and 3 completes a vertical Ruby run in column 0.
    let mut session = session_over(&[
        vec![Ruby, Emerald],
        vec![Amber, Ruby],
        vec![Ruby, Sapphire],
    ]);

    let snap = session.select(TokenId(2)).unwrap();
    assert_eq!(snap.phase, Phase::Selected(TokenId(2)));

    let snap = session.select(TokenId(3)).unwrap();
    assert_eq!(snap.phase, Phase::Idle);
    assert!(snap.score >= 30);
    assert!(!snap.last_removed.is_empty());
    assert!(snap.covers(2, 3));
}

#[test]
fn revert_leaves_no_trace() {
    let mut session = session_over(&[vec![Ruby, Amber], vec![Emerald, Sapphire]]);
    let before = session.snapshot();

    session.select(TokenId(0)).unwrap();
    let after = session.select(TokenId(2)).unwrap();

    assert_eq!(after.phase, Phase::Idle);
    assert_eq!(after.score, 0);
    assert_eq!(after.board, before.board);
    assert!(after.last_removed.is_empty());
}

#[test]
fn selection_never_survives_a_swap_attempt() {
    // Committed or reverted, a swap attempt always lands back in Idle.
    let mut session = session_over(&[vec![Ruby, Amber], vec![Emerald, Sapphire]]);
    session.select(TokenId(0)).unwrap();
    let snap = session.select(TokenId(1)).unwrap();
    assert_eq!(snap.phase, Phase::Idle);
}

#[test]
fn errors_do_not_disturb_the_machine() {
    let mut session = session_over(&[vec![Ruby, Amber], vec![Emerald, Sapphire]]);
    session.select(TokenId(0)).unwrap();

    let err = session.select(TokenId(50)).unwrap_err();
    assert_eq!(err, SelectError::UnknownToken(TokenId(50)));
    // The existing selection is untouched.
    assert_eq!(session.phase(), Phase::Selected(TokenId(0)));
}

#[test]
fn paused_session_ignores_selection_and_resumes_cleanly() {
    let mut session = session_over(&[vec![Ruby, Amber], vec![Emerald, Sapphire]]);

    session.set_paused(true);
    let snap = session.select(TokenId(0)).unwrap();
    assert_eq!(snap.phase, Phase::Idle);

    session.set_paused(false);
    let snap = session.select(TokenId(0)).unwrap();
    assert_eq!(snap.phase, Phase::Selected(TokenId(0)));
}

#[test]
fn reset_regenerates_but_keeps_pause() {
    let mut session = Session::new(BoardConfig::default()).unwrap();
    session.set_paused(true);
    let snap = session.reset();

    assert!(session.paused());
    assert_eq!(snap.score, 0);
    assert_eq!(snap.phase, Phase::Idle);
    assert!(snap.covers(8, 8));
}

#[test]
fn every_adjacent_swap_preserves_the_invariants() {
    // Sweep all adjacent pairs of a seeded board. Whatever each swap does
    // (commit or revert), the session must land in Idle on a full,
    // match-free board with a score that is a multiple of 10; and a zero
    // score must mean the board is exactly as it was.
    use match_three::core::find_matches;

    let base = Session::new(BoardConfig {
        seed: 13,
        ..BoardConfig::default()
    })
    .unwrap();
    let before = base.snapshot();

    for t in &before.board {
        for (dc, dr) in [(1i16, 0i16), (0, 1)] {
            let nc = t.col as i16 + dc;
            let nr = t.row as i16 + dr;
            let Some(other) = before
                .board
                .iter()
                .find(|o| o.col as i16 == nc && o.row as i16 == nr)
            else {
                continue;
            };

            let mut session = base.clone();
            session.select(t.id).unwrap();
            let snap = session.select(other.id).unwrap();

            assert_eq!(snap.phase, Phase::Idle);
            assert!(snap.covers(8, 8));
            assert_eq!(snap.score % 10, 0);
            assert!(find_matches(session.grid()).is_empty());
            if snap.score == 0 {
                assert_eq!(snap.board, before.board);
            } else {
                assert!(!snap.last_removed.is_empty());
            }
        }
    }
}
