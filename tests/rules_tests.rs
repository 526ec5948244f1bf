//! Turn-resolution rule tests.
//!
//! Each test drives a session with scripted dice and checks one rule of the
//! game: entering, overshooting, transports, extra turns, and winning.

use snakes_and_ladders::board::{
    BoardTopology, Cell, Position, TransportKind, DEFAULT_LADDERS, DEFAULT_SNAKES,
};
use snakes_and_ladders::core::{DieFace, PlayerId, ScriptedDice};
use snakes_and_ladders::engine::{GameSession, MoveOutcome, TurnPhase};
use snakes_and_ladders::error::GameError;

const NONE: [(u8, u8); 0] = [];

fn face(v: u8) -> DieFace {
    DieFace::new(v).unwrap()
}

fn cell(n: u8) -> Cell {
    Cell::new(n).unwrap()
}

fn pos(n: u8) -> Position {
    Position::try_from(n).unwrap()
}

fn scripted(players: u8, faces: &[u8]) -> GameSession<ScriptedDice> {
    GameSession::new(players, ScriptedDice::new(faces.iter().copied()).unwrap()).unwrap()
}

/// Walk player 1 onto `target` on a bare board by entering and moving.
///
/// Player 1 enters with a six (kept turn), then rolls sixes to get close,
/// then the remainder. Any other players roll a 1 (no entry) in between.
fn walk_to(session: &mut GameSession<ScriptedDice>, target: u8) {
    session.apply_roll(face(6)).unwrap();
    let mut at = 1u8;
    while target - at >= 6 {
        session.apply_roll(face(6)).unwrap();
        at += 6;
    }
    if target > at {
        session.apply_roll(face(target - at)).unwrap();
    }
    // Pass the turn back round to player 1.
    while session.current_player() != PlayerId::FIRST {
        session.apply_roll(face(1)).unwrap();
    }
}

fn bare(players: u8) -> GameSession<ScriptedDice> {
    let dice = ScriptedDice::new([1]).unwrap();
    GameSession::with_topology(players, BoardTopology::empty(), dice).unwrap()
}

/// Default layout minus the 1->38 ladder, so cell 1 is a plain square.
fn standard_without_first_ladder() -> BoardTopology {
    let ladders = DEFAULT_LADDERS.into_iter().filter(|&(bottom, _)| bottom != 1);
    BoardTopology::new(DEFAULT_SNAKES, ladders).unwrap()
}

#[test]
fn test_rolling_six_off_board_enters() {
    let dice = ScriptedDice::new([6]).unwrap();
    let mut session =
        GameSession::with_topology(2, standard_without_first_ladder(), dice).unwrap();

    let result = session.roll_dice().unwrap();

    assert_eq!(result.outcome, MoveOutcome::Entered);
    assert_eq!(result.from, Position::OffBoard);
    assert_eq!(result.to, pos(1));
    assert_eq!(session.phase(), TurnPhase::AwaitingRoll(PlayerId::FIRST));
}

#[test]
fn test_rolling_below_six_off_board_stays_and_passes() {
    for v in 1..=5 {
        let mut session = scripted(2, &[v]);
        let result = session.roll_dice().unwrap();

        assert_eq!(result.outcome, MoveOutcome::NoEntry, "face {v}");
        assert_eq!(session.position(PlayerId::FIRST), Some(Position::OffBoard));
        assert_eq!(session.current_player(), PlayerId::new(2));
        assert_eq!(session.last_roll(), Some(face(v)));
    }
}

#[test]
fn test_overshoot_from_97() {
    let mut session = bare(2);
    walk_to(&mut session, 97);
    assert_eq!(session.position(PlayerId::FIRST), Some(pos(97)));

    let result = session.apply_roll(face(5)).unwrap();

    assert_eq!(result.outcome, MoveOutcome::Overshoot);
    assert_eq!(session.position(PlayerId::FIRST), Some(pos(97)));
    assert_eq!(session.current_player(), PlayerId::new(2));
}

#[test]
fn test_every_overshoot_face_from_high_cells() {
    for start in 95..=99u8 {
        for v in 1..=6u8 {
            if start + v <= 100 {
                continue;
            }
            let mut session = bare(2);
            walk_to(&mut session, start);
            let result = session.apply_roll(face(v)).unwrap();
            assert_eq!(result.to, pos(start), "start {start} face {v}");
            assert_eq!(result.outcome, MoveOutcome::Overshoot);
        }
    }
}

#[test]
fn test_landing_on_17_slides_to_7() {
    assert_eq!(BoardTopology::standard().resolve_chain(cell(17)).cell, cell(7));

    // 1 + 3 = 4 climbs to 14, then 14 + 3 = 17 slides to 7.
    let dice = ScriptedDice::new([6, 3, 1, 3]).unwrap();
    let mut session =
        GameSession::with_topology(2, standard_without_first_ladder(), dice).unwrap();
    session.roll_dice().unwrap();
    let ladder = session.roll_dice().unwrap();
    assert_eq!(ladder.to, pos(14));
    assert_eq!(ladder.transports[0].kind, TransportKind::Ladder);
    session.roll_dice().unwrap(); // player 2 stays off
    let snake = session.roll_dice().unwrap();
    assert_eq!(snake.to, pos(7));
    assert_eq!(snake.snakes_taken(), 1);
}

#[test]
fn test_landing_on_1_climbs_to_38() {
    let board = BoardTopology::standard();
    assert_eq!(board.resolve_chain(cell(1)).cell, cell(38));

    let mut session = scripted(2, &[6]);
    let result = session.roll_dice().unwrap();
    assert_eq!(result.to, pos(38));
    assert_eq!(result.ladders_taken(), 1);
    assert!(result.used_transport());
}

#[test]
fn test_six_keeps_turn_other_faces_pass() {
    for players in 2..=4u8 {
        for v in 1..=6u8 {
            let mut session = bare(players);
            walk_to(&mut session, 10);
            session.apply_roll(face(v)).unwrap();

            let expected = if v == 6 {
                PlayerId::FIRST
            } else {
                PlayerId::new(2)
            };
            assert_eq!(
                session.phase(),
                TurnPhase::AwaitingRoll(expected),
                "{players} players, face {v}"
            );
        }
    }
}

#[test]
fn test_last_player_passes_back_to_first() {
    let mut session = scripted(3, &[2, 2, 2]);
    for _ in 0..3 {
        session.roll_dice().unwrap();
    }
    assert_eq!(session.current_player(), PlayerId::FIRST);
}

#[test]
fn test_six_after_snake_still_keeps_turn() {
    // 11 + 6 = 17 -> snake to 7; the raw face was a six.
    let board = BoardTopology::new([(17, 7)], NONE).unwrap();
    let dice = ScriptedDice::new([1]).unwrap();
    let mut session = GameSession::with_topology(2, board, dice).unwrap();
    walk_to(&mut session, 11);

    let result = session.apply_roll(face(6)).unwrap();

    assert_eq!(result.to, pos(7));
    assert!(result.extra_turn);
    assert_eq!(session.current_player(), PlayerId::FIRST);
}

#[test]
fn test_exact_landing_on_100_wins_and_locks() {
    let mut session = bare(2);
    walk_to(&mut session, 96);

    let result = session.apply_roll(face(4)).unwrap();

    assert!(result.is_win());
    assert_eq!(session.winner(), Some(PlayerId::FIRST));
    assert!(session.is_over());
    assert_eq!(
        session.roll_dice().unwrap_err(),
        GameError::InvalidStateTransition {
            phase: TurnPhase::GameOver(PlayerId::FIRST)
        }
    );
    assert!(session.apply_roll(face(1)).is_err());
}

#[test]
fn test_ladder_to_100_wins() {
    let dice = ScriptedDice::new([1]).unwrap();
    let board = BoardTopology::new(NONE, [(90, 100)]).unwrap();
    let mut session = GameSession::with_topology(2, board, dice).unwrap();
    walk_to(&mut session, 88);

    let result = session.apply_roll(face(2)).unwrap();

    assert_eq!(result.outcome, MoveOutcome::Won);
    assert_eq!(result.to, pos(100));
    assert_eq!(session.phase(), TurnPhase::GameOver(PlayerId::FIRST));
}

#[test]
fn test_standard_ladder_to_99_then_one_wins() {
    assert_eq!(BoardTopology::standard().resolve_chain(cell(80)).cell, cell(99));

    let dice = ScriptedDice::new([1]).unwrap();
    let board = BoardTopology::new(NONE, [(80, 99)]).unwrap();
    let mut session = GameSession::with_topology(2, board, dice).unwrap();
    walk_to(&mut session, 76);
    let climb = session.apply_roll(face(4)).unwrap();
    assert_eq!(climb.to, pos(99));
    session.apply_roll(face(1)).unwrap(); // player 2
    let win = session.apply_roll(face(1)).unwrap();
    assert!(win.is_win());
}

/// 2 players: player 1 enters with a six onto cell 1, rolls 4 to reach 5,
/// player 2 fails to enter, then player 1 rolls 4 to land on 9 and climbs
/// to 31. The turn then passes to player 2.
#[test]
fn test_end_to_end_scenario() {
    let dice = ScriptedDice::new([6, 4, 2, 4]).unwrap();
    let mut session =
        GameSession::with_topology(2, standard_without_first_ladder(), dice).unwrap();

    let entry = session.roll_dice().unwrap();
    assert_eq!(entry.to, pos(1));
    assert_eq!(session.current_player(), PlayerId::FIRST);

    let step = session.roll_dice().unwrap();
    assert_eq!(step.to, pos(5));
    assert_eq!(session.current_player(), PlayerId::new(2));

    let p2 = session.roll_dice().unwrap();
    assert_eq!(p2.outcome, MoveOutcome::NoEntry);
    assert_eq!(session.current_player(), PlayerId::FIRST);

    let climb = session.roll_dice().unwrap();
    assert_eq!(climb.from, pos(5));
    assert_eq!(climb.to, pos(31));
    assert_eq!(climb.transports.len(), 1);
    assert_eq!(climb.transports[0].from, cell(9));
    assert_eq!(climb.transports[0].kind, TransportKind::Ladder);
    assert_eq!(session.phase(), TurnPhase::AwaitingRoll(PlayerId::new(2)));
}

/// The same opening on the standard board: cell 1 is a ladder, so the
/// entering six lands on 38.
#[test]
fn test_end_to_end_scenario_standard_board() {
    let mut session = scripted(2, &[6, 4, 2, 4]);

    assert_eq!(session.roll_dice().unwrap().to, pos(38));
    assert_eq!(session.roll_dice().unwrap().to, pos(42));
    assert_eq!(session.roll_dice().unwrap().outcome, MoveOutcome::NoEntry);
    assert_eq!(session.roll_dice().unwrap().to, pos(46));
    assert_eq!(session.current_player(), PlayerId::new(2));
}
