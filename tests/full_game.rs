use rand::prelude::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use shah::engine::{is_in_check, Color, Coordinate, Game, LogEntry, MoveOutcome, PieceKind};

fn assert_well_formed(game: &Game) {
    let pieces = game.board().pieces();
    for (i, a) in pieces.iter().enumerate() {
        assert!(a.position.in_bounds(), "{:?} left the board", a);
        for b in &pieces[i + 1..] {
            assert_ne!(a.position, b.position, "{:?} and {:?} share a square", a, b);
        }
    }
    assert!(game.board().find_king(Color::White).is_some());
    assert!(game.board().find_king(Color::Black).is_some());
}

#[test]
fn a_full_fools_mate_through_the_public_api() {
    let mut game = Game::new();

    let quiet_moves = [((5, 1), (5, 2)), ((4, 6), (4, 4)), ((6, 1), (6, 3))];
    for ((from_col, from_row), (to_col, to_row)) in quiet_moves {
        let from = Coordinate::new(from_col, from_row);
        let to = Coordinate::new(to_col, to_row);
        let outcome = game.commit_move(from, to, None);
        assert!(matches!(outcome, MoveOutcome::Committed(report) if report.check.is_none()));
    }

    let outcome = game.commit_move(Coordinate::new(3, 7), Coordinate::new(7, 3), None);
    match outcome {
        MoveOutcome::Committed(report) => {
            assert_eq!(report.check, Some(Color::White));
            assert_eq!(report.checkmate, Some(Color::White));
        }
        rejected => panic!("unexpected {:?}", rejected),
    }

    assert!(game.is_game_over());
    assert_eq!(game.active_color(), Color::Black);
    assert_eq!(game.events().len(), 5);
    assert!(game.transcript().ends_with("Black queen d8 -> h4 checkmate!"));
}

#[test]
fn selection_and_candidates_drive_the_highlighting() {
    let game = Game::new();
    let knight = game.select(Coordinate::new(1, 0)).expect("b1 holds a white knight");
    let mut squares: Vec<String> = game.candidate_moves(&knight).iter().map(|c| c.to_string()).collect();
    squares.sort();
    assert_eq!(squares, vec!["a3", "c3"]);
}

#[test]
fn random_playouts_preserve_the_board_invariants() {
    for seed in 0..8u64 {
        let mut rng = Pcg64::seed_from_u64(seed);
        let mut game = Game::new();
        let mut committed = 0usize;

        for _ in 0..120 {
            if game.is_game_over() {
                break;
            }
            let mover = game.active_color();
            let mut candidates = Vec::new();
            for piece in game.board().pieces_of(mover) {
                for destination in game.candidate_moves(&piece) {
                    candidates.push((piece.position, destination));
                }
            }
            candidates.shuffle(&mut rng);

            let mut moved = false;
            for (from, to) in candidates {
                let promotion = [PieceKind::Queen, PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight]
                    [rng.gen_range(0..4)];
                if game.commit_move(from, to, Some(promotion)).is_committed() {
                    moved = true;
                    break;
                }
            }
            if !moved {
                break;
            }
            committed += 1;

            assert!(
                !is_in_check(mover, game.board()),
                "a committed move left {} in check (seed {})",
                mover,
                seed
            );
            assert_well_formed(&game);
            assert!(game.board().pieces().len() <= 32);
            if !game.is_game_over() {
                assert_eq!(game.active_color(), mover.opposite());
            }
        }

        assert_eq!(game.events().len(), committed + 1, "one journal line per committed move");
    }
}

#[test]
fn reset_discards_a_finished_playout() {
    let mut game = Game::new();
    assert!(game.commit_move(Coordinate::new(4, 1), Coordinate::new(4, 3), None).is_committed());
    game.reset();
    assert_eq!(game.events(), &[LogEntry::NewGame]);
    assert_eq!(game.board().pieces().len(), 32);
    assert_eq!(game.active_color(), Color::White);
}
