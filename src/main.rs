use clap::arg;
use clap::command;
use clap::Command;

use rand::prelude::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;

use tracing_subscriber::EnvFilter;

use shah::engine::{Coordinate, Game, LogEntry, MoveOutcome, PieceKind};

const PROMOTION_KINDS: [PieceKind; 4] =
    [PieceKind::Queen, PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight];

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let matches = command!()
        .propagate_version(true)
        .subcommand(Command::new("demo").about("Plays through the scripted fool's mate"))
        .subcommand(
            Command::new("selfplay")
                .about("Lets both sides play random legal moves")
                .arg(
                    arg!(
                    -s --seed <SEED> "Random seed"
                            )
                    .default_value("42")
                    .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(
                    -t --turns <TURNS> "Maximum number of moves"
                            )
                    .default_value("200")
                    .value_parser(clap::value_parser!(usize)),
                )
                .arg(arg!(
                    -q --quiet "Print only the final position and the journal"
                )),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("demo", _)) | None => demo(),
        Some(("selfplay", arg_matches)) => {
            let seed = *arg_matches.get_one::<u64>("seed").unwrap();
            let turns = *arg_matches.get_one::<usize>("turns").unwrap();
            let quiet = arg_matches.get_flag("quiet");
            selfplay(seed, turns, quiet);
        }
        _ => unreachable!("Exhausted list of subcommands"),
    }
}

fn demo() {
    let mut game = Game::new();
    println!("{}", game.board().render_to_string());

    let script = [((5, 1), (5, 2)), ((4, 6), (4, 4)), ((6, 1), (6, 3)), ((3, 7), (7, 3))];
    for ((from_col, from_row), (to_col, to_row)) in script {
        let from = Coordinate::new(from_col, from_row);
        let to = Coordinate::new(to_col, to_row);
        match game.commit_move(from, to, None) {
            MoveOutcome::Committed(_) => println!("{}", game.events().last().unwrap()),
            MoveOutcome::Rejected(error) => println!("{} -> {} rejected: {}", from, to, error),
        }
    }

    println!("{}", game.board().render_to_string());
    print_journal(&game);
}

fn selfplay(seed: u64, max_turns: usize, quiet: bool) {
    let mut rng = Pcg64::seed_from_u64(seed);
    let mut game = Game::new();

    for _ in 0..max_turns {
        if game.is_game_over() {
            break;
        }
        match random_commit(&mut game, &mut rng) {
            Some(entry) => {
                if !quiet {
                    println!("{}", entry);
                }
            }
            None => {
                println!("{} has no move that holds up, stopping", game.active_color());
                break;
            }
        }
    }

    println!("{}", game.board().render_to_string());
    print_journal(&game);
}

/// Shuffles every pseudo-legal candidate of the side to move and commits the
/// first one the rules accept.
fn random_commit(game: &mut Game, rng: &mut Pcg64) -> Option<LogEntry> {
    let mut candidates = Vec::new();
    for piece in game.board().pieces_of(game.active_color()) {
        for destination in game.candidate_moves(&piece) {
            candidates.push((piece.position, destination));
        }
    }
    candidates.shuffle(rng);

    for (from, to) in candidates {
        let promotion = PROMOTION_KINDS[rng.gen_range(0..PROMOTION_KINDS.len())];
        if game.commit_move(from, to, Some(promotion)).is_committed() {
            return game.events().last().copied();
        }
    }
    None
}

#[derive(Tabled)]
struct JournalRow {
    turn: usize,
    event: String,
}

fn print_journal(game: &Game) {
    let rows: Vec<JournalRow> = game
        .events()
        .iter()
        .enumerate()
        .map(|(turn, entry)| JournalRow { turn, event: entry.to_string() })
        .collect();
    println!("{}", Table::new(rows).with(Style::modern()));
}
