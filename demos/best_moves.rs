use anyhow::Result;
use crossplay_solver::{Board, Game, Rack, Ruleset, Solver, TileBag, WordIndex};
use std::env;
use std::time::Instant;

const STATE: &[&str] = &[
    "...............",
    "...............",
    "...............",
    "......t........",
    "......o........",
    "....horse......",
    "......c...f....",
    ".....shelf.....",
    "...........i...",
    "..........pad..",
    "............i..",
    "............c..",
    "...............",
    "...............",
    "...............",
];

fn run() -> Result<()> {
    let mut args = env::args().skip(1);
    let wordfile = args
        .next()
        .unwrap_or_else(|| String::from("wordlists/wordlist-en.txt"));
    let game: Game = args.next().as_deref().unwrap_or("crossplay").parse()?;
    let rack: Rack = args.next().as_deref().unwrap_or("retains").parse()?;

    let now = Instant::now();
    let index = WordIndex::from_file(&wordfile)?;
    eprintln!(
        "{}: {} words, loaded in {:.2} s",
        wordfile,
        index.len(),
        now.elapsed().as_secs_f32()
    );

    let ruleset = Ruleset::new(game);
    let board = Board::from_strings(STATE)?;
    let mut bag = TileBag::standard();
    bag.remove_board_tiles(&board);
    eprintln!("{} tiles left in the bag", bag.len());
    println!("{}\n", board);

    let solver = Solver::new(&index, &ruleset);
    let now = Instant::now();
    let moves = solver.solve(&board, &rack)?;
    eprintln!(
        "{} moves for {} in {} took {:.3} s",
        moves.len(),
        rack,
        game,
        now.elapsed().as_secs_f32()
    );
    for mv in moves.iter().take(20) {
        println!("{}", mv);
    }
    if let Some(best) = moves.first() {
        if let Some(breakdown) = solver.explain(&board, &rack, best)? {
            println!("\n{}: {}", best.word, breakdown);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}
