use anyhow::Result;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordboard::{Axis, Board, Move, Offset, Position, TileSet, Wordlist};

const STATE: &[&str] = &[
    "...............",
    "...............",
    ".........r.....",
    ".........e.....",
    ".........s.....",
    ".........u.....",
    ".........m.....",
    ".....archers...",
    ".....r.a.s.....",
    ".....i.r.......",
    "....deadEr.....",
    "...............",
    "...............",
    "...............",
    "...............",
];

const WORDS: &[&str] = &[
    "archers", "resumes", "arie", "card", "deader", "carder", "ras", "sa", "deaders", "dog",
];

/// Place `word` starting at `start` along `axis`, skipping squares that hold a tile.
fn spell(board: &Board, tileset: &TileSet, word: &str, start: Offset, axis: Axis) -> Result<Move> {
    let mut placements = Vec::new();
    let p = Position::from_offset(axis, start);
    for (i, ch) in word.chars().enumerate() {
        let offset = Position { iterable: p.iterable + i, ..p }.offset();
        if !board.is_occupied(offset) {
            if let Some(tile) = tileset.tile(ch)? {
                placements.push((offset, tile));
            }
        }
    }
    Ok(Move::from_placements(placements))
}

fn run() -> Result<()> {
    let wordlist = match std::env::args().nth(1) {
        Some(wordfile) => Wordlist::from_file(&wordfile)?,
        None => Wordlist::from_words(WORDS),
    };
    eprintln!("{}", wordlist);
    let mut board = Board::default().with_state_from_strings(STATE)?;
    let tileset = board.tileset().clone();

    let tries = [
        ("carder", Offset::new(7, 7), Axis::Vertical),
        ("deaders", Offset::new(4, 10), Axis::Horizontal),
        ("dog", Offset::new(0, 0), Axis::Horizontal),
        ("ras", Offset::new(10, 7), Axis::Vertical),
    ];
    for (word, start, axis) in tries.iter() {
        let mut mv = spell(&board, &tileset, word, *start, *axis)?;
        match board.play(&mut mv, &wordlist) {
            Ok(play) => {
                let words: Vec<String> = play.words().iter().map(|w| w.text()).collect();
                println!("{:-8} {:3} {}", play.main().text(), play.score(), words.join(" "));
            }
            Err(err) => println!("{:-8} rejected: {}", word.to_uppercase(), err),
        }
    }
    println!("{}", board);

    let now = Instant::now();
    let regions = board.playable_regions(3);
    let dt = now.elapsed().as_secs_f32();
    eprintln!("{} regions in {:.3} ms", regions.len(), dt * 1000.0);
    for region in regions.iter().take(20) {
        println!("{}", region);
    }
    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordboard=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}
