use std::{io, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use cli_presenter::CliPresenter;
use codenames_core::{run_game, words, Game};
use log::info;

mod cli_presenter;

/// Hot-seat Codenames in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// File with one candidate codename per line (at least 25 distinct words)
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Seed for dealing the board; the same words and seed give the same board
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let pool = match &args.words {
        Some(path) => words::read_word_file(path)
            .with_context(|| format!("could not read word list {}", path.display()))?,
        None => words::default_words(),
    };
    let game = match args.seed {
        Some(seed) => Game::with_seed(&pool, seed),
        None => Game::new(&pool),
    }
    .context("could not deal the board")?;
    info!("dealt a board from {} words", pool.len());

    let stdin = io::stdin();
    match run_game(game, CliPresenter::new(stdin.lock())) {
        Some(winner) => println!("{} team wins. Thanks for playing!", winner),
        None => println!("Game abandoned."),
    }
    Ok(())
}
