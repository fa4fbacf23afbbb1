//! Pawnstorm - command-line driver
//!
//! Loads two deck files, wires up an actor per side (human or one of the
//! built-in strategies), and runs the game loop against the engine.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use pawnstorm::{
    core::PlayerColor,
    game::{
        GameEngine, GameLoop, InteractiveActor, PlayerActor, StrategyActor, VerbosityLevel,
    },
    loader::DeckLoader,
    strategy::{FillFirst, MaximizeRowScore, MinimizeOpponentScore, MoveStrategy},
};
use std::path::PathBuf;

/// Actor type for each side
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ActorType {
    /// Human play via stdin
    Human,
    /// First legal move (hand, then row, then column order)
    FillFirst,
    /// Try to win the first losing row
    MaxRow,
    /// Leave the opponent the lowest row score
    MinOpponent,
}

/// Verbosity level for game output (names or numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

#[derive(Parser)]
#[command(name = "pawnstorm")]
#[command(about = "Pawnstorm - card-and-pawns board game", long_about = None)]
struct Cli {
    /// Board rows
    rows: usize,

    /// Board columns (odd, >= 3)
    cols: usize,

    /// Deck file for Red
    red_deck: PathBuf,

    /// Deck file for Blue
    blue_deck: PathBuf,

    /// Red actor type
    #[arg(long, value_enum, default_value = "fill-first")]
    red: ActorType,

    /// Blue actor type
    #[arg(long, value_enum, default_value = "fill-first")]
    blue: ActorType,

    /// Starting hand size for both players
    #[arg(long, default_value_t = 5)]
    hand_size: usize,

    /// Safety limit on total actions before aborting
    #[arg(long, default_value_t = 10_000)]
    max_actions: u32,

    /// Verbosity level for game output (0=silent, 1=minimal, 2=normal, 3=verbose)
    #[arg(long, short = 'v', default_value = "normal")]
    verbosity: VerbosityArg,

    /// Print the final result as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn make_actor(kind: ActorType, color: PlayerColor) -> Box<dyn PlayerActor> {
    match kind {
        ActorType::Human => Box::new(InteractiveActor::new(color)),
        ActorType::FillFirst => strategy_actor(color, FillFirst),
        ActorType::MaxRow => strategy_actor(color, MaximizeRowScore),
        ActorType::MinOpponent => strategy_actor(color, MinimizeOpponentScore),
    }
}

fn strategy_actor(
    color: PlayerColor,
    strategy: impl MoveStrategy + 'static,
) -> Box<dyn PlayerActor> {
    Box::new(StrategyActor::new(color, Box::new(strategy)))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let red_deck = DeckLoader::load_from_file(&cli.red_deck)
        .with_context(|| format!("loading red deck {}", cli.red_deck.display()))?;
    let blue_deck = DeckLoader::load_from_file(&cli.blue_deck)
        .with_context(|| format!("loading blue deck {}", cli.blue_deck.display()))?;

    let mut engine = GameEngine::new(cli.rows, cli.cols, red_deck, blue_deck, cli.hand_size)
        .context("setting up the game")?;

    let mut red = make_actor(cli.red, PlayerColor::Red);
    let mut blue = make_actor(cli.blue, PlayerColor::Blue);

    let result = GameLoop::new(&mut engine)
        .with_verbosity(cli.verbosity.0)
        .with_max_actions(cli.max_actions)
        .run(red.as_mut(), blue.as_mut());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }
    Ok(())
}
