use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use triadcore::rng::{STREAM_DEAL, STREAM_OPPONENT_AI, STREAM_SELF_AI};
use triadcore::{
    build_strategy, load_cards_from_json, rng_for_match, Card, GameError, GameState, MatchConfig,
    Outcome, Player, Rule, StrategyKind,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyOpt {
    Random,
    Tactical,
}

impl From<StrategyOpt> for StrategyKind {
    fn from(s: StrategyOpt) -> Self {
        match s {
            StrategyOpt::Random => StrategyKind::Random,
            StrategyOpt::Tactical => StrategyKind::Tactical,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "simulate", about = "Play computer-vs-computer matches and report the results")]
struct Args {
    /// Match configuration TOML; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Cards JSON path (defaults to the config value, data/cards.json)
    #[arg(long)]
    cards: Option<PathBuf>,

    /// Number of matches to play
    #[arg(long, default_value_t = 100)]
    games: u64,

    /// Base seed; each match derives its own streams from it
    #[arg(long)]
    seed: Option<u64>,

    /// Rule toggles as comma-separated list: open,random,elemental,sudden_death,same,plus,combo (or 'none')
    #[arg(long)]
    rules: Option<String>,

    /// Strategy playing for SELF
    #[arg(long, value_enum)]
    own: Option<StrategyOpt>,

    /// Strategy playing for OPPONENT
    #[arg(long, value_enum)]
    opponent: Option<StrategyOpt>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Show a progress bar on stderr
    #[arg(long)]
    progress: bool,
}

#[derive(Debug, Default, Serialize)]
struct Summary {
    games: u64,
    seed: u64,
    self_wins: u64,
    opponent_wins: u64,
    draws: u64,
}

fn play_one(cfg: &MatchConfig, deck: &[Card], seed: u64, game_id: u64) -> Result<Outcome, GameError> {
    let mut deal_rng = rng_for_match(seed, game_id, STREAM_DEAL);
    let mut state = GameState::deal(cfg.rule, deck, cfg.hand_size, &mut deal_rng)?;
    let mut own = build_strategy(
        cfg.own,
        Player::Myself,
        rng_for_match(seed, game_id, STREAM_SELF_AI),
    );
    let mut opponent = build_strategy(
        cfg.opponent,
        Player::Opponent,
        rng_for_match(seed, game_id, STREAM_OPPONENT_AI),
    );
    state.play_out(own.as_mut(), opponent.as_mut())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut cfg = match &args.config {
        Some(path) => MatchConfig::load(path).map_err(|e| format!("Config error: {e}"))?,
        None => MatchConfig::default(),
    };
    if let Some(cards) = args.cards {
        cfg.cards = cards;
    }
    if let Some(rules) = &args.rules {
        cfg.rule = Rule::from_toggles(rules);
    }
    if let Some(own) = args.own {
        cfg.own = own.into();
    }
    if let Some(opponent) = args.opponent {
        cfg.opponent = opponent.into();
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    cfg.validate().map_err(|e| format!("Config error: {e}"))?;

    let cards = load_cards_from_json(&cfg.cards).map_err(|e| format!("Cards load error: {e}"))?;
    let deck = cards.deck();
    let seed = cfg.seed.unwrap_or_else(rand::random);
    log::info!(
        "[simulate] {} games, {} cards, seed {seed}, {:?} vs {:?}",
        args.games,
        deck.len(),
        cfg.own,
        cfg.opponent
    );

    let pb = if args.progress {
        let pb = ProgressBar::new(args.games);
        pb.set_style(
            ProgressStyle::with_template("[simulate] {bar:40} {pos}/{len} ({eta})")?,
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcomes = (0..args.games)
        .into_par_iter()
        .map(|game_id| {
            let r = play_one(&cfg, &deck, seed, game_id);
            pb.inc(1);
            r
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("Match error: {e}"))?;
    pb.finish_and_clear();

    let mut summary = Summary {
        games: args.games,
        seed,
        ..Summary::default()
    };
    for outcome in outcomes {
        match outcome {
            Outcome::Win(Player::Myself) => summary.self_wins += 1,
            Outcome::Win(Player::Opponent) => summary.opponent_wins += 1,
            Outcome::Draw => summary.draws += 1,
        }
    }

    if args.json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        println!(
            "[simulate] games={} self_wins={} opponent_wins={} draws={} seed={}",
            summary.games, summary.self_wins, summary.opponent_wins, summary.draws, summary.seed
        );
    }

    Ok(())
}
