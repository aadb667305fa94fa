//! Headless AI-vs-AI games through the click interface.
//!
//! ```text
//! cargo run --features cli --bin morris-selfplay -- --difficulty-one hard --games 20
//! RUST_LOG=morris_engine=debug morris-selfplay --no-flying
//! ```

use anyhow::bail;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use morris_engine::rules::count_mills;
use morris_engine::{
    AiConfig, AiPlayer, Difficulty, GameConfig, GameEvent, GameStateMachine, Player, PlayerMap,
};

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
struct SelfPlayArgs {
    /// Difficulty of Player 1
    #[arg(long, default_value = "medium")]
    difficulty_one: Difficulty,
    /// Difficulty of Player 2
    #[arg(long, default_value = "medium")]
    difficulty_two: Difficulty,
    /// Base seed; game `n` uses `seed + n`
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Number of games to play
    #[arg(long, default_value_t = 10)]
    games: u32,
    /// Stop a game after this many completed turns
    #[arg(long, default_value_t = 200)]
    max_turns: u32,
    /// Play without the flying rule
    #[arg(long)]
    no_flying: bool,
}

#[derive(Debug, Default)]
struct Tally {
    wins: PlayerMap<u32>,
    turn_limit: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = SelfPlayArgs::parse();
    let config = GameConfig::default().with_flying(!args.no_flying);
    let mut tally = Tally::default();

    for game_index in 0..args.games {
        let seed = args.seed.wrapping_add(u64::from(game_index));
        match play_one(&args, &config, seed)? {
            Some(winner) => {
                info!(game = game_index, %winner, "game finished");
                tally.wins[winner] += 1;
            }
            None => {
                info!(game = game_index, max_turns = args.max_turns, "turn limit reached");
                tally.turn_limit += 1;
            }
        }
    }

    println!(
        "{} ({}): {} wins",
        Player::One,
        args.difficulty_one,
        tally.wins[Player::One]
    );
    println!(
        "{} ({}): {} wins",
        Player::Two,
        args.difficulty_two,
        tally.wins[Player::Two]
    );
    println!("Stopped at turn limit: {}", tally.turn_limit);
    Ok(())
}

/// Play one game; `None` if it hit the turn limit.
fn play_one(args: &SelfPlayArgs, config: &GameConfig, seed: u64) -> anyhow::Result<Option<Player>> {
    let mut game = GameStateMachine::new(config.clone());
    let mut ais = PlayerMap::new(|side| {
        let difficulty = match side {
            Player::One => args.difficulty_one,
            Player::Two => args.difficulty_two,
        };
        AiPlayer::new(
            side,
            AiConfig::default().with_difficulty(difficulty).with_seed(seed),
        )
    });

    while !game.is_game_over() && game.turn().turn_number < args.max_turns {
        let side = game.current_player();
        let clicks = ais[side].plan(&game);
        if clicks.is_empty() {
            bail!("{side} found no action in a live game");
        }
        for pos in clicks {
            let outcome = game.on_position_clicked(pos.index());
            if outcome.is_ignored() {
                bail!("engine rejected {side}'s click on {pos}");
            }
        }
        for event in game.drain_events() {
            match event {
                GameEvent::FlyingEntered(player) => debug!(%player, "flying"),
                GameEvent::GameEnded(winner) => debug!(
                    %winner,
                    turns = game.turn().turn_number,
                    winner_mills = count_mills(game.board(), winner),
                    loser_mills = count_mills(game.board(), winner.opponent()),
                    "ended"
                ),
                _ => {}
            }
        }
    }

    Ok(game.winner())
}
