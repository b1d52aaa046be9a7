//! Play a bundled game at the terminal.
//!
//! ```text
//! cargo run --features cli --bin play -- --game tictactoe --human 0
//! ```
//!
//! Players listed with `--human` are prompted on stdin; every other seat is
//! filled by a seeded random selector.

use clap::Parser;

use muzero_env::core::{EnvConfig, PlayerMap};
use muzero_env::driver::{ActionSelector, EpisodeRunner, HumanSelector, RandomSelector};
use muzero_env::env::Checked;
use muzero_env::games::GameKind;

#[derive(Parser, Debug)]
#[command(about = "Play a bundled environment from the terminal")]
struct Args {
    /// Game to play (tictactoe, twentyone, gridworld)
    #[arg(short, long, default_value = "tictactoe")]
    game: GameKind,

    /// Environment seed; omitted draws one
    #[arg(short, long)]
    seed: Option<u64>,

    /// Player ids controlled from the keyboard
    #[arg(long, value_delimiter = ',')]
    human: Vec<u8>,

    /// Episodes to play
    #[arg(short, long, default_value_t = 1)]
    episodes: usize,

    /// Ply limit per episode
    #[arg(long, default_value_t = 500)]
    max_moves: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut env = Checked::new(args.game.build(args.seed));
    let mut config = EnvConfig::from_info(env.info())
        .with_max_moves(args.max_moves)
        .with_render(true);
    config.seed = args.seed;

    let base_seed = args.seed.unwrap_or_default();
    let mut seats = PlayerMap::new(config.players.len(), |player| -> Box<dyn ActionSelector> {
        if args.human.contains(&player.0) {
            Box::new(HumanSelector)
        } else {
            Box::new(RandomSelector::new(base_seed.wrapping_add(player.0 as u64)))
        }
    });

    let runner = EpisodeRunner::new(config);
    for episode in runner.play_many(&mut env, &mut seats, args.episodes)? {
        let rewards = episode.player_rewards(runner.config().players.len());
        for (player, total) in rewards.iter() {
            log::info!(
                "{}: player {} total reward {:.1} over {} plies{}",
                episode.game,
                player,
                total,
                episode.len(),
                if episode.terminated { "" } else { " (truncated)" }
            );
        }
    }

    env.close()?;
    Ok(())
}
