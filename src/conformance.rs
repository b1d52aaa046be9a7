//! Conformance checks for environment implementations.
//!
//! Each check constructs fresh instances through
//! [`SeedableEnvironment::with_seed`], drives them through [`Checked`], and
//! reports the first deviation from the contract it finds. Run them all from
//! a game's test suite with [`check_all`]:
//!
//! ```
//! use muzero_env::conformance;
//! use muzero_env::games::TicTacToe;
//!
//! conformance::check_all::<TicTacToe>(42).unwrap();
//! ```

use thiserror::Error;

use crate::core::{Action, GameRng, PlayerId};
use crate::env::{Checked, Phase, SeedableEnvironment};
use crate::error::EnvError;

/// Upper bound on plies per episode in the checks.
pub const DEFAULT_MAX_MOVES: usize = 200;

/// A deviation from the environment contract.
#[derive(Error, Debug)]
pub enum ConformanceError {
    #[error("contract error: {0}")]
    Env(#[from] EnvError),

    #[error("{game}: instances seeded with {seed} diverged at episode {episode}, ply {ply}")]
    Diverged {
        game: String,
        seed: u64,
        episode: usize,
        ply: usize,
    },

    #[error("{game}: no legal actions in a non-terminal state")]
    NoLegalActions { game: String },

    #[error("{game}: legal action {action} is outside the action space")]
    LegalOutsideSpace { game: String, action: Action },

    #[error("{game}: to_play returned {player}, which is not a listed player")]
    UnlistedPlayer { game: String, player: PlayerId },

    #[error("{game}: observation shape {actual:?} differs from declared {expected:?}")]
    ShapeMismatch {
        game: String,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("{game}: action {action} has an unstable or empty label")]
    BadLabel { game: String, action: Action },

    #[error("{game}: episode did not terminate within {max_moves} plies")]
    NeverTerminated { game: String, max_moves: usize },

    #[error("{game}: {violation} was not rejected")]
    Unflagged {
        game: String,
        violation: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, ConformanceError>;

fn choose(rng: &mut GameRng, legal: &[Action]) -> Option<Action> {
    rng.choose(legal).copied()
}

/// Two instances with the same seed, fed the same actions, must produce the
/// same observations, rewards, players and legal sets. Covers two
/// consecutive episodes per instance.
pub fn check_determinism<E: SeedableEnvironment>(seed: u64, max_moves: usize) -> Result<()> {
    let mut a = Checked::<E>::with_seed(Some(seed));
    let mut b = Checked::<E>::with_seed(Some(seed));
    let game = a.info().name.clone();
    let mut chooser = GameRng::new(seed.wrapping_add(1));

    for episode in 0..2 {
        let diverged = |ply| ConformanceError::Diverged {
            game: game.clone(),
            seed,
            episode,
            ply,
        };

        if a.reset()? != b.reset()? {
            return Err(diverged(0));
        }

        for ply in 1..=max_moves {
            let legal = a.legal_actions()?;
            if legal != b.legal_actions()? || a.to_play()? != b.to_play()? {
                return Err(diverged(ply));
            }

            let Some(action) = choose(&mut chooser, &legal) else {
                break;
            };
            let step = a.step(action)?;
            if step != b.step(action)? {
                return Err(diverged(ply));
            }
            if step.done {
                break;
            }
        }
    }

    a.close()?;
    b.close()?;
    log::debug!("{game}: determinism holds for seed {seed}");
    Ok(())
}

/// After `reset`: the observation has the declared shape, the legal set is
/// non-empty and inside the action space, and `to_play` is a listed player.
pub fn check_reset_ready<E: SeedableEnvironment>(seed: u64) -> Result<()> {
    let mut env = Checked::<E>::with_seed(Some(seed));
    let info = env.info().clone();

    for _ in 0..2 {
        let observation = env.reset()?;
        if observation.shape != info.observation_shape {
            return Err(ConformanceError::ShapeMismatch {
                game: info.name,
                expected: info.observation_shape,
                actual: observation.shape,
            });
        }

        let legal = env.legal_actions()?;
        if legal.is_empty() {
            return Err(ConformanceError::NoLegalActions { game: info.name });
        }
        if let Some(action) = legal.iter().find(|a| !info.action_space.contains(**a)) {
            return Err(ConformanceError::LegalOutsideSpace {
                game: info.name,
                action: *action,
            });
        }

        let player = env.to_play()?;
        if !info.players.contains(&player) {
            return Err(ConformanceError::UnlistedPlayer {
                game: info.name,
                player,
            });
        }
    }

    env.close()?;
    Ok(())
}

/// Along one random trajectory, every action offered by `legal_actions` is
/// accepted by `step` on a replica replayed to the same point, and every
/// non-terminal state offers at least one action.
pub fn check_legal_actions_accepted<E: SeedableEnvironment>(seed: u64, max_moves: usize) -> Result<()> {
    let mut env = Checked::<E>::with_seed(Some(seed));
    let game = env.info().name.clone();
    let mut chooser = GameRng::new(seed.wrapping_add(2));
    let mut prefix: Vec<Action> = Vec::new();

    env.reset()?;
    for _ in 0..max_moves {
        let legal = env.legal_actions()?;
        if legal.is_empty() {
            return Err(ConformanceError::NoLegalActions { game });
        }

        for &candidate in &legal {
            let mut replica = Checked::<E>::with_seed(Some(seed));
            replica.reset()?;
            for &action in &prefix {
                replica.step(action)?;
            }
            replica.step(candidate)?;
            replica.close()?;
        }

        let Some(action) = choose(&mut chooser, &legal) else {
            break;
        };
        prefix.push(action);
        if env.step(action)?.done {
            break;
        }
    }

    env.close()?;
    Ok(())
}

/// `action_to_string` returns a non-empty, stable label for every action in
/// the space, before and after `reset`.
pub fn check_action_to_string_total<E: SeedableEnvironment>(seed: u64) -> Result<()> {
    let mut env = Checked::<E>::with_seed(Some(seed));
    let info = env.info().clone();

    let labels = |env: &Checked<E>| -> Result<Vec<String>> {
        info.action_space
            .iter()
            .map(|a| env.action_to_string(a).map_err(ConformanceError::from))
            .collect()
    };

    let before = labels(&env)?;
    env.reset()?;
    let after = labels(&env)?;

    for (action, (x, y)) in info.action_space.iter().zip(before.iter().zip(&after)) {
        if x.is_empty() || x != y {
            return Err(ConformanceError::BadLabel {
                game: info.name,
                action,
            });
        }
    }

    env.close()?;
    Ok(())
}

/// An episode played to termination rejects a further `step`, and a
/// `reset` afterwards starts a playable episode.
pub fn check_step_after_termination_rejected<E: SeedableEnvironment>(
    seed: u64,
    max_moves: usize,
) -> Result<()> {
    let mut env = Checked::<E>::with_seed(Some(seed));
    let game = env.info().name.clone();

    env.reset()?;
    let mut last = None;
    for _ in 0..max_moves {
        let legal = env.legal_actions()?;
        let action = *legal
            .first()
            .ok_or_else(|| ConformanceError::NoLegalActions { game: game.clone() })?;
        last = Some(action);
        if env.step(action)?.done {
            break;
        }
    }

    let Some(action) = last.filter(|_| env.phase() == Phase::Terminated) else {
        return Err(ConformanceError::NeverTerminated { game, max_moves });
    };

    match env.step(action) {
        Err(EnvError::EpisodeTerminated) => {}
        _ => {
            return Err(ConformanceError::Unflagged {
                game,
                violation: "step after termination",
            })
        }
    }

    env.reset()?;
    if env.legal_actions()?.is_empty() {
        return Err(ConformanceError::NoLegalActions { game });
    }
    env.close()?;
    Ok(())
}

/// `close` is accepted once (even before any `reset`), and every later call
/// is rejected.
pub fn check_close_once<E: SeedableEnvironment>(seed: u64) -> Result<()> {
    let mut env = Checked::<E>::with_seed(Some(seed));
    let game = env.info().name.clone();

    env.close()?;
    if !matches!(env.close(), Err(EnvError::Closed)) {
        return Err(ConformanceError::Unflagged {
            game,
            violation: "second close",
        });
    }
    if !matches!(env.reset(), Err(EnvError::Closed)) {
        return Err(ConformanceError::Unflagged {
            game,
            violation: "reset after close",
        });
    }
    Ok(())
}

/// Run every check with `seed`.
pub fn check_all<E: SeedableEnvironment>(seed: u64) -> Result<()> {
    check_reset_ready::<E>(seed)?;
    check_determinism::<E>(seed, DEFAULT_MAX_MOVES)?;
    check_legal_actions_accepted::<E>(seed, DEFAULT_MAX_MOVES)?;
    check_action_to_string_total::<E>(seed)?;
    check_step_after_termination_rejected::<E>(seed, DEFAULT_MAX_MOVES)?;
    check_close_once::<E>(seed)?;
    Ok(())
}
