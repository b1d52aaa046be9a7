//! Integration tests running the reference games through the contract.

use muzero_env::conformance;
use muzero_env::core::{Action, PlayerId};
use muzero_env::env::{Checked, Environment, LegalityPolicy, SeedableEnvironment};
use muzero_env::games::{GameKind, GridWorld, GridWorldBuilder, TicTacToe, TwentyOne};
use muzero_env::EnvError;

// =============================================================================
// Conformance
// =============================================================================

#[test]
fn test_tictactoe_conforms() {
    conformance::check_all::<TicTacToe>(0).unwrap();
}

#[test]
fn test_twenty_one_conforms() {
    for seed in [1, 2, 3, 42] {
        conformance::check_all::<TwentyOne>(seed).unwrap();
    }
}

#[test]
fn test_gridworld_conforms() {
    for seed in [1, 2, 3, 42] {
        conformance::check_all::<GridWorld>(seed).unwrap();
    }
}

// =============================================================================
// Legality policies
// =============================================================================

#[test]
fn test_exact_game_rejects_occupied_cell() {
    let mut env = Checked::<TicTacToe>::with_seed(None);
    env.reset().unwrap();
    env.step(Action::new(4)).unwrap();

    let err = env.step(Action::new(4)).unwrap_err();
    assert!(matches!(
        err,
        EnvError::IllegalAction { player, .. } if player == PlayerId::new(1)
    ));
    // the rejected action did not consume a ply
    assert_eq!(env.ply(), 1);
}

#[test]
fn test_penalized_game_offers_whole_space() {
    let mut env = Checked::<GridWorld>::with_seed(Some(8));
    env.reset().unwrap();

    let info = env.info().clone();
    assert!(matches!(info.legality, LegalityPolicy::Penalized { terminates: false, .. }));
    assert_eq!(env.legal_actions().unwrap(), info.action_space.to_vec());
}

#[test]
fn test_penalized_bump_keeps_episode_running() {
    let mut env = Checked::new(
        GridWorldBuilder::new()
            .size(1, 3)
            .obstacles(0)
            .max_steps(10)
            .build(Some(3)),
    );
    env.reset().unwrap();

    // a 1-wide grid: left and right are always walls
    let t = env.step(Action::new(2)).unwrap();
    assert_eq!(t.reward, -1.0);
    assert!(!t.done);
    let t = env.step(Action::new(3)).unwrap();
    assert_eq!(t.reward, -1.0);
    assert!(!t.done);
}

// =============================================================================
// Determinism across instances
// =============================================================================

#[test]
fn test_gridworld_layout_follows_seed() {
    let mut a = GridWorld::with_seed(Some(99));
    let mut b = GridWorld::with_seed(Some(99));
    let mut c = GridWorld::with_seed(Some(100));

    let (oa, ob, oc) = (a.reset(), b.reset(), c.reset());
    assert_eq!(oa, ob);
    assert_eq!(a.agent(), b.agent());
    // different seeds give different layouts for these seeds
    assert_ne!(oa, oc);
}

#[test]
fn test_twenty_one_episodes_differ_within_instance() {
    let mut env = TwentyOne::with_seed(Some(4));
    let deals: Vec<_> = (0..10).map(|_| env.reset()).collect();
    assert!(deals.windows(2).any(|w| w[0] != w[1]));
}

// =============================================================================
// Registry
// =============================================================================

#[test]
fn test_every_kind_runs_an_episode() {
    for kind in GameKind::ALL {
        let mut env = Checked::new(kind.build(Some(5)));
        env.reset().unwrap();

        let mut done = false;
        for _ in 0..100 {
            let action = env.legal_actions().unwrap()[0];
            if env.step(action).unwrap().done {
                done = true;
                break;
            }
        }
        assert!(done, "{kind} did not finish");
        env.close().unwrap();
    }
}

#[test]
fn test_players_match_turn_order() {
    let mut env = TicTacToe::new();
    env.reset();
    assert_eq!(env.info().players, PlayerId::list(2));

    let mut seen = Vec::new();
    for cell in [0, 1, 2, 3] {
        seen.push(env.to_play());
        env.step(Action::new(cell));
    }
    assert_eq!(seen, [0, 1, 0, 1].map(PlayerId::new));
}
