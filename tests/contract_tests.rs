//! Integration tests for the environment contract and its lifecycle guard.

use std::io::{self, Cursor, Write};

use muzero_env::conformance;
use muzero_env::core::{Action, ActionSpace, Observation, PlayerId};
use muzero_env::env::{
    prompt_action, Checked, Environment, GameInfo, LegalityPolicy, Phase, SeedableEnvironment, Transition,
};
use muzero_env::games::TicTacToe;
use muzero_env::EnvError;

/// Two actions, one player, one ply. Action 1 pays 1.0, action 0 pays 0.0.
#[derive(Default)]
struct OneShot {
    closed: u32,
}

impl SeedableEnvironment for OneShot {
    fn with_seed(_seed: Option<u64>) -> Self {
        Self::default()
    }
}

impl Environment for OneShot {
    fn info(&self) -> GameInfo {
        GameInfo {
            name: "oneshot".to_string(),
            players: PlayerId::list(1),
            action_space: ActionSpace::new(2),
            observation_shape: vec![1],
            legality: LegalityPolicy::Exact,
        }
    }

    fn reset(&mut self) -> Observation {
        Observation::new(vec![0.0], vec![1])
    }

    fn to_play(&self) -> PlayerId {
        PlayerId::new(0)
    }

    fn legal_actions(&self) -> Vec<Action> {
        vec![Action::new(0), Action::new(1)]
    }

    fn step(&mut self, action: Action) -> Transition {
        Transition::new(Observation::new(vec![1.0], vec![1]), action.0 as f32, true)
    }

    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "one shot")
    }

    fn close(&mut self) {
        self.closed += 1;
    }
}

// =============================================================================
// Scenario: two-action single-player environment
// =============================================================================

#[test]
fn test_one_shot_episode() {
    let mut env = OneShot::with_seed(None);

    let o0 = env.reset();
    assert_eq!(o0.data, vec![0.0]);
    assert_eq!(env.legal_actions(), vec![Action::new(0), Action::new(1)]);

    let (o1, reward, done) = env.step(Action::new(1)).into_tuple();
    assert_eq!(o1.data, vec![1.0]);
    assert_eq!(reward, 1.0);
    assert!(done);
}

#[test]
fn test_one_shot_conforms() {
    conformance::check_all::<OneShot>(0).unwrap();
}

#[test]
fn test_default_action_label_is_decimal() {
    let env = OneShot::default();
    assert_eq!(env.action_to_string(Action::new(1)), "1");
}

#[test]
fn test_boxed_environment_delegates() {
    let mut env: Box<dyn Environment> = Box::new(OneShot::default());
    env.reset();
    assert_eq!(env.legal_actions().len(), 2);
    assert_eq!(env.action_to_string(Action::new(0)), "0");
    assert!(env.step(Action::new(0)).done);
}

// =============================================================================
// Lifecycle guard
// =============================================================================

#[test]
fn test_step_after_termination_is_flagged() {
    let mut env = Checked::<OneShot>::with_seed(None);
    env.reset().unwrap();

    assert!(env.step(Action::new(1)).unwrap().done);
    assert_eq!(env.phase(), Phase::Terminated);
    assert!(matches!(env.step(Action::new(1)), Err(EnvError::EpisodeTerminated)));

    // reset makes the instance playable again
    env.reset().unwrap();
    assert_eq!(env.phase(), Phase::Playing);
    assert!(env.step(Action::new(0)).is_ok());
    assert_eq!(env.episodes(), 2);
}

#[test]
fn test_queries_before_reset_are_flagged() {
    let mut env = Checked::<OneShot>::with_seed(None);
    assert_eq!(env.phase(), Phase::Ready);

    assert!(matches!(env.to_play(), Err(EnvError::NotReset)));
    assert!(matches!(env.legal_actions(), Err(EnvError::NotReset)));
    assert!(matches!(env.step(Action::new(0)), Err(EnvError::NotReset)));
    assert!(matches!(env.render(&mut Vec::new()), Err(EnvError::NotReset)));

    // labels are pure and available before reset
    assert_eq!(env.action_to_string(Action::new(1)).unwrap(), "1");
}

#[test]
fn test_action_outside_space_rejected() {
    let mut env = Checked::<OneShot>::with_seed(None);
    env.reset().unwrap();

    let err = env.step(Action::new(2)).unwrap_err();
    assert!(matches!(err, EnvError::ActionOutOfSpace { size: 2, .. }));
    assert_eq!(env.phase(), Phase::Playing);
    assert_eq!(env.ply(), 0);
}

#[test]
fn test_close_reaches_game_once() {
    let mut env = Checked::<OneShot>::with_seed(None);
    env.reset().unwrap();

    env.close().unwrap();
    assert!(matches!(env.close(), Err(EnvError::Closed)));
    assert!(matches!(env.reset(), Err(EnvError::Closed)));
    assert!(matches!(env.action_to_string(Action::new(0)), Err(EnvError::Closed)));
    assert_eq!(env.into_inner().closed, 1);
}

#[test]
fn test_render_after_reset() {
    let mut env = Checked::<OneShot>::with_seed(None);
    env.reset().unwrap();

    let mut out = Vec::new();
    env.render(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "one shot\n");
}

// =============================================================================
// Human prompt
// =============================================================================

#[test]
fn test_prompt_reprompts_until_legal() {
    let mut env = OneShot::default();
    env.reset();

    let mut input = Cursor::new("5\nx\n0\n");
    let mut output = Vec::new();
    let action = prompt_action(&env, &mut input, &mut output).unwrap();

    assert_eq!(action, Action::new(0));

    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with("Enter the action to play for the player 0: "));
    assert!(text.contains("'5' is not a legal action"));
    assert!(text.contains("'x' is not a legal action"));
    assert_eq!(text.matches("Enter another action : ").count(), 2);
}

#[test]
fn test_prompt_accepts_first_valid_line() {
    let env = OneShot::default();

    let mut input = Cursor::new(" 1 \r\n");
    let mut output = Vec::new();
    assert_eq!(prompt_action(&env, &mut input, &mut output).unwrap(), Action::new(1));

    let text = String::from_utf8(output).unwrap();
    assert!(!text.contains("Enter another action"));
}

#[test]
fn test_prompt_rejects_undecodable_line() {
    let env = OneShot::default();

    let mut input = Cursor::new(&b"\xff\xfe\n0\n"[..]);
    let mut output = Vec::new();
    assert_eq!(prompt_action(&env, &mut input, &mut output).unwrap(), Action::new(0));

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("is not a legal action"));
    assert_eq!(text.matches("Enter another action : ").count(), 1);
}

#[test]
fn test_prompt_without_legal_actions_fails_fast() {
    let mut env = TicTacToe::new();
    env.reset();
    for cell in [0, 3, 1, 4, 2] {
        env.step(Action::new(cell));
    }
    assert!(env.legal_actions().is_empty());

    let mut input = Cursor::new("0\n1\n2\n");
    let mut output = Vec::new();
    assert!(matches!(
        prompt_action(&env, &mut input, &mut output),
        Err(EnvError::NoLegalActions)
    ));
    // nothing was read or prompted
    assert!(output.is_empty());
    assert_eq!(input.position(), 0);
}

#[test]
fn test_human_input_after_termination_is_flagged() {
    let mut env = Checked::<OneShot>::with_seed(None);
    env.reset().unwrap();
    env.step(Action::new(1)).unwrap();

    assert!(matches!(env.human_to_action(), Err(EnvError::EpisodeTerminated)));
}

#[test]
fn test_prompt_end_of_input() {
    let env = OneShot::default();

    let mut input = Cursor::new("7\n");
    let mut output = Vec::new();
    assert!(matches!(
        prompt_action(&env, &mut input, &mut output),
        Err(EnvError::InputClosed)
    ));
}
