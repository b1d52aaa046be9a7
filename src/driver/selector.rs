//! Choosing an action for the player to move.

use crate::core::{Action, GameRng};
use crate::env::Environment;
use crate::error::{EnvError, Result};

/// Picks one action from the legal set.
///
/// `legal` is what `legal_actions()` returned this ply and is never empty
/// when a selector is called.
pub trait ActionSelector {
    fn select(&mut self, env: &dyn Environment, legal: &[Action]) -> Result<Action>;
}

/// Uniform choice among legal actions from a seeded RNG.
#[derive(Clone, Debug)]
pub struct RandomSelector {
    rng: GameRng,
}

impl RandomSelector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl ActionSelector for RandomSelector {
    fn select(&mut self, _env: &dyn Environment, legal: &[Action]) -> Result<Action> {
        self.rng.choose(legal).copied().ok_or(EnvError::NoLegalActions)
    }
}

/// Always the first legal action.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLegal;

impl ActionSelector for FirstLegal {
    fn select(&mut self, _env: &dyn Environment, legal: &[Action]) -> Result<Action> {
        legal.first().copied().ok_or(EnvError::NoLegalActions)
    }
}

/// A human at the terminal, through `human_to_action`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HumanSelector;

impl ActionSelector for HumanSelector {
    fn select(&mut self, env: &dyn Environment, _legal: &[Action]) -> Result<Action> {
        env.human_to_action()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::TicTacToe;

    #[test]
    fn test_random_selector_is_seeded() {
        let env = TicTacToe::new();
        let legal: Vec<Action> = (0..9).map(Action::new).collect();

        let mut a = RandomSelector::new(5);
        let mut b = RandomSelector::new(5);
        for _ in 0..20 {
            let choice = a.select(&env, &legal).unwrap();
            assert!(legal.contains(&choice));
            assert_eq!(choice, b.select(&env, &legal).unwrap());
        }
    }

    #[test]
    fn test_first_legal() {
        let env = TicTacToe::new();
        let legal = [Action::new(3), Action::new(1)];
        assert_eq!(FirstLegal.select(&env, &legal).unwrap(), Action::new(3));
    }

    #[test]
    fn test_empty_legal_set() {
        let env = TicTacToe::new();
        assert!(matches!(FirstLegal.select(&env, &[]), Err(EnvError::NoLegalActions)));
        assert!(matches!(
            RandomSelector::new(0).select(&env, &[]),
            Err(EnvError::NoLegalActions)
        ));
    }
}
