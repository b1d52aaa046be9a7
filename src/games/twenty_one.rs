//! Twenty-one against a fixed dealer.
//!
//! Single player, exact legality. Actions: `0 = Hit`, `1 = Stand`.
//! Cards are drawn with replacement from the seeded RNG: ranks 1-13, face
//! cards count 10, an ace counts 11 when that does not bust the hand.
//!
//! Observation `[3]`: player total / 21, dealer's visible card / 11, and
//! `1.0` when the player holds a usable ace. Rewards are paid on the final
//! ply: `1.0` win, `-1.0` loss or bust, `0.0` push.

use std::io::{self, Write};

use crate::core::{Action, ActionSpace, GameRng, Observation, PlayerId};
use crate::env::{Environment, GameInfo, LegalityPolicy, SeedableEnvironment, Transition};

const HIT: Action = Action::new(0);
const STAND: Action = Action::new(1);

const DEALER_STANDS_ON: u32 = 17;

#[derive(Clone, Debug, Default)]
struct Hand {
    cards: Vec<u32>,
}

impl Hand {
    fn raw_total(&self) -> u32 {
        self.cards.iter().sum()
    }

    fn usable_ace(&self) -> bool {
        self.cards.contains(&1) && self.raw_total() + 10 <= 21
    }

    fn total(&self) -> u32 {
        if self.usable_ace() {
            self.raw_total() + 10
        } else {
            self.raw_total()
        }
    }

    fn is_bust(&self) -> bool {
        self.total() > 21
    }
}

/// Twenty-one environment.
#[derive(Clone, Debug)]
pub struct TwentyOne {
    rng: GameRng,
    player: Hand,
    dealer: Hand,
    done: bool,
}

impl TwentyOne {
    pub const NAME: &'static str = "twentyone";

    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: GameRng::from_seed_or_entropy(seed),
            player: Hand::default(),
            dealer: Hand::default(),
            done: false,
        }
    }

    /// Best total of the player's hand.
    #[must_use]
    pub fn player_total(&self) -> u32 {
        self.player.total()
    }

    /// Best total of the dealer's hand.
    #[must_use]
    pub fn dealer_total(&self) -> u32 {
        self.dealer.total()
    }

    fn draw(&mut self) -> u32 {
        self.rng.gen_range(1..14).min(10) as u32
    }

    fn observe(&self) -> Observation {
        let visible = self.dealer.cards.first().copied().unwrap_or(0);
        let visible = if visible == 1 { 11 } else { visible };
        Observation::new(
            vec![
                self.player.total() as f32 / 21.0,
                visible as f32 / 11.0,
                if self.player.usable_ace() { 1.0 } else { 0.0 },
            ],
            vec![3],
        )
    }

    fn settle(&mut self) -> f32 {
        while self.dealer.total() < DEALER_STANDS_ON {
            let card = self.draw();
            self.dealer.cards.push(card);
        }

        let player = self.player.total();
        let dealer = self.dealer.total();
        if self.dealer.is_bust() || player > dealer {
            1.0
        } else if player < dealer {
            -1.0
        } else {
            0.0
        }
    }
}

impl SeedableEnvironment for TwentyOne {
    fn with_seed(seed: Option<u64>) -> Self {
        Self::new(seed)
    }
}

impl Environment for TwentyOne {
    fn info(&self) -> GameInfo {
        GameInfo {
            name: Self::NAME.to_string(),
            players: PlayerId::list(1),
            action_space: ActionSpace::new(2),
            observation_shape: vec![3],
            legality: LegalityPolicy::Exact,
        }
    }

    fn reset(&mut self) -> Observation {
        self.player = Hand::default();
        self.dealer = Hand::default();
        self.done = false;
        for _ in 0..2 {
            let card = self.draw();
            self.player.cards.push(card);
            let card = self.draw();
            self.dealer.cards.push(card);
        }
        self.observe()
    }

    fn to_play(&self) -> PlayerId {
        PlayerId::new(0)
    }

    fn legal_actions(&self) -> Vec<Action> {
        if self.done {
            Vec::new()
        } else {
            vec![HIT, STAND]
        }
    }

    fn step(&mut self, action: Action) -> Transition {
        let reward = if action == HIT {
            let card = self.draw();
            self.player.cards.push(card);
            if self.player.is_bust() {
                self.done = true;
                -1.0
            } else {
                0.0
            }
        } else {
            self.done = true;
            self.settle()
        };
        Transition::new(self.observe(), reward, self.done)
    }

    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Dealer's cards: {:?}", self.dealer.cards)?;
        writeln!(
            out,
            "Player's cards: {:?} (total {})",
            self.player.cards,
            self.player.total()
        )
    }

    fn action_to_string(&self, action: Action) -> String {
        match action {
            HIT => "Hit".to_string(),
            STAND => "Stand".to_string(),
            other => other.to_string(),
        }
    }
}
