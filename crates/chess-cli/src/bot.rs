//! Random move computer player.

use crate::session::playable_moves;
use chess_core::Move;
use chess_engine::{Game, MoveSelector};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Plays a uniformly random move among those a session would accept.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Seeded selectors replay the same choices for the same games.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        RandomSelector { rng }
    }
}

impl MoveSelector for RandomSelector {
    fn select(&mut self, game: &Game) -> Option<Move> {
        playable_moves(game).choose(&mut self.rng).copied()
    }
}
