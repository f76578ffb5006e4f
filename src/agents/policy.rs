//! Opponent driven by a trained value table.
//!
//! For each legal move the agent looks up the value of the resulting position
//! from its own perspective and plays the best one, breaking ties at random.
//! With the greedy override on, a winning tap, or failing that a tap that
//! kills an opponent hand, is taken before the table is consulted.
//! Positions the table has never seen count as even games, so an empty
//! table plays uniformly at random.

use crate::core::{GameRng, GameState, Move, MoveList, Player};
use crate::error::{Error, Result};
use crate::policy::{PolicyStore, StateKey};
use crate::rules;

use super::Agent;

/// Score given to a successor the table has never seen: an even game.
pub const UNKNOWN_VALUE: f32 = 0.5;

/// Agent playing a trained policy.
#[derive(Clone, Debug)]
pub struct PolicyAgent {
    store: PolicyStore,
    greedy: bool,
    rng: GameRng,
}

impl PolicyAgent {
    /// Create an agent playing `store`, drawing tie-breaks from `rng`.
    pub fn new(store: PolicyStore, rng: GameRng) -> Self {
        Self {
            store,
            greedy: false,
            rng,
        }
    }

    /// Enable or disable the greedy override.
    pub fn with_greedy(mut self, greedy: bool) -> Self {
        self.greedy = greedy;
        self
    }

    /// Value of `next` for `player`.
    ///
    /// Positions missing from the table are still scored when they end the
    /// game; anything else is `Error::UnknownState`.
    pub fn evaluate(&self, next: &GameState, player: Player) -> Result<f32> {
        let key = StateKey::new(next, player);
        self.store.lookup(&key).or_else(|err| {
            rules::is_terminal(next)
                .map(|result| result.reward(player))
                .ok_or(err)
        })
    }

    /// Moves the greedy override would take: immediate wins if there are
    /// any, otherwise taps that kill an opponent hand.
    fn greedy_candidates(state: &GameState, player: Player, moves: &MoveList) -> MoveList {
        let wins: MoveList = moves
            .iter()
            .copied()
            .filter(|&mv| rules::wins_immediately(state, player, mv))
            .collect();
        if !wins.is_empty() {
            return wins;
        }

        moves
            .iter()
            .copied()
            .filter(|&mv| rules::kills_hand(state, player, mv))
            .collect()
    }

    /// Moves whose successor scores highest.
    ///
    /// Successors missing from the table score `UNKNOWN_VALUE`, so an
    /// unexplored move stays in play against a known loss.
    fn best_moves(&self, state: &GameState, player: Player, moves: &MoveList) -> Result<MoveList> {
        let mut best = MoveList::new();
        let mut best_value = f32::NEG_INFINITY;
        let mut unknown = 0usize;

        for &mv in moves {
            let next = rules::apply_move(state, player, mv)?;
            let value = match self.evaluate(&next, player) {
                Ok(value) => value,
                Err(Error::UnknownState(_)) => {
                    unknown += 1;
                    UNKNOWN_VALUE
                }
                Err(e) => return Err(e),
            };

            if value > best_value {
                best.clear();
                best_value = value;
                best.push(mv);
            } else if value == best_value {
                best.push(mv);
            }
        }

        if unknown == moves.len() {
            log::debug!(
                "policy '{}' knows no successor of {}, playing at random",
                self.store.name(),
                state
            );
        } else if unknown > 0 {
            log::trace!(
                "policy '{}' has no entry for {} successor(s) of {}",
                self.store.name(),
                unknown,
                state
            );
        }
        Ok(best)
    }
}

impl Agent for PolicyAgent {
    fn name(&self) -> &str {
        self.store.name()
    }

    fn decide(&mut self, state: &GameState, player: Player) -> Result<Move> {
        let moves = rules::legal_moves(state, player);
        if moves.is_empty() {
            return Err(Error::NoLegalMove { player });
        }

        if self.greedy {
            let greedy = Self::greedy_candidates(state, player, &moves);
            if let Some(&mv) = self.rng.choose(&greedy) {
                log::trace!("greedy override in {}: {}", state, mv);
                return Ok(mv);
            }
        }

        let candidates = self.best_moves(state, player, &moves)?;
        self.rng
            .choose(&candidates)
            .copied()
            .ok_or(Error::NoLegalMove { player })
    }
}
