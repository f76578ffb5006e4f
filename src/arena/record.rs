//! Match history and series tallies.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Move, Player, PlayerPair};
use crate::policy::StateKey;

/// One move of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// The player who moved.
    pub player: Player,

    /// Position before the move.
    pub state: GameState,

    /// The move played.
    pub mv: Move,
}

/// How a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// A player lost both hands.
    Winner(Player),
    /// The turn cap was reached first.
    TurnLimit,
}

impl MatchOutcome {
    /// Outcome value for a player: 1 win, 0 loss, 0.5 unfinished.
    #[must_use]
    pub fn reward(&self, player: Player) -> f32 {
        match self {
            MatchOutcome::Winner(winner) if *winner == player => 1.0,
            MatchOutcome::Winner(_) => 0.0,
            MatchOutcome::TurnLimit => 0.5,
        }
    }
}

/// Complete record of a match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchRecord {
    start: GameState,
    turns: Vec<Turn>,
    final_state: GameState,
    outcome: MatchOutcome,
}

impl MatchRecord {
    /// Start recording from `start`.
    pub fn new(start: GameState) -> Self {
        Self {
            start,
            turns: Vec::new(),
            final_state: start,
            outcome: MatchOutcome::TurnLimit,
        }
    }

    /// Record a move and the position it produced.
    pub fn push(&mut self, turn: Turn, next: GameState) {
        self.turns.push(turn);
        self.final_state = next;
    }

    /// Set the final outcome.
    pub fn finish(&mut self, outcome: MatchOutcome) {
        self.outcome = outcome;
    }

    /// Opening position.
    #[must_use]
    pub fn start(&self) -> GameState {
        self.start
    }

    /// Moves in order.
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Position after the last move.
    #[must_use]
    pub fn final_state(&self) -> GameState {
        self.final_state
    }

    /// How the match ended.
    #[must_use]
    pub fn outcome(&self) -> MatchOutcome {
        self.outcome
    }

    /// Number of moves played.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Check if no move was played.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Positions reached by each move, keyed from the mover's perspective,
    /// paired with the final outcome for that mover.
    ///
    /// This is the lookup side of the data a value-table trainer consumes.
    pub fn value_samples(&self) -> Vec<(StateKey, f32)> {
        let reached = self
            .turns
            .iter()
            .skip(1)
            .map(|t| t.state)
            .chain(std::iter::once(self.final_state));

        self.turns
            .iter()
            .zip(reached)
            .map(|(turn, next)| (StateKey::new(&next, turn.player), self.outcome.reward(turn.player)))
            .collect()
    }
}

/// Results of a series of matches, by seat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesTally {
    /// Games won from each seat.
    pub wins: PlayerPair<u32>,

    /// Games cut off by the turn limit.
    pub unfinished: u32,
}

impl SeriesTally {
    /// Count one match.
    pub fn record(&mut self, outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::Winner(winner) => self.wins[winner] += 1,
            MatchOutcome::TurnLimit => self.unfinished += 1,
        }
    }

    /// Total matches counted.
    #[must_use]
    pub fn games(&self) -> u32 {
        self.wins[Player::A] + self.wins[Player::B] + self.unfinished
    }

    /// Fraction of all matches won from `seat`.
    #[must_use]
    pub fn win_rate(&self, seat: Player) -> f64 {
        match self.games() {
            0 => 0.0,
            n => f64::from(self.wins[seat]) / f64::from(n),
        }
    }
}
