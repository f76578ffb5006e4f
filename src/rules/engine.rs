//! Move generation, move application, and win detection.
//!
//! All functions here are pure: they read a `GameState` and, where relevant,
//! return a new one. The rules are the sole authority on legality; callers
//! never validate moves themselves.

use rustc_hash::FxHashSet;

use crate::core::{GameState, Hand, Hands, Move, MoveList, Player, HAND_MODULUS};
use crate::error::{Error, Result};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GameResult {
    /// The player whose opponent lost both hands.
    pub winner: Player,
}

impl GameResult {
    /// The defeated player.
    #[must_use]
    pub const fn loser(&self) -> Player {
        self.winner.opponent()
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        self.winner == player
    }

    /// Outcome value for a player: 1.0 for the winner, 0.0 for the loser.
    #[must_use]
    pub fn reward(&self, player: Player) -> f32 {
        if self.is_winner(player) {
            1.0
        } else {
            0.0
        }
    }
}

/// Enumerate every legal move for `player`.
///
/// Returns an empty list when `player` is not the one to move, or when the
/// mover has no live hand and nothing to redistribute.
///
/// Taps come first, ordered by (source, target) with left before right;
/// swaps follow in ascending order of the new left hand.
///
/// Moves are listed by effect: when both of the mover's hands hold the same
/// count, a tap from the right hand produces exactly the state of the
/// matching tap from the left, so only the left-hand tap is listed. Targets
/// are never merged, since the opponent's left and right stay distinct.
pub fn legal_moves(state: &GameState, player: Player) -> MoveList {
    let mut moves = MoveList::new();
    if state.to_move != player {
        return moves;
    }

    let own = state.hands[player];
    let opponent = state.hands[player.opponent()];

    for from in own.alive_hands() {
        if from == Hand::Right && own.left == own.right {
            continue;
        }
        for to in opponent.alive_hands() {
            moves.push(Move::tap(from, to));
        }
    }

    let sum = own.sum();
    for left in 0..HAND_MODULUS.min(sum + 1) {
        let Ok(split) = Hands::from_counts(left, sum - left) else {
            continue;
        };
        // Neither a no-op nor a bare relabelling of the two hands.
        if split == own || split == own.reversed() {
            continue;
        }
        moves.push(Move::swap(split.left, split.right));
    }

    moves
}

/// Check whether `mv` is legal for `player` in `state`.
#[must_use]
pub fn is_legal(state: &GameState, player: Player, mv: Move) -> bool {
    legal_moves(state, player).contains(&mv)
}

/// Apply a move, producing the next state.
///
/// Fails with `Error::IllegalMove` when `mv` is not in
/// `legal_moves(state, player)`. The input state is never modified.
pub fn apply_move(state: &GameState, player: Player, mv: Move) -> Result<GameState> {
    if !is_legal(state, player, mv) {
        return Err(Error::IllegalMove { player, mv });
    }
    Ok(resolve(state, player, mv))
}

/// Apply a move already known to be legal.
fn resolve(state: &GameState, player: Player, mv: Move) -> GameState {
    let mut next = *state;
    let opponent = player.opponent();

    match mv {
        Move::Tap { from, to } => {
            let target = next.hands[opponent].get(to) + next.hands[player].get(from);
            next.hands[opponent] = next.hands[opponent].with(to, target);
        }
        Move::Swap { left, right } => {
            next.hands[player] = Hands::new(left, right);
        }
    }

    next.to_move = opponent;
    next
}

/// Check if the game is over.
///
/// Returns `Some(result)` once a player has lost both hands, `None` while
/// both players still hold fingers.
#[must_use]
pub fn is_terminal(state: &GameState) -> Option<GameResult> {
    Player::ALL
        .into_iter()
        .find(|&p| state.hands[p].is_defeated())
        .map(|loser| GameResult {
            winner: loser.opponent(),
        })
}

/// True if `mv` is a legal tap that drives an opponent hand to zero.
#[must_use]
pub fn kills_hand(state: &GameState, player: Player, mv: Move) -> bool {
    match mv {
        Move::Tap { to, .. } if is_legal(state, player, mv) => {
            resolve(state, player, mv).hands[player.opponent()]
                .get(to)
                .is_dead()
        }
        _ => false,
    }
}

/// True if `mv` is legal and leaves the opponent with no live hand.
#[must_use]
pub fn wins_immediately(state: &GameState, player: Player, mv: Move) -> bool {
    is_legal(state, player, mv)
        && resolve(state, player, mv).hands[player.opponent()].is_defeated()
}

/// Every state reachable by legal play from the opening position, including
/// terminal ones. Play stops at terminal states.
pub fn reachable_states() -> Vec<GameState> {
    let start = GameState::new();
    let mut seen = FxHashSet::default();
    seen.insert(start);
    let mut frontier = vec![start];
    let mut states = Vec::new();

    while let Some(state) = frontier.pop() {
        states.push(state);
        if is_terminal(&state).is_some() {
            continue;
        }
        for mv in legal_moves(&state, state.to_move) {
            let next = resolve(&state, state.to_move, mv);
            if seen.insert(next) {
                frontier.push(next);
            }
        }
    }

    states
}
