//! Headless matches between agents.
//!
//! This is the driver loop without any I/O: ask the rules for the position's
//! status, ask the active agent for a move, apply it, repeat. Used to evaluate
//! trained policies against baselines and to exercise the engine end to end.
//!
//! ## Usage
//!
//! ```
//! use tapnswap::agents::RandomAgent;
//! use tapnswap::arena::{evaluate, MatchConfig};
//!
//! let mut a = RandomAgent::seeded(1);
//! let mut b = RandomAgent::seeded(2);
//! let tally = evaluate(&mut a, &mut b, 10, &MatchConfig::default()).unwrap();
//! assert_eq!(tally.games(), 10);
//! ```

pub mod config;
pub mod record;

pub use config::MatchConfig;
pub use record::{MatchOutcome, MatchRecord, SeriesTally, Turn};

use crate::agents::Agent;
use crate::core::{GameState, Player};
use crate::error::Result;
use crate::rules;

/// Play one game: `a` holds seat A, `b` holds seat B.
///
/// Stops at the first terminal position or after `config.max_turns` moves.
/// Agent errors and illegal moves abort the match.
pub fn play_match<A, B>(a: &mut A, b: &mut B, config: &MatchConfig) -> Result<MatchRecord>
where
    A: Agent + ?Sized,
    B: Agent + ?Sized,
{
    let mut state = GameState {
        to_move: config.first_player,
        ..GameState::new()
    };
    let mut record = MatchRecord::new(state);

    for _ in 0..config.max_turns {
        if let Some(result) = rules::is_terminal(&state) {
            record.finish(MatchOutcome::Winner(result.winner));
            return Ok(record);
        }

        let player = state.to_move;
        let (mv, name) = match player {
            Player::A => (a.decide(&state, player)?, a.name()),
            Player::B => (b.decide(&state, player)?, b.name()),
        };
        let next = rules::apply_move(&state, player, mv)?;
        log::trace!("{} ({}) plays {}", player, name, mv);

        record.push(Turn { player, state, mv }, next);
        state = next;
    }

    let outcome = match rules::is_terminal(&state) {
        Some(result) => MatchOutcome::Winner(result.winner),
        None => MatchOutcome::TurnLimit,
    };
    record.finish(outcome);
    Ok(record)
}

/// Play `games` matches between `a` and `b`, alternating who opens.
///
/// `a` always holds seat A; even-numbered games open with
/// `config.first_player`, odd-numbered ones with the other seat.
pub fn evaluate<A, B>(a: &mut A, b: &mut B, games: usize, config: &MatchConfig) -> Result<SeriesTally>
where
    A: Agent + ?Sized,
    B: Agent + ?Sized,
{
    let mut tally = SeriesTally::default();

    for game in 0..games {
        let opener = if game % 2 == 0 {
            config.first_player
        } else {
            config.first_player.opponent()
        };
        let game_config = config.clone().with_first_player(opener);
        let record = play_match(&mut *a, &mut *b, &game_config)?;
        tally.record(record.outcome());
    }

    log::info!(
        "{} vs {}: {} - {} ({} unfinished, {:.1}% for {})",
        a.name(),
        b.name(),
        tally.wins[Player::A],
        tally.wins[Player::B],
        tally.unfinished,
        100.0 * tally.win_rate(Player::A),
        a.name()
    );
    Ok(tally)
}
