//! Betting phase: placing and retaking chips before the deal.

use tracing::debug;

use crate::core::config::TableConfig;
use crate::core::error::RuleError;
use crate::core::state::GameState;

/// Add `amount` to the round bet.
///
/// Rejected while a round is in progress, below the table minimum, or when
/// the total would overflow.
pub fn place_bet(state: &GameState, amount: u32, config: &TableConfig) -> Result<GameState, RuleError> {
    if state.round_active {
        return Err(RuleError::RoundInProgress);
    }
    if amount < config.minimum_bet {
        return Err(RuleError::BetTooLow {
            amount,
            minimum: config.minimum_bet,
        });
    }

    let total = state.bet.checked_add(amount).ok_or(RuleError::BetOverflow)?;

    let mut bet_list = state.bet_list.clone();
    bet_list.push_back(amount);
    debug!(amount, total, "bet placed");

    Ok(GameState {
        bet: total,
        bet_list,
        ..state.clone()
    })
}

/// Take back the most recent placement.
///
/// Returns the new state and the amount handed back.
pub fn retake_bet(state: &GameState) -> Result<(GameState, u32), RuleError> {
    if state.round_active {
        return Err(RuleError::RoundInProgress);
    }

    let mut bet_list = state.bet_list.clone();
    let amount = bet_list.pop_back().ok_or(RuleError::NoBetToRetake)?;
    debug!(amount, "bet retaken");

    Ok((
        GameState {
            bet: state.bet.saturating_sub(amount),
            bet_list,
            ..state.clone()
        },
        amount,
    ))
}
