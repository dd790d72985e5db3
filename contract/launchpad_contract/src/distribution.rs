use core::cmp::min;

use soroban_sdk::{log, token, Address, Env};

use crate::contributions::{contribution_of, contributor_at, hold};
use crate::storage_types::{
    Campaign, LaunchpadConfig, LaunchpadError, Status, SCALE, SEND_BATCH_SIZE,
};

/// Tokens per payment unit, scaled by `SCALE`.
pub fn rate(config: &LaunchpadConfig) -> Result<i128, LaunchpadError> {
    let scaled_supply = config
        .token_supply
        .checked_mul(SCALE)
        .ok_or(LaunchpadError::ArithmeticError)?;
    Ok(scaled_supply / config.hard_cap)
}

/// Pro-rata token amount for a contribution, measured against the hard cap.
///
/// The rate is truncated before it is applied, and the product truncated again
/// when unscaled. Keep that order: it fixes where rounding happens and keeps the
/// sum of all entitlements at or below the token supply.
pub fn entitlement(contribution: i128, config: &LaunchpadConfig) -> Result<i128, LaunchpadError> {
    let scaled = contribution
        .checked_mul(rate(config)?)
        .ok_or(LaunchpadError::ArithmeticError)?;
    Ok(scaled / SCALE)
}

/// Half-open index range covered by the next `send`.
pub fn batch_range(cursor: u32, contributor_count: u32) -> (u32, u32) {
    let start = min(cursor, contributor_count);
    let end = min(start.saturating_add(SEND_BATCH_SIZE), contributor_count);
    (start, end)
}

/// Asset a contributor is paid in for a terminal `outcome`.
pub fn payout_asset(campaign: &Campaign, outcome: Status) -> &Address {
    match outcome {
        Status::Success => &campaign.token,
        _ => &campaign.payment_token,
    }
}

/// Pays out one batch starting at the cursor and advances it. Token
/// entitlements on `Success`, full refunds in the payment token otherwise.
///
/// A transfer the recipient cannot receive (a deauthorized trustline, say)
/// does not stop the batch: the amount is parked for `claim` and still counts
/// as distributed.
pub fn process_batch(e: &Env, campaign: &mut Campaign) -> Result<u32, LaunchpadError> {
    let outcome = campaign.outcome()?;
    let (start, end) = batch_range(campaign.cursor, campaign.contributor_count);
    if start == end {
        return Ok(0);
    }

    let client = token::Client::new(e, payout_asset(campaign, outcome));
    let escrow = e.current_contract_address();

    let mut paid: i128 = 0;
    for index in start..end {
        let contributor = contributor_at(e, index).ok_or(LaunchpadError::InvalidIndex)?;
        let contribution = contribution_of(e, &contributor);
        let amount = match outcome {
            Status::Success => entitlement(contribution, &campaign.config)?,
            _ => contribution,
        };

        if amount > 0 && !matches!(client.try_transfer(&escrow, &contributor, &amount), Ok(Ok(()))) {
            hold(e, &contributor, amount)?;
            log!(e, "payout held", contributor, amount);
        }
        paid = paid.checked_add(amount).ok_or(LaunchpadError::ArithmeticError)?;
    }

    campaign.cursor = end;
    campaign.distributed = campaign
        .distributed
        .checked_add(paid)
        .ok_or(LaunchpadError::ArithmeticError)?;

    log!(e, "batch processed", start, end, campaign.contributor_count);
    Ok(end - start)
}
