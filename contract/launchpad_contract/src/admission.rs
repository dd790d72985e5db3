use crate::storage_types::{Campaign, LaunchpadError};

/// Validates a single contribution and returns the `raised` total it would
/// produce. Bounds apply to each call, not to a contributor's running total.
pub fn check_buy(campaign: &Campaign, now: u64, amount: i128) -> Result<i128, LaunchpadError> {
    if !campaign.is_live(now) {
        return Err(LaunchpadError::WindowClosed);
    }

    let config = &campaign.config;
    if amount < config.min_buy || amount > config.max_buy {
        return Err(LaunchpadError::OutOfBounds);
    }

    let raised = campaign
        .raised
        .checked_add(amount)
        .ok_or(LaunchpadError::ArithmeticError)?;
    if raised > config.hard_cap {
        return Err(LaunchpadError::CapExceeded);
    }

    Ok(raised)
}
