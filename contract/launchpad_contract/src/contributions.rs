use soroban_sdk::{Address, Env};

use crate::extend_persistent;
use crate::storage_types::{Campaign, LaunchpadError, PersistentKey};

pub fn contribution_of(e: &Env, contributor: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&PersistentKey::Contribution(contributor.clone()))
        .unwrap_or(0)
}

pub fn contributor_at(e: &Env, index: u32) -> Option<Address> {
    e.storage().persistent().get(&PersistentKey::Contributor(index))
}

/// Adds `amount` to the contributor's running total. A first contribution
/// appends the contributor to the ordered index; later ones never move it.
pub fn record(
    e: &Env,
    campaign: &mut Campaign,
    contributor: &Address,
    amount: i128,
) -> Result<bool, LaunchpadError> {
    let key = PersistentKey::Contribution(contributor.clone());
    let first = !e.storage().persistent().has(&key);

    let total = contribution_of(e, contributor)
        .checked_add(amount)
        .ok_or(LaunchpadError::ArithmeticError)?;
    e.storage().persistent().set(&key, &total);
    extend_persistent(e, &key);

    if first {
        let index_key = PersistentKey::Contributor(campaign.contributor_count);
        e.storage().persistent().set(&index_key, contributor);
        extend_persistent(e, &index_key);
        campaign.contributor_count = campaign
            .contributor_count
            .checked_add(1)
            .ok_or(LaunchpadError::ArithmeticError)?;
    }

    Ok(first)
}

pub fn unclaimed_of(e: &Env, contributor: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&PersistentKey::Unclaimed(contributor.clone()))
        .unwrap_or(0)
}

/// Parks a payout the recipient could not receive so the queue can move on.
pub fn hold(e: &Env, contributor: &Address, amount: i128) -> Result<(), LaunchpadError> {
    let key = PersistentKey::Unclaimed(contributor.clone());
    let total = unclaimed_of(e, contributor)
        .checked_add(amount)
        .ok_or(LaunchpadError::ArithmeticError)?;
    e.storage().persistent().set(&key, &total);
    extend_persistent(e, &key);
    Ok(())
}

/// Removes and returns the parked payout of `contributor`.
pub fn take_unclaimed(e: &Env, contributor: &Address) -> i128 {
    let key = PersistentKey::Unclaimed(contributor.clone());
    let amount = unclaimed_of(e, contributor);
    if amount > 0 {
        e.storage().persistent().remove(&key);
    }
    amount
}
