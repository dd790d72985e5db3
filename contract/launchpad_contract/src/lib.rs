#![no_std]


mod admission;
mod contributions;
mod distribution;
mod events;
mod lifecycle;
mod settlement;
mod storage_types;

pub use settlement::Settlement;
pub use storage_types::{
    Campaign, LaunchpadConfig, LaunchpadError, Status, FEE_DIVISOR, SCALE, SEND_BATCH_SIZE,
};

use storage_types::{DataKey, PersistentKey, TTL_INSTANCE, TTL_PERSISTENT};

use soroban_sdk::{contract, contractimpl, log, token, Address, Env};

#[contract]
pub struct LaunchpadContract;

#[contractimpl]
impl LaunchpadContract {
    /// Set up the campaign and pull `config.token_supply` of `token` from the
    /// owner into escrow.
    pub fn initialize(
        e: Env,
        creator: Address,
        owner: Address,
        token: Address,
        payment_token: Address,
        config: LaunchpadConfig,
    ) -> Result<(), LaunchpadError> {
        if e.storage().instance().has(&DataKey::Campaign) {
            return Err(LaunchpadError::AlreadyInitialized);
        }
        config.validate()?;
        owner.require_auth();

        let campaign = Campaign::new(creator, owner, token, payment_token, config);

        let token_client = token::Client::new(&e, &campaign.token);
        token_client.transfer(
            &campaign.owner,
            &e.current_contract_address(),
            &campaign.config.token_supply,
        );

        save_campaign(&e, &campaign);

        events::emit_initialized(
            &e,
            events::InitializedEvent {
                creator: campaign.creator.clone(),
                owner: campaign.owner.clone(),
                token: campaign.token.clone(),
                token_supply: campaign.config.token_supply,
            },
        );

        Ok(())
    }

    /// Contribute `amount` of the payment token while the sale is open.
    pub fn buy(e: Env, contributor: Address, amount: i128) -> Result<(), LaunchpadError> {
        contributor.require_auth();

        let mut campaign = load_campaign(&e)?;
        let raised = admission::check_buy(&campaign, e.ledger().timestamp(), amount)?;

        let payment_client = token::Client::new(&e, &campaign.payment_token);
        payment_client.transfer(&contributor, &e.current_contract_address(), &amount);

        contributions::record(&e, &mut campaign, &contributor, amount)?;
        campaign.raised = raised;
        save_campaign(&e, &campaign);

        events::emit_buy(
            &e,
            events::BuyEvent {
                contributor,
                amount,
                raised,
            },
        );

        Ok(())
    }

    /// Close the sale once the window has ended or the hard cap is reached.
    pub fn finalize(e: Env) -> Result<Status, LaunchpadError> {
        let mut campaign = load_campaign(&e)?;
        let outcome = campaign.finalize(e.ledger().timestamp())?;
        save_campaign(&e, &campaign);

        log!(&e, "campaign finalized", outcome, campaign.raised);
        events::emit_finalized(
            &e,
            events::FinalizedEvent {
                status: outcome,
                raised: campaign.raised,
                contributor_count: campaign.contributor_count,
            },
        );

        Ok(outcome)
    }

    pub fn cancel(e: Env, caller: Address) -> Result<(), LaunchpadError> {
        caller.require_auth();

        let mut campaign = load_campaign(&e)?;
        campaign.cancel(&caller)?;
        save_campaign(&e, &campaign);

        log!(&e, "campaign cancelled", campaign.raised);
        events::emit_cancelled(
            &e,
            events::FinalizedEvent {
                status: Status::Cancel,
                raised: campaign.raised,
                contributor_count: campaign.contributor_count,
            },
        );

        Ok(())
    }

    /// Process the next batch of contributors. Returns how many were paid;
    /// `0` once everyone has been processed.
    pub fn send(e: Env) -> Result<u32, LaunchpadError> {
        let mut campaign = load_campaign(&e)?;
        let processed = distribution::process_batch(&e, &mut campaign)?;
        if processed == 0 {
            return Ok(0);
        }
        save_campaign(&e, &campaign);

        events::emit_send(
            &e,
            events::SendEvent {
                status: campaign.status,
                processed,
                cursor: campaign.cursor,
                contributor_count: campaign.contributor_count,
            },
        );

        Ok(processed)
    }

    /// Pay out the platform fee and proceeds, and release the leftover token.
    pub fn withdraw(e: Env) -> Result<Settlement, LaunchpadError> {
        let mut campaign = load_campaign(&e)?;
        let settlement = settlement::settle(&e, &mut campaign)?;
        save_campaign(&e, &campaign);

        events::emit_withdraw(
            &e,
            events::WithdrawEvent {
                status: campaign.status,
                settlement: settlement.clone(),
            },
        );

        Ok(settlement)
    }

    /// Deliver a payout `send` had to park. Goes to the contributor, so anyone
    /// may trigger it.
    pub fn claim(e: Env, contributor: Address) -> Result<i128, LaunchpadError> {
        let campaign = load_campaign(&e)?;
        let outcome = campaign.outcome()?;

        let amount = contributions::take_unclaimed(&e, &contributor);
        if amount <= 0 {
            return Err(LaunchpadError::NothingToClaim);
        }

        let asset = distribution::payout_asset(&campaign, outcome).clone();
        token::Client::new(&e, &asset).transfer(&e.current_contract_address(), &contributor, &amount);
        extend_instance(&e);

        events::emit_claim(
            &e,
            events::ClaimEvent {
                contributor,
                asset,
                amount,
            },
        );

        Ok(amount)
    }

    /// View functions
    pub fn status(e: Env) -> Result<Status, LaunchpadError> {
        Ok(load_campaign(&e)?.status)
    }

    /// Cumulative contribution of `contributor`.
    pub fn balance_of(e: Env, contributor: Address) -> i128 {
        contributions::contribution_of(&e, &contributor)
    }

    /// Token amount `contributor` is (or was) entitled to on success.
    pub fn token_of(e: Env, contributor: Address) -> Result<i128, LaunchpadError> {
        let campaign = load_campaign(&e)?;
        let contribution = contributions::contribution_of(&e, &contributor);
        distribution::entitlement(contribution, &campaign.config)
    }

    /// Payout parked for `contributor` after a failed delivery.
    pub fn unclaimed(e: Env, contributor: Address) -> i128 {
        contributions::unclaimed_of(&e, &contributor)
    }

    pub fn creator(e: Env) -> Result<Address, LaunchpadError> {
        Ok(load_campaign(&e)?.creator)
    }

    pub fn owner(e: Env) -> Result<Address, LaunchpadError> {
        Ok(load_campaign(&e)?.owner)
    }

    pub fn token(e: Env) -> Result<Address, LaunchpadError> {
        Ok(load_campaign(&e)?.token)
    }

    pub fn payment_token(e: Env) -> Result<Address, LaunchpadError> {
        Ok(load_campaign(&e)?.payment_token)
    }

    pub fn token_supply(e: Env) -> Result<i128, LaunchpadError> {
        Ok(load_campaign(&e)?.config.token_supply)
    }

    pub fn config(e: Env) -> Result<LaunchpadConfig, LaunchpadError> {
        Ok(load_campaign(&e)?.config)
    }

    pub fn raised(e: Env) -> Result<i128, LaunchpadError> {
        Ok(load_campaign(&e)?.raised)
    }

    pub fn contributor_count(e: Env) -> Result<u32, LaunchpadError> {
        Ok(load_campaign(&e)?.contributor_count)
    }

    pub fn contributor_at(e: Env, index: u32) -> Result<Address, LaunchpadError> {
        contributions::contributor_at(&e, index).ok_or(LaunchpadError::InvalidIndex)
    }

    pub fn cursor(e: Env) -> Result<u32, LaunchpadError> {
        Ok(load_campaign(&e)?.cursor)
    }

    /// Contributors still waiting for their payout or refund.
    pub fn pending(e: Env) -> Result<u32, LaunchpadError> {
        Ok(load_campaign(&e)?.pending())
    }

    pub fn is_settled(e: Env) -> Result<bool, LaunchpadError> {
        Ok(load_campaign(&e)?.settled)
    }
}

// Helper functions
fn load_campaign(e: &Env) -> Result<Campaign, LaunchpadError> {
    e.storage()
        .instance()
        .get(&DataKey::Campaign)
        .ok_or(LaunchpadError::NotInitialized)
}

fn save_campaign(e: &Env, campaign: &Campaign) {
    e.storage().instance().set(&DataKey::Campaign, campaign);
    extend_instance(e);
}

fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub(crate) fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}
