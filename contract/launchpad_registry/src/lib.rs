#![no_std]
use soroban_sdk::{
    contract, contractclient, contractimpl, log, token, Address, BytesN, Env, Vec,
};

mod events;
mod storage;


pub use crate::storage::{CampaignConfig, Listing, RegistryError, MAX_PAGE_LIMIT};
use crate::storage::{DataKey, TTL_INSTANCE, TTL_PERSISTENT};

/// The part of a launchpad campaign the registry drives and reads.
#[contractclient(name = "CampaignClient")]
pub trait CampaignInterface {
    fn initialize(
        env: Env,
        creator: Address,
        owner: Address,
        token: Address,
        payment_token: Address,
        config: CampaignConfig,
    );
    fn creator(env: Env) -> Address;
    fn owner(env: Env) -> Address;
    fn token(env: Env) -> Address;
    fn is_settled(env: Env) -> bool;
}

#[contract]
pub struct LaunchpadRegistry;

#[contractimpl]
impl LaunchpadRegistry {
    /// `admin` is the platform account every listed campaign must name as its
    /// creator. `listing_fee` is charged in `payment_token` on registration.
    pub fn initialize(
        env: Env,
        admin: Address,
        payment_token: Address,
        listing_fee: i128,
    ) -> Result<(), RegistryError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(RegistryError::AlreadyInitialized);
        }
        if listing_fee < 0 {
            return Err(RegistryError::InvalidFee);
        }

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::PaymentToken, &payment_token);
        env.storage().instance().set(&DataKey::ListingFee, &listing_fee);
        env.storage().instance().set(&DataKey::ListingCount, &0u32);
        extend_instance(&env);
        Ok(())
    }

    /// Deploy a campaign from the stored wasm at `campaign_address(salt)` and
    /// initialize it with this platform as creator. The owner's supply moves
    /// into the new campaign in the same call.
    pub fn deploy(
        env: Env,
        owner: Address,
        salt: BytesN<32>,
        token: Address,
        payment_token: Address,
        config: CampaignConfig,
    ) -> Result<Address, RegistryError> {
        owner.require_auth();
        let admin = get_admin(&env)?;
        ensure_token_free(&env, &token)?;

        let wasm_hash: BytesN<32> = env
            .storage()
            .instance()
            .get(&DataKey::CampaignWasm)
            .ok_or(RegistryError::WasmNotSet)?;

        let campaign = env
            .deployer()
            .with_current_contract(salt)
            .deploy_v2(wasm_hash, ());
        CampaignClient::new(&env, &campaign).initialize(
            &admin,
            &owner,
            &token,
            &payment_token,
            &config,
        );

        log!(&env, "campaign deployed", campaign.clone());
        events::emit_deployed(
            &env,
            events::DeployedEvent {
                owner,
                token,
                campaign: campaign.clone(),
            },
        );

        Ok(campaign)
    }

    /// List the campaign this registry deployed under `salt`. A token keeps at
    /// most one active campaign; it can be listed again once the previous one
    /// is settled.
    pub fn register(env: Env, owner: Address, salt: BytesN<32>) -> Result<u32, RegistryError> {
        owner.require_auth();
        let admin = get_admin(&env)?;

        // Only addresses derived from this contract can hold code it deployed.
        let campaign = env.deployer().with_current_contract(salt).deployed_address();
        let campaign_client = CampaignClient::new(&env, &campaign);
        if campaign_client.owner() != owner || campaign_client.creator() != admin {
            return Err(RegistryError::CampaignMismatch);
        }

        let token = campaign_client.token();
        ensure_token_free(&env, &token)?;

        let fee: i128 = env.storage().instance().get(&DataKey::ListingFee).unwrap_or(0);
        if fee > 0 {
            let payment_token: Address = env
                .storage()
                .instance()
                .get(&DataKey::PaymentToken)
                .ok_or(RegistryError::NotInitialized)?;
            token::Client::new(&env, &payment_token).transfer(&owner, &admin, &fee);
        }

        let id: u32 = env.storage().instance().get(&DataKey::ListingCount).unwrap_or(0);
        let listing = Listing {
            token: token.clone(),
            campaign: campaign.clone(),
            owner: owner.clone(),
            listed_at: env.ledger().timestamp(),
        };

        let token_key = DataKey::ContractOf(token.clone());
        env.storage().persistent().set(&token_key, &campaign);
        env.storage().persistent().set(&DataKey::Listing(id), &listing);
        env.storage().instance().set(&DataKey::ListingCount, &(id + 1));
        extend_persistent(&env, &token_key);
        extend_persistent(&env, &DataKey::Listing(id));
        extend_instance(&env);

        log!(&env, "campaign listed", id, campaign.clone());
        events::emit_registered(
            &env,
            token,
            events::RegisteredEvent {
                id,
                owner,
                campaign,
                fee,
            },
        );

        Ok(id)
    }

    /// Address `deploy` uses for `salt`.
    pub fn campaign_address(env: Env, salt: BytesN<32>) -> Address {
        env.deployer().with_current_contract(salt).deployed_address()
    }

    pub fn set_campaign_wasm(env: Env, wasm_hash: BytesN<32>) -> Result<(), RegistryError> {
        let admin = get_admin(&env)?;
        admin.require_auth();

        env.storage().instance().set(&DataKey::CampaignWasm, &wasm_hash);
        extend_instance(&env);
        Ok(())
    }

    pub fn campaign_wasm(env: Env) -> Option<BytesN<32>> {
        env.storage().instance().get(&DataKey::CampaignWasm)
    }

    /// Campaign currently listed for `token`, if any.
    pub fn contract_of(env: Env, token: Address) -> Option<Address> {
        env.storage().persistent().get(&DataKey::ContractOf(token))
    }

    pub fn campaign_count(env: Env) -> u32 {
        env.storage().instance().get(&DataKey::ListingCount).unwrap_or(0)
    }

    /// Return a page of listings. Limit capped at MAX_PAGE_LIMIT.
    pub fn campaigns(env: Env, start: u32, limit: u32) -> (Vec<Listing>, Option<u32>) {
        let count = Self::campaign_count(env.clone());

        let effective_limit = if limit == 0 || limit > MAX_PAGE_LIMIT {
            MAX_PAGE_LIMIT
        } else {
            limit
        };

        if start >= count {
            return (Vec::new(&env), None);
        }

        let end = core::cmp::min(start + effective_limit, count);
        let mut results = Vec::new(&env);
        for id in start..end {
            if let Some(listing) = env.storage().persistent().get(&DataKey::Listing(id)) {
                results.push_back(listing);
            }
        }

        let next_cursor = if end < count { Some(end) } else { None };
        (results, next_cursor)
    }

    pub fn listing_fee(env: Env) -> i128 {
        env.storage().instance().get(&DataKey::ListingFee).unwrap_or(0)
    }

    pub fn set_listing_fee(env: Env, fee: i128) -> Result<(), RegistryError> {
        let admin = get_admin(&env)?;
        admin.require_auth();

        if fee < 0 {
            return Err(RegistryError::InvalidFee);
        }
        env.storage().instance().set(&DataKey::ListingFee, &fee);
        extend_instance(&env);
        Ok(())
    }

    pub fn admin(env: Env) -> Result<Address, RegistryError> {
        get_admin(&env)
    }
}

fn get_admin(env: &Env) -> Result<Address, RegistryError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(RegistryError::NotInitialized)
}

fn ensure_token_free(env: &Env, token: &Address) -> Result<(), RegistryError> {
    let current: Option<Address> = env
        .storage()
        .persistent()
        .get(&DataKey::ContractOf(token.clone()));
    match current {
        Some(campaign) if !CampaignClient::new(env, &campaign).is_settled() => {
            Err(RegistryError::TokenAlreadyListed)
        }
        _ => Ok(()),
    }
}

fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}
