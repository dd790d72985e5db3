use soroban_sdk::{contracterror, contracttype, Address};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    PaymentToken,
    CampaignWasm,
    ListingFee,
    ListingCount,
    ContractOf(Address), // Token -> Campaign
    Listing(u32),
}

/// A campaign entry in the registry, in listing order.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Listing {
    pub token: Address,
    pub campaign: Address,
    pub owner: Address,
    pub listed_at: u64,
}

/// Sale parameters forwarded to a freshly deployed campaign. Same layout as
/// the campaign's own config type.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    pub token_supply: i128,
    pub soft_cap: i128,
    pub hard_cap: i128,
    pub min_buy: i128,
    pub max_buy: i128,
    pub start_date: u64,
    pub end_date: u64,
    pub burn: bool,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidFee = 3,
    CampaignMismatch = 4,
    TokenAlreadyListed = 5,
    WasmNotSet = 6,
}

pub const MAX_PAGE_LIMIT: u32 = 20;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
