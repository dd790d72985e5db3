use soroban_sdk::{contracterror, contracttype, Address};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Campaign,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    /// Cumulative amount contributed by an address.
    Contribution(Address),
    /// Contributor at a position of the first-contribution order.
    Contributor(u32),
    /// Payout `send` could not deliver, waiting for `claim`.
    Unclaimed(Address),
}

/// Sale outcome. Leaves `Open` exactly once and never changes afterwards.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Status {
    Open,
    Success,
    Fail,
    Cancel,
}

/// Immutable sale parameters supplied by the project owner.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct LaunchpadConfig {
    pub token_supply: i128,
    pub soft_cap: i128,
    pub hard_cap: i128,
    pub min_buy: i128,  // Per transaction, in payment token units
    pub max_buy: i128,  // Per transaction, in payment token units
    pub start_date: u64,
    pub end_date: u64,
    pub burn: bool,     // Burn the undistributed remainder instead of returning it
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub creator: Address,       // Platform account, receives the fee
    pub owner: Address,         // Project account, receives net proceeds
    pub token: Address,         // Project token being sold
    pub payment_token: Address, // Token contributions are paid in (native XLM asset)
    pub config: LaunchpadConfig,
    pub raised: i128,
    pub status: Status,
    pub contributor_count: u32,
    pub cursor: u32,
    pub distributed: i128,
    pub settled: bool,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LaunchpadError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidConfig = 3,
    OutOfBounds = 4,
    CapExceeded = 5,
    WindowClosed = 6,
    SaleActive = 7,
    AlreadyFinalized = 8,
    NotFinalized = 9,
    DistributionPending = 10,
    AlreadySettled = 11,
    Unauthorized = 12,
    InvalidIndex = 13,
    ArithmeticError = 14,
    NothingToClaim = 15,
}

// Constants
pub const SEND_BATCH_SIZE: u32 = 20; // Contributors per `send`, sized to the per-call ledger entry limit
pub const FEE_DIVISOR: i128 = 20; // 5% platform fee
pub const SCALE: i128 = 1_000_000_000_000_000_000; // 10^18, entitlement rate precision
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
