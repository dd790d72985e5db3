use soroban_sdk::Address;

use crate::storage_types::{Campaign, LaunchpadConfig, LaunchpadError, Status, SCALE};

impl LaunchpadConfig {
    /// Checks the cap, bound and window ordering, and that the widest
    /// intermediate of the entitlement formula fits in an `i128`.
    pub fn validate(&self) -> Result<(), LaunchpadError> {
        if self.token_supply <= 0 || self.soft_cap <= 0 || self.min_buy <= 0 {
            return Err(LaunchpadError::InvalidConfig);
        }
        if self.soft_cap > self.hard_cap
            || self.min_buy > self.max_buy
            || self.max_buy > self.hard_cap
            || self.start_date >= self.end_date
        {
            return Err(LaunchpadError::InvalidConfig);
        }
        if self.token_supply.checked_mul(SCALE).is_none() {
            return Err(LaunchpadError::InvalidConfig);
        }
        Ok(())
    }
}

impl Status {
    pub fn is_terminal(self) -> bool {
        self != Status::Open
    }
}

impl Campaign {
    pub fn new(
        creator: Address,
        owner: Address,
        token: Address,
        payment_token: Address,
        config: LaunchpadConfig,
    ) -> Self {
        Campaign {
            creator,
            owner,
            token,
            payment_token,
            config,
            raised: 0,
            status: Status::Open,
            contributor_count: 0,
            cursor: 0,
            distributed: 0,
            settled: false,
        }
    }

    /// True while contributions may be accepted at `now`.
    pub fn is_live(&self, now: u64) -> bool {
        self.status == Status::Open && now >= self.config.start_date && now <= self.config.end_date
    }

    /// Leaves `Open` for `Success` or `Fail` once the window has ended or the
    /// hard cap is reached.
    pub fn finalize(&mut self, now: u64) -> Result<Status, LaunchpadError> {
        self.ensure_open()?;
        if now <= self.config.end_date && self.raised < self.config.hard_cap {
            return Err(LaunchpadError::SaleActive);
        }

        let outcome = if self.raised >= self.config.soft_cap {
            Status::Success
        } else {
            Status::Fail
        };
        self.status = outcome;
        Ok(outcome)
    }

    /// Owner-only abort, valid only before finalization.
    pub fn cancel(&mut self, caller: &Address) -> Result<(), LaunchpadError> {
        if *caller != self.owner {
            return Err(LaunchpadError::Unauthorized);
        }
        self.ensure_open()?;
        self.status = Status::Cancel;
        Ok(())
    }

    /// Returns the terminal status, or `NotFinalized` while the sale is open.
    pub fn outcome(&self) -> Result<Status, LaunchpadError> {
        if !self.status.is_terminal() {
            return Err(LaunchpadError::NotFinalized);
        }
        Ok(self.status)
    }

    pub fn is_drained(&self) -> bool {
        self.cursor >= self.contributor_count
    }

    pub fn pending(&self) -> u32 {
        self.contributor_count.saturating_sub(self.cursor)
    }

    fn ensure_open(&self) -> Result<(), LaunchpadError> {
        if self.status.is_terminal() {
            return Err(LaunchpadError::AlreadyFinalized);
        }
        Ok(())
    }
}
