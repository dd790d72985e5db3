use soroban_sdk::{contracttype, token, Env};

use crate::storage_types::{Campaign, LaunchpadError, Status, FEE_DIVISOR};

/// Amounts moved by `withdraw`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Settlement {
    pub fee: i128,            // Payment token to the creator
    pub proceeds: i128,       // Payment token to the owner
    pub token_returned: i128, // Project token back to the owner
    pub token_burned: i128,
}

/// Splits the raised amount into the platform fee and the owner's share.
/// The two parts always add back up to `raised`.
pub fn split_fee(raised: i128) -> (i128, i128) {
    let fee = raised / FEE_DIVISOR;
    (fee, raised - fee)
}

/// Releases the pooled funds once every contributor has been processed.
pub fn settle(e: &Env, campaign: &mut Campaign) -> Result<Settlement, LaunchpadError> {
    let outcome = campaign.outcome()?;
    if campaign.settled {
        return Err(LaunchpadError::AlreadySettled);
    }
    if !campaign.is_drained() {
        return Err(LaunchpadError::DistributionPending);
    }

    let escrow = e.current_contract_address();
    let token_client = token::Client::new(e, &campaign.token);

    let settlement = match outcome {
        Status::Success => {
            let (fee, proceeds) = split_fee(campaign.raised);
            let payment_client = token::Client::new(e, &campaign.payment_token);
            if fee > 0 {
                payment_client.transfer(&escrow, &campaign.creator, &fee);
            }
            if proceeds > 0 {
                payment_client.transfer(&escrow, &campaign.owner, &proceeds);
            }

            let remainder = campaign
                .config
                .token_supply
                .checked_sub(campaign.distributed)
                .ok_or(LaunchpadError::ArithmeticError)?;
            let (token_returned, token_burned) = if remainder <= 0 {
                (0, 0)
            } else if campaign.config.burn {
                token_client.burn(&escrow, &remainder);
                (0, remainder)
            } else {
                token_client.transfer(&escrow, &campaign.owner, &remainder);
                (remainder, 0)
            };

            Settlement {
                fee,
                proceeds,
                token_returned,
                token_burned,
            }
        }
        _ => {
            // Contributors were refunded in full by `send`; only the escrowed
            // supply is left to hand back.
            let supply = campaign.config.token_supply;
            token_client.transfer(&escrow, &campaign.owner, &supply);
            Settlement {
                fee: 0,
                proceeds: 0,
                token_returned: supply,
                token_burned: 0,
            }
        }
    };

    campaign.settled = true;
    Ok(settlement)
}
