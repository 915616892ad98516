use cosmwasm_std::{Addr, StdResult, Storage};

use crate::error::ContractError;
use crate::state::{Config, CONFIG, MAX_AUTHORIZED_SCORERS, SCORERS};

pub fn is_authorized_scorer(storage: &dyn Storage, identity: &Addr) -> StdResult<bool> {
    let scorers = SCORERS.load(storage)?;
    Ok(scorers.iter().any(|scorer| scorer.eq(identity)))
}

/// Owner check. Scorer membership plays no part in it.
pub fn ensure_owner(storage: &dyn Storage, caller: &Addr) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    if !config.owner.eq(caller) {
        return Err(ContractError::Unauthorized {});
    }
    Ok(config)
}

/// Appends `identity` to the scorer list and returns its position.
pub fn add_authorized_scorer(
    storage: &mut dyn Storage,
    caller: &Addr,
    identity: Addr,
) -> Result<u32, ContractError> {
    ensure_owner(storage, caller)?;

    let mut scorers = SCORERS.load(storage)?;
    if scorers.len() as u32 >= MAX_AUTHORIZED_SCORERS {
        return Err(ContractError::CapacityExceeded {
            what: "authorized scorers".to_string(),
            limit: MAX_AUTHORIZED_SCORERS,
        });
    }
    if scorers.contains(&identity) {
        return Err(ContractError::AlreadyAuthorized {
            scorer: identity.to_string(),
        });
    }

    scorers.push(identity);
    SCORERS.save(storage, &scorers)?;
    Ok(scorers.len() as u32 - 1)
}
