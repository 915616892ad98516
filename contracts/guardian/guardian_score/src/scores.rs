use cosmwasm_std::{Order, StdResult, Storage};
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::state::{ProjectScore, MAX_PROJECTS, SCORES, SCORE_COUNT};

// settings for pagination
const MAX_LIMIT: u8 = 50;
const DEFAULT_LIMIT: u8 = 20;

/// Slot of the first active record for `project_id`, scanning slots in
/// ascending order.
pub fn find_index(storage: &dyn Storage, project_id: &[u8]) -> StdResult<Option<u32>> {
    let count = SCORE_COUNT.load(storage)?;
    for item in SCORES.range(
        storage,
        None,
        Some(Bound::exclusive(count)),
        Order::Ascending,
    ) {
        let (index, record) = item?;
        if record.is_active && record.project_id.as_slice() == project_id {
            return Ok(Some(index));
        }
    }
    Ok(None)
}

pub fn load_active(
    storage: &dyn Storage,
    project_id: &[u8],
) -> Result<(u32, ProjectScore), ContractError> {
    let index = find_index(storage, project_id)?.ok_or(ContractError::NotFound {})?;
    let record = SCORES.load(storage, index)?;
    Ok((index, record))
}

/// Writes `record` in place when its project already holds a slot, otherwise
/// into the next free slot. Nothing is written when the store is full.
pub fn upsert(storage: &mut dyn Storage, record: &ProjectScore) -> Result<u32, ContractError> {
    let index = match find_index(storage, record.project_id.as_slice())? {
        Some(index) => index,
        None => {
            let count = SCORE_COUNT.load(storage)?;
            if count >= MAX_PROJECTS {
                return Err(ContractError::CapacityExceeded {
                    what: "projects".to_string(),
                    limit: MAX_PROJECTS,
                });
            }
            SCORE_COUNT.save(storage, &(count + 1))?;
            count
        }
    };

    SCORES.save(storage, index, record)?;
    Ok(index)
}

/// Active records after slot `offset`, in slot order.
pub fn list(
    storage: &dyn Storage,
    offset: Option<u32>,
    limit: Option<u8>,
) -> StdResult<Vec<(u32, ProjectScore)>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = offset.map(Bound::exclusive);

    SCORES
        .range(storage, start, None, Order::Ascending)
        .filter(|item| match item {
            Ok((_, record)) => record.is_active,
            Err(_) => true,
        })
        .take(limit)
        .collect()
}
