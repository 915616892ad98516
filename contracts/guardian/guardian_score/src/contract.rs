#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

use cosmwasm_std::{
    attr, to_json_binary, Addr, Binary, Deps, DepsMut, Env, HexBinary, MessageInfo, Response,
    StdError, StdResult,
};
use cw2::{get_contract_version, set_contract_version};
use guardian::{
    derive_policy, derive_policy_raw, is_valid_score, AddAuthorizedScorerEvent, Event, Grade,
    RejectedEvent, SetGuardianScoreEvent, SetPauseStateEvent, LAUNCH_MIN_SCORE, MAX_SCORE,
    PROJECT_ID_LEN, RED_POLICY,
};
use serde::Serialize;

use crate::error::ContractError;
use crate::msg::{
    AddAuthorizedScorerResponse, CanLaunchIdoResponse, ContractInfoResponse, ExecuteMsg,
    GuardianScoreResponse, InstantiateMsg, IsAuthorizedScorerResponse, MigrateMsg,
    PolicyResponse, ProjectScoresResponse, QueryMsg, RecommendedConfigResponse,
    SetGuardianScoreResponse, SetPauseStateResponse,
};
use crate::scorers::{add_authorized_scorer, ensure_owner, is_authorized_scorer};
use crate::scores::{list, load_active, upsert};
use crate::state::{
    Config, ProjectScore, CONFIG, MAX_AUTHORIZED_SCORERS, MAX_PROJECTS, SCORERS, SCORE_COUNT,
};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:guardian-score";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let config = Config {
        owner: info.sender.clone(),
        is_paused: false,
    };
    CONFIG.save(deps.storage, &config)?;
    SCORERS.save(deps.storage, &vec![info.sender.clone()])?;
    // no slot allocated yet, so every slot reads as inactive
    SCORE_COUNT.save(deps.storage, &0)?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attributes(vec![
        attr("action", "instantiate"),
        attr("owner", info.sender),
    ]))
}

// Rejections come back as a normal response carrying the zeroed output
// record; only host faults are returned as errors.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetGuardianScore {
            project_id,
            score,
            grade,
        } => settle(
            "set_guardian_score",
            &info.sender,
            try_set_guardian_score(deps, &env, &info, project_id, score, grade),
            &SetGuardianScoreResponse::default(),
        ),
        ExecuteMsg::AddAuthorizedScorer { scorer_address } => settle(
            "add_authorized_scorer",
            &info.sender,
            try_add_authorized_scorer(deps, &info, scorer_address),
            &AddAuthorizedScorerResponse::default(),
        ),
        ExecuteMsg::SetPauseState { paused } => {
            let current = CONFIG.load(deps.storage)?.is_paused;
            settle(
                "set_pause_state",
                &info.sender,
                try_set_pause_state(deps, &info, paused),
                &SetPauseStateResponse {
                    success: false,
                    new_state: current,
                },
            )
        }
    }
}

fn settle<T: Serialize>(
    action: &str,
    sender: &Addr,
    result: Result<Response, ContractError>,
    rejected: &T,
) -> Result<Response, ContractError> {
    match result {
        Err(ContractError::Std(err)) => Err(ContractError::Std(err)),
        Err(err) => {
            let mut rsp = Response::new().set_data(to_json_binary(rejected)?);
            RejectedEvent {
                action,
                sender: sender.as_str(),
                reason: err.reason(),
            }
            .add_attributes(&mut rsp);
            Ok(rsp)
        }
        Ok(rsp) => Ok(rsp),
    }
}

pub fn try_set_guardian_score(
    deps: DepsMut,
    env: &Env,
    info: &MessageInfo,
    project_id: HexBinary,
    score: u8,
    grade: u8,
) -> Result<Response, ContractError> {
    if !is_authorized_scorer(deps.storage, &info.sender)? {
        return Err(ContractError::Unauthorized {});
    }

    if CONFIG.load(deps.storage)?.is_paused {
        return Err(ContractError::Paused {});
    }

    if !is_valid_score(score) {
        return Err(ContractError::InvalidInput {
            reason: format!("score {} is above {}", score, MAX_SCORE),
        });
    }
    let grade = Grade::from_u8(grade).ok_or_else(|| ContractError::InvalidInput {
        reason: format!("unknown grade {}", grade),
    })?;
    if project_id.len() != PROJECT_ID_LEN {
        return Err(ContractError::InvalidInput {
            reason: format!(
                "project id must be {} bytes, got {}",
                PROJECT_ID_LEN,
                project_id.len()
            ),
        });
    }

    let timestamp = env.block.height;
    let record = ProjectScore::new(project_id, score, grade, timestamp);
    let index = upsert(deps.storage, &record)?;

    let mut rsp = Response::new().set_data(to_json_binary(&SetGuardianScoreResponse {
        success: true,
        index,
    })?);
    SetGuardianScoreEvent {
        sender: info.sender.as_str(),
        project_id: &record.project_id.to_hex(),
        score,
        grade: grade.as_u8(),
        index,
        timestamp,
    }
    .add_attributes(&mut rsp);
    Ok(rsp)
}

pub fn try_add_authorized_scorer(
    deps: DepsMut,
    info: &MessageInfo,
    scorer_address: Addr,
) -> Result<Response, ContractError> {
    add_authorized_scorer(deps.storage, &info.sender, scorer_address.clone())?;

    let mut rsp = Response::new().set_data(to_json_binary(&AddAuthorizedScorerResponse {
        success: true,
    })?);
    AddAuthorizedScorerEvent {
        sender: info.sender.as_str(),
        scorer: scorer_address.as_str(),
    }
    .add_attributes(&mut rsp);
    Ok(rsp)
}

pub fn try_set_pause_state(
    deps: DepsMut,
    info: &MessageInfo,
    paused: bool,
) -> Result<Response, ContractError> {
    let mut config = ensure_owner(deps.storage, &info.sender)?;
    config.is_paused = paused;
    CONFIG.save(deps.storage, &config)?;

    let mut rsp = Response::new().set_data(to_json_binary(&SetPauseStateResponse {
        success: true,
        new_state: config.is_paused,
    })?);
    SetPauseStateEvent {
        sender: info.sender.as_str(),
        paused: config.is_paused,
    }
    .add_attributes(&mut rsp);
    Ok(rsp)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetGuardianScore { project_id } => {
            to_json_binary(&query_guardian_score(deps, project_id)?)
        }
        QueryMsg::CanLaunchIdo { project_id } => {
            to_json_binary(&query_can_launch_ido(deps, project_id)?)
        }
        QueryMsg::GetRecommendedConfig { project_id } => {
            to_json_binary(&query_recommended_config(deps, project_id)?)
        }
        QueryMsg::GetContractInfo {} => to_json_binary(&query_contract_info(deps)?),
        QueryMsg::IsAuthorizedScorer { address } => {
            to_json_binary(&IsAuthorizedScorerResponse {
                authorized: is_authorized_scorer(deps.storage, &address)?,
            })
        }
        QueryMsg::GetProjectScores { offset, limit } => {
            to_json_binary(&query_project_scores(deps, offset, limit)?)
        }
        QueryMsg::GetPolicy { grade, score } => to_json_binary(&query_policy(grade, score)),
    }
}

fn lookup(deps: Deps, project_id: &HexBinary) -> StdResult<Option<ProjectScore>> {
    match load_active(deps.storage, project_id.as_slice()) {
        Ok((_, record)) => Ok(Some(record)),
        Err(ContractError::NotFound {}) => Ok(None),
        Err(ContractError::Std(err)) => Err(err),
        Err(err) => Err(StdError::generic_err(err.to_string())),
    }
}

pub fn query_guardian_score(deps: Deps, project_id: HexBinary) -> StdResult<GuardianScoreResponse> {
    Ok(lookup(deps, &project_id)?
        .map(|record| record.to_score_response())
        .unwrap_or_default())
}

/// Clears a project on its stored score alone; the stored grade is reported
/// but not consulted.
pub fn query_can_launch_ido(deps: Deps, project_id: HexBinary) -> StdResult<CanLaunchIdoResponse> {
    Ok(match lookup(deps, &project_id)? {
        Some(record) => CanLaunchIdoResponse {
            can_launch: record.score >= LAUNCH_MIN_SCORE,
            score: record.score,
            grade: record.grade.as_u8(),
        },
        None => CanLaunchIdoResponse::default(),
    })
}

pub fn query_recommended_config(
    deps: Deps,
    project_id: HexBinary,
) -> StdResult<RecommendedConfigResponse> {
    Ok(lookup(deps, &project_id)?
        .map(|record| record.to_config_response())
        .unwrap_or_default())
}

pub fn query_contract_info(deps: Deps) -> StdResult<ContractInfoResponse> {
    let Config { owner, is_paused } = CONFIG.load(deps.storage)?;
    Ok(ContractInfoResponse {
        owner,
        is_paused,
        score_count: SCORE_COUNT.load(deps.storage)?,
        max_projects: MAX_PROJECTS,
        scorers: SCORERS.load(deps.storage)?,
        max_authorized_scorers: MAX_AUTHORIZED_SCORERS,
    })
}

fn query_project_scores(
    deps: Deps,
    offset: Option<u32>,
    limit: Option<u8>,
) -> StdResult<ProjectScoresResponse> {
    let scores = list(deps.storage, offset, limit)?
        .iter()
        .map(|(index, record)| record.to_entry(*index))
        .collect();
    Ok(ProjectScoresResponse { scores })
}

fn query_policy(grade: Option<u8>, score: Option<u8>) -> PolicyResponse {
    let (grade, policy) = match (grade, score) {
        (Some(raw), _) => {
            let grade = Grade::from_u8(raw).unwrap_or(Grade::Red);
            (grade, derive_policy_raw(raw))
        }
        (None, Some(score)) => {
            let grade = Grade::for_score(score);
            (grade, derive_policy(grade))
        }
        (None, None) => (Grade::Red, RED_POLICY),
    };
    PolicyResponse {
        grade: grade.as_u8(),
        cap_min: policy.cap_min,
        cap_max: policy.cap_max,
        fee_tier_bps: policy.fee_tier_bps,
        access_tier: policy.access_tier.as_u8(),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let previous = get_contract_version(deps.storage)?;
    if previous.contract != CONTRACT_NAME {
        return Err(ContractError::CannotMigrate {
            previous_contract: previous.contract,
        });
    }

    // once we have "migrated", set the new version and return success
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attributes(vec![
        attr("action", "migrate"),
        attr("new_contract_name", CONTRACT_NAME),
        attr("new_contract_version", CONTRACT_VERSION),
    ]))
}
