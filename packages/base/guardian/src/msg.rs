use cosmwasm_schema::QueryResponses;
use cosmwasm_std::{Addr, HexBinary};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Byte length of a project identifier.
pub const PROJECT_ID_LEN: usize = 32;

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
#[serde(rename_all = "snake_case")]
pub enum GuardianExecuteMsg {
    /// Create or update the score of a project. Authorized scorers only.
    SetGuardianScore {
        project_id: HexBinary,
        score: u8,
        grade: u8,
    },
    /// Owner only.
    AddAuthorizedScorer { scorer_address: Addr },
    /// Owner only. Pausing blocks score writes, never admin calls.
    SetPauseState { paused: bool },
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug, QueryResponses)]
#[serde(rename_all = "snake_case")]
pub enum GuardianQueryMsg {
    #[returns(GuardianScoreResponse)]
    GetGuardianScore { project_id: HexBinary },
    #[returns(CanLaunchIdoResponse)]
    CanLaunchIdo { project_id: HexBinary },
    #[returns(RecommendedConfigResponse)]
    GetRecommendedConfig { project_id: HexBinary },
    #[returns(ContractInfoResponse)]
    GetContractInfo {},
    #[returns(IsAuthorizedScorerResponse)]
    IsAuthorizedScorer { address: Addr },
    #[returns(ProjectScoresResponse)]
    GetProjectScores {
        offset: Option<u32>,
        limit: Option<u8>,
    },
    /// Preview the policy row for a raw grade, or for the conventional grade
    /// of a score when no grade is given.
    #[returns(PolicyResponse)]
    GetPolicy {
        grade: Option<u8>,
        score: Option<u8>,
    },
}

// Every output record below has a zeroed default, which is what a rejected
// or not-found call reports.

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug, Default)]
pub struct SetGuardianScoreResponse {
    pub success: bool,
    pub index: u32,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug, Default)]
pub struct AddAuthorizedScorerResponse {
    pub success: bool,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug, Default)]
pub struct SetPauseStateResponse {
    pub success: bool,
    pub new_state: bool,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug, Default)]
pub struct GuardianScoreResponse {
    pub found: bool,
    pub score: u8,
    pub grade: u8,
    pub timestamp: u64,
    pub cap_min: u16,
    pub cap_max: u16,
    pub fee_tier_bps: u16,
    pub access_tier: u8,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug, Default)]
pub struct CanLaunchIdoResponse {
    pub can_launch: bool,
    pub score: u8,
    pub grade: u8,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug, Default)]
pub struct RecommendedConfigResponse {
    pub found: bool,
    pub cap_min: u16,
    pub cap_max: u16,
    pub fee_tier_bps: u16,
    pub access_tier: u8,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct ContractInfoResponse {
    pub owner: Addr,
    pub is_paused: bool,
    pub score_count: u32,
    pub max_projects: u32,
    pub scorers: Vec<Addr>,
    pub max_authorized_scorers: u32,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct IsAuthorizedScorerResponse {
    pub authorized: bool,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct ProjectScoreEntry {
    pub index: u32,
    pub project_id: HexBinary,
    pub score: u8,
    pub grade: u8,
    pub timestamp: u64,
    pub cap_min: u16,
    pub cap_max: u16,
    pub fee_tier_bps: u16,
    pub access_tier: u8,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct ProjectScoresResponse {
    pub scores: Vec<ProjectScoreEntry>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct PolicyResponse {
    pub grade: u8,
    pub cap_min: u16,
    pub cap_max: u16,
    pub fee_tier_bps: u16,
    pub access_tier: u8,
}
