use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use guardian::{
    AddAuthorizedScorerResponse, CanLaunchIdoResponse, ContractInfoResponse,
    GuardianScoreResponse, IsAuthorizedScorerResponse, PolicyResponse, ProjectScoreEntry,
    ProjectScoresResponse, RecommendedConfigResponse, SetGuardianScoreResponse,
    SetPauseStateResponse,
};

pub type ExecuteMsg = guardian::GuardianExecuteMsg;
pub type QueryMsg = guardian::GuardianQueryMsg;

/// The deployer becomes owner and first authorized scorer.
#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct InstantiateMsg {}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct MigrateMsg {}
