use cosmwasm_std::{Addr, HexBinary};
use cw_storage_plus::{Item, Map};
use guardian::{
    derive_policy, AccessTier, Grade, GuardianScoreResponse, ProjectScoreEntry,
    RecommendedConfigResponse,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const MAX_PROJECTS: u32 = 100;
pub const MAX_AUTHORIZED_SCORERS: u32 = 10;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    /// Deployer. Fixed at instantiation, there is no transfer.
    pub owner: Addr,
    pub is_paused: bool,
}

/// One slot of the score store.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ProjectScore {
    pub project_id: HexBinary,
    pub score: u8,
    pub grade: Grade,
    /// Block height of the last write.
    pub timestamp: u64,
    pub cap_min: u16,
    pub cap_max: u16,
    pub fee_tier_bps: u16,
    pub access_tier: AccessTier,
    pub is_active: bool,
}

impl ProjectScore {
    /// Builds an active record, deriving the launch policy from `grade`.
    pub fn new(project_id: HexBinary, score: u8, grade: Grade, timestamp: u64) -> Self {
        let policy = derive_policy(grade);
        ProjectScore {
            project_id,
            score,
            grade,
            timestamp,
            cap_min: policy.cap_min,
            cap_max: policy.cap_max,
            fee_tier_bps: policy.fee_tier_bps,
            access_tier: policy.access_tier,
            is_active: true,
        }
    }

    pub fn to_score_response(&self) -> GuardianScoreResponse {
        GuardianScoreResponse {
            found: true,
            score: self.score,
            grade: self.grade.as_u8(),
            timestamp: self.timestamp,
            cap_min: self.cap_min,
            cap_max: self.cap_max,
            fee_tier_bps: self.fee_tier_bps,
            access_tier: self.access_tier.as_u8(),
        }
    }

    pub fn to_config_response(&self) -> RecommendedConfigResponse {
        RecommendedConfigResponse {
            found: true,
            cap_min: self.cap_min,
            cap_max: self.cap_max,
            fee_tier_bps: self.fee_tier_bps,
            access_tier: self.access_tier.as_u8(),
        }
    }

    pub fn to_entry(&self, index: u32) -> ProjectScoreEntry {
        ProjectScoreEntry {
            index,
            project_id: self.project_id.clone(),
            score: self.score,
            grade: self.grade.as_u8(),
            timestamp: self.timestamp,
            cap_min: self.cap_min,
            cap_max: self.cap_max,
            fee_tier_bps: self.fee_tier_bps,
            access_tier: self.access_tier.as_u8(),
        }
    }
}

pub const CONFIG_KEY: &str = "config";
pub const CONFIG: Item<Config> = Item::new(CONFIG_KEY);

pub const SCORERS_KEY: &str = "authorized_scorers";
// ordered, append-only
pub const SCORERS: Item<Vec<Addr>> = Item::new(SCORERS_KEY);

pub const SCORE_COUNT_KEY: &str = "score_count";
// slots ever allocated, never decreases
pub const SCORE_COUNT: Item<u32> = Item::new(SCORE_COUNT_KEY);

pub const SCORES_PREFIX: &str = "scores";
// key: slot index
pub const SCORES: Map<u32, ProjectScore> = Map::new(SCORES_PREFIX);
