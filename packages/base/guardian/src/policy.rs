use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const MIN_SCORE: u8 = 0;
pub const MAX_SCORE: u8 = 100;

/// Minimum stored score that clears a project for a token sale.
pub const LAUNCH_MIN_SCORE: u8 = 60;
/// Conventional lower bound of the green band, used for policy previews only.
pub const GREEN_MIN_SCORE: u8 = 80;

/// Coarse risk bucket driving policy derivation.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Red = 0,
    Yellow = 1,
    Green = 2,
}

impl Grade {
    /// Strict decoding of a wire grade. Unknown values yield `None`.
    pub fn from_u8(raw: u8) -> Option<Grade> {
        match raw {
            0 => Some(Grade::Red),
            1 => Some(Grade::Yellow),
            2 => Some(Grade::Green),
            _ => None,
        }
    }

    /// Grade that the off-chain scorer conventionally assigns to `score`.
    ///
    /// Advisory only: the registry never cross-checks a supplied grade
    /// against the supplied score.
    pub fn for_score(score: u8) -> Grade {
        if score >= GREEN_MIN_SCORE {
            Grade::Green
        } else if score >= LAUNCH_MIN_SCORE {
            Grade::Yellow
        } else {
            Grade::Red
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Investor-eligibility class derived from the grade.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AccessTier {
    Accredited = 0,
    MidTier = 1,
    Public = 2,
}

impl AccessTier {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Launch parameters recommended for a grade. Caps are in thousands of the
/// native token.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
pub struct LaunchPolicy {
    pub cap_min: u16,
    pub cap_max: u16,
    pub fee_tier_bps: u16,
    pub access_tier: AccessTier,
}

pub const GREEN_POLICY: LaunchPolicy = LaunchPolicy {
    cap_min: 100,
    cap_max: 500,
    fee_tier_bps: 250,
    access_tier: AccessTier::Public,
};

pub const YELLOW_POLICY: LaunchPolicy = LaunchPolicy {
    cap_min: 50,
    cap_max: 200,
    fee_tier_bps: 400,
    access_tier: AccessTier::MidTier,
};

pub const RED_POLICY: LaunchPolicy = LaunchPolicy {
    cap_min: 10,
    cap_max: 50,
    fee_tier_bps: 600,
    access_tier: AccessTier::Accredited,
};

pub fn derive_policy(grade: Grade) -> LaunchPolicy {
    match grade {
        Grade::Green => GREEN_POLICY,
        Grade::Yellow => YELLOW_POLICY,
        Grade::Red => RED_POLICY,
    }
}

/// Same table keyed by a raw wire value; anything unknown falls back to the
/// most restrictive (red) policy.
pub fn derive_policy_raw(raw: u8) -> LaunchPolicy {
    derive_policy(Grade::from_u8(raw).unwrap_or(Grade::Red))
}

pub fn is_valid_score(score: u8) -> bool {
    (MIN_SCORE..=MAX_SCORE).contains(&score)
}
