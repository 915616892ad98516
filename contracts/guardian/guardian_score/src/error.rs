use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Registry is paused")]
    Paused {},

    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Capacity exceeded: at most {limit} {what}")]
    CapacityExceeded { what: String, limit: u32 },

    #[error("Project not found")]
    NotFound {},

    #[error("Scorer {scorer} is already authorized")]
    AlreadyAuthorized { scorer: String },

    #[error("Cannot migrate from different contract type: {previous_contract}")]
    CannotMigrate { previous_contract: String },
}

impl ContractError {
    /// Short code reported in the `reason` attribute of a rejected call.
    pub fn reason(&self) -> &'static str {
        match self {
            ContractError::Std(_) => "std_error",
            ContractError::Unauthorized {} => "unauthorized",
            ContractError::Paused {} => "paused",
            ContractError::InvalidInput { .. } => "invalid_input",
            ContractError::CapacityExceeded { .. } => "capacity_exceeded",
            ContractError::NotFound {} => "not_found",
            ContractError::AlreadyAuthorized { .. } => "already_authorized",
            ContractError::CannotMigrate { .. } => "cannot_migrate",
        }
    }
}
