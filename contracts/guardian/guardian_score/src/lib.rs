pub mod contract;
mod error;
pub mod msg;
pub mod scorers;
pub mod scores;
pub mod state;

pub use crate::error::ContractError;
