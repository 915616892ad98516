use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, HexBinary, QuerierWrapper, StdResult, WasmMsg,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::msg::{
    CanLaunchIdoResponse, GuardianExecuteMsg, GuardianQueryMsg, GuardianScoreResponse,
    RecommendedConfigResponse,
};

/// Thin wrapper around a deployed registry address, for launchpad contracts
/// that gate a sale on the registry's answer.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct GuardianContract(pub Addr);

impl GuardianContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call<T: Into<GuardianExecuteMsg>>(&self, msg: T) -> StdResult<CosmosMsg> {
        let msg = to_json_binary(&msg.into())?;
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg,
            funds: vec![],
        }
        .into())
    }

    pub fn guardian_score(
        &self,
        querier: &QuerierWrapper,
        project_id: HexBinary,
    ) -> StdResult<GuardianScoreResponse> {
        querier.query_wasm_smart(self.addr(), &GuardianQueryMsg::GetGuardianScore { project_id })
    }

    pub fn can_launch_ido(
        &self,
        querier: &QuerierWrapper,
        project_id: HexBinary,
    ) -> StdResult<CanLaunchIdoResponse> {
        querier.query_wasm_smart(self.addr(), &GuardianQueryMsg::CanLaunchIdo { project_id })
    }

    pub fn recommended_config(
        &self,
        querier: &QuerierWrapper,
        project_id: HexBinary,
    ) -> StdResult<RecommendedConfigResponse> {
        querier.query_wasm_smart(
            self.addr(),
            &GuardianQueryMsg::GetRecommendedConfig { project_id },
        )
    }
}
