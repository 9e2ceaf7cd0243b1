//! HTTP client for one node.

use reqwest::Client;
use serde::de::DeserializeOwned;

use citadel_core::address::Address;
use citadel_core::api::{
    ApiErrorBody, BalanceInfo, CallOutcome, CallRequest, ChainInfo, DeployReceipt, DeployRequest,
    FaucetGrant, FaucetRequest, PermitGrant,
};
use citadel_core::permit::Permission;

use crate::errors::ProviderError;

#[derive(Debug, Clone)]
pub struct NodeProvider {
    base_url: String,
    client: Client,
}

impl NodeProvider {
    pub fn new(url: String) -> Self {
        Self {
            base_url: url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub async fn chain_info(&self) -> Result<ChainInfo, ProviderError> {
        let url = format!("{}/v1/chain/info", self.base_url);
        let resp = self.client.get(&url).send().await?;
        decode(resp).await
    }

    pub async fn balance(&self, address: &Address) -> Result<u128, ProviderError> {
        let url = format!("{}/v1/balance/{}", self.base_url, address);
        let resp = self.client.get(&url).send().await?;
        let info: BalanceInfo = decode(resp).await?;
        Ok(info.balance)
    }

    pub async fn request_funding(&self, address: Address) -> Result<FaucetGrant, ProviderError> {
        let url = format!("{}/v1/faucet", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&FaucetRequest { address })
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn deploy(&self, request: &DeployRequest) -> Result<DeployReceipt, ProviderError> {
        let url = format!("{}/v1/deploy", self.base_url);
        let resp = self.client.post(&url).json(request).send().await?;
        decode(resp).await
    }

    pub async fn grant_permit(&self, permission: &Permission) -> Result<PermitGrant, ProviderError> {
        let url = format!("{}/v1/permit", self.base_url);
        let resp = self.client.post(&url).json(permission).send().await?;
        decode(resp).await
    }

    pub async fn call(&self, request: &CallRequest) -> Result<CallOutcome, ProviderError> {
        let url = format!("{}/v1/call", self.base_url);
        let resp = self.client.post(&url).json(request).send().await?;
        decode(resp).await
    }
}

/// Decode a success body, or turn the node's `{error, code}` body into
/// a `ProviderError::Api`.
async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ProviderError> {
    let status = resp.status();
    if status.is_success() {
        resp.json::<T>()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))
    } else {
        let body: ApiErrorBody = resp
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;
        Err(ProviderError::Api {
            status: status.as_u16(),
            code: body.code,
            message: body.error,
        })
    }
}
