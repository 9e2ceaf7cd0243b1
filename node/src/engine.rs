// Copyright (c) 2026 Citadel Contributors. Licensed under AGPLv3.

//! In-memory chain engine: accounts, deployed contracts and the
//! decryption authority, one height per accepted transaction.
//!
//! The engine is the single source of truth behind the HTTP surface.
//! It holds the authority root secret and never hands out plaintext
//! for encrypted fields; every read of one is sealed to the scope of
//! the presented permission.

use std::collections::HashMap;

use rand::RngCore;

use citadel_core::address::Address;
use citadel_core::api::{CallOutcome, CallRequest, ChainInfo, DeployReceipt, DeployRequest, FaucetGrant, PermitGrant};
use citadel_core::contract::{ContractKind, FieldKind, GENESIS_PLAYER_COUNT, GENESIS_WEATHER};
use citadel_core::permit::Permission;
use citadel_core::seal::{derive_unseal_key, seal};
use citadel_core::value::FieldValue;

use crate::config::NodeConfig;
use crate::errors::NodeError;

const AUTHORITY_ROOT_CONTEXT: &str = "CITADEL:NODE:AUTHORITY:V1";

/// Unix seconds from the system clock.
pub fn now_unix() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system clock before unix epoch")
        .as_secs()
}

/// State of one KingOfTheCastle instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleState {
    pub player_count: u64,
    pub weather: u64,
    pub king: Address,
}

#[derive(Debug, Clone)]
pub struct DeployedContract {
    pub kind: ContractKind,
    pub deployer: Address,
    /// Height of the block that carried the deployment.
    pub height: u64,
    state: CastleState,
}

impl DeployedContract {
    fn field_value(&self, accessor: &str) -> Option<FieldValue> {
        match self.kind {
            ContractKind::KingOfTheCastle => match accessor {
                "getPlayerCount" => Some(FieldValue::Uint(self.state.player_count)),
                "getCurrentWeather" => Some(FieldValue::Uint(self.state.weather)),
                "getCurrentKing" => Some(FieldValue::Addr(self.state.king)),
                _ => None,
            },
        }
    }
}

/// Request totals, kept per engine so tests can observe exactly what
/// clients submitted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EngineCounters {
    pub faucet_requests: u64,
    pub deployments_submitted: u64,
    pub permits_granted: u64,
    pub sealed_reads: u64,
}

pub struct ChainEngine {
    network: String,
    chain_id: u64,
    height: u64,
    faucet_amount: u128,
    deploy_gas_cost: u128,
    authority_root: [u8; 32],
    balances: HashMap<Address, u128>,
    nonces: HashMap<Address, u64>,
    contracts: HashMap<Address, DeployedContract>,
    counters: EngineCounters,
}

impl ChainEngine {
    pub fn new(cfg: &NodeConfig) -> Self {
        let authority_root = match &cfg.authority_seed {
            Some(seed) => blake3::derive_key(AUTHORITY_ROOT_CONTEXT, seed.as_bytes()),
            None => {
                let mut root = [0u8; 32];
                rand::rngs::OsRng.fill_bytes(&mut root);
                root
            }
        };
        Self {
            network: cfg.network.clone(),
            chain_id: cfg.chain_id,
            height: 0,
            faucet_amount: cfg.faucet_amount,
            deploy_gas_cost: cfg.deploy_gas_cost,
            authority_root,
            balances: HashMap::new(),
            nonces: HashMap::new(),
            contracts: HashMap::new(),
            counters: EngineCounters::default(),
        }
    }

    pub fn info(&self) -> ChainInfo {
        ChainInfo {
            network: self.network.clone(),
            chain_id: self.chain_id,
            height: self.height,
        }
    }

    pub fn balance(&self, address: &Address) -> u128 {
        self.balances.get(address).copied().unwrap_or(0)
    }

    pub fn contract(&self, address: &Address) -> Option<&DeployedContract> {
        self.contracts.get(address)
    }

    pub fn counters(&self) -> EngineCounters {
        self.counters
    }

    /// Credit `amount` directly, bypassing the faucet. This is how
    /// genesis allocations and inbound transfers land.
    pub fn credit(&mut self, address: Address, amount: u128) {
        *self.balances.entry(address).or_insert(0) += amount;
    }

    /// Credit the faucet amount to `address`. Counted before the
    /// network gate so rejected requests still show up in totals.
    pub fn drip(&mut self, address: Address) -> Result<FaucetGrant, NodeError> {
        self.counters.faucet_requests += 1;
        if self.network != citadel_core::DEV_NETWORK {
            return Err(NodeError::FaucetDisabled(self.network.clone()));
        }
        let balance = self.balances.entry(address).or_insert(0);
        *balance += self.faucet_amount;
        self.height += 1;
        metrics::increment_counter!("citadel_faucet_drips_total");
        tracing::info!(%address, amount = self.faucet_amount, "faucet drip");
        Ok(FaucetGrant {
            address,
            amount: self.faucet_amount,
        })
    }

    /// Deploy a fresh contract instance. Every accepted submission
    /// creates a new instance at a nonce-derived address; deduplication
    /// is the client's job.
    pub fn deploy(&mut self, req: &DeployRequest) -> Result<DeployReceipt, NodeError> {
        self.counters.deployments_submitted += 1;

        let expected = req.contract.constructor_arity();
        if req.args.len() != expected {
            return Err(NodeError::ConstructorArity {
                expected,
                got: req.args.len(),
            });
        }

        let balance = self.balance(&req.deployer);
        if balance < self.deploy_gas_cost {
            return Err(NodeError::InsufficientFunds(req.deployer));
        }
        self.balances.insert(req.deployer, balance - self.deploy_gas_cost);

        let nonce = self.nonces.entry(req.deployer).or_insert(0);
        let address = Address::for_contract(&req.deployer, *nonce);
        *nonce += 1;

        self.height += 1;
        let state = match req.contract {
            ContractKind::KingOfTheCastle => CastleState {
                player_count: GENESIS_PLAYER_COUNT,
                weather: GENESIS_WEATHER,
                king: req.deployer,
            },
        };
        self.contracts.insert(
            address,
            DeployedContract {
                kind: req.contract,
                deployer: req.deployer,
                height: self.height,
                state,
            },
        );
        metrics::increment_counter!("citadel_deployments_total");
        tracing::info!(contract = %req.contract, %address, height = self.height, "contract deployed");
        Ok(DeployReceipt {
            address,
            height: self.height,
        })
    }

    /// Verify a permission and answer with unseal key material for its
    /// scope. The signature is checked before the contract is looked
    /// up, so an unauthorized caller learns nothing about what is
    /// deployed.
    pub fn grant_permit(
        &mut self,
        permission: &Permission,
        now: u64,
    ) -> Result<PermitGrant, NodeError> {
        permission.verify(now)?;
        if !self.contracts.contains_key(&permission.contract) {
            return Err(NodeError::ContractNotFound(permission.contract));
        }
        let key = derive_unseal_key(&self.authority_root, permission.scope());
        self.counters.permits_granted += 1;
        metrics::increment_counter!("citadel_permits_granted_total");
        tracing::debug!(bearer = %permission.bearer, contract = %permission.contract, "permit granted");
        Ok(PermitGrant {
            key_material: key.to_hex(),
        })
    }

    /// Read one field. Plaintext fields come back in clear; encrypted
    /// fields require a valid permission for this contract and come
    /// back sealed to its scope.
    pub fn call(&mut self, req: &CallRequest, now: u64) -> Result<CallOutcome, NodeError> {
        let contract = self
            .contracts
            .get(&req.contract)
            .ok_or(NodeError::ContractNotFound(req.contract))?;
        let field = contract
            .kind
            .field(&req.accessor)
            .ok_or_else(|| NodeError::UnknownAccessor(req.accessor.clone()))?;
        let value = contract
            .field_value(&req.accessor)
            .ok_or_else(|| NodeError::UnknownAccessor(req.accessor.clone()))?;

        match field.kind {
            FieldKind::Plaintext => Ok(CallOutcome::Plain(value)),
            FieldKind::Encrypted => {
                let permission = req
                    .permission
                    .as_ref()
                    .ok_or(NodeError::PermissionRequired)?;
                permission.verify(now)?;
                if permission.contract != req.contract {
                    return Err(NodeError::PermissionScope);
                }
                let key = derive_unseal_key(&self.authority_root, permission.scope());
                let sealed = seal(&value, permission.scope(), &key);
                self.counters.sealed_reads += 1;
                metrics::increment_counter!("citadel_sealed_reads_total");
                Ok(CallOutcome::Sealed(sealed))
            }
        }
    }
}
