//! Local registry of what was deployed where.
//!
//! One JSON file, keyed by `network/name`, rewritten atomically on
//! every change. This is what makes deployments idempotent: a recorded
//! deployment is reused instead of resubmitted.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use citadel_core::address::Address;

use crate::errors::RegistryError;

const REGISTRY_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    pub name: String,
    pub network: String,
    pub address: Address,
    pub args: Vec<String>,
    pub last_deployed_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RegistryFile {
    version: u32,
    deployments: BTreeMap<String, DeploymentRecord>,
}

pub struct DeploymentRegistry {
    path: PathBuf,
    deployments: BTreeMap<String, DeploymentRecord>,
}

impl DeploymentRegistry {
    /// Load the registry at `path`. A missing file is an empty
    /// registry, not an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, RegistryError> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self {
                path,
                deployments: BTreeMap::new(),
            });
        }
        let raw = fs::read(&path)?;
        let file: RegistryFile = serde_json::from_slice(&raw)?;
        if file.version != REGISTRY_VERSION {
            return Err(RegistryError::UnknownVersion(file.version));
        }
        Ok(Self {
            path,
            deployments: file.deployments,
        })
    }

    pub fn get(&self, network: &str, name: &str) -> Option<&DeploymentRecord> {
        self.deployments.get(&Self::key(network, name))
    }

    /// Insert or replace a record and persist immediately.
    pub fn record(&mut self, record: DeploymentRecord) -> Result<(), RegistryError> {
        let key = Self::key(&record.network, &record.name);
        self.deployments.insert(key, record);
        self.save()
    }

    fn key(network: &str, name: &str) -> String {
        format!("{network}/{name}")
    }

    fn save(&self) -> Result<(), RegistryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = RegistryFile {
            version: REGISTRY_VERSION,
            deployments: self.deployments.clone(),
        };
        let json = serde_json::to_vec_pretty(&file)?;

        // Write to a sibling tmp file, then rename into place.
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, &json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}
