use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Mock deployment of a Clarity contract. Nothing touches a real chain:
/// identifiers are fabricated locally and a fixed delay imitates broadcast
/// latency.
pub const TX_ID_LEN: usize = 64;
pub const ADDRESS_PREFIX: &str = "ST";
pub const DEFAULT_CONTRACT_NAME: &str = "converted-contract";

const ADDRESS_BODY_LEN: usize = 38;
const BROADCAST_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Testnet,
    Mainnet,
}

impl Default for Network {
    fn default() -> Self {
        Network::Testnet
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Testnet => write!(f, "testnet"),
            Network::Mainnet => write!(f, "mainnet"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid network '{0}': expected 'testnet' or 'mainnet'")]
pub struct ParseNetworkError(String);

impl FromStr for Network {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "testnet" => Ok(Network::Testnet),
            "mainnet" => Ok(Network::Mainnet),
            _ => Err(ParseNetworkError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MockDeployment {
    pub tx_id: String,
    pub address: String,
    pub contract_id: String,
    pub network: Network,
}

/// Fabricates a deployment record for the given contract name. Every call
/// produces a fresh transaction id.
pub async fn broadcast(contract_name: &str, network: Network) -> MockDeployment {
    tokio::time::sleep(BROADCAST_DELAY).await;

    let tx_id = generate_tx_id();
    let address = derive_address(&tx_id);
    let contract_id = format!("{}.{}", address, contract_name);

    MockDeployment {
        tx_id,
        address,
        contract_id,
        network,
    }
}

fn generate_tx_id() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

fn derive_address(tx_id: &str) -> String {
    let body: String = tx_id.chars().take(ADDRESS_BODY_LEN).collect();
    format!("{}{}", ADDRESS_PREFIX, body.to_ascii_uppercase())
}
