use std::collections::HashMap;

use serde::Deserialize;

/// `GET /pools`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolsResponse {
    pub implementation_version: Option<String>,
}

/// `GET /nodeStatuses`, keyed by `host:port`.
pub type NodeStatuses = HashMap<String, NodeStatus>;

#[derive(Debug, Deserialize)]
pub struct NodeStatus {
    pub status: String,
}

/// `GET /pools/nodes`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolNodesResponse {
    pub storage_totals: StorageTotals,
    pub rebalance_status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StorageTotals {
    pub ram: RamTotals,
    pub hdd: HddTotals,
}

#[derive(Debug, Deserialize)]
pub struct RamTotals {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub used: u64,
}

#[derive(Debug, Deserialize)]
pub struct HddTotals {
    #[serde(default)]
    pub used: u64,
    #[serde(default)]
    pub free: u64,
}
