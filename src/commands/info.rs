use serde::de::DeserializeOwned;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::api::endpoints::{Endpoint, NODE_STATUSES, POOL_NODES, POOLS};
use crate::api::request::{AdminRequest, Outcome};
use crate::api::target::Target;
use crate::cli::NodeArgs;
use crate::error::CommandError;
use crate::models::cluster::{NodeStatuses, PoolNodesResponse, PoolsResponse};
use crate::output::{Line, format_size};
use crate::session::Session;

const UNKNOWN: &str = "-";

pub async fn version(session: &Session, args: &NodeArgs) -> Line {
    let target = match session.target(&args.conn) {
        Ok(target) => target,
        Err(e) => return e.into(),
    };

    match fetch::<PoolsResponse>(session, &target, &POOLS).await {
        Ok(pools) => Line::Success(format!(
            "Couchbase Server node: {} version: {}",
            target.host,
            pools.implementation_version.as_deref().unwrap_or(UNKNOWN)
        )),
        Err(line) => line,
    }
}

/// Query the three status endpoints one after the other and summarize them
/// in a table. Failed queries print their error and leave their rows blank.
pub async fn cluster_info(session: &Session, args: &NodeArgs) -> Vec<Line> {
    let target = match session.target(&args.conn) {
        Ok(target) => target,
        Err(e) => return vec![e.into()],
    };

    let mut lines = Vec::new();
    let mut summary = NodeSummary::default();
    let mut answered = false;

    match fetch::<PoolsResponse>(session, &target, &POOLS).await {
        Ok(pools) => {
            summary.version = pools.implementation_version;
            answered = true;
        }
        Err(line) => lines.push(line),
    }

    match fetch::<NodeStatuses>(session, &target, &NODE_STATUSES).await {
        Ok(statuses) => {
            summary.health = statuses.get(&target.node_key()).map(|s| s.status.clone());
            answered = true;
        }
        Err(line) => lines.push(line),
    }

    match fetch::<PoolNodesResponse>(session, &target, &POOL_NODES).await {
        Ok(nodes) => {
            summary.nodes = Some(nodes);
            answered = true;
        }
        Err(line) => lines.push(line),
    }

    if answered {
        lines.push(Line::Table(summary.render(&target.host)));
    }
    lines
}

async fn fetch<T: DeserializeOwned>(
    session: &Session,
    target: &Target,
    endpoint: &'static Endpoint,
) -> Result<T, Line> {
    let outcome = session
        .client
        .send(target, &AdminRequest::new(endpoint))
        .await
        .map_err(Line::from)?;

    match outcome {
        Outcome::Success { body, .. } => serde_json::from_str(&body).map_err(|source| {
            Line::from(CommandError::Decode {
                path: endpoint.path,
                source,
            })
        }),
        other => Err(other.into_line(&target.host, |_| String::new())),
    }
}

#[derive(Default)]
struct NodeSummary {
    version: Option<String>,
    health: Option<String>,
    nodes: Option<PoolNodesResponse>,
}

impl NodeSummary {
    fn render(&self, host: &str) -> String {
        let text = |value: &Option<String>| value.clone().unwrap_or_else(|| UNKNOWN.to_string());

        let (ram, storage, rebalance) = match &self.nodes {
            Some(nodes) => {
                let totals = &nodes.storage_totals;
                (
                    format!(
                        "Total: {}\nUsed: {}",
                        format_size(totals.ram.total),
                        format_size(totals.ram.used)
                    ),
                    format!(
                        "Used: {}\nFree: {}",
                        format_size(totals.hdd.used),
                        format_size(totals.hdd.free)
                    ),
                    text(&nodes.rebalance_status),
                )
            }
            None => (UNKNOWN.to_string(), UNKNOWN.to_string(), UNKNOWN.to_string()),
        };

        let rows: Vec<[String; 2]> = vec![
            ["Node".to_string(), host.to_string()],
            ["Product version".to_string(), text(&self.version)],
            ["Health status".to_string(), text(&self.health)],
            ["Ram".to_string(), ram],
            ["Storage".to_string(), storage],
            ["Rebalance status".to_string(), rebalance],
        ];

        let mut table = Builder::from_iter(rows).build();
        table.with(Style::modern());
        table.to_string()
    }
}
