use crate::api::endpoints::REBALANCE;
use crate::api::request::{AdminRequest, otp_nodes};
use crate::cli::RebalanceArgs;
use crate::commands::required;
use crate::error::CommandError;
use crate::output::Line;
use crate::session::Session;

pub async fn run(session: &Session, args: &RebalanceArgs) -> Line {
    session
        .submit(
            &args.conn,
            |_| rebalance_request(args),
            |_| "Cluster rebalancing".to_string(),
        )
        .await
}

/// `-k` lists every node that stays or joins; `-e` the ones leaving.
fn rebalance_request(args: &RebalanceArgs) -> Result<AdminRequest, CommandError> {
    let known = otp_nodes(required(&args.known, "-k")?);
    if known.is_empty() {
        return Err(CommandError::MissingOption("-k"));
    }
    let ejected = args.ejected.as_deref().map(otp_nodes).unwrap_or_default();

    Ok(AdminRequest::new(&REBALANCE)
        .field("ejectedNodes", ejected)
        .field("knownNodes", known))
}
