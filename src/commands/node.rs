use crate::api::endpoints::{
    ADD_NODE, EJECT_NODE, Endpoint, FAIL_OVER, NODE_SETTINGS, RENAME_NODE, SETUP_SERVICES,
};
use crate::api::request::{AdminRequest, otp_node};
use crate::cli::{AddNodeArgs, InitArgs, RenameArgs, ServicesArgs, TargetNodeArgs};
use crate::commands::required;
use crate::credentials::Credentials;
use crate::error::CommandError;
use crate::output::Line;
use crate::session::Session;

pub const DEFAULT_DATA_PATH: &str = "/opt/couchbase/var/lib/couchbase/data";
pub const DEFAULT_INDEX_PATH: &str = "/opt/couchbase/var/lib/couchbase/index";

pub async fn add(session: &Session, args: &AddNodeArgs) -> Line {
    session
        .submit(
            &args.conn,
            |target| add_request(args, &target.credentials),
            |_| format!("Node {} added to cluster", args.target.as_deref().unwrap_or_default().trim()),
        )
        .await
}

pub async fn eject(session: &Session, args: &TargetNodeArgs) -> Line {
    session
        .submit(
            &args.conn,
            |target| membership_request(&EJECT_NODE, args, &target.credentials),
            |_| format!("Node {} ejected from cluster", args.target.as_deref().unwrap_or_default().trim()),
        )
        .await
}

pub async fn fail_over(session: &Session, args: &TargetNodeArgs) -> Line {
    session
        .submit(
            &args.conn,
            |target| membership_request(&FAIL_OVER, args, &target.credentials),
            |_| format!("Node {} failed over", args.target.as_deref().unwrap_or_default().trim()),
        )
        .await
}

pub async fn initialize(session: &Session, args: &InitArgs) -> Line {
    session
        .submit(
            &args.conn,
            |_| Ok(init_request(args)),
            |target| format!("Initialized node: {}", target.host),
        )
        .await
}

pub async fn rename(session: &Session, args: &RenameArgs) -> Line {
    session
        .submit(
            &args.conn,
            |_| rename_request(args),
            |_| format!("Named node: {}", args.name.as_deref().unwrap_or_default().trim()),
        )
        .await
}

pub async fn set_services(session: &Session, args: &ServicesArgs) -> Line {
    session
        .submit(
            &args.conn,
            |_| services_request(args),
            |target| {
                format!(
                    "Specified services on node {}: {}",
                    target.host,
                    args.services.as_deref().unwrap_or_default().trim()
                )
            },
        )
        .await
}

/// The joining node's credentials are the ones used to authenticate.
fn add_request(args: &AddNodeArgs, credentials: &Credentials) -> Result<AdminRequest, CommandError> {
    let hostname = required(&args.target, "-t")?;
    Ok(AdminRequest::new(&ADD_NODE)
        .field("user", &credentials.user)
        .field("password", &credentials.password)
        .field("hostname", hostname)
        .optional_field("services", args.services.as_deref()))
}

fn membership_request(
    endpoint: &'static Endpoint,
    args: &TargetNodeArgs,
    credentials: &Credentials,
) -> Result<AdminRequest, CommandError> {
    let node = required(&args.target, "-t")?;
    Ok(AdminRequest::new(endpoint)
        .field("user", &credentials.user)
        .field("password", &credentials.password)
        .field("otpNode", otp_node(node)))
}

fn init_request(args: &InitArgs) -> AdminRequest {
    AdminRequest::new(&NODE_SETTINGS)
        .field("data_path", args.data.as_deref().unwrap_or(DEFAULT_DATA_PATH))
        .field("index_path", args.index.as_deref().unwrap_or(DEFAULT_INDEX_PATH))
}

fn rename_request(args: &RenameArgs) -> Result<AdminRequest, CommandError> {
    let name = required(&args.name, "-n")?;
    Ok(AdminRequest::new(&RENAME_NODE).field("hostname", name))
}

fn services_request(args: &ServicesArgs) -> Result<AdminRequest, CommandError> {
    let services = required(&args.services, "-s")?;
    Ok(AdminRequest::new(&SETUP_SERVICES).field("services", services))
}
