use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cbcluster")]
#[command(version, about = "Administer Couchbase Server clusters from an interactive shell")]
pub struct Cli {
    /// Log requests and responses to stderr
    #[arg(long)]
    pub verbose: bool,

    /// Run a single command and exit instead of starting the shell
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Cluster(ClusterCommand),

    /// Store default administrator credentials in the OS keyring
    Auth {
        /// Administrator username
        #[arg(long)]
        user: String,

        /// Administrator password
        #[arg(long)]
        password: String,
    },
}

/// A line typed at the `cbcluster>` prompt.
#[derive(Parser, Debug)]
#[command(multicall = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    #[command(flatten)]
    Cluster(ClusterCommand),

    /// Exits this instance of cbcluster
    #[command(alias = "quit")]
    Exit {
        /// Exit without confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// `-h` is the node host, so every cluster command carries only `--help`.
#[derive(Subcommand, Debug, Clone)]
pub enum ClusterCommand {
    /// Add node to existing cluster
    #[command(disable_help_flag = true, visible_alias = "add-node")]
    Addn(AddNodeArgs),

    /// Create bucket
    #[command(disable_help_flag = true, visible_alias = "create-bucket")]
    Bckt(BucketArgs),

    /// Eject node from cluster
    #[command(disable_help_flag = true, visible_alias = "eject-node")]
    Ejct(TargetNodeArgs),

    /// Fail over node
    #[command(disable_help_flag = true, visible_alias = "failover")]
    Flvr(TargetNodeArgs),

    /// Get Couchbase Server information
    #[command(disable_help_flag = true)]
    Info(NodeArgs),

    /// Initialize node
    #[command(disable_help_flag = true)]
    Init(InitArgs),

    /// Specify node name
    #[command(disable_help_flag = true, visible_alias = "rename")]
    Name(RenameArgs),

    /// Rebalance cluster
    #[command(disable_help_flag = true, visible_alias = "rebalance")]
    Rebl(RebalanceArgs),

    /// Specify node services
    #[command(disable_help_flag = true, visible_alias = "services")]
    Svcs(ServicesArgs),

    /// Specify administrator username and password
    #[command(disable_help_flag = true)]
    User(NodeArgs),

    /// Get Couchbase Server version
    #[command(disable_help_flag = true, visible_alias = "version")]
    Vers(NodeArgs),
}

/// Flags shared by every command that talks to a node.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Couchbase Server administrator username
    #[arg(short = 'u', long = "user")]
    pub user: Option<String>,

    /// Couchbase Server administrator password
    #[arg(short = 'p', long = "pass")]
    pub pass: Option<String>,

    /// Node URL (ex: node.local or http://node.local:8091)
    #[arg(short = 'h', long = "host", env = "CBCLUSTER_HOST")]
    pub host: Option<String>,

    /// Alternative cluster administration port
    #[arg(short = 'x', long = "xport")]
    pub xport: Option<u16>,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct NodeArgs {
    #[command(flatten)]
    pub conn: ConnectionArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct AddNodeArgs {
    #[command(flatten)]
    pub conn: ConnectionArgs,

    /// Hostname or IP address of node to add
    #[arg(short = 't', long = "target")]
    pub target: Option<String>,

    /// Node services (kv,index,n1ql)
    #[arg(short = 's', long = "services")]
    pub services: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct TargetNodeArgs {
    #[command(flatten)]
    pub conn: ConnectionArgs,

    /// Hostname or IP address of the node
    #[arg(short = 't', long = "target")]
    pub target: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct BucketArgs {
    #[command(flatten)]
    pub conn: ConnectionArgs,

    /// Bucket name
    #[arg(short = 'n', long = "name")]
    pub name: Option<String>,

    /// Bucket RAM quota (in megabytes)
    #[arg(short = 'm', long = "memory", default_value_t = 128)]
    pub memory: u32,

    /// Eviction policy
    #[arg(
        short = 'e',
        long = "eviction",
        default_value = "valueOnly",
        value_parser = ["valueOnly", "fullEviction"]
    )]
    pub eviction: String,

    /// Automatic compaction enabled [0|1]
    #[arg(short = 'c', long = "compaction", default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=1))]
    pub compaction: u8,

    /// Bucket flush enabled [0|1]
    #[arg(short = 'f', long = "flush", default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=1))]
    pub flush: u8,

    /// View index replicas [0|1]
    #[arg(short = 'i', long = "index", default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=1))]
    pub index: u8,

    /// Number of replicas (0-3)
    #[arg(short = 'r', long = "replicas", default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=3))]
    pub replicas: u8,

    /// Bucket type
    #[arg(
        short = 't',
        long = "type",
        default_value = "membase",
        value_parser = ["membase", "memcached", "couchbase", "ephemeral"]
    )]
    pub bucket_type: String,

    /// Auth type
    #[arg(
        short = 'a',
        long = "auth",
        default_value = "sasl",
        value_parser = ["sasl", "none"]
    )]
    pub auth: String,

    /// Dedicated port number for auth-less bucket
    #[arg(short = 'd', long = "dedicated")]
    pub dedicated: Option<u16>,

    /// SASL authentication password
    #[arg(short = 's', long = "saslpass")]
    pub saslpass: Option<String>,

    /// Writer threads / Disk I/O optimization (2-8)
    #[arg(short = 'w', long = "wthreads", default_value_t = 3, value_parser = clap::value_parser!(u8).range(2..=8))]
    pub wthreads: u8,
}

#[derive(Args, Debug, Clone, Default)]
pub struct InitArgs {
    #[command(flatten)]
    pub conn: ConnectionArgs,

    /// Data path (default: /opt/couchbase/var/lib/couchbase/data)
    #[arg(short = 'd', long = "data")]
    pub data: Option<String>,

    /// Index path (default: /opt/couchbase/var/lib/couchbase/index)
    #[arg(short = 'i', long = "index")]
    pub index: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RenameArgs {
    #[command(flatten)]
    pub conn: ConnectionArgs,

    /// Node name (hostname or IP address)
    #[arg(short = 'n', long = "name")]
    pub name: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RebalanceArgs {
    #[command(flatten)]
    pub conn: ConnectionArgs,

    /// Comma separated list of nodes to eject
    #[arg(short = 'e', long = "ejected")]
    pub ejected: Option<String>,

    /// Comma separated list of known nodes (including newly added)
    #[arg(short = 'k', long = "known")]
    pub known: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ServicesArgs {
    #[command(flatten)]
    pub conn: ConnectionArgs,

    /// Node services (kv,index,n1ql)
    #[arg(short = 's', long = "services")]
    pub services: Option<String>,
}
