use reqwest::Method;

/// One management REST endpoint and the status codes that mean it worked.
#[derive(Debug)]
pub struct Endpoint {
    pub path: &'static str,
    pub method: Method,
    pub accepted: &'static [u16],
}

impl Endpoint {
    pub fn accepts(&self, status: u16) -> bool {
        self.accepted.contains(&status)
    }
}

const OK: &[u16] = &[200];

pub static ADD_NODE: Endpoint = Endpoint {
    path: "/controller/addNode",
    method: Method::POST,
    accepted: OK,
};

// Bucket creation may complete asynchronously and answer 202.
pub static CREATE_BUCKET: Endpoint = Endpoint {
    path: "/pools/default/buckets",
    method: Method::POST,
    accepted: &[200, 202],
};

pub static EJECT_NODE: Endpoint = Endpoint {
    path: "/controller/ejectNode",
    method: Method::POST,
    accepted: OK,
};

pub static FAIL_OVER: Endpoint = Endpoint {
    path: "/controller/failOver",
    method: Method::POST,
    accepted: OK,
};

pub static POOLS: Endpoint = Endpoint {
    path: "/pools",
    method: Method::GET,
    accepted: OK,
};

pub static NODE_STATUSES: Endpoint = Endpoint {
    path: "/nodeStatuses",
    method: Method::GET,
    accepted: OK,
};

pub static POOL_NODES: Endpoint = Endpoint {
    path: "/pools/nodes",
    method: Method::GET,
    accepted: OK,
};

pub static NODE_SETTINGS: Endpoint = Endpoint {
    path: "/nodes/self/controller/settings",
    method: Method::POST,
    accepted: OK,
};

pub static RENAME_NODE: Endpoint = Endpoint {
    path: "/node/controller/rename",
    method: Method::POST,
    accepted: OK,
};

pub static REBALANCE: Endpoint = Endpoint {
    path: "/controller/rebalance",
    method: Method::POST,
    accepted: OK,
};

pub static SETUP_SERVICES: Endpoint = Endpoint {
    path: "/node/controller/setupServices",
    method: Method::POST,
    accepted: OK,
};

pub static WEB_SETTINGS: Endpoint = Endpoint {
    path: "/settings/web",
    method: Method::POST,
    accepted: OK,
};
