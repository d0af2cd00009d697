use crate::api::endpoints::Endpoint;
use crate::output::Line;

/// A single management call: the endpoint plus its form body.
#[derive(Debug)]
pub struct AdminRequest {
    pub endpoint: &'static Endpoint,
    pub form: Vec<(&'static str, String)>,
}

impl AdminRequest {
    pub fn new(endpoint: &'static Endpoint) -> Self {
        Self {
            endpoint,
            form: Vec::new(),
        }
    }

    pub fn field(mut self, key: &'static str, value: impl ToString) -> Self {
        self.form.push((key, value.to_string()));
        self
    }

    /// Flags the user did not pass are left out of the form entirely.
    pub fn optional_field<T: ToString>(self, key: &'static str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.field(key, v),
            None => self,
        }
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// What came back from one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success { status: u16, body: String },
    Rejected { status: u16, body: String },
    Unreachable { reason: String },
}

impl Outcome {
    #[cfg(test)]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Map the outcome to the line shown to the user. `success` is only
    /// evaluated when the cluster accepted the request.
    pub fn into_line(self, host: &str, success: impl FnOnce(&str) -> String) -> Line {
        match self {
            Outcome::Success { body, .. } => Line::Success(success(&body)),
            Outcome::Rejected { status, body } => {
                Line::Error(format!("{} {}", status, sanitize_body(&body)))
            }
            Outcome::Unreachable { .. } => {
                Line::Error(format!("Cannot communicate with {}", host))
            }
        }
    }
}

/// Strip the JSON punctuation the cluster wraps its error strings in.
pub fn sanitize_body(body: &str) -> String {
    body.chars()
        .filter(|c| !matches!(c, '"' | '[' | ']' | '\''))
        .collect()
}

/// Turn a comma separated host list into `ns_1@host` cluster identifiers.
pub fn otp_nodes(hosts: &str) -> String {
    hosts
        .split(',')
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(otp_node)
        .collect::<Vec<_>>()
        .join(",")
}

pub fn otp_node(host: &str) -> String {
    format!("ns_1@{}", host)
}
