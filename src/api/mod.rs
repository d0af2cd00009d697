pub mod client;
pub mod endpoints;
pub mod request;
pub mod target;
