//! Price tracker: resolves retail product URLs to identifiers and proxies
//! them to a price-comparison API.

pub mod config;
pub mod demo;
pub mod handler;
pub mod http;
pub mod logger;
pub mod platform;
pub mod server;
pub mod upstream;
