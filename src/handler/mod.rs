//! Request handler module
//!
//! Responsible for request routing dispatch and the tracker's endpoints:
//! the static front end, price comparison relay and product lookup.

pub mod api;
pub mod assets;
mod error;
pub mod router;

// Re-export main entry point
pub use error::ApiError;
pub use router::{dispatch, handle_request};
