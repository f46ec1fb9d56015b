//! HTTP protocol layer module
//!
//! Response builders and header helpers, decoupled from the tracker's routes.

pub mod response;

// Re-export commonly used builders
pub use response::{
    apply_cors, apply_server_name, build_404_response, build_405_response, build_413_response,
    build_html_response, build_json_response, build_options_response, build_text_response,
};
