//! Static front end
//!
//! The index page is read from disk on every request so it can be edited
//! without restarting the server.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use tokio::fs;

use crate::config::AssetsConfig;
use crate::http;
use crate::logger;

/// Serve the configured index page; 500 if it cannot be read
pub async fn serve_index(assets: &AssetsConfig, is_head: bool) -> Response<Full<Bytes>> {
    match fs::read(&assets.index_file).await {
        Ok(content) => http::build_html_response(content, is_head),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read index file '{}': {e}",
                assets.index_file
            ));
            http::build_text_response(StatusCode::INTERNAL_SERVER_ERROR, "Error loading page")
        }
    }
}
