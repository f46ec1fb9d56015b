//! Client-facing request errors

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde_json::json;
use thiserror::Error;

use crate::http;
use crate::logger;
use crate::upstream::UpstreamError;

#[derive(Error, Debug)]
pub enum ApiError {
    /// A required query parameter is absent or empty
    #[error("{0}")]
    MissingParameter(&'static str),

    #[error("Could not extract product ID from URL")]
    Extraction {
        platform: &'static str,
        original_url: String,
    },

    #[error("{message}: {source}")]
    Upstream {
        message: &'static str,
        #[source]
        source: UpstreamError,
    },
}

impl ApiError {
    /// Map an upstream failure to the message matching its kind
    pub fn upstream(
        source: UpstreamError,
        fetch_message: &'static str,
        parse_message: &'static str,
    ) -> Self {
        let message = match source {
            UpstreamError::InvalidJson(_) | UpstreamError::NullBody => parse_message,
            UpstreamError::Request(_) | UpstreamError::Client(_) => fetch_message,
        };
        Self::Upstream { message, source }
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingParameter(_) | Self::Extraction { .. } => StatusCode::BAD_REQUEST,
            Self::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Log the error and render it as a JSON response
    pub fn into_response(self) -> Response<Full<Bytes>> {
        let status = self.status();
        let body = match &self {
            Self::MissingParameter(message) => json!({ "error": message }),
            Self::Extraction {
                platform,
                original_url,
            } => {
                logger::log_warning(&format!("{self} ({platform}): {original_url}"));
                json!({
                    "error": self.to_string(),
                    "details": {
                        "platform": platform,
                        "originalUrl": original_url,
                    }
                })
            }
            Self::Upstream { message, .. } => {
                logger::log_error(&self.to_string());
                json!({ "error": message })
            }
        };
        http::build_json_response(status, &body)
    }
}
