//! Price API endpoints
//!
//! `/api/compare` relays the comparison API verbatim. `/api/product` extracts
//! the identifier from a retail URL, asks the product-data API, and falls back
//! to a demo payload when the API has nothing for that identifier.

use serde::Serialize;
use serde_json::Value;

use super::error::ApiError;
use crate::config::AppState;
use crate::demo::{self, DemoPayload};
use crate::logger;
use crate::platform::{self, Extraction};
use crate::upstream::{self, UpstreamError};

/// Body of a successful `/api/product` call
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ProductResponse {
    /// Upstream payload annotated with `originalUrl` and `extractedPID`
    Upstream(Value),
    Demo(DemoPayload),
}

/// First non-empty value of a query parameter
pub fn query_param(query: &str, name: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, value)| key == name && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}

/// `GET /api/compare?PID=<id>&pos=<code>`
pub async fn compare(query: &str, state: &AppState) -> Result<Value, ApiError> {
    let (Some(pid), Some(pos)) = (query_param(query, "PID"), query_param(query, "pos")) else {
        return Err(ApiError::MissingParameter("PID and pos are required"));
    };

    state.upstream.compare_price(&pid, &pos).await.map_err(|e| {
        ApiError::upstream(
            e,
            "Failed to fetch comparison data",
            "Invalid compare API response",
        )
    })
}

/// `GET /api/product?url=<product url>`
pub async fn lookup(query: &str, state: &AppState) -> Result<ProductResponse, ApiError> {
    let product_url =
        query_param(query, "url").ok_or(ApiError::MissingParameter("Product URL is required"))?;
    logger::log_info(&format!("Processing URL: {product_url}"));

    let extraction = platform::extract(&product_url);
    let (platform, product_id) = match extraction {
        Extraction::Found {
            platform,
            product_id,
        } => (platform, product_id),
        Extraction::NotFound { .. } => {
            return Err(ApiError::Extraction {
                platform: extraction.platform_name(),
                original_url: product_url,
            });
        }
    };
    logger::log_extraction(platform.name(), &product_id, platform.code());

    let mut payload = state
        .upstream
        .product_data(platform.code(), &product_id)
        .await
        .map_err(|e| ApiError::upstream(e, "Failed to fetch product data", "Invalid API response"))?;
    if payload.is_null() {
        return Err(ApiError::upstream(
            UpstreamError::NullBody,
            "Failed to fetch product data",
            "Invalid API response",
        ));
    }

    if upstream::has_product_data(&payload) {
        let name = payload["data"]["name"].as_str().unwrap_or("(unnamed)");
        logger::log_info(&format!("Got data for {name}"));

        if let Some(obj) = payload.as_object_mut() {
            obj.insert("originalUrl".to_string(), Value::String(product_url));
            obj.insert("extractedPID".to_string(), Value::String(product_id));
        }
        return Ok(ProductResponse::Upstream(payload));
    }

    logger::log_warning(&format!(
        "No data for {platform} product {product_id}, generating demo data"
    ));
    let demo = demo::generate(
        &mut rand::thread_rng(),
        platform.name(),
        &product_id,
        &product_url,
    );
    Ok(ProductResponse::Demo(demo))
}
