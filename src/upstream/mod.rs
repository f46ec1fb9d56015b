//! Price API client
//!
//! Thin wrapper over `reqwest` for the two upstream endpoints. Bodies are
//! parsed as untyped JSON; the HTTP status code is not inspected because the
//! API reports "no data" through the payload's own `status` field.

mod error;

pub use error::{Result, UpstreamError};

use crate::config::UpstreamConfig;
use crate::logger;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    compare_endpoint: String,
    product_endpoint: String,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(UpstreamError::Client)?;

        Ok(Self {
            client,
            compare_endpoint: config.compare_endpoint.clone(),
            product_endpoint: config.product_endpoint.clone(),
        })
    }

    /// Price comparison across retailers: `<compare_endpoint>?PID=<pid>&pos=<pos>`
    pub async fn compare_price(&self, pid: &str, pos: &str) -> Result<Value> {
        self.get_json(&self.compare_endpoint, &[("PID", pid), ("pos", pos)])
            .await
    }

    /// Product details: `<product_endpoint>?pos=<pos>&pid=<pid>`
    pub async fn product_data(&self, pos: &str, pid: &str) -> Result<Value> {
        self.get_json(&self.product_endpoint, &[("pos", pos), ("pid", pid)])
            .await
    }

    async fn get_json(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Value> {
        let request = self.client.get(endpoint).query(query).build()?;
        logger::log_upstream_call(request.url().as_str());

        let response = self.client.execute(request).await?;
        let status = response.status();
        let body = response.bytes().await?;
        logger::log_debug(&format!(
            "Upstream responded {status} ({} bytes)",
            body.len()
        ));

        Ok(serde_json::from_slice(&body)?)
    }
}

/// Whether a product-data payload carries real data: `status == 1` and a truthy `data`
pub fn has_product_data(payload: &Value) -> bool {
    let status_ok = payload
        .get("status")
        .and_then(Value::as_f64)
        .is_some_and(|s| (s - 1.0).abs() < f64::EPSILON);

    status_ok && payload.get("data").is_some_and(is_truthy)
}

/// JSON truthiness: null, false, 0 and "" are falsy
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
