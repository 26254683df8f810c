//! Request tracing switch driven by an Application Insights style connection
//! string (`InstrumentationKey=...;IngestionEndpoint=...`).
//!
//! Only the presence and shape of the connection string are checked here.
//! When it is usable, every request is traced through actix-web's access log.

use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Telemetry {
    pub enabled: bool,
    pub ingestion_endpoint: Option<String>,
}

impl Telemetry {
    pub fn from_connection_string(connection_string: Option<&str>) -> Self {
        let Some(raw) = connection_string.map(str::trim).filter(|s| !s.is_empty()) else {
            log::warn!("Application Insights not configured - missing connection string");
            return Self::default();
        };

        let fields = parse_connection_string(raw);
        if !fields.contains_key("instrumentationkey") {
            log::warn!(
                "Application Insights not configured - connection string has no InstrumentationKey"
            );
            return Self::default();
        }

        let ingestion_endpoint = fields.get("ingestionendpoint").cloned();
        match &ingestion_endpoint {
            Some(endpoint) => log::info!("Application Insights configured ({})", endpoint),
            None => log::info!("Application Insights configured"),
        }

        Self {
            enabled: true,
            ingestion_endpoint,
        }
    }
}

/// `Key=Value;Key=Value`，键不区分大小写，空值忽略
fn parse_connection_string(raw: &str) -> HashMap<String, String> {
    raw.split(';')
        .filter_map(|pair| pair.split_once('='))
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
        .filter(|(k, v)| !k.is_empty() && !v.is_empty())
        .collect()
}
