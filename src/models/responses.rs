use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::models::AgentStatus;

/// GET / 返回的路由列表
#[derive(Debug, Clone, Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub ready: &'static str,
    pub metrics: &'static str,
    pub process: &'static str,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            health: "/health",
            ready: "/ready",
            metrics: "/metrics",
            process: "/process",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InfoResponse<'a> {
    pub agent: &'a str,
    pub description: &'a str,
    pub version: &'static str,
    pub status: AgentStatus,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse<'a> {
    pub status: &'static str,
    pub agent: &'a str,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ReadyResponse<'a> {
    /// "ready" 或 "not_ready"
    pub status: &'static str,
    pub agent: &'a str,
    pub dependencies: BTreeMap<&'static str, &'static str>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse<'a> {
    pub agent: &'a str,
    pub uptime_seconds: f64,
    pub requests_processed: u64,
    pub status: AgentStatus,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ProcessResponse<'a> {
    pub agent: &'a str,
    pub status: &'static str,
    pub message: String,
    pub input: Value,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ProcessErrorResponse<'a> {
    pub agent: &'a str,
    pub status: &'static str,
    pub error: String,
    pub timestamp: DateTime<Utc>,
}

/// 404 / 500 的固定错误体
#[derive(Debug, Serialize)]
pub struct ErrorResponse<'a> {
    pub error: &'static str,
    pub message: &'static str,
    pub agent: &'a str,
}
