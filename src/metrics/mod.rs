use prometheus::{
    Encoder, Gauge, IntCounter, IntGaugeVec, Opts, Registry, TextEncoder,
    register_gauge_with_registry, register_int_counter_with_registry,
    register_int_gauge_vec_with_registry,
};
use lazy_static::lazy_static;
use std::collections::HashMap;
use sysinfo::System;

use crate::models::{AgentConfig, AgentStatus, AGENT_VERSION};

lazy_static! {
    static ref HOSTNAME: String = System::host_name().unwrap_or_else(|| "unknown".to_string());
}

/// Agent 自身的 Prometheus 指标。
///
/// 每个 `AgentState` 持有独立的 Registry，所有指标带 `agent` 与 `hostname` 常量标签。
pub struct AgentMetrics {
    registry: Registry,

    pub requests_processed: IntCounter,
    pub process_failures: IntCounter,
    pub uptime_seconds: Gauge,
    pub status: IntGaugeVec,
}

impl AgentMetrics {
    pub fn new(config: &AgentConfig) -> prometheus::Result<Self> {
        let mut const_labels = HashMap::new();
        const_labels.insert("agent".to_string(), config.name.clone());
        const_labels.insert("hostname".to_string(), HOSTNAME.clone());
        let registry = Registry::new_custom(None, Some(const_labels))?;

        let requests_processed = register_int_counter_with_registry!(
            Opts::new("agent_requests_processed_total", "Requests successfully processed by the agent"),
            registry
        )?;

        let process_failures = register_int_counter_with_registry!(
            Opts::new("agent_process_failures_total", "Requests rejected by the process endpoint"),
            registry
        )?;

        let uptime_seconds = register_gauge_with_registry!(
            Opts::new("agent_uptime_seconds", "Seconds since the agent started"),
            registry
        )?;

        let status = register_int_gauge_vec_with_registry!(
            Opts::new("agent_status", "Current agent status (1 for the active status)"),
            &["status"],
            registry
        )?;

        let info = register_int_gauge_vec_with_registry!(
            Opts::new("agent_info", "Agent build and environment information"),
            &["version", "environment"],
            registry
        )?;
        info.with_label_values(&[AGENT_VERSION, config.environment.as_str()])
            .set(1);

        #[cfg(target_os = "linux")]
        registry.register(Box::new(
            prometheus::process_collector::ProcessCollector::for_self(),
        ))?;

        let metrics = Self {
            registry,
            requests_processed,
            process_failures,
            uptime_seconds,
            status,
        };
        metrics.set_status(AgentStatus::Initializing);
        Ok(metrics)
    }

    pub fn set_status(&self, current: AgentStatus) {
        for status in AgentStatus::ALL {
            self.status
                .with_label_values(&[status.as_str()])
                .set(i64::from(status == current));
        }
    }

    pub fn render(&self, uptime_seconds: f64) -> anyhow::Result<String> {
        self.uptime_seconds.set(uptime_seconds);

        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

/// 在文本格式中查找带指定标签的样本值，不依赖标签顺序
#[cfg(test)]
pub(crate) fn find_sample<'a>(text: &'a str, name: &str, labels: &[&str]) -> Option<&'a str> {
    let prefix = format!("{}{{", name);
    text.lines()
        .filter(|line| line.starts_with(&prefix))
        .filter_map(|line| line.rsplit_once("} "))
        .find(|(series, _)| labels.iter().all(|label| series.contains(label)))
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::config;

    #[test]
    fn test_render_includes_agent_metrics() {
        let metrics = AgentMetrics::new(&config("test-agent")).unwrap();
        metrics.requests_processed.inc();
        metrics.set_status(AgentStatus::Ready);

        assert_eq!(metrics.status.with_label_values(&["ready"]).get(), 1);
        assert_eq!(metrics.status.with_label_values(&["initializing"]).get(), 0);

        let text = metrics.render(12.5).unwrap();
        let agent = r#"agent="test-agent""#;
        let hostname = format!(r#"hostname="{}""#, *HOSTNAME);

        assert_eq!(
            find_sample(&text, "agent_requests_processed_total", &[agent, &hostname]),
            Some("1")
        );
        assert_eq!(find_sample(&text, "agent_uptime_seconds", &[agent]), Some("12.5"));
        assert_eq!(
            find_sample(&text, "agent_status", &[r#"status="ready""#, agent]),
            Some("1")
        );
        assert_eq!(
            find_sample(&text, "agent_status", &[r#"status="initializing""#, agent]),
            Some("0")
        );
        assert_eq!(
            find_sample(&text, "agent_info", &[r#"version="1.0.0""#, r#"environment="test""#]),
            Some("1")
        );
    }

    #[test]
    fn test_registries_are_independent() {
        let a = AgentMetrics::new(&config("test-agent")).unwrap();
        let b = AgentMetrics::new(&config("test-agent")).unwrap();
        a.requests_processed.inc_by(3);

        assert_eq!(a.requests_processed.get(), 3);
        assert_eq!(b.requests_processed.get(), 0);
    }
}
