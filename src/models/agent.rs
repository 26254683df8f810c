use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub const AGENT_VERSION: &str = "1.0.0";

/// 依赖已配置时 /ready 中的取值
pub const DEPENDENCY_CONFIGURED: &str = "configured";

/// /process 请求体上限 (16 MiB)
pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Agent 身份与依赖配置（启动后不再变化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    pub name: String,
    pub description: String,
    pub environment: String,
    pub cosmos_db_endpoint: Option<String>,
    pub redis_hostname: Option<String>,
    pub max_payload_bytes: usize,
}

impl AgentConfig {
    /// 已配置的依赖。只检查配置是否存在，不检查连通性
    pub fn dependencies(&self) -> BTreeMap<&'static str, &'static str> {
        let mut deps = BTreeMap::new();
        if self.cosmos_db_endpoint.is_some() {
            deps.insert("cosmos_db", DEPENDENCY_CONFIGURED);
        }
        if self.redis_hostname.is_some() {
            deps.insert("redis", DEPENDENCY_CONFIGURED);
        }
        deps
    }
}

/// Agent 运行状态
///
/// 启动时为 `Initializing`，初始化完成后为 `Ready`。
/// 服务自身不会进入 `Running`，就绪探针同样接受该状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Initializing,
    Ready,
    Running,
}

impl AgentStatus {
    pub const ALL: [AgentStatus; 3] = [
        AgentStatus::Initializing,
        AgentStatus::Ready,
        AgentStatus::Running,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Initializing => "initializing",
            AgentStatus::Ready => "ready",
            AgentStatus::Running => "running",
        }
    }

    /// 是否可以接收流量
    pub fn is_ready(&self) -> bool {
        matches!(self, AgentStatus::Ready | AgentStatus::Running)
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(cosmos: Option<&str>, redis: Option<&str>) -> AgentConfig {
        AgentConfig {
            name: "test-agent".to_string(),
            description: "Test Agent".to_string(),
            environment: "test".to_string(),
            cosmos_db_endpoint: cosmos.map(str::to_string),
            redis_hostname: redis.map(str::to_string),
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
        }
    }

    #[test]
    fn test_dependencies_only_include_configured() {
        assert!(config(None, None).dependencies().is_empty());

        let deps = config(Some("https://db.example"), None).dependencies();
        assert_eq!(deps.len(), 1);
        assert_eq!(deps.get("cosmos_db"), Some(&"configured"));

        let deps = config(Some("https://db.example"), Some("cache")).dependencies();
        assert_eq!(deps.keys().copied().collect::<Vec<_>>(), ["cosmos_db", "redis"]);
    }

    #[test]
    fn test_status_readiness() {
        assert!(!AgentStatus::Initializing.is_ready());
        assert!(AgentStatus::Ready.is_ready());
        assert!(AgentStatus::Running.is_ready());
        assert_eq!(
            serde_json::to_value(AgentStatus::Initializing).unwrap(),
            serde_json::json!("initializing")
        );
    }
}
