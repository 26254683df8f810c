use clap::Parser;

use crate::models::{AgentConfig, DEFAULT_MAX_PAYLOAD_BYTES};

/// Base Agent - 容器化 agent 服务模板
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// 监听端口
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// 监听地址
    #[arg(short = 'a', long, env = "ADDRESS", default_value = "0.0.0.0")]
    pub address: String,

    /// Agent 名称
    #[arg(long, env = "AGENT_NAME", default_value = "base-agent")]
    pub agent_name: String,

    /// Agent 描述
    #[arg(long, env = "AGENT_DESCRIPTION", default_value = "Base AI Agent")]
    pub agent_description: String,

    /// 运行环境 (development 环境下默认开启 debug 日志)
    #[arg(long, env = "ENVIRONMENT", default_value = "development")]
    pub environment: String,

    /// Cosmos DB endpoint
    #[arg(long, env = "COSMOS_DB_ENDPOINT")]
    pub cosmos_db_endpoint: Option<String>,

    /// Redis hostname
    #[arg(long, env = "REDIS_HOSTNAME")]
    pub redis_hostname: Option<String>,

    /// Application Insights 连接字符串，设置后开启请求追踪
    #[arg(long, env = "APPLICATIONINSIGHTS_CONNECTION_STRING")]
    pub telemetry_connection_string: Option<String>,

    /// /process 请求体最大字节数
    #[arg(long, env = "MAX_PAYLOAD_BYTES", default_value_t = DEFAULT_MAX_PAYLOAD_BYTES)]
    pub max_payload_bytes: usize,
}

impl CommandArgs {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// 默认日志级别，RUST_LOG 优先
    pub fn default_log_level(&self) -> &'static str {
        if self.is_development() {
            "debug"
        } else {
            "info"
        }
    }

    pub fn agent_config(&self) -> AgentConfig {
        AgentConfig {
            name: self.agent_name.clone(),
            description: self.agent_description.clone(),
            environment: self.environment.clone(),
            cosmos_db_endpoint: non_empty(self.cosmos_db_endpoint.as_deref()),
            redis_hostname: non_empty(self.redis_hostname.as_deref()),
            max_payload_bytes: self.max_payload_bytes,
        }
    }
}

/// 空字符串视为未配置
fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
