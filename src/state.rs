use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Instant;

use crate::metrics::AgentMetrics;
use crate::models::{AgentConfig, AgentStatus};

pub struct AgentState {
    pub config: AgentConfig,
    pub started_at: DateTime<Utc>,
    pub metrics: AgentMetrics,
    started: Instant,
    status: RwLock<AgentStatus>,
    requests_processed: AtomicU64,
}

pub type AppState = Arc<AgentState>;

pub fn new_state(config: AgentConfig) -> anyhow::Result<AppState> {
    let metrics = AgentMetrics::new(&config)?;

    Ok(Arc::new(AgentState {
        config,
        started_at: Utc::now(),
        metrics,
        started: Instant::now(),
        status: RwLock::new(AgentStatus::Initializing),
        requests_processed: AtomicU64::new(0),
    }))
}

impl AgentState {
    /// 启动检查：依赖未配置只告警，不影响就绪
    pub fn initialize(&self) {
        log::info!("Initializing {}...", self.config.name);

        match &self.config.cosmos_db_endpoint {
            Some(endpoint) => log::info!("Cosmos DB endpoint: {}", endpoint),
            None => log::warn!("COSMOS_DB_ENDPOINT not configured"),
        }

        match &self.config.redis_hostname {
            Some(hostname) => log::info!("Redis hostname: {}", hostname),
            None => log::warn!("REDIS_HOSTNAME not configured"),
        }

        self.set_status(AgentStatus::Ready);
        log::info!("{} initialized successfully", self.config.name);
    }

    pub fn status(&self) -> AgentStatus {
        *self.status.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// 服务自身只会进入 `Ready`；`Running` 留给基于此模板的 agent 设置
    pub(crate) fn set_status(&self, status: AgentStatus) {
        let mut current = self.status.write().unwrap_or_else(PoisonError::into_inner);
        if *current != status {
            log::debug!("Agent status: {} -> {}", *current, status);
            *current = status;
        }
        self.metrics.set_status(status);
    }

    pub fn requests_processed(&self) -> u64 {
        self.requests_processed.load(Ordering::Relaxed)
    }

    /// 单调时钟，保证非负且不递减
    pub fn uptime_seconds(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    /// 记录一次成功处理，返回累计数量。不改变状态
    pub fn record_processed(&self) -> u64 {
        let total = self.requests_processed.fetch_add(1, Ordering::Relaxed) + 1;
        self.metrics.requests_processed.inc();
        total
    }

    pub fn record_failure(&self) {
        self.metrics.process_failures.inc();
    }
}
