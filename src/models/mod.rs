pub mod agent;
pub mod responses;

pub use agent::{AgentConfig, AgentStatus, AGENT_VERSION, DEFAULT_MAX_PAYLOAD_BYTES};
pub use responses::{
    Endpoints, ErrorResponse, HealthResponse, InfoResponse, MetricsResponse,
    ProcessErrorResponse, ProcessResponse, ReadyResponse,
};
