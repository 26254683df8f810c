use thiserror::Error;

/// /process 请求处理失败的原因。
///
/// 错误描述会原样返回给调用方（500 响应中的 `error` 字段）。
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Unsupported Media Type: expected 'application/json', got '{0}'")]
    UnsupportedMediaType(String),

    #[error("Request body exceeds the {0} byte limit")]
    PayloadTooLarge(usize),

    #[error("Failed to read request body: {0}")]
    Payload(#[from] actix_web::Error),

    #[error("Failed to decode JSON object: {0}")]
    MalformedJson(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_detail() {
        let err = ProcessError::UnsupportedMediaType("text/plain".to_string());
        assert!(err.to_string().contains("text/plain"));

        let parse_err = serde_json::from_slice::<serde_json::Value>(b"{bad").unwrap_err();
        let err = ProcessError::from(parse_err);
        assert!(err.to_string().starts_with("Failed to decode JSON object:"));

        let err = ProcessError::PayloadTooLarge(1024);
        assert_eq!(err.to_string(), "Request body exceeds the 1024 byte limit");
    }
}
