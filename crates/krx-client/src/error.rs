//! KRX OpenAPI 에러 타입.

use thiserror::Error;

/// KRX OpenAPI 관련 에러.
#[derive(Debug, Error)]
pub enum KrxError {
    /// 설정 에러 (API 키 누락, 잘못된 요청 한도 등)
    #[error("Config error: {0}")]
    Config(String),

    /// 인증 실패 (API 키 누락 또는 유효하지 않음)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 서버 측 요청 한도 초과 (429)
    #[error("Rate limit exceeded")]
    RateLimited,

    /// 잘못된 기준일자 형식 (YYYYMMDD 형식이어야 함)
    #[error("Invalid date format: {0}. Expected YYYYMMDD (e.g., 20240101)")]
    InvalidDate(String),

    /// 서버 에러 (5xx)
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// 네트워크/연결 에러
    #[error("Network error: {0}")]
    NetworkError(String),

    /// 요청 타임아웃
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// 파싱/역직렬화 에러
    #[error("Parse error: {0}")]
    ParseError(String),

    /// 기타 API 에러
    #[error("API error: {0}")]
    ApiError(String),
}

impl KrxError {
    /// 재시도 가능한 에러인지 확인.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            KrxError::NetworkError(_)
                | KrxError::Timeout(_)
                | KrxError::RateLimited
                | KrxError::ServerError { .. }
        )
    }

    /// 인증 에러인지 확인.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, KrxError::Unauthorized(_))
    }
}

impl From<reqwest::Error> for KrxError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            KrxError::Timeout(err.to_string())
        } else {
            KrxError::NetworkError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for KrxError {
    fn from(err: serde_json::Error) -> Self {
        KrxError::ParseError(format!("Invalid JSON response: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryable() {
        let network_err = KrxError::NetworkError("connection refused".to_string());
        assert!(network_err.is_retryable());

        let server_err = KrxError::ServerError {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert!(server_err.is_retryable());

        let auth_err = KrxError::Unauthorized("invalid key".to_string());
        assert!(!auth_err.is_retryable());

        let date_err = KrxError::InvalidDate("2024-01-01".to_string());
        assert!(!date_err.is_retryable());
    }

    #[test]
    fn test_error_auth() {
        let auth_err = KrxError::Unauthorized("invalid key".to_string());
        assert!(auth_err.is_auth_error());

        let config_err = KrxError::Config("missing key".to_string());
        assert!(!config_err.is_auth_error());
    }

    #[test]
    fn test_invalid_date_message() {
        let err = KrxError::InvalidDate("2024-01-01".to_string());
        assert!(err.to_string().contains("YYYYMMDD"));
    }
}
