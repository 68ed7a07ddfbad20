//! KRX OpenAPI 클라이언트 설정.
//!
//! API 키는 파라미터로 직접 전달하거나 `KRX_OPENAPI_KEY` 환경 변수로
//! 제공할 수 있습니다.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::BASE_URL;
use crate::error::KrxError;

/// API 키를 읽어올 환경 변수 이름.
pub const API_KEY_ENV: &str = "KRX_OPENAPI_KEY";

/// KRX OpenAPI 클라이언트 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KrxConfig {
    /// API 인증 키
    pub api_key: String,
    /// 기간당 최대 요청 수
    pub rate_limit: u32,
    /// 요청 속도 제한 기간 (초)
    pub per_seconds: f64,
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
    /// API 기본 URL
    pub base_url: String,
}

impl KrxConfig {
    /// 주어진 API 키와 기본값으로 설정 생성.
    ///
    /// 기본값: 초당 10회 요청, 30초 타임아웃.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            rate_limit: 10,
            per_seconds: 1.0,
            timeout_secs: 30,
            base_url: BASE_URL.to_string(),
        }
    }

    /// 요청 속도 제한 설정 (기간당 최대 호출 수, 기간 초).
    pub fn with_rate_limit(mut self, rate_limit: u32, per_seconds: f64) -> Self {
        self.rate_limit = rate_limit;
        self.per_seconds = per_seconds;
        self
    }

    /// 요청 타임아웃 설정 (초).
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// API 기본 URL 오버라이드 (테스트용).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// 환경 변수에서 설정 생성.
    ///
    /// `KRX_OPENAPI_KEY`가 설정되어 있지 않으면 설정 에러를 반환합니다.
    pub fn from_env() -> Result<Self, KrxError> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| {
            KrxError::Config(format!(
                "API key required: pass as parameter or set {} environment variable",
                API_KEY_ENV
            ))
        })?;

        Ok(Self::new(api_key))
    }

    /// 설정 값을 검증합니다.
    pub fn validate(&self) -> Result<(), KrxError> {
        if self.api_key.trim().is_empty() {
            return Err(KrxError::Config("api_key must not be empty".to_string()));
        }
        if self.rate_limit == 0 {
            return Err(KrxError::Config("rate_limit must be positive".to_string()));
        }
        if !self.per_seconds.is_finite() || self.per_seconds <= 0.0 {
            return Err(KrxError::Config("per_seconds must be positive".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(KrxError::Config("timeout_secs must be positive".to_string()));
        }
        Ok(())
    }

    /// 요청 속도 제한 기간을 `Duration`으로 반환.
    pub fn period(&self) -> Duration {
        Duration::from_secs_f64(self.per_seconds)
    }
}
