//! # KRX OpenAPI 클라이언트
//!
//! KRX OpenAPI(한국거래소 정보데이터시스템)를 위한 타입 지정 비동기
//! 클라이언트입니다.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - 31개 일별 시세 조회 엔드포인트 (지수/주식/증권상품/채권/파생상품/일반상품/ESG)
//! - 요청 속도 제한 (호출 기록 기반 rate limiter)
//! - 응답 필드 타입 변환 (날짜/정수/실수, 필드명 패턴 기반)
//! - 구조화된 로깅 및 에러 처리
//!
//! # API 문서
//!
//! 공식 API 문서: <https://openapi.krx.co.kr/>
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use krx_client::{KrxClient, KrxConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), krx_client::KrxError> {
//!     let client = KrxClient::new(KrxConfig::new("your_api_key"))?;
//!
//!     let records = client.get_kospi_daily_trade("20240105").await?;
//!     for record in &records {
//!         println!("{:?}", record.get("CLSPRC_IDX"));
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod constants;
pub mod convert;
pub mod error;
pub mod logging;
pub mod rate_limiter;

pub use client::KrxClient;
pub use config::KrxConfig;
pub use constants::{BASE_URL, ENDPOINTS};
pub use convert::{
    convert_field, convert_record, convert_response, FieldValue, RawRecord, TypedRecord,
};
pub use error::KrxError;
pub use logging::{init_logging, LogConfig, LogFormat};
pub use rate_limiter::RateLimiter;
