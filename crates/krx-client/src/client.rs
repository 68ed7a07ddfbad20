//! KRX OpenAPI 클라이언트 구현.
//!
//! 이 모듈은 KRX OpenAPI의 31개 일별 시세 조회 엔드포인트에 대한
//! REST 클라이언트를 제공합니다. 모든 요청은 공유 rate limiter를
//! 통과하며, 응답 레코드는 필드명 패턴에 따라 타입이 변환됩니다.

use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::config::KrxConfig;
use crate::constants::{category, category_for, endpoint};
use crate::convert::{convert_response, RawRecord, TypedRecord};
use crate::error::KrxError;
use crate::rate_limiter::RateLimiter;

/// KRX OpenAPI 메인 클라이언트.
///
/// 31개의 KRX OpenAPI 엔드포인트에 대한 접근을 제공하며, 요청 속도
/// 제한과 응답 데이터 타입 변환이 내장되어 있습니다.
///
/// # 사용 예제
///
/// ```rust,ignore
/// use krx_client::{KrxClient, KrxConfig};
///
/// let client = KrxClient::new(KrxConfig::new("your_api_key"))?;
/// let records = client.get_kospi_daily_trade("20240105").await?;
/// ```
pub struct KrxClient {
    config: KrxConfig,
    client: reqwest::Client,
    rate_limiter: RateLimiter,
}

impl KrxClient {
    /// 새로운 KRX OpenAPI 클라이언트 생성.
    ///
    /// 설정이 유효하지 않으면 [`KrxError::Config`]를 반환합니다.
    pub fn new(config: KrxConfig) -> Result<Self, KrxError> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| KrxError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let rate_limiter = RateLimiter::new(config.rate_limit as usize, config.period())?;

        info!(
            rate_limit = config.rate_limit,
            per_seconds = config.per_seconds,
            "Initialized KRX OpenAPI client"
        );

        Ok(Self {
            config,
            client,
            rate_limiter,
        })
    }

    /// 환경 변수(`KRX_OPENAPI_KEY`)에서 클라이언트 생성.
    pub fn from_env() -> Result<Self, KrxError> {
        Self::new(KrxConfig::from_env()?)
    }

    /// 클라이언트 설정 참조 반환.
    pub fn config(&self) -> &KrxConfig {
        &self.config
    }

    /// 엔드포인트 경로 문자열로 일별 데이터를 조회합니다.
    ///
    /// 경로는 [`crate::constants::ENDPOINTS`] 테이블에서 카테고리로
    /// 해석됩니다. 알 수 없는 경로는 [`KrxError::ApiError`]를 반환합니다.
    pub async fn fetch_endpoint(
        &self,
        endpoint_path: &str,
        bas_dd: &str,
    ) -> Result<Vec<TypedRecord>, KrxError> {
        let category = category_for(endpoint_path)
            .ok_or_else(|| KrxError::ApiError(format!("Unknown endpoint: {}", endpoint_path)))?;

        self.fetch(category, endpoint_path, bas_dd).await
    }

    /// KRX API에 HTTP 요청을 보내고 변환된 레코드를 반환합니다.
    async fn fetch(
        &self,
        category: &str,
        endpoint: &str,
        bas_dd: &str,
    ) -> Result<Vec<TypedRecord>, KrxError> {
        validate_base_date(bas_dd)?;

        // 요청 속도 제한 적용
        self.rate_limiter.acquire().await;

        let url = format!("{}/{}/{}", self.config.base_url, category, endpoint);

        debug!(category, endpoint, bas_dd, "Requesting daily market data");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("AUTH_KEY", self.config.api_key.as_str()),
                ("basDd", bas_dd),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        match status.as_u16() {
            401 => {
                return Err(KrxError::Unauthorized(
                    "Invalid API key (401 Unauthorized)".to_string(),
                ));
            }
            429 => return Err(KrxError::RateLimited),
            500..=599 => {
                error!(status = status.as_u16(), endpoint, "KRX server error");
                return Err(KrxError::ServerError {
                    status: status.as_u16(),
                    message: body.chars().take(200).collect(),
                });
            }
            _ if !status.is_success() => {
                return Err(KrxError::ApiError(format!(
                    "Unexpected status {}: {}",
                    status.as_u16(),
                    body.chars().take(200).collect::<String>()
                )));
            }
            _ => {}
        }

        let data: serde_json::Value = serde_json::from_str(&body)?;

        let records: Vec<RawRecord> = match data.get("OutBlock_1") {
            Some(block) => serde_json::from_value(block.clone())?,
            None => {
                warn!(endpoint, "Unexpected response structure (no OutBlock_1)");
                Vec::new()
            }
        };

        debug!(endpoint, records = records.len(), "Received daily market data");

        Ok(convert_response(&records))
    }

    // ========================================
    // 지수 엔드포인트 (idx)
    // ========================================

    /// KRX 시리즈 일별시세정보.
    pub async fn get_krx_daily_trade(&self, bas_dd: &str) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::IDX, endpoint::KRX_DD_TRD, bas_dd).await
    }

    /// KOSPI 시리즈 일별시세정보.
    pub async fn get_kospi_daily_trade(&self, bas_dd: &str) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::IDX, endpoint::KOSPI_DD_TRD, bas_dd).await
    }

    /// KOSDAQ 시리즈 일별시세정보.
    pub async fn get_kosdaq_daily_trade(&self, bas_dd: &str) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::IDX, endpoint::KOSDAQ_DD_TRD, bas_dd).await
    }

    /// 채권지수 시세정보.
    pub async fn get_bond_index_daily_trade(
        &self,
        bas_dd: &str,
    ) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::IDX, endpoint::BON_DD_TRD, bas_dd).await
    }

    /// 파생상품지수 시세정보.
    pub async fn get_derivative_index_daily_trade(
        &self,
        bas_dd: &str,
    ) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::IDX, endpoint::DRVPROD_DD_TRD, bas_dd).await
    }

    // ========================================
    // 주식 엔드포인트 (sto)
    // ========================================

    /// 유가증권 일별매매정보.
    pub async fn get_stock_daily_trade(&self, bas_dd: &str) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::STO, endpoint::STK_BYDD_TRD, bas_dd).await
    }

    /// 코스닥 일별매매정보.
    pub async fn get_kosdaq_stock_daily_trade(
        &self,
        bas_dd: &str,
    ) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::STO, endpoint::KSQ_BYDD_TRD, bas_dd).await
    }

    /// 코넥스 일별매매정보.
    pub async fn get_konex_daily_trade(&self, bas_dd: &str) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::STO, endpoint::KNX_BYDD_TRD, bas_dd).await
    }

    /// 신주인수권증권 일별매매정보.
    pub async fn get_stock_warrant_daily_trade(
        &self,
        bas_dd: &str,
    ) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::STO, endpoint::SW_BYDD_TRD, bas_dd).await
    }

    /// 신주인수권증서 일별매매정보.
    pub async fn get_short_covering_daily_trade(
        &self,
        bas_dd: &str,
    ) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::STO, endpoint::SR_BYDD_TRD, bas_dd).await
    }

    /// 유가증권 종목기본정보.
    pub async fn get_stock_base_info(&self, bas_dd: &str) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::STO, endpoint::STK_ISU_BASE_INFO, bas_dd).await
    }

    /// 코스닥 종목기본정보.
    pub async fn get_kosdaq_stock_base_info(
        &self,
        bas_dd: &str,
    ) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::STO, endpoint::KSQ_ISU_BASE_INFO, bas_dd).await
    }

    /// 코넥스 종목기본정보.
    pub async fn get_konex_base_info(&self, bas_dd: &str) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::STO, endpoint::KNX_ISU_BASE_INFO, bas_dd).await
    }

    // ========================================
    // 증권상품 엔드포인트 (etp)
    // ========================================

    /// ETF 일별매매정보.
    pub async fn get_etf_daily_trade(&self, bas_dd: &str) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::ETP, endpoint::ETF_BYDD_TRD, bas_dd).await
    }

    /// ETN 일별매매정보.
    pub async fn get_etn_daily_trade(&self, bas_dd: &str) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::ETP, endpoint::ETN_BYDD_TRD, bas_dd).await
    }

    /// ELW 일별매매정보.
    pub async fn get_elw_daily_trade(&self, bas_dd: &str) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::ETP, endpoint::ELW_BYDD_TRD, bas_dd).await
    }

    // ========================================
    // 채권 엔드포인트 (bon)
    // ========================================

    /// 국채전문유통시장 일별매매정보.
    pub async fn get_kts_bond_daily_trade(
        &self,
        bas_dd: &str,
    ) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::BON, endpoint::KTS_BYDD_TRD, bas_dd).await
    }

    /// 일반채권시장 일별매매정보.
    pub async fn get_bond_daily_trade(&self, bas_dd: &str) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::BON, endpoint::BND_BYDD_TRD, bas_dd).await
    }

    /// 소액채권시장 일별매매정보.
    pub async fn get_small_bond_daily_trade(
        &self,
        bas_dd: &str,
    ) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::BON, endpoint::SMB_BYDD_TRD, bas_dd).await
    }

    // ========================================
    // 파생상품 엔드포인트 (drv)
    // ========================================

    /// 선물 일별매매정보 (주식선물外).
    pub async fn get_futures_daily_trade(
        &self,
        bas_dd: &str,
    ) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::DRV, endpoint::FUT_BYDD_TRD, bas_dd).await
    }

    /// 주식선물(유가) 일별매매정보.
    pub async fn get_kospi_stock_futures_daily_trade(
        &self,
        bas_dd: &str,
    ) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::DRV, endpoint::EQSFU_STK_BYDD_TRD, bas_dd).await
    }

    /// 주식선물(코스닥) 일별매매정보.
    pub async fn get_kosdaq_stock_futures_daily_trade(
        &self,
        bas_dd: &str,
    ) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::DRV, endpoint::EQKFU_KSQ_BYDD_TRD, bas_dd).await
    }

    /// 옵션 일별매매정보 (주식옵션外).
    pub async fn get_options_daily_trade(
        &self,
        bas_dd: &str,
    ) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::DRV, endpoint::OPT_BYDD_TRD, bas_dd).await
    }

    /// 주식옵션(유가) 일별매매정보.
    pub async fn get_kospi_stock_options_daily_trade(
        &self,
        bas_dd: &str,
    ) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::DRV, endpoint::EQSOP_BYDD_TRD, bas_dd).await
    }

    /// 주식옵션(코스닥) 일별매매정보.
    pub async fn get_kosdaq_stock_options_daily_trade(
        &self,
        bas_dd: &str,
    ) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::DRV, endpoint::EQKOP_BYDD_TRD, bas_dd).await
    }

    // ========================================
    // 일반상품 엔드포인트 (gen)
    // ========================================

    /// 석유시장 일별매매정보.
    pub async fn get_oil_daily_trade(&self, bas_dd: &str) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::GEN, endpoint::OIL_BYDD_TRD, bas_dd).await
    }

    /// 금시장 일별매매정보.
    pub async fn get_gold_daily_trade(&self, bas_dd: &str) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::GEN, endpoint::GOLD_BYDD_TRD, bas_dd).await
    }

    /// 배출권 시장 일별매매정보.
    pub async fn get_emissions_daily_trade(
        &self,
        bas_dd: &str,
    ) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::GEN, endpoint::ETS_BYDD_TRD, bas_dd).await
    }

    // ========================================
    // ESG 엔드포인트 (esg)
    // ========================================

    /// 사회책임투자채권 정보.
    pub async fn get_sri_bond_info(&self, bas_dd: &str) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::ESG, endpoint::SRI_BOND_INFO, bas_dd).await
    }

    /// ESG 증권상품.
    pub async fn get_esg_etp_info(&self, bas_dd: &str) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::ESG, endpoint::ESG_ETP_INFO, bas_dd).await
    }

    /// ESG 지수.
    pub async fn get_esg_index_info(&self, bas_dd: &str) -> Result<Vec<TypedRecord>, KrxError> {
        self.fetch(category::ESG, endpoint::ESG_INDEX_INFO, bas_dd).await
    }
}

/// 기준일자 형식 검증 (YYYYMMDD, 8자리 숫자).
fn validate_base_date(bas_dd: &str) -> Result<(), KrxError> {
    if bas_dd.len() == 8 && bas_dd.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(KrxError::InvalidDate(bas_dd.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_base_date() {
        assert!(validate_base_date("20240101").is_ok());
        assert!(validate_base_date("19991231").is_ok());

        assert!(validate_base_date("2024-01-01").is_err());
        assert!(validate_base_date("20241").is_err());
        assert!(validate_base_date("invalid").is_err());
        assert!(validate_base_date("").is_err());
        assert!(validate_base_date("202401015").is_err());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = KrxClient::new(KrxConfig::new(""));
        assert!(matches!(result, Err(KrxError::Config(_))));

        let result = KrxClient::new(KrxConfig::new("key").with_rate_limit(0, 1.0));
        assert!(matches!(result, Err(KrxError::Config(_))));
    }

    #[test]
    fn test_new_with_valid_config() {
        let client = KrxClient::new(KrxConfig::new("test-key")).unwrap();
        assert_eq!(client.config().api_key, "test-key");
        assert_eq!(client.config().timeout_secs, 30);
    }
}
