//! 일별 시세 데이터 조회 명령어.
//!
//! 엔드포인트 경로와 기준일자를 받아 변환된 레코드를 JSON으로 출력하거나
//! 파일에 저장합니다.

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use krx_client::KrxClient;
use tracing::{debug, info};

/// 조회 설정.
pub struct FetchConfig {
    /// 엔드포인트 경로 (예: "kospi_dd_trd")
    pub endpoint: String,
    /// 기준일자 (YYYYMMDD)
    pub bas_dd: String,
    /// 출력 파일 경로 (없으면 stdout)
    pub output: Option<String>,
}

/// 기준일자 인자 파싱.
///
/// `YYYYMMDD`와 `YYYY-MM-DD` 형식을 모두 허용하며 `YYYYMMDD`로
/// 정규화합니다.
pub fn parse_base_date(s: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(s, "%Y%m%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .with_context(|| format!("Invalid date: {}. Expected YYYYMMDD or YYYY-MM-DD", s))?;

    Ok(date.format("%Y%m%d").to_string())
}

/// 엔드포인트 데이터를 조회하고 출력합니다. 레코드 수를 반환합니다.
pub async fn fetch_data(config: FetchConfig) -> Result<usize> {
    let client = KrxClient::from_env().context("Failed to create KRX client")?;

    debug!(endpoint = %config.endpoint, bas_dd = %config.bas_dd, "Fetching records");

    let records = client
        .fetch_endpoint(&config.endpoint, &config.bas_dd)
        .await
        .with_context(|| format!("Failed to fetch endpoint {}", config.endpoint))?;

    let json = serde_json::to_string_pretty(&records)?;

    match &config.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            let mut writer = BufWriter::new(file);
            writer.write_all(json.as_bytes())?;
            writer.write_all(b"\n")?;
            writer.flush()?;
            info!(path = %path, records = records.len(), "Saved records");
        }
        None => println!("{}", json),
    }

    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_date_compact() {
        assert_eq!(parse_base_date("20240105").unwrap(), "20240105");
    }

    #[test]
    fn test_parse_base_date_hyphenated() {
        assert_eq!(parse_base_date("2024-01-05").unwrap(), "20240105");
    }

    #[test]
    fn test_parse_base_date_invalid() {
        assert!(parse_base_date("invalid").is_err());
        assert!(parse_base_date("20241332").is_err());
        assert!(parse_base_date("05-01-2024").is_err());
    }
}
