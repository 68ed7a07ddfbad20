//! KRX OpenAPI 클라이언트 통합 테스트.
//!
//! 로컬 mock HTTP 서버에 대해 클라이언트의 요청 구성, 상태 코드 처리,
//! 응답 변환, 요청 속도 제한을 검증합니다.

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use krx_client::{FieldValue, KrxClient, KrxConfig, KrxError};
use mockito::Matcher;

/// 표준 KRX API 응답 본문.
const MOCK_RESPONSE: &str = r#"{
    "OutBlock_1": [
        {
            "BAS_DD": "20240101",
            "IDX_NM": "KOSPI",
            "CLSPRC_IDX": "2655.50",
            "ACC_TRDVOL": "1,234,567"
        }
    ]
}"#;

fn test_client(base_url: &str) -> KrxClient {
    KrxClient::new(KrxConfig::new("test-key").with_base_url(base_url)).unwrap()
}

#[tokio::test]
async fn test_fetch_success_converts_record_types() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/idx/kospi_dd_trd")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("AUTH_KEY".into(), "test-key".into()),
            Matcher::UrlEncoded("basDd".into(), "20240101".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(MOCK_RESPONSE)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let records = client.get_kospi_daily_trade("20240101").await.unwrap();

    mock.assert_async().await;

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(
        record["BAS_DD"],
        FieldValue::Date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    );
    assert_eq!(record["IDX_NM"], FieldValue::Text("KOSPI".to_string()));
    assert_eq!(record["CLSPRC_IDX"], FieldValue::Float(2655.50));
    assert_eq!(record["ACC_TRDVOL"], FieldValue::Int(1234567));
}

#[tokio::test]
async fn test_fetch_endpoint_resolves_category() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/sto/stk_bydd_trd")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"OutBlock_1": []}"#)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let records = client.fetch_endpoint("stk_bydd_trd", "20240115").await.unwrap();

    mock.assert_async().await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_fetch_endpoint_unknown_path() {
    let server = mockito::Server::new_async().await;

    let client = test_client(&server.url());
    let result = client.fetch_endpoint("no_such_endpoint", "20240115").await;

    assert!(matches!(result, Err(KrxError::ApiError(_))));
}

#[tokio::test]
async fn test_invalid_date_rejected_before_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = test_client(&server.url());

    for bas_dd in ["2024-01-01", "20241", "invalid"] {
        let result = client.get_kospi_daily_trade(bas_dd).await;
        assert!(matches!(result, Err(KrxError::InvalidDate(_))));
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn test_401_maps_to_unauthorized() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/idx/kospi_dd_trd")
        .match_query(Matcher::Any)
        .with_status(401)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let result = client.get_kospi_daily_trade("20240101").await;

    let err = result.unwrap_err();
    assert!(err.is_auth_error());
    assert!(err.to_string().contains("Invalid API key"));
}

#[tokio::test]
async fn test_429_maps_to_rate_limited() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/idx/kospi_dd_trd")
        .match_query(Matcher::Any)
        .with_status(429)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let result = client.get_kospi_daily_trade("20240101").await;

    assert!(matches!(result, Err(KrxError::RateLimited)));
}

#[tokio::test]
async fn test_500_maps_to_server_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/idx/kospi_dd_trd")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let client = test_client(&server.url());
    let result = client.get_kospi_daily_trade("20240101").await;

    match result {
        Err(KrxError::ServerError { status, message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("Internal Server Error"));
        }
        other => panic!("expected server error, got {:?}", other.map(|r| r.len())),
    }
}

#[tokio::test]
async fn test_connection_error_is_retryable() {
    // 아무도 수신하지 않는 포트
    let client = test_client("http://127.0.0.1:1");
    let result = client.get_kospi_daily_trade("20240101").await;

    let err = result.unwrap_err();
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_invalid_json_maps_to_parse_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/idx/kospi_dd_trd")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("Not valid JSON")
        .create_async()
        .await;

    let client = test_client(&server.url());
    let result = client.get_kospi_daily_trade("20240101").await;

    assert!(matches!(result, Err(KrxError::ParseError(_))));
}

#[tokio::test]
async fn test_missing_outblock_returns_empty() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/idx/kospi_dd_trd")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"some_other_key": "value"}"#)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let records = client.get_kospi_daily_trade("20240101").await.unwrap();

    assert!(records.is_empty());
}

#[tokio::test]
async fn test_rate_limit_applies_across_calls() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/idx/kospi_dd_trd")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"OutBlock_1": []}"#)
        .expect(3)
        .create_async()
        .await;

    let config = KrxConfig::new("test-key")
        .with_base_url(server.url())
        .with_rate_limit(2, 0.3);
    let client = KrxClient::new(config).unwrap();

    let start = Instant::now();
    for _ in 0..3 {
        client.get_kospi_daily_trade("20240101").await.unwrap();
    }

    // 세 번째 호출은 시간 창 대기를 거쳐야 함
    assert!(start.elapsed() >= Duration::from_millis(300));
}
