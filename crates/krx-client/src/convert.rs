//! KRX API 응답 데이터 타입 변환.
//!
//! KRX OpenAPI는 모든 필드 값을 문자열로 반환합니다. 이 모듈은 필드명
//! 패턴을 기반으로 문자열 값을 자연스러운 타입(날짜, 정수, 실수)으로
//! 변환합니다. 변환은 실패하지 않습니다 — 변환할 수 없는 값은 원본
//! 문자열 그대로 유지됩니다.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

/// 변환 전 원본 레코드 (필드명 → 문자열 값).
pub type RawRecord = HashMap<String, String>;

/// 변환 후 레코드 (필드명 → 타입 지정 값).
pub type TypedRecord = HashMap<String, FieldValue>;

/// 필드명 패턴에 따라 변환된 필드 값.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// 빈 값 ("", "-")
    Null,
    /// 정수 (거래량, 건수)
    Int(i64),
    /// 실수 (가격, 금액, 지수, 비율)
    Float(f64),
    /// 날짜 (YYYYMMDD)
    Date(NaiveDate),
    /// 원본 문자열
    Text(String),
}

impl FieldValue {
    /// 빈 값인지 확인.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// 정수 값 반환.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// 실수 값 반환.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            FieldValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// 날짜 값 반환.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(value) => Some(*value),
            _ => None,
        }
    }

    /// 문자열 값 반환.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

/// 숫자 필드 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumericKind {
    Price,
    Volume,
    Amount,
    Index,
    Rate,
    Ratio,
    Count,
}

impl NumericKind {
    /// 정수로 변환해야 하는 분류인지 확인 (거래량, 건수).
    fn is_integer(self) -> bool {
        matches!(self, NumericKind::Volume | NumericKind::Count)
    }
}

/// 날짜 변환 대상 필드명 접미사. 먼저 일치하는 접미사에서 탐색이 끝납니다.
const DATE_FIELD_PATTERNS: [&str; 3] = ["DD", "DT", "DATE"];

/// 숫자 변환 대상 필드명 부분 문자열.
///
/// 대문자화된 필드명에 부분 문자열이 처음 일치하는 분류가 적용됩니다.
const NUMERIC_FIELD_PATTERNS: [(NumericKind, &[&str]); 7] = [
    (
        NumericKind::Price,
        &[
            "PRC", "PRICE", "CLSPRC", "OPNPRC", "HGPRC", "LWPRC", "PARVAL", "SETL_PRC",
        ],
    ),
    (
        NumericKind::Volume,
        &["VOL", "TRDVOL", "QTY", "OPNINT_QTY", "SHRS"],
    ),
    (NumericKind::Amount, &["AMT", "VAL", "TRDVAL", "CAP"]),
    (NumericKind::Index, &["IDX", "INDEX"]),
    (NumericKind::Rate, &["RT", "RATE", "FLUC_RT"]),
    (NumericKind::Ratio, &["RATIO"]),
    (NumericKind::Count, &["CNT", "COUNT"]),
];

/// 필드명 패턴에 따라 필드 값을 변환합니다.
///
/// 규칙은 다음 순서로 적용됩니다:
/// 1. 빈 값("", 공백, "-") → [`FieldValue::Null`]
/// 2. 날짜 접미사 필드의 유효한 YYYYMMDD 값 → [`FieldValue::Date`].
///    날짜 파싱에 실패하면 이후 규칙으로 넘어갑니다.
/// 3. 숫자 분류 필드 → [`FieldValue::Int`] 또는 [`FieldValue::Float`].
///    파싱에 실패하면 원본 문자열을 반환합니다.
/// 4. 그 외 → 원본 문자열
pub fn convert_field(field_name: &str, value: &str) -> FieldValue {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return FieldValue::Null;
    }

    // 날짜 변환 시도
    for pattern in DATE_FIELD_PATTERNS {
        if field_name.ends_with(pattern) {
            if value.len() == 8 && value.bytes().all(|b| b.is_ascii_digit()) {
                if let Ok(date) = NaiveDate::parse_from_str(value, "%Y%m%d") {
                    return FieldValue::Date(date);
                }
            }
            break;
        }
    }

    // 필드 분류에 따라 숫자 변환 시도
    let field_upper = field_name.to_uppercase();

    for (kind, patterns) in NUMERIC_FIELD_PATTERNS {
        for pattern in patterns {
            if field_upper.contains(pattern) {
                // 쉼표 및 서식 제거
                let cleaned = value.replace(',', "");
                let cleaned = cleaned.trim();

                return match cleaned.parse::<f64>() {
                    // 거래량과 건수 필드는 정수로 절사
                    Ok(parsed) if kind.is_integer() && parsed.is_finite() => {
                        FieldValue::Int(parsed as i64)
                    }
                    Ok(parsed) if !kind.is_integer() => FieldValue::Float(parsed),
                    // 변환 실패 시 원본 문자열 유지
                    _ => FieldValue::Text(value.to_string()),
                };
            }
        }
    }

    FieldValue::Text(value.to_string())
}

/// 단일 레코드의 모든 필드를 변환합니다.
pub fn convert_record(record: &RawRecord) -> TypedRecord {
    record
        .iter()
        .map(|(field, value)| (field.clone(), convert_field(field, value)))
        .collect()
}

/// 응답의 모든 레코드를 순서를 유지하며 변환합니다.
pub fn convert_response(records: &[RawRecord]) -> Vec<TypedRecord> {
    records.iter().map(convert_record).collect()
}
