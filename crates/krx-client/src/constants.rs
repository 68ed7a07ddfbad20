//! KRX OpenAPI 상수 및 엔드포인트 매핑.

/// KRX OpenAPI 기본 URL.
pub const BASE_URL: &str = "https://data-dbg.krx.co.kr/svc/apis";

/// API 카테고리 코드.
pub mod category {
    /// 지수
    pub const IDX: &str = "idx";
    /// 주식
    pub const STO: &str = "sto";
    /// 증권상품 (ETF/ETN/ELW)
    pub const ETP: &str = "etp";
    /// 채권
    pub const BON: &str = "bon";
    /// 파생상품
    pub const DRV: &str = "drv";
    /// 일반상품
    pub const GEN: &str = "gen";
    /// ESG
    pub const ESG: &str = "esg";
}

/// 엔드포인트 경로 상수 모음.
///
/// 모든 엔드포인트는 기준일자(`basDd`) 하나를 파라미터로 받아
/// 해당 일자의 시세/정보 레코드 목록을 반환합니다.
pub mod endpoint {
    // ========================================
    // 지수 (idx)
    // ========================================

    /// KRX 시리즈 일별시세정보
    pub const KRX_DD_TRD: &str = "krx_dd_trd";
    /// KOSPI 시리즈 일별시세정보
    pub const KOSPI_DD_TRD: &str = "kospi_dd_trd";
    /// KOSDAQ 시리즈 일별시세정보
    pub const KOSDAQ_DD_TRD: &str = "kosdaq_dd_trd";
    /// 채권지수 시세정보
    pub const BON_DD_TRD: &str = "bon_dd_trd";
    /// 파생상품지수 시세정보
    pub const DRVPROD_DD_TRD: &str = "drvprod_dd_trd";

    // ========================================
    // 주식 (sto)
    // ========================================

    /// 유가증권 일별매매정보
    pub const STK_BYDD_TRD: &str = "stk_bydd_trd";
    /// 코스닥 일별매매정보
    pub const KSQ_BYDD_TRD: &str = "ksq_bydd_trd";
    /// 코넥스 일별매매정보
    pub const KNX_BYDD_TRD: &str = "knx_bydd_trd";
    /// 신주인수권증권 일별매매정보
    pub const SW_BYDD_TRD: &str = "sw_bydd_trd";
    /// 신주인수권증서 일별매매정보
    pub const SR_BYDD_TRD: &str = "sr_bydd_trd";
    /// 유가증권 종목기본정보
    pub const STK_ISU_BASE_INFO: &str = "stk_isu_base_info";
    /// 코스닥 종목기본정보
    pub const KSQ_ISU_BASE_INFO: &str = "ksq_isu_base_info";
    /// 코넥스 종목기본정보
    pub const KNX_ISU_BASE_INFO: &str = "knx_isu_base_info";

    // ========================================
    // 증권상품 (etp)
    // ========================================

    /// ETF 일별매매정보
    pub const ETF_BYDD_TRD: &str = "etf_bydd_trd";
    /// ETN 일별매매정보
    pub const ETN_BYDD_TRD: &str = "etn_bydd_trd";
    /// ELW 일별매매정보
    pub const ELW_BYDD_TRD: &str = "elw_bydd_trd";

    // ========================================
    // 채권 (bon)
    // ========================================

    /// 국채전문유통시장 일별매매정보
    pub const KTS_BYDD_TRD: &str = "kts_bydd_trd";
    /// 일반채권시장 일별매매정보
    pub const BND_BYDD_TRD: &str = "bnd_bydd_trd";
    /// 소액채권시장 일별매매정보
    pub const SMB_BYDD_TRD: &str = "smb_bydd_trd";

    // ========================================
    // 파생상품 (drv)
    // ========================================

    /// 선물 일별매매정보 (주식선물外)
    pub const FUT_BYDD_TRD: &str = "fut_bydd_trd";
    /// 주식선물(유가) 일별매매정보
    pub const EQSFU_STK_BYDD_TRD: &str = "eqsfu_stk_bydd_trd";
    /// 주식선물(코스닥) 일별매매정보
    pub const EQKFU_KSQ_BYDD_TRD: &str = "eqkfu_ksq_bydd_trd";
    /// 옵션 일별매매정보 (주식옵션外)
    pub const OPT_BYDD_TRD: &str = "opt_bydd_trd";
    /// 주식옵션(유가) 일별매매정보
    pub const EQSOP_BYDD_TRD: &str = "eqsop_bydd_trd";
    /// 주식옵션(코스닥) 일별매매정보
    pub const EQKOP_BYDD_TRD: &str = "eqkop_bydd_trd";

    // ========================================
    // 일반상품 (gen)
    // ========================================

    /// 석유시장 일별매매정보
    pub const OIL_BYDD_TRD: &str = "oil_bydd_trd";
    /// 금시장 일별매매정보
    pub const GOLD_BYDD_TRD: &str = "gold_bydd_trd";
    /// 배출권 시장 일별매매정보
    pub const ETS_BYDD_TRD: &str = "ets_bydd_trd";

    // ========================================
    // ESG (esg)
    // ========================================

    /// 사회책임투자채권 정보
    pub const SRI_BOND_INFO: &str = "sri_bond_info";
    /// ESG 증권상품
    pub const ESG_ETP_INFO: &str = "esg_etp_info";
    /// ESG 지수
    pub const ESG_INDEX_INFO: &str = "esg_index_info";
}

/// 엔드포인트 매핑 테이블: (경로, 카테고리, 설명).
pub const ENDPOINTS: [(&str, &str, &str); 31] = [
    // 지수 (idx)
    (endpoint::KRX_DD_TRD, category::IDX, "KRX 시리즈 일별시세정보"),
    (endpoint::KOSPI_DD_TRD, category::IDX, "KOSPI 시리즈 일별시세정보"),
    (endpoint::KOSDAQ_DD_TRD, category::IDX, "KOSDAQ 시리즈 일별시세정보"),
    (endpoint::BON_DD_TRD, category::IDX, "채권지수 시세정보"),
    (endpoint::DRVPROD_DD_TRD, category::IDX, "파생상품지수 시세정보"),
    // 주식 (sto)
    (endpoint::STK_BYDD_TRD, category::STO, "유가증권 일별매매정보"),
    (endpoint::KSQ_BYDD_TRD, category::STO, "코스닥 일별매매정보"),
    (endpoint::KNX_BYDD_TRD, category::STO, "코넥스 일별매매정보"),
    (endpoint::SW_BYDD_TRD, category::STO, "신주인수권증권 일별매매정보"),
    (endpoint::SR_BYDD_TRD, category::STO, "신주인수권증서 일별매매정보"),
    (endpoint::STK_ISU_BASE_INFO, category::STO, "유가증권 종목기본정보"),
    (endpoint::KSQ_ISU_BASE_INFO, category::STO, "코스닥 종목기본정보"),
    (endpoint::KNX_ISU_BASE_INFO, category::STO, "코넥스 종목기본정보"),
    // 증권상품 (etp)
    (endpoint::ETF_BYDD_TRD, category::ETP, "ETF 일별매매정보"),
    (endpoint::ETN_BYDD_TRD, category::ETP, "ETN 일별매매정보"),
    (endpoint::ELW_BYDD_TRD, category::ETP, "ELW 일별매매정보"),
    // 채권 (bon)
    (endpoint::KTS_BYDD_TRD, category::BON, "국채전문유통시장 일별매매정보"),
    (endpoint::BND_BYDD_TRD, category::BON, "일반채권시장 일별매매정보"),
    (endpoint::SMB_BYDD_TRD, category::BON, "소액채권시장 일별매매정보"),
    // 파생상품 (drv)
    (endpoint::FUT_BYDD_TRD, category::DRV, "선물 일별매매정보 (주식선물外)"),
    (endpoint::EQSFU_STK_BYDD_TRD, category::DRV, "주식선물(유가) 일별매매정보"),
    (endpoint::EQKFU_KSQ_BYDD_TRD, category::DRV, "주식선물(코스닥) 일별매매정보"),
    (endpoint::OPT_BYDD_TRD, category::DRV, "옵션 일별매매정보 (주식옵션外)"),
    (endpoint::EQSOP_BYDD_TRD, category::DRV, "주식옵션(유가) 일별매매정보"),
    (endpoint::EQKOP_BYDD_TRD, category::DRV, "주식옵션(코스닥) 일별매매정보"),
    // 일반상품 (gen)
    (endpoint::OIL_BYDD_TRD, category::GEN, "석유시장 일별매매정보"),
    (endpoint::GOLD_BYDD_TRD, category::GEN, "금시장 일별매매정보"),
    (endpoint::ETS_BYDD_TRD, category::GEN, "배출권 시장 일별매매정보"),
    // ESG (esg)
    (endpoint::SRI_BOND_INFO, category::ESG, "사회책임투자채권 정보"),
    (endpoint::ESG_ETP_INFO, category::ESG, "ESG 증권상품"),
    (endpoint::ESG_INDEX_INFO, category::ESG, "ESG 지수"),
];

/// 엔드포인트 경로의 카테고리를 조회합니다.
pub fn category_for(endpoint_path: &str) -> Option<&'static str> {
    ENDPOINTS
        .iter()
        .find(|(path, _, _)| *path == endpoint_path)
        .map(|(_, category, _)| *category)
}

/// 엔드포인트 경로의 설명을 조회합니다.
pub fn description_for(endpoint_path: &str) -> Option<&'static str> {
    ENDPOINTS
        .iter()
        .find(|(path, _, _)| *path == endpoint_path)
        .map(|(_, _, description)| *description)
}
