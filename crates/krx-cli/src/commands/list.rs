//! 엔드포인트 목록 출력 명령어.

use krx_client::ENDPOINTS;

/// 카테고리 코드의 표시 이름.
fn category_display_name(category: &str) -> &'static str {
    match category {
        "idx" => "지수",
        "sto" => "주식",
        "etp" => "증권상품",
        "bon" => "채권",
        "drv" => "파생상품",
        "gen" => "일반상품",
        "esg" => "ESG",
        _ => "기타",
    }
}

/// 사용 가능한 엔드포인트를 카테고리별로 출력합니다.
pub fn print_endpoints() {
    let mut current_category = "";

    for (path, category, description) in ENDPOINTS {
        if category != current_category {
            println!("\n{} ({}):", category_display_name(category), category);
            println!("{:-<50}", "");
            current_category = category;
        }
        println!("  {:<22} {}", path, description);
    }

    println!("\n총 {}개 엔드포인트", ENDPOINTS.len());
}
