//! KRX OpenAPI CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # KOSPI 시리즈 일별시세정보 조회
//! krx fetch -e kospi_dd_trd -d 20240105
//!
//! # 유가증권 일별매매정보를 파일로 저장
//! krx fetch -e stk_bydd_trd -d 2024-01-05 -o stk_20240105.json
//!
//! # 사용 가능한 엔드포인트 목록 보기
//! krx list
//! ```
//!
//! API 키는 `KRX_OPENAPI_KEY` 환경 변수로 설정합니다 (.env 파일 지원).

use clap::{Parser, Subcommand};
use krx_client::{init_logging, LogConfig};
use tracing::{error, info};

mod commands;

use commands::fetch::{fetch_data, parse_base_date, FetchConfig};
use commands::list::print_endpoints;

#[derive(Parser)]
#[command(name = "krx")]
#[command(about = "KRX OpenAPI CLI - 한국거래소 일별 시세 조회 도구", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 엔드포인트의 일별 데이터 조회
    Fetch {
        /// 엔드포인트 경로 (예: kospi_dd_trd, `krx list` 참조)
        #[arg(short, long)]
        endpoint: String,

        /// 기준일자 (YYYYMMDD 또는 YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// 출력 파일 경로 (지정하지 않으면 stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// 사용 가능한 엔드포인트 목록 보기
    List,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env 파일 및 트레이싱 초기화
    dotenvy::dotenv().ok();
    init_logging(LogConfig::from_env())?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch {
            endpoint,
            date,
            output,
        } => {
            let bas_dd = parse_base_date(&date)?;

            let config = FetchConfig {
                endpoint: endpoint.clone(),
                bas_dd,
                output,
            };

            match fetch_data(config).await {
                Ok(count) => {
                    info!(endpoint = %endpoint, records = count, "Fetch completed");
                    println!("\n조회 완료: {}건", count);
                }
                Err(e) => {
                    error!("Fetch failed: {:#}", e);
                    return Err(e.into());
                }
            }
        }

        Commands::List => {
            print_endpoints();
        }
    }

    Ok(())
}
