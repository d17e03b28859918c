//! 섹터 로테이션 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 최신 거래일 목표 비중 (기본 프리셋)
//! rotation decide -i data/sectors.json
//!
//! # 상위 2개 프리셋, 표 출력
//! rotation decide -i data/sectors.json -p sector_top2 -f table
//!
//! # 일자별 리플레이
//! rotation replay -i data/sectors.json -p sector_rsi_dip --from 126
//!
//! # 프리셋 목록 / 정책 보기
//! rotation presets
//! rotation presets --show sector_top1
//! ```

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use rotation_core::{init_logging, LogConfig};
use std::path::PathBuf;
use tracing::info;

use rotation_cli::commands::decide::{run_decide, OutputFormat};
use rotation_cli::commands::input::{build_strategy, load_window, ConfigFile};
use rotation_cli::commands::presets::{list_presets, show_preset};
use rotation_cli::commands::replay::{render_rows, replay};

#[derive(Parser)]
#[command(name = "rotation")]
#[command(about = "Sector rotation CLI - 섹터 ETF 모멘텀 로테이션 의사결정", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 최신 거래일 목표 비중 계산
    Decide {
        /// 호스트 페이로드 JSON 파일 ({"ohlcv": ...})
        #[arg(short, long)]
        input: PathBuf,

        /// 프리셋 ID 또는 별칭 (기본: sector_top1)
        #[arg(short, long)]
        preset: Option<String>,

        /// 설정 파일 (앱 설정 또는 정책 TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// 출력 형식
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// 윈도우 접두 구간마다 의사결정 반복
    Replay {
        /// 호스트 페이로드 JSON 파일
        #[arg(short, long)]
        input: PathBuf,

        /// 프리셋 ID 또는 별칭 (기본: sector_top1)
        #[arg(short, long)]
        preset: Option<String>,

        /// 설정 파일 (앱 설정 또는 정책 TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// 시작 인덱스 (0부터)
        #[arg(long, default_value = "0")]
        from: usize,

        /// 출력 형식
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// 프리셋 목록 보기
    Presets {
        /// 지정한 프리셋의 정책을 TOML로 출력
        #[arg(long)]
        show: Option<String>,
    },
}

impl Commands {
    fn config_path(&self) -> Option<&PathBuf> {
        match self {
            Commands::Decide { config, .. } | Commands::Replay { config, .. } => config.as_ref(),
            Commands::Presets { .. } => None,
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = cli
        .command
        .config_path()
        .map(|path| ConfigFile::load(path))
        .transpose()?;

    let log_config = config
        .as_ref()
        .map(ConfigFile::log_config)
        .unwrap_or_else(LogConfig::from_env);
    init_logging(log_config).map_err(|e| anyhow!("로깅 초기화 실패: {}", e))?;

    match cli.command {
        Commands::Decide {
            input,
            preset,
            format,
            ..
        } => {
            let strategy = build_strategy(preset.as_deref(), config.as_ref())?;
            let window = load_window(&input)?;
            info!(strategy = strategy.id(), days = window.len(), "의사결정 실행");

            println!("{}", run_decide(&strategy, &window, format)?);
        }

        Commands::Replay {
            input,
            preset,
            from,
            format,
            ..
        } => {
            let strategy = build_strategy(preset.as_deref(), config.as_ref())?;
            let window = load_window(&input)?;
            info!(strategy = strategy.id(), days = window.len(), from, "리플레이 실행");

            let rows = replay(&strategy, &window, from)?;
            println!("{}", render_rows(&rows, format)?);
        }

        Commands::Presets { show } => match show {
            Some(id) => println!("{}", show_preset(&id)?),
            None => println!("{}", list_presets()),
        },
    }

    Ok(())
}
