use anyhow::{anyhow, Result};
use clap::Parser;
use colored::*;
use manual2pdf::{BuildError, ChromeRenderer, ManualBuilder, OutputTarget, DEFAULT_OUTPUT};
use std::path::PathBuf;
use std::process;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "manual2pdf")]
#[command(about = "고문서 손상 영역 인식 시스템 기술 문서 PDF 생성")]
#[command(version = "0.1.0")]
struct Args {
    /// 출력 PDF 파일명 (챕터 디렉토리 기준)
    #[arg(long = "output", default_value = DEFAULT_OUTPUT)]
    output: String,

    /// PDF 대신 중간 HTML 파일만 생성
    #[arg(long = "html-only")]
    html_only: bool,

    /// 챕터 Markdown 파일이 있는 디렉토리 (기본값: 실행 파일 위치)
    #[arg(short = 'd', long = "dir")]
    dir: Option<PathBuf>,

    /// Chrome/Chromium 실행 파일 경로
    #[arg(long = "chrome")]
    chrome: Option<PathBuf>,

    /// Chrome 샌드박스 비활성화 (root 권한으로 실행할 때 필요)
    #[arg(long = "no-sandbox")]
    no_sandbox: bool,
}

impl Args {
    fn source_dir(&self) -> Result<PathBuf> {
        match &self.dir {
            Some(dir) => Ok(dir.clone()),
            None => executable_dir(),
        }
    }

    fn target(&self, source_dir: &std::path::Path) -> OutputTarget {
        OutputTarget::resolve(source_dir, &self.output, self.html_only)
    }

    fn renderer(&self) -> ChromeRenderer {
        ChromeRenderer::new(self.chrome.clone()).with_no_sandbox(self.no_sandbox)
    }
}

fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent()
        .map(|p| p.to_path_buf())
        .ok_or_else(|| anyhow!("Cannot determine directory of {}", exe.display()))
}

async fn run(args: Args) -> Result<()> {
    let source_dir = args.source_dir()?;
    let target = args.target(&source_dir);
    let builder = ManualBuilder::new(source_dir, target, args.renderer());

    let report = builder.run().await?;
    info!(
        "{}/{} chapters merged into {}",
        report.chapters_found,
        report.chapters_found + report.chapters_missing,
        report.output.display()
    );
    for (i, heading) in report.headings.iter().enumerate() {
        info!("  {}: {}", i + 1, heading.as_str().blue());
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Set up logging with chromiumoxide errors suppressed
    let filter = EnvFilter::from_default_env()
        .add_directive("chromiumoxide::conn=off".parse().unwrap())
        .add_directive("chromiumoxide::handler=off".parse().unwrap())
        .add_directive("manual2pdf=info".parse().unwrap());

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        error!("{}", format!("오류: {}", e).red());
        if let Some(hint) = e.downcast_ref::<BuildError>().and_then(BuildError::remediation) {
            println!("{}", hint);
        }
        process::exit(1);
    }
}
