use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("병합할 Markdown 파일이 없습니다: {}", .0.display())]
    NoChapters(PathBuf),
    #[error("PDF 렌더러(Chrome/Chromium)를 사용할 수 없습니다: {0}")]
    RendererUnavailable(String),
    #[error("PDF 렌더링 실패: {0}")]
    Render(String),
    #[error("파일 입출력 오류 ({}): {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BuildError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Installation hints for errors the user can fix by setting up a
    /// missing tool.
    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            Self::RendererUnavailable(_) => Some(RENDERER_REMEDIATION),
            _ => None,
        }
    }
}

const RENDERER_REMEDIATION: &str = "\
Chrome 또는 Chromium 브라우저가 필요합니다.
설치 예:
  Ubuntu/Debian: sudo apt install chromium
  macOS:         brew install --cask google-chrome

브라우저가 표준 위치에 없다면 --chrome <경로> 옵션으로 실행 파일을 지정하십시오.
root 권한(Docker, CI 등)으로 실행 중이라면 Chrome이 샌드박스 없이는 시작되지 않으므로
--no-sandbox 옵션을 추가하십시오.
--html-only 옵션으로 중간 HTML 파일만 생성할 수도 있습니다.

대안으로 pandoc을 사용할 수 있습니다:
  pandoc -o output.pdf --pdf-engine=xelatex \\
    -V mainfont='Noto Sans KR' \\
    -V geometry:margin=25mm \\
    01-개요.md 02-시스템-구조.md ... 10-데이터-구조.md";
