use colored::*;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::assembler::{assemble, current_cover_stamp};
use crate::converter::{markdown_to_html, outline};
use crate::error::BuildError;
use crate::merger::merge_chapters;
use crate::renderer::{write_html, OutputTarget, PdfEngine};

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub output: PathBuf,
    pub chapters_found: usize,
    pub chapters_missing: usize,
    pub headings: Vec<String>,
}

/// Drives merge, conversion, assembly and output once.
pub struct ManualBuilder<E> {
    source_dir: PathBuf,
    target: OutputTarget,
    engine: E,
    cover_stamp: Option<String>,
}

impl<E: PdfEngine> ManualBuilder<E> {
    pub fn new(source_dir: impl Into<PathBuf>, target: OutputTarget, engine: E) -> Self {
        Self {
            source_dir: source_dir.into(),
            target,
            engine,
            cover_stamp: None,
        }
    }

    pub fn with_cover_stamp(mut self, stamp: impl Into<String>) -> Self {
        self.cover_stamp = Some(stamp.into());
        self
    }

    pub async fn run(&self) -> Result<BuildReport, BuildError> {
        info!("Markdown 파일 병합 중...");
        let merged = merge_chapters(&self.source_dir).await?;

        if merged.is_blank() {
            return Err(BuildError::NoChapters(self.source_dir.clone()));
        }

        info!("Markdown -> HTML 변환 중...");
        let body = markdown_to_html(&merged.text);
        let headings = outline(&body);
        debug!("Top-level headings: {:?}", headings);

        let stamp = self
            .cover_stamp
            .clone()
            .unwrap_or_else(current_cover_stamp);
        let document = assemble(&body, &stamp);

        match &self.target {
            OutputTarget::Html(path) => {
                write_html(&document, path).await?;
                info!("HTML 파일 생성 완료: {}", path.display().to_string().green());
            }
            OutputTarget::Pdf(path) => {
                info!("PDF 생성 중: {}", path.display().to_string().blue());
                self.engine.render(&document, path).await?;
                info!("PDF 생성 완료: {}", path.display().to_string().green());
            }
        }

        Ok(BuildReport {
            output: self.target.path().to_path_buf(),
            chapters_found: merged.found.len(),
            chapters_missing: merged.missing.len(),
            headings,
        })
    }
}
