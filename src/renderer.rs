use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;
use chromiumoxide::{Browser, BrowserConfig};
use colored::*;
use futures_util::StreamExt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tracing::{debug, error, info, warn};

use crate::error::BuildError;
use crate::pdf_info::PdfSummary;

pub const DEFAULT_OUTPUT: &str = "고문서_손상영역_인식시스템_기술문서.pdf";

/// Where the single artifact of a run goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Pdf(PathBuf),
    Html(PathBuf),
}

impl OutputTarget {
    /// Resolves `name` against the chapter directory. In HTML-only mode a
    /// trailing `.pdf` becomes `.html`.
    pub fn resolve(dir: &Path, name: &str, html_only: bool) -> Self {
        if html_only {
            Self::Html(dir.join(html_file_name(name)))
        } else {
            Self::Pdf(dir.join(name))
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Pdf(path) | Self::Html(path) => path,
        }
    }
}

pub fn html_file_name(name: &str) -> String {
    match name.strip_suffix(".pdf") {
        Some(stem) => format!("{}.html", stem),
        None => name.to_string(),
    }
}

/// Turns a complete HTML document into a PDF file.
#[allow(async_fn_in_trait)]
pub trait PdfEngine {
    async fn render(&self, html: &str, output: &Path) -> Result<(), BuildError>;
}

pub async fn write_html(html: &str, output: &Path) -> Result<(), BuildError> {
    ensure_parent(output).await?;
    fs::write(output, html)
        .await
        .map_err(|e| BuildError::io(output, e))
}

async fn ensure_parent(path: &Path) -> Result<(), BuildError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| BuildError::io(parent, e))?;
    }
    Ok(())
}

#[derive(Debug, Clone)]
struct PdfOptions {
    scale: f64,
    print_background: bool,
    /// Lets the stylesheet's `@page` rule pick paper size and margins.
    prefer_css_page_size: bool,
    /// Time given to web fonts after the content is set.
    settle: Duration,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            print_background: true,
            prefer_css_page_size: true,
            settle: Duration::from_millis(1000),
        }
    }
}

/// Prints through a headless Chrome/Chromium instance.
pub struct ChromeRenderer {
    chrome: Option<PathBuf>,
    no_sandbox: bool,
    pdf_options: PdfOptions,
}

impl ChromeRenderer {
    pub fn new(chrome: Option<PathBuf>) -> Self {
        Self {
            chrome,
            no_sandbox: false,
            pdf_options: PdfOptions::default(),
        }
    }

    /// Chrome refuses to start as root (containers, CI) unless its sandbox
    /// is disabled.
    pub fn with_no_sandbox(mut self, no_sandbox: bool) -> Self {
        self.no_sandbox = no_sandbox;
        self
    }

    fn browser_config(&self) -> Result<BrowserConfig, BuildError> {
        let mut builder = BrowserConfig::builder();
        if let Some(chrome) = &self.chrome {
            builder = builder.chrome_executable(chrome);
        }
        if self.no_sandbox {
            builder = builder.no_sandbox();
        }
        builder.build().map_err(BuildError::RendererUnavailable)
    }

    async fn print(&self, browser: &Browser, html: &str) -> Result<Vec<u8>, BuildError> {
        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| BuildError::Render(format!("Failed to create new page: {}", e)))?;

        page.set_content(html)
            .await
            .map_err(|e| BuildError::Render(format!("Failed to set page content: {}", e)))?;

        tokio::time::sleep(self.pdf_options.settle).await;

        let params = PrintToPdfParams {
            scale: Some(self.pdf_options.scale),
            print_background: Some(self.pdf_options.print_background),
            prefer_css_page_size: Some(self.pdf_options.prefer_css_page_size),
            margin_top: Some(0.0),
            margin_right: Some(0.0),
            margin_bottom: Some(0.0),
            margin_left: Some(0.0),
            ..Default::default()
        };

        page.pdf(params)
            .await
            .map_err(|e| BuildError::Render(format!("Failed to generate PDF: {}", e)))
    }
}

impl PdfEngine for ChromeRenderer {
    async fn render(&self, html: &str, output: &Path) -> Result<(), BuildError> {
        let config = self.browser_config()?;

        let (mut browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| BuildError::RendererUnavailable(e.to_string()))?;

        let handle = tokio::spawn(async move {
            while let Some(h) = handler.next().await {
                if let Err(err) = h {
                    let err_str = err.to_string();
                    if err_str.contains("data did not match any variant")
                        || err_str.contains("untagged enum Message")
                    {
                        debug!("Chrome protocol message ignored: {}", err);
                    } else {
                        error!("Browser handler error: {}", err);
                    }
                }
            }
        });

        let result = self.print(&browser, html).await;

        browser.close().await.ok();
        handle.abort();

        let pdf_data = result?;

        ensure_parent(output).await?;
        fs::write(output, &pdf_data)
            .await
            .map_err(|e| BuildError::io(output, e))?;

        match PdfSummary::from_bytes(&pdf_data) {
            Ok(summary) => info!(
                "{} 페이지 (PDF {}, {} bytes)",
                summary.pages.to_string().green(),
                summary.version,
                summary.bytes
            ),
            Err(e) => warn!("Rendered file could not be inspected: {}", e),
        }

        Ok(())
    }
}
