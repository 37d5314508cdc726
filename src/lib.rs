//! # manual2pdf
//!
//! Builds the technical manual of the ancient document damage detection
//! system from its ten Markdown chapters into a single PDF.
//!
//! ## Pipeline
//!
//! - merge the registered chapters in reading order
//! - convert the merged Markdown to HTML
//! - wrap it with a cover page, table of contents and print stylesheet
//! - print it to PDF with headless Chrome, or write the HTML as is
//!
//! ## Usage
//!
//! ```bash
//! manual2pdf --dir docs/manual
//! manual2pdf --output manual.pdf --html-only
//! ```

mod assembler;
mod builder;
mod chapters;
mod converter;
mod error;
mod merger;
mod pdf_info;
mod renderer;

pub use assembler::{assemble, cover_page, cover_stamp, toc_page, DOCUMENT_TITLE, STYLESHEET};
pub use builder::{BuildReport, ManualBuilder};
pub use chapters::{Chapter, CHAPTERS};
pub use converter::{markdown_to_html, outline};
pub use error::BuildError;
pub use merger::{merge_chapters, MergedDocument, CHAPTER_SEPARATOR};
pub use pdf_info::PdfSummary;
pub use renderer::{html_file_name, ChromeRenderer, OutputTarget, PdfEngine, DEFAULT_OUTPUT};
