use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::{debug, warn};

use crate::chapters::{Chapter, CHAPTERS};
use crate::error::BuildError;

/// Inserted between consecutive chapters: blank line, rule, blank line.
pub const CHAPTER_SEPARATOR: &str = "\n\n---\n\n";

#[derive(Debug, Clone, Default)]
pub struct MergedDocument {
    pub text: String,
    pub found: Vec<Chapter>,
    pub missing: Vec<Chapter>,
}

impl MergedDocument {
    /// True when no chapter contributed any non-whitespace text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Reads every registered chapter from `dir` in registry order and joins the
/// ones that exist. Absent files are reported and skipped.
pub async fn merge_chapters(dir: &Path) -> Result<MergedDocument, BuildError> {
    let mut parts = Vec::new();
    let mut merged = MergedDocument::default();

    for chapter in CHAPTERS.iter() {
        let path = dir.join(chapter.file);
        match fs::read_to_string(&path).await {
            Ok(content) => {
                debug!("Read {} ({} bytes)", path.display(), content.len());
                parts.push(content);
                merged.found.push(*chapter);
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("경고: {} 파일이 존재하지 않습니다. 건너뜁니다.", chapter.file);
                merged.missing.push(*chapter);
            }
            Err(e) => return Err(BuildError::io(path, e)),
        }
    }

    merged.text = parts.join(CHAPTER_SEPARATOR);
    Ok(merged)
}
