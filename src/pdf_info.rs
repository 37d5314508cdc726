use anyhow::{anyhow, Result};
use lopdf::{Document, Object};
use tracing::debug;

/// What we can tell about a freshly rendered PDF without keeping it loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfSummary {
    pub pages: usize,
    pub version: String,
    pub bytes: usize,
}

impl PdfSummary {
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let document = Document::load_mem(data)
            .map_err(|e| anyhow!("Failed to parse rendered PDF: {}", e))?;

        let pages = document.get_pages().len();
        debug!(
            "Rendered PDF has {} pages (catalog count {:?})",
            pages,
            declared_page_count(&document)
        );

        Ok(Self {
            pages,
            version: document.version.clone(),
            bytes: data.len(),
        })
    }
}

/// `/Count` of the root page tree, if the catalog has one.
fn declared_page_count(document: &Document) -> Option<i64> {
    let catalog = document.catalog().ok()?;
    let pages_id = match catalog.get(b"Pages").ok()? {
        Object::Reference(id) => *id,
        _ => return None,
    };
    match document.get_object(pages_id).ok()? {
        Object::Dictionary(pages) => match pages.get(b"Count").ok()? {
            Object::Integer(count) => Some(*count),
            _ => None,
        },
        _ => None,
    }
}
