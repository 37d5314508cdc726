use chrono::{Datelike, Local};

use crate::chapters::CHAPTERS;

pub const DOCUMENT_TITLE: &str = "고문서 손상 영역 인식 시스템 기술 문서";

/// Print stylesheet embedded verbatim into every document.
pub const STYLESHEET: &str = include_str!("print.css");

/// Cover date stamp, e.g. `2026년 03월`.
pub fn cover_stamp(date: impl Datelike) -> String {
    format!("{}년 {:02}월", date.year(), date.month())
}

pub fn current_cover_stamp() -> String {
    cover_stamp(Local::now().date_naive())
}

pub fn cover_page(stamp: &str) -> String {
    format!(
        r#"
<div class="cover-page">
    <div class="cover-title">고문서 손상 영역 인식 시스템</div>
    <div class="cover-subtitle">Ancient Document Damage Detection System</div>
    <div class="cover-subtitle">기술 문서</div>
    <div class="cover-info">
        버전 1.0<br>
        {}<br>
    </div>
</div>
"#,
        stamp
    )
}

/// Table of contents built from the chapter registry, independent of which
/// chapter files were actually found.
pub fn toc_page() -> String {
    let items = CHAPTERS
        .iter()
        .map(|c| format!("        <li>{} &mdash; {}</li>", c.label(), c.title))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"
<div class="toc-page">
    <h1>목차</h1>
    <ul>
{}
    </ul>
</div>
"#,
        items
    )
}

/// Wraps the converted body with the stylesheet, cover and table of contents.
pub fn assemble(body_html: &str, stamp: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
{cover}
{toc}
{body}
</body>
</html>"#,
        title = DOCUMENT_TITLE,
        css = STYLESHEET,
        cover = cover_page(stamp),
        toc = toc_page(),
        body = body_html,
    )
}
