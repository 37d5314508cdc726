use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};
use scraper::{Html, Selector};
use slug::slugify;
use std::collections::HashSet;

/// Converts the merged Markdown into an HTML fragment.
///
/// Enabled on top of CommonMark: tables, a `highlight` wrapper around every
/// code block (the language class comes only from the fence info string),
/// slugged `id`s on headings and single newlines rendered as `<br />`.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES);
    let events = rewrite_events(parser);

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter());
    out
}

fn rewrite_events<'a>(parser: impl Iterator<Item = Event<'a>>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut anchors = Anchors::default();
    let mut open_heading: Option<usize> = None;
    let mut heading_text = String::new();

    for event in parser {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                open_heading = Some(events.len());
                heading_text.clear();
                events.push(event);
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(index) = open_heading.take() {
                    if let Event::Start(Tag::Heading { id, .. }) = &mut events[index] {
                        *id = Some(anchors.claim(&heading_text).into());
                    }
                }
                events.push(event);
            }
            Event::Text(ref text) | Event::Code(ref text) if open_heading.is_some() => {
                heading_text.push_str(text);
                events.push(event);
            }
            Event::SoftBreak => events.push(Event::HardBreak),
            Event::Start(Tag::CodeBlock(_)) => {
                events.push(Event::Html("<div class=\"highlight\">".into()));
                events.push(event);
            }
            Event::End(TagEnd::CodeBlock) => {
                events.push(event);
                events.push(Event::Html("</div>\n".into()));
            }
            other => events.push(other),
        }
    }

    events
}

/// Hands out unique heading ids. Only the ASCII part of a heading feeds the
/// slug, so Hangul-only headings fall back to `_1`, `_2`... like collisions.
#[derive(Default)]
struct Anchors {
    used: HashSet<String>,
}

impl Anchors {
    fn claim(&mut self, heading: &str) -> String {
        let ascii: String = heading.chars().filter(char::is_ascii).collect();
        let base = slugify(ascii);
        let mut candidate = base.clone();
        let mut n = 0;
        while candidate.is_empty() || self.used.contains(&candidate) {
            n += 1;
            candidate = format!("{}_{}", base, n);
        }
        self.used.insert(candidate.clone());
        candidate
    }
}

/// Text of every top-level heading in an HTML fragment, in document order.
pub fn outline(fragment: &str) -> Vec<String> {
    let document = Html::parse_fragment(fragment);
    let selector = Selector::parse("h1").unwrap();

    document
        .select(&selector)
        .map(|h| h.text().collect::<String>().trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_and_paragraphs() {
        let html = markdown_to_html("# Intro\nHello.\n\n---\n\n# Install\nRun it.");

        assert!(html.contains("<h1 id=\"intro\">Intro</h1>"));
        assert!(html.contains("<h1 id=\"install\">Install</h1>"));
        assert!(html.contains("<p>Hello.</p>"));
        assert!(html.contains("<p>Run it.</p>"));
        assert!(html.contains("<hr />"));
    }

    #[test]
    fn single_newlines_become_line_breaks() {
        let html = markdown_to_html("first line\nsecond line");
        assert_eq!(html, "<p>first line<br />\nsecond line</p>\n");
    }

    #[test]
    fn tables_are_rendered() {
        let html = markdown_to_html("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<th>a</th>"));
        assert!(html.contains("<td>2</td>"));
    }

    #[test]
    fn fenced_code_is_wrapped_for_highlighting() {
        let html = markdown_to_html("```python\nprint(1)\n```\n");
        assert!(html.contains("<div class=\"highlight\">"));
        assert!(html.contains("<code class=\"language-python\">print(1)\n</code>"));
        assert!(html.trim_end().ends_with("</div>"));
    }

    #[test]
    fn code_without_info_string_gets_no_language() {
        let html = markdown_to_html("```\nx = 1\ny = 2\n```\n");
        assert!(html.contains("<pre><code>x = 1\ny = 2\n</code></pre>"));
        assert!(!html.contains("language-"));
    }

    #[test]
    fn duplicate_headings_get_numbered_ids() {
        let html = markdown_to_html("## Usage\n\n## Usage\n\n## Usage\n");
        assert!(html.contains("<h2 id=\"usage\">"));
        assert!(html.contains("<h2 id=\"usage_1\">"));
        assert!(html.contains("<h2 id=\"usage_2\">"));
    }

    #[test]
    fn heading_id_includes_inline_code() {
        let html = markdown_to_html("### The `merge` step\n");
        assert!(html.contains("<h3 id=\"the-merge-step\">"));
    }

    #[test]
    fn punctuation_only_headings_still_get_ids() {
        let html = markdown_to_html("# !!!\n\n# ???\n");
        assert!(html.contains("id=\"_1\""));
        assert!(html.contains("id=\"_2\""));
    }

    #[test]
    fn hangul_is_left_out_of_heading_ids() {
        let html = markdown_to_html("# 개요\n\n## GUI 사용법\n\n# 설치 및 실행\n");
        assert!(html.contains("<h1 id=\"_1\">개요</h1>"));
        assert!(html.contains("<h2 id=\"gui\">GUI 사용법</h2>"));
        assert!(html.contains("<h1 id=\"_2\">설치 및 실행</h1>"));
    }

    #[test]
    fn outline_lists_top_level_headings() {
        let html = markdown_to_html("# Intro\n\n## Detail\n\n# Install\n");
        assert_eq!(outline(&html), vec!["Intro", "Install"]);
    }
}
