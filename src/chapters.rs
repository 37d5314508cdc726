/// One chapter of the manual: the Markdown file it lives in and the title
/// shown in the table of contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chapter {
    pub number: usize,
    pub file: &'static str,
    pub title: &'static str,
}

impl Chapter {
    const fn new(number: usize, file: &'static str, title: &'static str) -> Self {
        Self { number, file, title }
    }

    /// Korean ordinal label, e.g. `제3장`.
    pub fn label(&self) -> String {
        format!("제{}장", self.number)
    }
}

/// Canonical reading order. Both the merge and the table of contents walk
/// this array, so they cannot disagree.
pub const CHAPTERS: [Chapter; 10] = [
    Chapter::new(1, "01-개요.md", "프로젝트 개요"),
    Chapter::new(2, "02-시스템-구조.md", "시스템 구조"),
    Chapter::new(3, "03-설치-및-실행.md", "설치 및 실행"),
    Chapter::new(4, "04-핵심-알고리즘.md", "핵심 알고리즘"),
    Chapter::new(5, "05-GUI-사용법.md", "GUI 사용법"),
    Chapter::new(6, "06-CLI-사용법.md", "CLI 사용법"),
    Chapter::new(7, "07-레이아웃-엔진.md", "레이아웃 엔진"),
    Chapter::new(8, "08-출력-형식.md", "출력 형식"),
    Chapter::new(9, "09-API-레퍼런스.md", "API 레퍼런스"),
    Chapter::new(10, "10-데이터-구조.md", "데이터 구조"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_numbered_in_order() {
        for (i, chapter) in CHAPTERS.iter().enumerate() {
            assert_eq!(chapter.number, i + 1);
            assert!(chapter.file.starts_with(&format!("{:02}-", i + 1)));
            assert!(chapter.file.ends_with(".md"));
        }
    }

    #[test]
    fn labels_use_korean_ordinals() {
        assert_eq!(CHAPTERS[0].label(), "제1장");
        assert_eq!(CHAPTERS[9].label(), "제10장");
    }
}
