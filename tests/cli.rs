use manual2pdf::{CHAPTERS, DEFAULT_OUTPUT};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn manual2pdf(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_manual2pdf"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn dir_arg(dir: &TempDir) -> &str {
    dir.path().to_str().unwrap()
}

fn file_count(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}

#[test]
fn empty_directory_exits_with_status_one() {
    let dir = TempDir::new().unwrap();

    let output = manual2pdf(&["--dir", dir_arg(&dir)]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("오류:"), "stdout was: {}", stdout);
    assert!(stdout.contains("병합할 Markdown 파일이 없습니다"));
    assert_eq!(file_count(dir.path()), 0);
    assert!(!dir.path().join(DEFAULT_OUTPUT).exists());
}

#[test]
fn html_only_writes_renamed_file_and_warns_for_missing_chapters() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("01-개요.md"), "# Intro\nHello.").unwrap();
    std::fs::write(dir.path().join("03-설치-및-실행.md"), "# Install\nRun it.").unwrap();

    let output = manual2pdf(&["--dir", dir_arg(&dir), "--output", "foo.pdf", "--html-only"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(dir.path().join("foo.html").exists());
    assert!(!dir.path().join("foo.pdf").exists());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("파일이 존재하지 않습니다. 건너뜁니다.").count(), 8);
    for chapter in CHAPTERS.iter().filter(|c| c.number != 1 && c.number != 3) {
        assert!(
            stdout.contains(&format!("경고: {} 파일이 존재하지 않습니다.", chapter.file)),
            "no warning for {}",
            chapter.file
        );
    }
    assert!(!stdout.contains(&format!("경고: {}", CHAPTERS[0].file)));
    assert!(stdout.contains("Markdown 파일 병합 중..."));
    assert!(stdout.contains("HTML 파일 생성 완료"));
}

#[test]
fn unknown_option_is_a_usage_error() {
    let output = manual2pdf(&["--no-such-option"]);
    assert!(!output.status.success());
}
