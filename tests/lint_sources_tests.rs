//! End-to-end linting of files on disk
use std::path::PathBuf;

use qmd_lint::output::write_reports;
use qmd_lint::{
    EXIT_IO_ERROR, EXIT_LINT_FAILED, EXIT_SUCCESS, OutputFormat, Rule, exit_code, lint_sources,
};

fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}

#[tokio::test]
async fn test_reports_follow_input_order() {
    let dir = tempfile::tempdir().unwrap();
    let clean = write_fixture(&dir, "clean.qmd", "---\ntitle: ok\n---\n\nBody text.\n");
    let broken = write_fixture(
        &dir,
        "broken.qmd",
        "---\ntitle: x\n---\n$$ x $$\n```\n----\n<div>\n</div>\n",
    );

    let reports = lint_sources(&[broken.clone(), clean.clone()]).await;

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].source, broken.display().to_string());
    assert_eq!(reports[0].diagnostics.len(), 1);
    assert_eq!(reports[0].diagnostics[0].rule, Rule::MathIsolation);
    assert_eq!(reports[0].diagnostics[0].line, Some(3));
    assert!(reports[1].is_clean());
    assert_eq!(exit_code(&reports, false), EXIT_LINT_FAILED);
}

#[tokio::test]
async fn test_unreadable_source_does_not_stop_batch() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.qmd");
    let single = write_fixture(&dir, "single.qmd", "---\n");

    let reports = lint_sources(&[missing, single]).await;

    assert_eq!(reports.len(), 2);
    assert!(reports[0].has_io_error());
    assert_eq!(reports[1].diagnostics.len(), 1);
    assert_eq!(reports[1].diagnostics[0].rule, Rule::HeaderCardinality);
    assert_eq!(exit_code(&reports, false), EXIT_IO_ERROR);
    assert_eq!(exit_code(&reports, true), EXIT_SUCCESS);
}

#[tokio::test]
async fn test_text_output_matches_legacy_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "doc.qmd",
        "---\ntitle: It's mine\n---\nsee ```code```\n<div><div></div>\n",
    );

    let reports = lint_sources(std::slice::from_ref(&path)).await;
    let mut out = Vec::new();
    write_reports(&mut out, &reports, OutputFormat::Text).unwrap();

    let source = path.display().to_string();
    let expected = format!(
        "{0}: Error: ``` used in file not on its own line on line 3\n\
         {0}: Error: more opening than closing div tags.\n",
        source
    );
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[tokio::test]
async fn test_json_output_one_object_per_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "doc.qmd", "---\n---\na --- b\n");

    let reports = lint_sources(&[path]).await;
    let mut out = Vec::new();
    write_reports(&mut out, &reports, OutputFormat::Json).unwrap();

    let text = String::from_utf8(out).unwrap();
    let records: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).expect("valid json line"))
        .collect();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["rule"], "stray-separator");
    assert_eq!(records[0]["line"], 2);
}

#[tokio::test]
async fn test_crlf_documents_are_clean() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "win.qmd", "---\r\ntitle: x\r\n---\r\n```{r}\r\n1\r\n```\r\n");

    let reports = lint_sources(&[path]).await;
    assert!(reports[0].is_clean());
}
