//! Full runs against a local stand-in for github.com/trending

use std::path::Path;

use chrono::{DateTime, FixedOffset, TimeZone};
use projects_trending_page::config::PipelineConfig;
use projects_trending_page::pipeline::{build_page, run_at, EmptyReason, PipelineError};
use projects_trending_page::trending::extract::{extract_records, DESCRIPTION_FALLBACK};
use projects_trending_page::utils::summary::summarize_languages;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const THREE_PROJECTS: &str = include_str!("fixtures/three_projects.html");
const NO_PROJECTS: &str = include_str!("fixtures/no_projects.html");
const MISSING_DESCRIPTION: &str = include_str!("fixtures/missing_description.html");

async fn serve(body: &str, status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trending"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;
    server
}

fn config_for(server: &MockServer, output_dir: &Path) -> PipelineConfig {
    PipelineConfig {
        trending_url: format!("{}/trending", server.uri()),
        output_dir: output_dir.to_path_buf(),
        ..PipelineConfig::default()
    }
}

fn generated_at() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(8 * 3600)
        .unwrap()
        .with_ymd_and_hms(2026, 10, 18, 8, 30, 0)
        .unwrap()
}

#[test]
fn three_projects_summarize_by_language() {
    let records = extract_records(THREE_PROJECTS);
    let summary = summarize_languages(&records);

    assert_eq!(records.len(), 3);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.count_for("Go"), 2);
    assert_eq!(summary.count_for("Rust"), 1);
    assert_eq!(summary.languages(), ["Go", "Rust"]);
    assert_eq!(records[1].title, "astral-sh / uv");
    assert_eq!(records[1].stars_today_count, 1204);
}

#[tokio::test]
async fn publishes_rendered_page() -> anyhow::Result<()> {
    let server = serve(THREE_PROJECTS, 200).await;
    let out = tempfile::tempdir()?;
    let output_dir = out.path().join("public");
    let config = config_for(&server, &output_dir);

    let report = run_at(&config, generated_at()).await?;

    assert_eq!(report.record_count, 3);
    assert_eq!(report.language_count, 2);
    assert_eq!(report.output_path, output_dir.join("index.html"));

    let written = std::fs::read_to_string(&report.output_path)?;
    let expected = build_page(&extract_records(THREE_PROJECTS), &config, generated_at())?;
    assert_eq!(written, expected);

    assert_eq!(written.matches(r#"class="repo-card"#).count(), 3);
    assert_eq!(written.matches(r#"class="filter-btn"#).count(), 3);
    assert!(written.contains(r#"data-filter="ALL""#));
    assert!(written.contains(r#"data-filter="Go""#));
    assert!(written.contains(r#"data-filter="Rust""#));

    // Sorted by stars today: uv (1,204), ollama (311), gum (87).
    let uv = written.find("astral-sh / uv").unwrap();
    let ollama = written.find("ollama / ollama").unwrap();
    let gum = written.find("charmbracelet / gum").unwrap();
    assert!(uv < ollama && ollama < gum);

    Ok(())
}

#[tokio::test]
async fn empty_page_fails_without_touching_output() -> anyhow::Result<()> {
    let server = serve(NO_PROJECTS, 200).await;
    let out = tempfile::tempdir()?;
    let previous = out.path().join("index.html");
    std::fs::write(&previous, "yesterday's page")?;
    let config = config_for(&server, out.path());

    let err = run_at(&config, generated_at()).await.unwrap_err();

    assert!(matches!(
        err,
        PipelineError::NoRecords {
            reason: EmptyReason::NothingMatched
        }
    ));
    assert_eq!(std::fs::read_to_string(&previous)?, "yesterday's page");

    Ok(())
}

#[tokio::test]
async fn fetch_failure_fails_without_output() -> anyhow::Result<()> {
    let server = serve("upstream unavailable", 502).await;
    let out = tempfile::tempdir()?;
    let output_dir = out.path().join("public");
    let config = config_for(&server, &output_dir);

    let err = run_at(&config, generated_at()).await.unwrap_err();

    assert!(matches!(
        err,
        PipelineError::NoRecords {
            reason: EmptyReason::FetchFailed
        }
    ));
    assert!(!output_dir.exists());

    Ok(())
}

#[tokio::test]
async fn missing_description_renders_placeholder() -> anyhow::Result<()> {
    let server = serve(MISSING_DESCRIPTION, 200).await;
    let out = tempfile::tempdir()?;
    let config = config_for(&server, out.path());

    let report = run_at(&config, generated_at()).await?;
    let written = std::fs::read_to_string(report.output_path)?;

    assert!(written.contains(&format!(">{DESCRIPTION_FALLBACK}</p>")));
    assert!(written.contains("someone / quiet-repo"));
    assert!(written.contains(r#"data-filter="Any""#));

    Ok(())
}

#[tokio::test]
async fn unwritable_output_is_fatal() -> anyhow::Result<()> {
    let server = serve(THREE_PROJECTS, 200).await;
    let out = tempfile::tempdir()?;
    let blocker = out.path().join("public");
    std::fs::write(&blocker, "a file where the directory should be")?;
    let config = config_for(&server, &blocker);

    let err = run_at(&config, generated_at()).await.unwrap_err();

    assert!(matches!(err, PipelineError::PublishPage { .. }));

    Ok(())
}
