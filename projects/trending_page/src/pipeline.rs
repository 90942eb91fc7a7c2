use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, Utc};
use interfaces_github_trending::index::{fetch_trending_page, TrendingPageResult};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::PipelineConfig;
use crate::publish::{publish_page, PublishPageError};
use crate::trending::extract::extract_records;
use crate::trending::models::Record;
use crate::utils::page::{render_page, RenderPageError};
use crate::utils::summary::{sort_by_stars_desc, summarize_languages};

/// Why a run ended up with nothing to publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    FetchFailed,
    NothingMatched,
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyReason::FetchFailed => write!(f, "trending page could not be fetched"),
            EmptyReason::NothingMatched => write!(f, "no projects found on the trending page"),
        }
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("NoRecords: {reason}")]
    NoRecords {
        reason: EmptyReason,
    },

    #[error("RenderPage: {source}")]
    RenderPage {
        #[from]
        source: RenderPageError,
    },

    #[error("PublishPage: {source}")]
    PublishPage {
        #[from]
        source: PublishPageError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub record_count: usize,
    pub language_count: usize,
    pub output_path: PathBuf,
}

/// Fetch, extract, render and publish, in that order. An empty record list stops the run
/// before anything is written.
pub async fn run(config: &PipelineConfig) -> Result<RunReport, PipelineError> {
    let generated_at = Utc::now().with_timezone(&config.report_offset());
    run_at(config, generated_at).await
}

pub async fn run_at(
    config: &PipelineConfig,
    generated_at: DateTime<FixedOffset>,
) -> Result<RunReport, PipelineError> {
    info!(url = %config.trending_url, "Fetching GitHub trending data");

    let records = collect_records(config).await?;
    info!(count = records.len(), "Extracted projects, building page");

    let language_count = summarize_languages(&records).counts.len();
    let document = build_page(&records, config, generated_at)?;
    let output_path = publish_page(&config.output_dir, &config.output_file, &document).await?;

    Ok(RunReport {
        record_count: records.len(),
        language_count,
        output_path,
    })
}

async fn collect_records(config: &PipelineConfig) -> Result<Vec<Record>, PipelineError> {
    let records = match fetch_trending_page(&config.fetch_request()).await {
        Ok(TrendingPageResult { body, .. }) => extract_records(&body),
        Err(err) => {
            error!(error = %err, timeout = err.is_timeout(), "Trending page unreachable");
            return Err(PipelineError::NoRecords {
                reason: EmptyReason::FetchFailed,
            });
        }
    };

    if records.is_empty() {
        warn!("Trending page fetched but no project entries matched");
        return Err(PipelineError::NoRecords {
            reason: EmptyReason::NothingMatched,
        });
    }

    Ok(records)
}

/// Pure part of a run: ordering, summary and rendering.
pub fn build_page(
    records: &[Record],
    config: &PipelineConfig,
    generated_at: DateTime<FixedOffset>,
) -> Result<String, RenderPageError> {
    let ordered = if config.sort_by_stars {
        sort_by_stars_desc(records)
    } else {
        records.to_vec()
    };
    let summary = summarize_languages(&ordered);

    render_page(&ordered, &summary, &config.render_options(), generated_at)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, stars: u64) -> Record {
        Record {
            title: title.to_string(),
            link: format!("https://github.com/{title}"),
            description: "d".to_string(),
            language: "Go".to_string(),
            stars_today_text: format!("{stars} stars today"),
            stars_today_count: stars,
        }
    }

    fn now() -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&PipelineConfig::default().report_offset())
    }

    #[test]
    fn build_page_sorts_when_enabled() {
        let records = vec![record("low/one", 1), record("high/one", 900)];

        let html = build_page(&records, &PipelineConfig::default(), now()).unwrap();

        assert!(html.find("high/one").unwrap() < html.find("low/one").unwrap());
    }

    #[test]
    fn build_page_keeps_page_order_when_disabled() {
        let records = vec![record("low/one", 1), record("high/one", 900)];
        let config = PipelineConfig {
            sort_by_stars: false,
            ..PipelineConfig::default()
        };

        let html = build_page(&records, &config, now()).unwrap();

        assert!(html.find("low/one").unwrap() < html.find("high/one").unwrap());
    }

    #[test]
    fn empty_reasons_read_distinctly() {
        assert_ne!(
            EmptyReason::FetchFailed.to_string(),
            EmptyReason::NothingMatched.to_string()
        );
    }
}
