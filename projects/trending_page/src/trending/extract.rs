use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::{debug, error};

use crate::trending::models::Record;

pub const GITHUB_ORIGIN: &str = "https://github.com";

pub const TITLE_FALLBACK: &str = "Unknown repository";
pub const DESCRIPTION_FALLBACK: &str = "No description provided.";
pub const LANGUAGE_FALLBACK: &str = "Any";

// Contract with github.com/trending markup.
const PROJECT_SELECTOR: &str = "article.Box-row";
const TITLE_SELECTOR: &str = "h2.h3 a";
const DESCRIPTION_SELECTOR: &str = "p.my-1";
const LANGUAGE_SELECTOR: &str = r#"[itemprop="programmingLanguage"]"#;
const STARS_TODAY_SELECTOR: &str = "span.d-inline-block.float-sm-right";

#[derive(Debug, Error)]
pub enum ExtractRecordsError {
    #[error("InvalidSelector: {selector}: {message}")]
    InvalidSelector {
        selector: &'static str,
        message: String,
    },
}

struct TrendingSelectors {
    project: Selector,
    title: Selector,
    description: Selector,
    language: Selector,
    stars_today: Selector,
}

impl TrendingSelectors {
    fn compile() -> Result<Self, ExtractRecordsError> {
        Ok(Self {
            project: compile_selector(PROJECT_SELECTOR)?,
            title: compile_selector(TITLE_SELECTOR)?,
            description: compile_selector(DESCRIPTION_SELECTOR)?,
            language: compile_selector(LANGUAGE_SELECTOR)?,
            stars_today: compile_selector(STARS_TODAY_SELECTOR)?,
        })
    }
}

fn compile_selector(css: &'static str) -> Result<Selector, ExtractRecordsError> {
    Selector::parse(css).map_err(|source| ExtractRecordsError::InvalidSelector {
        selector: css,
        message: source.to_string(),
    })
}

/// Best-effort extraction: any failure is logged and reported as "no records".
pub fn extract_records(markup: &str) -> Vec<Record> {
    match try_extract_records(markup) {
        Ok(records) => records,
        Err(err) => {
            error!(error = %err, "Extraction failed, treating page as empty");
            Vec::new()
        }
    }
}

/// One record per project element, in document order.
pub fn try_extract_records(markup: &str) -> Result<Vec<Record>, ExtractRecordsError> {
    let selectors = TrendingSelectors::compile()?;
    let document = Html::parse_document(markup);

    let records: Vec<Record> = document
        .select(&selectors.project)
        .map(|element| record_from_element(element, &selectors))
        .collect();

    debug!(count = records.len(), "Extracted trending records");

    Ok(records)
}

fn record_from_element(element: ElementRef<'_>, selectors: &TrendingSelectors) -> Record {
    let anchor = element.select(&selectors.title).next();
    let href = anchor.and_then(|a| a.value().attr("href")).map(str::trim);

    let title = match anchor.map(|a| normalize_title(&a.text().collect::<String>())) {
        Some(text) if !text.is_empty() => text,
        _ => match href.map(|h| h.trim_matches('/')).filter(|h| !h.is_empty()) {
            Some(path) => path.to_string(),
            None => TITLE_FALLBACK.to_string(),
        },
    };

    let link = match href.filter(|h| !h.is_empty()) {
        Some(path) => absolute_link(path),
        None => GITHUB_ORIGIN.to_string(),
    };

    let description = match first_text(element, &selectors.description) {
        Some(text) => text,
        None => DESCRIPTION_FALLBACK.to_string(),
    };

    let language = match first_text(element, &selectors.language) {
        Some(text) => text,
        None => LANGUAGE_FALLBACK.to_string(),
    };

    let stars_today_text = first_text(element, &selectors.stars_today).unwrap_or_default();
    let stars_today_count = parse_star_count(&stars_today_text);

    Record {
        title,
        link,
        description,
        language,
        stars_today_text,
        stars_today_count,
    }
}

/// Trimmed text of the first match, `None` when missing or blank.
fn first_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .next()
        .map(|node| node.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

fn absolute_link(path: &str) -> String {
    if path.starts_with('/') {
        format!("{GITHUB_ORIGIN}{path}")
    } else {
        format!("{GITHUB_ORIGIN}/{path}")
    }
}

/// Collapses every whitespace run into a single space and trims the edges.
pub fn normalize_title(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First run of digits after dropping thousands separators; 0 when there is none.
pub fn parse_star_count(text: &str) -> u64 {
    let digits: String = text
        .chars()
        .filter(|c| *c != ',')
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    digits.parse().unwrap_or(0)
}
