use chrono::{DateTime, FixedOffset};
use handlebars::Handlebars;
use serde::Serialize;
use thiserror::Error;

use crate::trending::models::Record;
use crate::utils::icons::{icon_url, ICON_BASE_URL};
use crate::utils::summary::LanguageSummary;

const PAGE_TEMPLATE_NAME: &str = "page";
const PAGE_TEMPLATE: &str = include_str!("../../templates/page.hbs");

pub const DEFAULT_PAGE_TITLE: &str = "GitHub Trending";
pub const TAILWIND_CDN_URL: &str = "https://cdn.tailwindcss.com";
pub const FAVICON_URL: &str = "https://github.githubassets.com/favicons/favicon.svg";
pub const TIMESTAMP_FORMAT: &str = "%Y/%-m/%-d %H:%M:%S (UTC%:z)";

/// Path data of the GitHub mark, shown in the header and on every card.
pub const GITHUB_MARK_SVG_PATH: &str = "M8 0c4.42 0 8 3.58 8 8a8.013 8.013 0 0 1-5.45 7.59c-.4.08-.55-.17-.55-.38 0-.17.01-.61.01-.95 0-2.72-.92-3.3-.92-3.3-.42-1.08-1.09-1.37-1.09-1.37-.89-.6.07-.6.07-.6 1 .07 1.53 1.03 1.53 1.03.89 1.52 2.34 1.08 2.91.83.1-.65.35-1.09.63-1.34-2.22-.25-4.55-1.11-4.55-4.92 0-1.08.38-1.98 1.03-2.63-.1-.25-.45-1.24.1-2.63 0 0 .84-.27 2.75 1.02.79-.22 1.65-.33 2.5-.33.85 0 1.71.11 2.5.33 1.91-1.29 2.75-1.02 2.75-1.02.55 1.39.2 2.38.1 2.63.65.65 1.03 1.55 1.03 2.63 0 3.82-2.33 4.66-4.56 4.91.36.31.68.92.68 1.85 0 1.34-.01 2.42-.01 2.75 0 .21.15.46.55.38A8.013 8.013 0 0 1 16 8c0-4.42-3.58-8-8-8z";

/// Presentation switches and assets owned by the renderer.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub page_title: String,
    pub show_filter_bar: bool,
    pub icon_base_url: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_title: DEFAULT_PAGE_TITLE.to_string(),
            show_filter_bar: true,
            icon_base_url: ICON_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderPageError {
    #[error("RegisterTemplate: {source}")]
    RegisterTemplate {
        source: Box<handlebars::TemplateError>,
    },

    #[error("RenderTemplate: {source}")]
    RenderTemplate {
        source: Box<handlebars::RenderError>,
    },
}

#[derive(Serialize)]
struct PageContext<'a> {
    page_title: &'a str,
    favicon_url: &'static str,
    tailwind_url: &'static str,
    github_mark_path: &'static str,
    generated_at: String,
    show_filter_bar: bool,
    filters: Vec<FilterContext>,
    cards: Vec<CardContext<'a>>,
    record_count: usize,
}

#[derive(Serialize)]
struct FilterContext {
    label: String,
    count: usize,
    is_all: bool,
}

#[derive(Serialize)]
struct CardContext<'a> {
    title: &'a str,
    link: &'a str,
    description: &'a str,
    language: &'a str,
    stars_today: &'a str,
    has_icon: bool,
    icon_url: String,
}

impl<'a> CardContext<'a> {
    fn new(record: &'a Record, icon_base_url: &str) -> Self {
        let icon = icon_url(icon_base_url, &record.language);
        Self {
            title: &record.title,
            link: &record.link,
            description: &record.description,
            language: &record.language,
            stars_today: &record.stars_today_text,
            has_icon: icon.is_some(),
            icon_url: icon.unwrap_or_default(),
        }
    }
}

pub fn format_timestamp(generated_at: &DateTime<FixedOffset>) -> String {
    generated_at.format(TIMESTAMP_FORMAT).to_string()
}

/// Builds the full document. Cards follow the order of `records`; all scraped text is escaped.
pub fn render_page(
    records: &[Record],
    summary: &LanguageSummary,
    options: &RenderOptions,
    generated_at: DateTime<FixedOffset>,
) -> Result<String, RenderPageError> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars
        .register_template_string(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)
        .map_err(|source| RenderPageError::RegisterTemplate {
            source: Box::new(source),
        })?;

    let context = PageContext {
        page_title: &options.page_title,
        favicon_url: FAVICON_URL,
        tailwind_url: TAILWIND_CDN_URL,
        github_mark_path: GITHUB_MARK_SVG_PATH,
        generated_at: format_timestamp(&generated_at),
        show_filter_bar: options.show_filter_bar,
        filters: summary
            .filter_entries()
            .into_iter()
            .map(|entry| FilterContext {
                label: entry.label,
                count: entry.count,
                is_all: entry.is_all,
            })
            .collect(),
        cards: records
            .iter()
            .map(|record| CardContext::new(record, &options.icon_base_url))
            .collect(),
        record_count: records.len(),
    };

    handlebars
        .render(PAGE_TEMPLATE_NAME, &context)
        .map_err(|source| RenderPageError::RenderTemplate {
            source: Box::new(source),
        })
}
