use std::path::PathBuf;
use std::time::Duration;

use chrono::{FixedOffset, Offset, Utc};
use interfaces_github_trending::index::{TrendingPageRequest, BROWSER_USER_AGENT, TRENDING_URL};

use crate::publish::{OUTPUT_DIR, OUTPUT_FILE};
use crate::utils::icons::ICON_BASE_URL;
use crate::utils::page::{RenderOptions, DEFAULT_PAGE_TITLE};

/// Asia/Shanghai, which observes no daylight saving.
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 8;
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Everything one run needs. `Default` is the production setup.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub trending_url: String,
    pub user_agent: String,
    pub fetch_timeout: Duration,
    pub sort_by_stars: bool,
    pub show_filter_bar: bool,
    pub page_title: String,
    pub icon_base_url: String,
    pub utc_offset_hours: i32,
    pub output_dir: PathBuf,
    pub output_file: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            trending_url: TRENDING_URL.to_string(),
            user_agent: BROWSER_USER_AGENT.to_string(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            sort_by_stars: true,
            show_filter_bar: true,
            page_title: DEFAULT_PAGE_TITLE.to_string(),
            icon_base_url: ICON_BASE_URL.to_string(),
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
            output_dir: PathBuf::from(OUTPUT_DIR),
            output_file: OUTPUT_FILE.to_string(),
        }
    }
}

impl PipelineConfig {
    pub fn fetch_request(&self) -> TrendingPageRequest {
        TrendingPageRequest {
            url: self.trending_url.clone(),
            user_agent: self.user_agent.clone(),
            timeout: self.fetch_timeout,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            page_title: self.page_title.clone(),
            show_filter_bar: self.show_filter_bar,
            icon_base_url: self.icon_base_url.clone(),
        }
    }

    /// Out-of-range offsets fall back to UTC.
    pub fn report_offset(&self) -> FixedOffset {
        self.utc_offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }
}
