/// One project as listed on the trending page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub title: String,
    pub link: String,
    pub description: String,
    /// Display form, as scraped.
    pub language: String,
    /// Raw display text, e.g. `"1,234 stars today"`.
    pub stars_today_text: String,
    /// Parsed from `stars_today_text`; only used for ordering.
    pub stars_today_count: u64,
}
