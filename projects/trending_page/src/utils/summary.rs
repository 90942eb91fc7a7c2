use std::collections::BTreeMap;

use crate::trending::models::Record;

pub const ALL_LANGUAGES: &str = "ALL";

/// Record counts per language tag, plus the "ALL" total.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LanguageSummary {
    pub total: usize,
    pub counts: BTreeMap<String, usize>,
}

/// One filter control: a language (or "ALL") and how many records it matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterEntry {
    pub label: String,
    pub count: usize,
    pub is_all: bool,
}

impl LanguageSummary {
    /// Distinct tags in byte-lexicographic order.
    pub fn languages(&self) -> Vec<&str> {
        self.counts.keys().map(String::as_str).collect()
    }

    /// "ALL" first, then every tag in sorted order.
    pub fn filter_entries(&self) -> Vec<FilterEntry> {
        let mut entries = Vec::with_capacity(self.counts.len() + 1);
        entries.push(FilterEntry {
            label: ALL_LANGUAGES.to_string(),
            count: self.total,
            is_all: true,
        });
        entries.extend(self.counts.iter().map(|(language, count)| FilterEntry {
            label: language.clone(),
            count: *count,
            is_all: false,
        }));
        entries
    }

    pub fn count_for(&self, language: &str) -> usize {
        self.counts.get(language).copied().unwrap_or(0)
    }
}

pub fn summarize_languages(records: &[Record]) -> LanguageSummary {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.language.clone()).or_insert(0) += 1;
    }

    LanguageSummary {
        total: records.len(),
        counts,
    }
}

/// Descending by today's stars; equal counts keep their page order.
pub fn sort_by_stars_desc(records: &[Record]) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.stars_today_count.cmp(&a.stars_today_count));
    sorted
}
