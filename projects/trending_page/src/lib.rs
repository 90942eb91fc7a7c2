//! Daily GitHub trending report
//!
//! - Page scraping and record models in `trending/`
//! - Language summary, icons and page rendering in `utils/`
//! - Output writing in `publish`, run sequencing in `pipeline`

pub mod config;
pub mod pipeline;
pub mod publish;
pub mod trending;
pub mod utils;
