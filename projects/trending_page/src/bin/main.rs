use projects_trending_page::config::PipelineConfig;
use projects_trending_page::pipeline::{run, PipelineError};
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum MainError {
    #[error("TracingInit: {source}")]
    TracingInit {
        #[source]
        source: utils_trace::TracingInitError,
    },
    #[error("Pipeline: {source}")]
    Pipeline {
        #[source]
        source: PipelineError,
    },
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
    utils_trace::init("info").map_err(|source| MainError::TracingInit { source })?;

    let config = PipelineConfig::default();

    let report = run(&config).await.map_err(|source| {
        error!(error = %source, "Run failed, page not generated");
        MainError::Pipeline { source }
    })?;

    info!(
        projects = report.record_count,
        languages = report.language_count,
        path = %report.output_path.display(),
        "Page generated"
    );

    Ok(())
}
