use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tracing::info;

pub const OUTPUT_DIR: &str = "public";
pub const OUTPUT_FILE: &str = "index.html";

#[derive(Debug, Error)]
pub enum PublishPageError {
    #[error("CreateDir: {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("WriteFile: {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Creates `dir` when missing and overwrites `dir/file_name` with `document`.
pub async fn publish_page(
    dir: &Path,
    file_name: &str,
    document: &str,
) -> Result<PathBuf, PublishPageError> {
    fs::create_dir_all(dir)
        .await
        .map_err(|source| PublishPageError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

    let path = dir.join(file_name);
    fs::write(&path, document)
        .await
        .map_err(|source| PublishPageError::WriteFile {
            path: path.clone(),
            source,
        })?;

    info!(path = %path.display(), bytes = document.len(), "Published page");

    Ok(path)
}
