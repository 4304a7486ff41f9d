use std::path::Path;

use anyhow::{bail, Context};
use tokio::fs::File;

use crate::handler::resolve;
use crate::http::mime;
use crate::http::response::Response;

/// Serves `target` from under `root`.
///
/// The file is opened and measured here; its bytes are streamed later by
/// the response writer. On failure the handle (if any) is dropped before
/// the 404 is returned.
pub async fn serve(root: &Path, target: &str) -> Response {
    match open(root, target).await {
        Ok((file, len)) => {
            tracing::debug!(uri = target, len, "Serving static file");
            Response::file(mime::content_type(target), file, len)
        }
        Err(e) => {
            tracing::error!(uri = target, error = %format!("{e:#}"), "Static request failed");
            Response::not_found()
        }
    }
}

async fn open(root: &Path, target: &str) -> anyhow::Result<(File, u64)> {
    let path = resolve(root, target)?;

    let file = File::open(&path)
        .await
        .with_context(|| format!("opening {}", path.display()))?;

    let meta = file
        .metadata()
        .await
        .with_context(|| format!("stat {}", path.display()))?;

    if !meta.is_file() {
        bail!("{} is not a regular file", path.display());
    }

    Ok((file, meta.len()))
}
