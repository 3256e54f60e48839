//! Static asset passthrough for `/static/*`.

use std::io;
use std::path::{Component, Path, PathBuf};

use advent::{Error, Result};
use tracing::warn;

/// Directory served under `/static/`.
#[derive(Debug, Clone)]
pub struct StaticDir {
    root: PathBuf,
}

impl StaticDir {
    /// Open the static root. Returns `None` when it does not exist, which disables static serving.
    pub fn open(root: impl AsRef<Path>) -> Option<Self> {
        let root = root.as_ref();
        match std::fs::canonicalize(root) {
            Ok(root) => Some(Self { root }),
            Err(e) => {
                warn!("Static directory {} unavailable: {}", root.display(), e);
                None
            }
        }
    }

    /// Resolve a request path relative to the root, refusing anything that escapes it.
    pub async fn resolve(&self, relative: &str) -> Result<PathBuf> {
        let not_found = || Error::NotFound(format!("No static asset at {}", relative));

        let input = Path::new(relative);
        if relative.is_empty()
            || relative.contains('\0')
            || !input.components().all(|c| matches!(c, Component::Normal(_)))
        {
            return Err(not_found());
        }

        let resolved = match tokio::fs::canonicalize(self.root.join(input)).await {
            Ok(resolved) => resolved,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(not_found()),
            Err(e) => return Err(Error::Io(e)),
        };

        if !resolved.starts_with(&self.root) {
            warn!("Static path {} resolves outside the static root", relative);
            return Err(not_found());
        }

        if !tokio::fs::metadata(&resolved).await?.is_file() {
            return Err(not_found());
        }

        Ok(resolved)
    }

    /// Read an asset, returning its bytes and content type.
    pub async fn read(&self, relative: &str) -> Result<(Vec<u8>, &'static str)> {
        let path = self.resolve(relative).await?;
        let bytes = tokio::fs::read(&path).await?;
        Ok((bytes, content_type_for(&path)))
    }
}

/// Content type from a file extension.
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("txt") => "text/plain; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}
