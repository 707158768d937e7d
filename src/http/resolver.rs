use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs::{self, File};

use crate::http::error::RequestError;
use crate::http::mime::content_type_for;

/// Index files probed, in order, when a target names a directory.
pub const INDEX_FILES: [&str; 2] = ["index.html", "index.htm"];

/// A request target mapped to a regular file under the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Always `document_root` followed by the target (and maybe an index file)
    pub path: PathBuf,
    /// Size reported by the stat that resolved the path
    pub size: u64,
    pub content_type: &'static str,
}

impl ResolvedPath {
    /// Opens the file read-only.
    ///
    /// A permission failure is `Forbidden`; any other failure (e.g. the file
    /// vanished since it was resolved) is `NotFound`.
    pub async fn open(&self) -> Result<File, RequestError> {
        File::open(&self.path).await.map_err(|e| match e.kind() {
            ErrorKind::PermissionDenied => RequestError::Forbidden,
            _ => RequestError::NotFound,
        })
    }
}

/// Resolves `target` beneath `document_root`.
///
/// Any target containing `..` is refused outright, whether or not it would
/// actually escape the root. Symlinks are followed and not canonicalized.
pub async fn resolve(document_root: &Path, target: &str) -> Result<ResolvedPath, RequestError> {
    if !target.starts_with('/') {
        return Err(RequestError::MalformedRequest);
    }
    if target.contains("..") {
        return Err(RequestError::Forbidden);
    }

    let mut candidate = OsString::from(document_root.as_os_str());
    candidate.push(target);
    let candidate = PathBuf::from(candidate);

    let meta = fs::metadata(&candidate)
        .await
        .map_err(|_| RequestError::NotFound)?;

    if meta.is_dir() {
        return resolve_index(candidate).await;
    }
    if !meta.is_file() {
        return Err(RequestError::NotFound);
    }

    Ok(ResolvedPath {
        content_type: content_type_for(&candidate),
        size: meta.len(),
        path: candidate,
    })
}

async fn resolve_index(dir: PathBuf) -> Result<ResolvedPath, RequestError> {
    let mut dir = dir.into_os_string();
    if !dir.to_string_lossy().ends_with('/') {
        dir.push("/");
    }

    for name in INDEX_FILES {
        let mut candidate = dir.clone();
        candidate.push(name);
        let candidate = PathBuf::from(candidate);

        match fs::metadata(&candidate).await {
            Ok(meta) if meta.is_file() => {
                return Ok(ResolvedPath {
                    content_type: content_type_for(&candidate),
                    size: meta.len(),
                    path: candidate,
                });
            }
            _ => continue,
        }
    }

    Err(RequestError::NotFound)
}
