use std::path::{Path, PathBuf};

/// Map a percent-decoded URL path onto the server root.
///
/// Each `/`-separated segment is joined onto the root with the host's native
/// separator. No normalization or containment check is performed: `..`
/// segments pass through verbatim and can escape the root. This mirrors the
/// historical behavior and is a documented gap, not a guarantee.
pub fn resolve(root: &Path, url_path: &str) -> PathBuf {
    let mut path = root.to_path_buf();
    for segment in url_path.split('/').filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path
}
