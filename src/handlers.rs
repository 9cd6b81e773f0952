use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::{header, Method, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio_util::io::ReaderStream;
use tracing::{debug, info};

use crate::error::ServeError;
use crate::listing;
use crate::resolve::resolve;
use crate::AppState;

/// GET / - read or list the server root
pub async fn get_root(State(state): State<AppState>) -> Result<Response, ServeError> {
    read_or_list(&state, "").await
}

/// GET /<path> - read a file or list a directory
pub async fn get_path(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response, ServeError> {
    read_or_list(&state, &path).await
}

/// POST / - upload into the server root
pub async fn post_root(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, ServeError> {
    upload(&state, "", multipart).await
}

/// POST /<path> - upload into the directory at <path>
pub async fn post_path(
    State(state): State<AppState>,
    Path(path): Path<String>,
    multipart: Multipart,
) -> Result<Response, ServeError> {
    upload(&state, &path, multipart).await
}

/// Fallback for every method other than GET and POST
pub async fn method_not_allowed(method: Method) -> ServeError {
    ServeError::MethodNotAllowed(method.to_string())
}

/// Resolve `url_path` under the root and answer with the file's bytes, the
/// rendered directory listing, or an error.
async fn read_or_list(state: &AppState, url_path: &str) -> Result<Response, ServeError> {
    let fs_path = resolve(&state.root_dir, url_path);
    debug!("fs path = {}", fs_path.display());

    let metadata = fs::metadata(&fs_path)
        .await
        .map_err(|_| ServeError::NotFound(request_path(url_path)))?;

    if metadata.is_file() {
        let file = fs::File::open(&fs_path).await?;
        let body = Body::from_stream(ReaderStream::new(file));
        return Ok((
            StatusCode::OK,
            [(header::CONTENT_LENGTH, metadata.len().to_string())],
            body,
        )
            .into_response());
    }

    if metadata.is_dir() {
        let entries = listing::read_entries(&fs_path).await?;
        let html = listing::render(&request_path(url_path), &entries, state.config.hide_dotfiles);
        return Ok(Html(html).into_response());
    }

    Err(ServeError::Unsupported(format!("{:?}", metadata.file_type())))
}

/// Store one multipart-uploaded file into the directory at `url_path`, then
/// answer with that directory's fresh listing.
async fn upload(
    state: &AppState,
    url_path: &str,
    mut multipart: Multipart,
) -> Result<Response, ServeError> {
    let dir_path = resolve(&state.root_dir, url_path);
    debug!("fs path = {}", dir_path.display());

    let metadata = fs::metadata(&dir_path)
        .await
        .map_err(|_| ServeError::NotFound(request_path(url_path)))?;
    if !metadata.is_dir() {
        return Err(ServeError::NotADirectory(dir_path.display().to_string()));
    }

    while let Some(mut field) = multipart.next_field().await? {
        if field.name() != Some("upload") {
            continue;
        }

        // The first `upload` part decides the outcome; an empty filename is
        // rejected like a missing part.
        let Some(file_name) = field.file_name().filter(|n| !n.is_empty()).map(String::from)
        else {
            break;
        };

        let dest = dir_path.join(&file_name);
        if fs::metadata(&dest).await.is_ok() {
            return Err(ServeError::AlreadyExists(dest.display().to_string()));
        }

        let mut out = fs::File::create(&dest).await?;
        let mut total: u64 = 0;
        while let Some(chunk) = field.chunk().await? {
            total += chunk.len() as u64;
            if total > state.config.max_upload_size {
                drop(out);
                let _ = fs::remove_file(&dest).await;
                return Err(ServeError::TooLarge {
                    size: total,
                    limit: state.config.max_upload_size,
                });
            }
            out.write_all(&chunk).await?;
        }
        out.flush().await?;

        info!("uploaded {} ({} bytes)", dest.display(), total);

        // Answer with the fresh listing so the client sees the new file
        // immediately; this is a re-run of the GET path, not a redirect.
        return read_or_list(state, url_path).await;
    }

    Err(ServeError::EmptyForm)
}

fn request_path(url_path: &str) -> String {
    format!("/{url_path}")
}
