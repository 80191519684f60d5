//! HTTP request handlers.

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use std::{
    path::{Component, Path, PathBuf},
    sync::Arc,
};
use tokio::fs;
use tracing::debug;

use crate::state::AppState;

/// One row of a generated directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    pub is_dir: bool,
    pub is_symlink: bool,
}

impl ListingEntry {
    /// Relative link target; directories keep a trailing slash
    fn href(&self) -> String {
        let encoded = urlencoding::encode(&self.name);
        if self.is_dir {
            format!("{encoded}/")
        } else {
            encoded.into_owned()
        }
    }

    /// Displayed name; symlinks are marked with `@`, directories with `/`
    fn display_name(&self) -> String {
        if self.is_symlink {
            format!("{}@", self.name)
        } else if self.is_dir {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Maps a URL path onto a filesystem path under `root`
///
/// The path is percent-decoded and split into components. Any component
/// that could leave `root` (`..`, an absolute root, a drive prefix) rejects
/// the whole path, as does an embedded NUL.
pub fn resolve_path(root: &Path, url_path: &str) -> Option<PathBuf> {
    let decoded = urlencoding::decode(url_path).ok()?;
    if decoded.contains('\0') {
        return None;
    }

    let mut resolved = root.to_path_buf();
    for component in Path::new(decoded.trim_start_matches('/')).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(resolved)
}

/// Renders the HTML index page for a directory
///
/// Entries are sorted case-insensitively by name. `display_path` is the
/// decoded request path and is escaped here.
pub fn render_listing(display_path: &str, entries: &mut [ListingEntry]) -> String {
    entries.sort_by_key(|entry| entry.name.to_lowercase());

    let title = format!("Directory listing for {}", escape_html(display_path));
    let items: String = entries
        .iter()
        .map(|entry| {
            format!(
                "<li><a href=\"{}\">{}</a></li>\n",
                escape_html(&entry.href()),
                escape_html(&entry.display_name())
            )
        })
        .collect();

    format!(
        "<!DOCTYPE HTML>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>\n\
         <h1>{title}</h1>\n\
         <hr>\n\
         <ul>\n\
         {items}\
         </ul>\n\
         <hr>\n\
         </body>\n\
         </html>\n"
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Answers requests the file service could not satisfy
///
/// The file service already serves files, redirects directory paths that
/// lack a trailing slash, and serves a directory's `index.html`. What
/// reaches this handler is either a directory without an index, which gets
/// a generated listing, or something that does not exist (404). An
/// unreadable directory is answered with 403.
pub async fn list_directory(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let Some(dir) = resolve_path(&state.root, uri.path()) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match fs::metadata(&dir).await {
        Ok(metadata) if metadata.is_dir() => {}
        _ => return StatusCode::NOT_FOUND.into_response(),
    }

    let mut entries = match read_entries(&dir).await {
        Ok(entries) => entries,
        Err(err) => {
            debug!("Cannot list {}: {}", dir.display(), err);
            return StatusCode::FORBIDDEN.into_response();
        }
    };

    let display_path = urlencoding::decode(uri.path())
        .map(|path| path.into_owned())
        .unwrap_or_else(|_| uri.path().to_string());
    let body = render_listing(&display_path, &mut entries);

    (
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/html; charset=utf-8"),
        )],
        body,
    )
        .into_response()
}

async fn read_entries(dir: &Path) -> std::io::Result<Vec<ListingEntry>> {
    let mut reader = fs::read_dir(dir).await?;
    let mut entries = Vec::new();

    while let Some(entry) = reader.next_entry().await? {
        let is_symlink = entry.file_type().await?.is_symlink();
        // Follows symlinks, so a link to a directory is listed as one.
        let is_dir = fs::metadata(entry.path())
            .await
            .map(|metadata| metadata.is_dir())
            .unwrap_or(false);

        entries.push(ListingEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir,
            is_symlink,
        });
    }

    Ok(entries)
}
