use std::cmp::Ordering;
use std::io;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use tokio::fs;

const UPLOAD_FORM: &str = "<div><form method=\"post\" enctype=\"multipart/form-data\">\
<input type=\"file\" id=\"upload\" name=\"upload\"><input type=\"submit\"></form></div>\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// Anything else (socket, device, symlink to neither); skipped from rendering
    Other,
}

/// One filesystem object within a listed directory
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
    pub size: u64,
    pub modified: Option<SystemTime>,
}

/// Enumerate a directory and return its entries sorted for rendering:
/// directories first, then lexicographically by name within each group.
pub async fn read_entries(dir: &Path) -> io::Result<Vec<Entry>> {
    let mut read_dir = fs::read_dir(dir).await?;
    let mut entries = Vec::new();

    while let Some(dirent) = read_dir.next_entry().await? {
        let metadata = dirent.metadata().await?;
        let kind = if metadata.is_dir() {
            EntryKind::Directory
        } else if metadata.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };

        entries.push(Entry {
            name: dirent.file_name().to_string_lossy().into_owned(),
            kind,
            size: metadata.len(),
            modified: metadata.modified().ok(),
        });
    }

    sort_entries(&mut entries);
    Ok(entries)
}

fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| {
        match (
            a.kind == EntryKind::Directory,
            b.kind == EntryKind::Directory,
        ) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => a.name.cmp(&b.name),
        }
    });
}

/// Render a sorted entry list as the listing page for `url_path`.
///
/// Directories render as links with a trailing `/` on both target and label;
/// files render as a link plus size in bytes and modification time. Dotfiles
/// are skipped when `hide_dotfiles` is set.
pub fn render(url_path: &str, entries: &[Entry], hide_dotfiles: bool) -> String {
    let mut out = String::new();
    out.push_str("<html><head><title>");
    out.push_str(&escape(url_path));
    out.push_str("</title></head><body>\n");
    out.push_str(UPLOAD_FORM);

    out.push_str("<div><ul>\n");
    for entry in entries {
        if hide_dotfiles && entry.name.starts_with('.') {
            continue;
        }

        let name = escape(&entry.name);
        match entry.kind {
            EntryKind::Directory => {
                out.push_str(&format!("<li><a href=\"{name}/\">{name}/</a>\n"));
            }
            EntryKind::File => {
                let mtime = entry.modified.map(format_mtime).unwrap_or_default();
                out.push_str(&format!(
                    "<li><a href=\"{name}\">{name}</a> {} {mtime}\n",
                    entry.size
                ));
            }
            EntryKind::Other => {}
        }
    }
    out.push_str("</ul></div>\n");

    out.push_str("</body></html>");
    out
}

fn format_mtime(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format("%Y-%m-%d %H:%M").to_string()
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
