//! Stylesheet discovery.
//!
//! Directories are searched recursively for `.css` files; hidden entries
//! and common build/vendor directories are skipped. Paths named explicitly
//! are linted whatever their extension.

use std::fs;
use std::path::{Path, PathBuf};

/// Files found under the requested paths.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Discovered {
    /// Stylesheets to lint, sorted and deduplicated.
    pub files: Vec<PathBuf>,
    /// Requested paths that do not exist.
    pub missing: Vec<PathBuf>,
}

/// Discover stylesheets under each of `paths`.
pub fn discover_stylesheets(paths: &[PathBuf]) -> Discovered {
    let mut discovered = Discovered::default();
    for path in paths {
        if path.is_file() {
            discovered.files.push(path.clone());
        } else if path.is_dir() {
            discover_recursive(path, &mut discovered.files);
        } else {
            discovered.missing.push(path.clone());
        }
    }
    discovered.files.sort();
    discovered.files.dedup();
    discovered
}

fn is_stylesheet(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("css"))
}

fn discover_recursive(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) => {
            tracing::warn!(dir = %dir.display(), %error, "skipping unreadable directory");
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();

        // Skip hidden files and directories
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if name.starts_with('.') {
            continue;
        }

        if path.is_dir() {
            if matches!(name, "target" | "node_modules") {
                continue;
            }
            discover_recursive(&path, files);
        } else if is_stylesheet(&path) {
            files.push(path);
        }
    }
}
