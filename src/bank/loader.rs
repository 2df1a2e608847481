use std::{fs, io, path::Path};

use color_eyre::{eyre::WrapErr, Result};

use super::SourceNode;

/// Read a question directory into a source tree.
///
/// Subdirectories become groups and `*.json` files become leaves named after
/// their stem; other files are skipped. A file that cannot be read or parsed
/// becomes a leaf carrying the error, so one bad lesson never fails the load.
/// Directories that cannot be listed do fail it. Symlinked directories are
/// not followed; symlinked files are read like any other.
pub fn load_dir(root: &Path) -> Result<SourceNode> {
    let name = root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let children = read_children(root)
        .wrap_err_with(|| format!("could not read question directory {}", root.display()))?;

    tracing::debug!("loaded question tree from {}", root.display());
    Ok(SourceNode::group(name, children))
}

fn read_children(dir: &Path) -> io::Result<Vec<SourceNode>> {
    let mut entries = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut children = Vec::with_capacity(entries.len());
    for entry in entries {
        let path = entry.path();
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            let name = entry.file_name().to_string_lossy().into_owned();
            children.push(SourceNode::group(name, read_children(&path)?));
            continue;
        }

        // Linked directories may point back up the tree.
        if file_type.is_symlink() && path.is_dir() {
            tracing::warn!("skipping linked directory {}", path.display());
            continue;
        }

        if path.extension().is_some_and(|ext| ext == "json") {
            let stem = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            children.push(read_leaf(stem, &path));
        }
    }

    Ok(children)
}

fn read_leaf(name: String, path: &Path) -> SourceNode {
    let parsed = fs::read_to_string(path)
        .map_err(|e| format!("{}: {e}", path.display()))
        .and_then(|text| {
            serde_json::from_str::<serde_json::Value>(&text)
                .map_err(|e| format!("{}: {e}", path.display()))
        });

    match parsed {
        Ok(value) => SourceNode::leaf(name, value),
        Err(reason) => SourceNode::unreadable(name, reason),
    }
}
