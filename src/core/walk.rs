use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::render;
use crate::fs::FileSystem;
use crate::models::{EntryKind, FsEntry};

/// Traversal mode, fixed for the whole walk.
#[derive(Clone, Copy, Debug, Default)]
pub struct WalkOptions {
    /// Whether plain files are listed alongside directories.
    pub include_files: bool,
}

/// Walk `dir` depth first and write one formatted line per visible
/// entry, streaming into `writer` as entries are encountered.
///
/// The first failure at any depth (unreadable directory, broken sink)
/// aborts the remaining traversal; whatever was already written stays
/// in the sink.
pub async fn write_tree<F: FileSystem, W: Write>(
    fs: &F,
    writer: &mut W,
    dir: &Path,
    options: &WalkOptions,
) -> Result<()> {
    write_tree_inner(fs, writer, dir, options, "").await
}

async fn write_tree_inner<F: FileSystem, W: Write>(
    fs: &F,
    writer: &mut W,
    dir: &Path,
    options: &WalkOptions,
    prefix: &str,
) -> Result<()> {
    let entries = sorted_entries(fs, dir).await?;
    let last_visible = last_visible_index(&entries, options.include_files);

    for (index, entry) in entries.iter().enumerate() {
        if entry.kind != EntryKind::Directory && !options.include_files {
            continue;
        }

        let is_last = last_visible == Some(index);
        let line = render::tree_line(entry, is_last, prefix);
        writer
            .write_all(line.as_bytes())
            .context("cannot write tree line")?;

        if entry.kind == EntryKind::Directory {
            let next_prefix = render::child_prefix(prefix, is_last);
            Box::pin(write_tree_inner(
                fs,
                writer,
                &entry.path,
                options,
                &next_prefix,
            ))
            .await?;
        }
    }

    Ok(())
}

/// One directory's entries, sorted ascending by name. The comparison is
/// over the name's bytes, not locale-aware.
async fn sorted_entries<F: FileSystem>(fs: &F, dir: &Path) -> Result<Vec<FsEntry>> {
    let mut entries = fs
        .read_dir(dir)
        .await
        .with_context(|| format!("cannot list {}", dir.display()))?;
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Index of the entry that takes the terminal connector: the final one
/// when files are included, otherwise the last directory. `None` means
/// no entry at this level is visible, so none is marked last.
fn last_visible_index(entries: &[FsEntry], include_files: bool) -> Option<usize> {
    if include_files {
        return entries.len().checked_sub(1);
    }
    entries
        .iter()
        .rposition(|entry| entry.kind == EntryKind::Directory)
}
