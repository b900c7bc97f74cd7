use crate::models::{EntryKind, FsEntry};

pub const BRANCH_CONNECTOR: &str = "├───";
pub const TERMINAL_CONNECTOR: &str = "└───";
/// Prefix extension below a directory that still has siblings after it.
pub const CONTINUATION_UNIT: &str = "│\t";
/// Prefix extension below the last visible directory at a level.
pub const INDENT_UNIT: &str = "\t";

/// Render one output line: inherited prefix, connector, name, and for
/// non-directories a size annotation (`(empty)` for zero bytes).
pub fn tree_line(entry: &FsEntry, is_last: bool, prefix: &str) -> String {
    let connector = if is_last {
        TERMINAL_CONNECTOR
    } else {
        BRANCH_CONNECTOR
    };

    match entry.kind {
        EntryKind::Directory => format!("{prefix}{connector}{}\n", entry.name),
        _ if entry.size == 0 => format!("{prefix}{connector}{} (empty)\n", entry.name),
        _ => format!("{prefix}{connector}{} ({}b)\n", entry.name, entry.size),
    }
}

/// Derive the prefix a directory's children inherit. The parent's own
/// prefix is never mutated; siblings each derive their own copy.
pub fn child_prefix(prefix: &str, parent_is_last: bool) -> String {
    if parent_is_last {
        format!("{prefix}{INDENT_UNIT}")
    } else {
        format!("{prefix}{CONTINUATION_UNIT}")
    }
}
