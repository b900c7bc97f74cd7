mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::models::FsEntry;

/// One-shot directory listing. Implementations report symlinks as leaf
/// entries (the link's own metadata) and never follow them, so a link
/// back to an ancestor cannot introduce a traversal cycle.
#[async_trait]
pub trait FileSystem: Send + Sync {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>>;
}
