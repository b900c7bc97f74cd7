use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::models::FsEntry;

use super::FileSystem;

/// Scripted filesystem for walker tests: each path answers with a fixed
/// entry list or a fixed error, and every read is recorded so tests can
/// assert which directories were actually visited.
#[derive(Default)]
pub struct MockFileSystem {
    dirs: Mutex<HashMap<PathBuf, Result<Vec<FsEntry>, String>>>,
    reads: Mutex<Vec<PathBuf>>,
}

impl MockFileSystem {
    pub fn with_dir(self, dir: impl Into<PathBuf>, entries: Vec<FsEntry>) -> Self {
        self.dirs
            .lock()
            .expect("mock fs lock")
            .insert(dir.into(), Ok(entries));
        self
    }

    pub fn with_failure(self, dir: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        self.dirs
            .lock()
            .expect("mock fs lock")
            .insert(dir.into(), Err(message.into()));
        self
    }

    pub fn reads(&self) -> Vec<PathBuf> {
        self.reads.lock().expect("mock fs lock").clone()
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        self.reads
            .lock()
            .expect("mock fs lock")
            .push(dir.to_path_buf());

        match self.dirs.lock().expect("mock fs lock").get(dir) {
            Some(Ok(entries)) => Ok(entries.clone()),
            Some(Err(message)) => Err(anyhow!("{message}")),
            None => Err(anyhow!("no scripted listing for {}", dir.display())),
        }
    }
}
