use crate::domain::model::DirectoryListing;
use crate::domain::ports::Storage;
use crate::utils::error::{Result, SortError};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    fn root(&self) -> &Path {
        &self.base_path
    }

    async fn list_entries(&self) -> Result<DirectoryListing> {
        let read_error = |source| SortError::DirectoryRead {
            path: self.base_path.display().to_string(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.base_path).map_err(read_error)? {
            let entry = entry.map_err(read_error)?;
            // Names that are not valid UTF-8 cannot contain a UTF-8 title.
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => tracing::debug!("Skipping non UTF-8 entry {:?}", raw),
            }
        }
        names.sort();

        Ok(DirectoryListing::new(names))
    }

    async fn dir_exists(&self, dir: &Path) -> bool {
        fs::metadata(dir).is_ok()
    }

    async fn create_dir(&self, dir: &Path) -> Result<()> {
        let mut builder = fs::DirBuilder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o777);
        }

        builder
            .create(dir)
            .map_err(|source| SortError::DirectoryCreate {
                path: dir.display().to_string(),
                source,
            })
    }

    async fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        fs::rename(from, to).map_err(|source| SortError::FileMove {
            from: from.display().to_string(),
            to: to.display().to_string(),
            source,
        })
    }
}
