//! Flat-file implementation of [`DomainSetRepository`].

use async_trait::async_trait;
use std::collections::BTreeSet;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::repositories::{DomainSetRepository, StoreError};

/// Stores the set as UTF-8 text, one canonical item per line, sorted, no header.
///
/// Writes go to a sibling temporary file which is synced and then renamed over
/// the target, so a concurrent reader sees either the old or the new set.
/// The temporary name is fixed; only one writer may run at a time.
#[derive(Debug, Clone)]
pub struct FileDomainSetRepository {
    path: PathBuf,
}

impl FileDomainSetRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("domains"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    async fn write_temp(&self, temp: &Path, contents: &[u8]) -> std::io::Result<()> {
        let mut file = fs::File::create(temp).await?;
        file.write_all(contents).await?;
        file.sync_all().await?;
        Ok(())
    }
}

#[async_trait]
impl DomainSetRepository for FileDomainSetRepository {
    async fn load(&self) -> Result<BTreeSet<String>, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeSet::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        let text = String::from_utf8(bytes).map_err(|_| StoreError::Encoding {
            path: self.path.clone(),
        })?;

        Ok(text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    async fn replace(&self, items: &BTreeSet<String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }

        let mut contents = String::with_capacity(items.iter().map(|i| i.len() + 1).sum());
        for item in items {
            contents.push_str(item);
            contents.push('\n');
        }

        let temp = self.temp_path();
        if let Err(e) = self.write_temp(&temp, contents.as_bytes()).await {
            let _ = fs::remove_file(&temp).await;
            return Err(self.io_error(e));
        }

        fs::rename(&temp, &self.path)
            .await
            .map_err(|e| self.io_error(e))?;

        tracing::debug!(path = %self.path.display(), items = items.len(), "Domain set written");
        Ok(())
    }

    async fn remove_all(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let repo = FileDomainSetRepository::new(dir.path().join("domains.txt"));

        assert!(repo.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_replace_writes_sorted_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("domains.txt");
        let repo = FileDomainSetRepository::new(&path);

        repo.replace(&set(&["zeta.io", "alpha.io", "https://mid.io/x"]))
            .await
            .unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, "alpha.io\nhttps://mid.io/x\nzeta.io\n");
        assert!(!repo.temp_path().exists());
    }

    #[tokio::test]
    async fn test_load_skips_blank_lines_and_whitespace() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("domains.txt");
        std::fs::write(&path, "b.io\n\n  a.io  \r\nb.io\n").unwrap();

        let repo = FileDomainSetRepository::new(&path);
        assert_eq!(repo.load().await.unwrap(), set(&["a.io", "b.io"]));
    }

    #[tokio::test]
    async fn test_replace_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deeper/domains.txt");
        let repo = FileDomainSetRepository::new(&path);

        repo.replace(&set(&["a.io"])).await.unwrap();

        assert!(path.exists());
        assert_eq!(repo.load().await.unwrap(), set(&["a.io"]));
    }

    #[tokio::test]
    async fn test_replace_overwrites_previous_contents() {
        let dir = TempDir::new().unwrap();
        let repo = FileDomainSetRepository::new(dir.path().join("domains.txt"));

        repo.replace(&set(&["a.io", "b.io"])).await.unwrap();
        repo.replace(&set(&["c.io"])).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), set(&["c.io"]));
    }

    #[tokio::test]
    async fn test_remove_all_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("domains.txt");
        let repo = FileDomainSetRepository::new(&path);

        repo.replace(&set(&["a.io"])).await.unwrap();
        repo.remove_all().await.unwrap();
        assert!(!path.exists());

        repo.remove_all().await.unwrap();
        assert!(repo.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_rejects_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("domains.txt");
        std::fs::write(&path, [0xff, 0xfe, b'\n']).unwrap();

        let repo = FileDomainSetRepository::new(&path);
        assert!(matches!(
            repo.load().await,
            Err(StoreError::Encoding { .. })
        ));
    }

    #[tokio::test]
    async fn test_replace_into_unwritable_location_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file-not-dir");
        std::fs::write(&blocker, "x").unwrap();

        let repo = FileDomainSetRepository::new(blocker.join("domains.txt"));
        assert!(matches!(
            repo.replace(&set(&["a.io"])).await,
            Err(StoreError::Io { .. })
        ));
    }

    #[test]
    fn test_location_reports_path() {
        let repo = FileDomainSetRepository::new("/data/domains.txt");
        assert_eq!(repo.location(), PathBuf::from("/data/domains.txt"));
        assert_eq!(repo.temp_path(), PathBuf::from("/data/domains.txt.tmp"));
    }
}
