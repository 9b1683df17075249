// Staged atomic file replacement.
//
// The staged file lives in the target's directory so the final rename
// stays on one filesystem and is atomic. Dropping an uncommitted stage
// removes the temporary file, so no run can leak one.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

pub struct StagedFile {
    temp: NamedTempFile,
}

impl StagedFile {
    /// Create the staged working file next to `target`.
    pub fn create_for(target: &Path) -> io::Result<Self> {
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        Ok(Self {
            temp: NamedTempFile::new_in(dir)?,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Write `content`, carry the target's permissions over, and swap the
    /// staged file into place. A rename alone would leave the target with
    /// the temp file's restrictive mode, so the original permissions are
    /// copied across explicitly.
    pub fn commit(mut self, content: &str, target: &Path) -> io::Result<()> {
        self.temp.write_all(content.as_bytes())?;
        self.temp.flush()?;

        let permissions = fs::metadata(target)?.permissions();
        fs::set_permissions(self.temp.path(), permissions)?;

        self.temp.persist(target).map_err(|e| e.error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("doc.txt");
        fs::write(&target, "old").unwrap();

        let staged = StagedFile::create_for(&target).unwrap();
        staged.commit("new", &target).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
    }

    #[test]
    fn test_dropped_stage_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("doc.txt");
        fs::write(&target, "old").unwrap();

        let staged = StagedFile::create_for(&target).unwrap();
        let temp_path = staged.path().to_path_buf();
        assert!(temp_path.exists());

        drop(staged);
        assert!(!temp_path.exists());
        assert_eq!(fs::read_to_string(&target).unwrap(), "old");
    }

    #[cfg(unix)]
    #[test]
    fn test_commit_preserves_target_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("doc.txt");
        fs::write(&target, "old").unwrap();
        fs::set_permissions(&target, fs::Permissions::from_mode(0o644)).unwrap();

        let staged = StagedFile::create_for(&target).unwrap();
        staged.commit("new", &target).unwrap();

        let mode = fs::metadata(&target).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }
}
