//! Filesystem operations

use std::path::Path;

use crate::error::FilesystemError;

/// Create a directory and all parent directories.
///
/// A no-op if the directory already exists.
pub fn create_dir_all(path: &Path) -> Result<(), FilesystemError> {
    std::fs::create_dir_all(path).map_err(|e| FilesystemError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("data");
        assert!(!target.exists());

        create_dir_all(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn test_creates_parents() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("a").join("b").join("data");

        create_dir_all(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn test_idempotent() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("data");

        create_dir_all(&target).unwrap();
        create_dir_all(&target).unwrap();
        assert!(target.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_reports_permission_failure() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let readonly = temp.path().join("readonly");
        std::fs::create_dir(&readonly).unwrap();
        std::fs::set_permissions(&readonly, std::fs::Permissions::from_mode(0o555)).unwrap();

        let result = create_dir_all(&readonly.join("data"));
        // Restore permissions so TempDir can clean up
        std::fs::set_permissions(&readonly, std::fs::Permissions::from_mode(0o755)).unwrap();

        if nix_is_root() {
            // Root ignores directory permission bits
            return;
        }
        assert!(matches!(result, Err(FilesystemError::CreateDir { .. })));
    }

    #[cfg(unix)]
    fn nix_is_root() -> bool {
        std::process::Command::new("id")
            .arg("-u")
            .output()
            .map(|o| String::from_utf8_lossy(&o.stdout).trim() == "0")
            .unwrap_or(false)
    }
}
