//! Per-run room directory

use std::fs::{self, DirBuilder};
use std::io;
use std::path::{Path, PathBuf};

/// `<prefix>.rooms.<pid>` under `parent`
pub fn run_dir_path(parent: &Path, prefix: &str, pid: u32) -> PathBuf {
    parent.join(format!("{prefix}.rooms.{pid}"))
}

/// Create the run directory (rwxr-xr-x on Unix). It is left behind when
/// the game ends.
///
/// The directory must not exist yet: pids get reused, and a directory left
/// by an earlier run would mix its room files into this one.
pub fn create_run_dir(parent: &Path, prefix: &str) -> io::Result<PathBuf> {
    let path = run_dir_path(parent, prefix, std::process::id());

    fs::create_dir_all(parent)?;

    let mut builder = DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(&path)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_dir_name() {
        assert_eq!(
            run_dir_path(Path::new("/tmp"), "adventure", 4242),
            PathBuf::from("/tmp/adventure.rooms.4242")
        );
    }

    #[test]
    fn test_existing_run_dir_is_rejected() {
        let parent = tempfile::tempdir().unwrap();
        let stale = run_dir_path(parent.path(), "test", std::process::id());
        fs::create_dir(&stale).unwrap();
        fs::write(stale.join("Old1"), "ROOM NAME: Old1\nROOM TYPE: START_ROOM\n").unwrap();

        let err = create_run_dir(parent.path(), "test").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_missing_parent_is_created() {
        let parent = tempfile::tempdir().unwrap();
        let nested = parent.path().join("a").join("b");

        let dir = create_run_dir(&nested, "test").unwrap();
        assert!(dir.is_dir());
        assert!(dir.starts_with(&nested));
    }

    #[test]
    fn test_create_run_dir() {
        let parent = tempfile::tempdir().unwrap();
        let dir = create_run_dir(parent.path(), "test").unwrap();

        assert!(dir.is_dir());
        assert!(dir.starts_with(parent.path()));
        assert!(
            dir.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("test.rooms."))
        );

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&dir).unwrap().permissions().mode();
            // umask may clear bits but never adds them
            assert_eq!(mode & 0o777 & !0o755, 0);
        }
    }
}
