//! Size-capped log directory maintenance.
//!
//! Robot code writes log files under a single root directory. Before a new log
//! file is handed out, the whole tree under that root is scanned and the oldest
//! files are deleted until the total size fits within a byte quota.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{debug, info};

/// Default log quota (25 MiB).
pub const LOG_QUOTA_BYTES: u64 = 25 * 1024 * 1024;

/// Default log root on the robot controller.
pub const DEFAULT_LOG_ROOT: &str = "/sdcard/FIRST/RoadRunner";

/// A file discovered while scanning a log directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    /// Full path to the file
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
    /// Last modification time
    pub modified: SystemTime,
}

/// Outcome of a single prune pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneReport {
    /// Number of files found under the root
    pub files_scanned: usize,
    /// Files removed from the listing, oldest first (deleted or attempted)
    pub removed: Vec<PathBuf>,
    /// Number of removals whose delete call failed
    pub failed_deletes: usize,
    /// Total size before pruning
    pub bytes_before: u64,
    /// Total size after pruning, as accounted by the prune loop
    pub bytes_after: u64,
}

impl PruneReport {
    /// Whether the pass removed anything.
    pub fn pruned_any(&self) -> bool {
        !self.removed.is_empty()
    }
}

/// Keeps a log directory under a fixed byte quota.
///
/// Every call re-scans the directory from scratch; nothing is cached between
/// calls. There is no locking: two processes pruning the same root at once may
/// both try to delete the same file, or briefly leave the tree over quota.
/// Callers sharing a root across processes must serialize access themselves.
#[derive(Debug, Clone)]
pub struct LogQuotaManager {
    root: PathBuf,
    quota_bytes: u64,
}

impl LogQuotaManager {
    /// Create a manager for `root` with the given quota in bytes.
    pub fn new(root: impl Into<PathBuf>, quota_bytes: u64) -> Self {
        Self {
            root: root.into(),
            quota_bytes,
        }
    }

    /// Create a manager for `root` with the default 25 MiB quota.
    pub fn with_default_quota(root: impl Into<PathBuf>) -> Self {
        Self::new(root, LOG_QUOTA_BYTES)
    }

    /// Root directory managed by this instance.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Quota in bytes.
    pub fn quota_bytes(&self) -> u64 {
        self.quota_bytes
    }

    /// Obtain the path of a log file with the provided name.
    ///
    /// Creates the root directory (and parents) if needed, prunes the tree down
    /// to the quota, then returns `<root>/<name>`. The named file itself is not
    /// created.
    ///
    /// # Errors
    /// Returns an error if the root directory cannot be created or listed.
    pub fn acquire_log_file(&self, name: &str) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.root)?;
        self.prune()?;
        Ok(self.root.join(name))
    }

    /// List every file below the root, oldest first.
    ///
    /// A missing root yields an empty list. Ties on modification time keep
    /// directory listing order.
    pub fn scan(&self) -> io::Result<Vec<LogFile>> {
        let mut files = Vec::new();
        if !self.root.exists() {
            return Ok(files);
        }
        collect_files(&self.root, &mut files)?;
        files.sort_by_key(|f| f.modified);
        Ok(files)
    }

    /// Delete the oldest files until the tree fits within the quota.
    ///
    /// Stops once the accounted total is at or under the quota, or when every
    /// file has been tried. Deleting every file may still leave the tree over
    /// quota if deletes fail; that is not retried.
    pub fn prune(&self) -> io::Result<PruneReport> {
        let files = self.scan()?;
        let bytes_before = total_size(&files);

        let mut report = PruneReport {
            files_scanned: files.len(),
            bytes_before,
            bytes_after: bytes_before,
            ..Default::default()
        };

        let mut remaining = files.into_iter();
        while report.bytes_after > self.quota_bytes {
            let Some(oldest) = remaining.next() else {
                break;
            };
            report.bytes_after = report.bytes_after.saturating_sub(oldest.size);

            // Best-effort: a file that is already gone or cannot be removed is
            // counted and skipped; the loop keeps going.
            if let Err(e) = fs::remove_file(&oldest.path) {
                debug!("Failed to delete log {}: {e}", oldest.path.display());
                report.failed_deletes += 1;
            }
            report.removed.push(oldest.path);
        }

        if report.pruned_any() {
            info!(
                "Pruned {} log file(s) under {}: {} -> {} bytes (quota {})",
                report.removed.len(),
                self.root.display(),
                report.bytes_before,
                report.bytes_after,
                self.quota_bytes
            );
        }

        Ok(report)
    }
}

/// Sum of file sizes.
pub fn total_size(files: &[LogFile]) -> u64 {
    files.iter().map(|f| f.size).sum()
}

fn collect_files(dir: &Path, files: &mut Vec<LogFile>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => return Err(e),
        };

        if file_type.is_dir() {
            match collect_files(&entry.path(), files) {
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                other => other?,
            }
            continue;
        }

        let metadata = match entry.metadata() {
            Ok(m) => m,
            // Removed between listing and stat
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => return Err(e),
        };

        files.push(LogFile {
            path: entry.path(),
            size: metadata.len(),
            modified: metadata.modified()?,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use std::time::{Duration, UNIX_EPOCH};
    use tempfile::TempDir;

    const MIB: u64 = 1024 * 1024;

    fn write_log(dir: &Path, name: &str, size: u64, mtime_secs: u64) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        let mut file = File::create(&path).unwrap();
        file.write_all(&vec![0u8; size as usize]).unwrap();
        file.set_modified(UNIX_EPOCH + Duration::from_secs(mtime_secs))
            .unwrap();
        path
    }

    #[test]
    fn test_acquire_creates_missing_root() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("nested").join("logs");
        let manager = LogQuotaManager::with_default_quota(&root);

        let path = manager.acquire_log_file("run.log").unwrap();

        assert!(root.is_dir());
        assert_eq!(path, root.join("run.log"));
        assert!(!path.exists(), "named file must not be created");
    }

    #[test]
    fn test_acquire_is_idempotent_on_existing_root() {
        let tmp = TempDir::new().unwrap();
        let manager = LogQuotaManager::with_default_quota(tmp.path());
        manager.acquire_log_file("a.log").unwrap();
        manager.acquire_log_file("a.log").unwrap();
        assert!(tmp.path().is_dir());
    }

    #[test]
    fn test_three_ten_mib_files_drop_oldest_only() {
        let tmp = TempDir::new().unwrap();
        let a = write_log(tmp.path(), "a.log", 10 * MIB, 100);
        let b = write_log(tmp.path(), "b.log", 10 * MIB, 200);
        let c = write_log(tmp.path(), "c.log", 10 * MIB, 300);

        let manager = LogQuotaManager::with_default_quota(tmp.path());
        manager.acquire_log_file("d.log").unwrap();

        assert!(!a.exists());
        assert!(b.exists());
        assert!(c.exists());
        assert_eq!(total_size(&manager.scan().unwrap()), 20 * MIB);
    }

    #[test]
    fn test_prune_removes_globally_oldest_across_subdirectories() {
        let tmp = TempDir::new().unwrap();
        // Oldest files live in different subdirectories
        let t1 = write_log(tmp.path(), "z/deep/one.log", 40, 1);
        let t2 = write_log(tmp.path(), "a/two.log", 40, 2);
        let t3 = write_log(tmp.path(), "three.log", 40, 3);
        let t4 = write_log(tmp.path(), "z/four.log", 40, 4);

        let manager = LogQuotaManager::new(tmp.path(), 80);
        let report = manager.prune().unwrap();

        assert_eq!(report.files_scanned, 4);
        assert_eq!(report.removed, vec![t1.clone(), t2.clone()]);
        assert_eq!(report.bytes_before, 160);
        assert_eq!(report.bytes_after, 80);
        assert!(!t1.exists());
        assert!(!t2.exists());
        assert!(t3.exists());
        assert!(t4.exists());
    }

    #[test]
    fn test_second_acquire_deletes_nothing() {
        let tmp = TempDir::new().unwrap();
        write_log(tmp.path(), "a.log", 60, 1);
        write_log(tmp.path(), "b.log", 60, 2);
        write_log(tmp.path(), "c.log", 60, 3);

        let manager = LogQuotaManager::new(tmp.path(), 100);
        manager.acquire_log_file("next.log").unwrap();
        let after_first = manager.scan().unwrap();

        let report = manager.prune().unwrap();
        assert!(!report.pruned_any());
        assert_eq!(manager.scan().unwrap(), after_first);
    }

    #[test]
    fn test_under_quota_is_untouched() {
        let tmp = TempDir::new().unwrap();
        let a = write_log(tmp.path(), "a.log", 10, 1);

        let manager = LogQuotaManager::new(tmp.path(), 10);
        let report = manager.prune().unwrap();

        assert!(!report.pruned_any());
        assert!(a.exists());
    }

    #[test]
    fn test_single_file_larger_than_quota_is_deleted() {
        let tmp = TempDir::new().unwrap();
        let big = write_log(tmp.path(), "big.log", 500, 1);

        let manager = LogQuotaManager::new(tmp.path(), 100);
        let report = manager.prune().unwrap();

        assert_eq!(report.removed, vec![big.clone()]);
        assert_eq!(report.bytes_after, 0);
        assert!(!big.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_delete_is_counted_and_pruning_continues() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let stuck = write_log(tmp.path(), "locked/a.log", 40, 1);
        let b = write_log(tmp.path(), "b.log", 40, 2);
        let c = write_log(tmp.path(), "c.log", 40, 3);

        let locked = tmp.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

        // Permission bits do not stop root; nothing to exercise then.
        let write_check = locked.join(".write_check");
        if File::create(&write_check).is_ok() {
            fs::remove_file(&write_check).unwrap();
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let manager = LogQuotaManager::new(tmp.path(), 40);
        let report = manager.prune();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        let report = report.unwrap();

        assert_eq!(report.failed_deletes, 1);
        assert_eq!(report.removed, vec![stuck.clone(), b.clone()]);
        assert_eq!(report.bytes_after, 40);
        assert!(stuck.exists());
        assert!(!b.exists());
        assert!(c.exists());
    }

    #[test]
    fn test_scan_orders_oldest_first_and_skips_directories() {
        let tmp = TempDir::new().unwrap();
        write_log(tmp.path(), "new.log", 1, 50);
        write_log(tmp.path(), "sub/old.log", 2, 10);
        fs::create_dir_all(tmp.path().join("empty")).unwrap();

        let manager = LogQuotaManager::with_default_quota(tmp.path());
        let files = manager.scan().unwrap();

        assert_eq!(files.len(), 2);
        assert!(files[0].path.ends_with("sub/old.log"));
        assert_eq!(files[0].size, 2);
        assert!(files[1].path.ends_with("new.log"));
    }

    #[test]
    fn test_scan_missing_root_is_empty() {
        let tmp = TempDir::new().unwrap();
        let manager = LogQuotaManager::with_default_quota(tmp.path().join("absent"));
        assert!(manager.scan().unwrap().is_empty());
        assert!(!manager.prune().unwrap().pruned_any());
    }

    #[test]
    fn test_acquire_fails_when_root_is_a_file() {
        let tmp = TempDir::new().unwrap();
        let blocker = write_log(tmp.path(), "blocker", 1, 1);

        let manager = LogQuotaManager::with_default_quota(blocker.join("logs"));
        assert!(manager.acquire_log_file("x.log").is_err());
    }
}
