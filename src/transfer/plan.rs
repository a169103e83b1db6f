// Copyright 2025 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.
//
// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::UploadConfig;
use crate::storage::error::{StorageError, StorageResult};

/// One local file paired with its destination object path.
#[derive(Debug, Clone)]
pub struct TransferUnit {
    /// Absolute or root-relative path of the local file
    pub local_path: PathBuf,
    /// Destination path inside the workspace filesystem, forward slashes,
    /// no leading or trailing slash
    pub remote_path: String,
    /// Local file size in bytes
    pub size: u64,
}

impl TransferUnit {
    /// File name of the local file, for user-facing failure lines.
    pub fn file_name(&self) -> String {
        self.local_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.local_path.display().to_string())
    }
}

/// Compose the destination path for a file at `relative` under the local root.
///
/// Joins `{lakehouse_root}/{subfolder}/{relative}`, converting backslash
/// separators to forward slashes and dropping empty segments, so the result
/// never starts or ends with `/` and never contains `//`. A file directly
/// under the root (empty relative directory) collapses cleanly.
pub fn remote_path(lakehouse_root: &str, subfolder: &str, relative: &Path) -> String {
    let joined = format!(
        "{}/{}/{}",
        lakehouse_root,
        subfolder,
        relative.display()
    );
    joined
        .replace('\\', "/")
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// The fully materialized set of transfer units for one run.
///
/// The plan is built in full before any upload begins so the total count is
/// known up front for progress reporting.
#[derive(Debug)]
pub struct TransferPlan {
    units: Vec<TransferUnit>,
}

impl TransferPlan {
    /// Enumerate the configured local root into transfer units.
    ///
    /// Walks the tree recursively with file names sorted per directory level,
    /// producing one unit per regular file; directories themselves produce
    /// none. Order is deterministic.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::ConfigError` before any enumeration if the
    /// local root does not exist or is not a directory, and
    /// `StorageError::IoError` if a directory entry cannot be read.
    pub fn scan(config: &UploadConfig) -> StorageResult<Self> {
        let root = &config.local_root;
        if !root.is_dir() {
            return Err(StorageError::ConfigError(format!(
                "Local folder not found or not a directory: {}",
                root.display()
            )));
        }

        let lakehouse_root = config.lakehouse_root();
        let mut units = Vec::new();
        for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            let remote = remote_path(&lakehouse_root, &config.subfolder, relative);
            let size = entry.metadata().map_err(std::io::Error::from)?.len();
            units.push(TransferUnit {
                local_path: entry.into_path(),
                remote_path: remote,
                size,
            });
        }

        Ok(Self { units })
    }

    /// Units in upload order.
    pub fn units(&self) -> &[TransferUnit] {
        &self.units
    }

    /// Total number of files to upload.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the plan contains no files.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(root: &Path) -> UploadConfig {
        UploadConfig {
            tenant_id: "tenant".to_string(),
            client_id: "client".to_string(),
            client_secret: "secret".to_string(),
            workspace: "ws1".to_string(),
            lakehouse: "lh1".to_string(),
            local_root: root.to_path_buf(),
            subfolder: "drop".to_string(),
        }
    }

    #[test]
    fn test_remote_path_simple() {
        let path = remote_path("lh1.Lakehouse/Files", "drop", Path::new("a.txt"));
        assert_eq!(path, "lh1.Lakehouse/Files/drop/a.txt");
    }

    #[test]
    fn test_remote_path_nested() {
        let path = remote_path("lh1.Lakehouse/Files", "drop", Path::new("sub/b.txt"));
        assert_eq!(path, "lh1.Lakehouse/Files/drop/sub/b.txt");
    }

    #[test]
    fn test_remote_path_normalizes_backslashes() {
        let forward = remote_path("lh1.Lakehouse/Files", "drop", Path::new("sub/b.txt"));
        let backward = remote_path("lh1.Lakehouse/Files", "drop", Path::new("sub\\b.txt"));
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_remote_path_is_idempotent() {
        let first = remote_path("lh1.Lakehouse/Files", "drop", Path::new("x/y/z.bin"));
        let second = remote_path("lh1.Lakehouse/Files", "drop", Path::new("x/y/z.bin"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_remote_path_has_no_slash_artifacts() {
        let cases = [
            remote_path("lh1.Lakehouse/Files", "drop", Path::new("a.txt")),
            remote_path("lh1.Lakehouse/Files", "drop/", Path::new("/a.txt")),
            remote_path("lh1.Lakehouse/Files", "drop", Path::new("deep/tree/c.txt")),
        ];
        for path in cases {
            assert!(!path.starts_with('/'), "leading slash in {}", path);
            assert!(!path.ends_with('/'), "trailing slash in {}", path);
            assert!(!path.contains("//"), "doubled slash in {}", path);
        }
    }

    #[test]
    fn test_scan_maps_example_tree() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(temp_dir.path().join("sub")).unwrap();
        fs::write(temp_dir.path().join("sub").join("b.txt"), "b").unwrap();

        let plan = TransferPlan::scan(&config_for(temp_dir.path())).unwrap();

        assert_eq!(plan.len(), 2);
        let remotes: Vec<&str> = plan
            .units()
            .iter()
            .map(|u| u.remote_path.as_str())
            .collect();
        assert_eq!(
            remotes,
            vec![
                "lh1.Lakehouse/Files/drop/a.txt",
                "lh1.Lakehouse/Files/drop/sub/b.txt",
            ]
        );
    }

    #[test]
    fn test_scan_counts_files_not_directories() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("x/y/z")).unwrap();
        fs::write(temp_dir.path().join("one.txt"), "1").unwrap();
        fs::write(temp_dir.path().join("x/two.txt"), "2").unwrap();
        fs::write(temp_dir.path().join("x/y/z/three.txt"), "3").unwrap();

        let plan = TransferPlan::scan(&config_for(temp_dir.path())).unwrap();

        assert_eq!(plan.len(), 3);
    }

    #[test]
    fn test_scan_order_is_deterministic() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.txt"), "b").unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        fs::write(temp_dir.path().join("c.txt"), "c").unwrap();

        let first = TransferPlan::scan(&config_for(temp_dir.path())).unwrap();
        let second = TransferPlan::scan(&config_for(temp_dir.path())).unwrap();

        let names = |plan: &TransferPlan| -> Vec<String> {
            plan.units().iter().map(|u| u.file_name()).collect()
        };
        assert_eq!(names(&first), vec!["a.txt", "b.txt", "c.txt"]);
        assert_eq!(names(&first), names(&second));
    }

    #[test]
    fn test_scan_empty_tree_yields_empty_plan() {
        let temp_dir = TempDir::new().unwrap();
        let plan = TransferPlan::scan(&config_for(temp_dir.path())).unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.len(), 0);
    }

    #[test]
    fn test_scan_missing_root_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");

        let result = TransferPlan::scan(&config_for(&missing));

        match result {
            Err(StorageError::ConfigError(msg)) => {
                assert!(msg.contains("not found"), "unexpected message: {}", msg);
            }
            _ => panic!("Expected ConfigError for missing local root"),
        }
    }

    #[test]
    fn test_scan_root_that_is_a_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("file.txt");
        fs::write(&file_path, "content").unwrap();

        let result = TransferPlan::scan(&config_for(&file_path));
        assert!(result.is_err());
    }

    #[test]
    fn test_scan_records_file_size() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("sized.bin"), vec![0u8; 1024]).unwrap();

        let plan = TransferPlan::scan(&config_for(temp_dir.path())).unwrap();

        assert_eq!(plan.units()[0].size, 1024);
    }
}
