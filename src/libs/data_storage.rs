use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "artikel";

/// Overrides the platform data directory when set.
pub const DATA_DIR_VAR: &str = "ARTIKEL_DATA_DIR";

/// Resolves files inside the application-data directory.
#[derive(Clone, Debug)]
pub struct DataStorage {
    root: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        match env::var_os(DATA_DIR_VAR).filter(|dir| !dir.is_empty()) {
            Some(dir) => Self::at(dir),
            None => Self::at(platform_data_dir().join(APP_NAME)),
        }
    }

    /// Storage rooted at an explicit directory instead of the platform default.
    pub fn at<P: AsRef<Path>>(root: P) -> Self {
        DataStorage {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.root
    }

    /// Path of `file_name`, creating the directory on first use.
    pub fn get_path(&self, file_name: &str) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.root)?;
        Ok(self.root.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn platform_data_dir() -> PathBuf {
    let home = || env::var_os("HOME").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    if cfg!(target_os = "windows") {
        env::var_os("LOCALAPPDATA").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."))
    } else if cfg!(target_os = "macos") {
        home().join("Library").join("Application Support")
    } else {
        home().join(".local").join("share")
    }
}
