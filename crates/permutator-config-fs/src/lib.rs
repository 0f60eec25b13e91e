// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! On-disk settings for the `permutator` binary.
//!
//! Each key becomes `<key>.json` in one directory: the platform config dir
//! by default, or any directory the caller names (`--config-dir`).

use directories::ProjectDirs;
use permutator_app_core::config::{ConfigError, ConfigStore};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory of JSON settings files.
#[derive(Debug, Clone)]
pub struct FsConfigStore {
    dir: PathBuf,
}

impl FsConfigStore {
    /// Store under the platform config dir, e.g. `~/.config/permutator` on Linux.
    pub fn new() -> Result<Self, ConfigError> {
        let dirs = ProjectDirs::from("dev", "flyingrobots", "Permutator")
            .ok_or_else(|| ConfigError::Other("no home directory to keep settings in".into()))?;
        Self::at(dirs.config_dir())
    }

    /// Store under `dir`, creating it when missing.
    pub fn at(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Directory the settings files live in.
    pub fn base(&self) -> &Path {
        &self.dir
    }

    fn file_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl ConfigStore for FsConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        fs::read(self.file_for(key)).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => ConfigError::NotFound,
            _ => ConfigError::Io(err),
        })
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        // The directory may have been removed since `at`.
        fs::create_dir_all(&self.dir)?;
        fs::write(self.file_for(key), data)?;
        Ok(())
    }
}
