use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const BIN_NAME: &str = "salesbook";

/// An isolated data directory and config file for one test.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    pub fn slot(&self, name: &str) -> PathBuf {
        self.data_dir().join(format!("{name}.json"))
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.json")
    }

    /// Runs the binary with the given arguments against this environment.
    pub fn command<I, S>(&self, args: I) -> Command
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
        cmd.arg("--no-color")
            .arg("--data-dir")
            .arg(self.data_dir())
            .arg("--config")
            .arg(self.config_path())
            .args(args);
        cmd
    }
}

pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).expect("read file")
}
