//! Helpers for running the muhlog binary against scratch logs.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// A scratch directory holding log and config files for one test.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Write `contents` to `name` inside the workspace.
    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> anyhow::Result<PathBuf> {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Run muhlog with `args` from inside the workspace, so only a
    /// `muhlog.toml` written by the test is picked up.
    pub fn run(&self, args: &[&str]) -> anyhow::Result<Output> {
        let output = Command::new(env!("CARGO_BIN_EXE_muhlog"))
            .args(args)
            .current_dir(self.path())
            .env_remove("RUST_LOG")
            .output()?;
        Ok(output)
    }
}

/// Value printed for `kind` in the report, if present.
pub fn count(stdout: &[u8], kind: &str) -> Option<usize> {
    let stdout = String::from_utf8_lossy(stdout);
    stdout.lines().find_map(|line| {
        let (name, value) = line.split_once(": ")?;
        (name == kind).then(|| value.trim().parse().ok()).flatten()
    })
}
