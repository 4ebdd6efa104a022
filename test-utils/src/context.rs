use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::error::TestError;

/// File name used for the panel config inside the temporary directory.
pub const PANEL_CONFIG_FILE: &str = "panel_config.json";

/// Test context owning an isolated temporary directory.
///
/// The directory, and any panel config file written into it, is removed when the
/// context is dropped, so every test works against its own copy of the on-disk state.
pub struct TestContext {
    /// Temporary directory kept alive for the lifetime of the context.
    dir: TempDir,
}

impl TestContext {
    /// Creates a new test context with an empty temporary directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with a fresh directory
    /// - `Err(TestError::Io)` - The temporary directory could not be created
    pub fn new() -> Result<Self, TestError> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Path of the panel config file inside the temporary directory.
    ///
    /// The file only exists if it was seeded through the builder or written by the code
    /// under test.
    pub fn panel_config_path(&self) -> PathBuf {
        self.dir.path().join(PANEL_CONFIG_FILE)
    }

    /// Root of the temporary directory.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Writes raw contents to the panel config file.
    ///
    /// Typically called by `TestBuilder::build()` rather than directly. Contents are
    /// written verbatim so tests can also seed corrupt files.
    ///
    /// # Arguments
    /// - `contents` - Raw file contents
    pub fn write_panel_config(&self, contents: &str) -> Result<(), TestError> {
        std::fs::write(self.panel_config_path(), contents)?;
        Ok(())
    }

    /// Reads the panel config file back as a JSON value.
    ///
    /// # Panics
    /// - If the file is missing or is not valid JSON
    pub fn read_panel_config(&self) -> serde_json::Value {
        let raw = std::fs::read_to_string(self.panel_config_path())
            .expect("Failed to read panel config file");
        serde_json::from_str(&raw).expect("Panel config file is not valid JSON")
    }
}
