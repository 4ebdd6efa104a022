use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with a customizable on-disk state.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_panel_config(r#"{ "123": 456 }"#)
///     .build()?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// Raw panel config contents to seed, `None` leaves the file absent.
    panel_config: Option<String>,
}

impl TestBuilder {
    /// Creates a new test builder that leaves the panel config file absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the panel config file with the given raw contents.
    ///
    /// # Arguments
    /// - `contents` - Raw file contents, written verbatim (may be invalid JSON)
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_panel_config(mut self, contents: &str) -> Self {
        self.panel_config = Some(contents.to_string());
        self
    }

    /// Builds the test context, creating the directory and seeded files.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context
    /// - `Err(TestError::Io)` - Failed to create the directory or write the file
    pub fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        if let Some(contents) = self.panel_config {
            context.write_panel_config(&contents)?;
        }

        Ok(context)
    }
}
