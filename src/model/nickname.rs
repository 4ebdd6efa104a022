//! The nickname prefix toggled by the wait panel.

/// Fixed string prepended to a member's nickname while wait mode is active.
///
/// The prefix is never empty; `Config` rejects an empty value before one is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NicknamePrefix(String);

impl NicknamePrefix {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self(prefix.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Removes every leading occurrence of the prefix.
    ///
    /// `"WAIT_WAIT_Bob"` becomes `"Bob"`, so earlier double application never survives
    /// a toggle.
    pub fn strip_all<'a>(&self, name: &'a str) -> &'a str {
        if self.0.is_empty() {
            return name;
        }

        let mut rest = name;
        while let Some(stripped) = rest.strip_prefix(self.0.as_str()) {
            rest = stripped;
        }
        rest
    }

    /// Returns the name carrying exactly one leading prefix.
    pub fn apply(&self, name: &str) -> String {
        format!("{}{}", self.0, self.strip_all(name))
    }

    /// Whether the name currently starts with the prefix.
    pub fn is_applied(&self, name: &str) -> bool {
        !self.0.is_empty() && name.starts_with(self.0.as_str())
    }
}
