use std::fmt::{self, Display, Formatter};

/// A string that grows by one character each time it is asked to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scream(String);

impl Default for Scream {
    fn default() -> Self {
        Self("A".to_string())
    }
}

impl Scream {
    /// Appends one more "a".
    pub fn scream_more(&mut self) {
        self.0.push('a');
        tracing::debug!(len = self.0.len(), "scream grew");
    }

    /// Returns the current scream.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Scream {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
