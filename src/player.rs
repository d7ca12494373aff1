use std::fmt;

use crate::error::NameError;

/// A validated player name: trimmed, non-empty, ASCII letters and digits.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PlayerName(String);

impl PlayerName {
    /// Trims `raw` and checks it is one or more ASCII alphanumerics.
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(NameError::Empty);
        }

        if let Some(bad) = trimmed.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(NameError::InvalidCharacter(bad));
        }

        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
