use crate::shared::error::InventoryError;
use crate::shared::Result;

/// Minimum length of a GCP project id
const MIN_PROJECT_ID_LENGTH: usize = 6;

/// Maximum length of a GCP project id
const MAX_PROJECT_ID_LENGTH: usize = 30;

/// NewType wrapper for the GCP project id under inventory
///
/// A valid project id starts with a lowercase letter, contains only
/// lowercase letters, digits and hyphens, is 6 to 30 characters long and
/// ends with a letter or digit. Every external command and every cache path
/// is built from this value, so nothing else is allowed through.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectScope(String);

impl ProjectScope {
    pub fn new(project_id: impl Into<String>) -> Result<Self> {
        let project_id = project_id.into();

        if let Some(reason) = Self::violation(&project_id) {
            return Err(InventoryError::InvalidScope {
                scope: project_id,
                reason,
            }
            .into());
        }

        Ok(Self(project_id))
    }

    /// Returns the first rule the candidate breaks, if any
    fn violation(candidate: &str) -> Option<String> {
        let length = candidate.chars().count();
        if !(MIN_PROJECT_ID_LENGTH..=MAX_PROJECT_ID_LENGTH).contains(&length) {
            return Some(format!(
                "must be between {} and {} characters long (got {})",
                MIN_PROJECT_ID_LENGTH, MAX_PROJECT_ID_LENGTH, length
            ));
        }

        let first = candidate.chars().next()?;
        if !first.is_ascii_lowercase() {
            return Some("must start with a lowercase letter".to_string());
        }

        if let Some(bad) = candidate
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Some(format!("contains invalid character '{}'", bad));
        }

        if candidate.ends_with('-') {
            return Some("must end with a lowercase letter or digit".to_string());
        }

        None
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProjectScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
