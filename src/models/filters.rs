use serde::{Deserialize, Serialize};

/// Attribute filter applied by `ProfileStore::filter`.
///
/// Every field is optional; an absent or empty field imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Exact skill names, OR-matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    /// Case-insensitive substring of the address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Case-insensitive substring of the experience text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
}

impl FilterCriteria {
    /// Skills constraint, or `None` when absent or empty.
    pub fn skills(&self) -> Option<&[String]> {
        self.skills.as_deref().filter(|s| !s.is_empty())
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref().filter(|s| !s.is_empty())
    }

    pub fn experience(&self) -> Option<&str> {
        self.experience.as_deref().filter(|s| !s.is_empty())
    }

    /// True when no predicate is supplied.
    pub fn is_empty(&self) -> bool {
        self.skills().is_none() && self.location().is_none() && self.experience().is_none()
    }
}
