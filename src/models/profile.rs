use serde::{Deserialize, Serialize};

const FALLBACK_FIRST_INITIAL: char = 'J';
const FALLBACK_LAST_INITIAL: char = 'D';

/// Account holder shown in the sidebar, greeting and settings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john.doe@example.com".into(),
        }
    }
}

impl UserProfile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Avatar initials, e.g. "JD".
    pub fn initials(&self) -> String {
        let first = self
            .first_name
            .chars()
            .next()
            .unwrap_or(FALLBACK_FIRST_INITIAL);
        let last = self
            .last_name
            .chars()
            .next()
            .unwrap_or(FALLBACK_LAST_INITIAL);
        format!("{first}{last}")
    }
}
