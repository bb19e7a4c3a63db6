use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Settings page toggles. Held by the page for the visit only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub data_sharing: bool,
    pub notifications: bool,
    pub dark_mode: bool,
    pub wearable_sync: bool,
    pub professional_help: bool,
    pub emergency_contact: bool,
    pub data_retention: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            data_sharing: false,
            notifications: true,
            dark_mode: false,
            wearable_sync: false,
            professional_help: true,
            emergency_contact: true,
            data_retention: "1year".into(),
        }
    }
}

impl Preferences {
    fn toggle_mut(&mut self, name: &str) -> Option<&mut bool> {
        match name {
            "dataSharing" => Some(&mut self.data_sharing),
            "notifications" => Some(&mut self.notifications),
            "darkMode" => Some(&mut self.dark_mode),
            "wearableSync" => Some(&mut self.wearable_sync),
            "professionalHelp" => Some(&mut self.professional_help),
            "emergencyContact" => Some(&mut self.emergency_contact),
            _ => None,
        }
    }

    /// Sets the toggle named `name` (camelCase, as serialized) and returns
    /// the confirmation shown to the user.
    pub fn set_toggle(&mut self, name: &str, enabled: bool) -> Result<String> {
        let Some(slot) = self.toggle_mut(name) else {
            bail!("unknown preference '{name}'");
        };
        *slot = enabled;

        let state = if enabled { "enabled" } else { "disabled" };
        Ok(format!("{} has been {state}.", spaced_lowercase(name)))
    }
}

/// "darkMode" -> "dark mode"
fn spaced_lowercase(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_updates_field_and_describes_change() {
        let mut prefs = Preferences::default();

        let notice = prefs.set_toggle("darkMode", true).unwrap();
        assert!(prefs.dark_mode);
        assert_eq!(notice, "dark mode has been enabled.");

        let notice = prefs.set_toggle("notifications", false).unwrap();
        assert!(!prefs.notifications);
        assert_eq!(notice, "notifications has been disabled.");
    }

    #[test]
    fn unknown_toggle_is_rejected() {
        let mut prefs = Preferences::default();
        assert!(prefs.set_toggle("dataRetention", true).is_err());
        assert_eq!(prefs, Preferences::default());
    }
}
