use anyhow::Result;

use crate::{
    log_info,
    models::{Preferences, UserProfile},
    store::{keys, SessionStore},
};

const ENABLE_LOGS: bool = true;

/// Settings page: read-only profile, visit-scoped toggles, and logout.
pub struct SettingsPage {
    store: SessionStore,
    profile: UserProfile,
    preferences: Preferences,
}

impl SettingsPage {
    pub fn load(store: SessionStore) -> Self {
        let profile = store.get_or_default(keys::USER);
        Self {
            store,
            profile,
            preferences: Preferences::default(),
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Flips a toggle and returns the confirmation text.
    pub fn toggle(&mut self, name: &str, enabled: bool) -> Result<String> {
        self.preferences.set_toggle(name, enabled)
    }

    /// Wipes every stored key. Later page loads see defaults only.
    pub fn logout(self) {
        self.store.clear();
        log_info!("Logged out, session store cleared");
    }
}
