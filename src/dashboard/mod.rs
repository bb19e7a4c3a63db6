//! Overview page state, hydrated from the session store on every visit.

mod reports;

pub use reports::ReportShelf;

use chrono::{DateTime, Local, Timelike};
use serde::Serialize;

use crate::{
    models::UserProfile,
    store::{keys, SessionStore},
};

const SLEEP_PLACEHOLDER: &str = "7.5h";
const FALLBACK_FIRST_NAME: &str = "John";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub profile: UserProfile,
    pub sleep_hours: Option<f64>,
    /// Undismissed check-in note; empty when there is none.
    pub feedback: String,
}

impl Overview {
    pub fn load(store: &SessionStore) -> Self {
        Self {
            profile: store.get_or_default(keys::USER),
            sleep_hours: store.get(keys::DASHBOARD_SLEEP, None),
            feedback: store.get_text(keys::DASHBOARD_FEEDBACK).unwrap_or_default(),
        }
    }

    pub fn has_feedback(&self) -> bool {
        !self.feedback.is_empty()
    }

    /// "Sleep last night" tile: "8h", "6.5h", or the placeholder.
    pub fn sleep_label(&self) -> String {
        match self.sleep_hours {
            Some(hours) => format!("{hours}h"),
            None => SLEEP_PLACEHOLDER.to_string(),
        }
    }

    /// Greeting for the given local hour (0–23).
    pub fn greeting(&self, hour: u32) -> String {
        let name = if self.profile.first_name.is_empty() {
            FALLBACK_FIRST_NAME
        } else {
            self.profile.first_name.as_str()
        };

        match hour {
            0..=11 => format!("Good morning, {name}!"),
            12..=17 => format!("Good afternoon, {name}!"),
            _ => format!("Good evening, {name}!"),
        }
    }

    pub fn greeting_at(&self, now: DateTime<Local>) -> String {
        self.greeting(now.hour())
    }

    /// Hides the note here and removes it from the store, so the next
    /// visit does not show it again.
    pub fn dismiss_feedback(&mut self, store: &SessionStore) {
        self.feedback.clear();
        dismiss_feedback(store);
    }
}

pub fn dismiss_feedback(store: &SessionStore) {
    store.remove(keys::DASHBOARD_FEEDBACK);
}
