//! Daily check-in submission.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::{
    log_info,
    models::CheckinForm,
    store::{keys, SessionStore},
};

const ENABLE_LOGS: bool = true;

/// What a submission left in the store for the overview page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinReceipt {
    pub sleep_hours: f64,
    pub feedback: Option<String>,
}

/// Validates `form` and writes the values the overview page reads back.
///
/// Sleep is always stored. Notes are stored trimmed, and only when they
/// contain something; a blank note leaves any earlier undismissed note
/// in place.
pub fn submit(store: &SessionStore, form: &CheckinForm) -> Result<CheckinReceipt> {
    form.validate().context("check-in form rejected")?;

    let feedback = form.trimmed_notes().map(str::to_owned);
    if let Some(note) = &feedback {
        store.set_text(keys::DASHBOARD_FEEDBACK, note);
    }
    store.set(keys::DASHBOARD_SLEEP, &form.sleep);

    log_info!(
        "Daily check-in saved (sleep {}h, note {})",
        form.sleep,
        if feedback.is_some() { "kept" } else { "none" }
    );

    Ok(CheckinReceipt {
        sleep_hours: form.sleep,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_sleep_and_trimmed_note() {
        let store = SessionStore::in_memory();
        let form = CheckinForm {
            sleep: 8.5,
            notes: "  Felt tired  ".into(),
            ..CheckinForm::default()
        };

        let receipt = submit(&store, &form).unwrap();

        assert_eq!(receipt.feedback.as_deref(), Some("Felt tired"));
        assert_eq!(
            store.get_text(keys::DASHBOARD_FEEDBACK).as_deref(),
            Some("Felt tired")
        );
        assert_eq!(store.get::<Option<f64>>(keys::DASHBOARD_SLEEP, None), Some(8.5));
    }

    #[test]
    fn blank_note_keeps_previous_feedback() {
        let store = SessionStore::in_memory();
        store.set_text(keys::DASHBOARD_FEEDBACK, "Earlier note");

        let receipt = submit(&store, &CheckinForm::default()).unwrap();

        assert!(receipt.feedback.is_none());
        assert_eq!(
            store.get_text(keys::DASHBOARD_FEEDBACK).as_deref(),
            Some("Earlier note")
        );
    }

    #[test]
    fn invalid_form_writes_nothing() {
        let store = SessionStore::in_memory();
        let form = CheckinForm {
            sleep: 0.0,
            notes: "should not be stored".into(),
            ..CheckinForm::default()
        };

        assert!(submit(&store, &form).is_err());
        assert!(store.get_text(keys::DASHBOARD_FEEDBACK).is_none());
        assert!(store.get_text(keys::DASHBOARD_SLEEP).is_none());
    }
}
