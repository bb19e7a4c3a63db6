//! Daily check-in form.
//!
//! Slider fields carry the same ranges as the check-in page: sleep 1 to 12
//! hours in half-hour steps, everything else 1 to 10.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

const MIN_SLEEP_HOURS: f64 = 1.0;
const MAX_SLEEP_HOURS: f64 = 12.0;
const MIN_SCALE: u8 = 1;
const MAX_SCALE: u8 = 10;

const MOOD_EMOJIS: [&str; 10] = ["😢", "😟", "😐", "🙂", "😊", "😄", "🤩", "🥳", "🌟", "✨"];
const NEUTRAL_EMOJI: &str = "😐";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinForm {
    pub sleep: f64,
    pub mood: u8,
    pub stress: u8,
    pub energy: u8,
    pub social_interactions: u8,
    pub work_hours: String,
    pub exercise: String,
    pub notes: String,
}

impl Default for CheckinForm {
    fn default() -> Self {
        Self {
            sleep: 7.0,
            mood: 5,
            stress: 3,
            energy: 6,
            social_interactions: 3,
            work_hours: String::new(),
            exercise: String::new(),
            notes: String::new(),
        }
    }
}

impl CheckinForm {
    pub fn validate(&self) -> Result<()> {
        if !self.sleep.is_finite() || self.sleep < MIN_SLEEP_HOURS || self.sleep > MAX_SLEEP_HOURS
        {
            bail!("Invalid sleep hours. Must be between 1 and 12");
        }
        if (self.sleep * 2.0).fract() != 0.0 {
            bail!("Invalid sleep hours. Must be in half-hour steps");
        }

        validate_scale("mood", self.mood)?;
        validate_scale("stress", self.stress)?;
        validate_scale("energy", self.energy)?;
        validate_scale("social interactions", self.social_interactions)?;

        Ok(())
    }

    /// Trimmed notes, or `None` when there is nothing to keep.
    pub fn trimmed_notes(&self) -> Option<&str> {
        let notes = self.notes.trim();
        (!notes.is_empty()).then_some(notes)
    }
}

fn validate_scale(field: &str, value: u8) -> Result<()> {
    if !(MIN_SCALE..=MAX_SCALE).contains(&value) {
        bail!("Invalid {field} value {value}. Must be between 1 and 10");
    }
    Ok(())
}

/// Emoji for a 1–10 mood rating.
pub fn mood_emoji(value: u8) -> &'static str {
    match value {
        1..=10 => MOOD_EMOJIS[usize::from(value - 1)],
        _ => NEUTRAL_EMOJI,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StressBand {
    Low,
    Moderate,
    High,
}

impl StressBand {
    pub fn from_level(level: u8) -> Self {
        match level {
            0..=3 => StressBand::Low,
            4..=6 => StressBand::Moderate,
            _ => StressBand::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StressBand::Low => "low",
            StressBand::Moderate => "moderate",
            StressBand::High => "high",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_is_valid() {
        CheckinForm::default().validate().unwrap();
    }

    #[test]
    fn rejects_out_of_range_values() {
        let too_much_sleep = CheckinForm {
            sleep: 12.5,
            ..CheckinForm::default()
        };
        assert!(too_much_sleep.validate().is_err());

        let odd_step = CheckinForm {
            sleep: 7.25,
            ..CheckinForm::default()
        };
        assert!(odd_step.validate().is_err());

        let zero_mood = CheckinForm {
            mood: 0,
            ..CheckinForm::default()
        };
        let err = zero_mood.validate().unwrap_err();
        assert!(err.to_string().contains("mood"));

        let stress = CheckinForm {
            stress: 11,
            ..CheckinForm::default()
        };
        assert!(stress.validate().is_err());
    }

    #[test]
    fn trimmed_notes_ignores_whitespace() {
        let blank = CheckinForm {
            notes: "   \n".into(),
            ..CheckinForm::default()
        };
        assert_eq!(blank.trimmed_notes(), None);

        let padded = CheckinForm {
            notes: "  Felt tired \n".into(),
            ..CheckinForm::default()
        };
        assert_eq!(padded.trimmed_notes(), Some("Felt tired"));
    }

    #[test]
    fn mood_emoji_covers_scale() {
        assert_eq!(mood_emoji(1), "😢");
        assert_eq!(mood_emoji(5), "😊");
        assert_eq!(mood_emoji(10), "✨");
        assert_eq!(mood_emoji(0), "😐");
        assert_eq!(mood_emoji(42), "😐");
    }

    #[test]
    fn stress_bands() {
        assert_eq!(StressBand::from_level(3), StressBand::Low);
        assert_eq!(StressBand::from_level(4), StressBand::Moderate);
        assert_eq!(StressBand::from_level(6), StressBand::Moderate);
        assert_eq!(StressBand::from_level(7), StressBand::High);
    }
}
