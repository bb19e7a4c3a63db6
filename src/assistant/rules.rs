//! Topic rules for the wellness assistant.
//!
//! Each rule is an unanchored, case-insensitive pattern plus one piece of
//! advice. Rules are evaluated top to bottom and every rule that matches
//! contributes its advice, so the order of [`RULE_SPECS`] is the order of
//! sentences in a reply. Do not reorder.

use std::sync::LazyLock;

use regex::Regex;

pub struct Rule {
    pub topic: &'static str,
    pattern: Regex,
    pub advice: &'static str,
}

impl Rule {
    pub fn matches(&self, input: &str) -> bool {
        self.pattern.is_match(input)
    }
}

/// (topic, pattern, advice)
const RULE_SPECS: &[(&str, &str, &str)] = &[
    (
        "stress",
        "stress|anxious|anxiety",
        "Try deep breathing, journaling, or a quick walk outside to lower stress.",
    ),
    (
        "sleep",
        "sleep|insomnia|tired",
        "Stick to a regular sleep schedule and wind down with relaxing activities before bed.",
    ),
    (
        "diet",
        "diet|food|nutrition|eat",
        "Fuel your body with balanced meals: veggies, fruits, protein, and stay hydrated!",
    ),
    (
        "exercise",
        "exercise|workout|activity|fitness",
        "A daily walk or short workout can lift your mood and energy.",
    ),
    (
        "low_mood",
        "sad|depressed|down|unhappy",
        "It's okay to feel low sometimes. Reach out to a trusted friend or professional if needed.",
    ),
    (
        "burnout",
        "burnout|exhausted|overwork",
        "Take regular breaks, set boundaries, and rest when needed to prevent burnout.",
    ),
    (
        "motivation",
        "motivation|lazy|procrastinate",
        "Break tasks into small steps and reward yourself for progress!",
    ),
    (
        "hydration",
        "hydration|water|drink",
        "Drink enough water — aim for 6–8 glasses daily!",
    ),
    (
        "headache",
        "headache|migraine",
        "Rest your eyes, stay hydrated, and manage stress to ease headaches.",
    ),
    (
        "screen_time",
        "screen|blue light",
        "Take screen breaks every 20 minutes to protect your eyes and mind.",
    ),
    (
        "loneliness",
        "lonely|alone",
        "Connect with a friend or family member. Even a short chat helps.",
    ),
    (
        "mindfulness",
        "mindful|meditation|breathe",
        "Try a 5-minute mindfulness exercise to calm your mind.",
    ),
    (
        "focus",
        "focus|concentrate",
        "Work in short bursts, remove distractions, and take regular breaks to stay sharp.",
    ),
    (
        "panic",
        "panic|overwhelm",
        "Pause, breathe slowly, and remind yourself that this feeling will pass.",
    ),
    (
        "gratitude",
        "gratitude|thankful",
        "Try writing down 3 things you're grateful for today.",
    ),
    (
        "productivity",
        "productivity|work",
        "Prioritize important tasks and give yourself breaks to stay productive.",
    ),
    (
        "overthinking",
        "overthink|worry",
        "Try grounding techniques: name things you see, hear, feel — it can help calm overthinking.",
    ),
    (
        "relationships",
        "relationship|friend|family",
        "Healthy communication is key. Express how you feel calmly and honestly.",
    ),
    (
        "self_care",
        "self-care|pamper",
        "Take time for yourself: read, rest, or do something you enjoy.",
    ),
    (
        "anger",
        "anger|angry",
        "Pause and breathe deeply. Step away and return when you feel calmer.",
    ),
];

/// Compiled once; patterns are literals, so compilation cannot fail.
pub static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    RULE_SPECS
        .iter()
        .map(|&(topic, pattern, advice)| Rule {
            topic,
            pattern: Regex::new(&format!("(?i){pattern}")).unwrap(),
            advice,
        })
        .collect()
});
