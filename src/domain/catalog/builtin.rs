//! Compiled-in question templates for every category.

use std::sync::Arc;

use once_cell::sync::Lazy;

use super::{Category, Question, Template, TemplateCatalog, Weight};
use crate::domain::foundation::QuestionId;

/// Built-in catalog, validated on first use.
pub(super) static BUILTIN_CATALOG: Lazy<Arc<TemplateCatalog>> = Lazy::new(|| {
    let catalog = TemplateCatalog::new(
        Category::Stomach,
        vec![stomach(), headache(), fever(), cough()],
    )
    .expect("built-in templates satisfy catalog invariants");
    Arc::new(catalog)
});

fn id(id: &'static str) -> QuestionId {
    QuestionId::from_static(id)
}

fn yes_no(qid: &'static str, prompt: &str, weight: Weight) -> Question {
    Question::yes_no(id(qid), prompt, weight)
}

fn choice(qid: &'static str, prompt: &str, options: &[&str], weight: Weight) -> Question {
    Question::choice(id(qid), prompt, options, weight)
}

fn stomach() -> Template {
    Template::new(
        Category::Stomach,
        vec![
            yes_no("hydration", "Did you drink enough water today (at least 6-8 glasses)?", Weight::High),
            yes_no("recent_meal", "Did you eat anything unusual or outside food in the last 24 hours?", Weight::High),
            choice(
                "pain_location",
                "Is the pain in your upper abdomen or lower abdomen?",
                &["Upper abdomen", "Lower abdomen", "All over", "Around belly button"],
                Weight::High,
            ),
            choice(
                "pain_type",
                "How would you describe the pain?",
                &["Sharp/Stabbing", "Dull/Aching", "Cramping", "Burning"],
                Weight::Medium,
            ),
            yes_no("nausea", "Are you experiencing nausea or have you vomited?", Weight::High),
            yes_no("bowel_movement", "Have you had normal bowel movements today?", Weight::Medium),
            yes_no("fever", "Do you have a fever or feel feverish?", Weight::High),
            yes_no("exercise", "Were you involved in any strenuous exercise in the last couple of days?", Weight::Low),
            yes_no("stress", "Have you been under unusual stress lately?", Weight::Medium),
            yes_no("medication", "Have you taken any medication for this pain?", Weight::Medium),
            choice(
                "duration",
                "How long have you been experiencing this pain?",
                &["Less than 1 hour", "1-3 hours", "3-6 hours", "More than 6 hours"],
                Weight::High,
            ),
            Question::scale(
                id("severity"),
                "On a scale of 1-10, how severe is your pain?",
                &["1-3 (Mild)", "4-6 (Moderate)", "7-9 (Severe)", "10 (Unbearable)"],
                Weight::High,
            ),
        ],
    )
    .with_follow_ups(
        id("nausea"),
        "yes",
        vec![choice(
            "vomit_frequency",
            "How many times have you vomited?",
            &["Once", "2-3 times", "More than 3 times", "Just nauseous, no vomiting"],
            Weight::High,
        )],
    )
    .with_follow_ups(
        id("recent_meal"),
        "yes",
        vec![choice(
            "food_type",
            "What type of food did you eat?",
            &["Street food", "Restaurant food", "Home-cooked but unusual", "Dairy products"],
            Weight::Medium,
        )],
    )
}

fn headache() -> Template {
    Template::new(
        Category::Headache,
        vec![
            choice(
                "location",
                "Where exactly is your headache located?",
                &["Forehead", "Temples", "Back of head", "One side only", "Entire head"],
                Weight::High,
            ),
            choice(
                "pain_type",
                "How would you describe the pain?",
                &["Throbbing/Pulsating", "Constant pressure", "Sharp/Stabbing", "Dull ache"],
                Weight::High,
            ),
            choice(
                "triggers",
                "Did anything specific trigger this headache?",
                &["Stress", "Lack of sleep", "Bright lights", "Loud noise", "Not sure"],
                Weight::Medium,
            ),
            yes_no("light_sensitivity", "Are you sensitive to light right now?", Weight::High),
            yes_no("sound_sensitivity", "Are you sensitive to sound right now?", Weight::High),
            yes_no("nausea", "Do you feel nauseous?", Weight::High),
            yes_no("vision", "Are you experiencing any vision changes (blurriness, spots, auras)?", Weight::High),
            choice(
                "frequency",
                "How often do you get headaches?",
                &["Rarely", "Once a month", "Weekly", "Daily"],
                Weight::Medium,
            ),
            yes_no("hydration", "Have you been drinking enough water today?", Weight::Medium),
            choice(
                "sleep",
                "How many hours did you sleep last night?",
                &["Less than 4", "4-6 hours", "6-8 hours", "More than 8"],
                Weight::Medium,
            ),
            yes_no("screen_time", "Have you been looking at screens for extended periods today?", Weight::Low),
            yes_no("medication", "Have you taken any pain medication?", Weight::Medium),
        ],
    )
    .with_follow_ups(
        id("medication"),
        "yes",
        vec![choice(
            "med_effect",
            "Did the medication help?",
            &["Yes, completely", "Partially", "Not at all", "Made it worse"],
            Weight::High,
        )],
    )
}

fn fever() -> Template {
    Template::new(
        Category::Fever,
        vec![
            choice(
                "temperature",
                "What is your current temperature?",
                &["98-99°F", "100-101°F", "102-103°F", "Above 103°F", "Don't know"],
                Weight::High,
            ),
            choice(
                "duration",
                "How long have you had this fever?",
                &["Just started", "Few hours", "1 day", "2-3 days", "More than 3 days"],
                Weight::High,
            ),
            yes_no("chills", "Are you experiencing chills or shivering?", Weight::High),
            yes_no("sweating", "Are you sweating excessively?", Weight::Medium),
            yes_no("body_ache", "Do you have body aches or muscle pain?", Weight::High),
            yes_no("throat", "Do you have a sore throat?", Weight::High),
            yes_no("cough", "Do you have a cough?", Weight::High),
            yes_no("appetite", "Have you lost your appetite?", Weight::Medium),
            yes_no("fatigue", "Are you feeling unusually tired or weak?", Weight::High),
            yes_no("exposure", "Have you been exposed to anyone who was sick recently?", Weight::Medium),
        ],
    )
    .with_follow_ups(
        id("cough"),
        "yes",
        vec![choice(
            "cough_type",
            "Is your cough dry or producing phlegm?",
            &["Dry cough", "With phlegm", "Both"],
            Weight::High,
        )],
    )
}

fn cough() -> Template {
    Template::new(
        Category::Cough,
        vec![
            choice(
                "cough_type",
                "Is your cough dry or producing phlegm/mucus?",
                &["Dry cough", "With clear phlegm", "With colored phlegm", "With blood"],
                Weight::High,
            ),
            choice(
                "duration",
                "How long have you been coughing?",
                &["Just started", "2-3 days", "1 week", "2 weeks", "More than 2 weeks"],
                Weight::High,
            ),
            choice(
                "frequency",
                "How often are you coughing?",
                &["Occasionally", "Frequently", "Constant", "Only at night", "Only in morning"],
                Weight::Medium,
            ),
            yes_no("chest_pain", "Do you have chest pain when coughing?", Weight::High),
            yes_no("breathing", "Are you experiencing shortness of breath?", Weight::High),
            yes_no("wheezing", "Do you hear wheezing when breathing?", Weight::High),
            yes_no("fever", "Do you have a fever?", Weight::High),
            yes_no("smoking", "Do you smoke or have you been exposed to smoke?", Weight::Medium),
            yes_no("allergies", "Do you have known allergies?", Weight::Medium),
            yes_no("environment", "Have you been exposed to dust, chemicals, or irritants?", Weight::Medium),
        ],
    )
}
