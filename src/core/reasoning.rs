use crate::domain::model::Profile;

pub const GENERIC_REASON: &str = "Excellent match based on your profile";

const EXPERIENCE_AUDIENCES: &[(&str, &str)] = &[
    ("beginner", "complete beginners"),
    ("basic", "learners with foundational knowledge"),
    ("intermediate", "professionals with practical experience"),
    ("advanced", "experienced professionals"),
];
const EXPERIENCE_FALLBACK: &str = "your experience level";

const GOAL_AUDIENCES: &[(&str, &str)] = &[
    ("career change", "career changers with placement support"),
    ("skill upgrade", "professionals upgrading skills"),
    ("personal interest", "learners exploring new fields"),
    ("career advancement", "professionals aiming for growth"),
];
const GOAL_FALLBACK: &str = "your learning goals";

fn lookup(table: &[(&str, &'static str)], key: &str, fallback: &'static str) -> &'static str {
    let key = key.trim().to_lowercase();
    table
        .iter()
        .find(|(phrase, _)| *phrase == key)
        .map(|(_, audience)| *audience)
        .unwrap_or(fallback)
}

/// One sentence per confidently specified field, in interest / role / experience / goal order.
pub fn explain(profile: &Profile) -> Vec<String> {
    let mut reasons = Vec::new();

    if let Some(interest) = profile.confident_interest() {
        reasons.push(format!("Matches your interest in {}", interest));
    }

    if let Some(role) = profile.confident_role() {
        reasons.push(format!("Aligns with your goal to become a {}", role));
    }

    if let Some(experience) = profile.experience() {
        reasons.push(format!(
            "Designed for {}",
            lookup(EXPERIENCE_AUDIENCES, experience, EXPERIENCE_FALLBACK)
        ));
    }

    if let Some(goal) = profile.goal() {
        reasons.push(format!(
            "Perfect for {}",
            lookup(GOAL_AUDIENCES, goal, GOAL_FALLBACK)
        ));
    }

    if reasons.is_empty() {
        reasons.push(GENERIC_REASON.to_string());
    }

    reasons
}
