use crate::core::classifier::Category;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoveryTarget {
    Interest(Category),
    ShowAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiscoveryOption {
    pub label: &'static str,
    pub target: DiscoveryTarget,
}

impl DiscoveryOption {
    /// Value to store as the profile interest when this option is picked.
    pub fn interest_value(&self) -> Option<&'static str> {
        match self.target {
            DiscoveryTarget::Interest(category) => Some(category.interest_label()),
            DiscoveryTarget::ShowAll => None,
        }
    }
}

const fn option(label: &'static str, category: Category) -> DiscoveryOption {
    DiscoveryOption {
        label,
        target: DiscoveryTarget::Interest(category),
    }
}

static ADVANCED_MENU: [DiscoveryOption; 5] = [
    option("Building intelligent AI systems", Category::AiMl),
    option("Analyzing data for insights", Category::DataScience),
    option("Creating modern web applications", Category::FullStack),
    option("Securing systems from threats", Category::Cybersecurity),
    option("Ensuring software quality", Category::Testing),
];

static DEFAULT_MENU: [DiscoveryOption; 5] = [
    option("Numbers, data, and patterns", Category::DataScience),
    option("Building websites and apps", Category::FullStack),
    option("Artificial Intelligence", Category::AiMl),
    option("Security and protection", Category::Cybersecurity),
    DiscoveryOption {
        label: "Show me all options",
        target: DiscoveryTarget::ShowAll,
    },
];

pub fn is_advanced(experience: Option<&str>) -> bool {
    experience.is_some_and(|level| level.trim().eq_ignore_ascii_case("advanced"))
}

/// Clarifying menu offered when the discovery gate is open.
pub fn menu(experience: Option<&str>) -> &'static [DiscoveryOption] {
    if is_advanced(experience) {
        &ADVANCED_MENU
    } else {
        &DEFAULT_MENU
    }
}
