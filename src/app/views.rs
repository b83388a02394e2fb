use crate::core::advisor::{CourseMatch, Recommendation};
use crate::core::catalog::Catalog;
use crate::core::discovery::{is_advanced, DiscoveryOption};
use crate::domain::model::{Course, MatchLevel};
use serde::Serialize;

pub const SALARY_FALLBACK: &str = "Contact ICTAK";

pub const LOOKUP_SUGGESTIONS: [&str; 5] = [
    "Data Science",
    "Artificial Intelligence",
    "Full Stack",
    "Cyber Security",
    "SDET",
];

pub const PROGRAM_HIGHLIGHTS: [&str; 6] = [
    "100% Placement Assistance for eligible candidates",
    "Scholarships and Cash-backs for meritorious students",
    "3-6 month access to LinkedIn Learning",
    "Comprehensive Employability Skills training",
    "Expert sessions by Industry Professionals",
    "Online and Offline sessions available",
];

pub const CAREER_GROWTH: [&str; 3] = [
    "Entry Level: Start as Junior/Associate roles",
    "Mid Level (2-4 years): Senior positions",
    "Advanced (5+ years): Lead/Architect roles",
];

pub const INDUSTRY_DEMAND: &str = "High demand across IT, Banking, Healthcare, E-commerce, \
Consulting, and Government sectors.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseListItem {
    pub index: usize,
    pub name: String,
    pub duration: String,
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseListView {
    pub courses: Vec<CourseListItem>,
}

impl CourseListView {
    pub fn build(catalog: &Catalog) -> Self {
        let courses = catalog
            .courses()
            .iter()
            .enumerate()
            .map(|(i, course)| CourseListItem {
                index: i + 1,
                name: course.name.clone(),
                duration: course.duration_text.clone(),
                level: primary_level(course),
            })
            .collect();
        Self { courses }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub name: String,
    pub duration: String,
    pub fees: String,
    pub level: String,
    pub salary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonView {
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonView {
    pub fn build(catalog: &Catalog) -> Self {
        let rows = catalog
            .courses()
            .iter()
            .map(|course| ComparisonRow {
                name: course.name.clone(),
                duration: course.duration_text.clone(),
                fees: course.fees_text.clone(),
                level: primary_level(course),
                salary: course
                    .job_role_salaries
                    .first()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| SALARY_FALLBACK.to_string()),
            })
            .collect();
        Self { rows }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseInfoView {
    pub name: String,
    pub confidence: u8,
    pub description: String,
    pub duration: String,
    pub fees: String,
    pub levels: Vec<String>,
    pub key_skills: Vec<String>,
}

impl CourseInfoView {
    pub fn build(found: &CourseMatch<'_>, skills_preview: usize) -> Self {
        let course = found.course;
        Self {
            name: course.name.clone(),
            confidence: found.confidence,
            description: course.description.clone(),
            duration: course.duration_text.clone(),
            fees: course.fees_text.clone(),
            levels: course.suitable_levels.clone(),
            key_skills: course.skills_preview(skills_preview).to_vec(),
        }
    }
}

/// 查無課程時提供的建議清單
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFoundView {
    pub query: String,
    pub best_confidence: u8,
    pub suggestions: Vec<&'static str>,
}

impl NotFoundView {
    pub fn build(query: &str, best_confidence: u8) -> Self {
        Self {
            query: query.to_string(),
            best_confidence,
            suggestions: LOOKUP_SUGGESTIONS.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternativeView {
    pub name: String,
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationView {
    pub course: String,
    pub score: u8,
    pub match_level: MatchLevel,
    pub reasons: Vec<String>,
    pub duration: String,
    pub fees: String,
    pub levels: Vec<String>,
    pub key_skills: Vec<String>,
    pub alternative: Option<AlternativeView>,
}

impl RecommendationView {
    pub fn build(
        recommendation: &Recommendation<'_>,
        alternative_gap: u8,
        skills_preview: usize,
    ) -> Self {
        let top = recommendation.selection.top;
        let alternative = recommendation
            .selection
            .alternative(alternative_gap)
            .map(|runner_up| AlternativeView {
                name: runner_up.course.name.clone(),
                score: runner_up.score,
            });

        Self {
            course: top.course.name.clone(),
            score: top.score,
            match_level: recommendation.match_level,
            reasons: recommendation.reasons.clone(),
            duration: top.course.duration_text.clone(),
            fees: top.course.fees_text.clone(),
            levels: top.course.suitable_levels.clone(),
            key_skills: top.course.skills_preview(skills_preview).to_vec(),
            alternative,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseDetailsView {
    pub name: String,
    pub description: String,
    pub duration: String,
    pub fees: String,
    pub levels: Vec<String>,
    pub key_skills: Vec<String>,
    pub highlights: Vec<&'static str>,
}

impl CourseDetailsView {
    pub fn build(course: &Course) -> Self {
        Self {
            name: course.name.clone(),
            description: course.description.clone(),
            duration: course.duration_text.clone(),
            fees: course.fees_text.clone(),
            levels: course.suitable_levels.clone(),
            key_skills: course.key_skills.clone(),
            highlights: PROGRAM_HIGHLIGHTS.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerInfoView {
    pub name: String,
    pub career_paths: Vec<String>,
    pub salary_ranges: Vec<String>,
    pub growth: Vec<&'static str>,
    pub industry_demand: &'static str,
}

impl CareerInfoView {
    pub fn build(course: &Course) -> Self {
        Self {
            name: course.name.clone(),
            career_paths: course.career_paths.clone(),
            salary_ranges: course
                .job_role_salaries
                .iter()
                .map(ToString::to_string)
                .collect(),
            growth: CAREER_GROWTH.to_vec(),
            industry_demand: INDUSTRY_DEMAND,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveryChoice {
    pub label: &'static str,
    /// Interest to submit with the next `recommend`; `None` means "show every course".
    pub interest: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveryView {
    pub intro: &'static str,
    pub question: &'static str,
    pub options: Vec<DiscoveryChoice>,
}

impl DiscoveryView {
    pub fn build(options: &[DiscoveryOption], experience: Option<&str>) -> Self {
        let (intro, question) = if is_advanced(experience) {
            (
                "I see you're exploring options! Since you have advanced coding experience, \
                 let me help you discover the best path.",
                "What type of work excites you more?",
            )
        } else {
            (
                "Let me help you discover the right path! \
                 Let's find what matches your interests.",
                "Do you prefer working with:",
            )
        };

        Self {
            intro,
            question,
            options: options
                .iter()
                .map(|option| DiscoveryChoice {
                    label: option.label,
                    interest: option.interest_value(),
                })
                .collect(),
        }
    }
}

fn primary_level(course: &Course) -> String {
    course.primary_level().unwrap_or_default().to_string()
}
