use serde::{Deserialize, Serialize};
use std::fmt;

pub const UNSURE: &str = "unsure";
pub const GENERAL: &str = "general";

/// 課程資料來源中的一列，欄位名稱與 CSV 標題一致
///
/// 缺少的欄位一律視為空字串，不會讓整份目錄載入失敗。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseRecord {
    #[serde(default)]
    pub course_name: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub fees: String,
    #[serde(default)]
    pub suitable_for: String,
    #[serde(default)]
    pub focus_areas: String,
    #[serde(default)]
    pub career_paths: String,
    #[serde(default)]
    pub job_roles_salary: String,
    #[serde(default)]
    pub key_skills: String,
    #[serde(default)]
    pub description: String,
}

/// A job role and the salary range advertised for it, e.g. `Data Scientist: ₹6-12 LPA`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobRoleSalary {
    pub role: String,
    pub salary_range: Option<String>,
}

impl JobRoleSalary {
    pub fn parse(item: &str) -> Self {
        match item.split_once(':') {
            Some((role, range)) if !range.trim().is_empty() => Self {
                role: role.trim().to_string(),
                salary_range: Some(range.trim().to_string()),
            },
            Some((role, _)) => Self {
                role: role.trim().to_string(),
                salary_range: None,
            },
            None => Self {
                role: item.trim().to_string(),
                salary_range: None,
            },
        }
    }
}

impl fmt::Display for JobRoleSalary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.salary_range {
            Some(range) => write!(f, "{}: {}", self.role, range),
            None => write!(f, "{}", self.role),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    pub name: String,
    pub duration_text: String,
    pub fees_text: String,
    pub description: String,
    pub suitable_levels: Vec<String>,
    pub focus_areas: String,
    pub career_paths: Vec<String>,
    pub job_role_salaries: Vec<JobRoleSalary>,
    pub key_skills: Vec<String>,
}

/// 以 `|` 切分多值欄位，去除空白並丟棄空段
pub fn split_multi(value: &str) -> Vec<String> {
    value
        .split('|')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

impl From<CourseRecord> for Course {
    fn from(record: CourseRecord) -> Self {
        Self {
            name: record.course_name.trim().to_string(),
            duration_text: record.duration.trim().to_string(),
            fees_text: record.fees.trim().to_string(),
            description: record.description.trim().to_string(),
            suitable_levels: split_multi(&record.suitable_for),
            focus_areas: record.focus_areas.trim().to_string(),
            career_paths: split_multi(&record.career_paths),
            job_role_salaries: split_multi(&record.job_roles_salary)
                .iter()
                .map(|item| JobRoleSalary::parse(item))
                .collect(),
            key_skills: split_multi(&record.key_skills),
        }
    }
}

impl Course {
    /// Case-insensitive catalog key.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn name_contains(&self, marker: &str) -> bool {
        self.name.to_lowercase().contains(marker)
    }

    /// Lower-cased suitable levels joined the way the source stores them.
    pub fn levels_text(&self) -> String {
        self.suitable_levels.join("|").to_lowercase()
    }

    pub fn career_paths_text(&self) -> String {
        self.career_paths.join("|").to_lowercase()
    }

    pub fn primary_level(&self) -> Option<&str> {
        self.suitable_levels.first().map(String::as_str)
    }

    pub fn skills_preview(&self, limit: usize) -> &[String] {
        &self.key_skills[..self.key_skills.len().min(limit)]
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

pub fn is_unsure(text: &str) -> bool {
    text.to_lowercase().contains(UNSURE)
}

pub fn is_general(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case(GENERAL)
}

/// 使用者輪廓的唯讀快照，由呼叫端負責取得與保存
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub interest: Option<String>,
    pub career_role: Option<String>,
    pub experience: Option<String>,
    pub goal: Option<String>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interest(mut self, interest: impl Into<String>) -> Self {
        self.interest = Some(interest.into());
        self
    }

    pub fn with_career_role(mut self, role: impl Into<String>) -> Self {
        self.career_role = Some(role.into());
        self
    }

    pub fn with_experience(mut self, experience: impl Into<String>) -> Self {
        self.experience = Some(experience.into());
        self
    }

    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = Some(goal.into());
        self
    }

    pub fn interest(&self) -> Option<&str> {
        non_empty(&self.interest)
    }

    pub fn career_role(&self) -> Option<&str> {
        non_empty(&self.career_role)
    }

    pub fn experience(&self) -> Option<&str> {
        non_empty(&self.experience)
    }

    pub fn goal(&self) -> Option<&str> {
        non_empty(&self.goal)
    }

    pub fn is_interest_unsure(&self) -> bool {
        self.interest().is_some_and(is_unsure)
    }

    pub fn is_role_unsure(&self) -> bool {
        self.career_role().is_some_and(is_unsure)
    }

    /// Interest that is present and not the `unsure` sentinel.
    pub fn confident_interest(&self) -> Option<&str> {
        self.interest().filter(|interest| !is_unsure(interest))
    }

    /// Role that is present and neither `unsure` nor `general`.
    pub fn confident_role(&self) -> Option<&str> {
        self.career_role()
            .filter(|role| !is_unsure(role) && !is_general(role))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchResult<'a> {
    pub course: &'a Course,
    pub score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection<'a> {
    pub top: MatchResult<'a>,
    pub runner_up: Option<MatchResult<'a>>,
}

impl<'a> Selection<'a> {
    /// Runner-up worth showing next to the top pick: strictly closer than `max_gap` points.
    pub fn alternative(&self, max_gap: u8) -> Option<MatchResult<'a>> {
        self.runner_up
            .filter(|runner_up| self.top.score.saturating_sub(runner_up.score) < max_gap)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchLevel {
    Excellent,
    Great,
    Good,
}

impl MatchLevel {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            MatchLevel::Excellent
        } else if score >= 60 {
            MatchLevel::Great
        } else {
            MatchLevel::Good
        }
    }
}

impl fmt::Display for MatchLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MatchLevel::Excellent => "Excellent",
            MatchLevel::Great => "Great",
            MatchLevel::Good => "Good",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_conversion_drops_empty_segments() {
        let record = CourseRecord {
            course_name: "  Data Science  ".to_string(),
            suitable_for: "beginner||basic| ".to_string(),
            key_skills: "Python|SQL".to_string(),
            job_roles_salary: "Data Analyst: ₹4-8 LPA|Consultant".to_string(),
            ..Default::default()
        };
        let course = Course::from(record);

        assert_eq!(course.name, "Data Science");
        assert_eq!(course.suitable_levels, vec!["beginner", "basic"]);
        assert!(course.career_paths.is_empty());
        assert_eq!(course.job_role_salaries[0].role, "Data Analyst");
        assert_eq!(
            course.job_role_salaries[0].salary_range.as_deref(),
            Some("₹4-8 LPA")
        );
        assert_eq!(course.job_role_salaries[1].salary_range, None);
        assert_eq!(course.job_role_salaries[0].to_string(), "Data Analyst: ₹4-8 LPA");
    }

    #[test]
    fn test_profile_sentinels() {
        let profile = Profile::new()
            .with_interest("I'm UNSURE")
            .with_career_role("General");
        assert!(profile.is_interest_unsure());
        assert!(!profile.is_role_unsure());
        assert_eq!(profile.confident_interest(), None);
        assert_eq!(profile.confident_role(), None);

        let blank = Profile::new().with_interest("   ");
        assert_eq!(blank.interest(), None);
        assert!(!blank.is_interest_unsure());
    }

    #[test]
    fn test_skills_preview_is_bounded() {
        let course = Course::from(CourseRecord {
            course_name: "SDET".to_string(),
            key_skills: "Selenium|Java|TestNG".to_string(),
            ..Default::default()
        });
        assert_eq!(course.skills_preview(5).len(), 3);
        assert_eq!(course.skills_preview(2), &["Selenium", "Java"]);
    }

    #[test]
    fn test_match_level_thresholds() {
        assert_eq!(MatchLevel::from_score(80), MatchLevel::Excellent);
        assert_eq!(MatchLevel::from_score(79), MatchLevel::Great);
        assert_eq!(MatchLevel::from_score(60), MatchLevel::Great);
        assert_eq!(MatchLevel::from_score(59), MatchLevel::Good);
    }
}
