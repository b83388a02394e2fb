//! 純文字輸出：每個 view 實作 `Display`，`--json` 時改用 serde 序列化

use crate::app::views::{
    CareerInfoView, ComparisonView, CourseDetailsView, CourseInfoView, CourseListView,
    DiscoveryView, NotFoundView, RecommendationView,
};
use std::fmt::{self, Display, Formatter};

fn bullets(f: &mut Formatter<'_>, items: &[impl AsRef<str>]) -> fmt::Result {
    for item in items {
        writeln!(f, "  - {}", item.as_ref())?;
    }
    Ok(())
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

impl Display for CourseListView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Available Courses")?;
        writeln!(f)?;
        for item in &self.courses {
            writeln!(
                f,
                "{}. {} ({}, {})",
                item.index,
                item.name,
                or_dash(&item.duration),
                or_dash(&item.level)
            )?;
        }
        Ok(())
    }
}

impl Display for ComparisonView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Course Comparison")?;
        for row in &self.rows {
            writeln!(f)?;
            writeln!(f, "{}", row.name)?;
            writeln!(f, "  Duration: {}", or_dash(&row.duration))?;
            writeln!(f, "  Fees:     {}", or_dash(&row.fees))?;
            writeln!(f, "  Level:    {}", or_dash(&row.level))?;
            writeln!(f, "  Salary:   {}", row.salary)?;
        }
        Ok(())
    }
}

impl Display for CourseInfoView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({}% match)", self.name, self.confidence)?;
        writeln!(f)?;
        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
            writeln!(f)?;
        }
        writeln!(f, "Duration:     {}", or_dash(&self.duration))?;
        writeln!(f, "Fees:         {}", or_dash(&self.fees))?;
        writeln!(f, "Suitable for: {}", or_dash(&self.levels.join(", ")))?;
        if !self.key_skills.is_empty() {
            writeln!(f, "Key skills:")?;
            bullets(f, self.key_skills.as_slice())?;
        }
        Ok(())
    }
}

impl Display for NotFoundView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "I couldn't identify the course \"{}\".", self.query)?;
        writeln!(f)?;
        writeln!(f, "Try one of these:")?;
        bullets(f, self.suggestions.as_slice())?;
        writeln!(f)?;
        writeln!(f, "Or run `course-advisor recommend` to find your match.")
    }
}

impl Display for RecommendationView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Your Personalized Recommendation")?;
        writeln!(f)?;
        writeln!(f, "{}", self.course)?;
        writeln!(f, "Match Score: {}% - {} fit!", self.score, self.match_level)?;
        writeln!(f)?;
        writeln!(f, "Why this course?")?;
        bullets(f, self.reasons.as_slice())?;
        writeln!(f)?;
        writeln!(f, "Duration: {}", or_dash(&self.duration))?;
        writeln!(f, "Fees:     {}", or_dash(&self.fees))?;
        writeln!(f, "Level:    {}", or_dash(&self.levels.join(", ")))?;
        if !self.key_skills.is_empty() {
            writeln!(f, "Key skills:")?;
            bullets(f, self.key_skills.as_slice())?;
        }
        if let Some(alternative) = &self.alternative {
            writeln!(f)?;
            writeln!(
                f,
                "Alternative: {} ({}% match)",
                alternative.name, alternative.score
            )?;
        }
        Ok(())
    }
}

impl Display for CourseDetailsView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Complete Course Details")?;
        writeln!(f, "{}", self.name)?;
        writeln!(f)?;
        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
            writeln!(f)?;
        }
        writeln!(f, "Duration:     {}", or_dash(&self.duration))?;
        writeln!(f, "Fees:         {}", or_dash(&self.fees))?;
        writeln!(f, "Suitable for: {}", or_dash(&self.levels.join(", ")))?;
        writeln!(f)?;
        writeln!(f, "Key skills covered:")?;
        bullets(f, self.key_skills.as_slice())?;
        writeln!(f)?;
        writeln!(f, "What makes this course special:")?;
        bullets(f, self.highlights.as_slice())
    }
}

impl Display for CareerInfoView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Career Opportunities & Salary Information")?;
        writeln!(f, "{}", self.name)?;
        writeln!(f)?;
        writeln!(f, "Career paths:")?;
        bullets(f, self.career_paths.as_slice())?;
        writeln!(f)?;
        writeln!(f, "Expected salary ranges:")?;
        bullets(f, self.salary_ranges.as_slice())?;
        writeln!(f)?;
        writeln!(f, "Career growth:")?;
        bullets(f, self.growth.as_slice())?;
        writeln!(f)?;
        writeln!(f, "Industry demand: {}", self.industry_demand)
    }
}

impl Display for DiscoveryView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.intro)?;
        writeln!(f)?;
        writeln!(f, "{}", self.question)?;
        for (i, option) in self.options.iter().enumerate() {
            match option.interest {
                Some(interest) => writeln!(
                    f,
                    "  {}. {}  (recommend --interest \"{}\")",
                    i + 1,
                    option.label,
                    interest
                )?,
                None => writeln!(f, "  {}. {}  (list)", i + 1, option.label)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::app::views::*;
    use crate::core::discovery::menu;

    #[test]
    fn test_not_found_lists_suggestions() {
        let text = NotFoundView::build("blockchain", 31).to_string();
        assert!(text.contains("\"blockchain\""));
        for suggestion in LOOKUP_SUGGESTIONS {
            assert!(text.contains(suggestion));
        }
    }

    #[test]
    fn test_discovery_shows_follow_up_commands() {
        let text = DiscoveryView::build(menu(Some("advanced")), Some("advanced")).to_string();
        assert!(text.contains("1. Building intelligent AI systems"));
        assert!(text.contains("--interest \"ai ml\""));

        let text = DiscoveryView::build(menu(None), None).to_string();
        assert!(text.contains("5. Show me all options  (list)"));
    }

    #[test]
    fn test_empty_fields_render_as_dash() {
        let view = ComparisonView {
            rows: vec![ComparisonRow {
                name: "SDET".to_string(),
                duration: String::new(),
                fees: String::new(),
                level: String::new(),
                salary: SALARY_FALLBACK.to_string(),
            }],
        };
        let text = view.to_string();
        assert!(text.contains("Duration: -"));
        assert!(text.contains("Salary:   Contact ICTAK"));
    }
}
