//! Ranking and top/runner-up selection.

use crate::core::classifier::infer_category_from_role;
use crate::core::scorer::score;
use crate::domain::model::{is_unsure, Course, MatchResult, Profile, Selection, GENERAL};
use crate::utils::error::{AdvisorError, Result};
use std::borrow::Cow;

/// Discovery gate: both interest and career role are the `unsure` sentinel.
pub fn needs_discovery(profile: &Profile) -> bool {
    profile.is_interest_unsure() && profile.is_role_unsure()
}

/// Fills one-sided gaps before scoring without touching the caller's profile.
///
/// * unsure interest + any role that is not unsure (including `general`):
///   interest becomes the label of the role's inferred category
/// * unsure role + any other interest: role becomes `general`
pub fn effective_profile(profile: &Profile) -> Cow<'_, Profile> {
    if profile.is_interest_unsure() {
        if let Some(role) = profile.career_role().filter(|role| !is_unsure(role)) {
            let category = infer_category_from_role(role);
            tracing::debug!("Inferred interest '{}' from role '{}'", category.interest_label(), role);
            let mut effective = profile.clone();
            effective.interest = Some(category.interest_label().to_string());
            return Cow::Owned(effective);
        }
    } else if profile.is_role_unsure() {
        let mut effective = profile.clone();
        effective.career_role = Some(GENERAL.to_string());
        return Cow::Owned(effective);
    }

    Cow::Borrowed(profile)
}

/// Scores every course and sorts descending; equal scores keep catalog order.
pub fn rank<'a>(courses: &'a [Course], profile: &Profile) -> Vec<MatchResult<'a>> {
    let mut ranked: Vec<MatchResult<'a>> = courses
        .iter()
        .map(|course| {
            let result = MatchResult {
                course,
                score: score(course, profile),
            };
            tracing::debug!("Scored '{}': {}", course.name, result.score);
            result
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// Picks the top course and the runner-up (rank 1) for `profile`.
///
/// Returns `AmbiguousProfile` when the discovery gate is open and
/// `CatalogEmpty` when there is nothing to rank.
pub fn select<'a>(courses: &'a [Course], profile: &Profile) -> Result<Selection<'a>> {
    if needs_discovery(profile) {
        return Err(AdvisorError::AmbiguousProfile);
    }

    let effective = effective_profile(profile);
    let ranked = rank(courses, &effective);

    let mut iter = ranked.into_iter();
    let top = iter.next().ok_or_else(|| AdvisorError::CatalogEmpty {
        location: "in-memory catalog".to_string(),
    })?;
    let runner_up = iter.next();

    tracing::info!(
        "Selected '{}' ({}%), runner-up: {}",
        top.course.name,
        top.score,
        runner_up
            .map(|r| format!("'{}' ({}%)", r.course.name, r.score))
            .unwrap_or_else(|| "none".to_string())
    );

    Ok(Selection { top, runner_up })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CourseRecord;

    fn make_course(name: &str, levels: &str) -> Course {
        Course::from(CourseRecord {
            course_name: name.to_string(),
            suitable_for: levels.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_discovery_gate() {
        let both = Profile::new().with_interest("unsure").with_career_role("Unsure");
        assert!(needs_discovery(&both));

        let one_sided = Profile::new().with_interest("unsure").with_career_role("web developer");
        assert!(!needs_discovery(&one_sided));
        assert!(!needs_discovery(&Profile::new().with_career_role("unsure")));
        assert!(!needs_discovery(&Profile::new()));
    }

    #[test]
    fn test_select_refuses_ambiguous_profile() {
        let courses = vec![make_course("Data Science", "beginner")];
        let profile = Profile::new().with_interest("unsure").with_career_role("unsure");
        assert!(matches!(
            select(&courses, &profile),
            Err(AdvisorError::AmbiguousProfile)
        ));
    }

    #[test]
    fn test_select_empty_catalog() {
        assert!(matches!(
            select(&[], &Profile::new()),
            Err(AdvisorError::CatalogEmpty { .. })
        ));
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let courses = vec![
            make_course("Alpha", "beginner"),
            make_course("Beta", "beginner"),
            make_course("Gamma", "beginner"),
        ];
        let profile = Profile::new().with_experience("beginner");

        let selection = select(&courses, &profile).unwrap();
        assert_eq!(selection.top.course.name, "Alpha");
        assert_eq!(selection.runner_up.map(|r| r.course.name.as_str()), Some("Beta"));
        assert_eq!(selection.top.score, selection.runner_up.unwrap().score);
    }

    #[test]
    fn test_single_course_has_no_runner_up() {
        let courses = vec![make_course("Data Science", "beginner")];
        let selection = select(&courses, &Profile::new()).unwrap();
        assert_eq!(selection.top.course.name, "Data Science");
        assert!(selection.runner_up.is_none());
    }

    #[test]
    fn test_effective_profile_infers_interest_from_role() {
        let profile = Profile::new().with_interest("unsure").with_career_role("Security Engineer");
        let effective = effective_profile(&profile);
        assert_eq!(effective.interest.as_deref(), Some("cybersecurity"));
        // caller's profile is untouched
        assert_eq!(profile.interest.as_deref(), Some("unsure"));
    }

    #[test]
    fn test_effective_profile_generalizes_unsure_role() {
        let profile = Profile::new().with_interest("web apps").with_career_role("not sure, unsure");
        let effective = effective_profile(&profile);
        assert_eq!(effective.career_role.as_deref(), Some("general"));
        assert_eq!(effective.interest.as_deref(), Some("web apps"));

        let untouched = Profile::new().with_interest("web apps");
        assert!(matches!(effective_profile(&untouched), Cow::Borrowed(_)));
    }

    #[test]
    fn test_inferred_interest_drives_ranking() {
        let courses = vec![
            make_course("Data Science", "beginner"),
            make_course("Cyber Security Analyst", "beginner"),
        ];
        let profile = Profile::new().with_interest("unsure").with_career_role("security analyst");
        let selection = select(&courses, &profile).unwrap();
        assert_eq!(selection.top.course.name, "Cyber Security Analyst");
    }

    #[test]
    fn test_general_role_infers_data_science_interest() {
        let profile = Profile::new().with_interest("unsure").with_career_role("general");
        let effective = effective_profile(&profile);
        assert_eq!(effective.interest.as_deref(), Some("data science"));
        assert_eq!(effective.career_role.as_deref(), Some("general"));
    }

    #[test]
    fn test_general_role_ranking_ignores_catalog_order() {
        let courses = vec![
            make_course("Full Stack", "intermediate"),
            make_course("Data Science", "beginner"),
            make_course("Artificial Intelligence", "advanced"),
        ];
        let profile = Profile::new().with_interest("unsure").with_career_role("general");

        let selection = select(&courses, &profile).unwrap();
        assert_eq!(selection.top.course.name, "Data Science");
        assert_eq!(selection.top.score, 40);
        let runner_up = selection.runner_up.unwrap();
        assert_eq!(runner_up.course.name, "Artificial Intelligence");
        assert_eq!(runner_up.score, 25);
    }

    #[test]
    fn test_unsure_interest_without_role_is_left_alone() {
        let profile = Profile::new().with_interest("unsure");
        assert!(matches!(effective_profile(&profile), Cow::Borrowed(_)));
    }
}
