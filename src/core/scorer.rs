//! Profile-to-course match scoring.
//!
//! The score is the sum of four independent sub-scores (interest, career role,
//! experience, goal), clamped to 100.

use crate::core::classifier::{classify, classify_role, Category};
use crate::domain::model::{is_general, is_unsure, Course, Profile};
use serde::Serialize;

pub const MAX_SCORE: u8 = 100;

const INTEREST_PRIMARY: u8 = 40;
const INTEREST_RELATED: u8 = 25;
const INTEREST_BROAD_APPEAL: u8 = 25;

const ROLE_PRIMARY: u8 = 30;
const ROLE_RELATED: u8 = 25;
const ROLE_CAREER_PATH_BONUS: u8 = 15;

const EXPERIENCE_EXACT: u8 = 20;
const EXPERIENCE_ALIAS: u8 = 18;
const EXPERIENCE_BEGINNER_MISMATCH: u8 = 5;
const EXPERIENCE_ADVANCED_FLAGSHIP: u8 = 25;
const EXPERIENCE_ADVANCED_OTHER: u8 = 15;
const EXPERIENCE_OTHER: u8 = 10;

const GOAL_FULL: u8 = 10;
const GOAL_DEFAULT: u8 = 8;
const GOAL_EXPLORING_ADVANCED: u8 = 7;

const BROAD_APPEAL_MARKERS: &[&str] = &["data science", "full stack"];
const ADVANCED_FLAGSHIP_MARKERS: &[&str] = &["artificial intelligence", "data science"];
const CAREER_CHANGE_MARKERS: &[&str] = &["full stack", "data science", "cyber"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub interest: u8,
    pub career_role: u8,
    pub experience: u8,
    pub goal: u8,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u8 {
        let sum = u16::from(self.interest)
            + u16::from(self.career_role)
            + u16::from(self.experience)
            + u16::from(self.goal);
        sum.min(u16::from(MAX_SCORE)) as u8
    }
}

/// Match score in `0..=100` for one course.
pub fn score(course: &Course, profile: &Profile) -> u8 {
    breakdown(course, profile).total()
}

pub fn breakdown(course: &Course, profile: &Profile) -> ScoreBreakdown {
    let name = course.name.to_lowercase();

    ScoreBreakdown {
        interest: interest_score(&name, profile),
        career_role: career_role_score(course, &name, profile),
        experience: experience_score(course, &name, profile),
        goal: goal_score(course, &name, profile),
    }
}

fn contains_any(text: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| text.contains(marker))
}

fn category_points(
    category: Category,
    name: &str,
    primary: u8,
    related: u8,
    matches: fn(&Category, &str) -> bool,
) -> u8 {
    if matches(&category, name) {
        primary
    } else if category
        .related()
        .is_some_and(|related_category| matches(&related_category, name))
    {
        related
    } else {
        0
    }
}

fn interest_score(name: &str, profile: &Profile) -> u8 {
    let Some(interest) = profile.interest() else {
        return 0;
    };

    if let Some(category) = classify(interest) {
        return category_points(
            category,
            name,
            INTEREST_PRIMARY,
            INTEREST_RELATED,
            Category::matches_course_name,
        );
    }

    if (is_unsure(interest) || is_general(interest)) && contains_any(name, BROAD_APPEAL_MARKERS) {
        INTEREST_BROAD_APPEAL
    } else {
        0
    }
}

fn career_role_score(course: &Course, name: &str, profile: &Profile) -> u8 {
    let Some(role) = profile.confident_role() else {
        return 0;
    };

    let mut points = classify_role(role)
        .map(|category| {
            category_points(
                category,
                name,
                ROLE_PRIMARY,
                ROLE_RELATED,
                Category::matches_course_role,
            )
        })
        .unwrap_or(0);

    let career_paths = course.career_paths_text();
    let role_lower = role.to_lowercase();
    if !career_paths.is_empty()
        && role_lower
            .split_whitespace()
            .any(|token| career_paths.contains(token))
    {
        points += ROLE_CAREER_PATH_BONUS;
    }

    points
}

fn experience_score(course: &Course, name: &str, profile: &Profile) -> u8 {
    let Some(experience) = profile.experience() else {
        return 0;
    };

    let experience = experience.to_lowercase();
    let levels = course.levels_text();

    if levels.contains(experience.as_str()) {
        EXPERIENCE_EXACT
    } else if experience == "beginner" && levels.contains("basic") {
        EXPERIENCE_ALIAS
    } else if experience == "basic" && levels.contains("beginner") {
        EXPERIENCE_ALIAS
    } else if experience == "beginner" {
        // neither beginner nor basic is offered
        EXPERIENCE_BEGINNER_MISMATCH
    } else if experience == "advanced" {
        if contains_any(name, ADVANCED_FLAGSHIP_MARKERS) {
            EXPERIENCE_ADVANCED_FLAGSHIP
        } else {
            EXPERIENCE_ADVANCED_OTHER
        }
    } else {
        EXPERIENCE_OTHER
    }
}

fn goal_score(course: &Course, name: &str, profile: &Profile) -> u8 {
    let Some(goal) = profile.goal() else {
        return 0;
    };

    let goal = goal.to_lowercase();

    if goal.contains("career change") {
        if contains_any(name, CAREER_CHANGE_MARKERS) {
            GOAL_FULL
        } else {
            GOAL_DEFAULT
        }
    } else if goal.contains("skill upgrade") || goal.contains("promotion") {
        GOAL_FULL
    } else if goal.contains("exploring") || goal.contains("interest") {
        if course.levels_text().contains("beginner") {
            GOAL_FULL
        } else {
            GOAL_EXPLORING_ADVANCED
        }
    } else {
        GOAL_DEFAULT
    }
}
