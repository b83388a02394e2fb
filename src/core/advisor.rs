use crate::core::catalog::Catalog;
use crate::core::discovery::{menu, DiscoveryOption};
use crate::core::reasoning::explain;
use crate::core::selector::{effective_profile, needs_discovery, select};
use crate::domain::model::{Course, MatchLevel, Profile, Selection};
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation<'a> {
    pub selection: Selection<'a>,
    pub match_level: MatchLevel,
    pub reasons: Vec<String>,
}

impl<'a> Recommendation<'a> {
    /// Name the caller persists as the recommended course.
    pub fn course_name(&self) -> &'a str {
        &self.selection.top.course.name
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "result")]
pub enum Advice<'a> {
    Recommend(Recommendation<'a>),
    Discover(&'static [DiscoveryOption]),
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CourseMatch<'a> {
    pub course: &'a Course,
    pub confidence: u8,
}

/// Engine façade over one materialized catalog.
///
/// Holds only a shared borrow; every call is a pure function of its inputs.
#[derive(Debug, Clone, Copy)]
pub struct AdvisorEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> AdvisorEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Recommends a course, or returns the clarifying menu when the discovery gate is open.
    pub fn recommend(&self, profile: &Profile) -> Result<Advice<'a>> {
        if needs_discovery(profile) {
            tracing::info!("Interest and career role are both unsure, offering discovery menu");
            return Ok(Advice::Discover(menu(profile.experience())));
        }

        let selection = select(self.catalog.courses(), profile)?;
        let reasons = explain(&effective_profile(profile));

        Ok(Advice::Recommend(Recommendation {
            match_level: MatchLevel::from_score(selection.top.score),
            selection,
            reasons,
        }))
    }

    pub fn lookup(&self, query: &str) -> Result<CourseMatch<'a>> {
        let (course, resolution) = self.catalog.lookup(query)?;
        tracing::info!(
            "Resolved '{}' to '{}' ({}%)",
            query,
            course.name,
            resolution.confidence
        );
        Ok(CourseMatch {
            course,
            confidence: resolution.confidence,
        })
    }

    /// Course previously stored by the caller (e.g. the recommended course name).
    pub fn course(&self, name: &str) -> Result<&'a Course> {
        self.catalog.require(name)
    }
}
