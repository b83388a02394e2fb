use crate::core::resolver::{resolve, Resolution};
use crate::domain::model::{Course, CourseRecord};
use crate::domain::ports::CatalogSource;
use crate::utils::error::{AdvisorError, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::io::Read;

/// Ordered, in-memory course catalog for one request cycle.
///
/// `keys` mirrors `courses` one-to-one (lower-cased names in load order) so
/// fuzzy lookups break ties the same way on every run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    courses: Vec<Course>,
    #[serde(skip)]
    keys: Vec<String>,
}

impl Catalog {
    /// Builds a catalog, dropping nameless courses and case-insensitive duplicates (first wins).
    pub fn from_courses(courses: impl IntoIterator<Item = Course>) -> Self {
        let mut seen = HashSet::new();
        let mut catalog = Catalog::default();

        for course in courses {
            if course.name.is_empty() {
                tracing::warn!("Skipping course record without a course_name");
                continue;
            }

            let key = course.key();
            if !seen.insert(key.clone()) {
                tracing::warn!("Skipping duplicate course '{}'", course.name);
                continue;
            }

            catalog.keys.push(key);
            catalog.courses.push(course);
        }

        catalog
    }

    /// Parses CSV with a header row. Missing columns default to empty.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        if !csv_reader.headers()?.iter().any(|header| header == "course_name") {
            tracing::warn!("Catalog header has no course_name column; every row will be skipped");
        }

        let mut courses = Vec::new();
        for (index, row) in csv_reader.deserialize::<CourseRecord>().enumerate() {
            match row {
                Ok(record) => courses.push(Course::from(record)),
                Err(e) => {
                    tracing::warn!("Skipping malformed catalog row {}: {}", index + 1, e);
                }
            }
        }

        Ok(Self::from_courses(courses))
    }

    /// Fetches and parses the catalog; a reachable source with no courses is `CatalogEmpty`.
    pub async fn load(source: &dyn CatalogSource) -> Result<Self> {
        let location = source.location().to_string();
        tracing::debug!("Loading course catalog from {}", location);

        let bytes = source.fetch().await?;
        let catalog = Self::from_csv_reader(bytes.as_slice())?;

        if catalog.is_empty() {
            return Err(AdvisorError::CatalogEmpty { location });
        }

        tracing::info!("Loaded {} courses from {}", catalog.len(), location);
        Ok(catalog)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Lower-cased course names in load order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Exact, case-insensitive lookup by course name.
    pub fn get(&self, name: &str) -> Option<&Course> {
        let key = name.trim().to_lowercase();
        self.keys
            .iter()
            .position(|candidate| *candidate == key)
            .map(|index| &self.courses[index])
    }

    pub fn require(&self, name: &str) -> Result<&Course> {
        self.get(name).ok_or_else(|| AdvisorError::UnknownCourse {
            name: name.to_string(),
        })
    }

    /// Fuzzy lookup of free text against the ordered keys.
    pub fn lookup(&self, query: &str) -> Result<(&Course, Resolution)> {
        let resolution = resolve(query, &self.keys)?;
        let course = self.require(&resolution.key)?;
        Ok((course, resolution))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
course_name,duration,fees,suitable_for,focus_areas,career_paths,job_roles_salary,key_skills,description
Data Science,6 months,Rs 50000,beginner|basic,analytics,Data Analyst|Data Scientist,Data Analyst: 4-8 LPA,Python|SQL|Statistics,Learn data science
Full Stack,6 months,Rs 45000,intermediate,web,Web Developer,Web Developer: 3-7 LPA,React|Node,Build apps
";

    #[test]
    fn test_parse_csv_in_load_order() {
        let catalog = Catalog::from_csv_reader(CSV.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.keys(), &["data science", "full stack"]);

        let course = &catalog.courses()[0];
        assert_eq!(course.duration_text, "6 months");
        assert_eq!(course.suitable_levels, vec!["beginner", "basic"]);
        assert_eq!(course.key_skills.len(), 3);
    }

    #[test]
    fn test_missing_columns_degrade_to_empty() {
        let csv = "course_name,duration\nSDET,4 months\n";
        let catalog = Catalog::from_csv_reader(csv.as_bytes()).unwrap();
        let course = catalog.get("sdet").unwrap();
        assert_eq!(course.duration_text, "4 months");
        assert!(course.key_skills.is_empty());
        assert!(course.career_paths.is_empty());
    }

    #[test]
    fn test_duplicates_and_blank_names_are_skipped() {
        let csv = "course_name,duration\nSDET,4 months\n,1 month\nsdet,9 months\n";
        let catalog = Catalog::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("SDET").unwrap().duration_text, "4 months");
    }

    #[test]
    fn test_get_and_require() {
        let catalog = Catalog::from_csv_reader(CSV.as_bytes()).unwrap();
        assert_eq!(catalog.get("  FULL STACK ").unwrap().name, "Full Stack");
        assert!(matches!(
            catalog.require("Blockchain"),
            Err(AdvisorError::UnknownCourse { .. })
        ));
    }

    #[test]
    fn test_lookup_resolves_typos() {
        let catalog = Catalog::from_csv_reader(CSV.as_bytes()).unwrap();
        let (course, resolution) = catalog.lookup("data scince").unwrap();
        assert_eq!(course.name, "Data Science");
        assert!(resolution.confidence >= 70);
        assert!(matches!(catalog.lookup("zzz"), Err(AdvisorError::NotFound { .. })));
    }
}
