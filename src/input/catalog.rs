//! Read-only repositories over reference profiles and courses

use crate::error::Result;
use crate::input::records::{position_by_name, same_specialization, Course, ReferenceProfile};
use crate::processing::skills::SkillSet;
use serde::{Deserialize, Serialize};

const BUILTIN_PROFILES: &str = include_str!("../../data/profiles.toml");
const BUILTIN_COURSES: &str = include_str!("../../data/courses.toml");

/// Source of reference profiles. Implementations hand out owned snapshots.
pub trait ProfileRepository: Send + Sync {
    /// Profiles tagged with `specialization`, in repository order. An unknown
    /// specialization yields an empty list.
    fn profiles_for(&self, specialization: &str) -> Vec<ReferenceProfile>;

    /// Distinct specialization tags, in first-seen order.
    fn specializations(&self) -> Vec<String>;
}

/// Source of the course corpus.
pub trait CourseRepository: Send + Sync {
    fn all_courses(&self) -> Vec<Course>;

    /// Courses in `specialization` or teaching one of `skills`.
    fn courses_matching(&self, specialization: &str, skills: &SkillSet) -> Vec<Course> {
        self.all_courses()
            .into_iter()
            .filter(|course| course.matches(specialization, skills))
            .collect()
    }

    /// Exact name first, then a trimmed case-insensitive match.
    fn find_by_name(&self, name: &str) -> Option<Course> {
        let mut courses = self.all_courses();
        position_by_name(&courses, name).map(|index| courses.swap_remove(index))
    }
}

/// File layout for profile collections: `[[profiles]]` tables or `{"profiles": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileFile {
    #[serde(default)]
    pub profiles: Vec<ReferenceProfile>,
}

/// File layout for course collections: `[[courses]]` tables or `{"courses": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseFile {
    #[serde(default)]
    pub courses: Vec<Course>,
}

/// Both collections held in memory; the catalog never changes after construction.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    profiles: Vec<ReferenceProfile>,
    courses: Vec<Course>,
}

impl InMemoryCatalog {
    pub fn new(profiles: Vec<ReferenceProfile>, courses: Vec<Course>) -> Self {
        Self { profiles, courses }
    }

    /// The seed catalog compiled into the binary.
    pub fn builtin() -> Result<Self> {
        let profiles: ProfileFile = toml::from_str(BUILTIN_PROFILES)?;
        let courses: CourseFile = toml::from_str(BUILTIN_COURSES)?;
        Ok(Self::new(profiles.profiles, courses.courses))
    }

    pub fn builtin_profiles() -> Result<Vec<ReferenceProfile>> {
        let file: ProfileFile = toml::from_str(BUILTIN_PROFILES)?;
        Ok(file.profiles)
    }

    pub fn builtin_courses() -> Result<Vec<Course>> {
        let file: CourseFile = toml::from_str(BUILTIN_COURSES)?;
        Ok(file.courses)
    }

    pub fn profiles(&self) -> &[ReferenceProfile] {
        &self.profiles
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }
}

impl ProfileRepository for InMemoryCatalog {
    fn profiles_for(&self, specialization: &str) -> Vec<ReferenceProfile> {
        self.profiles
            .iter()
            .filter(|p| same_specialization(&p.specialization, specialization))
            .cloned()
            .collect()
    }

    fn specializations(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for profile in &self.profiles {
            if !seen.iter().any(|s| same_specialization(s, &profile.specialization)) {
                seen.push(profile.specialization.trim().to_string());
            }
        }
        seen
    }
}

impl CourseRepository for InMemoryCatalog {
    fn all_courses(&self) -> Vec<Course> {
        self.courses.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{course, profile};

    #[test]
    fn test_builtin_catalog_loads_and_validates() {
        let catalog = InMemoryCatalog::builtin().unwrap();
        assert_eq!(catalog.profiles().len(), 20);
        assert_eq!(catalog.courses().len(), 28);
        assert!(catalog.profiles().iter().all(|p| p.validate().is_ok()));
        assert!(catalog.courses().iter().all(|c| c.validate().is_ok()));
    }

    #[test]
    fn test_builtin_catalog_has_paid_and_free_courses() {
        let courses = InMemoryCatalog::builtin_courses().unwrap();
        let free = courses.iter().filter(|c| c.is_free()).count();
        assert_eq!(free, 12);
        assert!(courses
            .iter()
            .filter(|c| !c.is_free())
            .all(|c| c.price == Some(49.0)));
    }

    #[test]
    fn test_specializations_in_first_seen_order() {
        let catalog = InMemoryCatalog::builtin().unwrap();
        assert_eq!(
            catalog.specializations(),
            vec!["AI", "Web Development", "Cybersecurity", "Data Science"]
        );
    }

    #[test]
    fn test_profiles_for_is_case_insensitive() {
        let catalog = InMemoryCatalog::new(
            vec![
                profile("A", "python", "Data Science"),
                profile("B", "rust", "Backend"),
                profile("C", "sql", "data science"),
            ],
            vec![],
        );
        let names: Vec<String> = catalog
            .profiles_for(" DATA SCIENCE")
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["A", "C"]);
        assert!(catalog.profiles_for("Astronomy").is_empty());
    }

    #[test]
    fn test_course_queries() {
        let catalog = InMemoryCatalog::new(
            vec![],
            vec![
                course("Spark", "spark", "Data Science", 4.8),
                course("React", "react", "Web Development", 4.9),
            ],
        );
        assert_eq!(catalog.courses_matching("AI", &SkillSet::parse("react")).len(), 1);
        assert_eq!(catalog.find_by_name("Spark").map(|c| c.skill), Some("spark".to_string()));
        assert_eq!(catalog.find_by_name(" spark ").map(|c| c.name), Some("Spark".to_string()));
        assert!(catalog.find_by_name("Hadoop").is_none());
    }
}
