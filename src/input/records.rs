//! Catalog record types: reference profiles and courses

use crate::error::{AdvisorError, Result};
use crate::processing::skills::SkillSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A working professional used as a comparison point for one specialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceProfile {
    pub name: String,
    pub skills: SkillSet,
    pub specialization: String,
    pub experience_years: u32,
    pub company: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "Beginner"),
            Difficulty::Intermediate => write!(f, "Intermediate"),
            Difficulty::Advanced => write!(f, "Advanced"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    /// Primary skill the course teaches.
    pub skill: String,
    pub specialization: String,
    pub platform: String,
    pub url: String,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    pub description: String,
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl Course {
    /// Text the content ranker vectorizes: description followed by the skill tag.
    pub fn combined_features(&self) -> String {
        format!("{} {}", self.description, self.skill)
    }

    pub fn normalized_skill(&self) -> Option<String> {
        SkillSet::normalize_token(&self.skill)
    }

    /// Row filter shared by the heuristic ranker and catalog queries:
    /// same specialization, or teaches one of the given skills.
    pub fn matches(&self, specialization: &str, skills: &SkillSet) -> bool {
        same_specialization(&self.specialization, specialization)
            || self
                .normalized_skill()
                .map(|skill| skills.contains(&skill))
                .unwrap_or(false)
    }

    /// A course without a price, or priced at zero, is a free resource.
    pub fn is_free(&self) -> bool {
        self.price.map_or(true, |price| price == 0.0)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AdvisorError::InvalidInput("Course name is empty".to_string()));
        }
        if !self.rating.is_finite() || !(0.0..=5.0).contains(&self.rating) {
            return Err(AdvisorError::InvalidInput(format!(
                "Course '{}' has rating {} outside 0.0-5.0",
                self.name, self.rating
            )));
        }
        if let Some(price) = self.price {
            if !price.is_finite() || price < 0.0 {
                return Err(AdvisorError::InvalidInput(format!(
                    "Course '{}' has negative price {}",
                    self.name, price
                )));
            }
        }
        Ok(())
    }
}

impl ReferenceProfile {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AdvisorError::InvalidInput("Profile name is empty".to_string()));
        }
        if self.specialization.trim().is_empty() {
            return Err(AdvisorError::InvalidInput(format!(
                "Profile '{}' has no specialization",
                self.name
            )));
        }
        Ok(())
    }
}

/// Specialization tags compare trimmed and case-insensitively.
pub fn same_specialization(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// Index of the course called `name`: exact match first, then trimmed and
/// case-insensitive.
pub fn position_by_name(courses: &[Course], name: &str) -> Option<usize> {
    courses.iter().position(|c| c.name == name).or_else(|| {
        let wanted = name.trim();
        courses
            .iter()
            .position(|c| c.name.trim().eq_ignore_ascii_case(wanted))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::course;

    #[test]
    fn test_course_matches_specialization_or_skill() {
        let spark = course("Big Data with Apache Spark", "Spark", "Data Science", 4.8);
        let missing = SkillSet::parse("spark, hadoop");

        assert!(spark.matches("data science", &SkillSet::new()));
        assert!(spark.matches("AI", &missing));
        assert!(!spark.matches("AI", &SkillSet::parse("keras")));
    }

    #[test]
    fn test_rating_validation() {
        assert!(course("A", "x", "AI", 4.9).validate().is_ok());
        assert!(course("A", "x", "AI", 5.1).validate().is_err());
        assert!(course("A", "x", "AI", -0.1).validate().is_err());
        assert!(course("A", "x", "AI", f64::NAN).validate().is_err());
    }

    #[test]
    fn test_rating_serializes_without_widening_noise() {
        let value = serde_json::to_value(course("A", "x", "AI", 4.9)).unwrap();
        assert_eq!(value["rating"], serde_json::json!(4.9));
    }

    #[test]
    fn test_free_when_unpriced_or_zero() {
        let mut c = course("A", "x", "AI", 4.5);
        assert!(c.is_free());
        c.price = Some(0.0);
        assert!(c.is_free());
        c.price = Some(49.0);
        assert!(!c.is_free());
    }

    #[test]
    fn test_position_by_name_prefers_exact() {
        let courses = vec![course("spark", "a", "AI", 4.0), course("Spark", "b", "AI", 4.0)];
        assert_eq!(position_by_name(&courses, "Spark"), Some(1));
        assert_eq!(position_by_name(&courses, "  SPARK "), Some(0));
        assert_eq!(position_by_name(&courses, "Hadoop"), None);
    }

    #[test]
    fn test_combined_features() {
        let c = course("ML", "machine learning", "AI", 4.8);
        assert_eq!(c.combined_features(), "Learn machine learning machine learning");
    }

    #[test]
    fn test_profile_deserializes_delimited_skills() {
        let json = r#"{
            "name": "Daniel Lee",
            "skills": "python,r,statistics",
            "specialization": "Data Science",
            "experience_years": 7,
            "company": "Facebook"
        }"#;
        let profile: ReferenceProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.skills.len(), 3);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_negative_experience_rejected_by_type() {
        let json = r#"{
            "name": "X", "skills": "a", "specialization": "AI",
            "experience_years": -1, "company": "Y"
        }"#;
        assert!(serde_json::from_str::<ReferenceProfile>(json).is_err());
    }
}
