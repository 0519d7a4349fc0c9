//! Result assembly: the read-only projection handed to formatters

use crate::config::RankingStrategy;
use crate::input::records::Course;
use crate::processing::comparator::ProfileComparison;
use crate::processing::gap::SkillGap;
use crate::processing::learning_path::LearningStep;
use serde::{Deserialize, Serialize};

/// What a recommendation's score measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBasis {
    /// Cosine similarity as a percentage, 0-100.
    Similarity,
    /// The course's own rating, 0-5.
    Rating,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecommendation {
    #[serde(flatten)]
    pub course: Course,
    pub score: f64,
    pub score_basis: ScoreBasis,
}

impl CourseRecommendation {
    pub fn by_rating(course: Course) -> Self {
        let score = course.rating;
        Self {
            course,
            score,
            score_basis: ScoreBasis::Rating,
        }
    }

    pub fn by_similarity(course: Course, percent: f64) -> Self {
        Self {
            course,
            score: percent,
            score_basis: ScoreBasis::Similarity,
        }
    }
}

/// Rating-ranked courses split by whether they cost anything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessSplit {
    pub paid: Vec<CourseRecommendation>,
    pub free: Vec<CourseRecommendation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub specialization: String,
    pub strategy: RankingStrategy,
    pub missing_skills: Vec<String>,
    pub profile_comparisons: Vec<ProfileComparison>,
    pub course_recommendations: Vec<CourseRecommendation>,
    pub paid_courses: Vec<CourseRecommendation>,
    pub free_courses: Vec<CourseRecommendation>,
    pub learning_path: Vec<LearningStep>,
}

impl RecommendationResult {
    pub fn has_gaps(&self) -> bool {
        !self.missing_skills.is_empty()
    }

    /// Best-matching reference profile, if any were compared.
    pub fn closest_profile(&self) -> Option<&ProfileComparison> {
        self.profile_comparisons
            .iter()
            .max_by(|a, b| a.similarity_score.total_cmp(&b.similarity_score))
    }
}

/// Courses most similar to a catalog course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarCourses {
    pub target: String,
    pub recommendations: Vec<CourseRecommendation>,
}

pub fn assemble(
    specialization: &str,
    strategy: RankingStrategy,
    comparisons: Vec<ProfileComparison>,
    gap: &SkillGap,
    course_recommendations: Vec<CourseRecommendation>,
    access: AccessSplit,
    learning_path: Vec<LearningStep>,
) -> RecommendationResult {
    RecommendationResult {
        specialization: specialization.trim().to_string(),
        strategy,
        missing_skills: gap.missing_skills.to_vec(),
        profile_comparisons: comparisons,
        course_recommendations,
        paid_courses: access.paid,
        free_courses: access.free,
        learning_path,
    }
}
