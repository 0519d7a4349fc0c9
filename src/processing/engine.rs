//! Recommendation engine: the entry point over catalog and processing stages

use crate::config::{RankingConfig, RankingStrategy};
use crate::error::{AdvisorError, Result};
use crate::input::catalog::{CourseRepository, ProfileRepository};
use crate::processing::assembler::{assemble, RecommendationResult, SimilarCourses};
use crate::processing::comparator::compare_cohort;
use crate::processing::content_ranker::{course_not_found, CacheStats, ContentSimilarityRanker};
use crate::processing::gap::aggregate_gap;
use crate::processing::heuristic_ranker::{rank_by_access, rank_by_rating};
use crate::processing::learning_path::SkillGuide;
use crate::processing::skills::SkillSet;
use log::{debug, info};

/// A single request: the user's skills and the specialization they target.
#[derive(Debug, Clone, PartialEq)]
pub struct UserQuery {
    pub skills: SkillSet,
    pub specialization: String,
    pub experience_years: Option<u32>,
}

impl UserQuery {
    pub fn new(skills: &str, specialization: &str) -> Self {
        Self {
            skills: SkillSet::parse(skills),
            specialization: specialization.trim().to_string(),
            experience_years: None,
        }
    }

    pub fn with_experience(mut self, years: u32) -> Self {
        self.experience_years = Some(years);
        self
    }
}

pub struct RecommendationEngine {
    profiles: Box<dyn ProfileRepository>,
    courses: Box<dyn CourseRepository>,
    ranking: RankingConfig,
    content_ranker: ContentSimilarityRanker,
    skill_guide: SkillGuide,
}

impl RecommendationEngine {
    pub fn new(
        profiles: Box<dyn ProfileRepository>,
        courses: Box<dyn CourseRepository>,
        ranking: RankingConfig,
    ) -> Result<Self> {
        if ranking.top_n == 0 {
            return Err(AdvisorError::Configuration(
                "ranking.top_n must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            profiles,
            courses,
            content_ranker: ContentSimilarityRanker::new(ranking.cache_capacity)?,
            ranking,
            skill_guide: SkillGuide::builtin()?,
        })
    }

    pub fn with_skill_guide(mut self, guide: SkillGuide) -> Self {
        self.skill_guide = guide;
        self
    }

    pub fn ranking(&self) -> &RankingConfig {
        &self.ranking
    }

    pub fn skill_guide(&self) -> &SkillGuide {
        &self.skill_guide
    }

    pub fn profiles(&self) -> &dyn ProfileRepository {
        self.profiles.as_ref()
    }

    pub fn courses(&self) -> &dyn CourseRepository {
        self.courses.as_ref()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.content_ranker.cache_stats()
    }

    /// Compare `user_skills` (comma-separated) against the specialization's
    /// cohort and recommend courses with the configured strategy.
    pub fn recommend(&self, user_skills: &str, specialization: &str) -> Result<RecommendationResult> {
        self.recommend_for(&UserQuery::new(user_skills, specialization))
    }

    pub fn recommend_for(&self, query: &UserQuery) -> Result<RecommendationResult> {
        self.recommend_with(query, self.ranking.strategy)
    }

    pub fn recommend_with(&self, query: &UserQuery, strategy: RankingStrategy) -> Result<RecommendationResult> {
        let profiles = self.profiles.profiles_for(&query.specialization);
        if profiles.is_empty() {
            info!("No reference profiles for specialization '{}'", query.specialization);
        }

        let comparisons = compare_cohort(&query.skills, &profiles);
        let gap = aggregate_gap(&query.skills, &profiles);

        let recommendations = match strategy {
            RankingStrategy::Heuristic => {
                let candidates = self
                    .courses
                    .courses_matching(&query.specialization, &gap.missing_skills);
                rank_by_rating(&candidates, &query.specialization, &gap.missing_skills, self.ranking.top_n)
            }
            RankingStrategy::Content => {
                let corpus = self.courses.all_courses();
                self.content_ranker
                    .rank_for_skills(&corpus, &gap.missing_skills, self.ranking.top_n)
            }
        };

        // Paid and free lists are always ranked by rating.
        let candidates = self
            .courses
            .courses_matching(&query.specialization, &gap.missing_skills);
        let access = rank_by_access(&candidates, &query.specialization, &gap.missing_skills, self.ranking.top_n);

        let learning_path = self.skill_guide.learning_path(&gap.missing_skills);

        info!(
            "Recommendation for '{}' ({}): {} profiles, {} missing skills, {} courses ({} paid, {} free)",
            query.specialization,
            strategy,
            comparisons.len(),
            gap.missing_skills.len(),
            recommendations.len(),
            access.paid.len(),
            access.free.len()
        );

        Ok(assemble(
            &query.specialization,
            strategy,
            comparisons,
            &gap,
            recommendations,
            access,
            learning_path,
        ))
    }

    /// The `n` courses most similar in content to `course_name`.
    pub fn similar_courses(&self, course_name: &str, n: usize) -> Result<SimilarCourses> {
        if n == 0 {
            return Err(AdvisorError::InvalidInput(
                "Number of similar courses must be at least 1".to_string(),
            ));
        }

        let corpus = self.courses.all_courses();
        let target = self
            .courses
            .find_by_name(course_name)
            .ok_or_else(|| course_not_found(&corpus, course_name))?;

        debug!("Searching {} courses for neighbours of '{}'", corpus.len(), target.name);
        self.content_ranker.rank_similar(&corpus, &target.name, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::catalog::InMemoryCatalog;
    use crate::processing::assembler::ScoreBasis;

    fn engine(strategy: RankingStrategy) -> RecommendationEngine {
        let catalog = InMemoryCatalog::builtin().unwrap();
        let ranking = RankingConfig {
            strategy,
            ..RankingConfig::default()
        };
        RecommendationEngine::new(Box::new(catalog.clone()), Box::new(catalog), ranking).unwrap()
    }

    #[test]
    fn test_recommend_data_science() {
        let result = engine(RankingStrategy::Heuristic)
            .recommend("python, sql", "Data Science")
            .unwrap();

        assert_eq!(result.profile_comparisons.len(), 5);
        assert_eq!(result.profile_comparisons[0].name, "Daniel Lee");
        assert_eq!(result.profile_comparisons[0].similarity_score, 33.3);
        assert!(!result.missing_skills.contains(&"python".to_string()));
        assert!(result.missing_skills.contains(&"spark".to_string()));

        let names: Vec<&str> = result
            .course_recommendations
            .iter()
            .map(|r| r.course.name.as_str())
            .collect();
        // "deep learning" is a gap skill, so AI courses compete; 4.9 ties keep catalog order.
        assert_eq!(
            names,
            vec![
                "Deep Learning Specialization",
                "Statistical Learning",
                "TensorFlow 2.0 Complete Course"
            ]
        );
        assert!(result.course_recommendations.iter().all(|r| r.score_basis == ScoreBasis::Rating));
        assert_eq!(result.learning_path.len(), result.missing_skills.len());
    }

    #[test]
    fn test_recommend_splits_paid_and_free() {
        let result = engine(RankingStrategy::Content)
            .recommend("python, sql", "Data Science")
            .unwrap();

        let paid: Vec<&str> = result.paid_courses.iter().map(|r| r.course.name.as_str()).collect();
        let free: Vec<&str> = result.free_courses.iter().map(|r| r.course.name.as_str()).collect();
        assert_eq!(
            paid,
            vec!["Deep Learning Specialization", "Statistical Learning", "Machine Learning"]
        );
        assert_eq!(
            free,
            vec![
                "TensorFlow 2.0 Complete Course",
                "Data Science for Beginners",
                "Practical Machine Learning"
            ]
        );
        assert!(result.paid_courses.iter().all(|r| r.course.price == Some(49.0)));
        assert!(result.free_courses.iter().all(|r| r.course.is_free()));
        assert!(result
            .free_courses
            .windows(2)
            .all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_unknown_specialization_is_empty_not_error() {
        let result = engine(RankingStrategy::Heuristic)
            .recommend("python", "Astronomy")
            .unwrap();
        assert!(result.profile_comparisons.is_empty());
        assert!(result.missing_skills.is_empty());
        assert!(result.course_recommendations.is_empty());
        assert!(result.paid_courses.is_empty() && result.free_courses.is_empty());
        assert!(result.learning_path.is_empty());
    }

    #[test]
    fn test_recommend_is_idempotent() {
        let engine = engine(RankingStrategy::Content);
        let first = engine.recommend("python", "AI").unwrap();
        let second = engine.recommend("python", "AI").unwrap();
        assert_eq!(first, second);
        assert_eq!(engine.cache_stats().entries, 1);
    }

    #[test]
    fn test_content_strategy_scores_by_similarity() {
        let result = engine(RankingStrategy::Heuristic)
            .recommend_with(&UserQuery::new("python", "Cybersecurity"), RankingStrategy::Content)
            .unwrap();
        assert_eq!(result.strategy, RankingStrategy::Content);
        assert!(!result.course_recommendations.is_empty());
        assert!(result
            .course_recommendations
            .iter()
            .all(|r| r.score_basis == ScoreBasis::Similarity && r.score > 0.0));
    }

    #[test]
    fn test_similar_courses() {
        let similar = engine(RankingStrategy::Heuristic)
            .similar_courses("Machine Learning", 3)
            .unwrap();
        assert_eq!(similar.target, "Machine Learning");
        assert_eq!(similar.recommendations.len(), 3);
        assert!(similar
            .recommendations
            .iter()
            .all(|r| r.course.name != "Machine Learning"));
    }

    #[test]
    fn test_similar_courses_reports_catalog_name() {
        let similar = engine(RankingStrategy::Heuristic)
            .similar_courses("  statistical LEARNING ", 2)
            .unwrap();
        assert_eq!(similar.target, "Statistical Learning");
        assert!(similar
            .recommendations
            .iter()
            .all(|r| r.course.name != "Statistical Learning"));
    }

    #[test]
    fn test_similar_courses_unknown() {
        let err = engine(RankingStrategy::Heuristic)
            .similar_courses("Machine Lerning", 3)
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.suggestion(), Some("Machine Learning"));
    }

    #[test]
    fn test_zero_top_n_rejected() {
        let catalog = InMemoryCatalog::default();
        let ranking = RankingConfig {
            top_n: 0,
            ..RankingConfig::default()
        };
        assert!(RecommendationEngine::new(Box::new(catalog.clone()), Box::new(catalog), ranking).is_err());
    }
}
