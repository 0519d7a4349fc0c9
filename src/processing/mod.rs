//! Skill comparison, gap aggregation and course ranking

pub mod assembler;
pub mod comparator;
pub mod content_ranker;
pub mod engine;
pub mod gap;
pub mod heuristic_ranker;
pub mod learning_path;
pub mod skills;
pub mod tfidf;

pub use assembler::{CourseRecommendation, RecommendationResult, ScoreBasis, SimilarCourses};
pub use engine::{RecommendationEngine, UserQuery};
pub use skills::SkillSet;
